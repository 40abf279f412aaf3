use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Client {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub lastvisit: Option<NaiveDate>,
    pub preferred_employee: Option<String>,
    pub notes: Option<String>,
}
