use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Body of `POST /clients` and `PUT /clients/{id}`. Update replaces every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ClientPayload {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub phone: String,
    pub lastvisit: Option<NaiveDate>,
    pub preferred_employee: Option<String>,
    pub notes: Option<String>,
}
