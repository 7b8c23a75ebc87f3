use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct SaveUserRequest {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    pub email: String,
    pub date_of_birth: DateTime<Utc>,
}
