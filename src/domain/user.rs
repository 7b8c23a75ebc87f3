use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub date_of_birth: DateTime<Utc>,
}

impl User {
    pub fn new(name: String, email: String, date_of_birth: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            date_of_birth,
        }
    }
}
