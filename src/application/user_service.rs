use std::sync::Arc;

use tracing::instrument;
use uuid::Uuid;

use crate::data::user_repository::UserRepository;
use crate::domain::{error::DomainError, user::User};
use crate::presentation::dto::SaveUserRequest;

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn save_user(&self, request: SaveUserRequest) -> Result<User, DomainError> {
        // A nil id is what decoders produce for an absent field; both get a fresh v4.
        let user = match request.id.filter(|id| !id.is_nil()) {
            Some(id) => User {
                id,
                name: request.name,
                email: request.email,
                date_of_birth: request.date_of_birth,
            },
            None => User::new(request.name, request.email, request.date_of_birth),
        };

        self.repo.insert(user).await
    }

    pub async fn get_user(&self, id: Uuid) -> Result<User, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::UserNotFound)
    }
}
