use crate::application::user_service::UserService;
use crate::domain::error::DomainError;
use crate::presentation::dto::SaveUserRequest;
use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, HttpResponse, Scope, get, post, web};
use tracing::info;
use uuid::Uuid;

pub fn scope() -> Scope {
    web::scope("")
        .app_data(web::JsonConfig::default().error_handler(json_decode_error))
        .app_data(web::PathConfig::default().error_handler(path_decode_error))
        .service(save_user)
        .service(get_user)
}

#[post("/save")]
async fn save_user(
    service: web::Data<UserService>,
    payload: web::Json<SaveUserRequest>,
) -> Result<HttpResponse, DomainError> {
    let user = service.save_user(payload.into_inner()).await?;

    info!(user_id = %user.id, "user saved");

    Ok(HttpResponse::Created().json(user))
}

#[get("/{id}")]
async fn get_user(
    service: web::Data<UserService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, DomainError> {
    let user = service.get_user(path.into_inner()).await?;

    info!(user_id = %user.id, "user retrieved");

    Ok(HttpResponse::Ok().json(user))
}

fn json_decode_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    DomainError::Decode(err.to_string()).into()
}

fn path_decode_error(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    DomainError::Decode(err.to_string()).into()
}
