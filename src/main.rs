mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use tracing::{error, info};

use crate::application::user_service::UserService;
use crate::data::user_repository::PostgresUserRepository;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::database::create_pool;
use crate::infrastructure::logging::init_logging;
use crate::presentation::handlers;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_logging();

    let config = AppConfig::from_env().expect("invalid configuration");

    let pool = match create_pool(&config.database_url()).await {
        Ok(pool) => pool,
        Err(err) => {
            error!("could not connect to the database: {}", err);
            std::process::exit(1);
        }
    };

    let user_repo = Arc::new(PostgresUserRepository::new(pool));
    let user_service = UserService::new(user_repo);

    info!(port = config.app_port, "server is listening");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(user_service.clone()))
            .service(handlers::user::scope())
    })
    .bind(("0.0.0.0", config.app_port))?
    .run()
    .await
}
