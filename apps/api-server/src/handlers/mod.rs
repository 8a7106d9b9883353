//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;
use board_core::DomainError;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| {
                tracing::debug!("Rejected request body: {}", err);
                AppError::from(DomainError::InvalidInput).into()
            }),
    )
    .service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list_posts))
                    .route("", web::post().to(posts::create_post))
                    .route("/{post_id}", web::get().to(posts::get_post))
                    .route("/{post_id}", web::put().to(posts::update_post))
                    .route("/{post_id}", web::delete().to(posts::delete_post)),
            ),
    );
}
