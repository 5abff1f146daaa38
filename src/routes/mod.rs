// Route exports
pub mod errors;
pub mod foodtrucks;

use actix_web::web;

pub use errors::query_config;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(foodtrucks::health_check))
        .service(
            web::scope("/api")
                .configure(foodtrucks::configure),
        );
}
