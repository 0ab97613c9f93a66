pub mod health_handler;
pub mod page_handler;
pub mod question_handler;

use actix_web::web;

use crate::errors::AppError;

pub use health_handler::{health_check, health_check_ready};
pub use page_handler::index;
pub use question_handler::generate_questions;

/// Registers every route plus JSON-shaped query errors.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(err.to_string()).into()
    }))
    .service(index)
    .service(health_check)
    .service(health_check_ready)
    .service(generate_questions);
}
