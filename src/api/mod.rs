pub mod companies;
pub mod docs;
pub mod helpers;
pub mod industries;
pub mod invoices;
pub mod middleware;
pub mod validation;

use actix_web::{web, HttpResponse};

use crate::{app_state::AppState, errors::AppError};

/// Registers the shared state, every resource scope and the extractor
/// configs that turn malformed input into `AppError` responses.
pub fn configure(cfg: &mut web::ServiceConfig, state: &web::Data<AppState>) {
    cfg.app_data(state.clone())
        .app_data(json_config(state.config.effective_max_body_bytes()))
        .app_data(path_config())
        .configure(companies::init_routes)
        .configure(invoices::init_routes)
        .configure(industries::init_routes);
}

pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| AppError::InvalidInput(err.to_string()).into())
}

// A path segment that fails to parse (e.g. a non-numeric invoice id)
// means no resource matched.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|_err, _req| AppError::NotFound("Not Found".to_string()).into())
}

/// Fallback for every unmatched route.
pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound("Not Found".to_string()))
}
