use crate::config::Config;
use sea_orm::DatabaseConnection;

/// Shared per-app state. Handed to actix as `web::Data`, which already
/// wraps it in an `Arc`.
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Config,
}
