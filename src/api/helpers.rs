use sea_orm::{DatabaseConnection, EntityTrait};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{database::models::companies, errors::AppError};

/// Acknowledgement returned by every DELETE endpoint.
#[derive(Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn deleted() -> Self {
        Self {
            status: "DELETED!".to_string(),
        }
    }
}

pub async fn find_company(
    code: &str,
    db: &DatabaseConnection,
) -> Result<companies::Model, AppError> {
    log::debug!("Looking up company with code: {}", code);

    companies::Entity::find_by_id(code.to_string())
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Can't find company with code of {}", code)))
}
