use actix_web::{delete, get, post, put, web, HttpResponse};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, Set, Statement, Value,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    api::{
        helpers::{self, StatusResponse},
        validation::slugify,
    },
    app_state::AppState,
    database::models::companies,
    errors::AppError,
};

// --- DTOs (Data Transfer Objects) ---

#[derive(Deserialize, ToSchema, Clone)]
pub struct CreateCompanyDto {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Deserialize, ToSchema, Clone)]
pub struct UpdateCompanyDto {
    /// Replaces the company code when present and non-empty.
    pub code: Option<String>,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct CompanyListResponse {
    pub companies: Vec<companies::Model>,
}

#[derive(Serialize, ToSchema)]
pub struct CompanyResponse {
    pub company: companies::Model,
}

// --- Route Handlers ---

#[utoipa::path(
    get,
    path = "/companies",
    tag = "Companies",
    responses(
        (status = 200, description = "List all companies", body = CompanyListResponse)
    )
)]
#[get("")]
pub async fn get_companies(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let companies = companies::Entity::find()
        .order_by_asc(companies::Column::Code)
        .all(&data.db)
        .await?;
    Ok(HttpResponse::Ok().json(CompanyListResponse { companies }))
}

#[utoipa::path(
    get,
    path = "/companies/{code}",
    tag = "Companies",
    params(
        ("code" = String, Path, description = "Company code")
    ),
    responses(
        (status = 200, description = "Company found", body = CompanyResponse),
        (status = 404, description = "Company not found")
    )
)]
#[get("/{code}")]
pub async fn get_company(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let code = path.into_inner();
    let company = helpers::find_company(&code, &data.db).await?;
    Ok(HttpResponse::Ok().json(CompanyResponse { company }))
}

#[utoipa::path(
    post,
    path = "/companies",
    tag = "Companies",
    request_body = CreateCompanyDto,
    responses(
        (status = 201, description = "Company created successfully", body = CompanyResponse),
        (status = 500, description = "Duplicate code or name")
    )
)]
#[post("")]
pub async fn create_company(
    data: web::Data<AppState>,
    body: web::Json<CreateCompanyDto>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let slug = slugify(&body.name);

    let company = companies::ActiveModel {
        code: Set(body.code),
        name: Set(body.name),
        description: Set(body.description),
        slug: Set(slug),
    };

    let created = company.insert(&data.db).await?;
    log::info!("Created company {} ({})", created.code, created.slug);
    Ok(HttpResponse::Created().json(CompanyResponse { company: created }))
}

#[utoipa::path(
    put,
    path = "/companies/{code}",
    tag = "Companies",
    params(
        ("code" = String, Path, description = "Company code")
    ),
    request_body = UpdateCompanyDto,
    responses(
        (status = 200, description = "Company updated successfully", body = CompanyResponse),
        (status = 404, description = "Company not found")
    )
)]
#[put("/{code}")]
pub async fn update_company(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateCompanyDto>,
) -> Result<HttpResponse, AppError> {
    let code = path.into_inner();
    helpers::find_company(&code, &data.db).await?;

    let body = body.into_inner();
    let new_code = body
        .code
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| code.clone());

    // The primary key itself may change, so this goes through raw SQL
    // rather than an ActiveModel update. Slug stays as created.
    let updated = companies::Entity::find()
        .from_raw_sql(Statement::from_sql_and_values(
            data.db.get_database_backend(),
            r#"UPDATE companies SET code = $1, name = $2, description = $3
               WHERE code = $4
               RETURNING code, name, description, slug"#,
            [
                Value::from(new_code),
                Value::from(body.name),
                Value::from(body.description),
                Value::from(code.clone()),
            ],
        ))
        .one(&data.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Can't find company with code of {}", code)))?;

    log::info!("Updated company {} -> {}", code, updated.code);
    Ok(HttpResponse::Ok().json(CompanyResponse { company: updated }))
}

#[utoipa::path(
    delete,
    path = "/companies/{code}",
    tag = "Companies",
    params(
        ("code" = String, Path, description = "Company code")
    ),
    responses(
        (status = 200, description = "Delete issued; returned whether or not the company existed", body = StatusResponse)
    )
)]
#[delete("/{code}")]
pub async fn delete_company(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let code = path.into_inner();
    let result = companies::Entity::delete_by_id(code.clone())
        .exec(&data.db)
        .await?;

    log::info!("Deleted company {} (rows affected: {})", code, result.rows_affected);
    Ok(HttpResponse::Ok().json(StatusResponse::deleted()))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/companies")
            .service(get_companies)
            .service(get_company)
            .service(create_company)
            .service(update_company)
            .service(delete_company),
    );
}
