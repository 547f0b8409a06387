use std::collections::HashMap;

use actix_web::{get, post, web, HttpResponse};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    app_state::AppState,
    database::models::{company_industries, industries},
    errors::AppError,
};

// --- DTOs (Data Transfer Objects) ---

#[derive(Deserialize, ToSchema, Clone)]
pub struct CreateIndustryDto {
    pub code: String,
    pub industry: String,
}

#[derive(Deserialize, ToSchema, Clone)]
pub struct AssociateCompanyDto {
    pub comp_code: String,
}

/// An industry together with the codes of every company linked to it.
#[derive(Serialize, ToSchema, Debug, PartialEq, Eq)]
pub struct IndustrySummary {
    pub industry_code: String,
    pub industry: String,
    pub companies: Vec<String>,
}

#[derive(Serialize, ToSchema)]
pub struct IndustryListResponse {
    pub industries: Vec<IndustrySummary>,
}

#[derive(Serialize, ToSchema)]
pub struct IndustryResponse {
    pub industry: industries::Model,
}

#[derive(Serialize, ToSchema)]
pub struct AssociationResponse {
    pub association: company_industries::Model,
}

/// Attaches association rows to their industries. Industries without any
/// association get an empty list; associations pointing at an unknown
/// industry are dropped.
pub fn summarize(
    industries: Vec<industries::Model>,
    associations: Vec<company_industries::Model>,
) -> Vec<IndustrySummary> {
    let mut by_industry: HashMap<String, Vec<String>> = HashMap::new();
    for association in associations {
        by_industry
            .entry(association.industry_code)
            .or_default()
            .push(association.comp_code);
    }

    industries
        .into_iter()
        .map(|industry| {
            let mut companies = by_industry.remove(&industry.code).unwrap_or_default();
            companies.sort();
            IndustrySummary {
                industry_code: industry.code,
                industry: industry.industry,
                companies,
            }
        })
        .collect()
}

// --- Route Handlers ---

#[utoipa::path(
    get,
    path = "/industries/industries",
    tag = "Industries",
    responses(
        (status = 200, description = "All industries with their company codes", body = IndustryListResponse)
    )
)]
#[get("/industries")]
pub async fn get_industries(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let industries = industries::Entity::find()
        .order_by_asc(industries::Column::Code)
        .all(&data.db)
        .await?;
    let associations = company_industries::Entity::find().all(&data.db).await?;

    let industries = summarize(industries, associations);
    Ok(HttpResponse::Ok().json(IndustryListResponse { industries }))
}

#[utoipa::path(
    post,
    path = "/industries/industries",
    tag = "Industries",
    request_body = CreateIndustryDto,
    responses(
        (status = 201, description = "Industry created successfully", body = IndustryResponse)
    )
)]
#[post("/industries")]
pub async fn create_industry(
    data: web::Data<AppState>,
    body: web::Json<CreateIndustryDto>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let industry = industries::ActiveModel {
        code: Set(body.code),
        industry: Set(body.industry),
    };

    let created = industry.insert(&data.db).await?;
    log::info!("Created industry {}", created.code);
    Ok(HttpResponse::Created().json(IndustryResponse { industry: created }))
}

#[utoipa::path(
    post,
    path = "/industries/industries/{industry_code}/companies",
    tag = "Industries",
    params(
        ("industry_code" = String, Path, description = "Industry code")
    ),
    request_body = AssociateCompanyDto,
    responses(
        (status = 201, description = "Company linked to industry", body = AssociationResponse),
        (status = 500, description = "Duplicate link or unknown industry/company")
    )
)]
#[post("/industries/{industry_code}/companies")]
pub async fn associate_company(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<AssociateCompanyDto>,
) -> Result<HttpResponse, AppError> {
    let industry_code = path.into_inner();
    let association = company_industries::ActiveModel {
        industry_code: Set(industry_code),
        comp_code: Set(body.into_inner().comp_code),
    };

    let created = association.insert(&data.db).await?;
    log::info!(
        "Linked company {} to industry {}",
        created.comp_code,
        created.industry_code
    );
    Ok(HttpResponse::Created().json(AssociationResponse { association: created }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/industries")
            .service(get_industries)
            .service(create_industry)
            .service(associate_company),
    );
}
