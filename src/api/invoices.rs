use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
    Set,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    api::helpers::{self, StatusResponse},
    app_state::AppState,
    database::models::{companies, invoices},
    errors::AppError,
};

// --- DTOs (Data Transfer Objects) ---

#[derive(Deserialize, ToSchema, Clone)]
pub struct CreateInvoiceDto {
    pub comp_code: String,
    pub amt: f64,
    /// Defaults to `false`.
    pub paid: Option<bool>,
    /// Defaults to today.
    pub add_date: Option<NaiveDate>,
    pub paid_date: Option<NaiveDate>,
}

#[derive(Deserialize, ToSchema, Clone)]
pub struct UpdateInvoiceDto {
    pub amt: f64,
    /// Keeps the current paid state when omitted.
    pub paid: Option<bool>,
}

#[derive(Serialize, ToSchema)]
pub struct InvoiceListResponse {
    pub invoices: Vec<invoices::Model>,
}

#[derive(Serialize, ToSchema)]
pub struct InvoiceResponse {
    pub invoice: invoices::Model,
}

#[derive(Serialize, ToSchema)]
pub struct CompanyInvoicesResponse {
    pub company: companies::Model,
    pub invoices: Vec<invoices::Model>,
}

/// Paid date after an update: stamped with `today` on the unpaid -> paid
/// edge, cleared whenever the invoice ends up unpaid, otherwise kept.
pub fn resolve_paid_date(
    was_paid: bool,
    current_paid_date: Option<NaiveDate>,
    now_paid: bool,
    today: NaiveDate,
) -> Option<NaiveDate> {
    match (was_paid, now_paid) {
        (false, true) => Some(today),
        (_, false) => None,
        (true, true) => current_paid_date,
    }
}

fn invoice_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Can't find invoice with id of {}", id))
}

// --- Route Handlers ---

#[utoipa::path(
    get,
    path = "/invoices",
    tag = "Invoices",
    responses(
        (status = 200, description = "List all invoices", body = InvoiceListResponse)
    )
)]
#[get("")]
pub async fn get_invoices(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let invoices = invoices::Entity::find()
        .order_by_asc(invoices::Column::Id)
        .all(&data.db)
        .await?;
    Ok(HttpResponse::Ok().json(InvoiceListResponse { invoices }))
}

#[utoipa::path(
    get,
    path = "/invoices/{id}",
    tag = "Invoices",
    params(
        ("id" = i32, Path, description = "Invoice ID")
    ),
    responses(
        (status = 200, description = "Invoice found", body = InvoiceResponse),
        (status = 404, description = "Invoice not found")
    )
)]
#[get("/{id}")]
pub async fn get_invoice(
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let invoice = invoices::Entity::find_by_id(id)
        .one(&data.db)
        .await?
        .ok_or_else(|| invoice_not_found(id))?;

    Ok(HttpResponse::Ok().json(InvoiceResponse { invoice }))
}

#[utoipa::path(
    post,
    path = "/invoices",
    tag = "Invoices",
    request_body = CreateInvoiceDto,
    responses(
        (status = 201, description = "Invoice created successfully", body = InvoiceResponse),
        (status = 500, description = "Unknown company or constraint violation")
    )
)]
#[post("")]
pub async fn create_invoice(
    data: web::Data<AppState>,
    body: web::Json<CreateInvoiceDto>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let invoice = invoices::ActiveModel {
        comp_code: Set(body.comp_code),
        amt: Set(body.amt),
        paid: Set(body.paid.unwrap_or(false)),
        add_date: Set(body
            .add_date
            .unwrap_or_else(|| chrono::Utc::now().date_naive())),
        paid_date: Set(body.paid_date),
        ..Default::default()
    };

    let created = invoice.insert(&data.db).await?;
    log::info!("Created invoice {} for {}", created.id, created.comp_code);
    Ok(HttpResponse::Created().json(InvoiceResponse { invoice: created }))
}

#[utoipa::path(
    put,
    path = "/invoices/{id}",
    tag = "Invoices",
    params(
        ("id" = i32, Path, description = "Invoice ID")
    ),
    request_body = UpdateInvoiceDto,
    responses(
        (status = 200, description = "Invoice updated successfully", body = InvoiceResponse),
        (status = 404, description = "Invoice not found")
    )
)]
#[put("/{id}")]
pub async fn update_invoice(
    data: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UpdateInvoiceDto>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let current = invoices::Entity::find_by_id(id)
        .one(&data.db)
        .await?
        .ok_or_else(|| invoice_not_found(id))?;

    let paid = body.paid.unwrap_or(current.paid);
    let paid_date = resolve_paid_date(
        current.paid,
        current.paid_date,
        paid,
        chrono::Utc::now().date_naive(),
    );

    let mut active_model = current.into_active_model();
    active_model.amt = Set(body.amt);
    active_model.paid = Set(paid);
    active_model.paid_date = Set(paid_date);

    // The row may have been deleted since the lookup above.
    let updated = active_model.update(&data.db).await.map_err(|e| match e {
        DbErr::RecordNotUpdated => invoice_not_found(id),
        other => AppError::from(other),
    })?;

    log::info!("Updated invoice {} (paid: {})", updated.id, updated.paid);
    Ok(HttpResponse::Ok().json(InvoiceResponse { invoice: updated }))
}

#[utoipa::path(
    delete,
    path = "/invoices/{id}",
    tag = "Invoices",
    params(
        ("id" = i32, Path, description = "Invoice ID")
    ),
    responses(
        (status = 200, description = "Delete issued; returned whether or not the invoice existed", body = StatusResponse)
    )
)]
#[delete("/{id}")]
pub async fn delete_invoice(
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let result = invoices::Entity::delete_by_id(id).exec(&data.db).await?;

    log::info!("Deleted invoice {} (rows affected: {})", id, result.rows_affected);
    Ok(HttpResponse::Ok().json(StatusResponse::deleted()))
}

#[utoipa::path(
    get,
    path = "/invoices/companies/{code}",
    tag = "Invoices",
    params(
        ("code" = String, Path, description = "Company code")
    ),
    responses(
        (status = 200, description = "Company with all of its invoices", body = CompanyInvoicesResponse),
        (status = 404, description = "Company not found")
    )
)]
#[get("/companies/{code}")]
pub async fn get_company_invoices(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let code = path.into_inner();
    let company = helpers::find_company(&code, &data.db).await?;

    let invoices = invoices::Entity::find()
        .filter(invoices::Column::CompCode.eq(company.code.clone()))
        .order_by_asc(invoices::Column::Id)
        .all(&data.db)
        .await?;

    Ok(HttpResponse::Ok().json(CompanyInvoicesResponse { company, invoices }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/invoices")
            .service(get_company_invoices)
            .service(get_invoices)
            .service(get_invoice)
            .service(create_invoice)
            .service(update_invoice)
            .service(delete_invoice),
    );
}
