use utoipa::OpenApi;

use crate::api::{companies, helpers, industries, invoices};
use crate::database::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Companies
        companies::get_companies,
        companies::get_company,
        companies::create_company,
        companies::update_company,
        companies::delete_company,
        // Invoices
        invoices::get_invoices,
        invoices::get_invoice,
        invoices::create_invoice,
        invoices::update_invoice,
        invoices::delete_invoice,
        invoices::get_company_invoices,
        // Industries
        industries::get_industries,
        industries::create_industry,
        industries::associate_company,
    ),
    components(
        schemas(
            // --- Models ---
            models::companies::Model,
            models::invoices::Model,
            models::industries::Model,
            models::company_industries::Model,

            // --- DTOs & API Structs ---
            companies::CreateCompanyDto,
            companies::UpdateCompanyDto,
            companies::CompanyListResponse,
            companies::CompanyResponse,
            invoices::CreateInvoiceDto,
            invoices::UpdateInvoiceDto,
            invoices::InvoiceListResponse,
            invoices::InvoiceResponse,
            invoices::CompanyInvoicesResponse,
            industries::CreateIndustryDto,
            industries::AssociateCompanyDto,
            industries::IndustrySummary,
            industries::IndustryListResponse,
            industries::IndustryResponse,
            industries::AssociationResponse,
            helpers::StatusResponse,
        )
    ),
    tags(
        (name = "Companies", description = "Company management endpoints"),
        (name = "Invoices", description = "Invoice management endpoints"),
        (name = "Industries", description = "Industries and their company links")
    )
)]
pub struct ApiDoc;
