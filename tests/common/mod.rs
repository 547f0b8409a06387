#![allow(dead_code)]

use biztime::app_state::AppState;
use biztime::config::Config;
use biztime::database::models::{companies, company_industries, industries, invoices};
use actix_web::web;
use chrono::NaiveDate;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, Transaction};

pub const BODY_LIMIT: usize = 64 * 1024;

/// Builds the full route table on top of the given state, or on top of a
/// bare connection.
macro_rules! app {
    (state: $state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(biztime::api::middleware::RequestId)
                .configure(|cfg| biztime::api::configure(cfg, &$state))
                .default_service(actix_web::web::to(biztime::api::not_found)),
        )
        .await
    };
    ($db:expr) => {
        app!(state: common::data($db))
    };
}
pub(crate) use app;

pub fn mock() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
}

pub fn state(db: DatabaseConnection) -> AppState {
    AppState {
        db,
        config: Config {
            host: "127.0.0.1".to_string(),
            port: 3000,
            database_url: "postgres://localhost/biztime_test".to_string(),
            max_body_bytes: Some(BODY_LIMIT),
        },
    }
}

pub fn data(db: DatabaseConnection) -> web::Data<AppState> {
    web::Data::new(state(db))
}

/// Drains every statement the mocked connection has seen so far.
pub fn transaction_log(state: &web::Data<AppState>) -> Vec<Transaction> {
    match &state.db {
        DatabaseConnection::MockDatabaseConnection(conn) => {
            DatabaseConnection::MockDatabaseConnection(conn.clone()).into_transaction_log()
        }
        _ => panic!("Not mock connection"),
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn peanut() -> companies::Model {
    companies::Model {
        code: "Peanut".to_string(),
        name: "Peanuts International".to_string(),
        description: Some("Charley Brown Thingy".to_string()),
        slug: "peanuts-international".to_string(),
    }
}

pub fn invoice(id: i32, paid: bool, paid_date: Option<NaiveDate>) -> invoices::Model {
    invoices::Model {
        id,
        comp_code: "Peanut".to_string(),
        amt: 100.0,
        paid,
        add_date: date(2025, 4, 1),
        paid_date,
    }
}

pub fn industry(code: &str, name: &str) -> industries::Model {
    industries::Model {
        code: code.to_string(),
        industry: name.to_string(),
    }
}

pub fn link(industry_code: &str, comp_code: &str) -> company_industries::Model {
    company_industries::Model {
        industry_code: industry_code.to_string(),
        comp_code: comp_code.to_string(),
    }
}
