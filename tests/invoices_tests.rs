//! HTTP tests for the /invoices routes, backed by a mocked Postgres.

mod common;

use actix_web::{http::StatusCode, test};
use biztime::database::models::{companies, invoices};
use common::{app, date, invoice, mock, peanut};
use sea_orm::MockExecResult;
use serde_json::{Value, json};

#[actix_web::test]
async fn lists_invoices() {
    let db = mock()
        .append_query_results([vec![invoice(1, false, None)]])
        .into_connection();
    let app = app!(db);

    let req = test::TestRequest::get().uri("/invoices").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "invoices": [{
                "id": 1,
                "comp_code": "Peanut",
                "amt": 100.0,
                "paid": false,
                "add_date": "2025-04-01",
                "paid_date": null
            }]
        })
    );
}

#[actix_web::test]
async fn gets_single_invoice() {
    let db = mock()
        .append_query_results([vec![invoice(7, true, Some(date(2025, 4, 3)))]])
        .into_connection();
    let app = app!(db);

    let req = test::TestRequest::get().uri("/invoices/7").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["invoice"]["id"], 7);
    assert_eq!(body["invoice"]["paid_date"], "2025-04-03");
}

#[actix_web::test]
async fn missing_invoice_is_404() {
    let db = mock()
        .append_query_results([Vec::<invoices::Model>::new()])
        .into_connection();
    let app = app!(db);

    let req = test::TestRequest::get().uri("/invoices/0").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Can't find invoice with id of 0");
}

#[actix_web::test]
async fn non_numeric_id_is_not_found() {
    let db = mock().into_connection();
    let app = app!(db);

    let req = test::TestRequest::get().uri("/invoices/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Not Found");
}

#[actix_web::test]
async fn creates_invoice() {
    let created = invoices::Model {
        amt: 200.0,
        ..invoice(2, false, None)
    };
    let db = mock().append_query_results([vec![created]]).into_connection();
    let app = app!(db);

    let req = test::TestRequest::post()
        .uri("/invoices")
        .set_json(json!({
            "comp_code": "Peanut",
            "amt": 200,
            "paid": false,
            "add_date": "2025-04-01",
            "paid_date": null
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "invoice": {
                "id": 2,
                "comp_code": "Peanut",
                "amt": 200.0,
                "paid": false,
                "add_date": "2025-04-01",
                "paid_date": null
            }
        })
    );
}

#[actix_web::test]
async fn updates_amount_and_keeps_paid_state() {
    let updated = invoices::Model {
        amt: 150.0,
        ..invoice(1, false, None)
    };
    let db = mock()
        .append_query_results([vec![invoice(1, false, None)]])
        .append_query_results([vec![updated]])
        .into_connection();
    let app = app!(db);

    let req = test::TestRequest::put()
        .uri("/invoices/1")
        .set_json(json!({ "amt": 150 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["invoice"]["amt"], 150.0);
    assert_eq!(body["invoice"]["paid"], false);
    assert_eq!(body["invoice"]["paid_date"], Value::Null);
}

#[actix_web::test]
async fn paying_an_invoice_sends_todays_date() {
    let today = chrono::Utc::now().date_naive();
    let updated = invoice(1, true, Some(today));
    let db = mock()
        .append_query_results([vec![invoice(1, false, None)]])
        .append_query_results([vec![updated]])
        .into_connection();
    let state = common::data(db);
    let app = app!(state: state);

    let req = test::TestRequest::put()
        .uri("/invoices/1")
        .set_json(json!({ "amt": 100, "paid": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["invoice"]["paid"], true);
    assert_eq!(body["invoice"]["paid_date"], today.to_string());

    let log = common::transaction_log(&state);
    let update = log
        .iter()
        .flat_map(|txn| txn.statements())
        .find(|stmt| stmt.sql.starts_with("UPDATE \"invoices\""))
        .expect("update statement");
    assert!(format!("{:?}", update.values).contains(&today.to_string()));
}

#[actix_web::test]
async fn unpaying_an_invoice_clears_paid_date() {
    let paid_on = date(2025, 4, 2);
    let db = mock()
        .append_query_results([vec![invoice(1, true, Some(paid_on))]])
        .append_query_results([vec![invoice(1, false, None)]])
        .into_connection();
    let state = common::data(db);
    let app = app!(state: state);

    let req = test::TestRequest::put()
        .uri("/invoices/1")
        .set_json(json!({ "amt": 100, "paid": false }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["invoice"]["paid"], false);
    assert_eq!(body["invoice"]["paid_date"], Value::Null);

    // The old paid date is not written back.
    let log = common::transaction_log(&state);
    let update = log
        .iter()
        .flat_map(|txn| txn.statements())
        .find(|stmt| stmt.sql.starts_with("UPDATE \"invoices\""))
        .expect("update statement");
    assert!(!format!("{:?}", update.values).contains(&paid_on.to_string()));
}

#[actix_web::test]
async fn invoice_deleted_before_update_is_404() {
    // Lookup finds the row, but the UPDATE ... RETURNING comes back empty.
    let db = mock()
        .append_query_results([vec![invoice(1, false, None)]])
        .append_query_results([Vec::<invoices::Model>::new()])
        .into_connection();
    let app = app!(db);

    let req = test::TestRequest::put()
        .uri("/invoices/1")
        .set_json(json!({ "amt": 150, "paid": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Can't find invoice with id of 1");
}

#[actix_web::test]
async fn update_of_missing_invoice_is_404() {
    let db = mock()
        .append_query_results([Vec::<invoices::Model>::new()])
        .into_connection();
    let app = app!(db);

    let req = test::TestRequest::put()
        .uri("/invoices/0")
        .set_json(json!({ "amt": 150 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn deletes_invoice() {
    let db = mock()
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();
    let state = common::data(db);
    let app = app!(state: state);

    let req = test::TestRequest::delete().uri("/invoices/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "status": "DELETED!" }));

    let log = common::transaction_log(&state);
    assert!(
        log.iter()
            .flat_map(|txn| txn.statements())
            .any(|stmt| stmt.sql.starts_with("DELETE FROM \"invoices\""))
    );
}

#[actix_web::test]
async fn company_invoices_are_returned_together() {
    let db = mock()
        .append_query_results([vec![peanut()]])
        .append_query_results([vec![invoice(1, false, None), invoice(2, false, None)]])
        .into_connection();
    let app = app!(db);

    let req = test::TestRequest::get()
        .uri("/invoices/companies/Peanut")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["company"]["code"], "Peanut");
    assert_eq!(body["invoices"].as_array().map(Vec::len), Some(2));
}

#[actix_web::test]
async fn company_without_invoices_has_empty_list() {
    let db = mock()
        .append_query_results([vec![peanut()]])
        .append_query_results([Vec::<invoices::Model>::new()])
        .into_connection();
    let app = app!(db);

    let req = test::TestRequest::get()
        .uri("/invoices/companies/Peanut")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["invoices"], json!([]));
}

#[actix_web::test]
async fn company_invoices_for_unknown_company_is_404() {
    let db = mock()
        .append_query_results([Vec::<companies::Model>::new()])
        .into_connection();
    let app = app!(db);

    let req = test::TestRequest::get()
        .uri("/invoices/companies/nope")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Can't find company with code of nope");
}
