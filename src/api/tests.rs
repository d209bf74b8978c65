use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web::Data};
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{Value, json};

use crate::db::AppState;
use crate::engine::clock::FixedClock;
use crate::routes::api_scope;
use crate::store::MemoryStore;

fn at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

fn state_at(now: NaiveDateTime) -> Data<AppState> {
    Data::new(AppState::new(
        Box::new(MemoryStore::new()),
        Arc::new(FixedClock(now)),
    ))
}

fn ada() -> Value {
    json!({
        "name": "Ada Lovelace",
        "email": "ada@company.com",
        "position": "Engineer",
        "department": "Information Technology",
        "startDate": "2024-01-01"
    })
}

#[actix_web::test]
async fn personnel_crud_roundtrip() {
    let app = test::init_service(
        App::new()
            .app_data(state_at(at(9, 0)))
            .service(api_scope("/api")),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/personnel")
        .set_json(ada())
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["startDate"], "01.01.2024");
    assert_eq!(created["status"], "active");

    let req = test::TestRequest::put()
        .uri(&format!("/api/personnel/{id}"))
        .set_json(json!({ "position": "Lead" }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["position"], "Lead");
    assert_eq!(updated["name"], "Ada Lovelace");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/personnel/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/personnel/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn missing_field_is_a_validation_error() {
    let app = test::init_service(
        App::new()
            .app_data(state_at(at(9, 0)))
            .service(api_scope("/api")),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/personnel")
        .set_json(json!({ "name": "Ada", "email": "ada@company.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "validation failed: position is required");
}

#[actix_web::test]
async fn check_in_conflict_then_check_out() {
    let state = state_at(at(9, 0));
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .service(api_scope("/api")),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/personnel")
        .set_json(ada())
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_str().unwrap().to_string();

    let check_in = || {
        test::TestRequest::post()
            .uri("/api/attendance/check-in")
            .set_json(json!({ "personnelId": id }))
            .to_request()
    };

    let resp = test::call_service(&app, check_in()).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let record: Value = test::read_body_json(resp).await;
    assert_eq!(record["personnelName"], "Ada Lovelace");
    assert_eq!(record["checkIn"], "09:00");
    assert!(record["checkOut"].is_null());

    let resp = test::call_service(&app, check_in()).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::get()
        .uri(&format!("/api/attendance/status/{id}"))
        .to_request();
    let status: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(status["checkedIn"], true);

    let req = test::TestRequest::post()
        .uri("/api/attendance/check-out")
        .set_json(json!({ "personnelId": id }))
        .to_request();
    let closed: Value = test::call_and_read_body_json(&app, req).await;
    // fixed clock: same minute as check-in
    assert_eq!(closed["checkOut"], "09:00");
    assert_eq!(closed["duration"], 0);

    let req = test::TestRequest::post()
        .uri("/api/attendance/check-out")
        .set_json(json!({ "personnelId": id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn check_in_for_unknown_person_is_not_found() {
    let app = test::init_service(
        App::new()
            .app_data(state_at(at(9, 0)))
            .service(api_scope("/api")),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/attendance/check-in")
        .set_json(json!({ "personnelId": "nobody" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn report_summary_and_csv_export() {
    let state = state_at(at(17, 30));
    {
        let mut store = state.store();
        let person = store
            .add_personnel(serde_json::from_value(ada()).unwrap())
            .unwrap();
        crate::engine::timesheet::check_in(&mut *store, &person.id, &person.name, at(9, 0))
            .unwrap();
        crate::engine::timesheet::check_out(&mut *store, &person.id, at(17, 30)).unwrap();
    }

    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .service(api_scope("/api")),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/reports/summary?department=Information%20Technology&startDate=01.03.2024")
        .to_request();
    let report: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(report["stats"]["totalMinutes"], 510);
    assert_eq!(report["stats"]["totalDays"], 1);
    assert_eq!(report["totalDuration"], "8h 30m");
    assert_eq!(report["byPersonnel"][0]["name"], "Ada Lovelace");

    let req = test::TestRequest::get()
        .uri("/api/reports/summary?department=Sales")
        .to_request();
    let report: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(report["records"], json!([]));
    assert_eq!(report["stats"]["avgMinutesPerDay"], 0.0);

    let req = test::TestRequest::get()
        .uri("/api/reports/attendance.csv")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let disposition = resp
        .headers()
        .get("content-disposition")
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(disposition.contains("attendance_report_05.03.2024.csv"));

    let body = test::read_body(resp).await;
    let text = std::str::from_utf8(&body).unwrap();
    assert!(text.starts_with('\u{feff}'));
    assert!(text.contains("Ada Lovelace,05.03.2024,09:00,17:30,8h 30m"));
}

#[actix_web::test]
async fn departments_are_seeded_on_first_list() {
    let app = test::init_service(
        App::new()
            .app_data(state_at(at(9, 0)))
            .service(api_scope("/api")),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/departments").to_request();
    let departments: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(departments.as_array().map(Vec::len), Some(5));

    let req = test::TestRequest::post()
        .uri("/api/departments")
        .set_json(json!({ "name": "Sales" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn delete_attendance_record_then_not_found() {
    let state = state_at(at(9, 0));
    let record_id = {
        let mut store = state.store();
        crate::engine::timesheet::check_in(&mut *store, "p1", "Ada", at(9, 0))
            .unwrap()
            .id
    };

    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .service(api_scope("/api")),
    )
    .await;

    let delete = || {
        test::TestRequest::delete()
            .uri(&format!("/api/attendance/{record_id}"))
            .to_request()
    };

    let resp = test::call_service(&app, delete()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(state.store().attendance().unwrap().is_empty());

    let resp = test::call_service(&app, delete()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn today_and_month_views_follow_the_clock() {
    let state = state_at(at(12, 0));
    {
        let mut store = state.store();
        let yesterday = NaiveDate::from_ymd_opt(2024, 3, 4)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let last_month = NaiveDate::from_ymd_opt(2024, 2, 28)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        crate::engine::timesheet::check_in(&mut *store, "p1", "Ada", last_month).unwrap();
        crate::engine::timesheet::check_in(&mut *store, "p1", "Ada", yesterday).unwrap();
        crate::engine::timesheet::check_in(&mut *store, "p1", "Ada", at(9, 0)).unwrap();
    }

    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .service(api_scope("/api")),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/attendance/today")
        .to_request();
    let today: Value = test::call_and_read_body_json(&app, req).await;
    let today = today.as_array().unwrap();
    assert_eq!(today.len(), 1);
    assert_eq!(today[0]["date"], "05.03.2024");

    let req = test::TestRequest::get()
        .uri("/api/attendance/month")
        .to_request();
    let month: Value = test::call_and_read_body_json(&app, req).await;
    let dates: Vec<_> = month
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["date"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(dates, vec!["04.03.2024", "05.03.2024"]);
}

#[actix_web::test]
async fn personnel_csv_export() {
    let state = state_at(at(9, 0));
    state
        .store()
        .add_personnel(serde_json::from_value(ada()).unwrap())
        .unwrap();

    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .service(api_scope("/api")),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/reports/personnel.csv")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let disposition = resp
        .headers()
        .get("content-disposition")
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(disposition.contains("personnel_list_05.03.2024.csv"));

    let body = test::read_body(resp).await;
    let text = std::str::from_utf8(&body).unwrap();
    let lines: Vec<_> = text.trim_start_matches('\u{feff}').lines().collect();
    assert_eq!(
        lines,
        vec![
            "Name,Email,Position,Department,Phone,Start Date,Status",
            "Ada Lovelace,ada@company.com,Engineer,Information Technology,-,01.01.2024,Active",
        ]
    );
}
