use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::db::AppState;
use crate::engine::query::{self, AttendanceFilter};
use crate::engine::timesheet;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRequest {
    #[schema(example = "9b2f6a0e-4c1d-4e43-9a55-2d1f0f3f2c11")]
    pub personnel_id: String,
}

/// List attendance records, optionally filtered
#[utoipa::path(
    get,
    path = "/api/attendance",
    params(AttendanceFilter),
    responses(
        (status = 200, description = "Matching records in insertion order", body = [crate::model::attendance::AttendanceRecord])
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    state: web::Data<AppState>,
    criteria: web::Query<AttendanceFilter>,
) -> actix_web::Result<impl Responder> {
    let store = state.store();
    let records = query::filter(&store.attendance()?, &store.personnel()?, &criteria);
    Ok(HttpResponse::Ok().json(records))
}

/// Records for today's date
#[utoipa::path(
    get,
    path = "/api/attendance/today",
    responses(
        (status = 200, description = "Today's records", body = [crate::model::attendance::AttendanceRecord])
    ),
    tag = "Attendance"
)]
pub async fn today_attendance(state: web::Data<AppState>) -> actix_web::Result<impl Responder> {
    let now = state.clock.now();
    let records = state.store().attendance()?;
    Ok(HttpResponse::Ok().json(query::today(&records, now)))
}

/// Records for the current calendar month
#[utoipa::path(
    get,
    path = "/api/attendance/month",
    responses(
        (status = 200, description = "This month's records", body = [crate::model::attendance::AttendanceRecord])
    ),
    tag = "Attendance"
)]
pub async fn month_attendance(state: web::Data<AppState>) -> actix_web::Result<impl Responder> {
    let now = state.clock.now();
    let records = state.store().attendance()?;
    Ok(HttpResponse::Ok().json(query::current_month(&records, now)))
}

/// Check-in endpoint
#[utoipa::path(
    post,
    path = "/api/attendance/check-in",
    request_body = AttendanceRequest,
    responses(
        (status = 201, description = "Checked in successfully", body = crate::model::attendance::AttendanceRecord),
        (status = 404, description = "Personnel not found"),
        (status = 409, description = "Already checked in today", body = Object, example = json!({
            "message": "personnel p1 is already checked in on 2024-03-05"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn check_in(
    state: web::Data<AppState>,
    payload: web::Json<AttendanceRequest>,
) -> actix_web::Result<impl Responder> {
    let now = state.clock.now();
    let mut store = state.store();

    let person = store.get_personnel(&payload.personnel_id)?;
    let record = timesheet::check_in(&mut *store, &person.id, &person.name, now)?;

    Ok(HttpResponse::Created().json(record))
}

/// Check-out endpoint
#[utoipa::path(
    post,
    path = "/api/attendance/check-out",
    request_body = AttendanceRequest,
    responses(
        (status = 200, description = "Checked out successfully", body = crate::model::attendance::AttendanceRecord),
        (status = 400, description = "No active check-in found for today", body = Object, example = json!({
            "message": "no open attendance session for personnel p1 on 2024-03-05"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn check_out(
    state: web::Data<AppState>,
    payload: web::Json<AttendanceRequest>,
) -> actix_web::Result<impl Responder> {
    let now = state.clock.now();
    let record = timesheet::check_out(&mut *state.store(), &payload.personnel_id, now)?;
    Ok(HttpResponse::Ok().json(record))
}

/// Whether the person has an open session today
#[utoipa::path(
    get,
    path = "/api/attendance/status/{personnel_id}",
    params(
        ("personnel_id", Path, description = "Personnel ID")
    ),
    responses(
        (status = 200, description = "Session status", body = Object, example = json!({
            "personnelId": "p1",
            "checkedIn": true
        }))
    ),
    tag = "Attendance"
)]
pub async fn attendance_status(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    let personnel_id = path.into_inner();
    let now = state.clock.now();
    let checked_in = timesheet::is_checked_in(&*state.store(), &personnel_id, now)?;

    Ok(HttpResponse::Ok().json(json!({
        "personnelId": personnel_id,
        "checkedIn": checked_in
    })))
}

#[utoipa::path(
    delete,
    path = "/api/attendance/{id}",
    params(
        ("id", Path, description = "Attendance record ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted"),
        (status = 404, description = "Record not found")
    ),
    tag = "Attendance"
)]
pub async fn delete_attendance(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    if !state.store().delete_attendance(&path.into_inner())? {
        return Ok(HttpResponse::NotFound().json(json!({
            "message": "Attendance record not found"
        })));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Successfully deleted"
    })))
}
