use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use crate::db::AppState;
use crate::engine::query::{self, AttendanceFilter, PersonnelSummary, Stats};
use crate::engine::report;
use crate::model::attendance::AttendanceRecord;

/// Spreadsheet tools need the BOM to pick UTF-8 for non-ASCII names.
const UTF8_BOM: &str = "\u{feff}";

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub records: Vec<AttendanceRecord>,
    pub stats: Stats,
    pub by_personnel: Vec<PersonnelSummary>,
    /// `stats.total_minutes` as `"{h}h {m}m"`
    #[schema(example = "8h 30m")]
    pub total_duration: String,
}

fn csv_download(filename: String, body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(filename)],
        })
        .body(format!("{UTF8_BOM}{body}"))
}

/// Filtered records with totals and a per-person breakdown
#[utoipa::path(
    get,
    path = "/api/reports/summary",
    params(AttendanceFilter),
    responses(
        (status = 200, description = "Attendance report", body = ReportResponse)
    ),
    tag = "Report"
)]
pub async fn summary(
    state: web::Data<AppState>,
    criteria: web::Query<AttendanceFilter>,
) -> actix_web::Result<impl Responder> {
    let records = {
        let store = state.store();
        query::filter(&store.attendance()?, &store.personnel()?, &criteria)
    };

    let stats = query::aggregate(&records);
    let by_personnel = query::summarize_by_personnel(&records);
    let total_duration = report::format_duration(stats.total_minutes);

    Ok(HttpResponse::Ok().json(ReportResponse {
        records,
        stats,
        by_personnel,
        total_duration,
    }))
}

/// Filtered attendance as CSV
#[utoipa::path(
    get,
    path = "/api/reports/attendance.csv",
    params(AttendanceFilter),
    responses(
        (status = 200, description = "CSV download", body = String, content_type = "text/csv")
    ),
    tag = "Report"
)]
pub async fn attendance_csv(
    state: web::Data<AppState>,
    criteria: web::Query<AttendanceFilter>,
) -> actix_web::Result<impl Responder> {
    let records = {
        let store = state.store();
        query::filter(&store.attendance()?, &store.personnel()?, &criteria)
    };
    let body = report::to_delimited_text(&records)?;
    let filename = report::attendance_report_filename(state.clock.now().date());

    info!(rows = records.len(), %filename, "Attendance exported");
    Ok(csv_download(filename, body))
}

/// All personnel as CSV
#[utoipa::path(
    get,
    path = "/api/reports/personnel.csv",
    responses(
        (status = 200, description = "CSV download", body = String, content_type = "text/csv")
    ),
    tag = "Report"
)]
pub async fn personnel_csv(state: web::Data<AppState>) -> actix_web::Result<impl Responder> {
    let personnel = state.store().personnel()?;
    let body = report::to_delimited_text(&personnel)?;
    let filename = report::personnel_list_filename(state.clock.now().date());

    info!(rows = personnel.len(), %filename, "Personnel exported");
    Ok(csv_download(filename, body))
}
