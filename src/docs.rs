use crate::api::attendance::AttendanceRequest;
use crate::api::reports::ReportResponse;
use crate::engine::query::{PersonnelSummary, Stats};
use crate::model::attendance::AttendanceRecord;
use crate::model::department::{Department, DepartmentUpdate, NewDepartment};
use crate::model::personnel::{NewPersonnel, Personnel, PersonnelStatus, PersonnelUpdate};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance Tracker API",
        version = "1.0.0",
        description = r#"
## Personnel Attendance Tracker

Records personnel, their departments and daily check-in / check-out events,
and derives reports from them.

### Key Features
- **Personnel Management**
  - Add, update (partial), list and remove personnel
- **Attendance**
  - One open session per person per day
  - Durations in whole minutes from check-in to check-out
- **Reports**
  - Filter by date range, department and person
  - Totals, per-person summaries and CSV export

### Dates
Dates are written `DD.MM.YYYY` and times `HH:MM`. Query filters also accept
`YYYY-MM-DD`.

A session still open at midnight cannot be closed the next day, and a
check-out earlier than its check-in records 0 minutes.
"#,
    ),
    paths(
        crate::api::personnel::create_personnel,
        crate::api::personnel::list_personnel,
        crate::api::personnel::get_personnel,
        crate::api::personnel::update_personnel,
        crate::api::personnel::delete_personnel,

        crate::api::departments::list_departments,
        crate::api::departments::create_department,
        crate::api::departments::update_department,
        crate::api::departments::delete_department,

        crate::api::attendance::list_attendance,
        crate::api::attendance::today_attendance,
        crate::api::attendance::month_attendance,
        crate::api::attendance::check_in,
        crate::api::attendance::check_out,
        crate::api::attendance::attendance_status,
        crate::api::attendance::delete_attendance,

        crate::api::reports::summary,
        crate::api::reports::attendance_csv,
        crate::api::reports::personnel_csv
    ),
    components(
        schemas(
            Personnel,
            PersonnelStatus,
            NewPersonnel,
            PersonnelUpdate,
            Department,
            NewDepartment,
            DepartmentUpdate,
            AttendanceRecord,
            AttendanceRequest,
            Stats,
            PersonnelSummary,
            ReportResponse
        )
    ),
    tags(
        (name = "Personnel", description = "Personnel management APIs"),
        (name = "Department", description = "Department APIs"),
        (name = "Attendance", description = "Check-in / check-out APIs"),
        (name = "Report", description = "Reporting and export APIs"),
    )
)]
pub struct ApiDoc;
