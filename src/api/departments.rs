use actix_web::{HttpResponse, Responder, web};
use serde_json::json;

use crate::db::AppState;
use crate::model::department::{DepartmentUpdate, NewDepartment};

/// List departments, seeding the defaults on first use
#[utoipa::path(
    get,
    path = "/api/departments",
    responses(
        (status = 200, description = "All departments", body = [crate::model::department::Department])
    ),
    tag = "Department"
)]
pub async fn list_departments(state: web::Data<AppState>) -> actix_web::Result<impl Responder> {
    let departments = state.store().departments()?;
    Ok(HttpResponse::Ok().json(departments))
}

#[utoipa::path(
    post,
    path = "/api/departments",
    request_body = NewDepartment,
    responses(
        (status = 201, description = "Department created", body = crate::model::department::Department),
        (status = 400, description = "Name missing or already taken")
    ),
    tag = "Department"
)]
pub async fn create_department(
    state: web::Data<AppState>,
    payload: web::Json<NewDepartment>,
) -> actix_web::Result<impl Responder> {
    let department = state.store().add_department(payload.into_inner())?;
    Ok(HttpResponse::Created().json(department))
}

#[utoipa::path(
    put,
    path = "/api/departments/{id}",
    params(
        ("id", Path, description = "Department ID")
    ),
    request_body = DepartmentUpdate,
    responses(
        (status = 200, description = "Department updated", body = crate::model::department::Department),
        (status = 400, description = "Name blank or already taken"),
        (status = 404, description = "Department not found")
    ),
    tag = "Department"
)]
pub async fn update_department(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<DepartmentUpdate>,
) -> actix_web::Result<impl Responder> {
    let department = state
        .store()
        .update_department(&path.into_inner(), body.into_inner())?;
    Ok(HttpResponse::Ok().json(department))
}

#[utoipa::path(
    delete,
    path = "/api/departments/{id}",
    params(
        ("id", Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted"),
        (status = 404, description = "Department not found")
    ),
    tag = "Department"
)]
pub async fn delete_department(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    if !state.store().delete_department(&path.into_inner())? {
        return Ok(HttpResponse::NotFound().json(json!({
            "message": "Department not found"
        })));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Successfully deleted"
    })))
}
