use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use tracing::debug;

use crate::db::AppState;
use crate::model::personnel::{NewPersonnel, PersonnelUpdate};

/// Create Personnel
#[utoipa::path(
    post,
    path = "/api/personnel",
    request_body = NewPersonnel,
    responses(
        (status = 201, description = "Personnel created", body = crate::model::personnel::Personnel),
        (status = 400, description = "A required field is missing", body = Object, example = json!({
            "message": "validation failed: email is required"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Personnel"
)]
pub async fn create_personnel(
    state: web::Data<AppState>,
    payload: web::Json<NewPersonnel>,
) -> actix_web::Result<impl Responder> {
    let person = state.store().add_personnel(payload.into_inner())?;
    Ok(HttpResponse::Created().json(person))
}

/// List Personnel
#[utoipa::path(
    get,
    path = "/api/personnel",
    responses(
        (status = 200, description = "All personnel in insertion order", body = [crate::model::personnel::Personnel])
    ),
    tag = "Personnel"
)]
pub async fn list_personnel(state: web::Data<AppState>) -> actix_web::Result<impl Responder> {
    let personnel = state.store().personnel()?;
    debug!(count = personnel.len(), "Listing personnel");
    Ok(HttpResponse::Ok().json(personnel))
}

/// Get Personnel by ID
#[utoipa::path(
    get,
    path = "/api/personnel/{id}",
    params(
        ("id", Path, description = "Personnel ID")
    ),
    responses(
        (status = 200, description = "Personnel found", body = crate::model::personnel::Personnel),
        (status = 404, description = "Personnel not found", body = Object, example = json!({
            "message": "personnel 42 not found"
        }))
    ),
    tag = "Personnel"
)]
pub async fn get_personnel(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    let person = state.store().get_personnel(&path.into_inner())?;
    Ok(HttpResponse::Ok().json(person))
}

/// Update Personnel (partial)
#[utoipa::path(
    put,
    path = "/api/personnel/{id}",
    params(
        ("id", Path, description = "Personnel ID")
    ),
    request_body = PersonnelUpdate,
    responses(
        (status = 200, description = "Personnel updated", body = crate::model::personnel::Personnel),
        (status = 400, description = "A required field was blanked"),
        (status = 404, description = "Personnel not found")
    ),
    tag = "Personnel"
)]
pub async fn update_personnel(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PersonnelUpdate>,
) -> actix_web::Result<impl Responder> {
    let body = body.into_inner();
    if body.is_empty() {
        return Ok(HttpResponse::BadRequest().json(json!({
            "message": "No fields provided for update"
        })));
    }

    let person = state.store().update_personnel(&path.into_inner(), body)?;
    Ok(HttpResponse::Ok().json(person))
}

/// Delete Personnel. Their attendance records are kept.
#[utoipa::path(
    delete,
    path = "/api/personnel/{id}",
    params(
        ("id", Path, description = "Personnel ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted", body = Object, example = json!({
            "message": "Successfully deleted"
        })),
        (status = 404, description = "Personnel not found")
    ),
    tag = "Personnel"
)]
pub async fn delete_personnel(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    let id = path.into_inner();

    if !state.store().delete_personnel(&id)? {
        return Ok(HttpResponse::NotFound().json(json!({
            "message": "Personnel not found"
        })));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Successfully deleted"
    })))
}
