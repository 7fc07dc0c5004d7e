use crate::{auth::auth::AuthUser, model::attendance::Attendance};
use actix_web::{HttpResponse, Responder, error::ErrorInternalServerError, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::MySqlPool;
use tracing::error;
use utoipa::ToSchema;

/// Most recent rows returned by the listing endpoint.
const RECENT_LIMIT: i64 = 50;

#[derive(Deserialize, ToSchema)]
pub struct RecordAttendance {
    #[schema(example = "2025-09-01", format = "date", value_type = String)]
    pub date: NaiveDate,
    #[serde(default)]
    pub present: bool,
    #[schema(example = 8.0)]
    pub hours_worked: Option<f64>,
    #[schema(example = "half day", nullable = true)]
    pub remarks: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct AttendanceListResponse {
    pub employee_id: u64,
    pub records: Vec<Attendance>,
}

async fn employee_exists(pool: &MySqlPool, employee_id: u64) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM employees WHERE id = ?)")
        .bind(employee_id)
        .fetch_one(pool)
        .await
}

/// Record one attendance day for an employee. Deliberately permissive:
/// duplicate dates are allowed, matching the original register.
#[utoipa::path(
    post,
    path = "/api/v1/attendance/{employee_id}",
    params(("employee_id", Path, description = "Employee ID")),
    request_body = RecordAttendance,
    responses(
        (status = 201, description = "Attendance recorded"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Attendance",
    security(("bearer_auth" = []))
)]
pub async fn record_attendance(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
    payload: web::Json<RecordAttendance>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;

    let employee_id = path.into_inner();

    let exists = employee_exists(pool.get_ref(), employee_id)
        .await
        .map_err(|e| {
            error!(error = %e, employee_id, "Failed to check employee");
            ErrorInternalServerError("Internal Server Error")
        })?;

    if !exists {
        return Ok(HttpResponse::NotFound().json(json!({
            "message": "Employee not found"
        })));
    }

    sqlx::query(
        r#"
        INSERT INTO attendance (employee_id, date, present, hours_worked, remarks)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(employee_id)
    .bind(payload.date)
    .bind(payload.present)
    .bind(payload.hours_worked.unwrap_or(0.0))
    .bind(&payload.remarks)
    .execute(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, employee_id, "Failed to record attendance");
        ErrorInternalServerError("Internal Server Error")
    })?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Attendance recorded"
    })))
}

/// List the 50 most recent attendance rows, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/attendance/{employee_id}",
    params(("employee_id", Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Recent attendance rows", body = AttendanceListResponse),
        (status = 404, description = "Employee not found")
    ),
    tag = "Attendance",
    security(("bearer_auth" = []))
)]
pub async fn list_attendance(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;

    let employee_id = path.into_inner();

    let exists = employee_exists(pool.get_ref(), employee_id)
        .await
        .map_err(|e| {
            error!(error = %e, employee_id, "Failed to check employee");
            ErrorInternalServerError("Internal Server Error")
        })?;

    if !exists {
        return Ok(HttpResponse::NotFound().json(json!({
            "message": "Employee not found"
        })));
    }

    let records = sqlx::query_as::<_, Attendance>(
        r#"
        SELECT * FROM attendance
        WHERE employee_id = ?
        ORDER BY date DESC
        LIMIT ?
        "#,
    )
    .bind(employee_id)
    .bind(RECENT_LIMIT)
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, employee_id, "Failed to fetch attendance");
        ErrorInternalServerError("Internal Server Error")
    })?;

    Ok(HttpResponse::Ok().json(AttendanceListResponse {
        employee_id,
        records,
    }))
}
