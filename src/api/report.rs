use crate::{
    auth::auth::AuthUser,
    export::csv::write_attendance_csv,
    model::{attendance::Attendance, employee::Employee},
};
use actix_web::{
    HttpResponse, Responder,
    error::ErrorInternalServerError,
    http::header::{ContentDisposition, DispositionParam, DispositionType},
    web,
};
use serde_json::json;
use sqlx::MySqlPool;
use tracing::error;

/// Full attendance history of one employee as a CSV download.
#[utoipa::path(
    get,
    path = "/api/v1/reports/attendance/{employee_id}",
    params(("employee_id", Path, description = "Employee ID")),
    responses(
        (status = 200, description = "CSV export", content_type = "text/csv"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Report",
    security(("bearer_auth" = []))
)]
pub async fn export_attendance(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;

    let employee_id = path.into_inner();

    let employee = sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = ?")
        .bind(employee_id)
        .fetch_optional(pool.get_ref())
        .await
        .map_err(|e| {
            error!(error = %e, employee_id, "Failed to fetch employee");
            ErrorInternalServerError("Internal Server Error")
        })?;

    let employee = match employee {
        Some(emp) => emp,
        None => {
            return Ok(HttpResponse::NotFound().json(json!({
                "message": "Employee not found"
            })));
        }
    };

    let records = sqlx::query_as::<_, Attendance>(
        r#"
        SELECT * FROM attendance
        WHERE employee_id = ?
        ORDER BY date
        "#,
    )
    .bind(employee_id)
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, employee_id, "Failed to fetch attendance");
        ErrorInternalServerError("Internal Server Error")
    })?;

    let bytes = write_attendance_csv(employee_id, &employee.name, &records).map_err(|e| {
        error!(error = %e, employee_id, "Failed to write attendance csv");
        ErrorInternalServerError("Internal Server Error")
    })?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(format!(
                "attendance_{}.csv",
                employee_id
            ))],
        })
        .body(bytes))
}
