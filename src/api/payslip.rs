use crate::{
    auth::auth::AuthUser,
    export::pdf::{PayslipDocument, render_payslip},
    model::{employee::Employee, payslip::Payslip},
    pay::{self, PayError, PayInput},
};
use actix_web::{
    HttpResponse, Responder,
    error::ErrorInternalServerError,
    http::header::{ContentDisposition, DispositionParam, DispositionType},
    web,
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::MySqlPool;
use tracing::{error, info};
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, ToSchema)]
pub struct GeneratePayslip {
    /// Pay period, `YYYY-MM`. Defaults to the current month.
    #[schema(example = "2025-09")]
    pub month: Option<String>,

    /// Working days in the period. Defaults to 30.
    #[schema(example = 30)]
    pub total_days: Option<i32>,

    /// Defaults to `total_days` (full attendance).
    #[schema(example = 26)]
    pub days_present: Option<i32>,

    #[schema(example = 4.0, value_type = f64)]
    pub overtime_hours: Option<Decimal>,

    #[schema(example = 150.0, value_type = f64)]
    pub bonus: Option<Decimal>,
}

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct PayslipQuery {
    #[schema(example = 1)]
    pub page: Option<u32>,

    #[schema(example = 10)]
    pub per_page: Option<u32>,

    #[schema(example = 1001)]
    pub employee_id: Option<u64>,
}

#[derive(Serialize, ToSchema)]
pub struct PayslipListResponse {
    pub data: Vec<Payslip>,
    pub page: u32,
    pub per_page: u32,
    pub total: i64,
}

/// Generate a payslip for an employee and month.
///
/// Runs the pay calculator against the stored salary and the supplied
/// attendance figures, appends an audit row and returns the rendered PDF
/// as a download.
#[utoipa::path(
    post,
    path = "/api/v1/payslips/{employee_id}",
    params(("employee_id", Path, description = "Employee ID")),
    request_body = GeneratePayslip,
    responses(
        (status = 200, description = "PDF payslip", content_type = "application/pdf"),
        (status = 400, description = "Invalid pay period"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Payslip",
    security(("bearer_auth" = []))
)]
pub async fn generate_payslip(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
    payload: web::Json<GeneratePayslip>,
) -> actix_web::Result<impl Responder> {
    auth.require_admin()?;

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

    let month = payload
        .month
        .clone()
        .unwrap_or_else(|| Utc::now().format("%Y-%m").to_string());
    let total_days = payload.total_days.unwrap_or(30);
    let days_present = payload.days_present.unwrap_or(total_days);
    let overtime_hours = payload.overtime_hours.unwrap_or_default();
    let bonus = payload.bonus.unwrap_or_default();

    let input = PayInput {
        monthly_salary: employee.salary,
        days_present,
        total_days,
        overtime_hours,
        bonus,
    };

    let breakdown = match pay::compute(&input) {
        Ok(b) => b,
        Err(e @ PayError::InvalidPeriod { .. }) => {
            return Ok(HttpResponse::BadRequest().json(json!({
                "error": e.to_string()
            })));
        }
    };

    sqlx::query(
        r#"
        INSERT INTO payslips (employee_id, month, gross, deductions, net, generated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(employee_id)
    .bind(&month)
    .bind(breakdown.gross)
    .bind(breakdown.deductions)
    .bind(breakdown.net)
    .bind(Utc::now().naive_utc())
    .execute(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, employee_id, month = %month, "Failed to store payslip log");
        ErrorInternalServerError("Internal Server Error")
    })?;

    info!(employee_id, month = %month, net = %breakdown.net, "Payslip generated");

    let bytes = render_payslip(&PayslipDocument {
        employee: &employee,
        month: &month,
        total_days,
        days_present,
        overtime_hours,
        bonus,
        breakdown: &breakdown,
    });

    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(format!(
                "payslip_{}_{}.pdf",
                employee_id, month
            ))],
        })
        .body(bytes))
}

/// Paginated payslip audit log, optionally filtered by employee.
#[utoipa::path(
    get,
    path = "/api/v1/payslips",
    params(PayslipQuery),
    responses(
        (status = 200, description = "Payslip audit log", body = PayslipListResponse)
    ),
    tag = "Payslip",
    security(("bearer_auth" = []))
)]
pub async fn list_payslips(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    query: web::Query<PayslipQuery>,
) -> actix_web::Result<impl Responder> {
    auth.require_hr_or_admin()?;

    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(10).clamp(1, 100);
    let offset = super::page_offset(page, per_page);

    let where_clause = match query.employee_id {
        Some(_) => "WHERE employee_id = ?",
        None => "",
    };

    let count_sql = format!("SELECT COUNT(*) FROM payslips {}", where_clause);
    let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
    if let Some(employee_id) = query.employee_id {
        count_query = count_query.bind(employee_id);
    }

    let total = count_query.fetch_one(pool.get_ref()).await.map_err(|e| {
        error!(error = %e, "Failed to count payslips");
        ErrorInternalServerError("Internal Server Error")
    })?;

    let data_sql = format!(
        "SELECT * FROM payslips {} ORDER BY month DESC, id DESC LIMIT ? OFFSET ?",
        where_clause
    );
    let mut data_query = sqlx::query_as::<_, Payslip>(&data_sql);
    if let Some(employee_id) = query.employee_id {
        data_query = data_query.bind(employee_id);
    }
    data_query = data_query.bind(per_page as i64).bind(offset);

    let data = data_query.fetch_all(pool.get_ref()).await.map_err(|e| {
        error!(error = %e, "Failed to fetch payslip log");
        ErrorInternalServerError("Internal Server Error")
    })?;

    Ok(HttpResponse::Ok().json(PayslipListResponse {
        data,
        page,
        per_page,
        total,
    }))
}
