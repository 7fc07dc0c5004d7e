use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row per day per employee.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Attendance {
    pub id: u64,
    pub employee_id: u64,

    #[schema(example = "2025-09-01", value_type = String, format = "date")]
    pub date: NaiveDate,

    pub present: bool,

    #[schema(example = 8.0)]
    pub hours_worked: f64,

    #[schema(example = "half day", nullable = true)]
    pub remarks: Option<String>,
}
