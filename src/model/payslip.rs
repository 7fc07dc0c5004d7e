use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Audit row appended whenever a payslip is generated. The breakdown is
/// computed on demand; this is the persisted record of the totals.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Payslip {
    pub id: u64,
    pub employee_id: u64,

    #[schema(example = "2025-09")]
    pub month: String,

    #[schema(example = "3000.00", value_type = String)]
    pub gross: Decimal,

    #[schema(example = "660.00", value_type = String)]
    pub deductions: Decimal,

    #[schema(example = "2340.00", value_type = String)]
    pub net: Decimal,

    #[schema(example = "2025-09-30T18:00:00", value_type = String)]
    pub generated_at: NaiveDateTime,
}
