use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "name": "John Doe",
        "email": "john.doe@company.com",
        "designation": "Accountant",
        "salary": "3000.00",
        "bank_account": "0012345678",
        "joining_date": "2024-01-01"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "John Doe")]
    pub name: String,

    #[schema(example = "john.doe@company.com", nullable = true)]
    pub email: Option<String>,

    #[schema(example = "Accountant", nullable = true)]
    pub designation: Option<String>,

    /// Monthly base salary.
    #[schema(example = "3000.00", value_type = String)]
    pub salary: Decimal,

    #[schema(example = "0012345678", nullable = true)]
    pub bank_account: Option<String>,

    #[schema(
        example = "2024-01-01",
        value_type = String,
        format = "date",
        nullable = true
    )]
    pub joining_date: Option<NaiveDate>,
}
