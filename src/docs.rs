use crate::api::attendance::{AttendanceListResponse, RecordAttendance};
use crate::api::employee::{CreateEmployee, EmployeeListResponse, EmployeeQuery, UpdateEmployee};
use crate::api::payslip::{GeneratePayslip, PayslipListResponse, PayslipQuery};
use crate::model::attendance::Attendance;
use crate::model::employee::Employee;
use crate::model::payslip::Payslip;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, openapi};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payroll Administration API",
        version = "1.0.0",
        description = r#"
## Payroll Administration Service

Internal tool for a payroll administrator: employee records, daily
attendance, monthly payslips and attendance exports.

### Key Features
- **Employee Management** — create, update, list and view employee records
- **Attendance** — record daily presence, hours and remarks per employee
- **Payslips** — compute gross/net pay from stored salary and attendance,
  download as PDF, browse the generation audit log
- **Reports** — per-employee attendance history as CSV

### Security
Endpoints under the API prefix require **JWT Bearer authentication**;
payslip generation and employee deletion are admin-only.
"#,
    ),
    paths(
        crate::auth::handlers::register,
        crate::auth::handlers::login,
        crate::auth::handlers::refresh_token,
        crate::auth::handlers::logout,
        crate::auth::handlers::change_password,

        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,

        crate::api::attendance::record_attendance,
        crate::api::attendance::list_attendance,

        crate::api::payslip::generate_payslip,
        crate::api::payslip::list_payslips,

        crate::api::report::export_attendance
    ),
    components(
        schemas(
            Employee,
            Attendance,
            Payslip,
            CreateEmployee,
            UpdateEmployee,
            EmployeeQuery,
            EmployeeListResponse,
            RecordAttendance,
            AttendanceListResponse,
            GeneratePayslip,
            PayslipQuery,
            PayslipListResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Authentication APIs"),
        (name = "Employee", description = "Employee record APIs"),
        (name = "Attendance", description = "Attendance logging APIs"),
        (name = "Payslip", description = "Payslip generation and audit log APIs"),
        (name = "Report", description = "CSV export APIs"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
