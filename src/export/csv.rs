use csv::Writer;

use crate::model::attendance::Attendance;

/// Writes an employee's attendance history as CSV and returns the bytes.
pub fn write_attendance_csv(
    employee_id: u64,
    employee_name: &str,
    records: &[Attendance],
) -> anyhow::Result<Vec<u8>> {
    let mut wtr = Writer::from_writer(Vec::new());

    wtr.write_record([
        "employee_id",
        "employee_name",
        "date",
        "present",
        "hours_worked",
        "remarks",
    ])?;

    for rec in records {
        wtr.write_record(&[
            employee_id.to_string(),
            employee_name.to_string(),
            rec.date.to_string(),
            (rec.present as u8).to_string(),
            rec.hours_worked.to_string(),
            rec.remarks.clone().unwrap_or_default(),
        ])?;
    }

    wtr.into_inner()
        .map_err(|e| anyhow::anyhow!("flushing attendance csv: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(day: u32, present: bool, hours: f64, remarks: Option<&str>) -> Attendance {
        Attendance {
            id: day as u64,
            employee_id: 7,
            date: NaiveDate::from_ymd_opt(2025, 9, day).unwrap(),
            present,
            hours_worked: hours,
            remarks: remarks.map(str::to_string),
        }
    }

    #[test]
    fn test_header_and_rows() {
        let records = vec![
            record(1, true, 8.0, None),
            record(2, false, 0.0, Some("sick leave")),
        ];

        let bytes = write_attendance_csv(7, "Jane Roe", &records).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "employee_id,employee_name,date,present,hours_worked,remarks"
        );
        assert_eq!(lines[1], "7,Jane Roe,2025-09-01,1,8,");
        assert_eq!(lines[2], "7,Jane Roe,2025-09-02,0,0,sick leave");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_empty_history_yields_header_only() {
        let bytes = write_attendance_csv(7, "Jane Roe", &[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert_eq!(
            text.trim_end(),
            "employee_id,employee_name,date,present,hours_worked,remarks"
        );
    }
}
