pub mod attendance;
pub mod employee;
pub mod payslip;
pub mod report;

/// SQL OFFSET for a 1-based page, widened to i64 so extreme page
/// numbers cannot overflow.
pub(crate) fn page_offset(page: u32, per_page: u32) -> i64 {
    (i64::from(page) - 1) * i64::from(per_page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_starts_at_zero() {
        assert_eq!(page_offset(1, 20), 0);
    }

    #[test]
    fn test_offset_scales_with_page() {
        assert_eq!(page_offset(3, 10), 20);
    }

    #[test]
    fn test_max_page_does_not_overflow() {
        assert_eq!(
            page_offset(u32::MAX, 100),
            (i64::from(u32::MAX) - 1) * 100
        );
    }
}
