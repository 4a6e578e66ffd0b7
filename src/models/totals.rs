use super::service_year::ServiceYearWindow;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthlyTotals {
    pub year: i32,
    pub month: u32,
    pub total_hours: f64,
    pub total_studies: u64,
    pub record_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceYearTotals {
    pub label: i32,
    pub window: ServiceYearWindow,
    pub total_hours: f64,
}
