pub mod record;
pub mod service_year;
pub mod totals;
pub mod visit;

pub use record::{ActivityRecord, RecordFields};
pub use service_year::ServiceYearWindow;
pub use totals::{MonthlyTotals, ServiceYearTotals};
pub use visit::{ContactVisit, VisitFields};
