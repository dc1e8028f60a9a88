//! The renderer boundary.
//!
//! The spreadsheet writer is an external collaborator: it consumes an
//! ordered list of flat rows plus header metadata and returns a binary
//! artifact. The engine publishes the fixed column layout so every
//! renderer agrees on it.

use crate::error::PayrollResult;
use crate::models::{ReportMetadata, ReportRow};

/// The fixed column layout of the employee report, in order.
pub const REPORT_COLUMNS: [&str; 13] = [
    "Employee ID",
    "Full Name",
    "Mobile",
    "Status",
    "Assigned Site",
    "Joining Date",
    "Days Present",
    "Days Absent",
    "Overtime (hrs)",
    "Wages Earned",
    "Amount Paid",
    "Pending",
    "Last Payment",
];

/// Renders report rows into a binary artifact.
///
/// Implementations live outside the engine. The totals row is expected
/// to use spreadsheet-native formulas referencing the data range rather
/// than independently recomputed sums.
pub trait ReportRenderer: Send + Sync {
    /// Produces the binary artifact for the given rows and metadata.
    fn render(&self, rows: &[ReportRow], metadata: &ReportMetadata) -> PayrollResult<Vec<u8>>;

    /// The MIME type of the produced artifact.
    fn content_type(&self) -> &'static str {
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    }

    /// The file extension of the produced artifact.
    fn file_extension(&self) -> &'static str {
        "xlsx"
    }
}
