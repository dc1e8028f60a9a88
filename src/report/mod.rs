//! Report row mapping and the renderer boundary.
//!
//! The engine shapes one flat row per worker for a date window; the
//! spreadsheet writer itself is an external collaborator behind the
//! [`ReportRenderer`] trait.

mod mapper;
mod renderer;

pub use mapper::map_report_rows;
pub use renderer::{REPORT_COLUMNS, ReportRenderer};
