//! Result panel: label, pie chart and percentage table for one
//! [`ClassificationResult`](crate::core::classification::ClassificationResult).

mod chart;
pub use chart::{pie_arcs, PieArc, PieChart};

mod table;
pub use table::ResultTable;

mod panel;
pub use panel::ResultPanel;
