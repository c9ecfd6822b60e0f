pub mod d400_summary;

pub use d400_summary::ui::SummaryDashboard;
