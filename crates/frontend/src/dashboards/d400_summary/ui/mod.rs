mod dashboard;

pub use dashboard::SummaryDashboard;
