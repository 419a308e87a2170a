pub mod dashboard;

pub use dashboard::BusinessOverviewDashboard;
