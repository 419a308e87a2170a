pub mod list;

pub use list::WeeklyPayroll;
