pub mod form;

pub use form::CreateWeekForm;
