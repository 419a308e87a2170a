pub mod list;

pub use list::QuotationList;
