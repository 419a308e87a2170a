pub mod list;

pub use list::TaskList;
