pub mod list;

pub use list::ClientList;
