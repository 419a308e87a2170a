pub mod api_error;
pub mod config;
pub mod dates;
pub mod lenient;
pub mod resource;
pub mod search;
pub mod table;
