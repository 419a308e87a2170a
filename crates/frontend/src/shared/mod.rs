pub mod api_client;
pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod list_resource;

pub use list_resource::{ListResource, RemoteResource};
