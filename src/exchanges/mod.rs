pub mod api_clients;
pub mod types;
