pub mod console;
pub mod gateways;
pub mod http;
pub mod models;
