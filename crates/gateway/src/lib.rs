mod cache;
mod errors;
mod gateway;
mod models;
mod upstream;

pub use errors::GatewayError;
pub use models::{StatusGateway, StatusReply};
