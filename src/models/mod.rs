pub mod auth;
pub mod pickup_request;
pub mod user;
