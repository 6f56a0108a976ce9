pub mod auth;
pub mod index;
pub mod pickup_requests;
