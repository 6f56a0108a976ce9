pub mod app;
pub mod config;
pub mod database;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod requests;
pub mod routes;
pub mod services;
pub mod telemetry;
pub mod utils;
