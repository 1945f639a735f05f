//! HTTP Server
//!
//! Router assembly plus the product and category endpoint handlers.

mod category_routes;
mod params;
mod product_routes;
mod server;

pub use server::{AppState, HttpServer};
