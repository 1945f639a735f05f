//! stockroom - product and category admin API backed by a relational store
//!
//! A small CRUD service: products and categories live in SQLite and are
//! exposed as a JSON REST API consumed by the bundled admin page.

pub mod api;
pub mod config;
pub mod http_server;
pub mod sanitize;
pub mod store;
