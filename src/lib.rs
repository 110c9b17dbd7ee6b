//! The `tasknest` library crate.
//!
//! Contains the domain models, validation rules, authentication mechanisms,
//! persistence layer, routing configuration, and error handling for the
//! Tasknest API. The main binary (`main.rs`) wires these together into a
//! running server.

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod repo;
pub mod routes;
