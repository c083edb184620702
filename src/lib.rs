//! Nexus Hub library exports

pub mod catalog;
pub mod discovery;
pub mod error;
pub mod flow;
pub mod ids;
pub mod models;
pub mod notify;
pub mod portal;
pub mod registry;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;
