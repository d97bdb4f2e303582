// ABOUTME: Library root for deploy-inventory - exposes the inventory pipelines.
// ABOUTME: The main binary is in main.rs.

pub mod catalog;
pub mod config;
pub mod error;
pub mod output;
pub mod remote;
pub mod report;
pub mod types;
