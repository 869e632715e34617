//! # ProjBoard App
//!
//! Command-line shell over the project dashboard.
//!
//! This crate contains:
//! - The clap argument definitions
//! - Logging initialisation
//! - The application context (store selection and service wiring)
//! - Command handlers that render tables or JSON

pub mod cli;
pub mod commands;
pub mod context;
pub mod utils;

pub use context::AppContext;
