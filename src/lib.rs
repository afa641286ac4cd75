//! CaseWise CLI - terminal front-end for the CaseWise case study tool.
//!
//! This library exposes the core modules for testing and reuse.

pub mod app;
pub mod auth;
pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod input;
pub mod logging;
pub mod state;
pub mod text_input;
pub mod ui;
