//! UI module for the CaseWise terminal client.
//!
//! Rendering only reads state; every change goes through the reducers.
//! - Auth screens (login, signup, forgot password)
//! - Dashboard layout: sidebar and content views
//! - Upload prompt overlay and toasts

mod auth_screen;
mod gradient;
mod render;
mod sidebar;
pub mod text;
mod toast;
mod upload_dialog;
mod views;
mod widgets;

pub use auth_screen::render_auth_screen;
pub use render::{render_dashboard, ui};
pub use toast::{render_toasts, Toast, ToastLevel, ToastState};
