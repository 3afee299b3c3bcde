//! Shared Dioxus components and Plotly.js bridge for the biodiversity dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for Plotly.js calls and browser fetch
//! - `loader`: fetches the dataset document in the browser
//! - `state`: Reactive AppState with Dioxus Signals
//! - `view`: the `DashboardView` that renders into Plotly and the signals
//! - `components`: Reusable RSX components (selector, containers, etc.)

pub mod js_bridge;
pub mod loader;
pub mod state;
pub mod view;
pub mod components;
