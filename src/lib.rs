//! Trellis UI - workbench for the Trellis navigator widgets
//!
//! A TUI application for exercising the diagram navigator's cell and
//! placeholder components outside the full editor.
//!
//! This library provides:
//! - [`app`]: Application state and logic
//! - [`keys`]: Key binding definitions
//! - [`model`]: Domain models
//! - [`ui`]: User interface components
//!
//! [`ui::components`] holds the widgets under test; the views in
//! [`ui::views`] wrap them with interactive controls.

pub mod app;
pub mod keys;
pub mod model;
pub mod ui;
