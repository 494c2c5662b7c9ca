//! UI layer
//!
//! Contains the navigator components, the workbench views that exercise
//! them, and the shared capability, metric, symbol, and theme tables.

pub mod caps;
pub mod components;
pub mod metrics;
pub mod symbols;
pub mod theme;
pub mod views;
pub mod widgets;
