//! Reusable UI components
//!
//! The two navigator building blocks: the empty-state placeholder and
//! the composite outline cell.

pub mod cell;
pub mod empty_state;

pub use cell::*;
pub use empty_state::*;
