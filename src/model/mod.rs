//! Data models for Trellis UI
//!
//! This module contains UI-independent data structures representing
//! navigator concepts like items and the open workspace document.

mod item;
mod workspace;

pub use item::{ItemKind, NavigatorItem};
pub use workspace::{Rename, WorkspaceDoc, WorkspaceHandle};
