//! View components
//!
//! Each view represents a screen in the workbench.

mod cell_lab;
mod gallery;

pub use cell_lab::{CellLabAction, CellLabView};
pub use gallery::{GalleryAction, GalleryView};
