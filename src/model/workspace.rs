//! Workspace document shared with navigator cells

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// The open workspace document.
///
/// The app owns one of these behind an `Rc`; cells hold a [`WorkspaceHandle`]
/// so a cell that outlives the document never keeps it alive.
#[derive(Debug)]
pub struct WorkspaceDoc {
    /// Workspace display name
    pub name: String,

    /// Rename log, newest last (committed edits land here)
    renames: RefCell<Vec<Rename>>,
}

/// A single committed rename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    /// Name before the edit
    pub from: String,

    /// Name after the edit
    pub to: String,
}

impl WorkspaceDoc {
    /// Create a workspace document
    pub fn new(name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            renames: RefCell::new(Vec::new()),
        })
    }

    /// Record a committed rename
    pub fn record_rename(&self, from: impl Into<String>, to: impl Into<String>) {
        self.renames.borrow_mut().push(Rename {
            from: from.into(),
            to: to.into(),
        });
    }

    /// Number of renames recorded so far
    pub fn rename_count(&self) -> usize {
        self.renames.borrow().len()
    }

    /// Most recent rename, if any
    pub fn last_rename(&self) -> Option<Rename> {
        self.renames.borrow().last().cloned()
    }
}

/// Non-owning handle to the workspace document.
///
/// Upgrades to `None` once the document is dropped; cells treat that as
/// "no workspace" rather than an error.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceHandle {
    inner: Weak<WorkspaceDoc>,
}

impl WorkspaceHandle {
    /// Handle pointing at nothing
    pub fn empty() -> Self {
        Self { inner: Weak::new() }
    }

    /// Handle pointing at `doc`
    pub fn new(doc: &Rc<WorkspaceDoc>) -> Self {
        Self {
            inner: Rc::downgrade(doc),
        }
    }

    /// Borrow the document if it is still alive
    pub fn upgrade(&self) -> Option<Rc<WorkspaceDoc>> {
        self.inner.upgrade()
    }
}
