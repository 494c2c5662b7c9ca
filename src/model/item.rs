//! Navigator item data model

/// A single entry shown in the navigator outline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigatorItem {
    /// Display name (edited in place when the row is renamed)
    pub name: String,

    /// Secondary text (kind label, change count, and the like)
    pub detail: String,

    /// Semantic kind, drives the icon glyph
    pub kind: ItemKind,
}

impl NavigatorItem {
    /// Create a new item
    pub fn new(name: impl Into<String>, detail: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            detail: detail.into(),
            kind,
        }
    }
}

/// Kinds of entries the navigator knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// A folder grouping other entries
    Folder,

    /// A diagram canvas document
    Canvas,

    /// A stencil (shape library)
    Stencil,

    /// An exported asset (image, archive)
    Asset,

    /// Anything else
    Generic,
}

impl ItemKind {
    /// Short label used in secondary text and the workbench panel
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Folder => "folder",
            ItemKind::Canvas => "canvas",
            ItemKind::Stencil => "stencil",
            ItemKind::Asset => "asset",
            ItemKind::Generic => "item",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_new() {
        let item = NavigatorItem::new("flow.canvas", "3 edits", ItemKind::Canvas);
        assert_eq!(item.name, "flow.canvas");
        assert_eq!(item.detail, "3 edits");
        assert_eq!(item.kind, ItemKind::Canvas);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(ItemKind::Folder.label(), "folder");
        assert_eq!(ItemKind::Canvas.label(), "canvas");
        assert_eq!(ItemKind::Stencil.label(), "stencil");
        assert_eq!(ItemKind::Asset.label(), "asset");
        assert_eq!(ItemKind::Generic.label(), "item");
    }
}
