use serde::{Deserialize, Serialize};

/// Classification of why a damage region was emitted, letting a renderer
/// coarsen its redraw strategy (e.g. batch all `Style`-only regions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageKind {
    /// A line's shape changed (insert/delete/scroll), not just its content.
    Structural,
    /// Glyph content changed.
    Content,
    /// Only styling (color/attributes) changed.
    Style,
}

/// A contiguous, single-row run of changed cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub row: u16,
    pub col: u16,
    pub len: u16,
    pub kind: DamageKind,
}

impl Region {
    pub fn new(row: u16, col: u16, len: u16, kind: DamageKind) -> Self {
        Self { row, col, len, kind }
    }

    pub fn end_col(&self) -> u16 {
        self.col + self.len
    }

    /// Whether `other` starts within `gap` columns of this region ending, on
    /// the same row — the merge test `optimize` uses.
    pub fn adjoins(&self, other: &Region, gap: u16) -> bool {
        self.row == other.row && other.col <= self.end_col().saturating_add(gap)
    }
}

/// A node in the out-of-core UI layer's render tree, used by the tree-diff
/// pathway (component I) so unchanged subtrees can skip cell recomputation.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn leaf(kind: impl Into<String>) -> Self {
        Self { kind: kind.into(), attrs: Vec::new(), children: Vec::new() }
    }
}

/// A path into a render tree: index at each level from the root.
pub type TreePath = Vec<usize>;

/// The result of diffing two render trees at a given path.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeDiff {
    Unchanged,
    Replaced(TreePath),
    Updated(TreePath, Vec<AttrChange>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttrChange {
    pub key: String,
    pub old: Option<String>,
    pub new: Option<String>,
}
