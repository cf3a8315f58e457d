//! Kinds of filesystem entities handled by the reconciler

/// What `ensure_exists` should create when the path is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    File,
    Directory,
}

/// Which immediate children `list_children` returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChildKind {
    #[default]
    All,
    File,
    Directory,
}

impl ChildKind {
    /// Returns true if a child with the given directory flag is selected
    pub fn accepts(&self, is_dir: bool) -> bool {
        match self {
            ChildKind::All => true,
            ChildKind::File => !is_dir,
            ChildKind::Directory => is_dir,
        }
    }
}
