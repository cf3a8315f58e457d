//! Property tests for the filesystem reconciler.

use std::path::PathBuf;

use proptest::prelude::*;

use berth::{ChildKind, EntityKind, LocalFs};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9_]{1,8}").unwrap()
}

fn rel_path() -> impl Strategy<Value = PathBuf> {
    proptest::collection::vec(segment(), 1..=4).prop_map(|parts| parts.iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: ensure_exists creates the whole parent chain and the target.
    #[test]
    fn property_ensure_file_then_exists(rel in rel_path()) {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFs::new();
        let path = dir.path().join(&rel);

        fs.ensure_exists(&path, EntityKind::File).unwrap();

        prop_assert!(path.is_file());
        prop_assert!(fs.path_exists(&path.display().to_string()));
        let mut parent = path.parent();
        while let Some(p) = parent {
            if p == dir.path() {
                break;
            }
            prop_assert!(p.is_dir());
            parent = p.parent();
        }
    }

    /// PROPERTY: ensure_exists twice is the same as once.
    #[test]
    fn property_ensure_dir_is_idempotent(rel in rel_path()) {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFs::new();
        let path = dir.path().join(&rel);

        fs.ensure_exists(&path, EntityKind::Directory).unwrap();
        std::fs::write(path.join("marker"), "x").unwrap();
        fs.ensure_exists(&path, EntityKind::Directory).unwrap();

        prop_assert!(path.join("marker").is_file());
    }

    /// PROPERTY: removals never fail on a second call.
    #[test]
    fn property_removals_are_idempotent(rel in rel_path(), as_dir in any::<bool>()) {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFs::new();
        let path = dir.path().join(&rel);

        if as_dir {
            fs.ensure_exists(&path.join("inner"), EntityKind::File).unwrap();
            fs.remove_tree(&path).unwrap();
            fs.remove_tree(&path).unwrap();
        } else {
            fs.ensure_exists(&path, EntityKind::File).unwrap();
            fs.remove_file(&path).unwrap();
            fs.remove_file(&path).unwrap();
        }

        prop_assert!(!path.exists());
    }

    /// PROPERTY: copying from a missing source leaves the destination untouched.
    #[test]
    fn property_copy_tree_missing_source_is_noop(
        files in proptest::collection::btree_set(segment(), 0..=5),
        dest_exists in any::<bool>(),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFs::new();
        let dest = dir.path().join("dest");
        if dest_exists {
            for name in &files {
                fs.ensure_exists(&dest.join(name), EntityKind::File).unwrap();
            }
            fs.ensure_exists(&dest, EntityKind::Directory).unwrap();
        }
        let before = if dest.exists() {
            fs.list_children(&dest, ChildKind::All).unwrap()
        } else {
            Vec::new()
        };

        let copied = fs.copy_tree(&dir.path().join("missing"), &dest).unwrap();

        prop_assert_eq!(copied, 0);
        prop_assert_eq!(dest.exists(), dest_exists);
        if dest_exists {
            prop_assert_eq!(fs.list_children(&dest, ChildKind::All).unwrap(), before);
        }
    }

    /// PROPERTY: list_children partitions into files and directories.
    #[test]
    fn property_list_children_partitions(
        files in proptest::collection::btree_set(segment(), 0..=5),
        dirs in proptest::collection::btree_set(segment(), 0..=5),
    ) {
        let root = tempfile::tempdir().unwrap();
        let fs = LocalFs::new();
        for name in &dirs {
            fs.ensure_exists(&root.path().join(format!("d_{}", name)), EntityKind::Directory).unwrap();
        }
        for name in &files {
            fs.ensure_exists(&root.path().join(format!("f_{}", name)), EntityKind::File).unwrap();
        }

        let all = fs.list_children(root.path(), ChildKind::All).unwrap();
        let only_files = fs.list_children(root.path(), ChildKind::File).unwrap();
        let only_dirs = fs.list_children(root.path(), ChildKind::Directory).unwrap();

        prop_assert_eq!(all.len(), files.len() + dirs.len());
        prop_assert_eq!(only_files.len(), files.len());
        prop_assert_eq!(only_dirs.len(), dirs.len());
        prop_assert!(only_dirs.iter().all(|d| d.ends_with('/')));
        prop_assert!(only_files.iter().all(|f| !f.ends_with('/')));
    }
}
