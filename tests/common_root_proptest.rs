//! Property-based tests for the common-root computation.

use proptest::prelude::*;
use srclint_core::common_root;

fn component() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,4}".prop_map(|s| s.to_string())
}

fn components() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(component(), 1..6)
}

fn join(components: &[String]) -> String {
    components.join("/")
}

fn split(path: &str) -> Vec<&str> {
    path.split(['/', '\\']).collect()
}

proptest! {
    /// A single path is returned whole (filename included), modulo separator
    /// canonicalization.
    #[test]
    fn single_path_roundtrips(parts in components()) {
        let path = join(&parts);
        let root = common_root(&[path]);
        prop_assert_eq!(
            split(&root),
            parts.iter().map(String::as_str).collect::<Vec<_>>()
        );
    }

    /// Duplicating a path never changes the result.
    #[test]
    fn duplicate_paths_are_idempotent(parts in components()) {
        let path = join(&parts);
        let single = common_root(std::slice::from_ref(&path));
        let doubled = common_root(&[path.clone(), path]);
        prop_assert_eq!(single, doubled);
    }

    /// The result is a component-wise prefix of every input path.
    #[test]
    fn result_is_prefix_of_every_input(
        base in components(),
        suffixes in prop::collection::vec(prop::collection::vec(component(), 0..4), 1..5),
    ) {
        let paths: Vec<String> = suffixes
            .iter()
            .map(|suffix| {
                let mut parts = base.clone();
                parts.extend(suffix.iter().cloned());
                join(&parts)
            })
            .collect();

        let root = common_root(&paths);
        let root_parts: Vec<&str> = if root.is_empty() { vec![] } else { split(&root) };

        for path in &paths {
            let path_parts = split(path);
            prop_assert!(root_parts.len() <= path_parts.len());
            prop_assert_eq!(&path_parts[..root_parts.len()], &root_parts[..]);
        }

        // The shared base is always part of the prefix.
        prop_assert!(root_parts.len() >= base.len());
    }

    /// Order of inputs never affects the prefix length.
    #[test]
    fn reversal_preserves_prefix_length(
        base in components(),
        suffixes in prop::collection::vec(prop::collection::vec(component(), 0..4), 2..5),
    ) {
        let paths: Vec<String> = suffixes
            .iter()
            .map(|suffix| {
                let mut parts = base.clone();
                parts.extend(suffix.iter().cloned());
                join(&parts)
            })
            .collect();

        let forward = common_root(&paths);
        let mut reversed = paths.clone();
        reversed.reverse();
        let backward = common_root(&reversed);

        prop_assert_eq!(split(&forward).len(), split(&backward).len());
    }
}
