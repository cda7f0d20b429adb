//! Common-root computation for relative path display.

/// Returns the longest shared component prefix of the given paths, joined
/// with the platform separator.
///
/// Paths are split on both `/` and `\` so mixed-separator input behaves.
/// The result is cosmetic only, used as a display base, never for
/// correctness.
///
/// With a single path the full path is returned, filename included; callers
/// must tolerate this. Paths that diverge at the first component (different
/// drives or volumes) produce an empty string, as does an empty input list.
pub fn common_root(paths: &[String]) -> String {
    let Some(first) = paths.first() else {
        return String::new();
    };

    let first_components: Vec<&str> = split_components(first);
    let mut prefix_len = first_components.len();

    for path in &paths[1..] {
        let components = split_components(path);
        let limit = prefix_len.min(components.len());
        let mut diverged_at = limit;
        for i in 0..limit {
            if first_components[i] != components[i] {
                diverged_at = i;
                break;
            }
        }
        prefix_len = diverged_at;
    }

    first_components[..prefix_len].join(std::path::MAIN_SEPARATOR_STR)
}

fn split_components(path: &str) -> Vec<&str> {
    path.split(['/', '\\']).collect()
}
