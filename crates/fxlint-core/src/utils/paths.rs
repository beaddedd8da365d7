//! File-path utilities for rule implementations.
//!
//! All comparisons are segment-wise and separator-normalized: `/` and `\`
//! both split, so conventions match the same way regardless of how the host
//! built the paths. Segment comparisons are exact, never substring:
//! `internals` does not match `internal`.

use std::path::Path;

/// Splits a path into its normalized segments.
///
/// Both separators split; empty and `.` segments are dropped.
#[must_use]
pub fn segments(path: &Path) -> Vec<String> {
    let text = path.to_string_lossy();
    text.split(['/', '\\'])
        .filter(|s| !s.is_empty() && *s != ".")
        .map(String::from)
        .collect()
}

/// Segments of the path's enclosing directory (the path minus its base name).
#[must_use]
pub fn dir_segments(path: &Path) -> Vec<String> {
    let mut segs = segments(path);
    segs.pop();
    segs
}

/// Last segment of the path, or the empty string for a bare root.
#[must_use]
pub fn base_name(path: &Path) -> String {
    segments(path).pop().unwrap_or_default()
}

/// Whether any segment equals `segment` exactly.
#[must_use]
pub fn has_segment(segs: &[String], segment: &str) -> bool {
    segs.iter().any(|s| s == segment)
}

/// Whether `segs` starts, segment-wise, with the segments of `dir`.
///
/// `test/mocksextra` does not start with `test/mocks`; `test/mocks/deep`
/// does. An empty `dir` matches everything.
#[must_use]
pub fn starts_with_dir(segs: &[String], dir: &str) -> bool {
    let prefix: Vec<&str> = dir
        .split(['/', '\\'])
        .filter(|s| !s.is_empty() && *s != ".")
        .collect();
    if prefix.len() > segs.len() {
        return false;
    }
    prefix.iter().zip(segs).all(|(p, s)| p == s)
}

/// Whether the path matches any of the glob `patterns`.
///
/// Matching runs against the `/`-joined normalized segments. A pattern that
/// fails to compile matches nothing.
#[must_use]
pub fn matches_any(path: &Path, patterns: &[String]) -> bool {
    let normalized = segments(path).join("/");
    patterns
        .iter()
        .any(|p| glob::Pattern::new(p).map_or(false, |pat| pat.matches(&normalized)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn segments_normalize_both_separators() {
        assert_eq!(
            segments(Path::new("internal/auth/module.go")),
            vec!["internal", "auth", "module.go"]
        );
        assert_eq!(
            segments(Path::new(r"internal\auth\module.go")),
            vec!["internal", "auth", "module.go"]
        );
        assert_eq!(
            segments(Path::new("./internal//auth/module.go")),
            vec!["internal", "auth", "module.go"]
        );
    }

    #[test]
    fn dir_segments_drop_base_name() {
        assert_eq!(
            dir_segments(Path::new("internal/auth/module.go")),
            vec!["internal", "auth"]
        );
        assert!(dir_segments(Path::new("module.go")).is_empty());
    }

    #[test]
    fn base_name_is_last_segment() {
        assert_eq!(base_name(Path::new("internal/auth/module.go")), "module.go");
        assert_eq!(base_name(Path::new("module.go")), "module.go");
        assert_eq!(base_name(Path::new("")), "");
    }

    #[test]
    fn has_segment_is_exact() {
        let segs = segments(Path::new("internals/auth"));
        assert!(!has_segment(&segs, "internal"));
        let segs = segments(Path::new("internal/auth"));
        assert!(has_segment(&segs, "internal"));
    }

    #[test]
    fn starts_with_dir_is_segment_wise() {
        let segs = segments(Path::new("test/mocks/deep"));
        assert!(starts_with_dir(&segs, "test/mocks"));
        let segs = segments(Path::new("test/mocksextra"));
        assert!(!starts_with_dir(&segs, "test/mocks"));
        let segs = segments(Path::new("test"));
        assert!(!starts_with_dir(&segs, "test/mocks"));
        assert!(starts_with_dir(&segs, ""));
    }

    #[test]
    fn matches_any_globs() {
        let patterns = vec!["internal/*/module.go".to_string()];
        assert!(matches_any(
            &PathBuf::from("internal/auth/module.go"),
            &patterns
        ));
        assert!(matches_any(
            &PathBuf::from(r"internal\auth\module.go"),
            &patterns
        ));
        assert!(!matches_any(&PathBuf::from("internal/module.go"), &patterns));
        assert!(!matches_any(&PathBuf::from("a.go"), &[]));
    }

    #[test]
    fn malformed_pattern_matches_nothing() {
        let patterns = vec!["[".to_string()];
        assert!(!matches_any(&PathBuf::from("internal/module.go"), &patterns));
    }
}
