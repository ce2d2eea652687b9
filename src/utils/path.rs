use std::path::{Path, PathBuf};

/// Check whether a path's extension is one of `extensions` (case-insensitive)
pub fn has_extension<P: AsRef<Path>>(path: P, extensions: &[String]) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Compute where a processed file goes inside `output_dir`.
///
/// Files discovered under a root keep their path relative to that root;
/// files given directly are placed by file name.
pub fn output_path_for(path: &Path, root: Option<&Path>, output_dir: &Path) -> PathBuf {
    let relative = root
        .and_then(|r| path.strip_prefix(r).ok())
        .map(Path::to_path_buf)
        .or_else(|| path.file_name().map(PathBuf::from))
        .unwrap_or_else(|| path.to_path_buf());
    output_dir.join(relative)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_extension() {
        let exts = vec!["html".to_string()];
        assert!(has_extension("docs/index.html", &exts));
        assert!(has_extension("docs/INDEX.HTML", &exts));
        assert!(!has_extension("docs/index.md", &exts));
        assert!(!has_extension("Makefile", &exts));
    }

    #[test]
    fn test_output_path_keeps_relative_layout() {
        let out = output_path_for(
            Path::new("site/guide/intro.html"),
            Some(Path::new("site")),
            Path::new("out"),
        );
        assert_eq!(out, Path::new("out").join("guide").join("intro.html"));
    }

    #[test]
    fn test_output_path_for_direct_file() {
        let out = output_path_for(Path::new("site/guide/intro.html"), None, Path::new("out"));
        assert_eq!(out, Path::new("out").join("intro.html"));
    }
}
