use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::utils::error::{BoxResult, TocError};
use crate::utils::path::has_extension;

/// Create a directory and any parent directories if they don't exist
fn create_directory<P: AsRef<Path>>(path: P) -> BoxResult<()> {
    fs::create_dir_all(path.as_ref())?;
    Ok(())
}

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> BoxResult<String> {
    let mut file = fs::File::open(path.as_ref()).map_err(|e| {
        TocError::File(format!("Failed to open {}: {}", path.as_ref().display(), e))
    })?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Write a string to a file, creating the file if it doesn't exist
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> BoxResult<()> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            create_directory(parent)?;
        }
    }

    let mut file = fs::File::create(path.as_ref())?;
    file.write_all(contents.as_bytes())?;
    Ok(())
}

/// An input document together with the root it was found under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    pub path: PathBuf,
    /// Directory the path was discovered from; `None` for paths given directly
    pub root: Option<PathBuf>,
}

/// Expand the given paths into the list of HTML files to process.
///
/// Files named explicitly are always included. Directories are walked
/// recursively and only files whose extension is in `extensions` are kept.
/// The result is sorted per root so output is stable between runs.
pub fn collect_input_files(paths: &[PathBuf], extensions: &[String]) -> BoxResult<Vec<InputFile>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(InputFile { path: path.clone(), root: None });
        } else if path.is_dir() {
            let mut found = Vec::new();
            for entry in WalkDir::new(path).follow_links(true) {
                let entry = entry.map_err(|e| {
                    TocError::File(format!("Failed to walk {}: {}", path.display(), e))
                })?;
                if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
                    found.push(InputFile {
                        path: entry.path().to_path_buf(),
                        root: Some(path.clone()),
                    });
                }
            }
            found.sort_by(|a, b| a.path.cmp(&b.path));
            debug!("Found {} document(s) under {}", found.len(), path.display());
            files.extend(found);
        } else {
            return Err(TocError::File(format!("Input path does not exist: {}", path.display())).into());
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn exts() -> Vec<String> {
        vec!["html".to_string(), "htm".to_string()]
    }

    #[test]
    fn test_write_then_read_creates_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/deeper/page.html");
        write_file(&path, "<p>hi</p>").unwrap();
        assert_eq!(read_file(&path).unwrap(), "<p>hi</p>");
    }

    #[test]
    fn test_collect_walks_directories_by_extension() {
        let dir = tempdir().unwrap();
        write_file(dir.path().join("b.html"), "").unwrap();
        write_file(dir.path().join("a.htm"), "").unwrap();
        write_file(dir.path().join("notes.txt"), "").unwrap();
        write_file(dir.path().join("sub/c.html"), "").unwrap();

        let files = collect_input_files(&[dir.path().to_path_buf()], &exts()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| f.path.strip_prefix(dir.path()).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(names, vec!["a.htm", "b.html", "sub/c.html"]);
        assert!(files.iter().all(|f| f.root.as_deref() == Some(dir.path())));
    }

    #[test]
    fn test_explicit_file_ignores_extension_filter() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("page.txt");
        write_file(&path, "").unwrap();
        let files = collect_input_files(&[path.clone()], &exts()).unwrap();
        assert_eq!(files, vec![InputFile { path, root: None }]);
    }

    #[test]
    fn test_missing_path_is_an_error() {
        let dir = tempdir().unwrap();
        let result = collect_input_files(&[dir.path().join("nope")], &exts());
        assert!(result.is_err());
    }
}
