use std::path::PathBuf;

use serde::Serialize;

use crate::cli::types::OutputFormat;
use crate::config;
use crate::dom::Document;
use crate::toc::{collect_headings, Heading, TocLevel, TocOptions};
use crate::utils::error::BoxResult;
use crate::utils::fs::{collect_input_files, read_file};

/// Headings found in one document
#[derive(Debug, Clone, Serialize)]
pub struct FileHeadings {
    pub file: PathBuf,
    pub headings: Vec<Heading>,
}

/// Handle the headings command
pub fn handle_headings_command(
    paths: &[PathBuf],
    config_files: &[PathBuf],
    format: OutputFormat,
) -> BoxResult<()> {
    let config = config::load_config(PathBuf::from("."), Some(config_files.to_vec()))?;
    let files = collect_input_files(paths, &config.extensions)?;
    let options = config.toc_options();

    let mut found = Vec::with_capacity(files.len());
    for file in files {
        found.push(headings_for_file(file.path, &options)?);
    }

    let rendered = match format {
        OutputFormat::Text => render_text(&found),
        OutputFormat::Json => render_json(&found)?,
    };
    println!("{}", rendered);
    Ok(())
}

pub fn headings_for_file(path: PathBuf, options: &TocOptions) -> BoxResult<FileHeadings> {
    let source = read_file(&path)?;
    let doc = Document::parse(&source);
    Ok(FileHeadings {
        headings: collect_headings(&doc, options),
        file: path,
    })
}

/// One line per file, then one indented line per heading
pub fn render_text(found: &[FileHeadings]) -> String {
    let mut out = String::new();
    for entry in found {
        out.push_str(&entry.file.display().to_string());
        out.push('\n');
        for heading in &entry.headings {
            let indent = match heading.level {
                TocLevel::Top => "  ",
                TocLevel::Sub => "    ",
            };
            let label = heading.text.split_whitespace().collect::<Vec<_>>().join(" ");
            out.push_str(&format!("{}{} #{} {}\n", indent, heading.tag, heading.id, label));
        }
    }
    out.trim_end().to_string()
}

pub fn render_json(found: &[FileHeadings]) -> BoxResult<String> {
    Ok(serde_json::to_string_pretty(found)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fs::write_file;
    use tempfile::tempdir;

    fn sample() -> FileHeadings {
        let dir = tempdir().unwrap();
        let path = dir.path().join("page.html");
        write_file(&path, "<h2 id=\"intro\">\n  Intro\n</h2><h3 id=\"setup\">Set up</h3><h3>skip</h3>").unwrap();
        let mut found = headings_for_file(path, &TocOptions::default()).unwrap();
        found.file = PathBuf::from("page.html");
        found
    }

    #[test]
    fn test_render_text() {
        assert_eq!(
            render_text(&[sample()]),
            "page.html\n  h2 #intro Intro\n    h3 #setup Set up"
        );
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&[sample()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["file"], "page.html");
        assert_eq!(value[0]["headings"][0]["level"], "top");
        assert_eq!(value[0]["headings"][1]["id"], "setup");
        assert_eq!(value[0]["headings"][1]["level"], "sub");
        assert_eq!(value[0]["headings"][0]["text"], "\n  Intro\n");
    }
}
