use std::io::{self, Write};
use std::path::PathBuf;

use log::{debug, error, info, warn};
use rayon::prelude::*;

use crate::config::{self, TocConfig};
use crate::dom::Document;
use crate::toc::{generate_toc, TocOptions};
use crate::utils::error::{BoxResult, TocError};
use crate::utils::fs::{collect_input_files, read_file, write_file, InputFile};
use crate::utils::path::output_path_for;

/// Where processed documents go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// Print the single processed document
    Stdout,
    /// Overwrite each input that gained entries
    InPlace,
    /// Mirror inputs into a directory
    Directory(PathBuf),
}

/// Outcome of processing one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub entries: usize,
    /// Serialized document, only kept for [`OutputMode::Stdout`]
    pub html: Option<String>,
}

/// Handle the generate command
pub fn handle_generate_command(
    paths: &[PathBuf],
    config_files: &[PathBuf],
    container: Option<&str>,
    in_place: bool,
    output: Option<&PathBuf>,
) -> BoxResult<()> {
    let mut config = config::load_config(PathBuf::from("."), Some(config_files.to_vec()))?;
    if let Some(id) = container {
        config.container_id = id.to_string();
        config::validate_config(&config)?;
    }

    let mode = if in_place {
        OutputMode::InPlace
    } else if let Some(dir) = output {
        OutputMode::Directory(dir.clone())
    } else {
        OutputMode::Stdout
    };

    run_generate(paths, &config, &mode)
}

/// Process every document found under `paths`.
///
/// Documents are independent, so they are processed in parallel; each one
/// is still generated in a single pass over its own tree.
pub fn run_generate(paths: &[PathBuf], config: &TocConfig, mode: &OutputMode) -> BoxResult<()> {
    let files = collect_input_files(paths, &config.extensions)?;
    if files.is_empty() {
        warn!("No documents found");
        return Ok(());
    }

    if *mode == OutputMode::Stdout && files.len() > 1 {
        return Err(TocError::Generic(format!(
            "{} documents found; use --in-place or --output to process more than one",
            files.len()
        )).into());
    }

    let options = config.toc_options();
    let results: Vec<(PathBuf, Result<FileReport, String>)> = files
        .par_iter()
        .map(|file| {
            let result = process_file(file, &options, mode).map_err(|e| e.to_string());
            (file.path.clone(), result)
        })
        .collect();

    let total = results.len();
    let mut failures = 0;
    for (path, result) in results {
        match result {
            Ok(report) => {
                info!("{}: {} entries", report.path.display(), report.entries);
                if let Some(html) = report.html {
                    let mut stdout = io::stdout().lock();
                    stdout.write_all(html.as_bytes())?;
                    stdout.flush()?;
                }
            }
            Err(e) => {
                error!("{}: {}", path.display(), e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(TocError::Generic(format!("{} of {} documents failed", failures, total)).into());
    }
    Ok(())
}

/// Generate the table of contents for one document and write it out.
pub fn process_file(file: &InputFile, options: &TocOptions, mode: &OutputMode) -> BoxResult<FileReport> {
    let source = read_file(&file.path)?;
    let mut doc = Document::parse(&source);
    let entries = generate_toc(&mut doc, options);
    debug!("{}: generated {} entries", file.path.display(), entries);

    let mut report = FileReport {
        path: file.path.clone(),
        entries,
        html: None,
    };

    match mode {
        OutputMode::Stdout => report.html = Some(doc.to_html()),
        OutputMode::InPlace => {
            if entries > 0 {
                write_file(&file.path, &doc.to_html())?;
            }
        }
        OutputMode::Directory(dir) => {
            let target = output_path_for(&file.path, file.root.as_deref(), dir);
            write_file(&target, &doc.to_html())?;
            report.path = target;
        }
    }

    Ok(report)
}
