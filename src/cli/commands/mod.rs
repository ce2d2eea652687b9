mod generate;
mod headings;

pub use generate::{handle_generate_command, process_file, run_generate, FileReport, OutputMode};
pub use headings::{handle_headings_command, headings_for_file, render_json, render_text, FileHeadings};
