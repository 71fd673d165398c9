/*!
 * Common test utilities for the snipmark test suite
 */

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;

/// Opening marker produced by the default highlighter
pub const MARK_OPEN: &str = "<mark class=\"highlight\">";

/// Closing marker produced by the default highlighter
pub const MARK_CLOSE: &str = "</mark>";

/// Wrap text the way the default highlighter does
pub fn marked(text: &str) -> String {
    format!("{}{}{}", MARK_OPEN, text, MARK_CLOSE)
}

/// Build `<p>` content from paragraph bodies
pub fn html_paragraphs(bodies: &[&str]) -> String {
    bodies.iter().map(|body| format!("<p>{}</p>", body)).collect()
}

/// Count `<p>`/`<hN>` blocks in a piece of HTML
pub fn count_blocks(html: &str) -> usize {
    snipmark::highlight::segment_paragraphs(html).len()
}

/// Remove every marker element, leaving the wrapped text
pub fn strip_marks(html: &str) -> String {
    html.replace(MARK_OPEN, "").replace(MARK_CLOSE, "")
}

/// Route library logs to the test harness output
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// A sample course page with headings and paragraphs
pub fn sample_course_page() -> String {
    [
        "<h1>Four Noble Truths</h1>",
        "<p>An introduction to the course.</p>",
        "<h2>Suffering</h2>",
        "<p>The first truth concerns 苦, often translated as suffering.</p>",
        "<p>Causes and conditions (因果) are discussed next.</p>",
        "<p>Practice notes.</p>",
        "<p>Further reading.</p>",
        "<p>Closing remarks on 乐.</p>",
    ]
    .concat()
}
