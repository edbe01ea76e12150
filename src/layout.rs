//! Text forms of a layout: `|`-separated compact strings and line-per-row files

use std::fs;
use std::path::Path;

use crate::codec::Layout;
use crate::error::Result;

/// Join rows with `|`, e.g. `"..S|...|U.."`
pub fn to_compact<R: AsRef<[S]>, S: AsRef<str>>(layout: &[R]) -> String {
    layout
        .iter()
        .map(|row| row.as_ref().iter().map(|c| c.as_ref()).collect::<String>())
        .collect::<Vec<_>>()
        .join("|")
}

/// Split a compact string into one single-char cell per char
pub fn from_compact(text: &str) -> Layout {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('|').map(split_row).collect()
}

/// One row per line; blank lines are skipped
pub fn parse_text(text: &str) -> Layout {
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .map(split_row)
        .collect()
}

pub fn to_text<R: AsRef<[S]>, S: AsRef<str>>(layout: &[R]) -> String {
    let mut result = String::new();
    for row in layout {
        for cell in row.as_ref() {
            result.push_str(cell.as_ref());
        }
        result.push('\n');
    }
    result
}

/// Load a line-per-row layout file
pub fn load_text_file(path: impl AsRef<Path>) -> Result<Layout> {
    let contents = fs::read_to_string(path)?;
    Ok(parse_text(&contents))
}

fn split_row(row: &str) -> Vec<String> {
    row.chars().map(|c| c.to_string()).collect()
}
