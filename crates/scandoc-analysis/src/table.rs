//! Heuristic table detection and grid extraction.
//!
//! Detection works on delimiter statistics over the non-blank lines of a
//! page, in priority order: pipe characters, then tab characters, then
//! consistent runs of two-or-more spaces. Extraction reuses the same
//! delimiter preference so that a detected table always splits the way it
//! was detected.

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum non-blank lines for a page to qualify as tabular.
const MIN_TABLE_LINES: usize = 3;

/// Runs of two or more whitespace characters, the space-aligned delimiter.
static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").expect("valid regex"));

fn non_blank_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|line| !line.trim().is_empty()).collect()
}

/// Count of >=2-whitespace runs in a line.
fn spacing_run_count(line: &str) -> usize {
    MULTI_SPACE.find_iter(line).count()
}

/// Delimiter used to split a tabular page into cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delimiter {
    Pipe,
    Tab,
    Spaces,
}

/// Detection half of the delimiter choice: statistics over all lines.
fn detect_delimiter(lines: &[&str]) -> Option<Delimiter> {
    if lines.len() < MIN_TABLE_LINES {
        return None;
    }

    let pipe_count = lines.iter().filter(|line| line.contains('|')).count();
    if pipe_count * 2 >= lines.len() {
        return Some(Delimiter::Pipe);
    }

    let tab_count = lines.iter().filter(|line| line.contains('\t')).count();
    if tab_count * 2 >= lines.len() {
        return Some(Delimiter::Tab);
    }

    // Space-aligned columns: the per-line run counts must cluster within
    // +/-2 of their average for >=70% of lines, and the average itself must
    // exceed 2 (one or two stray double spaces are not a table).
    let runs: Vec<usize> = lines.iter().map(|line| spacing_run_count(line)).collect();
    let avg = runs.iter().sum::<usize>() as f64 / runs.len() as f64;
    let consistent = runs
        .iter()
        .filter(|&&count| (count as f64 - avg).abs() < 2.0)
        .count();

    if consistent * 10 >= lines.len() * 7 && avg > 2.0 {
        return Some(Delimiter::Spaces);
    }

    None
}

/// Extraction half of the delimiter choice: first line decides, in the
/// same preference order as detection.
fn extraction_delimiter(first_line: &str) -> Delimiter {
    if first_line.contains('|') {
        Delimiter::Pipe
    } else if first_line.contains('\t') {
        Delimiter::Tab
    } else {
        Delimiter::Spaces
    }
}

fn split_line(line: &str, delimiter: Delimiter) -> Vec<String> {
    let mut cells: Vec<String> = match delimiter {
        Delimiter::Pipe => line.split('|').map(|cell| cell.trim().to_string()).collect(),
        Delimiter::Tab => line.split('\t').map(|cell| cell.trim().to_string()).collect(),
        Delimiter::Spaces => MULTI_SPACE
            .split(line)
            .map(|cell| cell.trim().to_string())
            .collect(),
    };

    match delimiter {
        // Tab tables may legitimately carry empty interior cells; only the
        // empties produced by splitting at the line edges are dropped.
        Delimiter::Tab => {
            while cells.last().is_some_and(String::is_empty) {
                cells.pop();
            }
        }
        _ => cells.retain(|cell| !cell.is_empty()),
    }

    cells
}

/// Heuristically decide whether a page's text is tabular.
///
/// Requires at least 3 non-blank lines; empty text is never a table.
/// Idempotent and pure.
#[must_use = "returns the detection result without using it"]
pub fn detect_table(text: &str) -> bool {
    detect_delimiter(&non_blank_lines(text)).is_some()
}

/// Split a page's text into a grid of cells.
///
/// Uses the same delimiter preference as [`detect_table`]. Cells are
/// trimmed and empty cells produced by the split are discarded. Rows may
/// vary in column count; no padding is performed. Text for which
/// [`detect_table`] is false still yields a (degenerate) grid, but callers
/// must not mark the page as tabular in that case.
#[must_use = "returns the extracted grid without using it"]
pub fn extract_table_data(text: &str) -> Vec<Vec<String>> {
    let lines = non_blank_lines(text);
    let Some(first) = lines.first() else {
        return Vec::new();
    };

    let delimiter = extraction_delimiter(first);
    lines
        .iter()
        .map(|line| split_line(line, delimiter))
        .collect()
}
