//! Input validation and page selection.
//!
//! Everything here runs before the first provider call; a rejected input
//! never reaches the OCR provider.

use scandoc_core::{Result, ScandocError};

/// Maximum accepted input file size, in bytes (20 MB).
pub const MAX_FILE_SIZE: usize = 20 * 1024 * 1024;

/// Mime types the pipeline accepts as page images.
pub const SUPPORTED_IMAGE_MIMES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/webp",
    "image/tiff",
    "image/bmp",
];

/// Which source pages to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSelection {
    /// Every page of the document
    All,
    /// The first N pages
    FirstN(usize),
    /// An explicit list of 1-based page numbers
    List(Vec<u32>),
}

impl Default for PageSelection {
    #[inline]
    fn default() -> Self {
        Self::All
    }
}

impl std::str::FromStr for PageSelection {
    type Err = String;

    /// Parse `all`, `first:N` or `list:a,b,c`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        if let Some(count) = s.strip_prefix("first:") {
            let count: usize = count
                .parse()
                .map_err(|_| format!("invalid page count: '{count}'"))?;
            return Ok(Self::FirstN(count));
        }
        if let Some(list) = s.strip_prefix("list:") {
            let pages = list
                .split(',')
                .map(|part| {
                    part.trim()
                        .parse::<u32>()
                        .map_err(|_| format!("invalid page number: '{part}'"))
                })
                .collect::<std::result::Result<Vec<u32>, String>>()?;
            return Ok(Self::List(pages));
        }
        Err(format!(
            "unknown page selection: '{s}' (expected: all, first:N, list:a,b,c)"
        ))
    }
}

impl PageSelection {
    /// Resolve the selection against a document's page count into a
    /// sorted list of unique 1-based page numbers.
    ///
    /// # Errors
    /// Returns a validation error for an empty selection or a page number
    /// outside `1..=total`.
    pub fn resolve(&self, total: usize) -> Result<Vec<u32>> {
        let pages = match self {
            Self::All => (1..=total as u32).collect(),
            Self::FirstN(count) => {
                if *count == 0 {
                    return Err(ScandocError::ValidationError(
                        "page selection is empty".to_string(),
                    ));
                }
                (1..=total.min(*count) as u32).collect()
            }
            Self::List(list) => {
                let mut pages: Vec<u32> = list.clone();
                pages.sort_unstable();
                pages.dedup();
                for &page in &pages {
                    if page == 0 || page as usize > total {
                        return Err(ScandocError::ValidationError(format!(
                            "page {page} is out of range (document has {total} pages)"
                        )));
                    }
                }
                pages
            }
        };

        if pages.is_empty() {
            return Err(ScandocError::ValidationError(
                "page selection is empty".to_string(),
            ));
        }
        Ok(pages)
    }
}

/// Validate an input file's size and mime type.
///
/// # Errors
/// Returns a validation error when the file exceeds [`MAX_FILE_SIZE`] or
/// the mime type is neither a supported image nor `text/plain`.
pub fn validate_input(file_name: &str, size: usize, mime_type: &str) -> Result<()> {
    if size > MAX_FILE_SIZE {
        return Err(ScandocError::ValidationError(format!(
            "'{file_name}' is {size} bytes, above the {MAX_FILE_SIZE} byte limit"
        )));
    }
    if mime_type != "text/plain" && !SUPPORTED_IMAGE_MIMES.contains(&mime_type) {
        return Err(ScandocError::ValidationError(format!(
            "'{file_name}' has unsupported type '{mime_type}'"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selections() {
        assert_eq!("all".parse::<PageSelection>().unwrap(), PageSelection::All);
        assert_eq!(
            "first:3".parse::<PageSelection>().unwrap(),
            PageSelection::FirstN(3)
        );
        assert_eq!(
            "list:2, 5,1".parse::<PageSelection>().unwrap(),
            PageSelection::List(vec![2, 5, 1])
        );
        assert!("pages:1".parse::<PageSelection>().is_err());
        assert!("first:abc".parse::<PageSelection>().is_err());
        assert!("list:1,x".parse::<PageSelection>().is_err());
    }

    #[test]
    fn test_resolve_all_and_first() {
        assert_eq!(PageSelection::All.resolve(3).unwrap(), vec![1, 2, 3]);
        assert_eq!(PageSelection::FirstN(2).resolve(5).unwrap(), vec![1, 2]);
        // FirstN larger than the document is capped.
        assert_eq!(PageSelection::FirstN(9).resolve(2).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_resolve_list_sorts_and_dedups() {
        let selection = PageSelection::List(vec![3, 1, 3, 2]);
        assert_eq!(selection.resolve(5).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_resolve_rejects_invalid_selections() {
        assert!(PageSelection::List(vec![]).resolve(3).is_err());
        assert!(PageSelection::FirstN(0).resolve(3).is_err());
        assert!(PageSelection::List(vec![0]).resolve(3).is_err());
        assert!(PageSelection::List(vec![4]).resolve(3).is_err());
        assert!(PageSelection::All.resolve(0).is_err());
    }

    #[test]
    fn test_validate_input_size_limit() {
        assert!(validate_input("a.png", MAX_FILE_SIZE, "image/png").is_ok());
        let err = validate_input("a.png", MAX_FILE_SIZE + 1, "image/png").unwrap_err();
        assert!(matches!(err, ScandocError::ValidationError(_)));
    }

    #[test]
    fn test_validate_input_mime() {
        assert!(validate_input("a.txt", 10, "text/plain").is_ok());
        assert!(validate_input("a.jpg", 10, "image/jpeg").is_ok());
        let err = validate_input("a.zip", 10, "application/zip").unwrap_err();
        assert!(format!("{err}").contains("application/zip"));
    }
}
