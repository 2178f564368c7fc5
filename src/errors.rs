use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

use crate::extensions::enums::valid_csv;
use crate::style::types::Category;

/// Failure modes of code translation, plus an I/O passthrough for the
/// rendering paths.
#[derive(Error, Debug)]
pub enum Error {
    /// A code string must split into complete (category, attribute)
    /// character pairs; empty and odd-length inputs cannot.
    #[error("Malformed style code '{code}': expected one or more category/attribute character pairs")]
    MalformedCode { code: String },

    /// First character of a pair selects no known category.
    #[error(
        "Unknown category '{category}'. Valid categories: {valid}",
        valid = valid_csv::<Category>()
    )]
    UnknownCategory { category: char },

    /// Second character of a pair is missing from the selected category's
    /// attribute table.
    #[error(
        "Unknown attribute '{attribute}' for {label} category '{category}'. Valid attributes: {valid}",
        label = .category.label(),
        valid = .category.attribute_csv()
    )]
    UnknownAttribute { category: Category, attribute: char },

    /// IO passthrough (writer failures while rendering).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    /// Helper to flag a code string whose characters do not pair up.
    pub fn malformed<S: Into<String>>(code: S) -> Self {
        Error::MalformedCode { code: code.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_constructor_wraps_code() {
        let err = Error::malformed("tBf");
        match err {
            Error::MalformedCode { code } => assert_eq!(code, "tBf"),
            other => panic!("expected malformed code error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_error_formats_message() {
        let err = Error::malformed("x");
        assert_eq!(
            err.to_string(),
            "Malformed style code 'x': expected one or more category/attribute character pairs"
        );
    }

    #[test]
    fn unknown_category_lists_valid_categories() {
        let err = Error::UnknownCategory { category: 'z' };
        let message = err.to_string();
        assert!(message.contains("'z'"));
        assert!(message.contains("Valid categories: t, f, b"));
    }

    #[test]
    fn unknown_attribute_names_category_and_lists_valid() {
        let err = Error::UnknownAttribute {
            category: Category::Text,
            attribute: 'X',
        };
        let message = err.to_string();
        assert!(message.contains("'X'"));
        assert!(message.contains("text effect category 't'"));
        assert!(message.contains("Valid attributes: R, B, F, I, U, S, K, L"));
    }

    #[test]
    fn unknown_attribute_lists_colors_for_background() {
        let err = Error::UnknownAttribute {
            category: Category::Background,
            attribute: 'q',
        };
        let message = err.to_string();
        assert!(message.contains("background color category 'b'"));
        assert!(message.contains("Valid attributes: K, R, G, Y, B, P, C, W"));
    }

    #[test]
    fn io_error_formats_message() {
        let raw = std::io::Error::new(std::io::ErrorKind::Other, "pipe");
        let err = Error::from(raw);
        assert_eq!(err.to_string(), "I/O error: pipe");
    }
}
