//! Phrase constants and validation functions.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum number of pinned phrases allowed per category.
pub const PIN_LIMIT_PER_CATEGORY: usize = 3;

/// Advisory entry-length limit for phrase text, in characters.
///
/// Clients constrain input to this length; it is deliberately NOT enforced
/// at the storage level, so phrases imported or created through the API may
/// be longer.
pub const PHRASE_ENTRY_LENGTH: usize = 25;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate phrase text: must be non-empty.
pub fn validate_phrase_text(text: &str) -> Result<(), String> {
    if text.is_empty() {
        return Err("Phrase text cannot be empty".to_string());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_phrase_text_accepted() {
        assert!(validate_phrase_text("fast as lightning").is_ok());
    }

    #[test]
    fn empty_phrase_text_rejected() {
        let result = validate_phrase_text("");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("cannot be empty"));
    }

    #[test]
    fn overlong_phrase_text_still_accepted() {
        // The entry limit is advisory only; storage accepts longer text.
        assert!(validate_phrase_text(&"x".repeat(PHRASE_ENTRY_LENGTH * 4)).is_ok());
    }
}
