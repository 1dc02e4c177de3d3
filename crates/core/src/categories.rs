//! Category constants and validation functions.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a category label in characters (VARCHAR(255) column).
pub const MAX_LABEL_LENGTH: usize = 255;

/// Maximum length of a category icon in characters.
///
/// Icons are emoji or short glyphs; the column is free text but anything
/// longer than this is almost certainly bad input.
pub const MAX_ICON_LENGTH: usize = 16;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a category label: non-empty and within the length limit.
pub fn validate_label(label: &str) -> Result<(), String> {
    if label.is_empty() {
        return Err("Category label cannot be empty".to_string());
    }
    if label.chars().count() > MAX_LABEL_LENGTH {
        return Err(format!(
            "Category label exceeds maximum length of {MAX_LABEL_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a category icon: non-empty and within the length limit.
pub fn validate_icon(icon: &str) -> Result<(), String> {
    if icon.is_empty() {
        return Err("Category icon cannot be empty".to_string());
    }
    if icon.chars().count() > MAX_ICON_LENGTH {
        return Err(format!(
            "Category icon exceeds maximum length of {MAX_ICON_LENGTH} characters"
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
