//! # Validation Utilities
//!
//! Request-field validation helpers.

/// Validate that a required field is non-blank, returning its trimmed value.
pub fn required_field<'a>(value: &'a str, field_name: &str) -> Result<&'a str, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(format!("{} is required", field_name))
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_field_trims() {
        assert_eq!(required_field("  alice  ", "name"), Ok("alice"));
    }

    #[test]
    fn test_required_field_rejects_blank() {
        let err = required_field("   ", "email").expect_err("blank field should be rejected");
        assert_eq!(err, "email is required");
    }
}
