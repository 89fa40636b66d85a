//! Custom field validators shared by request DTOs.

use validator::ValidationError;

/// PostgreSQL text columns cannot store `U+0000`.
pub fn reject_nul(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(ValidationError::new("nul_character")
            .with_message("Must not contain NUL characters".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_nul() {
        assert!(reject_nul("plain text").is_ok());
        assert!(reject_nul("").is_ok());
        assert!(reject_nul("a\0b").is_err());
    }
}
