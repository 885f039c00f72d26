//! Input validation utilities

use crate::constants::{self, MAX_SOURCE_CODE_SIZE};

/// Validate programming language
pub fn validate_language(language: &str) -> Result<(), &'static str> {
    if constants::languages::ALL.contains(&language) {
        Ok(())
    } else {
        Err("Unsupported programming language")
    }
}

/// Validate source code size
pub fn validate_source_code(code: &str) -> Result<(), &'static str> {
    if code.trim().is_empty() {
        return Err("Source code cannot be empty");
    }
    if code.len() as u64 > MAX_SOURCE_CODE_SIZE {
        return Err("Source code exceeds maximum size of 64KB");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_language() {
        assert!(validate_language("c").is_ok());
        assert!(validate_language("cpp").is_ok());
        assert!(validate_language("python").is_ok());
        assert!(validate_language("brainfuck").is_err());
    }

    #[test]
    fn test_validate_source_code() {
        assert!(validate_source_code("int main() {}").is_ok());
        assert!(validate_source_code("").is_err());
        assert!(validate_source_code("   \n").is_err());
        assert!(validate_source_code(&"x".repeat(MAX_SOURCE_CODE_SIZE as usize + 1)).is_err());
    }
}
