// src/models.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

pub const DEFAULT_LENGTH: i64 = 16;
pub const DEFAULT_COUNT: i64 = 5;
pub const MIN_LENGTH: i64 = 4;
pub const MAX_LENGTH: i64 = 256;
pub const MIN_COUNT: i64 = 1;
pub const MAX_COUNT: i64 = 100;

/// Which character classes a generated password draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterClasses {
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl Default for CharacterClasses {
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: false,
        }
    }
}

// Password generation options, already clamped to the accepted ranges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub count: usize,
    pub classes: CharacterClasses,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self::clamped(DEFAULT_LENGTH, DEFAULT_COUNT, CharacterClasses::default())
    }
}

impl PasswordGenerationOptions {
    pub fn clamped(length: i64, count: i64, classes: CharacterClasses) -> Self {
        Self {
            length: length.clamp(MIN_LENGTH, MAX_LENGTH) as usize,
            count: count.clamp(MIN_COUNT, MAX_COUNT) as usize,
            classes,
        }
    }
}

/// One generated password with its entropy estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeneratedPassword {
    pub password: String,
    /// Entropy in bits, rounded to one decimal
    pub bits: f64,
    /// Strength score (0-100)
    pub score_percent: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_length_and_count() {
        let options = PasswordGenerationOptions::clamped(1, 0, CharacterClasses::default());
        assert_eq!(options.length, 4);
        assert_eq!(options.count, 1);

        let options = PasswordGenerationOptions::clamped(10_000, 500, CharacterClasses::default());
        assert_eq!(options.length, 256);
        assert_eq!(options.count, 100);
    }

    #[test]
    fn symbols_are_off_by_default() {
        let classes = CharacterClasses::default();
        assert!(classes.uppercase && classes.lowercase && classes.numbers);
        assert!(!classes.symbols);
    }
}
