// src/generators/password.rs
use rand::{rngs::OsRng, Rng, seq::SliceRandom, distributions::Uniform};
use rand::distributions::Distribution;
use std::collections::HashSet;
use thiserror::Error;

use crate::models::{CharacterClasses, GeneratedPassword, PasswordGenerationOptions};

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{};:,.<>/?|~";

// Bits at which the score saturates to 100
const FULL_SCORE_BITS: f64 = 64.0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Выберите хотя бы один тип символов")]
    NoCharsets,
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Selected classes in lowercase, uppercase, numbers, symbols order.
fn selected_sets(classes: &CharacterClasses) -> Vec<&'static [u8]> {
    let mut sets = Vec::with_capacity(4);
    if classes.lowercase {
        sets.push(LOWERCASE);
    }
    if classes.uppercase {
        sets.push(UPPERCASE);
    }
    if classes.numbers {
        sets.push(NUMBERS);
    }
    if classes.symbols {
        sets.push(SYMBOLS);
    }
    sets
}

/// Concatenate the selected character sets.
pub fn build_charset(classes: &CharacterClasses) -> Result<Vec<u8>> {
    let charset = selected_sets(classes).concat();
    if charset.is_empty() {
        return Err(GeneratorError::NoCharsets);
    }
    Ok(charset)
}

pub fn charset_size(charset: &[u8]) -> usize {
    charset.iter().collect::<HashSet<_>>().len()
}

pub fn calculate_bits(charset_size: usize, length: usize) -> f64 {
    if charset_size == 0 || length == 0 {
        return 0.0;
    }
    let bits = length as f64 * (charset_size as f64).log2();
    (bits * 10.0).round_ties_even() / 10.0
}

pub fn score_percent_from_bits(bits: f64) -> u8 {
    if bits <= 0.0 {
        return 0;
    }
    (bits / FULL_SCORE_BITS * 100.0).round_ties_even().min(100.0) as u8
}

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    /// Generate one password of exactly `length` characters.
    ///
    /// One character of every selected class is placed first (as long as
    /// `length` leaves room for it), the rest is drawn uniformly from the
    /// combined charset, and the result is shuffled with the OS RNG.
    pub fn generate_password(&self, length: usize, classes: &CharacterClasses) -> Result<String> {
        let charset = build_charset(classes)?;
        let mut rng = OsRng;

        let mut chars: Vec<u8> = selected_sets(classes)
            .into_iter()
            .map(|set| set[rng.gen_range(0..set.len())])
            .take(length)
            .collect();

        let dist = Uniform::from(0..charset.len());
        while chars.len() < length {
            chars.push(charset[dist.sample(&mut rng)]);
        }

        chars.shuffle(&mut rng);
        Ok(chars.into_iter().map(char::from).collect())
    }

    /// Generate `options.count` passwords and score each one.
    pub fn generate_batch(&self, options: &PasswordGenerationOptions) -> Result<Vec<GeneratedPassword>> {
        let charset = build_charset(&options.classes)?;
        let bits = calculate_bits(charset_size(&charset), options.length);
        let score_percent = score_percent_from_bits(bits);

        (0..options.count)
            .map(|_| {
                Ok(GeneratedPassword {
                    password: self.generate_password(options.length, &options.classes)?,
                    bits,
                    score_percent,
                })
            })
            .collect()
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}
