//  ____  ____                       ____
// |  _ \|  _ \ __ _ ___ ___     / ___| ___ _ __
// | |_) | |_) / _` / __/ __|  | |  _ / _ \ '_ \
// |  _ <|  __/ (_| \__ \__ \  | |_| |  __/ | | |
// |_| \_\_|   \__,_|___/___/   \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-09
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password generator

use std::fmt;

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng, RngCore};

use crate::charset::CharacterClass;

/// Options for one password generation run.
#[derive(Debug, Clone)]
pub struct PasswordOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_digits: bool,
    pub include_special: bool,
    pub exclude_similar: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 32,
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_special: true,
            exclude_similar: false,
        }
    }
}

impl PasswordOptions {
    /// The classes these options enable, in enumeration order.
    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        let mut classes = Vec::new();
        if self.include_uppercase { classes.push(CharacterClass::Uppercase); }
        if self.include_lowercase { classes.push(CharacterClass::Lowercase); }
        if self.include_digits { classes.push(CharacterClass::Digit); }
        if self.include_special { classes.push(CharacterClass::Special); }
        classes
    }
}

/// Why a password could not be generated.
#[derive(Debug)]
pub enum PassGenError {
    /// No character class is enabled.
    NoClasses,
    /// The requested length cannot fit one character from every enabled
    /// class; carries the minimum feasible length.
    LengthTooShort(usize),
    /// Removing similar-looking characters left an enabled class empty.
    EmptyClass(CharacterClass),
    /// The operating system randomness source is unavailable.
    EntropySource(String),
}

impl fmt::Display for PassGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassGenError::NoClasses => {
                write!(f, "At least one character class must be enabled")
            }
            PassGenError::LengthTooShort(min) => {
                write!(
                    f,
                    "Password length must be at least {} to include all selected character classes",
                    min
                )
            }
            PassGenError::EmptyClass(class) => {
                write!(
                    f,
                    "The {} character class is empty after removing similar-looking characters",
                    class.name()
                )
            }
            PassGenError::EntropySource(msg) => {
                write!(f, "Secure randomness source unavailable: {}", msg)
            }
        }
    }
}

impl std::error::Error for PassGenError {}

/// Generate one password from the operating system randomness source.
pub fn generate_password(options: &PasswordOptions) -> Result<String, PassGenError> {
    let mut rng = secure_rng()?;
    generate_password_with_rng(options, &mut rng)
}

/// Generate one password, drawing every random value from `rng`. The
/// `CryptoRng` bound keeps non-cryptographic generators out.
pub fn generate_password_with_rng<R: Rng + CryptoRng>(
    options: &PasswordOptions,
    rng: &mut R,
) -> Result<String, PassGenError> {
    let classes = options.enabled_classes();

    // Validate before drawing anything
    if classes.is_empty() {
        return Err(PassGenError::NoClasses);
    }
    if options.length < classes.len() {
        return Err(PassGenError::LengthTooShort(classes.len()));
    }

    // Build each enabled class's usable set once; the guaranteed draws and
    // the fill below sample from these same sets
    let mut class_sets = Vec::with_capacity(classes.len());
    for class in &classes {
        let chars = class.usable_chars(options.exclude_similar);
        if chars.is_empty() {
            return Err(PassGenError::EmptyClass(*class));
        }
        class_sets.push(chars);
    }

    // Combined pool for the fill step
    let pool: Vec<char> = class_sets.concat();

    let mut password_chars = Vec::with_capacity(options.length);

    // Add one character from each enabled class
    for chars in &class_sets {
        password_chars.push(*chars.choose(rng).unwrap());
    }

    // Fill the remaining length from the combined pool
    for _ in 0..(options.length - class_sets.len()) {
        password_chars.push(*pool.choose(rng).unwrap());
    }

    // Shuffle so the guaranteed characters are not pinned to the front
    password_chars.shuffle(rng);

    Ok(password_chars.into_iter().collect())
}

/// Probe the operating system randomness source before trusting it.
/// There is no fallback: if the source fails, generation fails.
fn secure_rng() -> Result<OsRng, PassGenError> {
    let mut rng = OsRng;
    let mut probe = [0u8; 8];
    rng.try_fill_bytes(&mut probe)
        .map_err(|e| PassGenError::EntropySource(e.to_string()))?;
    Ok(rng)
}
