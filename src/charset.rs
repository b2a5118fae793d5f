//  ____  ____                       ____
// |  _ \|  _ \ __ _ ___ ___     / ___| ___ _ __
// | |_) | |_) / _` / __/ __|  | |  _ / _ \ '_ \
// |  _ <|  __/ (_| \__ \__ \  | |_| |  __/ | | |
// |_| \_\_|   \__,_|___/___/   \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-08
// Version : 0.1.0
// License : Mulan PSL v2
//
// Character classes and alphabets

/// Uppercase letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Decimal digits.
pub const DIGITS: &str = "0123456789";

/// Special characters.
pub const SPECIAL: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Characters that are easy to misread for one another (l and 1, O and 0).
pub const SIMILAR_CHARS: &str = "il1Lo0O";

/// One of the four categories a password can draw characters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl CharacterClass {
    /// Every class, in the order guaranteed characters are drawn.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    /// The full alphabet of this class.
    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Special => SPECIAL,
        }
    }

    /// Class name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Digit => "digit",
            CharacterClass::Special => "special",
        }
    }

    /// Whether `c` belongs to this class.
    pub fn contains(self, c: char) -> bool {
        self.alphabet().contains(c)
    }

    /// The usable alphabet of this class, with similar-looking characters
    /// removed when requested. Guaranteed draws and pool fills must both
    /// sample from this same set, never from the raw alphabet.
    pub fn usable_chars(self, exclude_similar: bool) -> Vec<char> {
        let chars = self.alphabet().chars();
        if exclude_similar {
            chars.filter(|c| !is_similar(*c)).collect()
        } else {
            chars.collect()
        }
    }
}

/// Whether `c` is in the similar-looking set.
pub fn is_similar(c: char) -> bool {
    SIMILAR_CHARS.contains(c)
}
