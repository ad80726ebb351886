//! Random password generation.
//!
//! The generation mode is an explicit value, not ambient state: callers
//! construct a [`GeneratorMode`] and pass it in.

use rand::Rng;

use crate::error::{PasswordError, PasswordResult};

/// Shortest allowed custom-length password.
pub const MIN_LENGTH: usize = 8;
/// Longest allowed custom-length password.
pub const MAX_LENGTH: usize = 32;

const DIGITS: &[u8] = b"0123456789";
const PUNCTUATION: &[u8] = br##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Which character classes a custom-length password draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharClasses {
    /// Include `0-9`.
    pub digits: bool,
    /// Include ASCII punctuation.
    pub punctuation: bool,
    /// Include `A-Z`.
    pub uppercase: bool,
    /// Include `a-z`.
    pub lowercase: bool,
}

impl Default for CharClasses {
    /// All classes enabled.
    fn default() -> Self {
        Self {
            digits: true,
            punctuation: true,
            uppercase: true,
            lowercase: true,
        }
    }
}

impl CharClasses {
    /// Whether at least one class is enabled.
    pub const fn any(&self) -> bool {
        self.digits || self.punctuation || self.uppercase || self.lowercase
    }

    fn pool(&self) -> Vec<u8> {
        let mut pool = Vec::new();
        if self.digits {
            pool.extend_from_slice(DIGITS);
        }
        if self.punctuation {
            pool.extend_from_slice(PUNCTUATION);
        }
        if self.uppercase {
            pool.extend_from_slice(UPPERCASE);
        }
        if self.lowercase {
            pool.extend_from_slice(LOWERCASE);
        }
        pool
    }
}

/// How to generate a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorMode {
    /// The fixed pattern: 3 digits, 3 punctuation, 3 uppercase,
    /// 3 lowercase, in that order.
    Pattern,
    /// A uniform draw of `length` characters from the enabled classes.
    /// Lengths outside [`MIN_LENGTH`]..=[`MAX_LENGTH`] are clamped.
    CustomLength {
        /// Password length in characters.
        length: usize,
        /// Enabled character classes.
        classes: CharClasses,
    },
}

/// Generate a password with the thread RNG.
///
/// # Errors
///
/// [`PasswordError::EmptyCharacterSet`] when custom-length mode has
/// every class disabled.
pub fn generate(mode: &GeneratorMode) -> PasswordResult<String> {
    generate_with(mode, &mut rand::rng())
}

/// Generate a password with the given RNG. Split out so tests can pass
/// a seeded generator.
pub fn generate_with<R: Rng>(mode: &GeneratorMode, rng: &mut R) -> PasswordResult<String> {
    match mode {
        GeneratorMode::Pattern => {
            let mut password = String::with_capacity(12);
            for class in [DIGITS, PUNCTUATION, UPPERCASE, LOWERCASE] {
                for _ in 0..3 {
                    password.push(pick(class, rng));
                }
            }
            Ok(password)
        }
        GeneratorMode::CustomLength { length, classes } => {
            if !classes.any() {
                return Err(PasswordError::EmptyCharacterSet);
            }
            let length = (*length).clamp(MIN_LENGTH, MAX_LENGTH);
            let pool = classes.pool();
            Ok((0..length).map(|_| pick(&pool, rng)).collect())
        }
    }
}

fn pick<R: Rng>(pool: &[u8], rng: &mut R) -> char {
    pool[rng.random_range(0..pool.len())] as char
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn pattern_mode_layout() {
        let password = generate_with(&GeneratorMode::Pattern, &mut rng()).unwrap();
        assert_eq!(password.len(), 12);
        let bytes = password.as_bytes();
        assert!(bytes[..3].iter().all(|b| DIGITS.contains(b)));
        assert!(bytes[3..6].iter().all(|b| PUNCTUATION.contains(b)));
        assert!(bytes[6..9].iter().all(|b| UPPERCASE.contains(b)));
        assert!(bytes[9..12].iter().all(|b| LOWERCASE.contains(b)));
    }

    #[test]
    fn custom_length_draws_from_selected_classes_only() {
        let mode = GeneratorMode::CustomLength {
            length: 16,
            classes: CharClasses {
                digits: true,
                punctuation: false,
                uppercase: false,
                lowercase: true,
            },
        };
        let password = generate_with(&mode, &mut rng()).unwrap();
        assert_eq!(password.len(), 16);
        assert!(
            password
                .bytes()
                .all(|b| DIGITS.contains(&b) || LOWERCASE.contains(&b))
        );
    }

    #[test]
    fn length_is_clamped_to_widget_range() {
        let classes = CharClasses::default();
        let short = generate_with(
            &GeneratorMode::CustomLength { length: 1, classes },
            &mut rng(),
        )
        .unwrap();
        assert_eq!(short.len(), MIN_LENGTH);

        let long = generate_with(
            &GeneratorMode::CustomLength {
                length: 1000,
                classes,
            },
            &mut rng(),
        )
        .unwrap();
        assert_eq!(long.len(), MAX_LENGTH);
    }

    #[test]
    fn no_classes_is_a_typed_error() {
        let mode = GeneratorMode::CustomLength {
            length: 12,
            classes: CharClasses {
                digits: false,
                punctuation: false,
                uppercase: false,
                lowercase: false,
            },
        };
        assert!(matches!(
            generate_with(&mode, &mut rng()),
            Err(PasswordError::EmptyCharacterSet)
        ));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = generate_with(&GeneratorMode::Pattern, &mut rng()).unwrap();
        let b = generate_with(&GeneratorMode::Pattern, &mut rng()).unwrap();
        assert_eq!(a, b);
    }
}
