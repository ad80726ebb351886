//! Password command — random password generation.

use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use tally_core::password::{CharClasses, GeneratorMode, generate};

/// Arguments for the `password` subcommand.
///
/// Without `--length`, the fixed pattern is used (3 digits,
/// 3 punctuation, 3 uppercase, 3 lowercase). With `--length`, the
/// password is a uniform draw from the selected character classes;
/// selecting none of the class flags selects all of them.
#[derive(Args, Debug)]
pub struct PasswordArgs {
    /// Custom length (8–32); switches off the fixed pattern.
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Draw from digits (0-9).
    #[arg(long)]
    pub digits: bool,

    /// Draw from punctuation (!@#$%...).
    #[arg(long)]
    pub punctuation: bool,

    /// Draw from uppercase letters (A-Z).
    #[arg(long)]
    pub uppercase: bool,

    /// Draw from lowercase letters (a-z).
    #[arg(long)]
    pub lowercase: bool,
}

impl PasswordArgs {
    fn mode(&self) -> GeneratorMode {
        match self.length {
            None => GeneratorMode::Pattern,
            Some(length) => {
                let any_flag = self.digits || self.punctuation || self.uppercase || self.lowercase;
                let classes = if any_flag {
                    CharClasses {
                        digits: self.digits,
                        punctuation: self.punctuation,
                        uppercase: self.uppercase,
                        lowercase: self.lowercase,
                    }
                } else {
                    CharClasses::default()
                };
                GeneratorMode::CustomLength { length, classes }
            }
        }
    }
}

#[derive(Serialize)]
struct PasswordReport {
    password: String,
}

/// Generate and print a password.
#[instrument(name = "cmd_password", skip_all)]
pub fn cmd_password(args: PasswordArgs, global_json: bool) -> anyhow::Result<()> {
    let mode = args.mode();
    debug!(?mode, "executing password command");

    let password = generate(&mode)?;

    if global_json {
        let report = PasswordReport { password };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{password}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_length_means_pattern_mode() {
        let args = PasswordArgs {
            length: None,
            digits: false,
            punctuation: false,
            uppercase: false,
            lowercase: false,
        };
        assert_eq!(args.mode(), GeneratorMode::Pattern);
    }

    #[test]
    fn length_without_flags_selects_all_classes() {
        let args = PasswordArgs {
            length: Some(16),
            digits: false,
            punctuation: false,
            uppercase: false,
            lowercase: false,
        };
        assert_eq!(
            args.mode(),
            GeneratorMode::CustomLength {
                length: 16,
                classes: CharClasses::default(),
            }
        );
    }

    #[test]
    fn length_with_flags_selects_only_those() {
        let args = PasswordArgs {
            length: Some(12),
            digits: true,
            punctuation: false,
            uppercase: false,
            lowercase: true,
        };
        assert_eq!(
            args.mode(),
            GeneratorMode::CustomLength {
                length: 12,
                classes: CharClasses {
                    digits: true,
                    punctuation: false,
                    uppercase: false,
                    lowercase: true,
                },
            }
        );
    }
}
