use std::fmt;

use crate::core::alphabet::Alphabet;

/// Errors that can occur during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a character that is neither an alphabet symbol nor
    /// an allowed pad character
    InvalidCharacter {
        char: char,
        position: usize,
        input: String,
        valid_chars: String,
    },
    /// The input is empty or its length is not a whole number of blocks
    InvalidLength {
        actual: usize,
        expected: String,
        hint: String,
    },
}

impl DecodeError {
    /// Create an InvalidCharacter error with context
    pub fn invalid_character(c: char, position: usize, input: &str, valid_chars: &str) -> Self {
        // Truncate long inputs
        let display_input = if input.chars().count() > 60 {
            format!("{}...", input.chars().take(60).collect::<String>())
        } else {
            input.to_string()
        };

        DecodeError::InvalidCharacter {
            char: c,
            position,
            input: display_input,
            valid_chars: valid_chars.to_string(),
        }
    }

    /// Create an InvalidCharacter error for the byte at `byte_offset` of `input`.
    ///
    /// The reported position is a character index, so multi-byte UTF-8 input
    /// still lines the caret up under the right character.
    pub fn invalid_character_at(input: &str, byte_offset: usize, alphabet: &Alphabet) -> Self {
        let c = input
            .get(byte_offset..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        let position = input
            .get(..byte_offset)
            .map_or(byte_offset, |head| head.chars().count());

        Self::invalid_character(c, position, input, &alphabet.valid_chars())
    }

    /// Create an InvalidLength error
    pub fn invalid_length(
        actual: usize,
        expected: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        DecodeError::InvalidLength {
            actual,
            expected: expected.into(),
            hint: hint.into(),
        }
    }

    /// Checks the non-empty and whole-block constraints shared by every codec.
    pub(crate) fn check_length(input: &str, alphabet: &Alphabet) -> Result<(), Self> {
        let block = alphabet.block_size();
        if input.is_empty() {
            return Err(Self::invalid_length(
                0,
                format!("a non-empty multiple of {}", block),
                format!("{} input cannot be empty", alphabet.name()),
            ));
        }
        if input.len() % block != 0 {
            let hint = match alphabet.padding() {
                Some(pad) => format!(
                    "add padding ({}) or check for missing characters",
                    pad as char
                ),
                None => "check for a missing or extra digit".to_string(),
            };
            return Err(Self::invalid_length(
                input.len(),
                format!("multiple of {}", block),
                hint,
            ));
        }
        Ok(())
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            DecodeError::InvalidCharacter {
                char: c,
                position,
                input,
                valid_chars,
            } => {
                if use_color {
                    writeln!(
                        f,
                        "\x1b[1;31merror:\x1b[0m invalid character {:?} at position {}",
                        c, position
                    )?;
                } else {
                    writeln!(
                        f,
                        "error: invalid character {:?} at position {}",
                        c, position
                    )?;
                }
                writeln!(f)?;

                // Caret under the offending character; inputs longer than the
                // excerpt get no caret past the cut
                writeln!(f, "  {}", input)?;
                if *position <= input.chars().count() {
                    write!(f, "  {}", " ".repeat(*position))?;
                    if use_color {
                        writeln!(f, "\x1b[1;31m^\x1b[0m")?;
                    } else {
                        writeln!(f, "^")?;
                    }
                }
                writeln!(f)?;

                if use_color {
                    write!(f, "\x1b[1;36mhint:\x1b[0m valid characters: {}", valid_chars)?;
                } else {
                    write!(f, "hint: valid characters: {}", valid_chars)?;
                }
                Ok(())
            }
            DecodeError::InvalidLength {
                actual,
                expected,
                hint,
            } => {
                if use_color {
                    writeln!(f, "\x1b[1;31merror:\x1b[0m invalid length for decode")?;
                } else {
                    writeln!(f, "error: invalid length for decode")?;
                }
                writeln!(f)?;
                writeln!(f, "  input is {} characters, expected {}", actual, expected)?;
                writeln!(f)?;
                if use_color {
                    write!(f, "\x1b[1;36mhint:\x1b[0m {}", hint)?;
                } else {
                    write!(f, "hint: {}", hint)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Error when a codec name is not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl CodecNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for CodecNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        if use_color {
            writeln!(f, "\x1b[1;31merror:\x1b[0m codec '{}' not found", self.name)?;
        } else {
            writeln!(f, "error: codec '{}' not found", self.name)?;
        }

        writeln!(f)?;

        if let Some(suggestion) = &self.suggestion {
            if use_color {
                writeln!(f, "\x1b[1;36mhint:\x1b[0m did you mean '{}'?", suggestion)?;
            } else {
                writeln!(f, "hint: did you mean '{}'?", suggestion)?;
            }
        }

        if use_color {
            write!(
                f,
                "      run \x1b[1m`rfc-basenc config list`\x1b[0m to see all codecs"
            )?;
        } else {
            write!(f, "      run `rfc-basenc config list` to see all codecs")?;
        }

        Ok(())
    }
}

impl std::error::Error for CodecNotFoundError {}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching codec name
pub fn find_closest_codec<S: AsRef<str>>(name: &str, available: &[S]) -> Option<String> {
    let mut best_match = None;
    let mut best_distance = usize::MAX;

    // 1-2 character typos for short names, up to 3 for longer names
    let threshold = if name.len() < 5 { 2 } else { 3 };

    for candidate in available {
        let candidate = candidate.as_ref();
        let distance = levenshtein_distance(name, candidate);

        if distance < best_distance && distance <= threshold {
            best_distance = distance;
            best_match = Some(candidate.to_string());
        }
    }

    best_match
}
