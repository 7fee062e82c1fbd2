use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MalformedInput, Result};

/// Flattened pixel intensities of one image, in reading order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputVector {
    values: Vec<f64>,
}

impl InputVector {
    pub fn new(values: Vec<f64>) -> InputVector {
        InputVector { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Parses whitespace/newline separated integers.
    ///
    /// Fails with [`MalformedInput::InvalidToken`] on the first token that is
    /// not an integer (including bytes that are not UTF-8), and with
    /// [`MalformedInput::WrongLength`] when the token count differs from
    /// `expected_len`. Reading stops at the first token past `expected_len`,
    /// so `found` is then `expected_len + 1`.
    pub fn read_from<R: BufRead>(reader: R, expected_len: usize) -> Result<InputVector> {
        let mut values = Vec::with_capacity(expected_len);
        for line in reader.split(b'\n') {
            let line = line?;
            let tokens = line
                .split(|b| b.is_ascii_whitespace())
                .filter(|token| !token.is_empty());
            for token in tokens {
                if values.len() == expected_len {
                    return Err(MalformedInput::WrongLength {
                        expected: expected_len,
                        found: expected_len + 1,
                    }
                    .into());
                }
                values.push(parse_token(token, values.len())? as f64);
            }
        }

        if values.len() != expected_len {
            return Err(MalformedInput::WrongLength {
                expected: expected_len,
                found: values.len(),
            }
            .into());
        }
        Ok(InputVector { values })
    }

    /// Reads a feature file from disk.
    pub fn from_path(path: &Path, expected_len: usize) -> Result<InputVector> {
        let file = File::open(path)?;
        InputVector::read_from(BufReader::new(file), expected_len)
    }
}

fn parse_token(token: &[u8], position: usize) -> Result<i64> {
    std::str::from_utf8(token)
        .ok()
        .and_then(|text| text.parse().ok())
        .ok_or_else(|| {
            MalformedInput::InvalidToken {
                position,
                token: String::from_utf8_lossy(token).into_owned(),
            }
            .into()
        })
}

impl From<Vec<f64>> for InputVector {
    fn from(values: Vec<f64>) -> Self {
        InputVector::new(values)
    }
}

/// Anything that can produce an input vector of a given length on demand.
pub trait FeatureSource {
    fn read_features(&self, expected_len: usize) -> Result<InputVector>;
}

impl FeatureSource for PathBuf {
    fn read_features(&self, expected_len: usize) -> Result<InputVector> {
        InputVector::from_path(self, expected_len)
    }
}

/// In-memory features; the length check still applies.
impl FeatureSource for InputVector {
    fn read_features(&self, expected_len: usize) -> Result<InputVector> {
        if self.len() != expected_len {
            return Err(MalformedInput::WrongLength {
                expected: expected_len,
                found: self.len(),
            }
            .into());
        }
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Cursor;

    #[test]
    fn reads_tokens_across_lines() {
        let text = "1 2 3\n4   5\n\n6\n";
        let input = InputVector::read_from(Cursor::new(text), 6).unwrap();
        assert_eq!(input.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn accepts_negative_integers_and_tabs() {
        let input = InputVector::read_from(Cursor::new("-3\t7"), 2).unwrap();
        assert_eq!(input.as_slice(), &[-3.0, 7.0]);
    }

    #[test]
    fn rejects_non_integer_token() {
        let err = InputVector::read_from(Cursor::new("1 2 x3 4"), 4).unwrap_err();
        match err {
            Error::MalformedInput(MalformedInput::InvalidToken { position, token }) => {
                assert_eq!(position, 2);
                assert_eq!(token, "x3");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_invalid_utf8_as_malformed() {
        let err = InputVector::read_from(Cursor::new(&b"1 2 \xff 4"[..]), 4).unwrap_err();
        match err {
            Error::MalformedInput(MalformedInput::InvalidToken { position, token }) => {
                assert_eq!(position, 2);
                assert_eq!(token, "\u{fffd}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn accepts_crlf_line_endings() {
        let input = InputVector::read_from(Cursor::new("1 2\r\n3 4\r\n"), 4).unwrap();
        assert_eq!(input.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn rejects_short_and_long_files() {
        for (text, found) in [("1 2 3", 3), ("1 2 3 4 5", 5), ("1 2 3 4 5 6 7", 5)] {
            let err = InputVector::read_from(Cursor::new(text), 4).unwrap_err();
            assert!(matches!(
                err,
                Error::MalformedInput(MalformedInput::WrongLength { expected: 4, found: f })
                    if f == found
            ));
        }
    }

    #[test]
    fn oversized_file_stops_before_trailing_garbage() {
        let err = InputVector::read_from(Cursor::new("1 2 3 junk"), 2).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedInput(MalformedInput::WrongLength { expected: 2, found: 3 })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("ferrite_gender_no_such_features.txt");
        let err = path.read_features(4).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn reads_file_from_disk() {
        let path = std::env::temp_dir().join("ferrite_gender_input_vector_test.txt");
        std::fs::write(&path, "10 20\n30 40\n").unwrap();
        let input = path.read_features(4).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(input.as_slice(), &[10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn in_memory_source_checks_length() {
        let input = InputVector::new(vec![1.0, 2.0]);
        assert!(input.read_features(2).is_ok());
        assert!(input.read_features(3).is_err());
    }
}
