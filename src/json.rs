use std::fs::File;
use std::io::{BufReader, BufWriter};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Writes `value` to `path` as pretty-printed JSON.
pub(crate) fn write_json<T: Serialize>(path: &str, value: &T) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, value)?;
    Ok(())
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &str) -> Result<T> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn round_trips_through_a_file() {
        let path = std::env::temp_dir().join("ferrite_gender_json_helper_test.json");
        let path = path.to_str().unwrap();
        write_json(path, &vec![1u32, 2, 3]).unwrap();
        let back: Vec<u32> = read_json(path).unwrap();
        std::fs::remove_file(path).ok();
        assert_eq!(back, vec![1, 2, 3]);
    }

    #[test]
    fn missing_file_and_bad_json_are_distinguished() {
        let missing = std::env::temp_dir().join("ferrite_gender_json_helper_missing.json");
        let err = read_json::<Vec<u32>>(missing.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, Error::Io(_)));

        let path = std::env::temp_dir().join("ferrite_gender_json_helper_bad.json");
        let path = path.to_str().unwrap();
        std::fs::write(path, "[1, 2,").unwrap();
        let err = read_json::<Vec<u32>>(path).unwrap_err();
        std::fs::remove_file(path).ok();
        assert!(matches!(err, Error::Json(_)));
    }
}
