//! Canonical location of the seed file, relative to the working directory:
//!   - output/combinations.txt  Written by the generator, read by the lockfile diff suite.
use std::path::PathBuf;

pub const OUTPUT_DIR_NAME: &str = "output";
pub const COMBINATIONS_FILE_NAME: &str = "combinations.txt";

/// Returns the directory holding the seed file: ./output
/// It is never created by the generator; a setup step must provide it.
pub fn output_dir() -> PathBuf {
    PathBuf::from(OUTPUT_DIR_NAME)
}

/// Returns the full path to the seed file: ./output/combinations.txt
pub fn combinations_file_path() -> PathBuf {
    output_dir().join(COMBINATIONS_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn combinations_file_path_is_output_combinations_txt() {
        assert_eq!(combinations_file_path(), Path::new("output").join("combinations.txt"));
    }

    #[test]
    fn combinations_file_path_has_correct_name() {
        let path = combinations_file_path();
        assert_eq!(path.file_name().unwrap(), COMBINATIONS_FILE_NAME);
    }

    #[test]
    fn combinations_file_path_is_relative() {
        assert!(combinations_file_path().is_relative());
    }

    #[test]
    fn combinations_file_lives_in_output_dir() {
        assert_eq!(combinations_file_path().parent(), Some(output_dir().as_path()));
    }
}
