//! Corpus file handling

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::PoetError;

/// Read every line of a corpus file, in order.
///
/// The whole file is read before returning, so a failure part way through
/// never yields a truncated corpus.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, PoetError> {
    let path = path.as_ref();
    log::info!("Reading corpus file: {}", path.display());

    let read_error = |source: std::io::Error| PoetError::CorpusRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_error)?;

    log::info!("Loaded {} corpus lines", lines.len());

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_lines_in_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "first line\nsecond  line\n\nlast").unwrap();

        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["first line", "second  line", "", "last"]);
    }

    #[test]
    fn missing_file_is_a_corpus_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        let err = read_lines(&path).unwrap_err();
        let PoetError::CorpusRead { source, .. } = &err;
        assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        assert_eq!(err.path(), path.as_path());
    }
}
