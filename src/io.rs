/// File collaborators around the pure transformer
use crate::error::Error;
use std::fs;
use std::path::Path;

/// Fail with [`Error::MissingInput`] when `path` does not exist
pub fn ensure_exists(path: &Path) -> Result<(), Error> {
    if !path.exists() {
        return Err(Error::MissingInput {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Read `path` as an ordered list of lines with terminators removed
pub fn read_lines(path: &Path) -> Result<Vec<String>, Error> {
    ensure_exists(path)?;

    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let lines: Vec<String> = crate::split_lines(&content).map(String::from).collect();
    log::debug!("read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Write every fragment followed by a newline, replacing any existing file
pub fn write_fragments(path: &Path, fragments: &[String]) -> Result<(), Error> {
    let html = crate::join_fragments(fragments);

    fs::write(path, html).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("wrote {} fragments to {}", fragments.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.md");

        let err = read_lines(&path).unwrap_err();
        assert!(matches!(err, Error::MissingInput { .. }));
        assert_eq!(err.to_string(), format!("Missing {}", path.display()));
    }

    #[test]
    fn test_read_lines_strips_terminators() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.md");
        fs::write(&path, "# A\r\n- b\n\nc\n").unwrap();

        assert_eq!(read_lines(&path).unwrap(), ["# A", "- b", "", "c"]);
    }

    #[test]
    fn test_read_lines_old_mac_terminators() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.md");
        fs::write(&path, "a\rb\n").unwrap();

        assert_eq!(read_lines(&path).unwrap(), ["a", "b"]);
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");
        fs::write(&path, "stale content that is longer").unwrap();

        write_fragments(&path, &["<br/>".to_string()]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<br/>\n");
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("out.html");

        let err = write_fragments(&path, &[]).unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
    }
}
