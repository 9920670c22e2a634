//! Shared read-only filesystem helpers built on `cap-std` and `camino`.
#![forbid(unsafe_code)]

use std::io::{self, Read};

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// Open a UTF-8 file path using ambient authority.
///
/// # Errors
/// Propagates the underlying I/O error when the file cannot be opened.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Read the full contents of a UTF-8 file path.
///
/// # Errors
/// Propagates I/O errors from opening or reading the file.
pub fn read_utf8_file(path: &Utf8Path) -> io::Result<Vec<u8>> {
    let mut file = open_utf8_file(path)?;
    let mut contents = Vec::new();
    file.read_to_end(&mut contents)?;
    Ok(contents)
}

/// Return whether a path exists and is a regular file.
///
/// # Errors
/// Returns the I/O error raised while opening the parent directory or
/// reading metadata; a missing file surfaces as `NotFound`.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_parent_dir(path)?;
    dir.metadata(name).map(|meta| meta.is_file())
}

fn open_parent_dir(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, &str)> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path should include a file name"))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests should fail fast when fixtures cannot be written")]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::rstest;
    use tempfile::TempDir;

    fn workspace() -> (TempDir, Utf8PathBuf) {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        (tmp, root)
    }

    #[rstest]
    fn reads_file_contents() {
        let (_tmp, root) = workspace();
        let path = root.join("places.json");
        std::fs::write(&path, b"[]").expect("write fixture");

        assert_eq!(read_utf8_file(&path).expect("read fixture"), b"[]");
    }

    #[rstest]
    fn distinguishes_files_from_directories() {
        let (_tmp, root) = workspace();
        let file = root.join("request.json");
        std::fs::write(&file, b"{}").expect("write fixture");

        assert!(file_is_file(&file).expect("inspect file"));
        std::fs::create_dir(root.join("nested")).expect("create directory");
        assert!(!file_is_file(&root.join("nested")).expect("inspect directory"));
    }

    #[rstest]
    fn missing_file_reports_not_found() {
        let (_tmp, root) = workspace();
        let err = file_is_file(&root.join("absent.bin")).expect_err("missing file");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
