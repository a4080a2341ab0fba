//! Straightening the quotes of a file in place.

use crate::text::{count_quotes, straighten_quotes, QuoteCounts};
use std::{
    fs::File,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    string::FromUtf8Error,
};
use thiserror::Error;
use tracing::{debug, info};

/// The page template that gets normalized, relative to the working directory.
pub const TARGET_PATH: &str = "pages/About.tsx";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Read and transform, but leave the file alone.
    pub dry_run: bool,
}

/// What a normalization run did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub path: PathBuf,
    pub counts: QuoteCounts,
    /// Whether the file was rewritten. Only false for dry runs.
    pub written: bool,
}

/// Straighten every curly quote in the file at `path`, overwriting it.
///
/// The file is read and decoded as UTF-8 before anything is written, so a missing file or
/// invalid text leaves it untouched. The write itself is not atomic: if it fails partway the
/// file may be left truncated.
pub fn normalize<P: AsRef<Path>>(path: P) -> Result<Summary, NormalizeError> {
    normalize_with(path, Options::default())
}

pub fn normalize_with<P: AsRef<Path>>(
    path: P,
    options: Options,
) -> Result<Summary, NormalizeError> {
    let path = path.as_ref();

    let content = read_text(path)?;
    let counts = count_quotes(&content);
    let fixed = straighten_quotes(&content);

    if options.dry_run {
        info!(
            path = %path.display(),
            left_single = counts.left_single,
            right_single = counts.right_single,
            left_double = counts.left_double,
            right_double = counts.right_double,
            "found {} quotes",
            counts.total()
        );
        return Ok(Summary {
            path: path.to_owned(),
            counts,
            written: false,
        });
    }

    write_text(path, &fixed)?;
    info!(
        path = %path.display(),
        left_single = counts.left_single,
        right_single = counts.right_single,
        left_double = counts.left_double,
        right_double = counts.right_double,
        "straightened {} quotes",
        counts.total()
    );
    Ok(Summary {
        path: path.to_owned(),
        counts,
        written: true,
    })
}

fn read_text(path: &Path) -> Result<String, NormalizeError> {
    let read_err = |source| NormalizeError::Read {
        path: path.to_owned(),
        source,
    };

    let bytes = {
        let mut file = File::open(path).map_err(read_err)?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(read_err)?;
        bytes
    };
    debug!(path = %path.display(), bytes = bytes.len(), "read file");

    String::from_utf8(bytes).map_err(|source| NormalizeError::Decode {
        path: path.to_owned(),
        source,
    })
}

fn write_text(path: &Path, text: &str) -> Result<(), NormalizeError> {
    let write_err = |source| NormalizeError::Write {
        path: path.to_owned(),
        source,
    };

    let mut file = File::create(path).map_err(write_err)?;
    file.write_all(text.as_bytes()).map_err(write_err)?;
    debug!(path = %path.display(), bytes = text.len(), "wrote file");
    Ok(())
}

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("couldn't read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("{} isn't valid UTF-8: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: FromUtf8Error,
    },

    #[error("couldn't write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl NormalizeError {
    pub fn path(&self) -> &Path {
        match self {
            NormalizeError::Read { path, .. }
            | NormalizeError::Decode { path, .. }
            | NormalizeError::Write { path, .. } => path,
        }
    }

    /// Whether the failure came from the filesystem rather than the file's content.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            NormalizeError::Read { .. } | NormalizeError::Write { .. }
        )
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, NormalizeError::Decode { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        fs,
        sync::{Arc, Mutex},
    };
    use tempfile::TempDir;

    #[derive(Clone, Default)]
    struct Logs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Logs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Logs {
        /// Run `f` with info-level logs captured, returning its result and the logs.
        fn capture<T>(f: impl FnOnce() -> T) -> (T, String) {
            let logs = Logs::default();
            let writer = logs.clone();
            let subscriber = tracing_subscriber::fmt()
                .with_writer(move || writer.clone())
                .with_ansi(false)
                .with_max_level(tracing::Level::INFO)
                .finish();
            let res = tracing::subscriber::with_default(subscriber, f);
            let text = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
            (res, text)
        }
    }

    fn page(content: &[u8]) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("About.tsx");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn quotes_in_file_are_straightened() {
        let (_dir, path) =
            page("She said, \u{2018}hello\u{2019} and \u{201c}goodbye\u{201d}.".as_bytes());
        let summary = normalize(&path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "She said, 'hello' and \"goodbye\"."
        );
        assert_eq!(summary.counts.total(), 4);
        assert!(summary.written);
        assert_eq!(summary.path, path);
    }

    #[test]
    fn plain_file_is_unchanged() {
        let (_dir, path) = page(b"plain text");
        let summary = normalize(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "plain text");
        assert!(summary.counts.is_empty());
    }

    #[test]
    fn empty_file_stays_empty() {
        let (_dir, path) = page(b"");
        normalize(&path).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"");
    }

    #[test]
    fn longer_file_is_fully_replaced() {
        let original = "\u{201c}quoted\u{201d}\n".repeat(1000);
        let (_dir, path) = page(original.as_bytes());
        normalize(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "\"quoted\"\n".repeat(1000));
    }

    #[test]
    fn second_run_changes_nothing() {
        let (_dir, path) = page("it\u{2019}s \u{201c}fine\u{201d}".as_bytes());
        normalize(&path).unwrap();
        let first = fs::read(&path).unwrap();
        let summary = normalize(&path).unwrap();
        assert_eq!(fs::read(&path).unwrap(), first);
        assert!(summary.counts.is_empty());
    }

    #[test]
    fn missing_file_is_io_error_and_isnt_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("About.tsx");
        let err = normalize(&path).unwrap_err();
        assert!(matches!(err, NormalizeError::Read { .. }));
        assert!(err.is_io());
        assert_eq!(err.path(), path.as_path());
        assert!(!path.exists());
    }

    #[test]
    fn invalid_utf8_is_decode_error_and_file_is_untouched() {
        let bytes = [b'o', b'k', 0xff, 0xfe, 0xe2, 0x80, 0x9c];
        let (_dir, path) = page(&bytes);
        let err = normalize(&path).unwrap_err();
        assert!(err.is_decode());
        assert!(!err.is_io());
        assert_eq!(fs::read(&path).unwrap(), bytes);
    }

    #[test]
    fn dry_run_counts_but_doesnt_write() {
        let original = "\u{2018}a\u{2019} \u{201c}b\u{201d}";
        let (_dir, path) = page(original.as_bytes());
        let summary = normalize_with(&path, Options { dry_run: true }).unwrap();
        assert!(!summary.written);
        assert_eq!(summary.counts.total(), 4);
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn error_message_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("About.tsx");
        let err = normalize(&path).unwrap_err();
        assert!(err.to_string().contains("About.tsx"));
    }

    #[test]
    fn writing_to_a_directory_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_text(dir.path(), "x").unwrap_err();
        assert!(matches!(err, NormalizeError::Write { .. }));
        assert!(err.is_io());
        assert!(!err.is_decode());
        assert_eq!(err.path(), dir.path());
        assert!(err.to_string().starts_with("couldn't write"));
    }

    #[test]
    fn dry_run_logs_found_not_straightened() {
        let (_dir, path) = page("it\u{2019}s".as_bytes());
        let (summary, logs) = Logs::capture(|| normalize_with(&path, Options { dry_run: true }));
        assert!(!summary.unwrap().written);
        assert!(logs.contains("found 1 quotes"));
        assert!(!logs.contains("straightened"));
    }

    #[test]
    fn written_run_logs_straightened() {
        let (_dir, path) = page("it\u{2019}s".as_bytes());
        let (summary, logs) = Logs::capture(|| normalize(&path));
        assert!(summary.unwrap().written);
        assert!(logs.contains("straightened 1 quotes"));
    }
}
