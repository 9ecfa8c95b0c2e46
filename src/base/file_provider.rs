use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

use super::Error;

/// A trait for providing file contents.
pub trait FileProvider {
    /// Reads the contents of the file at the given path as bytes.
    ///
    /// # Errors
    /// - If an error occurs while reading the file.
    /// - If the file does not exist.
    fn read_bytes<P: AsRef<Path>>(&self, path: P) -> Result<Cow<[u8]>, Error>;
}

/// Provides file contents from the file system.
#[derive(Debug, Clone)]
pub struct FsProvider {
    /// The root directory to base paths off of.
    root: PathBuf,
}

impl Default for FsProvider {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

impl<P> From<P> for FsProvider
where
    P: Into<PathBuf>,
{
    fn from(root: P) -> Self {
        Self { root: root.into() }
    }
}

impl FileProvider for FsProvider {
    fn read_bytes<P: AsRef<Path>>(&self, path: P) -> Result<Cow<[u8]>, Error> {
        let full_path = self.root.join(path);
        std::fs::read(full_path)
            .map(Cow::Owned)
            .map_err(|err| Error::IoError(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fs_provider_reads_relative_to_root() {
        let provider = FsProvider::from(env!("CARGO_MANIFEST_DIR"));
        let bytes = provider.read_bytes("Cargo.toml").unwrap();

        assert!(bytes.starts_with(b"[package]"));
    }

    #[test]
    fn test_fs_provider_missing_file() {
        let provider = FsProvider::from(env!("CARGO_MANIFEST_DIR"));

        assert!(matches!(
            provider.read_bytes("does/not/exist.lua"),
            Err(Error::IoError(_))
        ));
    }
}
