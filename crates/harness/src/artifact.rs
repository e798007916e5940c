//! Dual-encoding artifact store
//!
//! Layout under the samples root:
//!
//! ```text
//! <root>/<Algorithm>/<content_type>.txt      hex (binary content) or UTF-8 (text)
//! <root>/<Algorithm>/bin/<content_type>.bin  raw bytes, binary content only
//! ```
//!
//! Files are overwritten on every run; the newest run wins.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ArtifactError;

/// Name of every artifact the verifiers produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Message,
    PublicKey,
    SecretKey,
    Ciphertext,
    SharedSecret1,
    SharedSecret2,
    /// The signed blob returned by `sign`
    EncryptedMessage,
    /// The message recovered by `verify`
    DecryptedMessage,
}

impl ContentType {
    pub const fn file_stem(self) -> &'static str {
        match self {
            ContentType::Message => "message",
            ContentType::PublicKey => "public_key",
            ContentType::SecretKey => "secret_key",
            ContentType::Ciphertext => "ciphertext",
            ContentType::SharedSecret1 => "shared_secret_1",
            ContentType::SharedSecret2 => "shared_secret_2",
            ContentType::EncryptedMessage => "encrypted_message",
            ContentType::DecryptedMessage => "decrypted_message",
        }
    }
}

/// Payload of one artifact
#[derive(Debug, Clone, Copy)]
pub enum Content<'a> {
    Binary(&'a [u8]),
    Text(&'a str),
}

#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn algorithm_dir(&self, algorithm: &str) -> PathBuf {
        self.root.join(algorithm)
    }

    pub fn text_path(&self, algorithm: &str, content_type: ContentType) -> PathBuf {
        self.algorithm_dir(algorithm)
            .join(format!("{}.txt", content_type.file_stem()))
    }

    pub fn binary_path(&self, algorithm: &str, content_type: ContentType) -> PathBuf {
        self.algorithm_dir(algorithm)
            .join("bin")
            .join(format!("{}.bin", content_type.file_stem()))
    }

    /// Persist one artifact for `algorithm`.
    ///
    /// Binary content is written twice: raw under `bin/` and lowercase hex next
    /// to it. Text content only gets the `.txt` file.
    pub fn write(
        &self,
        algorithm: &str,
        content_type: ContentType,
        content: Content<'_>,
    ) -> Result<(), ArtifactError> {
        let bin_dir = self.algorithm_dir(algorithm).join("bin");
        fs::create_dir_all(&bin_dir).map_err(|source| ArtifactError::Io {
            path: bin_dir.clone(),
            source,
        })?;

        match content {
            Content::Binary(bytes) => {
                debug!(
                    algorithm,
                    content_type = content_type.file_stem(),
                    len = bytes.len(),
                    "writing binary artifact"
                );
                write_file(&self.binary_path(algorithm, content_type), bytes)?;
                write_file(
                    &self.text_path(algorithm, content_type),
                    hex::encode(bytes).as_bytes(),
                )
            }
            Content::Text(text) => {
                debug!(
                    algorithm,
                    content_type = content_type.file_stem(),
                    "writing text artifact"
                );
                write_file(&self.text_path(algorithm, content_type), text.as_bytes())
            }
        }
    }
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), ArtifactError> {
    fs::write(path, contents).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })
}
