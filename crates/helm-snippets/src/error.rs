// SPDX-License-Identifier: Apache-2.0 OR MIT
use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort snippet assembly.
///
/// None of them is recoverable: a missing fixture means the checkout is
/// broken, so the generator stops before anything reaches stdout.
#[derive(Debug, Error)]
pub enum Error {
    /// A fixture could not be opened or read.
    #[error("failed to read fixture {} for snippet {name}", path.display())]
    Fixture {
        /// Snippet whose body was being loaded.
        name: String,
        /// Resolved fixture path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Two table entries share a name.
    #[error("snippet {name} is declared more than once")]
    DuplicateSnippet {
        /// The repeated name.
        name: String,
    },
    /// JSON encoding failed.
    #[error("failed to serialize snippets")]
    Serialize(#[source] serde_json::Error),
    /// Writing the finished document failed.
    #[error("failed to write snippet document")]
    Write(#[source] std::io::Error),
}

impl Error {
    pub(crate) fn fixture(name: &str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Fixture {
            name: name.to_string(),
            path: path.into(),
            source,
        }
    }
}
