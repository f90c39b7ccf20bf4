#![forbid(unsafe_code)]
// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Builds the Helm editor snippet file.
//!
//! Each entry of [`SNIPPET_SOURCES`] names a raw fixture under the snippet
//! directory; [`assemble`] reads every fixture into a [`Snippet`] and the
//! resulting [`SnippetSet`] serializes to the JSON document the editor
//! extension ships.

mod error;
mod set;
mod snippet;
mod table;

pub use error::Error;
pub use set::{assemble, SnippetSet};
pub use snippet::{load_lines, Snippet};
pub use table::{SnippetSource, DEFAULT_SNIPPET_DIR, SNIPPET_SOURCES};
