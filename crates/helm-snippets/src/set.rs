// SPDX-License-Identifier: Apache-2.0 OR MIT
use std::collections::btree_map::{self, BTreeMap, Entry};
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Error;
use crate::snippet::{load_lines, Snippet};
use crate::table::SnippetSource;

/// Assembled snippets keyed by name.
///
/// Keys are kept sorted so the emitted document does not depend on the order
/// of the source table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnippetSet {
    snippets: BTreeMap<String, Snippet>,
}

impl SnippetSet {
    /// Looks up a snippet by name.
    pub fn get(&self, name: &str) -> Option<&Snippet> {
        self.snippets.get(name)
    }

    /// Snippet names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.snippets.keys().map(String::as_str)
    }

    /// Iterates over `(name, snippet)` pairs in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Snippet> {
        self.snippets.iter()
    }

    /// Number of snippets.
    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    /// Whether the set holds no snippets.
    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    /// Renders the set as JSON indented by two spaces, without a trailing newline.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self).map_err(Error::Serialize)
    }

    /// Writes the output of [`SnippetSet::to_json`] to `writer` and flushes it.
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        let json = self.to_json()?;
        writer.write_all(json.as_bytes()).map_err(Error::Write)?;
        writer.flush().map_err(Error::Write)
    }

    fn insert(&mut self, name: &str, snippet: Snippet) -> Result<(), Error> {
        match self.snippets.entry(name.to_string()) {
            Entry::Occupied(_) => Err(Error::DuplicateSnippet {
                name: name.to_string(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(snippet);
                Ok(())
            }
        }
    }
}

impl<'a> IntoIterator for &'a SnippetSet {
    type Item = (&'a String, &'a Snippet);
    type IntoIter = btree_map::Iter<'a, String, Snippet>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Loads every source in declaration order from `dir`.
///
/// The first unreadable fixture aborts the assembly; no partial set is
/// returned.
pub fn assemble(dir: &Path, sources: &[SnippetSource]) -> Result<SnippetSet, Error> {
    let mut set = SnippetSet::default();
    for source in sources {
        let path = dir.join(source.file);
        let body = load_lines(&path).map_err(|err| Error::fixture(source.name, &path, err))?;
        debug!(
            snippet = source.name,
            path = %path.display(),
            lines = body.len(),
            "loaded snippet fixture"
        );
        set.insert(
            source.name,
            Snippet::new(source.prefix, source.description, body),
        )?;
    }
    info!(count = set.len(), dir = %dir.display(), "assembled snippets");
    Ok(set)
}
