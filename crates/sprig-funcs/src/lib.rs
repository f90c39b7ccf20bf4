#![forbid(unsafe_code)]
// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Turns the Sprig helper registry into the function-name alternation used by
//! the Helm syntax grammar, e.g. `(default|quote|upper)`.
//!
//! The registry is only consulted for its names; see [`HelperRegistry`].

mod catalog;

pub use catalog::SPRIG_FUNCTION_NAMES;

use std::collections::BTreeSet;

use lithos_gotmpl_core::{FunctionRegistry, FunctionRegistryBuilder};
use lithos_sprig::install_sprig_functions;
use thiserror::Error;
use tracing::debug;

/// Failures while building the alternation.
#[derive(Debug, Error)]
pub enum Error {
    /// The registry exposed no helpers, so there is nothing to match.
    #[error("helper registry is empty")]
    EmptyRegistry,
    /// A helper name would not be a literal inside the grammar pattern.
    #[error("helper name {name:?} is not a plain identifier")]
    InvalidName {
        /// The offending name.
        name: String,
    },
}

/// A source of template helper names.
pub trait HelperRegistry {
    /// Names of every registered helper, in any order.
    fn helper_names(&self) -> Vec<String>;
}

/// Lists the catalogued Sprig names the registry has a helper for.
///
/// Helpers registered under names outside [`SPRIG_FUNCTION_NAMES`] are not
/// reported.
impl HelperRegistry for FunctionRegistry {
    fn helper_names(&self) -> Vec<String> {
        SPRIG_FUNCTION_NAMES
            .iter()
            .filter(|name| self.get(name).is_some())
            .map(|name| (*name).to_string())
            .collect()
    }
}

impl<S: AsRef<str>> HelperRegistry for [S] {
    fn helper_names(&self) -> Vec<String> {
        self.iter().map(|name| name.as_ref().to_string()).collect()
    }
}

/// Returns a registry holding only the Sprig helpers, without the Go
/// `text/template` builtins.
pub fn sprig_registry() -> FunctionRegistry {
    let mut builder = FunctionRegistryBuilder::new();
    install_sprig_functions(&mut builder);
    builder.build()
}

/// Joins `names` into `(a|b|c)`.
///
/// Names are sorted and de-duplicated so the pattern is stable across runs.
pub fn alternation<I>(names: I) -> Result<String, Error>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut sorted = BTreeSet::new();
    for name in names {
        let name = name.as_ref();
        if !is_identifier(name) {
            return Err(Error::InvalidName {
                name: name.to_string(),
            });
        }
        sorted.insert(name.to_string());
    }
    if sorted.is_empty() {
        return Err(Error::EmptyRegistry);
    }

    let joined = sorted.into_iter().collect::<Vec<_>>().join("|");
    Ok(format!("({joined})"))
}

/// Builds the alternation for every helper in `registry`.
pub fn function_pattern<R: HelperRegistry + ?Sized>(registry: &R) -> Result<String, Error> {
    let names = registry.helper_names();
    debug!(helpers = names.len(), "collected helper names");
    alternation(names)
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|byte| byte.is_ascii_alphanumeric() || byte == b'_')
}
