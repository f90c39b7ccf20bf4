// SPDX-License-Identifier: Apache-2.0 OR MIT
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use helm_snippets::{assemble, Error, Snippet, SnippetSet, SNIPPET_SOURCES};
use serde_json::Value;

fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("rawsnippets")
}

#[test]
fn bodies_match_fixture_lines() {
    let set = assemble(&fixture_dir(), SNIPPET_SOURCES).expect("shipped fixtures assemble");

    for source in SNIPPET_SOURCES {
        let path = fixture_dir().join(source.file);
        let text = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
        let expected: Vec<&str> = text.lines().collect();

        let snippet = set
            .get(source.name)
            .unwrap_or_else(|| panic!("snippet {} missing", source.name));
        assert_eq!(snippet.body, expected, "body of {}", source.name);
        assert!(!snippet.body.is_empty(), "fixture for {} is empty", source.name);
    }
}

#[test]
fn document_round_trips_with_exact_key_set() {
    let set = assemble(&fixture_dir(), SNIPPET_SOURCES).unwrap();
    let json = set.to_json().unwrap();

    let parsed: Value = serde_json::from_str(&json).expect("output is valid json");
    let keys: BTreeSet<&str> = parsed
        .as_object()
        .expect("top level is an object")
        .keys()
        .map(String::as_str)
        .collect();
    let declared: BTreeSet<&str> = SNIPPET_SOURCES.iter().map(|s| s.name).collect();
    assert_eq!(keys, declared);

    let reparsed: SnippetSet = serde_json::from_str(&json).unwrap();
    assert_eq!(reparsed, set);
}

#[test]
fn records_carry_declared_prefix_and_description() {
    let set = assemble(&fixture_dir(), SNIPPET_SOURCES).unwrap();

    let secret = set.get("Secret").unwrap();
    assert_eq!(secret.prefix, "kindSecret");
    assert_eq!(secret.description, "Create a Secret manifest");

    for source in SNIPPET_SOURCES {
        let Snippet {
            prefix,
            description,
            ..
        } = set.get(source.name).unwrap();
        assert_eq!(prefix, source.prefix);
        assert_eq!(description, source.description);
    }
}

#[test]
fn missing_fixture_fails_whole_assembly() {
    let dir = tempfile::tempdir().unwrap();
    for source in &SNIPPET_SOURCES[..SNIPPET_SOURCES.len() - 1] {
        fs::copy(fixture_dir().join(source.file), dir.path().join(source.file)).unwrap();
    }

    let last = SNIPPET_SOURCES.last().unwrap();
    let err = assemble(dir.path(), SNIPPET_SOURCES).unwrap_err();
    match err {
        Error::Fixture { name, path, .. } => {
            assert_eq!(name, last.name);
            assert_eq!(path, dir.path().join(last.file));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn output_is_repeatable() {
    let first = assemble(&fixture_dir(), SNIPPET_SOURCES)
        .unwrap()
        .to_json()
        .unwrap();
    let second = assemble(&fixture_dir(), SNIPPET_SOURCES)
        .unwrap()
        .to_json()
        .unwrap();
    assert_eq!(first, second);
}
