//! DEFINE Tests
//!
//! These tests verify:
//! - Single and multiple definitions
//! - "No match" as an empty result
//! - Preamble and separator handling
//! - Server refusals and truncated replies

#[path = "../common/mod.rs"]
mod common;

use common::scripted;
use dictwire::{Database, DictError};

// =============================================================================
// Basic Definition Tests
// =============================================================================

#[test]
fn test_define_single_definition() {
    let (conn, writer) = scripted(&[
        "151 hello eng-dict \"Hello Definition\"",
        "A greeting.",
        "250 ok",
    ]);

    let defs = conn.define("hello", &Database::all()).unwrap();

    assert_eq!(defs.len(), 1);
    assert_eq!(defs[0].word(), "hello");
    assert_eq!(defs[0].database(), "eng-dict");
    assert_eq!(defs[0].body(), "A greeting.");
    assert_eq!(writer.commands(), vec!["DEFINE * hello"]);
}

#[test]
fn test_define_multiple_definitions_in_order() {
    let (conn, _writer) = scripted(&[
        "150 3 definitions retrieved",
        "151 \"hello\" gcide \"The Collaborative International Dictionary of English v.0.48\"",
        "Hello \\Hel*lo\"\\, interj. & n.",
        "   An exclamation used as a greeting.",
        ".",
        "151 \"hello\" wn \"WordNet (r) 3.0 (2006)\"",
        "hello",
        "    n 1: an expression of greeting",
        ".",
        "151 \"hello\" moby-thesaurus \"Moby Thesaurus II by Grady Ward, 1.0\"",
        "32 Moby Thesaurus words for \"hello\":",
        ".",
        "250 ok [d/m/c = 3/0/20; 0.000r 0.000u 0.000s]",
    ]);

    let defs = conn.define("hello", &Database::all()).unwrap();

    let databases: Vec<&str> = defs.iter().map(|d| d.database()).collect();
    assert_eq!(databases, vec!["gcide", "wn", "moby-thesaurus"]);
    assert_eq!(
        defs[0].body(),
        "Hello \\Hel*lo\"\\, interj. & n.\n   An exclamation used as a greeting."
    );
    assert_eq!(defs[1].body(), "hello\n    n 1: an expression of greeting");
    assert_eq!(defs[2].body(), "32 Moby Thesaurus words for \"hello\":");
}

#[test]
fn test_define_quoted_phrase_header() {
    let (conn, writer) = scripted(&[
        "150 1 definitions retrieved",
        "151 \"ice cream\" wn \"WordNet (r) 3.0 (2006)\"",
        "ice cream",
        "    n 1: frozen dessert",
        ".",
        "250 ok",
    ]);

    let defs = conn.define("ice cream", &Database::new("wn", "WordNet")).unwrap();

    assert_eq!(defs.len(), 1);
    assert_eq!(defs[0].database(), "wn");
    assert_eq!(writer.commands(), vec!["DEFINE wn \"ice cream\""]);
}

#[test]
fn test_define_body_line_that_looks_like_status() {
    let (conn, _writer) = scripted(&[
        "151 century wn \"WordNet\"",
        "century",
        "100 years; a period of time",
        ".",
        "250 ok",
    ]);

    let defs = conn.define("century", &Database::new("wn", "WordNet")).unwrap();

    assert_eq!(defs.len(), 1);
    assert_eq!(defs[0].body(), "century\n100 years; a period of time");
}

#[test]
fn test_define_error_code_in_body_does_not_end_reply() {
    let (conn, writer) = scripted(&[
        "151 sparta wn \"WordNet\"",
        "sparta",
        "550 BC: Sparta leads the Peloponnesian League",
        "    n 1: an ancient Greek city",
        ".",
        "250 ok",
        "552 no match",
    ]);

    let defs = conn.define("sparta", &Database::new("wn", "WordNet")).unwrap();

    assert_eq!(defs.len(), 1);
    assert_eq!(
        defs[0].body(),
        "sparta\n550 BC: Sparta leads the Peloponnesian League\n    n 1: an ancient Greek city"
    );

    // The next exchange reads its own reply
    assert!(conn.define("xyzzy", &Database::all()).unwrap().is_empty());
    assert!(conn.is_open());
    assert_eq!(writer.commands(), vec!["DEFINE wn sparta", "DEFINE * xyzzy"]);
}

#[test]
fn test_define_completion_code_in_body_does_not_truncate() {
    let (conn, _writer) = scripted(&[
        "151 ounce wn \"WordNet\"",
        "250 grams make a quarter kilo",
        "more text",
        ".",
        "250 ok",
        "151 hello wn \"WordNet\"",
        "A greeting.",
        ".",
        "250 ok",
    ]);

    let defs = conn.define("ounce", &Database::all()).unwrap();
    assert_eq!(defs.len(), 1);
    assert_eq!(defs[0].body(), "250 grams make a quarter kilo\nmore text");

    let next = conn.define("hello", &Database::all()).unwrap();
    assert_eq!(next.len(), 1);
    assert_eq!(next[0].word(), "hello");
    assert_eq!(next[0].body(), "A greeting.");
}

// =============================================================================
// Empty Result Tests
// =============================================================================

#[test]
fn test_define_no_match_is_empty() {
    let (conn, _writer) = scripted(&["552 no match [d/m/c = 0/0/0; 0.000r 0.000u 0.000s]"]);

    let defs = conn.define("xyzzy", &Database::all()).unwrap();

    assert!(defs.is_empty());
    assert!(conn.is_open());
}

#[test]
fn test_define_skips_advisory_lines() {
    let (conn, _writer) = scripted(&[
        "note: server is busy",
        "150 1 definitions retrieved",
        "151 hello wn \"WordNet\"",
        "A greeting.",
        ".",
        "250 ok",
    ]);

    let defs = conn.define("hello", &Database::first_match()).unwrap();
    assert_eq!(defs.len(), 1);
}

#[test]
fn test_define_connection_usable_after_reply() {
    let (conn, _writer) = scripted(&[
        "552 no match",
        "151 hello wn \"WordNet\"",
        "A greeting.",
        ".",
        "250 ok",
    ]);

    assert!(conn.define("xyzzy", &Database::all()).unwrap().is_empty());
    assert_eq!(conn.define("hello", &Database::all()).unwrap().len(), 1);
}

// =============================================================================
// Error Tests
// =============================================================================

#[test]
fn test_define_invalid_database_is_server_error() {
    let (conn, _writer) = scripted(&["550 invalid database, use \"SHOW DB\" for list of databases"]);

    let err = conn.define("hello", &Database::new("nope", "")).unwrap_err();

    assert!(matches!(err, DictError::Server { code: 550, .. }));
    assert!(err.is_protocol_error());
    assert!(conn.is_open());
}

#[test]
fn test_define_not_implemented() {
    let (conn, _writer) = scripted(&["502 command not implemented"]);

    let err = conn.define("hello", &Database::all()).unwrap_err();
    assert!(matches!(err, DictError::NotImplemented(_)));
}

#[test]
fn test_define_truncated_reply_closes_connection() {
    let (conn, _writer) = scripted(&["151 hello wn \"WordNet\"", "A greeting."]);

    let err = conn.define("hello", &Database::all()).unwrap_err();

    assert!(matches!(err, DictError::UnexpectedEof));
    assert!(!conn.is_open());
    assert!(matches!(conn.define("hello", &Database::all()), Err(DictError::Closed)));
}

#[test]
fn test_define_header_without_database() {
    let (conn, _writer) = scripted(&["151 hello", "A greeting.", "250 ok"]);

    let err = conn.define("hello", &Database::all()).unwrap_err();
    assert!(matches!(err, DictError::Protocol(_)));
}
