//! Deck loading tests.
//!
//! These tests load real files from disk:
//! - the bundled sample deck
//! - tab-separated input picked by extension
//! - unreadable paths

use std::io::Write;
use std::path::PathBuf;

use common_sense::deck::{DeckError, DeckKind, DeckLoader};

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/common_sense.csv")
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("common-sense-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

/// The sample deck loads into three playable decks.
#[test]
fn test_sample_deck() {
    let path = sample_path();
    let decks = DeckLoader::for_path(&path).load_path(&path).unwrap();

    assert!(decks.is_playable());
    assert_eq!(decks.len(DeckKind::Category), 10);
    assert_eq!(decks.len(DeckKind::Modifier), 7);
    assert_eq!(decks.len(DeckKind::Object), 9);

    // "Things that are" has weight 4 and comes first.
    assert_eq!(&decks[DeckKind::Category][..4], ["Things that are"; 4]);
    assert!(decks[DeckKind::Object].iter().any(|o| o == "fluffy, but firm"));

    // The Wildcard row is dropped, the blank-text row skipped.
    assert_eq!(decks.unclassified_rows(), 1);
    assert_eq!(decks.skipped_rows(), 1);

    let stats = decks.stats();
    assert_eq!(stats.decks[0].distinct, 4);
    assert_eq!(stats.decks[2].distinct, 6);
}

/// `.tsv` files are read tab-separated.
#[test]
fn test_tsv_by_extension() {
    let path = temp_file(
        "decks.tsv",
        "text\tdeck\tcount\nThings, mostly, that are\tCategory\t2\nvery\tModifier\t1\nlemons\tObject\t1\n",
    );

    let decks = DeckLoader::for_path(&path).load_path(&path).unwrap();
    assert_eq!(
        decks[DeckKind::Category],
        ["Things, mostly, that are", "Things, mostly, that are"]
    );
    assert!(decks.is_playable());
}

/// A missing file is an I/O error naming the path.
#[test]
fn test_missing_file() {
    let path = PathBuf::from("/no/such/dir/decks.csv");
    let err = DeckLoader::new().load_path(&path).unwrap_err();

    match &err {
        DeckError::Io { path: reported, .. } => assert_eq!(reported, &path),
        other => panic!("expected Io error, got {other:?}"),
    }
    assert!(err.to_string().contains("decks.csv"));
}

/// Unterminated quotes are tolerated by the reader; binary garbage is not.
#[test]
fn test_non_text_source_is_parse_error() {
    let path = temp_file("garbage.csv", "text,deck,count\n");
    let mut file = std::fs::OpenOptions::new().append(true).open(&path).unwrap();
    file.write_all(&[0xC3, 0x28, b',', b'C', b'a', b't', b'e', b'g', b'o', b'r', b'y', b',', b'1', b'\n'])
        .unwrap();

    let err = DeckLoader::new().load_path(&path).unwrap_err();
    assert!(matches!(err, DeckError::Parse(_)));
}
