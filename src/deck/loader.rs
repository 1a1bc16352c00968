//! Deck loading from delimited text.
//!
//! The source has a header row followed by rows of three columns, read by
//! position: card text, deck name, count. Header names are ignored.
//!
//! ```text
//! text,deck,count
//! Things that are,Category,3
//! extremely,Modifier,1
//! a wet sponge,Object,2
//! ```
//!
//! Rows with a blank or missing field, or a count that is not a number,
//! are skipped. Rows whose deck name contains none of "Category",
//! "Modifier" or "Object" are dropped. A count above [`MAX_COUNT`] fails
//! the whole load.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use super::decks::{DeckKind, Decks};

/// Largest repeat count a single row may ask for.
pub const MAX_COUNT: usize = 10_000;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to open deck file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse deck data: {0}")]
    Parse(#[from] csv::Error),

    #[error("line {line}: count {count} is larger than {max}", max = MAX_COUNT)]
    CountTooLarge { line: usize, count: String },
}

/// Reads deck sources into [`Decks`].
#[derive(Clone, Copy, Debug)]
pub struct DeckLoader {
    delimiter: u8,
}

impl Default for DeckLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckLoader {
    /// Loader for comma-separated input.
    #[must_use]
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Loader whose delimiter suits the file extension: tab for `.tsv`,
    /// comma otherwise.
    #[must_use]
    pub fn for_path(path: &Path) -> Self {
        let is_tsv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("tsv"));

        if is_tsv {
            Self::new().with_delimiter(b'\t')
        } else {
            Self::new()
        }
    }

    /// Set the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Open and load a deck file.
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<Decks, DeckError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DeckError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let decks = self.load_reader(file)?;
        info!(
            path = %path.display(),
            category = decks.len(DeckKind::Category),
            modifier = decks.len(DeckKind::Modifier),
            object = decks.len(DeckKind::Object),
            "decks loaded"
        );
        Ok(decks)
    }

    /// Load decks from any reader.
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<Decks, DeckError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .delimiter(self.delimiter)
            .from_reader(reader);

        let mut decks = Decks::new();

        for (row, record) in rdr.records().enumerate() {
            let record = record?;
            let line = record.position().map_or(row + 2, |p| p.line() as usize);

            let field = |i: usize| record.get(i).filter(|value| !value.is_empty());
            let (Some(text), Some(deck), Some(count)) = (field(0), field(1), field(2)) else {
                debug!(line, "skipping row with a missing field");
                decks.note_skipped();
                continue;
            };

            let Some(repeats) = parse_count(count) else {
                debug!(line, count, "skipping row with a non-numeric count");
                decks.note_skipped();
                continue;
            };
            let repeats = usize::try_from(repeats)
                .ok()
                .filter(|&n| n <= MAX_COUNT)
                .ok_or_else(|| DeckError::CountTooLarge {
                    line,
                    count: count.to_string(),
                })?;

            match DeckKind::classify(deck) {
                Some(kind) => decks.push_weighted(kind, text, repeats),
                None => {
                    debug!(line, deck, "dropping row with no matching deck");
                    decks.note_unclassified();
                }
            }
        }

        Ok(decks)
    }
}

/// Coerce a count field to a repeat count.
///
/// Accepts integers and decimals (truncated toward zero, as spreadsheet
/// exports often write `2.0`). Negative values mean zero repeats. Huge
/// values saturate; the caller enforces [`MAX_COUNT`].
fn parse_count(raw: &str) -> Option<u64> {
    let value = match raw.parse::<i64>() {
        Ok(n) => n,
        Err(_) => {
            let f = raw.parse::<f64>().ok().filter(|f| f.is_finite())?;
            f.trunc() as i64
        }
    };
    Some(u64::try_from(value).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(text: &str) -> Decks {
        DeckLoader::new().load_reader(text.as_bytes()).unwrap()
    }

    #[test]
    fn test_weighted_replication() {
        let decks = load("text,deck,count\nRed,Category,2\nBlue,Category,1\n");

        assert_eq!(decks[DeckKind::Category], ["Red", "Red", "Blue"]);
        assert!(decks[DeckKind::Modifier].is_empty());
        assert!(decks[DeckKind::Object].is_empty());
    }

    #[test]
    fn test_partitions_into_three_decks() {
        let decks = load(
            "text,deck,count\n\
             Things that are,Category Deck,1\n\
             very,Modifier Deck,2\n\
             a lemon,Object Deck,1\n",
        );

        assert_eq!(decks[DeckKind::Category], ["Things that are"]);
        assert_eq!(decks[DeckKind::Modifier], ["very", "very"]);
        assert_eq!(decks[DeckKind::Object], ["a lemon"]);
        assert!(decks.is_playable());
    }

    #[test]
    fn test_missing_fields_are_skipped() {
        let decks = load(
            "text,deck,count\n\
             ,Category,2\n\
             Red,,2\n\
             Red,Category,\n\
             Red,Category\n\
             Blue,Category,1\n",
        );

        assert_eq!(decks[DeckKind::Category], ["Blue"]);
        assert_eq!(decks.skipped_rows(), 4);
    }

    #[test]
    fn test_unmatched_deck_is_dropped() {
        let decks = load("text,deck,count\nJoker,Wildcard,3\nBlue,Object,1\n");

        assert_eq!(decks[DeckKind::Object], ["Blue"]);
        assert_eq!(decks.unclassified_rows(), 1);
        assert_eq!(decks.skipped_rows(), 0);
    }

    #[test]
    fn test_count_coercion() {
        let decks = load(
            "text,deck,count\n\
             A,Category,2.0\n\
             B,Category, 3 \n\
             C,Category,0\n\
             D,Category,-4\n\
             E,Category,lots\n",
        );

        assert_eq!(decks.len(DeckKind::Category), 5);
        assert_eq!(decks[DeckKind::Category], ["A", "A", "B", "B", "B"]);
        assert_eq!(decks.skipped_rows(), 1);
    }

    #[test]
    fn test_quoted_text_with_delimiter() {
        let decks = load("text,deck,count\n\"salt, pepper\",Object,1\n");
        assert_eq!(decks[DeckKind::Object], ["salt, pepper"]);
    }

    #[test]
    fn test_extra_columns_ignored() {
        let decks = load("text,deck,count,notes\nRed,Category,1,primary\n");
        assert_eq!(decks[DeckKind::Category], ["Red"]);
    }

    #[test]
    fn test_tab_delimited() {
        let decks = DeckLoader::new()
            .with_delimiter(b'\t')
            .load_reader("text\tdeck\tcount\nRed\tCategory\t2\n".as_bytes())
            .unwrap();
        assert_eq!(decks[DeckKind::Category], ["Red", "Red"]);
    }

    #[test]
    fn test_for_path_picks_delimiter() {
        assert_eq!(DeckLoader::for_path(Path::new("cards.tsv")).delimiter, b'\t');
        assert_eq!(DeckLoader::for_path(Path::new("cards.TSV")).delimiter, b'\t');
        assert_eq!(DeckLoader::for_path(Path::new("cards.csv")).delimiter, b',');
        assert_eq!(DeckLoader::for_path(Path::new("cards")).delimiter, b',');
    }

    #[test]
    fn test_invalid_utf8_is_a_parse_error() {
        let bytes: &[u8] = b"text,deck,count\n\xff\xfe,Category,1\n";
        let err = DeckLoader::new().load_reader(bytes).unwrap_err();
        assert!(matches!(err, DeckError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = DeckLoader::new()
            .load_path("/definitely/not/here.csv")
            .unwrap_err();
        assert!(matches!(err, DeckError::Io { .. }));
    }

    #[test]
    fn test_header_only_yields_empty_decks() {
        let decks = load("text,deck,count\n");
        assert!(decks.is_empty());
        assert!(!decks.is_playable());
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("4"), Some(4));
        assert_eq!(parse_count("4.9"), Some(4));
        assert_eq!(parse_count("-1"), Some(0));
        assert_eq!(parse_count("NaN"), None);
        assert_eq!(parse_count("inf"), None);
        assert_eq!(parse_count("two"), None);
        assert_eq!(parse_count("1e19"), Some(i64::MAX as u64));
    }

    #[test]
    fn test_oversized_count_is_rejected() {
        for count in ["1e19", "1e10", "18446744073709551616", "10001"] {
            let text = format!("text,deck,count\nBlue,Object,1\nRed,Category,{count}\n");
            let err = DeckLoader::new().load_reader(text.as_bytes()).unwrap_err();
            match err {
                DeckError::CountTooLarge { line, count: reported } => {
                    assert_eq!(line, 3);
                    assert_eq!(reported, count);
                }
                other => panic!("expected CountTooLarge, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_count_at_ceiling_is_accepted() {
        let decks = load(&format!("text,deck,count\nRed,Category,{MAX_COUNT}\n"));
        assert_eq!(decks.len(DeckKind::Category), MAX_COUNT);

        let err = DeckLoader::new()
            .load_reader(format!("text,deck,count\nRed,Category,{}\n", MAX_COUNT + 1).as_bytes())
            .unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
