//! Bulk loading of word-count tables.
//!
//! Rows are `track_id, word, count`, the layout of the `lyrics` table in the
//! musiXmatch bag-of-words dataset. They come either from that SQLite
//! database or from a delimited text export of it. A track's score is the
//! sum of the counts of the configured words; tracks without any of those
//! words are left out.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use indexmap::IndexMap;
use rusqlite::{params_from_iter, Connection, OpenFlags};
use score_forest::Record;

use crate::config::{RankConfig, TableSource};
use crate::error::LoadError;

fn into_records(scores: IndexMap<String, i64>) -> Vec<Record> {
    scores
        .into_iter()
        .map(|(id, score)| Record::new(id, score))
        .collect()
}

/// Read a table and sum the counted words per track.
///
/// Records come out in order of each track's first counted row. Rows for
/// other words are only checked for having three fields.
pub fn load_records<R: BufRead>(reader: R, config: &RankConfig) -> Result<Vec<Record>, LoadError> {
    let mut scores: IndexMap<String, i64> = IndexMap::new();
    let mut header_pending = config.has_header;
    let mut rows = 0usize;

    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line.map_err(|source| LoadError::Read { line: line_no, source })?;
        if line.trim().is_empty() {
            continue;
        }
        if header_pending {
            header_pending = false;
            continue;
        }

        let fields: Vec<&str> = line.split(config.delimiter).map(str::trim).collect();
        let [track, word, count, ..] = fields[..] else {
            return Err(LoadError::MissingFields {
                line: line_no,
                found: fields.len(),
            });
        };
        rows += 1;
        if !config.counts_word(word) {
            continue;
        }
        let count: i64 = count.parse().map_err(|_| LoadError::BadCount {
            line: line_no,
            value: count.to_string(),
        })?;
        *scores.entry(track.to_string()).or_insert(0) += count;
    }

    log::info!("read {rows} rows, {} tracks scored", scores.len());
    Ok(into_records(scores))
}

/// Query the `lyrics` table of an open database and sum the counted words
/// per track, in the order the rows come back.
pub fn load_connection(conn: &Connection, config: &RankConfig) -> rusqlite::Result<Vec<Record>> {
    if config.words.is_empty() {
        return Ok(Vec::new());
    }
    let marks = vec!["?"; config.words.len()].join(", ");
    let sql = format!("SELECT track_id, word, count FROM lyrics WHERE word IN ({marks})");
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query(params_from_iter(config.words.iter()))?;

    let mut scores: IndexMap<String, i64> = IndexMap::new();
    let mut kept = 0usize;
    while let Some(row) = rows.next()? {
        let track: String = row.get(0)?;
        let count: i64 = row.get(2)?;
        *scores.entry(track).or_insert(0) += count;
        kept += 1;
    }

    log::info!("queried {kept} rows, {} tracks scored", scores.len());
    Ok(into_records(scores))
}

/// Load a table from a file, as SQLite or delimited text per
/// [`RankConfig::source`].
pub fn load_path(path: &Path, config: &RankConfig) -> Result<Vec<Record>, LoadError> {
    match config.source.resolve(path) {
        TableSource::Sqlite => {
            let sqlite = |source| LoadError::Sqlite {
                path: path.to_path_buf(),
                source,
            };
            let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
                .map_err(sqlite)?;
            load_connection(&conn, config).map_err(sqlite)
        }
        _ => {
            let file = File::open(path).map_err(|source| LoadError::Open {
                path: path.to_path_buf(),
                source,
            })?;
            load_records(BufReader::new(file), config)
        }
    }
}

/// Score of a song given the counts of each counted word.
pub fn score_of_counts(counts: &[i64]) -> i64 {
    counts.iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
track_id,word,count
TRA,i,4
TRA,love,2
TRB,me,1
TRA,my,3
TRC,you,9
";

    #[test]
    fn sums_counted_words_per_track() {
        let records = load_records(TABLE.as_bytes(), &RankConfig::default()).unwrap();
        assert_eq!(records, vec![Record::new("TRA", 7), Record::new("TRB", 1)]);
    }

    #[test]
    fn custom_words_and_delimiter() {
        let cfg = RankConfig {
            words: vec!["you".into()],
            delimiter: '\t',
            has_header: false,
            ..RankConfig::default()
        };
        let table = "TRC\tyou\t9\nTRD\tyou\t1\n\nTRC\tyou\t1\n";
        let records = load_records(table.as_bytes(), &cfg).unwrap();
        assert_eq!(records, vec![Record::new("TRC", 10), Record::new("TRD", 1)]);
    }

    #[test]
    fn short_row_reports_line() {
        let table = "track_id,word,count\nTRA,i\n";
        let err = load_records(table.as_bytes(), &RankConfig::default()).unwrap_err();
        assert!(matches!(err, LoadError::MissingFields { line: 2, found: 2 }));
    }

    #[test]
    fn bad_count_reports_line() {
        let table = "track_id,word,count\nTRA,i,1\nTRA,me,lots\n";
        let err = load_records(table.as_bytes(), &RankConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "line 3: invalid count \"lots\"");
    }

    fn lyrics_db(rows: &[(&str, &str, i64)]) -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE lyrics (track_id TEXT, mxm_tid INT, word TEXT, count INT, is_test INT)",
        )
        .unwrap();
        for (track, word, count) in rows {
            conn.execute(
                "INSERT INTO lyrics (track_id, mxm_tid, word, count, is_test) VALUES (?1, 0, ?2, ?3, 0)",
                rusqlite::params![track, word, count],
            )
            .unwrap();
        }
        conn
    }

    #[test]
    fn sqlite_sums_counted_words_per_track() {
        let conn = lyrics_db(&[
            ("TRA", "i", 4),
            ("TRA", "love", 2),
            ("TRB", "me", 1),
            ("TRA", "my", 3),
            ("TRC", "you", 9),
            ("TRB", "my", 6),
        ]);
        let mut records = load_connection(&conn, &RankConfig::default()).unwrap();
        records.sort_by(|a, b| a.id.cmp(&b.id));
        assert_eq!(records, vec![Record::new("TRA", 7), Record::new("TRB", 7)]);
    }

    #[test]
    fn sqlite_word_set_is_configurable() {
        let conn = lyrics_db(&[("TRA", "i", 4), ("TRC", "you", 9), ("TRC", "you", 1)]);
        let cfg = RankConfig {
            words: vec!["you".into()],
            ..RankConfig::default()
        };
        assert_eq!(load_connection(&conn, &cfg).unwrap(), vec![Record::new("TRC", 10)]);

        let none = RankConfig {
            words: vec![],
            ..RankConfig::default()
        };
        assert!(load_connection(&conn, &none).unwrap().is_empty());
    }

    #[test]
    fn sqlite_without_lyrics_table_is_an_error() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(load_connection(&conn, &RankConfig::default()).is_err());
    }

    #[test]
    fn counts_of_song() {
        assert_eq!(score_of_counts(&[3, 0, 2]), 5);
        assert_eq!(score_of_counts(&[]), 0);
    }
}
