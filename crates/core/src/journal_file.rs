//! On-disk session journal.
//!
//! A journal is a `.jsonl` file: the first line is a header naming the seed,
//! content hash and config hash, every later line records one key. Each record carries
//! the SHA-256 digest of the record before it, so an edited, dropped or
//! reordered line breaks the chain. Records are flushed as they are written
//! and a crash can at worst leave one half-written trailing line.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::mem;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::journal::{InputJournal, JOURNAL_FORMAT_VERSION};
use crate::types::Key;

const GENESIS_DIGEST: &str = "0000000000000000000000000000000000000000000000000000000000000000";

#[derive(Serialize, Deserialize)]
struct Header {
    format_version: u16,
    content_hash: u64,
    config_hash: u64,
    seed: u64,
}

/// The part of a record covered by its digest.
#[derive(Serialize)]
struct Payload {
    seq: u64,
    key: Key,
}

#[derive(Serialize, Deserialize)]
struct Record {
    seq: u64,
    key: Key,
    prev_sha256_hex: String,
    sha256_hex: String,
}

/// Running tip of the digest chain.
struct Chain {
    tip: String,
}

impl Chain {
    fn new() -> Self {
        Self { tip: GENESIS_DIGEST.to_string() }
    }

    fn digest(&self, seq: u64, key: Key) -> serde_json::Result<String> {
        let payload = serde_json::to_string(&Payload { seq, key })?;
        let mut hasher = Sha256::new();
        hasher.update(payload.as_bytes());
        hasher.update(self.tip.as_bytes());
        Ok(format!("{:064x}", hasher.finalize()))
    }

    /// Links a new record onto the chain and returns it.
    fn link(&mut self, seq: u64, key: Key) -> serde_json::Result<Record> {
        let sha256_hex = self.digest(seq, key)?;
        let prev_sha256_hex = mem::replace(&mut self.tip, sha256_hex.clone());
        Ok(Record { seq, key, prev_sha256_hex, sha256_hex })
    }
}

/// Streams keys into a journal file as they are played.
pub struct JournalWriter {
    out: BufWriter<File>,
    chain: Chain,
    records: u64,
}

impl JournalWriter {
    /// Truncates `path`, creating parent directories, and writes the header.
    pub fn create(
        path: &Path,
        seed: u64,
        content_hash: u64,
        config_hash: u64,
    ) -> io::Result<Self> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let mut writer =
            Self { out: BufWriter::new(File::create(path)?), chain: Chain::new(), records: 0 };
        writer.write_line(&Header {
            format_version: JOURNAL_FORMAT_VERSION,
            content_hash,
            config_hash,
            seed,
        })?;
        Ok(writer)
    }

    pub fn append(&mut self, key: Key) -> io::Result<()> {
        let record = self.chain.link(self.records, key).map_err(io::Error::other)?;
        self.write_line(&record)?;
        self.records += 1;
        Ok(())
    }

    pub fn records_written(&self) -> u64 {
        self.records
    }

    fn write_line<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, value).map_err(io::Error::other)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

pub fn write_journal_to_file(path: &Path, journal: &InputJournal) -> io::Result<()> {
    let mut writer =
        JournalWriter::create(path, journal.seed, journal.content_hash, journal.config_hash)?;
    journal.keys.iter().try_for_each(|&key| writer.append(key))
}

/// Why a journal file was rejected. Line numbers start at 1.
#[derive(Debug, Error)]
pub enum JournalLoadError {
    #[error("journal I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("journal file is empty")]
    EmptyFile,
    #[error("invalid journal header at line {line}: {message}")]
    InvalidHeader { line: usize, message: String },
    #[error("invalid journal record at line {line}: {message}")]
    InvalidRecord { line: usize, message: String },
    #[error("incomplete journal line at line {line}")]
    IncompleteLine { line: usize },
    #[error("SHA-256 hash chain broken at line {line}")]
    HashChainBroken { line: usize },
}

fn parse_header(line: &str) -> Result<Header, JournalLoadError> {
    let invalid = |message: String| JournalLoadError::InvalidHeader { line: 1, message };
    let header: Header = serde_json::from_str(line).map_err(|err| invalid(err.to_string()))?;
    if header.format_version != JOURNAL_FORMAT_VERSION {
        return Err(invalid(format!("unsupported format version {}", header.format_version)));
    }
    Ok(header)
}

/// Reads a journal back, rejecting it at the first line that is cut short,
/// malformed, out of sequence or off the digest chain.
pub fn load_journal_from_file(path: &Path) -> Result<InputJournal, JournalLoadError> {
    let content = fs::read_to_string(path)?;
    let mut lines = content.split_inclusive('\n').enumerate().map(|(idx, raw)| (idx + 1, raw));

    let Some((_, first)) = lines.next() else {
        return Err(JournalLoadError::EmptyFile);
    };
    let Some(first) = first.strip_suffix('\n') else {
        return Err(JournalLoadError::IncompleteLine { line: 1 });
    };
    let header = parse_header(first)?;

    let mut journal = InputJournal::new(header.seed, header.content_hash, header.config_hash);
    let mut chain = Chain::new();
    for (line, raw) in lines {
        let Some(text) = raw.strip_suffix('\n') else {
            return Err(JournalLoadError::IncompleteLine { line });
        };
        let invalid = |message: String| JournalLoadError::InvalidRecord { line, message };

        let record: Record = serde_json::from_str(text).map_err(|err| invalid(err.to_string()))?;
        let expected_seq = journal.len() as u64;
        if record.seq != expected_seq {
            return Err(invalid(format!("expected seq {expected_seq}, found {}", record.seq)));
        }
        if record.prev_sha256_hex != chain.tip {
            return Err(JournalLoadError::HashChainBroken { line });
        }
        let linked = chain.link(record.seq, record.key).map_err(|err| invalid(err.to_string()))?;
        if linked.sha256_hex != record.sha256_hex {
            return Err(JournalLoadError::HashChainBroken { line });
        }
        journal.push(record.key);
    }

    Ok(journal)
}
