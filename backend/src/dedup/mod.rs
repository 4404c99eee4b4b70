//! Fingerprint Index - duplicate detection across uploads
//!
//! Two layers, checked in order:
//!
//! 1. **Exact** - SHA-256 of the raw bytes. A hit is a duplicate with
//!    confidence 1.0.
//! 2. **Near** - Jaccard similarity of word shingles. Texts shorter than
//!    [`MIN_TEXT_LEN`] are never compared; a score of at least
//!    [`SIMILARITY_THRESHOLD`] is a duplicate.
//!
//! The index can be persisted to a single JSON file, rewritten on every
//! change and reloaded at startup.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::IndexResult;

/// Minimum trimmed text length for near-duplicate matching.
pub const MIN_TEXT_LEN: usize = 20;

/// Similarity at or above which two texts are the same document.
pub const SIMILARITY_THRESHOLD: f64 = 0.85;

/// Words per shingle.
pub const SHINGLE_WORDS: usize = 3;

/// Hex SHA-256 of a document.
pub fn sha256_hex(content: &[u8]) -> String {
    let digest = Sha256::digest(content);
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Hashed word shingles of a text, lowercased.
///
/// Texts with fewer than [`SHINGLE_WORDS`] words yield a single shingle.
pub fn shingles(text: &str) -> BTreeSet<u64> {
    let words: Vec<String> = text.split_whitespace().map(str::to_lowercase).collect();
    if words.is_empty() {
        return BTreeSet::new();
    }
    let width = SHINGLE_WORDS.min(words.len());
    words.windows(width).map(|w| shingle_hash(&w.join(" "))).collect()
}

fn shingle_hash(shingle: &str) -> u64 {
    let digest = Sha256::digest(shingle.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}

/// |a ∩ b| / |a ∪ b|, 0 when both are empty.
pub fn jaccard(a: &BTreeSet<u64>, b: &BTreeSet<u64>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// Stored fingerprint of one indexed document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Fingerprint {
    /// Task identifier of the document
    pub doc_id: String,
    pub sha256: String,
    /// Empty when the text was too short to compare
    #[serde(default)]
    pub shingles: BTreeSet<u64>,
}

impl Fingerprint {
    pub fn new(doc_id: impl Into<String>, content: &[u8], text: &str) -> Self {
        let shingles = if text.trim().len() >= MIN_TEXT_LEN {
            shingles(text)
        } else {
            BTreeSet::new()
        };
        Self {
            doc_id: doc_id.into(),
            sha256: sha256_hex(content),
            shingles,
        }
    }
}

/// Outcome of a duplicate search.
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateMatch {
    /// Document the upload duplicates
    pub source_id: String,
    /// 1.0 for byte-identical files, the similarity otherwise
    pub score: f64,
}

#[derive(Debug, Default, Deserialize)]
struct IndexFile {
    entries: Vec<Fingerprint>,
}

#[derive(Serialize)]
struct IndexFileRef<'a> {
    entries: &'a [Fingerprint],
}

/// Fingerprints of every non-duplicate document seen so far.
#[derive(Debug, Default)]
pub struct FingerprintIndex {
    /// Persistence file, `None` for a purely in-memory index
    path: Option<PathBuf>,
    entries: Vec<Fingerprint>,
    hashes: HashSet<String>,
}

impl FingerprintIndex {
    /// An index that is never written to disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load the index stored at `path`.
    ///
    /// A missing file starts an empty index; an unreadable one is logged
    /// and replaced on the next write.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<IndexFile>(&content) {
                Ok(file) => file.entries,
                Err(e) => {
                    tracing::warn!(path = %path.display(), "⚠️ Fingerprint index unreadable, starting fresh: {}", e);
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), "⚠️ Failed to read fingerprint index: {}", e);
                Vec::new()
            }
        };

        let hashes = entries.iter().map(|e| e.sha256.clone()).collect();
        tracing::info!(path = %path.display(), count = entries.len(), "🗂️ Fingerprint index loaded");
        Self {
            path: Some(path),
            entries,
            hashes,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Look for an indexed document matching `candidate`.
    pub fn search(&self, candidate: &Fingerprint) -> Option<DuplicateMatch> {
        if self.hashes.contains(&candidate.sha256) {
            let source = self.entries.iter().find(|e| e.sha256 == candidate.sha256)?;
            tracing::info!(source = %source.doc_id, "🔁 Duplicate detected via SHA-256");
            return Some(DuplicateMatch {
                source_id: source.doc_id.clone(),
                score: 1.0,
            });
        }

        if candidate.shingles.is_empty() {
            return None;
        }

        let (best, score) = self
            .entries
            .iter()
            .filter(|e| !e.shingles.is_empty())
            .map(|e| (e, jaccard(&e.shingles, &candidate.shingles)))
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))?;

        if score >= SIMILARITY_THRESHOLD {
            tracing::info!(source = %best.doc_id, score, "🔁 Duplicate detected via text similarity");
            Some(DuplicateMatch {
                source_id: best.doc_id.clone(),
                score,
            })
        } else {
            None
        }
    }

    /// Add a fingerprint and persist the index.
    ///
    /// Memory only changes once the file is written, so a failed write
    /// leaves nothing behind for later searches to match.
    pub fn add(&mut self, fingerprint: Fingerprint) -> IndexResult<()> {
        self.entries.push(fingerprint);
        if let Err(e) = self.persist(&self.entries) {
            self.entries.pop();
            return Err(e);
        }
        if let Some(added) = self.entries.last() {
            self.hashes.insert(added.sha256.clone());
        }
        Ok(())
    }

    /// Forget every fingerprint and persist the empty index.
    pub fn clear(&mut self) -> IndexResult<()> {
        self.persist(&[])?;
        self.entries.clear();
        self.hashes.clear();
        Ok(())
    }

    fn persist(&self, entries: &[Fingerprint]) -> IndexResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string(&IndexFileRef { entries })?)?;
        Ok(())
    }
}
