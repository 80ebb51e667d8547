//! The ordered record store and its line-record text format.
//!
//! A dictionary file is a sequence of three-prefix blocks:
//!
//! ```text
//! Type: n
//! Definition: a round fruit with firm flesh
//! Word: apple
//! ```
//!
//! Each prefix independently sets a field on a working entry; the `Word:`
//! line commits it. Blank lines between blocks are cosmetic. Lines matching
//! no known prefix are skipped and counted, never fatal.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::mem;
use std::path::Path;

use crate::entry::Entry;
use crate::error::{AddError, LoadError, SaveError};
use crate::query;

const TYPE_PREFIX: &str = "Type: ";
const DEFINITION_PREFIX: &str = "Definition: ";
const WORD_PREFIX: &str = "Word: ";

/// Outcome of a successful load: how many records were committed and how
/// many non-blank lines matched no known prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped_lines: usize,
}

/// In-memory ordered collection of dictionary entries.
///
/// Order is insertion order from load and later additions. The store itself
/// enforces no uniqueness; duplicate names may coexist and lookup returns
/// the first match. [`Store::add`] is the layer that rejects duplicates.
#[derive(Debug, Default)]
pub struct Store {
    entries: Vec<Entry>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a dictionary file, replacing all current entries.
    ///
    /// Fails with [`LoadError::NotFound`] when the file cannot be opened;
    /// malformed content never fails, it is skipped and reported through
    /// the returned [`LoadSummary`].
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadSummary, LoadError> {
        let path = path.as_ref();
        let file =
            File::open(path).map_err(|_| LoadError::NotFound(path.display().to_string()))?;
        let summary = self.load_from_reader(BufReader::new(file))?;
        tracing::info!(
            path = %path.display(),
            loaded = summary.loaded,
            skipped = summary.skipped_lines,
            "dictionary loaded"
        );
        Ok(summary)
    }

    /// Parse the line-record format from any buffered reader.
    ///
    /// Existing entries are cleared first: a load replaces, never appends.
    /// Carriage returns are stripped before prefix matching. A trailing
    /// working entry that never saw a `Word:` line is dropped.
    pub fn load_from_reader(&mut self, reader: impl BufRead) -> Result<LoadSummary, LoadError> {
        self.entries.clear();

        let mut word_type = String::new();
        let mut definition = String::new();
        let mut skipped = 0usize;

        for line in reader.lines() {
            let mut line = line?;
            line.retain(|c| c != '\r');

            if let Some(rest) = line.strip_prefix(TYPE_PREFIX) {
                word_type = rest.to_string();
            } else if let Some(rest) = line.strip_prefix(DEFINITION_PREFIX) {
                definition = rest.to_string();
            } else if let Some(rest) = line.strip_prefix(WORD_PREFIX) {
                // Commit the working entry and reset it for the next block.
                self.entries.push(Entry::new(
                    rest,
                    mem::take(&mut word_type),
                    mem::take(&mut definition),
                ));
            } else if !line.is_empty() {
                skipped += 1;
            }
        }

        if skipped > 0 {
            tracing::warn!(skipped, "ignored lines with no recognized prefix");
        }

        Ok(LoadSummary {
            loaded: self.entries.len(),
            skipped_lines: skipped,
        })
    }

    /// Find the first entry whose name matches `key`, case-insensitively.
    ///
    /// Linear scan over insertion order; stored names are already lowercase
    /// so only the key needs folding.
    pub fn search(&self, key: &str) -> Option<&Entry> {
        let key = key.to_ascii_lowercase();
        self.entries.iter().find(|entry| entry.name() == key)
    }

    /// Append a new entry, rejecting duplicates and unknown type codes.
    ///
    /// The type code is expanded to its display label before storing, so a
    /// word added here is saved with `Type: Noun` rather than `Type: n`.
    pub fn add(&mut self, name: &str, type_code: &str, definition: &str) -> Result<(), AddError> {
        if self.search(name).is_some() {
            return Err(AddError::Duplicate(name.to_ascii_lowercase()));
        }
        let label = query::expand_type(type_code);
        if label == query::UNKNOWN_TYPE {
            return Err(AddError::InvalidType(type_code.to_string()));
        }
        self.entries.push(Entry::new(name, label, definition));
        Ok(())
    }

    /// Write every entry to `path` in the line-record format.
    ///
    /// The destination is truncated first; this is a whole-file rewrite,
    /// not an incremental patch.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SaveError> {
        let path = path.as_ref();
        let file =
            File::create(path).map_err(|_| SaveError::WriteFailed(path.display().to_string()))?;
        let mut writer = BufWriter::new(file);
        self.save_to_writer(&mut writer)?;
        writer.flush()?;
        tracing::info!(path = %path.display(), entries = self.entries.len(), "dictionary saved");
        Ok(())
    }

    /// Emit the line-record format to any writer, one blank line between
    /// blocks.
    pub fn save_to_writer(&self, mut writer: impl Write) -> Result<(), SaveError> {
        for entry in &self.entries {
            writeln!(writer, "{TYPE_PREFIX}{}", entry.word_type())?;
            writeln!(writer, "{DEFINITION_PREFIX}{}", entry.definition())?;
            writeln!(writer, "{WORD_PREFIX}{}", entry.name())?;
            writeln!(writer)?;
        }
        Ok(())
    }
}
