//! Immutable-after-load word set with a consumed-word tracker.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::Rng;

use crate::PoolError;

/// The finite supply of secret words.
///
/// The word list itself is immutable after construction; only the set
/// of consumed indices changes, and every change goes through
/// [`WordPool::draw`] under an internal lock. That makes the pool safe
/// to share (`Arc<WordPool>`) across concurrent callers: two draws can
/// never hand out the same word.
pub struct WordPool {
    /// All words, in source order, duplicates removed.
    words: Vec<String>,
    /// Indices into `words` that have been drawn.
    consumed: Mutex<HashSet<usize>>,
}

impl WordPool {
    /// Builds a pool from an iterator of candidate words.
    ///
    /// Entries are trimmed; blank entries and duplicates are dropped
    /// (first occurrence wins, so source order is preserved).
    ///
    /// # Errors
    /// Returns [`PoolError::Empty`] if no usable words remain after
    /// filtering.
    pub fn from_words<I, S>(source: I) -> Result<Self, PoolError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut words = Vec::new();
        for entry in source {
            let word = entry.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            if seen.insert(word.to_string()) {
                words.push(word.to_string());
            }
        }

        if words.is_empty() {
            return Err(PoolError::Empty);
        }

        tracing::info!(words = words.len(), "word pool loaded");
        Ok(Self {
            words,
            consumed: Mutex::new(HashSet::new()),
        })
    }

    /// Builds a pool from a newline-delimited reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, PoolError> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        Self::from_words(lines)
    }

    /// Builds a pool from a newline-delimited file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PoolError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Draws one word uniformly at random from the unconsumed set and
    /// marks it consumed, atomically with respect to concurrent draws.
    ///
    /// # Errors
    /// Returns [`PoolError::Exhausted`] when every word has been drawn.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> Result<String, PoolError> {
        let mut consumed = self.consumed_lock();

        let available: Vec<usize> = (0..self.words.len())
            .filter(|i| !consumed.contains(i))
            .collect();
        if available.is_empty() {
            return Err(PoolError::Exhausted);
        }

        let index = available[rng.random_range(0..available.len())];
        consumed.insert(index);

        tracing::debug!(
            remaining = self.words.len() - consumed.len(),
            "word drawn"
        );
        Ok(self.words[index].clone())
    }

    /// Number of words not yet drawn. No side effects.
    pub fn remaining(&self) -> usize {
        self.words.len() - self.consumed_lock().len()
    }

    /// Total number of words loaded.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`: construction rejects empty pools.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn consumed_lock(&self) -> MutexGuard<'_, HashSet<usize>> {
        // The consumed set is always left in a valid state, so a
        // poisoned lock is still safe to reuse.
        self.consumed.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// =========================================================================
// Tests
// =========================================================================
