//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use log::debug;
use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Load words from a file, one per line
///
/// See [`words_from_reader`] for which lines are kept.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_sweep::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let words = words_from_reader(BufReader::new(File::open(path)?))?;
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Read words from any line source
///
/// Line endings may be `\n` or `\r\n`; nothing else is stripped. Lines that
/// are not exactly five lowercase letters are skipped, as are repeats of an
/// earlier word; file order is kept otherwise.
///
/// # Errors
///
/// Returns an I/O error if reading fails.
pub fn words_from_reader<R: BufRead>(reader: R) -> io::Result<Vec<Word>> {
    let mut seen = FxHashSet::default();
    let mut words = Vec::new();
    let mut skipped = 0usize;

    for line in reader.lines() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        match Word::new(line) {
            Ok(word) if seen.insert(word) => words.push(word),
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!("skipped {skipped} invalid or repeated dictionary lines");
    }
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_sweep::wordlists::loader::words_from_slice;
/// use wordle_sweep::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
