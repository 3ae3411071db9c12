// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet::BLANK;
use super::error;

struct Entry {
    word: Box<str>,
    tally: [u8; 26],
    // bit i set iff the word uses letter i.
    letter_bits: u32,
}

impl Entry {
    fn new(word: String) -> Self {
        let mut tally = [0u8; 26];
        let mut letter_bits = 0u32;
        for b in word.bytes() {
            let i = (b - b'a') as usize;
            tally[i] = tally[i].saturating_add(1);
            letter_bits |= 1 << i;
        }
        Self {
            word: word.into_boxed_str(),
            tally,
            letter_bits,
        }
    }
}

// letters available to build words from: a tally of a to z plus blanks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LetterPool {
    tally: [u8; 26],
    blanks: u8,
    len: usize,
}

impl LetterPool {
    pub fn new() -> Self {
        Self::default()
    }

    // lowercase letters and blanks count; board letters may come in uppercase.
    pub fn add(&mut self, c: char) {
        if c == BLANK {
            self.blanks += 1;
            self.len += 1;
        } else if c.is_ascii_alphabetic() {
            let i = (c.to_ascii_lowercase() as u8 - b'a') as usize;
            self.tally[i] += 1;
            self.len += 1;
        }
    }

    pub fn from_tiles<I: IntoIterator<Item = char>>(tiles: I) -> Self {
        let mut pool = Self::new();
        tiles.into_iter().for_each(|c| pool.add(c));
        pool
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn blanks(&self) -> u8 {
        self.blanks
    }

    #[inline(always)]
    fn letter_bits(&self) -> u32 {
        (0..26).fold(0, |bits, i| {
            if self.tally[i] != 0 {
                bits | (1 << i)
            } else {
                bits
            }
        })
    }

    #[inline(always)]
    fn can_build(&self, entry: &Entry, pool_bits: u32) -> bool {
        if entry.word.len() > self.len {
            return false;
        }
        if self.blanks == 0 && entry.letter_bits & !pool_bits != 0 {
            return false;
        }
        let mut shortfall = 0u32;
        for i in 0..26 {
            shortfall += entry.tally[i].saturating_sub(self.tally[i]) as u32;
        }
        shortfall <= self.blanks as u32
    }

    // word is lowercase a to z.
    pub fn can_build_word(&self, word: &[u8]) -> bool {
        if word.len() > self.len {
            return false;
        }
        let mut tally = self.tally;
        let mut blanks = self.blanks;
        for &b in word {
            let i = (b - b'a') as usize;
            if tally[i] > 0 {
                tally[i] -= 1;
            } else if blanks > 0 {
                blanks -= 1;
            } else {
                return false;
            }
        }
        true
    }
}

pub struct Dictionary {
    // sorted by word, no duplicates.
    entries: Box<[Entry]>,
}

impl Dictionary {
    // words are lowercased; anything not purely a to z is skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = words
            .into_iter()
            .filter_map(|w| {
                let w = w.as_ref().trim();
                if !w.is_empty() && w.bytes().all(|b| b.is_ascii_alphabetic()) {
                    Some(w.to_ascii_lowercase())
                } else {
                    if !w.is_empty() {
                        log::debug!("skipping dictionary entry {:?}", w);
                    }
                    None
                }
            })
            .collect::<Vec<_>>();
        words.sort_unstable();
        words.dedup();
        Self {
            entries: words.into_iter().map(Entry::new).collect(),
        }
    }

    pub fn from_reader<R: std::io::Read>(mut reader: R) -> error::Returns<Self> {
        let mut s = String::new();
        reader.read_to_string(&mut s)?;
        Ok(Self::from_words(s.lines()))
    }

    pub fn from_path<P: AsRef<std::path::Path>>(path: P) -> error::Returns<Self> {
        let path = path.as_ref();
        let dictionary = Self::from_reader(std::fs::File::open(path)?)?;
        log::info!("loaded {} words from {}", dictionary.len(), path.display());
        Ok(dictionary)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // case-insensitive. looking up an empty string is a caller bug.
    pub fn contains(&self, word: &str) -> error::Returns<bool> {
        if word.is_empty() {
            return_error!("dictionary lookup of an empty word");
        }
        Ok(self.is_word(&word.to_ascii_lowercase()))
    }

    // the lookup search and legality use: word must already be lowercase and
    // non-empty. outside callers should go through contains().
    #[inline(always)]
    pub fn is_word(&self, word: &str) -> bool {
        self.entries
            .binary_search_by(|entry| (*entry.word).cmp(word))
            .is_ok()
    }

    // every word buildable from the pool, each blank standing in for one missing letter.
    pub fn words_buildable_from<'a>(&'a self, pool: &'a LetterPool) -> impl Iterator<Item = &'a str> {
        let pool_bits = pool.letter_bits();
        self.entries
            .iter()
            .filter(move |entry| pool.can_build(entry, pool_bits))
            .map(|entry| &*entry.word)
    }

    pub fn count_buildable_from(&self, pool: &LetterPool) -> usize {
        self.words_buildable_from(pool).count()
    }
}
