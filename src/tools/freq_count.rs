use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Word → number of occurrences.
pub type FreqTable = FxHashMap<String, u64>;

/// Counts word frequencies by splitting the input into contiguous partitions, counting
/// each one in its own map on the rayon pool, and summing the partial maps.
///
/// The merge is plain addition, so the result is the same for every partition count
/// and every scheduling. The call blocks until all partitions are counted. There is no
/// timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreqCounter {
    partitions: usize,
}

impl FreqCounter {
    /// A counter using `partitions` chunks. Zero is treated as one.
    pub fn new(partitions: usize) -> Self {
        Self {
            partitions: partitions.max(1),
        }
    }

    /// Split the input into two halves, one task each.
    pub fn two_way() -> Self {
        Self::new(2)
    }

    pub fn partitions(&self) -> usize {
        self.partitions
    }

    /// Returns a frequency count of `words`. An empty input gives an empty table.
    pub fn count<S: AsRef<str> + Sync>(&self, words: &[S]) -> FreqTable {
        if words.is_empty() {
            return FreqTable::default();
        }
        // Ceiling division keeps the number of chunks at or below the partition count.
        // More partitions than words just means one word per chunk.
        let chunk_size = words.len().div_ceil(self.partitions);
        debug!(
            "Counting {} words in chunks of {} ({} partitions)",
            words.len(),
            chunk_size,
            self.partitions
        );
        words
            .par_chunks(chunk_size)
            .map(count_words)
            .reduce(FreqTable::default, merge_counts)
    }
}

impl Default for FreqCounter {
    /// One partition per rayon worker thread.
    fn default() -> Self {
        Self::new(rayon::current_num_threads())
    }
}

/// Sequential frequency count.
pub fn count_words<S: AsRef<str>>(words: &[S]) -> FreqTable {
    let mut freqs = FreqTable::default();
    for word in words {
        let word = word.as_ref();
        match freqs.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                freqs.insert(word.to_string(), 1);
            }
        }
    }
    freqs
}

/// Sum two partial counts. Words found in only one side are carried over as they are.
pub fn merge_counts(a: FreqTable, b: FreqTable) -> FreqTable {
    // Fold the smaller map into the larger one.
    let (mut into, from) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    for (word, count) in from {
        *into.entry(word).or_insert(0) += count;
    }
    into
}
