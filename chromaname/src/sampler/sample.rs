//! Frequency tables produced by a neighborhood scan.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::color::Rgb;
use crate::sampler::ScanRegion;

/// Occurrence counts keyed by color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<Rgb, u32>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `color`.
    pub fn record(&mut self, color: Rgb) {
        *self.counts.entry(color).or_insert(0) += 1;
    }

    /// Occurrences of `color` (zero if never recorded).
    pub fn count(&self, color: Rgb) -> u32 {
        self.counts.get(&color).copied().unwrap_or(0)
    }

    /// Number of distinct colors.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// The most frequent color and its count.
    ///
    /// Ties go to the smallest color in (R, G, B) order, so the result does
    /// not depend on scan order or hash iteration order.
    pub fn most_frequent(&self) -> Option<(Rgb, u32)> {
        self.counts
            .iter()
            .max_by_key(|(color, count)| (**count, Reverse(**color)))
            .map(|(color, count)| (*color, *count))
    }
}

/// Result of scanning one neighborhood.
#[derive(Debug, Clone)]
pub struct ColorSample {
    /// The scanned area.
    pub region: ScanRegion,

    /// Chromatic pixels, keyed by their brightened color.
    pub chromatic: FrequencyTable,

    /// Gray pixels, keyed by their original color.
    pub gray: FrequencyTable,

    /// Points inside the disk whose index fell outside the frame.
    pub misses: usize,
}

impl ColorSample {
    pub(crate) fn new(region: ScanRegion) -> Self {
        Self {
            region,
            chromatic: FrequencyTable::new(),
            gray: FrequencyTable::new(),
            misses: 0,
        }
    }

    /// Pixels that were read and classified.
    pub fn sampled(&self) -> usize {
        (self.chromatic.total() + self.gray.total()) as usize
    }

    /// The representative color: the most frequent chromatic color, or the
    /// most frequent gray when no chromatic pixel was found.
    pub fn dominant(&self) -> Option<Rgb> {
        self.chromatic
            .most_frequent()
            .or_else(|| self.gray.most_frequent())
            .map(|(color, _)| color)
    }
}
