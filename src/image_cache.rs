//! Sliding-window cache of decoded images.
//!
//! Keeps exactly the images within `radius` positions of the cursor decoded.
//! Every cursor change evicts what fell out of the window and decodes what
//! entered it, so the cache never grows past `2 * radius + 1` entries.

use log::debug;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// A cache entry: either a display-ready image or the reason decoding failed.
#[derive(Clone)]
pub enum CachedImage {
    Decoded {
        image: slint::Image,
        width: u32,
        height: u32,
    },
    Failed(String),
}

impl CachedImage {
    #[cfg(test)]
    pub fn is_decoded(&self) -> bool {
        matches!(self, CachedImage::Decoded { .. })
    }
}

/// Window cache keyed by position in the image list.
pub struct DecodeCache<T> {
    entries: BTreeMap<usize, T>,
    radius: usize,
}

impl<T> DecodeCache<T> {
    /// Creates an empty cache that keeps `radius` entries on each side of the cursor.
    pub fn new(radius: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            radius,
        }
    }

    /// Returns the clamped window of indices around `cursor`, or `None` for an empty list.
    pub fn window(&self, cursor: usize, len: usize) -> Option<RangeInclusive<usize>> {
        if len == 0 {
            return None;
        }
        let cursor = cursor.min(len - 1);
        let start = cursor.saturating_sub(self.radius);
        let end = cursor.saturating_add(self.radius).min(len - 1);
        Some(start..=end)
    }

    /// Brings the cached key set in line with the window around `cursor`.
    ///
    /// `load` is called once for every in-window index that is not cached yet.
    pub fn sync<F>(&mut self, cursor: usize, len: usize, mut load: F)
    where
        F: FnMut(usize) -> T,
    {
        let Some(window) = self.window(cursor, len) else {
            if !self.entries.is_empty() {
                debug!("Cache CLEAR: {} entries", self.entries.len());
                self.entries.clear();
            }
            return;
        };

        self.entries.retain(|index, _| {
            let keep = window.contains(index);
            if !keep {
                debug!("Cache EVICT: #{}", index);
            }
            keep
        });

        for index in window {
            if self.entries.contains_key(&index) {
                continue;
            }
            debug!("Cache MISS: #{}", index);
            self.entries.insert(index, load(index));
        }
    }

    /// Retrieves the entry at `index` if it is cached.
    pub fn get(&self, index: usize) -> Option<&T> {
        let result = self.entries.get(&index);
        if result.is_some() {
            debug!("Cache HIT: #{}", index);
        }
        result
    }
}

#[cfg(test)]
impl<T> DecodeCache<T> {
    pub fn contains(&self, index: usize) -> bool {
        self.entries.contains_key(&index)
    }

    /// Cached indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
