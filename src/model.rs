use chrono::{DateTime, FixedOffset};

/// Trailing window of days covered by the heatmap, today included as day 0.
pub const HORIZON: usize = 180;

/// Week columns covering the horizon; the renderer prints two more.
pub const WEEKS_TO_COUNT: usize = 26;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub author_email: String,
    pub author_time: DateTime<FixedOffset>,
}

/// Commit counts keyed by day offset, `0` being today.
///
/// Every offset in `0..=horizon` is present from construction on, so
/// lookups never miss and two tables over the same horizon merge slot by slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetTable {
    counts: Vec<u32>,
}

impl OffsetTable {
    pub fn new() -> Self {
        Self {
            counts: vec![0; HORIZON + 1],
        }
    }

    pub fn horizon(&self) -> usize {
        self.counts.len() - 1
    }

    pub fn get(&self, offset: usize) -> u32 {
        self.counts.get(offset).copied().unwrap_or(0)
    }

    /// Count one commit at `offset`. Offsets past the horizon are ignored.
    pub fn increment(&mut self, offset: usize) {
        if let Some(count) = self.counts.get_mut(offset) {
            *count += 1;
        }
    }

    pub fn merge(&mut self, other: &OffsetTable) {
        for (count, extra) in self.counts.iter_mut().zip(&other.counts) {
            *count += extra;
        }
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.counts.iter().copied().enumerate()
    }
}

impl Default for OffsetTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<(usize, u32)> for OffsetTable {
    /// Builds a full-horizon table from sparse `(offset, count)` pairs.
    fn from_iter<I: IntoIterator<Item = (usize, u32)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (offset, count) in iter {
            if let Some(slot) = table.counts.get_mut(offset) {
                *slot += count;
            }
        }
        table
    }
}
