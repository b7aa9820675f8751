/// The brick currently on top of a column.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Occupant {
    /// Source index of the brick.
    pub brick: usize,
    /// The brick's width per covered column, gutters between its columns removed.
    pub column_width: f64,
}

/// Running heights of every column, gutters included.
///
/// The single piece of mutable layout state: reset once per full pack and
/// carried over untouched between incremental packs. Alongside each height
/// it remembers which brick last raised the column, so horizontal offsets
/// can be derived from the bricks actually sitting to the left.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct ColumnHeights {
    heights: Vec<f64>,
    #[serde(skip)]
    occupants: Vec<Option<Occupant>>,
}

impl ColumnHeights {
    /// `columns` empty columns.
    pub fn new(columns: usize) -> Self {
        let mut c = Self::default();
        c.reset(columns);
        c
    }

    /// Replace the heights with `columns` zeros.
    pub fn reset(&mut self, columns: usize) {
        self.heights.clear();
        self.heights.resize(columns, 0.0);
        self.occupants.clear();
        self.occupants.resize(columns, None);
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    /// Whether there are no columns at all.
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Height of column `index`, `0` when out of range.
    pub fn get(&self, index: usize) -> f64 {
        self.heights.get(index).copied().unwrap_or(0.0)
    }

    /// All heights, left to right.
    pub fn as_slice(&self) -> &[f64] {
        &self.heights
    }

    /// Index of the shortest column; ties go to the lowest index.
    pub fn min(&self) -> usize {
        let mut best = 0;
        for (idx, &h) in self.heights.iter().enumerate().skip(1) {
            if h < self.heights[best] {
                best = idx;
            }
        }
        best
    }

    /// Tallest column height, `0` without columns.
    pub fn max(&self) -> f64 {
        self.heights.iter().copied().fold(0.0, f64::max)
    }

    /// Raise column `index` by `amount`.
    pub fn add(&mut self, index: usize, amount: f64) {
        if let Some(h) = self.heights.get_mut(index) {
            *h += amount;
        }
    }

    /// Raise `count` columns starting at `start` by `amount`, stopping at the grid edge.
    pub fn add_range(&mut self, start: usize, count: usize, amount: f64) {
        let end = self.clamp_end(start, count);
        if start >= end {
            return;
        }
        for h in &mut self.heights[start..end] {
            *h += amount;
        }
    }

    /// Brick on top of column `index`, if any solid brick reached it yet.
    pub fn occupant(&self, index: usize) -> Option<Occupant> {
        self.occupants.get(index).copied().flatten()
    }

    /// Record `occupant` as the top brick of `count` columns from `start`.
    pub fn occupy(&mut self, start: usize, count: usize, occupant: Occupant) {
        let end = self.clamp_end(start, count);
        if start >= end {
            return;
        }
        for slot in &mut self.occupants[start..end] {
            *slot = Some(occupant);
        }
    }

    fn clamp_end(&self, start: usize, count: usize) -> usize {
        start.saturating_add(count).min(self.heights.len())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/columns.rs"]
mod tests;
