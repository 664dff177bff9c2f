//! Potential field storage.

use std::fmt::Write;

use crate::core::GridIndex;
use crate::grid::CellGrid;

/// Cost given to the goal cell and its immediate neighbours
pub const BASE_COST: u32 = 3;

/// Integer cost per grid slot, parallel to a [`CellGrid`].
#[derive(Clone, Debug, PartialEq)]
pub struct PotentialField {
    costs: Vec<Option<u32>>,
    width: usize,
    height: usize,
    goal: GridIndex,
    rounds: usize,
}

impl PotentialField {
    pub(super) fn new(grid: &CellGrid, goal: GridIndex) -> Self {
        Self {
            costs: vec![None; grid.width() * grid.height()],
            width: grid.width(),
            height: grid.height(),
            goal,
            rounds: 0,
        }
    }

    pub(super) fn set(&mut self, index: GridIndex, cost: u32) {
        if let Some(slot) = self.slot(index) {
            self.costs[slot] = Some(cost);
        }
    }

    pub(super) fn set_rounds(&mut self, rounds: usize) {
        self.rounds = rounds;
    }

    #[inline]
    fn slot(&self, index: GridIndex) -> Option<usize> {
        if index.x >= 0
            && index.y >= 0
            && (index.x as usize) < self.width
            && (index.y as usize) < self.height
        {
            Some(index.y as usize * self.width + index.x as usize)
        } else {
            None
        }
    }

    /// Cost at the index, `None` for empty or unreached slots
    #[inline]
    pub fn get(&self, index: GridIndex) -> Option<u32> {
        self.slot(index).and_then(|s| self.costs[s])
    }

    /// Goal cell chosen from the start position
    #[inline]
    pub fn goal(&self) -> GridIndex {
        self.goal
    }

    /// Propagation rounds after the initial seeding
    #[inline]
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Field width (same as the grid)
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Field height (same as the grid)
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of slots holding a cost
    pub fn costed_count(&self) -> usize {
        self.costs.iter().filter(|c| c.is_some()).count()
    }

    /// Largest cost in the field
    pub fn max_cost(&self) -> Option<u32> {
        self.costs.iter().flatten().copied().max()
    }

    /// Slot with the highest cost; ties go to the first in row-major order.
    pub fn max_cost_index(&self) -> Option<GridIndex> {
        let mut best: Option<(usize, u32)> = None;
        for (slot, cost) in self.costs.iter().enumerate() {
            if let Some(cost) = *cost
                && best.is_none_or(|(_, b)| cost > b)
            {
                best = Some((slot, cost));
            }
        }
        best.map(|(slot, _)| {
            GridIndex::new((slot % self.width) as i32, (slot / self.width) as i32)
        })
    }

    /// Fixed-width text table of costs.
    ///
    /// One line per grid row, top row (highest y) first, `.` for slots
    /// without a cost.
    pub fn render(&self) -> String {
        let cell_width = self
            .max_cost()
            .map(|c| c.to_string().len())
            .unwrap_or(1)
            .max(1);

        let mut out = String::new();
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                if x > 0 {
                    out.push(' ');
                }
                match self.costs[y * self.width + x] {
                    Some(cost) => {
                        let _ = write!(out, "{:>w$}", cost, w = cell_width);
                    }
                    None => {
                        let _ = write!(out, "{:>w$}", ".", w = cell_width);
                    }
                }
            }
            out.push('\n');
        }
        out
    }
}
