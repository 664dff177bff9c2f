//! Depth-first coverage planner.

use std::collections::HashSet;

use log::{debug, trace, warn};

use crate::core::{CellId, GridIndex};
use crate::error::{PlanError, Result};
use crate::grid::CellGrid;
use crate::potential::PotentialField;

/// Visiting order produced by [`CoveragePlanner`].
#[derive(Clone, Debug, PartialEq)]
pub struct CoverageOrder {
    /// Grid positions in visitation order
    pub indices: Vec<GridIndex>,
    /// Cells in visitation order (parallel to `indices`)
    pub cells: Vec<CellId>,
    /// Number of dead ends that forced a pop
    pub backtracks: usize,
}

impl CoverageOrder {
    /// Number of cells visited
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// No cells visited
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Positions `i` where entry `i` is not grid-adjacent to entry `i - 1`.
    ///
    /// The order is a depth-first pre-order, so every backtrack can leave a
    /// jump between consecutive entries.
    pub fn discontinuities(&self) -> Vec<usize> {
        self.indices
            .windows(2)
            .enumerate()
            .filter(|(_, w)| !w[0].is_adjacent(&w[1]))
            .map(|(i, _)| i + 1)
            .collect()
    }
}

/// Greedy descent with backtracking over a potential field.
///
/// Starts at the highest-cost cell and repeatedly steps to the unvisited
/// neighbour with the highest cost, scanning (+x, -x, -y, +y) and replacing
/// the first candidate only on a strictly greater cost. At a dead end the
/// stack is popped until a cell with an unvisited neighbour is found.
pub struct CoveragePlanner<'a> {
    grid: &'a CellGrid,
    field: &'a PotentialField,
}

impl<'a> CoveragePlanner<'a> {
    /// Create a planner
    pub fn new(grid: &'a CellGrid, field: &'a PotentialField) -> Self {
        Self { grid, field }
    }

    /// Next forward move from `current`, if any.
    fn next_move(&self, current: GridIndex, visited: &HashSet<GridIndex>) -> Option<GridIndex> {
        let mut choice: Option<(GridIndex, Option<u32>)> = None;
        for n in self.grid.occupied_neighbors(current) {
            if visited.contains(&n) {
                continue;
            }
            let cost = self.field.get(n);
            match choice {
                None => choice = Some((n, cost)),
                Some((_, best)) if cost > best => choice = Some((n, cost)),
                _ => {}
            }
        }
        choice.map(|(n, _)| n)
    }

    /// Compute the visiting order.
    pub fn plan(&self) -> Result<CoverageOrder> {
        let total = self.grid.occupied_count();
        let start = self
            .field
            .max_cost_index()
            .filter(|i| self.grid.is_occupied(*i))
            .ok_or(PlanError::PlanningFailure { visited: 0, total })?;

        debug!(
            "[Coverage] Start ({},{}) cost {:?}, {} cells",
            start.x,
            start.y,
            self.field.get(start),
            total
        );

        let mut stack = vec![start];
        let mut visited = HashSet::with_capacity(total);
        visited.insert(start);
        let mut indices = vec![start];
        let mut backtracks = 0;

        while indices.len() < total {
            let Some(&current) = stack.last() else {
                warn!(
                    "[Coverage] Stack exhausted after {} of {} cells",
                    indices.len(),
                    total
                );
                return Err(PlanError::PlanningFailure {
                    visited: indices.len(),
                    total,
                });
            };

            match self.next_move(current, &visited) {
                Some(next) => {
                    visited.insert(next);
                    stack.push(next);
                    indices.push(next);
                }
                None => {
                    trace!("[Coverage] Dead end at ({},{})", current.x, current.y);
                    stack.pop();
                    backtracks += 1;
                }
            }
        }

        let cells = indices
            .iter()
            .filter_map(|i| self.grid.get(*i))
            .collect();

        debug!(
            "[Coverage] Visited {} cells with {} backtracks",
            indices.len(),
            backtracks
        );
        Ok(CoverageOrder {
            indices,
            cells,
            backtracks,
        })
    }
}
