//! Approximate cellular decomposition by flood fill.

use std::collections::HashMap;

use log::{debug, trace, warn};

use crate::core::{Cell, CellId, CellSize, GridIndex, NEIGHBOR_OFFSETS, Perimeter, Point2D};
use crate::error::{GrowthStage, PlanError, Result};
use crate::geometry::polygon_overlaps_cell;

use super::config::FloodFillConfig;

/// Output of the flood fill.
///
/// Cells are stored in creation order, which is also the order in which the
/// fill settled them. A cell's position in this list is its [`CellId`].
#[derive(Clone, Debug)]
pub struct Decomposition {
    cells: Vec<Cell>,
    rounds: usize,
}

impl Decomposition {
    /// Settled cells in creation order
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Take the cell arena
    #[inline]
    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }

    /// Number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if no cells were produced (never the case for a valid fill)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Growth rounds run (0 when the seed alone touched the perimeter)
    #[inline]
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Cells whose boundary crosses the perimeter
    pub fn border_count(&self) -> usize {
        self.cells.iter().filter(|c| c.border).count()
    }
}

/// Flood-fill decomposer.
///
/// Grows a 4-connected grid of fixed-size cells outward from a seed at the
/// perimeter's vertex mean:
///
/// ```text
///   round 0        round 1          round 2
///                                   . b .
///                    b              b i b
///      s           i s i          b i s i b
///                    b              b i b
///                                   . b .
///   s = seed, i = interior, b = border, . = pruned
/// ```
///
/// Children of interior cells are always kept. Children of border cells are
/// kept only if they touch the perimeter too, which stops growth once it has
/// crossed the boundary.
pub struct FloodFill<'a> {
    perimeter: &'a Perimeter,
    size: CellSize,
    config: FloodFillConfig,
}

impl<'a> FloodFill<'a> {
    /// Create a decomposer
    pub fn new(perimeter: &'a Perimeter, size: CellSize, config: FloodFillConfig) -> Self {
        Self {
            perimeter,
            size,
            config,
        }
    }

    /// Create with default ceilings
    pub fn with_defaults(perimeter: &'a Perimeter, size: CellSize) -> Self {
        Self::new(perimeter, size, FloodFillConfig::default())
    }

    /// Run the decomposition.
    pub fn decompose(&self) -> Result<Decomposition> {
        if !self.size.is_valid() {
            return Err(PlanError::InvalidInput(format!(
                "cell size must be positive, got {} x {}",
                self.size.width, self.size.height
            )));
        }

        let seed_center = self.perimeter.vertex_mean();
        let mut seed = Cell::new(seed_center, self.size, GridIndex::ORIGIN);
        seed.border = polygon_overlaps_cell(self.perimeter, &seed);

        let mut cells = vec![seed];
        let mut occupied: HashMap<GridIndex, CellId> = HashMap::new();
        occupied.insert(GridIndex::ORIGIN, CellId(0));

        if cells[0].border {
            debug!(
                "[FloodFill] Seed at ({:.6},{:.6}) touches perimeter, single cell",
                seed_center.x, seed_center.y
            );
            return Ok(Decomposition { cells, rounds: 0 });
        }

        let mut frontier = vec![CellId(0)];
        let mut rounds = 0;

        while !frontier.is_empty() {
            rounds += 1;
            if rounds > self.config.max_rounds {
                warn!(
                    "[FloodFill] Exceeded {} rounds with {} cells",
                    self.config.max_rounds,
                    cells.len()
                );
                return Err(PlanError::UnboundedGrowth {
                    stage: GrowthStage::FloodFillRounds,
                    limit: self.config.max_rounds,
                });
            }

            let mut next = Vec::new();
            for &parent_id in &frontier {
                let parent = &cells[parent_id.index()];
                let (parent_center, parent_index, parent_border) =
                    (parent.center(), parent.index, parent.border);

                for (dx, dy) in NEIGHBOR_OFFSETS {
                    let index = parent_index.offset(dx, dy);
                    if occupied.contains_key(&index) {
                        continue;
                    }

                    let center = parent_center
                        + Point2D::new(dx as f64 * self.size.width, dy as f64 * self.size.height);
                    let mut child = Cell::new(center, self.size, index);
                    let overlaps = polygon_overlaps_cell(self.perimeter, &child);

                    // Growth stops at the first cell past the boundary
                    if parent_border && !overlaps {
                        continue;
                    }

                    child.border = overlaps;
                    let id = CellId(cells.len());
                    cells.push(child);
                    occupied.insert(index, id);
                    next.push(id);

                    if cells.len() > self.config.max_cells {
                        warn!(
                            "[FloodFill] Exceeded {} cells after {} rounds",
                            self.config.max_cells, rounds
                        );
                        return Err(PlanError::UnboundedGrowth {
                            stage: GrowthStage::FloodFillCells,
                            limit: self.config.max_cells,
                        });
                    }
                }
            }

            trace!(
                "[FloodFill] Round {}: {} new cells, {} total",
                rounds,
                next.len(),
                cells.len()
            );
            frontier = next;
        }

        let decomposition = Decomposition { cells, rounds };
        debug!(
            "[FloodFill] Done: {} cells ({} border) in {} rounds",
            decomposition.len(),
            decomposition.border_count(),
            rounds
        );
        Ok(decomposition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn rectangle() -> Perimeter {
        Perimeter::from_lat_lon(&[(0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (0.0, 2.0)]).unwrap()
    }

    #[test]
    fn test_rectangle_decomposition() {
        let result = FloodFill::with_defaults(&rectangle(), CellSize::new(1.0, 1.0))
            .decompose()
            .unwrap();

        // Seed at (2,1); cells on integer centres from (0,0) to (4,2)
        assert_eq!(result.len(), 15);
        assert_eq!(result.rounds(), 4);

        let centers: HashSet<(i64, i64)> = result
            .cells()
            .iter()
            .map(|c| (c.center().x as i64, c.center().y as i64))
            .collect();
        for x in 0..=4 {
            for y in 0..=2 {
                assert!(centers.contains(&(x, y)), "missing ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_rectangle_border_flags() {
        let result = FloodFill::with_defaults(&rectangle(), CellSize::new(1.0, 1.0))
            .decompose()
            .unwrap();

        // Only the three centre-row cells (1,1), (2,1), (3,1) stay clear of edges
        let interior: Vec<_> = result.cells().iter().filter(|c| !c.border).collect();
        assert_eq!(interior.len(), 3);
        for cell in interior {
            assert_eq!(cell.center().y, 1.0);
        }
        assert_eq!(result.border_count(), 12);
    }

    #[test]
    fn test_seed_is_first_and_at_origin() {
        let result = FloodFill::with_defaults(&rectangle(), CellSize::new(1.0, 1.0))
            .decompose()
            .unwrap();
        let seed = &result.cells()[0];
        assert_eq!(seed.index, GridIndex::ORIGIN);
        assert_eq!(seed.center(), Point2D::new(2.0, 1.0));
    }

    #[test]
    fn test_indices_unique() {
        let result = FloodFill::with_defaults(&rectangle(), CellSize::new(0.5, 0.25))
            .decompose()
            .unwrap();
        let unique: HashSet<GridIndex> = result.cells().iter().map(|c| c.index).collect();
        assert_eq!(unique.len(), result.len());
    }

    #[test]
    fn test_seed_touching_perimeter_stops_immediately() {
        // Thin strip: the unit seed at (2,1) straddles both long edges
        let strip = Perimeter::from_lat_lon(&[(0.6, 0.6), (3.4, 0.6), (3.4, 1.4), (0.6, 1.4)])
            .unwrap();
        let result = FloodFill::with_defaults(&strip, CellSize::new(1.0, 1.0))
            .decompose()
            .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.rounds(), 0);
        assert!(result.cells()[0].border);
    }

    #[test]
    fn test_invalid_cell_size() {
        let err = FloodFill::with_defaults(&rectangle(), CellSize::new(0.0, 1.0))
            .decompose()
            .unwrap_err();
        assert!(matches!(err, PlanError::InvalidInput(_)));
    }

    #[test]
    fn test_round_ceiling() {
        let config = FloodFillConfig::default().with_max_rounds(2);
        let err = FloodFill::new(&rectangle(), CellSize::new(1.0, 1.0), config)
            .decompose()
            .unwrap_err();
        assert_eq!(
            err,
            PlanError::UnboundedGrowth {
                stage: GrowthStage::FloodFillRounds,
                limit: 2
            }
        );
    }

    #[test]
    fn test_cell_ceiling() {
        let config = FloodFillConfig::default().with_max_cells(10);
        let err = FloodFill::new(&rectangle(), CellSize::new(1.0, 1.0), config)
            .decompose()
            .unwrap_err();
        assert_eq!(
            err,
            PlanError::UnboundedGrowth {
                stage: GrowthStage::FloodFillCells,
                limit: 10
            }
        );
    }
}
