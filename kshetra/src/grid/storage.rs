//! Dense cell grid storage.

use crate::core::{Cell, CellId, GridIndex};

/// Dense grid of cell handles.
///
/// The grid uses a coordinate system where:
/// - (0, 0) is the minimum occupied index on each axis
/// - Slot (x, y) lives at `y * width + x` (row-major)
/// - Each slot holds at most one [`CellId`]
///
/// Built once per planning run from the flood-fill output.
#[derive(Clone, Debug)]
pub struct CellGrid {
    slots: Vec<Option<CellId>>,
    width: usize,
    height: usize,
    occupied: usize,
    /// Index subtracted from the raw flood-fill indices
    offset: GridIndex,
}

impl CellGrid {
    /// Normalize cell indices to start at (0,0) and build the dense grid.
    ///
    /// Rewrites `index` on every cell in place. Cell `i` of the slice is
    /// stored as `CellId(i)`. An empty slice yields an empty 0x0 grid.
    pub fn normalize(cells: &mut [Cell]) -> Self {
        if cells.is_empty() {
            return Self {
                slots: Vec::new(),
                width: 0,
                height: 0,
                occupied: 0,
                offset: GridIndex::ORIGIN,
            };
        }

        let (min, max) = cells.iter().fold(
            (cells[0].index, cells[0].index),
            |(min, max), c| {
                (
                    GridIndex::new(min.x.min(c.index.x), min.y.min(c.index.y)),
                    GridIndex::new(max.x.max(c.index.x), max.y.max(c.index.y)),
                )
            },
        );

        let width = (max.x - min.x + 1) as usize;
        let height = (max.y - min.y + 1) as usize;
        let mut slots = vec![None; width * height];
        let mut occupied = 0;

        for (i, cell) in cells.iter_mut().enumerate() {
            cell.index = cell.index - min;
            let slot = cell.index.y as usize * width + cell.index.x as usize;
            if slots[slot].is_none() {
                occupied += 1;
            }
            slots[slot] = Some(CellId(i));
        }

        Self {
            slots,
            width,
            height,
            occupied,
            offset: min,
        }
    }

    /// Grid width in slots
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in slots
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of occupied slots
    #[inline]
    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    /// Raw index that was mapped to (0,0)
    #[inline]
    pub fn offset(&self) -> GridIndex {
        self.offset
    }

    /// Index lies inside the grid
    #[inline]
    pub fn is_valid_index(&self, index: GridIndex) -> bool {
        index.x >= 0
            && index.y >= 0
            && (index.x as usize) < self.width
            && (index.y as usize) < self.height
    }

    /// Row-major slot position, if the index is inside the grid
    #[inline]
    pub fn slot(&self, index: GridIndex) -> Option<usize> {
        if self.is_valid_index(index) {
            Some(index.y as usize * self.width + index.x as usize)
        } else {
            None
        }
    }

    /// Index of a row-major slot position
    #[inline]
    pub fn index_of_slot(&self, slot: usize) -> GridIndex {
        GridIndex::new((slot % self.width) as i32, (slot / self.width) as i32)
    }

    /// Cell at the index, if occupied
    #[inline]
    pub fn get(&self, index: GridIndex) -> Option<CellId> {
        self.slot(index).and_then(|s| self.slots[s])
    }

    /// Slot is occupied
    #[inline]
    pub fn is_occupied(&self, index: GridIndex) -> bool {
        self.get(index).is_some()
    }

    /// Occupied slots in row-major order (y outer, x inner)
    pub fn iter_occupied(&self) -> impl Iterator<Item = (GridIndex, CellId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, id)| id.map(|id| (self.index_of_slot(slot), id)))
    }

    /// Occupied grid neighbours in scan order (+x, -x, -y, +y)
    pub fn occupied_neighbors(&self, index: GridIndex) -> impl Iterator<Item = GridIndex> + '_ {
        index
            .neighbors_4()
            .into_iter()
            .filter(|n| self.is_occupied(*n))
    }
}
