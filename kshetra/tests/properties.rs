//! Structural properties of plans over random convex areas.

mod common;

use std::collections::HashSet;

use common::{bounding_box_cell_bound, hop_distances, random_convex_case};
use kshetra::potential::BASE_COST;
use kshetra::{CellGrid, CellId, FloodFill, SurveyPlanner, Wavefront};

const SEEDS: u64 = 64;

// ============================================================================
// Decomposition
// ============================================================================

#[test]
fn test_decomposition_indices_distinct() {
    for seed in 0..SEEDS {
        let case = random_convex_case(seed);
        let result = FloodFill::with_defaults(&case.perimeter, case.size)
            .decompose()
            .unwrap();
        let unique: HashSet<_> = result.cells().iter().map(|c| c.index).collect();
        assert_eq!(unique.len(), result.len(), "seed {}", seed);
    }
}

#[test]
fn test_decomposition_count_bounded_by_bbox() {
    for seed in 0..SEEDS {
        let case = random_convex_case(seed);
        let result = FloodFill::with_defaults(&case.perimeter, case.size)
            .decompose()
            .unwrap();
        let bound = bounding_box_cell_bound(&case.perimeter, case.size);
        assert!(
            result.len() <= bound,
            "seed {}: {} cells > bound {}",
            seed,
            result.len(),
            bound
        );
    }
}

#[test]
fn test_decomposition_is_connected() {
    for seed in 0..SEEDS {
        let case = random_convex_case(seed);
        let mut cells = FloodFill::with_defaults(&case.perimeter, case.size)
            .decompose()
            .unwrap()
            .into_cells();
        let grid = CellGrid::normalize(&mut cells);
        let hops = hop_distances(&grid, cells[0].index);
        assert_eq!(hops.len(), cells.len(), "seed {}", seed);
    }
}

// ============================================================================
// Potential Field
// ============================================================================

#[test]
fn test_costs_match_hop_distance() {
    for seed in 0..SEEDS {
        let case = random_convex_case(seed);
        let mut cells = FloodFill::with_defaults(&case.perimeter, case.size)
            .decompose()
            .unwrap()
            .into_cells();
        let grid = CellGrid::normalize(&mut cells);
        let field = Wavefront::with_defaults(&grid)
            .build(&mut cells, case.start)
            .unwrap();

        let hops = hop_distances(&grid, field.goal());
        for (index, _) in grid.iter_occupied() {
            let cost = field.get(index).unwrap();
            assert!(cost >= BASE_COST);
            let expected = match hops[&index] {
                0 => BASE_COST,
                h => h + 2,
            };
            assert_eq!(cost, expected, "seed {} at {:?}", seed, index);
        }
    }
}

#[test]
fn test_costs_change_by_at_most_one_between_neighbours() {
    for seed in 0..SEEDS {
        let case = random_convex_case(seed);
        let mut cells = FloodFill::with_defaults(&case.perimeter, case.size)
            .decompose()
            .unwrap()
            .into_cells();
        let grid = CellGrid::normalize(&mut cells);
        let field = Wavefront::with_defaults(&grid)
            .build(&mut cells, case.start)
            .unwrap();

        for (index, _) in grid.iter_occupied() {
            let cost = field.get(index).unwrap();
            let mut has_lower = false;
            for n in grid.occupied_neighbors(index) {
                let other = field.get(n).unwrap();
                assert!(cost.abs_diff(other) <= 1, "seed {} at {:?}", seed, index);
                has_lower |= other + 1 == cost;
            }
            if cost > BASE_COST {
                assert!(has_lower, "seed {}: no descent from {:?}", seed, index);
            }
        }
    }
}

// ============================================================================
// Coverage
// ============================================================================

#[test]
fn test_path_is_bijection() {
    for seed in 0..SEEDS {
        let case = random_convex_case(seed);
        let plan = SurveyPlanner::default()
            .plan(&case.perimeter, case.size, case.start)
            .unwrap();

        assert_eq!(plan.len(), plan.cells().len(), "seed {}", seed);
        let unique: HashSet<CellId> = plan.path().iter().copied().collect();
        assert_eq!(unique.len(), plan.len(), "seed {}", seed);
        assert!(unique.iter().all(|id| id.index() < plan.cells().len()));
    }
}

#[test]
fn test_path_starts_at_max_cost() {
    for seed in 0..SEEDS {
        let case = random_convex_case(seed);
        let plan = SurveyPlanner::default()
            .plan(&case.perimeter, case.size, case.start)
            .unwrap();
        let first = plan.path_cells().next().unwrap();
        assert_eq!(first.cost, plan.field().max_cost(), "seed {}", seed);
    }
}

#[test]
fn test_discontinuities_match_adjacency() {
    for seed in 0..SEEDS {
        let case = random_convex_case(seed);
        let plan = SurveyPlanner::default()
            .plan(&case.perimeter, case.size, case.start)
            .unwrap();
        let indices = plan.path_indices();
        let gaps = plan.discontinuities();
        for i in 1..indices.len() {
            let adjacent = indices[i - 1].is_adjacent(&indices[i]);
            assert_eq!(!adjacent, gaps.contains(&i), "seed {} step {}", seed, i);
        }
        // Every jump needs at least one dead end first
        assert!(gaps.len() <= plan.stats().backtracks);
    }
}

#[test]
fn test_deterministic() {
    for seed in 0..16 {
        let case = random_convex_case(seed);
        let planner = SurveyPlanner::default();
        let a = planner.plan(&case.perimeter, case.size, case.start).unwrap();
        let b = planner.plan(&case.perimeter, case.size, case.start).unwrap();
        assert_eq!(a.path(), b.path());
        assert_eq!(a.cells(), b.cells());
        assert_eq!(a.stats(), b.stats());
    }
}
