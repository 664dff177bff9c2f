//! Test utilities for Kshetra planning.
//!
//! Helpers for building perimeters and checking plan structure.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::f64::consts::TAU;

use kshetra::{CellGrid, CellSize, GridIndex, Perimeter, Point2D};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Axis-aligned rectangle `[(0,0), (w,0), (w,h), (0,h)]`.
pub fn rectangle(width: f64, height: f64) -> Perimeter {
    Perimeter::from_lat_lon(&[(0.0, 0.0), (width, 0.0), (width, height), (0.0, height)])
        .expect("rectangle has four finite vertices")
}

/// Payson Park, Portland ME, as `(lat, lon)` pairs.
pub const PAYSON_PARK: [(f64, f64); 17] = [
    (43.679882271987395, -70.2693889874136),
    (43.68162231019378, -70.27141117491476),
    (43.68288076964761, -70.2725732966138),
    (43.68418710100531, -70.27068259077888),
    (43.68382568551194, -70.27015271143725),
    (43.684021633941214, -70.26986970769798),
    (43.68328573541723, -70.26871360731622),
    (43.6834468500671, -70.26843662493309),
    (43.68068606893511, -70.26390254378708),
    (43.68106927643034, -70.263511155637),
    (43.680760097846516, -70.26292106273382),
    (43.67989351836035, -70.26378813802968),
    (43.679122731145114, -70.26230086305941),
    (43.67906176450213, -70.26235505526479),
    (43.67959304316595, -70.2647214482337),
    (43.679366597097584, -70.26614850964243),
    (43.67896160488272, -70.26780438258504),
];

/// A random convex survey case.
pub struct RandomCase {
    pub perimeter: Perimeter,
    pub size: CellSize,
    pub start: Point2D,
}

/// Convex polygon with 3..=12 vertices on a random ellipse, plus a cell size
/// and a start position near it.
pub fn random_convex_case(seed: u64) -> RandomCase {
    let mut rng = StdRng::seed_from_u64(seed);

    let n = rng.random_range(3..=12);
    let cx = rng.random_range(-50.0..50.0);
    let cy = rng.random_range(-50.0..50.0);
    let rx = rng.random_range(2.0..8.0);
    let ry = rng.random_range(2.0..8.0);

    let mut angles: Vec<f64> = (0..n).map(|_| rng.random_range(0.0..TAU)).collect();
    angles.sort_by(|a, b| a.total_cmp(b));

    let vertices = angles
        .iter()
        .map(|a| Point2D::new(cx + rx * a.cos(), cy + ry * a.sin()))
        .collect();

    RandomCase {
        perimeter: Perimeter::new(vertices).expect("ellipse vertices are finite"),
        size: CellSize::new(rng.random_range(0.4..1.5), rng.random_range(0.4..1.5)),
        start: Point2D::new(
            cx + rng.random_range(-10.0..10.0),
            cy + rng.random_range(-10.0..10.0),
        ),
    }
}

/// Breadth-first hop count from `from` to every reachable occupied slot.
pub fn hop_distances(grid: &CellGrid, from: GridIndex) -> HashMap<GridIndex, u32> {
    let mut hops = HashMap::new();
    let mut queue = VecDeque::new();
    hops.insert(from, 0);
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        let next = hops[&current] + 1;
        for n in grid.occupied_neighbors(current) {
            if !hops.contains_key(&n) {
                hops.insert(n, next);
                queue.push_back(n);
            }
        }
    }
    hops
}

/// Upper bound on cells covering a perimeter's bounding box.
pub fn bounding_box_cell_bound(perimeter: &Perimeter, size: CellSize) -> usize {
    let (min, max) = perimeter.bounding_box();
    let cols = ((max.x - min.x) / size.width).ceil() as usize + 2;
    let rows = ((max.y - min.y) / size.height).ceil() as usize + 2;
    cols * rows
}
