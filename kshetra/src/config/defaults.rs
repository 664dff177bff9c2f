//! Default value functions for serde deserialization.

// Raspberry Pi camera module v2
pub fn fov_horizontal_deg() -> f64 {
    62.2
}

pub fn fov_vertical_deg() -> f64 {
    48.8
}

pub fn altitude_m() -> f64 {
    10.0
}

pub fn max_growth_rounds() -> usize {
    100_000
}

pub fn max_cells() -> usize {
    1_000_000
}

pub fn max_wavefront_rounds() -> usize {
    1_000_000
}
