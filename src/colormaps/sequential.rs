//! Sequential gradients (low to high progression).

use colorgrad::Gradient;

/// Names of the sequential presets
pub const NAMES: &[&str] = &[
    "viridis", "plasma", "inferno", "magma", "cividis", "turbo", "greys",
];

/// Look up a sequential gradient by lowercase name
pub fn gradient(name: &str) -> Option<Gradient> {
    let gradient = match name {
        "viridis" => colorgrad::viridis(),
        "plasma" => colorgrad::plasma(),
        "inferno" => colorgrad::inferno(),
        "magma" => colorgrad::magma(),
        "cividis" => colorgrad::cividis(),
        "turbo" => colorgrad::turbo(),
        "greys" => colorgrad::greys(),
        _ => return None,
    };
    Some(gradient)
}
