//! # tframp
//!
//! A 1-D transfer function color ramp for scientific visualization.
//!
//! A [`ColorRamp`] holds a sparse set of control points keyed by a data value
//! in `[0, 255]` and expands them on demand into a dense 256-entry RGBA lookup
//! table. The table is handed to a [`RampRenderer`], which draws it into a
//! viewport the way a textured full-screen quad would.
//!
//! ## Architecture
//!
//! - **Ramp**: control point store with a lazily rebuilt lookup table
//! - **Interpolation**: piecewise-linear fill between consecutive control points
//! - **Colormaps**: named presets sampled from `colorgrad` gradients
//! - **Render**: the renderer seam plus a CPU implementation backed by `image`

pub mod color;
pub mod colormaps;
pub mod config;
pub mod error;
pub mod interpolation;
pub mod logging;
pub mod ramp;
pub mod render;

pub use color::{DataValue, Rgba};
pub use colormaps::{get_preset, preset_names, preset_ramp, Opacity};
pub use config::Config;
pub use error::{RampError, Result};
pub use logging::{
    generate_run_id, init_tracing, log_error, log_ramp_summary, log_stage, log_write, Stage,
};
pub use ramp::ColorRamp;
pub use render::{ImageRenderer, OutputFormat, RampRenderer, Viewport};

/// Number of entries in the lookup table
pub const TABLE_SIZE: usize = 256;

/// Bytes per lookup table entry (RGBA)
pub const CHANNELS: usize = 4;

/// Length in bytes of the lookup table buffer
pub const BUFFER_LEN: usize = TABLE_SIZE * CHANNELS;

/// Largest control point key
pub const MAX_KEY: u8 = 255;
