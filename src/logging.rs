//! Logging for the tframp pipeline.
//!
//! Every CLI run gets a run id; each pipeline stage (build, draw, write)
//! logs under that id with its stage name, so one run's events can be
//! filtered out of a shared log.

use std::fmt;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::error::RampError;
use crate::ramp::ColorRamp;

/// A step of the render pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Config,
    BuildRamp,
    Draw,
    WriteImage,
    WriteTable,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Config => "config",
            Stage::BuildRamp => "build_ramp",
            Stage::Draw => "draw",
            Stage::WriteImage => "write_image",
            Stage::WriteTable => "write_table",
        };
        f.write_str(name)
    }
}

/// Initialize the tracing subscriber; `RUST_LOG` overrides `log_level`
pub fn init_tracing(log_level: &str) {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

/// Generate the id tagging one run's events
pub fn generate_run_id() -> String {
    Uuid::new_v4().to_string()
}

/// Run a pipeline stage, logging its duration
pub fn log_stage<F, R>(run_id: &str, stage: Stage, f: F) -> R
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    debug!(run_id = run_id, stage = %stage, "Stage started");

    let result = f();

    debug!(
        run_id = run_id,
        stage = %stage,
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Stage finished"
    );
    result
}

/// Log the outcome of writing an output file.
///
/// `written` is the byte count on success, `None` when the write failed.
pub fn log_write(
    run_id: &str,
    stage: Stage,
    path: &Path,
    start: Instant,
    written: Option<usize>,
) {
    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;
    match written {
        Some(bytes) => info!(
            run_id = run_id,
            stage = %stage,
            path = %path.display(),
            bytes = bytes,
            duration_ms = duration_ms,
            "Output written"
        ),
        None => warn!(
            run_id = run_id,
            stage = %stage,
            path = %path.display(),
            duration_ms = duration_ms,
            "Output not written"
        ),
    }
}

/// Log the control points a ramp was built from
pub fn log_ramp_summary(run_id: &str, ramp: &ColorRamp) {
    let keys: Vec<String> = ramp.control_points().map(|(k, _)| k.to_string()).collect();
    info!(
        run_id = run_id,
        points = ramp.len(),
        keys = %keys.join(", "),
        stale_table = ramp.is_dirty(),
        "Color ramp ready"
    );
}

/// Log a failed stage
pub fn log_error(run_id: &str, stage: Stage, error: &RampError) {
    error!(
        run_id = run_id,
        stage = %stage,
        error = %error,
        "Stage failed"
    );
}
