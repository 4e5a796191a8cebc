//! tframp - render a 1-D transfer function color ramp
//!
//! Builds a ramp from a preset and/or control points, draws the lookup
//! table across an image and writes it out.

use anyhow::Context;
use std::path::Path;
use std::time::Instant;
use tracing::info;

use tframp::{
    generate_run_id, init_tracing, log_error, log_ramp_summary, log_stage, log_write, Config,
    ImageRenderer, RampError, RampRenderer, Stage,
};

fn main() -> anyhow::Result<()> {
    let (config, paths) = Config::load().context("failed to load configuration")?;

    init_tracing(&config.log_level);
    let run_id = generate_run_id();
    info!(run_id = %run_id, "Starting tframp v{}", env!("CARGO_PKG_VERSION"));

    let checked = config.validate().and_then(|_| config.output_format());
    let format = checked.map_err(|e| {
        log_error(&run_id, Stage::Config, &e);
        e
    })?;

    let mut ramp = log_stage(&run_id, Stage::BuildRamp, || config.build_ramp())?;
    log_ramp_summary(&run_id, &ramp);
    let buffer = ramp.get_buffer();

    let mut renderer = ImageRenderer::new(config.output.width, config.output.height)?;
    let viewport = renderer.full_viewport();
    log_stage(&run_id, Stage::Draw, || renderer.draw(buffer, viewport)).map_err(|e| {
        log_error(&run_id, Stage::Draw, &e);
        e
    })?;

    let image = renderer.encode(format)?;
    write_output(&run_id, Stage::WriteImage, &paths.image, &image)
        .with_context(|| format!("failed to write {}", paths.image.display()))?;

    if let Some(raw) = &paths.raw {
        write_output(&run_id, Stage::WriteTable, raw, buffer)
            .with_context(|| format!("failed to write lookup table to {}", raw.display()))?;
    }

    info!(
        run_id = %run_id,
        format = %format,
        width = config.output.width,
        height = config.output.height,
        "Ramp written"
    );

    Ok(())
}

/// Write `bytes` to `path`, logging the outcome under `stage`
fn write_output(run_id: &str, stage: Stage, path: &Path, bytes: &[u8]) -> Result<(), RampError> {
    let start = Instant::now();
    let result = std::fs::write(path, bytes).map_err(RampError::from);

    log_write(run_id, stage, path, start, result.as_ref().ok().map(|_| bytes.len()));
    if let Err(e) = &result {
        log_error(run_id, stage, e);
    }
    result
}
