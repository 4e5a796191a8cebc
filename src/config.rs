//! Configuration management for tframp.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::color::{DataValue, Rgba};
use crate::colormaps::{self, Opacity};
use crate::error::{RampError, Result};
use crate::ramp::ColorRamp;
use crate::render::OutputFormat;

/// Command-line arguments for tframp
#[derive(Parser, Debug)]
#[command(name = "tframp")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path of the rendered ramp image
    pub output: PathBuf,

    /// Path to JSON configuration file
    #[arg(short, long, env = "TFRAMP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Preset to seed the ramp with (viridis, magma, rdbu, ...)
    #[arg(short, long, env = "TFRAMP_PRESET")]
    pub preset: Option<String>,

    /// Preset opacity mode (constant, linear)
    #[arg(long, env = "TFRAMP_OPACITY")]
    pub opacity: Option<String>,

    /// Control point as VALUE:R,G,B[,A]; integer VALUE is a key, decimal VALUE is normalized
    #[arg(short = 'P', long = "point", value_parser = parse_point_arg)]
    pub points: Vec<ControlPointConfig>,

    /// Output image width in pixels
    #[arg(long, env = "TFRAMP_WIDTH")]
    pub width: Option<u32>,

    /// Output image height in pixels
    #[arg(long, env = "TFRAMP_HEIGHT")]
    pub height: Option<u32>,

    /// Output image format (png, jpeg)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Also write the raw 1024-byte lookup table to this path
    #[arg(long)]
    pub raw: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "TFRAMP_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Where the CLI writes its results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub image: PathBuf,
    pub raw: Option<PathBuf>,
}

/// Control point position: an integer key or a normalized float
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointValue {
    Key(i64),
    Normalized(f64),
}

impl DataValue for PointValue {
    fn to_key(self) -> u8 {
        match self {
            PointValue::Key(key) => key.to_key(),
            PointValue::Normalized(value) => value.to_key(),
        }
    }
}

/// A control point as written in config files and on the command line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPointConfig {
    pub value: PointValue,
    pub color: [f32; 4],
}

/// Image output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Image width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Image height in pixels
    #[serde(default = "default_height")]
    pub height: u32,

    /// Encoded format
    #[serde(default = "default_format")]
    pub format: String,
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Preset applied before the explicit control points
    #[serde(default)]
    pub preset: Option<String>,

    /// Opacity mode for the preset
    #[serde(default)]
    pub opacity: Opacity,

    /// Explicit control points, applied in order
    #[serde(default)]
    pub control_points: Vec<ControlPointConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<(Self, OutputPaths)> {
        Self::from_args(Args::parse())
    }

    /// Build the configuration from already parsed arguments
    pub fn from_args(args: Args) -> Result<(Self, OutputPaths)> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments
        if let Some(preset) = args.preset {
            config.preset = Some(preset);
        }
        if let Some(opacity) = &args.opacity {
            config.opacity = opacity.parse().map_err(|e: RampError| RampError::Config {
                message: e.to_string(),
            })?;
        }
        // Command-line points land after file points, so they win on shared keys
        config.control_points.extend(args.points);
        if let Some(width) = args.width {
            config.output.width = width;
        }
        if let Some(height) = args.height {
            config.output.height = height;
        }
        if let Some(format) = args.format {
            config.output.format = format;
        }
        if let Some(log_level) = args.log_level {
            config.log_level = log_level;
        }

        let paths = OutputPaths {
            image: args.output,
            raw: args.raw,
        };

        Ok((config, paths))
    }

    /// Load configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.preset.is_some() {
            self.preset = other.preset;
        }
        self.opacity = other.opacity;
        self.control_points = other.control_points;
        self.output = other.output;
        self.log_level = other.log_level;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.output.width == 0 || self.output.height == 0 {
            return Err(RampError::Config {
                message: format!(
                    "Output size must be non-zero, got {}x{}",
                    self.output.width, self.output.height
                ),
            });
        }

        self.output_format()?;

        if let Some(preset) = &self.preset {
            colormaps::get_preset(preset).map_err(|_| RampError::Config {
                message: format!(
                    "Unknown preset: {}. Must be one of: {}",
                    preset,
                    colormaps::preset_names().collect::<Vec<_>>().join(", ")
                ),
            })?;
        }

        // Validate log level
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(RampError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        Ok(())
    }

    /// The configured output format
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.output
            .format
            .parse()
            .map_err(|e: RampError| RampError::Config {
                message: e.to_string(),
            })
    }

    /// Build the ramp: preset first, then explicit control points
    pub fn build_ramp(&self) -> Result<ColorRamp> {
        let mut ramp = match &self.preset {
            Some(name) => colormaps::preset_ramp(name, self.opacity)?,
            None => ColorRamp::new(),
        };
        for point in &self.control_points {
            ramp.add(point.value, Rgba::from(point.color));
        }
        Ok(ramp)
    }
}

/// Parse a `VALUE:R,G,B[,A]` control point argument
pub fn parse_point_arg(s: &str) -> std::result::Result<ControlPointConfig, String> {
    let (value, color) = s
        .split_once(':')
        .ok_or_else(|| format!("expected VALUE:R,G,B[,A], got '{}'", s))?;

    let value = value.trim();
    let value = if value.contains(|c: char| matches!(c, '.' | 'e' | 'E')) {
        PointValue::Normalized(
            value
                .parse()
                .map_err(|e| format!("invalid value '{}': {}", value, e))?,
        )
    } else {
        PointValue::Key(
            value
                .parse()
                .map_err(|e| format!("invalid value '{}': {}", value, e))?,
        )
    };

    let channels = color
        .split(',')
        .map(|c| {
            c.trim()
                .parse::<f32>()
                .map_err(|e| format!("invalid channel '{}': {}", c, e))
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let color = match channels.as_slice() {
        [r, g, b] => [*r, *g, *b, 1.0],
        [r, g, b, a] => [*r, *g, *b, *a],
        _ => {
            return Err(format!(
                "expected 3 or 4 color channels, got {}",
                channels.len()
            ))
        }
    };

    Ok(ControlPointConfig { value, color })
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preset: None,
            opacity: Opacity::default(),
            control_points: Vec::new(),
            output: OutputConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            format: default_format(),
        }
    }
}

// Default value functions for serde
fn default_width() -> u32 {
    512
}

fn default_height() -> u32 {
    64
}

fn default_format() -> String {
    "png".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
