//! The color ramp: sparse control points and their cached lookup table.
//!
//! Mutations only touch the control point map and mark the table stale.
//! The 256-entry table is rebuilt on the next read.

use std::collections::BTreeMap;

use tracing::debug;

use crate::color::{DataValue, Rgba};
use crate::interpolation;
use crate::{BUFFER_LEN, CHANNELS};

/// A 1-D transfer function over data values `[0, 255]`.
#[derive(Debug, Clone)]
pub struct ColorRamp {
    /// Control points ordered by key
    points: BTreeMap<u8, Rgba>,
    /// Dense RGBA lookup table, `BUFFER_LEN` bytes
    buffer: Vec<u8>,
    /// Whether `buffer` lags behind `points`
    dirty: bool,
}

impl ColorRamp {
    /// Create an empty ramp
    pub fn new() -> Self {
        Self {
            points: BTreeMap::new(),
            buffer: vec![0; BUFFER_LEN],
            dirty: true,
        }
    }

    /// Create a ramp from `(value, color)` pairs, applied in order
    pub fn from_points<V, I>(points: I) -> Self
    where
        V: DataValue,
        I: IntoIterator<Item = (V, Rgba)>,
    {
        let mut ramp = Self::new();
        for (value, color) in points {
            ramp.add(value, color);
        }
        ramp
    }

    /// Insert or overwrite the control point at `value`.
    ///
    /// Integer values are keys; float values are normalized and scaled by
    /// 255. Both the key and the color channels are clamped.
    pub fn add<V: DataValue>(&mut self, value: V, color: Rgba) {
        self.points.insert(value.to_key(), color.clamped());
        self.dirty = true;
    }

    /// Remove the control point at `value`, returning its color if present
    pub fn remove<V: DataValue>(&mut self, value: V) -> Option<Rgba> {
        self.dirty = true;
        self.points.remove(&value.to_key())
    }

    /// Drop every control point and zero the lookup table
    pub fn reset(&mut self) {
        self.points.clear();
        self.buffer.clear();
        self.buffer.resize(BUFFER_LEN, 0);
        self.dirty = true;
    }

    /// The lookup table, rebuilt first if any control point changed
    pub fn get_buffer(&mut self) -> &[u8] {
        if self.dirty {
            interpolation::rebuild_into(&mut self.buffer, &self.points);
            self.dirty = false;
            debug!(
                points = self.points.len(),
                first_key = ?self.points.keys().next(),
                last_key = ?self.points.keys().next_back(),
                "Rebuilt color ramp"
            );
        }
        &self.buffer
    }

    /// The quantized table entry for `value`
    pub fn color_at<V: DataValue>(&mut self, value: V) -> [u8; 4] {
        let offset = usize::from(value.to_key()) * CHANNELS;
        let buffer = self.get_buffer();
        [
            buffer[offset],
            buffer[offset + 1],
            buffer[offset + 2],
            buffer[offset + 3],
        ]
    }

    /// The control point color stored at `value`, if any
    pub fn get<V: DataValue>(&self, value: V) -> Option<Rgba> {
        self.points.get(&value.to_key()).copied()
    }

    /// Control points in ascending key order
    pub fn control_points(&self) -> impl Iterator<Item = (u8, Rgba)> + '_ {
        self.points.iter().map(|(&key, &color)| (key, color))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the next `get_buffer` call will rebuild the table
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl Default for ColorRamp {
    fn default() -> Self {
        Self::new()
    }
}
