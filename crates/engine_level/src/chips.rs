//! Layered chip grid storage.
//!
//! A level map is a stack of 2D layers (background, terrain, foreground),
//! each a `width × height` grid of chip bytes. [`ChipGrid`] stores all layers
//! in one flat buffer with computed offsets.

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`ChipGrid`] from raw data.
#[derive(Debug, thiserror::Error)]
pub enum ChipGridError {
    /// The supplied buffer does not match `layers * width * height`.
    #[error("chip data length {actual} does not match {layers}x{width}x{height} = {expected}")]
    LengthMismatch {
        /// Declared layer count.
        layers: usize,
        /// Declared width in chips.
        width: usize,
        /// Declared height in chips.
        height: usize,
        /// Expected buffer length.
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },
}

/// A 3-dimensional grid of map chip bytes: `layers × width × height`.
///
/// Chips are addressed as `(layer, x, y)`. Out-of-range coordinates are
/// reported rather than clamped, so callers can distinguish "empty chip"
/// from "outside the map".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipGrid {
    layers: usize,
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl ChipGrid {
    /// Create a zero-filled grid with the given dimensions.
    #[must_use]
    pub fn new(layers: usize, width: usize, height: usize) -> Self {
        Self {
            layers,
            width,
            height,
            data: vec![0; layers * width * height],
        }
    }

    /// Create a grid from an existing flat buffer.
    ///
    /// The buffer is laid out layer-major, then row-major within a layer:
    /// `offset = (layer * height + y) * width + x`.
    ///
    /// # Errors
    ///
    /// Returns [`ChipGridError::LengthMismatch`] if the buffer length does
    /// not equal `layers * width * height`.
    pub fn from_data(
        layers: usize,
        width: usize,
        height: usize,
        data: Vec<u8>,
    ) -> Result<Self, ChipGridError> {
        let expected = layers * width * height;
        if data.len() != expected {
            return Err(ChipGridError::LengthMismatch {
                layers,
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            layers,
            width,
            height,
            data,
        })
    }

    /// Number of layers.
    #[must_use]
    pub fn layers(&self) -> usize {
        self.layers
    }

    /// Width of each layer, in chips.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of each layer, in chips.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read the chip at `(layer, x, y)`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, layer: usize, x: usize, y: usize) -> Option<u8> {
        self.offset(layer, x, y).map(|i| self.data[i])
    }

    /// Write the chip at `(layer, x, y)`.
    ///
    /// Returns `true` if the coordinates were in range and the chip was set.
    pub fn set(&mut self, layer: usize, x: usize, y: usize, chip: u8) -> bool {
        if let Some(i) = self.offset(layer, x, y) {
            self.data[i] = chip;
            true
        } else {
            false
        }
    }

    /// The raw flat buffer, layer-major.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn offset(&self, layer: usize, x: usize, y: usize) -> Option<usize> {
        if layer < self.layers && x < self.width && y < self.height {
            Some((layer * self.height + y) * self.width + x)
        } else {
            None
        }
    }
}
