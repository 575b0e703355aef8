//! Error type for fatal configuration problems.
//!
//! Only malformed geometry, mismatched buffer lengths and invalid parameters
//! are errors. Missing frames, out-of-range coordinates and label exhaustion
//! are handled locally by the stage that meets them.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpotlightError {
    #[error(
        "frame dimensions must be non-zero (depth {depth_width}x{depth_height}, color {color_width}x{color_height})"
    )]
    EmptyFrame {
        depth_width: usize,
        depth_height: usize,
        color_width: usize,
        color_height: usize,
    },
    #[error("color width {color_width} / depth width {depth_width} gives a zero depth-to-color divisor")]
    ZeroDivisor {
        color_width: usize,
        depth_width: usize,
    },
    #[error(
        "depth frame {depth_width}x{depth_height} does not fit into color frame {color_width}x{color_height}"
    )]
    DepthExceedsColor {
        depth_width: usize,
        depth_height: usize,
        color_width: usize,
        color_height: usize,
    },
    #[error("{buffer} buffer has {actual} elements, expected {expected}")]
    BufferLength {
        buffer: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParams { name: &'static str, reason: String },
}

impl SpotlightError {
    pub(crate) fn check_len(buffer: &'static str, expected: usize, actual: usize) -> Result<(), Self> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self::BufferLength {
                buffer,
                expected,
                actual,
            })
        }
    }
}
