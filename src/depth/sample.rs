use serde::{Deserialize, Serialize};

/// Number of low bits in a raw depth word that carry the player index.
pub const PLAYER_INDEX_BITMASK_WIDTH: u32 = 3;

/// Sentinel distance reported for pixels the sensor could not measure.
pub const UNKNOWN_DEPTH: i16 = -1;

/// Distance in millimetres for one depth pixel, player-index bits removed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DepthSample(i16);

impl DepthSample {
    pub const UNKNOWN: Self = Self(UNKNOWN_DEPTH);

    /// Decode a raw sensor word. The shift is arithmetic so the `-1`
    /// sentinel survives it.
    #[inline]
    pub const fn from_raw(raw: i16) -> Self {
        Self(raw >> PLAYER_INDEX_BITMASK_WIDTH)
    }

    #[inline]
    pub const fn from_millimetres(mm: i16) -> Self {
        Self(mm)
    }

    #[inline]
    pub const fn millimetres(self) -> i16 {
        self.0
    }

    /// True for a measured distance. Zero ("no reading") and the negative
    /// sentinel are unknown.
    #[inline]
    pub const fn is_known(self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_unknown_sentinel(self) -> bool {
        self.0 == UNKNOWN_DEPTH
    }
}

/// Colour-frame pixel coordinate produced by the sensor's coordinate mapper.
///
/// Values are not guaranteed to be inside the colour frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorPoint {
    pub x: i32,
    pub y: i32,
}

impl ColorPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
