//! Distance → 8-bit intensity ramp.

/// Closest distance (mm) on the ramp; anything nearer maps to full brightness.
pub const MIN_DEPTH_MM: i32 = 800;
/// Farthest distance (mm) on the ramp; anything farther maps to black.
pub const MAX_DEPTH_MM: i32 = 4000;
const DEPTH_RANGE_MM: i32 = MAX_DEPTH_MM - MIN_DEPTH_MM;

/// Map a distance in millimetres to an intensity, brighter when closer.
///
/// Linear between [`MIN_DEPTH_MM`] (255) and [`MAX_DEPTH_MM`] (0) with integer
/// division; distances at or below the minimum, including the negative
/// "unknown" sentinel, return 255. Distances beyond the maximum clamp to 0.
#[inline]
pub fn intensity(distance: i32) -> u8 {
    let offset = distance.saturating_sub(MIN_DEPTH_MM);
    if offset > 0 {
        let offset = offset.min(DEPTH_RANGE_MM);
        (255 - 255 * offset / DEPTH_RANGE_MM) as u8
    } else {
        255
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_and_unknown_distances_are_brightest() {
        for d in [i32::MIN, -1, 0, 1, 500, 799, 800] {
            assert_eq!(intensity(d), 255, "distance {d}");
        }
    }

    #[test]
    fn far_distances_clamp_to_zero() {
        for d in [4000, 4001, 8000, i16::MAX as i32, i32::MAX] {
            assert_eq!(intensity(d), 0, "distance {d}");
        }
    }

    #[test]
    fn ramp_is_monotonic_between_bounds() {
        let mut prev = intensity(MIN_DEPTH_MM);
        for d in MIN_DEPTH_MM..=MAX_DEPTH_MM {
            let v = intensity(d);
            assert!(v <= prev, "ramp increased at {d}: {prev} -> {v}");
            prev = v;
        }
    }

    #[test]
    fn ramp_uses_integer_division() {
        assert_eq!(intensity(801), 255);
        assert_eq!(intensity(1200), 224);
        assert_eq!(intensity(2400), 128);
        assert_eq!(intensity(3999), 1);
    }
}
