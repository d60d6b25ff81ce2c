//! Threshold scale and color bin mapping.

/// ColorBrewer `RdPu` sequential ramp, nine stops, light to dark.
const RDPU: [[u8; 3]; 9] = [
    [0xff, 0xf7, 0xf3],
    [0xfd, 0xe0, 0xdd],
    [0xfc, 0xc5, 0xc0],
    [0xfa, 0x9f, 0xb5],
    [0xf7, 0x68, 0xa1],
    [0xdd, 0x34, 0x97],
    [0xae, 0x01, 0x7e],
    [0x7a, 0x01, 0x77],
    [0x49, 0x00, 0x6a],
];

/// Builds the color bin boundaries for a count range.
///
/// The bin count is the range width clamped to `1..=10`, giving
/// `bins + 1` evenly spaced boundaries from `min` to `max` inclusive.
/// Scales shorter than four boundaries are padded by appending
/// `max + 1`, so the result is always non-decreasing with at least four
/// entries.
#[must_use]
pub fn threshold_scale(min: u32, max: u32) -> Vec<f64> {
    let num_bins = max.saturating_sub(min).clamp(1, 10);
    let low = f64::from(min);
    let span = f64::from(max) - low;

    let mut scale: Vec<f64> = (0..=num_bins)
        .map(|step| span.mul_add(f64::from(step) / f64::from(num_bins), low))
        .collect();
    while scale.len() < 4 {
        scale.push(f64::from(max) + 1.0);
    }
    scale
}

/// Returns the fill color for a value against a threshold scale.
///
/// The value lands in the bin whose `[lower, upper)` range holds it;
/// values at or past the top boundary land in the last bin. The bin
/// position samples the ramp from light to dark.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn fill_color(value: u32, scale: &[f64]) -> String {
    let bins = scale.len().saturating_sub(1).max(1);
    let value = f64::from(value);
    let bin = scale
        .windows(2)
        .position(|bounds| value < bounds[1])
        .unwrap_or(bins - 1);

    let t = if bins > 1 {
        bin as f64 / (bins - 1) as f64
    } else {
        0.0
    };
    hex_color(sample_rdpu(t))
}

/// Formats an RGB triple as lowercase `#rrggbb`.
#[must_use]
pub fn hex_color(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Samples the ramp at `t` in `[0, 1]`, interpolating linearly between
/// neighboring stops.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn sample_rdpu(t: f64) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let scaled = t * (RDPU.len() - 1) as f64;
    let low = scaled.floor() as usize;
    let high = (low + 1).min(RDPU.len() - 1);
    let frac = scaled - low as f64;

    let mut rgb = [0_u8; 3];
    for (channel, slot) in rgb.iter_mut().enumerate() {
        let start = f64::from(RDPU[low][channel]);
        let end = f64::from(RDPU[high][channel]);
        *slot = (end - start).mul_add(frac, start).round() as u8;
    }
    rgb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_range_gets_ten_exact_bins() {
        let scale = threshold_scale(0, 50);
        let expected: Vec<f64> = (0..=10).map(|step| f64::from(step) * 5.0).collect();
        assert_eq!(scale, expected);
    }

    #[test]
    fn narrow_range_pads_to_four_boundaries() {
        assert_eq!(threshold_scale(3, 4), vec![3.0, 4.0, 5.0, 5.0]);
        assert_eq!(threshold_scale(7, 7), vec![7.0, 7.0, 8.0, 8.0]);
        assert_eq!(threshold_scale(0, 2), vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn huge_ranges_clamp_to_ten_bins() {
        let scale = threshold_scale(0, 4000);
        assert_eq!(scale.len(), 11);
        assert_eq!(scale[0], 0.0);
        assert_eq!(scale[10], 4000.0);
    }

    #[test]
    fn scales_are_always_non_decreasing() {
        for (min, max) in [(0, 0), (0, 1), (3, 4), (2, 9), (10, 300), (5, 5)] {
            let scale = threshold_scale(min, max);
            assert!(scale.len() >= 4, "({min}, {max}) gave {scale:?}");
            assert!(
                scale.windows(2).all(|pair| pair[0] <= pair[1]),
                "({min}, {max}) gave {scale:?}"
            );
        }
    }

    #[test]
    fn extremes_map_to_ramp_ends() {
        let scale = threshold_scale(0, 50);
        assert_eq!(fill_color(0, &scale), "#fff7f3");
        assert_eq!(fill_color(50, &scale), "#49006a");
        assert_eq!(fill_color(200, &scale), "#49006a");
    }

    #[test]
    fn middle_values_fall_between_the_ends() {
        let scale = threshold_scale(0, 50);
        let middle = fill_color(25, &scale);
        assert_ne!(middle, "#fff7f3");
        assert_ne!(middle, "#49006a");
    }

    #[test]
    fn hex_is_lowercase_and_padded() {
        assert_eq!(hex_color([0x49, 0x00, 0x6a]), "#49006a");
        assert_eq!(hex_color([0xff, 0xf7, 0xf3]), "#fff7f3");
        assert_eq!(hex_color([0, 1, 2]), "#000102");
    }
}
