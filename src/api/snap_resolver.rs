use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PixelPoint, PlotGeometry, Sample, Series};

/// Nearest sample of the snap series, in plot-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapResult {
    pub pixel: PixelPoint,
    pub sample_index: usize,
}

/// Index of the sample closest to `target_x` along x.
///
/// `samples` must be sorted ascending by x. On an exact distance tie the
/// later sample wins. Returns `None` for an empty slice or a non-finite target.
#[must_use]
pub fn nearest_sample_index(samples: &[Sample], target_x: f64) -> Option<usize> {
    if !target_x.is_finite() {
        return None;
    }

    // First sample strictly to the right of the target.
    let upper = samples.partition_point(|sample| sample.x <= target_x);

    // `min_by_key` keeps the first minimum, so the later sample goes first.
    let mut candidates: SmallVec<[(OrderedFloat<f64>, usize); 2]> = SmallVec::new();
    if let Some(after) = samples.get(upper) {
        candidates.push((OrderedFloat((after.x - target_x).abs()), upper));
    }
    if let Some(before) = upper.checked_sub(1).and_then(|idx| samples.get(idx)) {
        candidates.push((OrderedFloat((target_x - before.x).abs()), upper - 1));
    }

    candidates
        .into_iter()
        .min_by_key(|item| item.0)
        .map(|(_, index)| index)
}

/// Snaps `target_x` (in the units of `series.x_axis`) to the nearest sample of
/// `series` and converts it to pixels.
#[must_use]
pub fn resolve_snap<G>(geometry: &G, series: &Series, target_x: f64) -> Option<SnapResult>
where
    G: PlotGeometry + ?Sized,
{
    let sample_index = nearest_sample_index(&series.data, target_x)?;
    let position = series.sample_position(sample_index)?;
    let pixel = geometry
        .data_to_pixel(&position)
        .filter(|pixel| pixel.is_finite())?;
    Some(SnapResult {
        pixel,
        sample_index,
    })
}
