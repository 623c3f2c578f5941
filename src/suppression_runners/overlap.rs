use crate::common::BvrBox;

/// Scale of the exponential that maps a Wasserstein distance into `(0, 1]`.
pub const WASSERSTEIN_SCALE: f32 = 12.8;

/// Intersection over union of two boxes with precomputed areas.
///
/// A union that is zero or negative (coincident zero-area boxes, inverted
/// boxes) means no overlap, as does any non-finite ratio.
pub fn iou(a: &BvrBox, b: &BvrBox, area_a: f32, area_b: f32, offset: f32) -> f32 {
    let inter = a.intersect(b, offset);
    let union = area_a + area_b - inter;
    if union <= 0.0 {
        return 0.0;
    }
    let ovr = inter / union;
    if ovr.is_finite() { ovr } else { 0.0 }
}

/// Normalized Wasserstein similarity between box `a` (the suppressor) and
/// box `b`: `exp(-sqrt(d_c + d_s) / 12.8)`.
///
/// The extent term pairs each box's own width against its own height,
/// `((w_a - h_a)² + (w_b - h_b)²) / 4`. This is NOT the textbook Gaussian
/// Wasserstein term (`w_a` against `w_b`, `h_a` against `h_b`); it matches the
/// reference formula and is kept that way on purpose.
pub fn normalized_wasserstein(a: &BvrBox, b: &BvrBox, offset: f32) -> f32 {
    let center_w = b.cx() - a.cx() + offset;
    let center_h = b.cy() - a.cy() + offset;
    let center_distance = center_w * center_w + center_h * center_h;

    let w1 = a.width(offset);
    let h1 = b.width(offset);
    let w2 = a.height(offset);
    let h2 = b.height(offset);
    let wh_distance = ((w1 - w2) * (w1 - w2) + (h1 - h2) * (h1 - h2)) / 4.;

    let wasserstein = (center_distance + wh_distance).sqrt();
    (-wasserstein / WASSERSTEIN_SCALE).exp()
}
