pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0; // x:y data window ratio

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;
const MIN_SPAN_M: f64 = 1.0;

/// Padded world extents `(max_x, max_y)` that fit every path, kept at a fixed
/// x:y ratio so arcs are not distorted when the range changes.
pub fn fit_paths(paths: &[&[(f64, f64)]]) -> (f64, f64) {
    let (raw_max_x, raw_max_y) = paths
        .iter()
        .flat_map(|path| path.iter())
        .fold((0.0f64, 0.0f64), |(mx, my), &(x, y)| (mx.max(x), my.max(y)));
    fixed_ratio_window(raw_max_x, raw_max_y)
}

pub fn fixed_ratio_window(raw_max_x: f64, raw_max_y: f64) -> (f64, f64) {
    let x_pad = raw_max_x.max(MIN_SPAN_M) * X_PADDING_RATIO;
    let y_pad = raw_max_y.max(MIN_SPAN_M) * Y_PADDING_RATIO;

    let mut x_span = (raw_max_x + x_pad).max(MIN_SPAN_M);
    let mut y_span = (raw_max_y + y_pad).max(MIN_SPAN_M);

    if x_span / y_span < DISTANCE_TO_HEIGHT_RATIO {
        x_span = y_span * DISTANCE_TO_HEIGHT_RATIO;
    } else {
        y_span = x_span / DISTANCE_TO_HEIGHT_RATIO;
    }

    (x_span, y_span)
}
