/// Bipolar step activation relative to the threshold `theta`.
///
/// Returns `1` above the threshold, `-1` below it and `0` when `y_in` lands
/// exactly on it. A `0` never matches a bipolar target, so a unit sitting on
/// the threshold always counts as misclassified during training.
pub fn bipolar(y_in: f64, theta: f64) -> i32 {
    if y_in > theta {
        1
    } else if y_in < theta {
        -1
    } else {
        0
    }
}
