use crate::Float;

/// Integrates `f` over `[lower, upper]` with the composite Simpson rule.
///
/// `n_points` is normalized before use: even counts are incremented by one
/// (the rule needs an even number of sub-intervals) and anything below 3 is
/// raised to 3. This is a silent correction, not an error.
///
/// Exact for polynomials up to degree 3; otherwise the error shrinks as
/// `O(h^4)`.
pub fn simpson(f: impl Fn(Float) -> Float, lower: Float, upper: Float, n_points: usize) -> Float {
    let n = if n_points % 2 == 0 {
        n_points + 1
    } else {
        n_points
    };
    let n = n.max(3);

    let h = (upper - lower) / (n - 1) as Float;

    let mut sum = f(lower) + f(upper);
    for i in 1..n - 1 {
        let weight = if i % 2 == 0 { 2.0 } else { 4.0 };
        sum += weight * f(lower + h * i as Float);
    }

    sum * h / 3.0
}
