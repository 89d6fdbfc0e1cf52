//! Piecewise-linear interpolation over tabulated curves.
use crate::errors::RouteError;

/// Interpolate linearly on the curve defined by reference points `xs` and
/// co-indexed values `ys`.
///  - `x` is the lookup value.
///  - `xs` is an ascending-sorted slice of reference points, `len >= 2`.
///  - `ys` holds the curve values at each reference point, same length as `xs`.
///
/// Lookups beyond either end of `xs` clamp to the nearest endpoint value, so
/// the curve is treated as flat outside the tabulated range.  A reference
/// point that fails to increase during the bracket search is a
/// [Degenerate](crate::errors::RouteError::Degenerate) error.
///
/// # Examples
///
/// ```rust
/// let z = vec![0.0, 1.0, 2.0];
/// let s = vec![0.0, 10.0, 20.0];
/// let y = levelpool::interp::interpolate(0.5, &z, &s).unwrap();
/// assert_eq!(5.0, y);
/// ```
pub fn interpolate(x: f64, xs: &[f64], ys: &[f64]) -> Result<f64, RouteError> {
    if xs.len() < 2 || xs.len() != ys.len() {
        return Err(RouteError::InputShape {
            what: "interpolation curve",
            len: xs.len().min(ys.len()),
        });
    }
    if x <= xs[0] {
        return Ok(ys[0]);
    }
    if x >= xs[xs.len() - 1] {
        return Ok(ys[ys.len() - 1]);
    }
    for i in 1..xs.len() {
        if xs[i] <= xs[i - 1] {
            return Err(RouteError::Degenerate {
                index: i,
                value: xs[i],
            });
        }
        if xs[i] > x {
            let run = xs[i] - xs[i - 1];
            return Ok(ys[i - 1] + (ys[i] - ys[i - 1]) / run * (x - xs[i - 1]));
        }
    }
    // the upper clamp returns before the scan can run off the end
    Ok(ys[ys.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    const Z: [f64; 3] = [0.0, 1.0, 2.0];
    const S: [f64; 3] = [0.0, 10.0, 20.0];

    #[test]
    fn exact_at_knots() {
        for (x, y) in Z.iter().zip(S.iter()) {
            assert_eq!(*y, interpolate(*x, &Z, &S).unwrap());
        }
    }

    #[test]
    fn midpoints() {
        assert_eq!(5.0, interpolate(0.5, &Z, &S).unwrap());
        assert_eq!(17.5, interpolate(1.75, &Z, &S).unwrap());
    }

    #[test]
    fn clamps_above() {
        assert_eq!(20.0, interpolate(100.0, &Z, &S).unwrap());
    }

    #[test]
    fn clamps_below() {
        assert_eq!(0.0, interpolate(-3.0, &Z, &S).unwrap());
    }

    #[test]
    fn monotone_in_x() {
        let mut prev = f64::NEG_INFINITY;
        let mut x = -0.5;
        while x < 2.5 {
            let y = interpolate(x, &Z, &S).unwrap();
            assert!(y >= prev);
            prev = y;
            x += 0.01;
        }
    }

    #[test]
    fn rejects_short_curve() {
        let err = interpolate(0.5, &[1.0], &[2.0]).unwrap_err();
        assert_eq!(
            RouteError::InputShape {
                what: "interpolation curve",
                len: 1
            },
            err
        );
    }

    #[test]
    fn rejects_repeated_knot() {
        let xs = [0.0, 2.0, 2.0, 3.0];
        let ys = [0.0, 1.0, 2.0, 4.0];
        let err = interpolate(2.5, &xs, &ys).unwrap_err();
        assert_eq!(
            RouteError::Degenerate {
                index: 2,
                value: 2.0
            },
            err
        );
    }
}
