//! Coarse-grained entropy of the lattice color field.
//!
//! The entropy is computed over the macroscopic black/white fraction of the
//! color plane, not over the microscopic ant configuration.

/// Shannon entropy, in bits, of a two-outcome distribution with the given
/// black probability.
///
/// Zero-probability terms contribute exactly zero, so the degenerate
/// all-white and all-black planes yield 0 rather than NaN. The result lies
/// in `[0, 1]`, peaking at `p_black = 0.5` and symmetric around it.
#[must_use]
pub fn binary_entropy(p_black: f64) -> f64 {
    let p_white = 1.0 - p_black;
    let mut entropy = 0.0;
    if p_black > 0.0 {
        entropy -= p_black * p_black.log2();
    }
    if p_white > 0.0 {
        entropy -= p_white * p_white.log2();
    }
    entropy
}

/// Entropy of a color plane with `black` black cells out of `total`.
///
/// `total` must be non-zero; lattice constructors reject zero extents, so
/// every plane handed to this function has at least one cell.
#[must_use]
pub fn color_entropy(black: usize, total: usize) -> f64 {
    binary_entropy(black as f64 / total as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn uniform_planes_have_zero_entropy() {
        assert_eq!(binary_entropy(0.0), 0.0);
        assert_eq!(binary_entropy(1.0), 0.0);
        assert_eq!(color_entropy(0, 64), 0.0);
        assert_eq!(color_entropy(64, 64), 0.0);
    }

    #[test]
    fn half_black_plane_has_unit_entropy() {
        assert!((binary_entropy(0.5) - 1.0).abs() < TOLERANCE);
        assert!((color_entropy(32, 64) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn entropy_stays_within_unit_interval() {
        for black in 0..=100 {
            let entropy = color_entropy(black, 100);
            assert!((0.0..=1.0 + TOLERANCE).contains(&entropy), "h({black}/100) = {entropy}");
        }
    }

    #[test]
    fn entropy_is_symmetric_around_half() {
        for black in 0..=50 {
            let low = color_entropy(black, 100);
            let high = color_entropy(100 - black, 100);
            assert!((low - high).abs() < TOLERANCE);
        }
    }

    #[test]
    fn entropy_is_monotonic_up_to_half() {
        let mut previous = -1.0;
        for black in 0..=50 {
            let entropy = color_entropy(black, 100);
            assert!(entropy > previous, "h({black}/100) did not increase");
            previous = entropy;
        }
    }
}
