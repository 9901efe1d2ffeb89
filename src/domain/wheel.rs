//! Wheel geometry and outcome selection. Pure functions, no timers.
//!
//! Angles are degrees in screen space: 0° is the positive x-axis and angles grow
//! clockwise (y points down), so the top of the wheel sits at 270°. The wheel is
//! rotated clockwise by an accumulated `rotation`. Drawing and outcome lookup
//! both go through [`segment_span`] / [`pointer_offset`], so the segment shown
//! under the pointer is always the one returned.

use rand::Rng;

/// Fixed pointer position (top of the wheel).
pub const POINTER_DEG: f64 = 270.0;

/// Where segment 0 begins on an unrotated wheel. Segments are laid out
/// clockwise from the pointer.
pub const FIRST_SEGMENT_DEG: f64 = POINTER_DEG;

/// Every spin adds at least this many full turns.
pub const MIN_TURNS: f64 = 3.0;

/// Up to this many extra turns (continuous) on top of [`MIN_TURNS`].
pub const EXTRA_TURNS: f64 = 2.0;

/// Angular width of one segment.
pub fn segment_angle(n: usize) -> f64 {
    360.0 / n as f64
}

/// Target rotation for the next spin: current + 3..5 turns + a uniform angle in [0, 360).
///
/// The extra angle alone is uniform over a full revolution, so the final
/// position modulo 360 is uniform regardless of `current` or the turn count.
pub fn plan_rotation<R: Rng + ?Sized>(current: f64, rng: &mut R) -> f64 {
    let turns = MIN_TURNS + rng.r#gen::<f64>() * EXTRA_TURNS;
    let angle = rng.r#gen::<f64>() * 360.0;
    current + turns * 360.0 + angle
}

/// Distance, along the wheel, from the start of segment 0 to the pointer.
///
/// Rotating the wheel clockwise moves earlier segments past the pointer, so the
/// rotation is subtracted (direction inverted) before normalizing.
pub fn pointer_offset(rotation: f64) -> f64 {
    (POINTER_DEG - FIRST_SEGMENT_DEG - rotation).rem_euclid(360.0)
}

/// Index of the segment under the pointer after `rotation`. `n` must be > 0.
pub fn winning_index(rotation: f64, n: usize) -> usize {
    debug_assert!(n > 0, "wheel with no segments");
    let idx = (pointer_offset(rotation) / segment_angle(n)).floor() as usize;
    // rem_euclid can land on 360.0 exactly for tiny negative inputs.
    idx % n
}

/// Segment drawn at screen angle `deg` after `rotation`. At [`POINTER_DEG`] this
/// is [`winning_index`].
pub fn segment_at(deg: f64, n: usize, rotation: f64) -> usize {
    let local = (deg - FIRST_SEGMENT_DEG - rotation).rem_euclid(360.0);
    (local / segment_angle(n)).floor() as usize % n
}

/// Screen-space `[start, end)` of segment `i` after `rotation`, start normalized to [0, 360).
pub fn segment_span(i: usize, n: usize, rotation: f64) -> (f64, f64) {
    let seg = segment_angle(n);
    let start = (FIRST_SEGMENT_DEG + i as f64 * seg + rotation).rem_euclid(360.0);
    (start, start + seg)
}

/// True if screen angle `deg` falls inside `span` (handles wrap past 360).
pub fn span_contains(span: (f64, f64), deg: f64) -> bool {
    let (start, end) = span;
    (deg - start).rem_euclid(360.0) < end - start
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn unrotated_wheel_points_at_first_segment() {
        assert_eq!(winning_index(0.0, 4), 0);
        assert_eq!(winning_index(360.0 * 3.0, 4), 0);
    }

    #[test]
    fn clockwise_rotation_brings_last_segment_under_pointer() {
        // Quarter turn clockwise on a 4-wheel: segment 3 now sits at the top.
        assert_eq!(winning_index(90.0, 4), 3);
        assert_eq!(winning_index(180.0, 4), 2);
        assert_eq!(winning_index(270.0, 4), 1);
        assert_eq!(winning_index(45.0, 4), 3);
        assert_eq!(winning_index(1.0, 4), 3);
    }

    #[test]
    fn single_segment_always_wins() {
        for r in [0.0, 17.5, 359.99, 1234.5] {
            assert_eq!(winning_index(r, 1), 0);
        }
    }

    #[test]
    fn planned_rotation_adds_three_to_five_turns() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut current = 123.0;
        for _ in 0..500 {
            let next = plan_rotation(current, &mut rng);
            let added = next - current;
            assert!(added >= MIN_TURNS * 360.0);
            assert!(added < (MIN_TURNS + EXTRA_TURNS + 1.0) * 360.0);
            current = next;
        }
    }

    #[test]
    fn same_seed_same_rotation() {
        let a = plan_rotation(0.0, &mut StdRng::seed_from_u64(42));
        let b = plan_rotation(0.0, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn winning_index_is_uniform() {
        const SAMPLES: usize = 60_000;
        for n in [1usize, 2, 3, 6, 7, 12] {
            let mut rng = StdRng::seed_from_u64(2024 + n as u64);
            let mut counts = vec![0usize; n];
            let mut rotation = 0.0;
            for _ in 0..SAMPLES {
                rotation = plan_rotation(rotation, &mut rng);
                counts[winning_index(rotation, n)] += 1;
            }
            let expected = SAMPLES as f64 / n as f64;
            for (i, &c) in counts.iter().enumerate() {
                let dev = (c as f64 - expected).abs() / expected;
                assert!(
                    dev < 0.05,
                    "n={}: segment {} drawn {} times, expected ~{}",
                    n, i, c, expected
                );
            }
        }
    }

    proptest! {
        #[test]
        fn pointer_lands_in_winning_segment(rotation in 0.0f64..100_000.0, n in 1usize..24) {
            let seg = segment_angle(n);
            let off = pointer_offset(rotation);
            // Skip float-boundary cases where the pointer sits on a segment edge.
            let edge = (off / seg).fract();
            prop_assume!(edge > 1e-9 && edge < 1.0 - 1e-9);

            let win = winning_index(rotation, n);
            prop_assert!(win < n);
            let covering: Vec<usize> = (0..n)
                .filter(|&i| span_contains(segment_span(i, n, rotation), POINTER_DEG))
                .collect();
            prop_assert_eq!(covering, vec![win]);
            prop_assert_eq!(segment_at(POINTER_DEG, n, rotation), win);
        }
    }
}
