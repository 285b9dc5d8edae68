use tracing::trace;
use crate::core::bolt_params::{BoltParams, SAMPLE_SPACING};
use crate::core::point::Point2;
use crate::random::helpers::RandomExt;
use crate::random::unit_source::UnitSource;

// Past this fraction of the bolt the offset tapers linearly to zero at the destination.
const TAPER_START: f32 = 0.95;
const TAPER_SLOPE: f32 = 20.0;

/// Builds the poly-line of a lightning bolt from `source` to `dest`.
///
/// The path starts with `source` and ends with `dest`, both exact, and holds
/// `3 + floor(distance / 16)` points. Interior points are spread randomly along the
/// straight line and pushed sideways by up to `params.sway`; neighbours that sit
/// close together get similar offsets so the bolt never folds back on itself.
/// The last interior point is repeated before `dest`.
///
/// `source`, `dest` and `params` must be finite and `sway` non-negative. A sway of
/// zero yields a straight line. Two values are drawn from `rng` per interior point.
///
/// Offsets stay within `sway` only while every step's blend factor
/// `distance * jaggedness_numerator / sway * gap` is at most one. Wider gaps between
/// neighbouring samples extrapolate past the previous offset and can overshoot.
pub fn create_lightning_bolt<R: UnitSource + ?Sized>(
    source: Point2,
    dest: Point2,
    params: &BoltParams,
    rng: &mut R,
) -> Vec<Point2> {
    let tangent = dest - source;
    let length = tangent.length();
    // Zero when source == dest; no interior points are produced then anyway.
    let normal = tangent.perpendicular().normalize_or_zero();

    let sample_count = (length / SAMPLE_SPACING).floor() as usize;
    let mut positions = Vec::with_capacity(sample_count + 1);
    positions.push(0.0f32);
    positions.extend((0..sample_count).map(|_| rng.next_unit()));
    positions.sort_by(f32::total_cmp);

    let sway = params.sway;
    let jaggedness = params.jaggedness_numerator / sway;

    let mut results = Vec::with_capacity(sample_count + 3);
    results.push(source);

    let mut prev_point = source;
    let mut prev_displacement = 0.0f32;
    for window in positions.windows(2) {
        let (prev_pos, pos) = (window[0], window[1]);

        // Closely spaced positions keep most of the previous offset.
        let scale = length * jaggedness * (pos - prev_pos);
        let envelope = if pos > TAPER_START { TAPER_SLOPE * (1.0 - pos) } else { 1.0 };

        let mut displacement = rng.next_range(-sway, sway);
        if sway > 0.0 {
            // A vanishing sway overflows the factor; such steps are left independent.
            if scale.is_finite() {
                displacement -= (displacement - prev_displacement) * (1.0 - scale);
            }
            displacement *= envelope;
        } else {
            displacement = 0.0;
        }

        let point = source + tangent * pos + normal * displacement;
        results.push(point);
        prev_point = point;
        prev_displacement = displacement;
    }

    results.push(prev_point);
    results.push(dest);

    trace!(points = results.len(), length, "generated lightning bolt");
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::unit_source::SequenceSource;

    #[test]
    fn coincident_endpoints_give_three_points() {
        let p = Point2::new(12.5, -3.0);
        let mut rng = SequenceSource::new(vec![0.4]);
        let path = create_lightning_bolt(p, p, &BoltParams::default(), &mut rng);
        assert_eq!(path, vec![p, p, p]);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn short_bolt_has_no_interior_samples() {
        let source = Point2::new(0.0, 0.0);
        let dest = Point2::new(15.9, 0.0);
        let path = create_lightning_bolt(source, dest, &BoltParams::default(), &mut SequenceSource::new(vec![0.5]));
        assert_eq!(path, vec![source, source, dest]);
    }

    #[test]
    fn hand_computed_bolt() {
        // Samples 0.75 and 0.25 sort to [0, 0.25, 0.75]; displacement draws
        // 0.75 and 0.25 map to +40 and -40 before blending.
        let mut rng = SequenceSource::new(vec![0.75, 0.25, 0.75, 0.25]);
        let path = create_lightning_bolt(
            Point2::ZERO,
            Point2::new(32.0, 0.0),
            &BoltParams::default(),
            &mut rng,
        );

        let expected = [
            Point2::new(0.0, 0.0),
            Point2::new(8.0, -4.0),
            Point2::new(24.0, 4.8),
            Point2::new(24.0, 4.8),
            Point2::new(32.0, 0.0),
        ];
        assert_eq!(path.len(), expected.len());
        for (got, want) in path.iter().zip(expected.iter()) {
            assert!(got.distance(*want) < 1e-4, "{:?} != {:?}", got, want);
        }
        assert_eq!(rng.draws(), 4);
    }

    #[test]
    fn zero_sway_is_a_straight_line() {
        let source = Point2::ZERO;
        let dest = Point2::new(100.0, 0.0);
        let mut rng = SequenceSource::new(vec![0.1, 0.9, 0.33, 0.5, 0.72, 0.05]);
        let path = create_lightning_bolt(source, dest, &BoltParams::new(0.0, 1.0), &mut rng);

        assert_eq!(path.len(), 9);
        assert!(path.iter().all(|p| p.y == 0.0 && p.is_finite()));
        assert_eq!(rng.draws(), 12);
    }

    #[test]
    fn subnormal_sway_stays_finite() {
        let mut rng = SequenceSource::new(vec![0.1, 0.3, 0.3, 0.7, 0.5, 0.9, 0.2, 0.6]);
        let path = create_lightning_bolt(
            Point2::ZERO,
            Point2::new(100.0, 0.0),
            &BoltParams::new(1e-39, 1.0),
            &mut rng,
        );

        assert_eq!(path.len(), 9);
        assert!(path.iter().all(|p| p.is_finite()), "{:?}", path);
        assert!(path.iter().all(|p| p.y.abs() <= 1e-30));
    }

    #[test]
    fn wide_gaps_can_overshoot_sway() {
        // One sample at 0.9 over 16 units: factor 16 * 2 / 1 * 0.9 = 28.8,
        // so a raw offset of 0.5 is pushed out to 14.4.
        let mut rng = SequenceSource::new(vec![0.9, 0.75]);
        let path = create_lightning_bolt(
            Point2::ZERO,
            Point2::new(16.0, 0.0),
            &BoltParams::new(1.0, 2.0),
            &mut rng,
        );

        assert_eq!(path.len(), 4);
        assert!((path[1].x - 14.4).abs() < 1e-4);
        assert!((path[1].y + 14.4).abs() < 1e-3);
        assert!(path[1].y.abs() > 1.0);
    }
}
