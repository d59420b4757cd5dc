mod common;

use common::fan_of_lines;
use proptest::prelude::*;
use std::sync::Arc;
use strokematch::config::ScoreAccumulation;
use strokematch::consts::STROKE_SIZE;
use strokematch::matcher::engine::compute_score;
use strokematch::normalizer::{normalize, resample, scale, translate};
use strokematch::{Point, Recognizer, StrokeBuffer, TemplateSet};

// --- STRATEGIES ---

prop_compose! {
    fn arb_point()(x in -2000i32..2000, y in -2000i32..2000) -> Point {
        Point::new(x, y)
    }
}

fn arb_stroke(min: usize) -> impl Strategy<Value = Vec<Point>> {
    proptest::collection::vec(arb_point(), min..=STROKE_SIZE)
}

fn arb_accumulation() -> impl Strategy<Value = ScoreAccumulation> {
    prop_oneof![
        Just(ScoreAccumulation::Truncating),
        Just(ScoreAccumulation::Exact)
    ]
}

fn buffer(points: &[Point]) -> StrokeBuffer {
    StrokeBuffer::try_from_points(points.iter().copied()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_translate_anchors_at_origin(points in arb_stroke(1)) {
        let mut s = buffer(&points);
        translate(&mut s).unwrap();
        let b = s.bounds().unwrap();
        prop_assert_eq!(b.min_x, 0);
        prop_assert_eq!(b.min_y, 0);
    }

    #[test]
    fn test_scale_fills_canvas_and_keeps_aspect(points in arb_stroke(2)) {
        let mut s = buffer(&points);
        translate(&mut s).unwrap();
        let before = s.bounds().unwrap();
        let longer = before.max_x.max(before.max_y);
        prop_assume!(longer > 0);

        scale(&mut s).unwrap();
        let after = s.bounds().unwrap();
        let longer_after = after.max_x.max(after.max_y);
        prop_assert!((249..=250).contains(&longer_after), "longer axis {}", longer_after);

        let shorter = before.max_x.min(before.max_y);
        let shorter_after = after.max_x.min(after.max_y);
        let expected = f64::from(shorter) * 250.0 / f64::from(longer);
        prop_assert!((f64::from(shorter_after) - expected).abs() <= 1.0);
    }

    #[test]
    fn test_resample_reaches_stroke_size(points in arb_stroke(2)) {
        let mut s = buffer(&points);
        resample(&mut s).unwrap();
        prop_assert_eq!(s.len(), STROKE_SIZE);
        prop_assert_eq!(s.points()[0], points[0]);
        prop_assert_eq!(s.points()[STROKE_SIZE - 1], points[points.len() - 1]);
    }

    #[test]
    fn test_normalized_stroke_is_canonical(points in arb_stroke(2)) {
        let mut s = buffer(&points);
        normalize(&mut s).unwrap();
        let b = s.bounds().unwrap();
        prop_assert_eq!(s.len(), STROKE_SIZE);
        prop_assert_eq!((b.min_x, b.min_y), (0, 0));
        prop_assert!(b.max_x <= 250 && b.max_y <= 250);
    }

    #[test]
    fn test_translate_is_idempotent_on_canonical_data(points in arb_stroke(2)) {
        let mut s = buffer(&points);
        normalize(&mut s).unwrap();
        let canonical = s.clone();
        translate(&mut s).unwrap();
        prop_assert_eq!(s, canonical);
    }

    #[test]
    fn test_scale_changes_stroke_unless_longer_axis_is_full(points in arb_stroke(2)) {
        let mut s = buffer(&points);
        translate(&mut s).unwrap();
        let b = s.bounds().unwrap();
        let longer = b.max_x.max(b.max_y);
        prop_assume!(longer > 0);

        let before = s.clone();
        scale(&mut s).unwrap();
        prop_assert_eq!(s == before, longer == 250);
    }

    #[test]
    fn test_scale_is_noop_on_full_extent_strokes(
        points in proptest::collection::vec((0i32..=250, 0i32..=250), 1..STROKE_SIZE),
        far in 0i32..=250,
        vertical in any::<bool>()
    ) {
        let anchor = if vertical { Point::new(far, 250) } else { Point::new(250, far) };
        let mut all: Vec<Point> = points.into_iter().map(Point::from).collect();
        all.push(anchor);

        let mut s = buffer(&all);
        let before = s.clone();
        scale(&mut s).unwrap();
        prop_assert_eq!(s, before);
    }

    #[test]
    fn test_self_score_is_zero(
        points in proptest::collection::vec(arb_point(), STROKE_SIZE),
        mode in arb_accumulation()
    ) {
        prop_assert_eq!(compute_score(&points, &points, mode), Ok(0));
    }

    #[test]
    fn test_exact_never_below_truncating(
        a in proptest::collection::vec(arb_point(), STROKE_SIZE),
        b in proptest::collection::vec(arb_point(), STROKE_SIZE)
    ) {
        let truncating = compute_score(&a, &b, ScoreAccumulation::Truncating).unwrap();
        let exact = compute_score(&a, &b, ScoreAccumulation::Exact).unwrap();
        prop_assert!(exact >= truncating);
    }

    #[test]
    fn test_find_match_is_deterministic(points in arb_stroke(2), mode in arb_accumulation()) {
        let mut r = Recognizer::new(Arc::new(TemplateSet::new(fan_of_lines())), mode);
        for &p in &points {
            r.add_point(p).unwrap();
        }
        let first = r.match_details().unwrap();

        r.reset();
        for &p in &points {
            r.add_point(p).unwrap();
        }
        let second = r.match_details().unwrap();
        prop_assert_eq!(first, second);
        prop_assert!(first.digit < 10);
    }
}
