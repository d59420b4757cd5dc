use rstest::rstest;
use strokematch::consts::STROKE_SIZE;
use strokematch::error::StrokeError;
use strokematch::normalizer::{insert_one_point, normalize, resample, scale, translate};
use strokematch::{Point, StrokeBuffer};

fn buffer(points: &[(i32, i32)]) -> StrokeBuffer {
    StrokeBuffer::try_from_points(points.iter().copied()).unwrap()
}

#[rstest]
#[case(&[(0, 0), (100, 200)], (125, 250))]
#[case(&[(0, 0), (200, 100)], (250, 125))]
#[case(&[(0, 0), (500, 10)], (250, 5))]
#[case(&[(0, 0), (10, 10)], (250, 250))]
#[case(&[(0, 0), (0, 40)], (0, 250))]
fn test_scale_far_corner(#[case] points: &[(i32, i32)], #[case] expected: (i32, i32)) {
    let mut s = buffer(points);
    scale(&mut s).unwrap();
    assert_eq!(s.points()[1], Point::from(expected));
    assert_eq!(s.points()[0], Point::new(0, 0));
}

#[rstest]
#[case(&[(7, 7)])]
#[case(&[(7, 7), (7, 7), (7, 7)])]
fn test_degenerate_strokes_keep_shape(#[case] points: &[(i32, i32)]) {
    let mut s = buffer(points);
    translate(&mut s).unwrap();
    scale(&mut s).unwrap();
    assert!(s.iter().all(|p| *p == Point::new(0, 0)));
}

#[rstest]
#[case(0)]
#[case(1)]
fn test_resample_rejects_short_strokes(#[case] len: usize) {
    let mut s = buffer(&[(1, 1)][..len]);
    let expected = Err(StrokeError::InsufficientPoints {
        required: 2,
        actual: len,
    });
    assert_eq!(resample(&mut s), expected);
    assert_eq!(insert_one_point(&mut s), expected);
    assert_eq!(normalize(&mut s), expected);
}

#[test]
fn test_insertion_order_on_two_points() {
    // Lengths halve each round, so the first three insertions split the
    // stroke into quarters, left side first.
    let mut s = buffer(&[(0, 0), (0, 248)]);
    insert_one_point(&mut s).unwrap();
    assert_eq!(s.points()[1], Point::new(0, 124));
    insert_one_point(&mut s).unwrap();
    assert_eq!(s.points()[1], Point::new(0, 62));
    insert_one_point(&mut s).unwrap();
    assert_eq!(
        s.points(),
        &[
            Point::new(0, 0),
            Point::new(0, 62),
            Point::new(0, 124),
            Point::new(0, 186),
            Point::new(0, 248)
        ]
    );
}

#[test]
fn test_resample_keeps_order_along_a_line() {
    let mut s = buffer(&[(0, 0), (250, 0)]);
    resample(&mut s).unwrap();
    assert_eq!(s.len(), STROKE_SIZE);
    assert!(s.points().windows(2).all(|w| w[0].x <= w[1].x));
}

#[test]
fn test_scale_is_idempotent_at_full_extent() {
    let mut s = buffer(&[(0, 0), (250, 90), (31, 250)]);
    let before = s.clone();
    scale(&mut s).unwrap();
    assert_eq!(s, before);
}

#[rstest]
#[case(19, 249)]
#[case(38, 249)]
#[case(61, 249)]
#[case(249, 250)]
fn test_scale_can_land_one_short_of_full_extent(#[case] length: i32, #[case] once: i32) {
    let mut s = buffer(&[(0, 0), (length, 0)]);
    scale(&mut s).unwrap();
    assert_eq!(s.points()[1], Point::new(once, 0));

    // A second pass only leaves the stroke alone once it spans exactly 250.
    scale(&mut s).unwrap();
    assert_eq!(s.points()[1], Point::new(250, 0));
}
