use anyhow::Result;
use curvesmith::codec::{self, FormatError, field, kind};
use curvesmith::{ClipAlgorithm, CurveDocument, CurveError, CurvePoint};
use proptest::prelude::*;

fn doc_from(points: &[(f64, f64, f64)]) -> CurveDocument {
    let mut doc = CurveDocument::new();
    doc.push_points(points.iter().copied().map(CurvePoint::from));
    doc
}

fn triples(doc: &CurveDocument) -> Vec<(f64, f64, f64)> {
    doc.points().iter().map(|p| (p.x, p.y, p.slope)).collect()
}

#[test]
fn test_reverse_twice_restores_original() {
    let original = [(0.0, 0.0, 0.0), (1.0, 1.0, 0.0), (2.0, 0.0, 0.0)];
    let mut doc = doc_from(&original);
    doc.reverse().reverse();
    assert_eq!(triples(&doc), original);
}

#[test]
fn test_splice_offsets_by_receiver_max_x() {
    let mut doc = doc_from(&[(0.0, 0.0, 0.0), (1.0, 1.0, 0.0)]);
    let other = doc.clone();
    doc.splice_curve(&other);
    assert_eq!(
        triples(&doc),
        [
            (0.0, 0.0, 0.0),
            (1.0, 1.0, 0.0),
            (1.0, 0.0, 0.0),
            (2.0, 1.0, 0.0),
        ]
    );
}

#[test]
fn test_splice_into_empty_adopts_points() {
    let other = doc_from(&[(3.0, 0.5, 0.1), (4.0, 0.25, -0.1)]);
    let mut doc = CurveDocument::new();
    doc.splice_curve(&other);
    assert_eq!(doc.points(), other.points());
}

#[test]
fn test_clip_reference_values() {
    let mut doc = doc_from(&[(0.0, 0.0, 0.0)]);
    doc.clip(ClipAlgorithm::Tanh);
    assert_eq!(doc.points()[0].y, 0.0);

    let mut doc = doc_from(&[(0.0, 1.0, 0.0)]);
    doc.clip(ClipAlgorithm::Sin);
    assert_eq!(doc.points()[0].y, 1.0);

    let mut doc = doc_from(&[(0.0, 0.5, 0.0)]);
    doc.clip_named("cubic");
    assert_eq!(doc.points()[0].y, 0.9140625);
}

#[test]
fn test_unknown_clip_name_is_noop() {
    let mut doc = doc_from(&[(0.0, 0.5, 0.0), (1.0, -0.9, 0.0)]);
    let before = doc.clone();
    doc.clip_named("fuzz");
    assert_eq!(doc, before);
}

#[test]
fn test_chain_order_is_application_order() -> Result<()> {
    let mut shifted_then_scaled = doc_from(&[(1.0, 0.0, 0.0)]);
    shifted_then_scaled.shift_x(1.0).scale_x(2.0);

    let mut scaled_then_shifted = doc_from(&[(1.0, 0.0, 0.0)]);
    scaled_then_shifted.scale_x(2.0).shift_x(1.0);

    assert_eq!(shifted_then_scaled.max_x()?, 4.0);
    assert_eq!(scaled_then_shifted.max_x()?, 3.0);
    Ok(())
}

#[test]
fn test_mirror_then_encode() -> Result<()> {
    let mut doc = doc_from(&[(0.0, 0.0, 0.0), (1.0, 0.5, 0.0), (2.0, 1.0, 0.0)]);
    doc.set_name("Swell").mirror().clamp();
    assert_eq!(doc.point_count(), 6);
    assert_eq!(doc.max_x()?, 2.0);

    let back = CurveDocument::from_bytes(&doc.to_bytes()?)?;
    assert_eq!(back, doc);
    Ok(())
}

#[test]
fn test_clamp_replaces_nan() {
    let mut doc = CurveDocument::new();
    doc.add_point(CurvePoint::new(0.0, f64::NAN, f64::NAN));
    doc.clamp();
    assert_eq!(triples(&doc), [(0.0, 0.0, 0.0)]);
}

#[test]
fn test_empty_document_errors() {
    let mut doc = CurveDocument::new();
    assert_eq!(doc.min_y(), Err(CurveError::EmptyCurve));
    assert_eq!(
        doc.fit_in_y_range(0.0, 1.0).map(|_| ()),
        Err(CurveError::EmptyCurve)
    );
    assert_eq!(
        doc.get(0),
        Err(CurveError::IndexOutOfRange { index: 0, len: 0 })
    );
}

#[test]
fn test_empty_tags_emit_zero_count() -> Result<()> {
    let doc = CurveDocument::new();
    assert!(doc.tags().is_empty());
    let bytes = codec::encode(&doc)?;

    let pos = bytes
        .windows(field::TAGS.len())
        .position(|w| w == field::TAGS)
        .ok_or_else(|| anyhow::anyhow!("tags field missing"))?;
    let after = &bytes[pos + field::TAGS.len()..];
    assert_eq!(after[0], kind::LIST);
    assert_eq!(after[1], 0);
    Ok(())
}

#[test]
fn test_corrupted_header_is_format_error() -> Result<()> {
    let mut doc = CurveDocument::new();
    doc.add_point((0.0, 1.0));
    let mut bytes = doc.to_bytes()?;
    bytes[5] ^= 0xff;
    assert_eq!(
        CurveDocument::from_bytes(&bytes),
        Err(FormatError::HeaderMismatch)
    );
    Ok(())
}

fn arb_points() -> impl Strategy<Value = Vec<(f64, f64, f64)>> {
    prop::collection::vec((-100.0f64..100.0, -3.0f64..3.0, -3.0f64..3.0), 0..32)
}

fn arb_unbounded() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => -3.0f64..3.0,
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
    ]
}

/// Points whose y and slope may be NaN or infinite.
fn arb_unbounded_points() -> impl Strategy<Value = Vec<(f64, f64, f64)>> {
    prop::collection::vec((-100.0f64..100.0, arb_unbounded(), arb_unbounded()), 0..32)
}

proptest! {
    #[test]
    fn prop_clamp_is_idempotent_and_bounded(points in arb_unbounded_points()) {
        let mut once = doc_from(&points);
        once.clamp();
        let mut twice = once.clone();
        twice.clamp();
        prop_assert_eq!(&once, &twice);
        for p in once.points() {
            prop_assert!((0.0..=1.0).contains(&p.y));
            prop_assert!((-1.0..=1.0).contains(&p.slope));
        }
    }

    #[test]
    fn prop_clamp_leaves_x(points in arb_unbounded_points()) {
        let mut doc = doc_from(&points);
        doc.clamp();
        let xs: Vec<f64> = doc.points().iter().map(|p| p.x).collect();
        let expected: Vec<f64> = points.iter().map(|p| p.0).collect();
        prop_assert_eq!(xs, expected);
    }

    #[test]
    fn prop_sort_is_idempotent_and_ordered(points in arb_points()) {
        let mut once = doc_from(&points);
        once.sort();
        let mut twice = once.clone();
        twice.sort();
        prop_assert_eq!(&once, &twice);
        for pair in once.points().windows(2) {
            prop_assert!(pair[0].x <= pair[1].x);
        }
    }

    #[test]
    fn prop_insert_point_at_x_keeps_sorted(points in arb_points(), x in -100.0f64..100.0) {
        let mut doc = doc_from(&points);
        doc.sort().insert_point_at_x((x, 0.5));
        prop_assert_eq!(doc.point_count(), points.len() + 1);
        for pair in doc.points().windows(2) {
            prop_assert!(pair[0].x <= pair[1].x);
        }
    }
}
