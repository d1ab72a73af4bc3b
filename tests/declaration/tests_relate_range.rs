//! `relate_range`: moving a name range into the declaring node's coordinates.

use rstest::rstest;

use crate::helpers::fake_tree::*;
use syster_decl::declaration::{Inconsistency, RecordingSink};

#[rstest]
#[case::nested_at_offset((10, 15), (0, 30), (0, 5), Some((10, 15)))]
#[case::nested_sub_range((10, 20), (5, 30), (2, 4), Some((7, 9)))]
#[case::touching_end((25, 30), (0, 30), (0, 5), Some((25, 30)))]
#[case::same_bounds((10, 15), (10, 15), (0, 5), Some((0, 5)))]
#[case::empty_range_at_start((10, 15), (10, 30), (0, 0), Some((0, 0)))]
#[case::escapes_bounds((5, 40), (10, 30), (0, 35), None)]
#[case::starts_before((5, 12), (10, 30), (0, 7), None)]
#[case::ends_after((28, 35), (10, 30), (0, 7), None)]
#[case::disjoint((40, 45), (0, 30), (0, 5), None)]
fn test_same_document(
    #[case] identifying: (u32, u32),
    #[case] declaring: (u32, u32),
    #[case] range_in_identifying: (u32, u32),
    #[case] expected: Option<(u32, u32)>,
) {
    let sink = RecordingSink::new();
    let identifying = node("identifying", 0, identifying.0, identifying.1);
    let declaring = node("declaring", 0, declaring.0, declaring.1);

    let related = builder(&sink).relate_range(
        &"target",
        &identifying,
        range(range_in_identifying.0, range_in_identifying.1),
        &declaring,
    );

    assert_eq!(related, expected.map(|(start, end)| range(start, end)));
    let expected_reports = if expected.is_some() { 0 } else { 1 };
    assert_eq!(sink.len(), expected_reports);
}

#[test]
fn test_escaping_range_reports_document_offsets() {
    let sink = RecordingSink::new();
    let identifying = node("identifying", 0, 5, 40);
    let declaring = node("declaring", 0, 10, 30);

    let related = builder(&sink).relate_range(&"target", &identifying, range(0, 35), &declaring);

    assert_eq!(related, None);
    let reports = sink.take();
    assert_eq!(reports.len(), 1);
    match &reports[0] {
        Inconsistency::RangeOutsideDeclaring {
            target,
            range: reported,
            bounds,
            ..
        } => {
            assert_eq!(target, "\"target\"");
            assert_eq!(*reported, range(5, 40));
            assert_eq!(*bounds, range(10, 30));
        }
        other => panic!("unexpected report: {other:?}"),
    }
}

#[rstest]
#[case::overlapping((0, 30), (0, 30))]
#[case::nested((10, 15), (0, 30))]
#[case::disjoint((100, 105), (0, 30))]
fn test_different_documents_never_relate(
    #[case] identifying: (u32, u32),
    #[case] declaring: (u32, u32),
) {
    let sink = RecordingSink::new();
    let identifying = node("identifying", 0, identifying.0, identifying.1);
    let declaring = node("declaring", 1, declaring.0, declaring.1);

    let related = builder(&sink).relate_range(&"target", &identifying, range(0, 5), &declaring);

    assert_eq!(related, None);
    let reports = sink.take();
    assert_eq!(reports.len(), 1);
    assert!(matches!(reports[0], Inconsistency::DocumentMismatch { .. }));
}

#[test]
fn test_identity_returns_range_unchanged() {
    let sink = RecordingSink::new();
    let declaring = node("declaring", 0, 100, 130);

    let related = builder(&sink).relate_range(&"target", &declaring, range(3, 8), &declaring);

    assert_eq!(related, Some(range(3, 8)));
    assert!(sink.is_empty());
}

#[test]
fn test_lookalike_node_does_not_take_identity_path() {
    let sink = RecordingSink::new();
    let declaring = detached("declaring", 0, 10);
    let lookalike = detached("declaring", 0, 10);

    let related = builder(&sink).relate_range(&"target", &lookalike, range(0, 4), &declaring);

    assert_eq!(related, None);
    assert_eq!(sink.len(), 1);
}

#[test]
fn test_identity_passes_range_longer_than_node_through() {
    let sink = RecordingSink::new();
    let declaring = node("declaring", 0, 0, 10);

    let related = builder(&sink).relate_range(&"target", &declaring, range(5, 12), &declaring);

    assert_eq!(related, Some(range(5, 12)));
    assert!(sink.is_empty());
}

#[test]
fn test_identity_skips_document_checks_for_detached_node() {
    let sink = RecordingSink::new();
    let declaring = detached("declaring", 0, 10);

    let related = builder(&sink).relate_range(&"target", &declaring, range(0, 4), &declaring);

    assert_eq!(related, Some(range(0, 4)));
    assert!(sink.is_empty());
}
