//! `from_target`: declarations for targets of unknown origin.

use crate::helpers::fake_tree::*;
use syster_decl::declaration::{Inconsistency, NodeRole, RecordingSink};

#[test]
fn test_node_without_name_capability_has_no_declaration() {
    let sink = RecordingSink::new();
    let plain = node("expr", 0, 0, 10);

    assert!(builder(&sink).from_target(&plain).is_none());
    assert!(sink.is_empty());
}

#[test]
fn test_anonymous_owner_has_no_declaration() {
    let sink = RecordingSink::new();
    let anonymous = owner("part", 0, 0, 10, None);

    assert!(builder(&sink).from_target(&anonymous).is_none());
    assert!(sink.is_empty(), "absence of a name is not an inconsistency");
}

#[test]
fn test_name_declares_itself_over_full_length() {
    let sink = RecordingSink::new();
    let name = node("name", 0, 10, 15);
    let target = owner("part def", 0, 0, 30, Some(name.clone()));

    let declaration = builder(&sink).from_target(&target).unwrap();

    assert_eq!(declaration.declaring_node(), &name);
    assert_eq!(declaration.declaration_range(), range(0, 5));
    assert_eq!(declaration.symbol().node(), &target);
    assert!(sink.is_empty());
}

#[test]
fn test_detached_name_is_reported_once() {
    let sink = RecordingSink::new();
    let target = owner("part def", 0, 0, 30, Some(detached("name", 0, 5)));

    assert!(builder(&sink).from_target(&target).is_none());

    let reports = sink.take();
    assert_eq!(reports.len(), 1);
    assert!(matches!(
        &reports[0],
        Inconsistency::DetachedNode {
            role: NodeRole::Identifying,
            ..
        }
    ));
}

#[test]
fn test_repeated_calls_are_value_equal() {
    let sink = RecordingSink::new();
    let target = owner("part def", 0, 0, 30, Some(node("name", 0, 10, 15)));
    let builder = builder(&sink);

    assert_eq!(builder.from_target(&target), builder.from_target(&target));
}
