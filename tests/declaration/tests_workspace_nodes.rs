//! Declaration building over parsed documents.

use crate::helpers::workspace_helpers::*;
use syster_decl::base::{TextRange, TextSize};
use syster_decl::declaration::{
    DeclarationBuilder, ElementTarget, Inconsistency, NodeRole, OpaqueTarget, RecordingSink,
};
use syster_decl::parser::SyntaxKind;
use syster_decl::syntax::TreeNode;

fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(start.into(), end.into())
}

#[test]
fn test_from_target_declares_name_node() {
    let source = "package Vehicles { part def Car; }";
    let (ws, file) = workspace_from_source(source);
    let sink = RecordingSink::new();
    let builder = DeclarationBuilder::for_workspace(&ws, &sink);

    let car = owner_named(&ws, file, "Car");
    let declaration = builder.from_target(&car).unwrap();

    assert_eq!(declaration.declaring_node().kind(), SyntaxKind::NAME);
    assert_eq!(declaration.declaration_range(), range(0, 3));
    assert_eq!(declaration.symbol().name(), Some("Car"));
    assert_eq!(declaration.symbol().kind(), SyntaxKind::DEFINITION);
}

#[test]
fn test_from_declared_relative_to_package() {
    let source = "package Vehicles { part def Car; }";
    let (ws, file) = workspace_from_source(source);
    let sink = RecordingSink::new();
    let builder = DeclarationBuilder::for_workspace(&ws, &sink);

    let car = owner_named(&ws, file, "Car");
    let package = owner_named(&ws, file, "Vehicles");
    let declaration = builder.from_declared(&car, &package).unwrap();

    let expected_start = u32::from(offset_of(source, "Car"));
    assert_eq!(
        declaration.declaration_range(),
        range(expected_start, expected_start + 3)
    );
    assert!(sink.is_empty());
}

#[test]
fn test_from_declared_self_is_name_offset_in_owner() {
    let source = "package P {\n    part def 'Road Vehicle' :> Base;\n}";
    let (ws, file) = workspace_from_source(source);
    let sink = RecordingSink::new();
    let builder = DeclarationBuilder::for_workspace(&ws, &sink);

    let vehicle = owner_named(&ws, file, "Road Vehicle");
    let declaration = builder.from_declared(&vehicle, &vehicle).unwrap();

    // `part def ` precedes the name inside the definition
    assert_eq!(declaration.declaration_range(), range(9, 23));
}

#[test]
fn test_from_declared_across_documents() {
    let mut ws = syster_decl::syntax::Workspace::new();
    let a = ws.add_document("a.sysml", "part def A;").unwrap();
    let b = ws.add_document("b.sysml", "part a : A;").unwrap();
    let sink = RecordingSink::new();
    let builder = DeclarationBuilder::for_workspace(&ws, &sink);

    let definition = owner_named(&ws, a, "A");
    let usage = owner_named(&ws, b, "a");

    assert!(builder.from_declared(&definition, &usage).is_none());
    assert_eq!(sink.len(), 1);
    assert!(matches!(
        sink.reports()[0],
        Inconsistency::DocumentMismatch { .. }
    ));
}

#[test]
fn test_stale_owner_reports_detached_name() {
    let mut ws = syster_decl::syntax::Workspace::new();
    let file = ws.add_document("a.sysml", "part def A;").unwrap();
    let stale = owner_named(&ws, file, "A");
    ws.set_text(file, "part def A;\npart def B;").unwrap();

    let sink = RecordingSink::new();
    let builder = DeclarationBuilder::for_workspace(&ws, &sink);

    assert!(builder.from_target(&stale).is_none());
    let reports = sink.take();
    assert_eq!(reports.len(), 1);
    assert!(matches!(
        reports[0],
        Inconsistency::DetachedNode {
            role: NodeRole::Identifying,
            ..
        }
    ));
}

#[test]
fn test_stale_declaring_node_is_rejected() {
    let mut ws = syster_decl::syntax::Workspace::new();
    let file = ws.add_document("a.sysml", "package P { part def A; }").unwrap();
    let stale_package = owner_named(&ws, file, "P");
    ws.set_text(file, "package P { part def A; }").unwrap();

    let sink = RecordingSink::new();
    let builder = DeclarationBuilder::for_workspace(&ws, &sink);
    let fresh = owner_named(&ws, file, "A");

    assert!(builder.from_declared(&fresh, &stale_package).is_none());
    assert!(matches!(
        sink.reports()[0],
        Inconsistency::DetachedNode {
            role: NodeRole::Declaring,
            ..
        }
    ));
}

#[test]
fn test_element_target_from_reference_site() {
    let source = "part def Engine;\npart car { part e : Engine; }";
    let (ws, file) = workspace_from_source(source);
    let sink = RecordingSink::new();
    let builder = DeclarationBuilder::for_workspace(&ws, &sink);

    let engine = owner_named(&ws, file, "Engine");
    let target = ElementTarget::of(&engine);
    let root = ws.root(file).unwrap();

    let declaration = builder.from_external_target(&target, &root).unwrap();

    assert_eq!(declaration.declaration_range(), range(9, 15));
    assert_eq!(declaration.symbol().node(), &engine);
    assert_eq!(declaration.declaring_node(), &root);
}

#[test]
fn test_opaque_target_symbol_is_enclosing_owner() {
    let source = "part car { part e : Engine; }";
    let (ws, file) = workspace_from_source(source);
    let sink = RecordingSink::new();
    let builder = DeclarationBuilder::for_workspace(&ws, &sink);

    let typing = ws
        .node_at(file, offset_of(source, "Engine"))
        .and_then(|n| n.ancestors().find(|a| a.kind() == SyntaxKind::TYPING))
        .unwrap();

    let declaration = builder
        .from_external_target(&OpaqueTarget::new("Engine"), &typing)
        .unwrap();

    assert_eq!(declaration.declaration_range().len(), typing.text_len());
    assert_eq!(declaration.symbol().name(), Some("e"));
    assert_eq!(declaration.declaration_range().start(), TextSize::new(0));
}
