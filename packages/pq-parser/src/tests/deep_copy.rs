use super::*;

/// P7: mutations on a deep-copied session are never visible on the original.
#[test]
fn deep_copy_is_independent() {
    let mut session = ParseSession::empty();
    let root = session
        .start_context(NodeKind::ListExpression, 0, None, None)
        .unwrap();
    let first = session
        .start_context(NodeKind::Identifier, 0, None, Some(root.id()))
        .unwrap();
    session
        .end_context(first.id(), leaf_ast(first.id(), NodeKind::Identifier, "a"))
        .unwrap();

    let mut snapshot = session.deep_copy();

    // Mutate only the snapshot: add a sibling and close the root.
    let second = snapshot
        .start_context(NodeKind::Identifier, 1, None, Some(root.id()))
        .unwrap();
    snapshot
        .end_context(second.id(), leaf_ast(second.id(), NodeKind::Identifier, "b"))
        .unwrap();
    snapshot
        .end_context(
            root.id(),
            non_leaf_ast(root.id(), NodeKind::ListExpression, vec![first.id(), second.id()]),
        )
        .unwrap();

    // The original still has an open root with only one child.
    assert!(session.map().maybe_context(root.id()).is_some());
    assert_eq!(session.map().expect_children(root.id()).unwrap(), &[first.id()]);
    assert_eq!(session.id_counter(), 2);

    // The snapshot reflects the later mutations.
    assert!(snapshot.map().maybe_ast(root.id()).is_some());
    assert_eq!(
        snapshot.map().expect_children(root.id()).unwrap(),
        &[first.id(), second.id()]
    );
    assert_eq!(snapshot.id_counter(), 3);
}

/// The shared, immutable ast payload for a node closed before the copy is
/// byte-identical between the two sessions.
#[test]
fn deep_copy_shares_closed_ast_payloads() {
    let mut session = ParseSession::empty();
    let context = session
        .start_context(NodeKind::Identifier, 0, None, None)
        .unwrap();
    session
        .end_context(context.id(), leaf_ast(context.id(), NodeKind::Identifier, "shared"))
        .unwrap();

    let snapshot = session.deep_copy();

    assert_eq!(
        session.map().expect_ast(context.id()).unwrap(),
        snapshot.map().expect_ast(context.id()).unwrap()
    );
}
