use super::*;
use tracing_test::traced_test;

/// The Context Lifecycle emits trace-level events a host editor or test
/// harness can subscribe to, without the core depending on any concrete
/// logging backend itself.
#[traced_test]
#[test]
fn lifecycle_operations_emit_trace_events() {
    let mut session = ParseSession::empty();
    let context = session
        .start_context(NodeKind::Identifier, 0, None, None)
        .unwrap();
    session
        .end_context(context.id(), leaf_ast(context.id(), NodeKind::Identifier, "x"))
        .unwrap();

    assert!(logs_contain("started context"));
    assert!(logs_contain("closed context"));
}
