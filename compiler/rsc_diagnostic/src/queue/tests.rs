use super::*;
use crate::{ErrorCode, Severity};
use pretty_assertions::assert_eq;
use rsc_ir::{Location, NodeId};

fn err(node: u32, line: u32) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2001)
        .with_message("type resolution exceeded recursion limit")
        .with_node(NodeId::new(node))
        .with_label(Location::source(0, line, 1), "here")
}

#[test]
fn test_duplicates_are_dropped() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.add(err(1, 1)));
    assert!(!queue.add(err(1, 1)));
    assert!(queue.add(err(2, 1)));
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.error_count(), 2);
}

#[test]
fn test_unlimited_keeps_duplicates() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    assert!(queue.add(err(1, 1)));
    assert!(queue.add(err(1, 1)));
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_error_limit() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 2,
        deduplicate: false,
    });
    assert!(queue.add(err(1, 1)));
    assert!(queue.add(err(2, 2)));
    assert!(queue.limit_reached());
    assert!(!queue.add(err(3, 3)));

    // Warnings still get through.
    let warning = Diagnostic::warning(ErrorCode::E2002).with_message("note this");
    assert!(queue.add(warning));
    assert_eq!(queue.len(), 3);
}

#[test]
fn test_flush_sorts_and_clears() {
    let mut queue = DiagnosticQueue::new();
    queue.add(err(1, 9));
    queue.add(err(2, 3));
    queue.add(err(3, 5));

    let flushed = queue.flush();
    let lines: Vec<_> = flushed
        .iter()
        .filter_map(|d| d.primary_location())
        .map(Location::line_col)
        .map(|(line, _)| line)
        .collect();
    assert_eq!(lines, vec![3, 5, 9]);
    assert!(queue.is_empty());
    assert!(!queue.has_errors());
}

#[test]
fn test_peek_does_not_clear() {
    let mut queue = DiagnosticQueue::new();
    queue.add(err(1, 1));
    assert_eq!(queue.peek().count(), 1);
    assert_eq!(queue.peek().next().map(|d| d.severity), Some(Severity::Error));
    assert_eq!(queue.len(), 1);
}
