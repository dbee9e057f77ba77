//! Integration tests for drag-to-move
//!
//! These tests verify the controller's calls on the window host:
//! - Window placement while dragging
//! - Cursor feedback on move and release
//! - Unheld moves being left alone
//! - Routing between the close button and the body

use glasspane::utils::ButtonStyle;
use glasspane::window::Layout;
use glasspane::{CursorShape, DragController, PointerAction, PointerRouter};
use glasspane_integration_tests::mock_events::{self, replay, PointerStep};
use glasspane_integration_tests::MockHost;
use mockall::predicate::eq;
use mockall::Sequence;

#[test]
fn test_press_and_drag_moves_window() {
    let mut host = MockHost::new();
    let mut seq = Sequence::new();

    host.expect_set_cursor_shape()
        .with(eq(CursorShape::MoveAll))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    host.expect_set_window_position()
        .with(eq(100), eq(50))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());

    let mut controller = DragController::new();
    let consumed = replay(
        &mut controller,
        &mut host,
        &[PointerStep::Press(10, 10), PointerStep::Move(110, 60, true)],
    );

    assert_eq!(consumed, vec![true]);
}

#[test]
fn test_release_then_unheld_move_does_nothing() {
    let mut host = MockHost::new();

    host.expect_set_cursor_shape()
        .with(eq(CursorShape::Default))
        .times(1)
        .return_const(());
    host.expect_set_window_position().never();

    let mut controller = DragController::new();
    let consumed = replay(
        &mut controller,
        &mut host,
        &[
            PointerStep::Press(10, 10),
            PointerStep::Release,
            PointerStep::Move(200, 200, false),
        ],
    );

    assert_eq!(consumed, vec![false]);
    assert!(!controller.is_dragging());
}

#[test]
fn test_second_press_replaces_anchor() {
    let mut host = MockHost::new();
    let mut seq = Sequence::new();

    host.expect_set_cursor_shape().return_const(());
    host.expect_set_window_position()
        .with(eq(45), eq(45))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    host.expect_set_window_position()
        .with(eq(30), eq(30))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());

    let mut controller = DragController::new();
    replay(
        &mut controller,
        &mut host,
        &[
            PointerStep::Press(5, 5),
            PointerStep::Move(50, 50, true),
            PointerStep::Press(20, 20),
            PointerStep::Move(50, 50, true),
        ],
    );

    assert_eq!(controller.state().anchor(), Some((20, 20)));
}

#[test]
fn test_full_drag_sequence() {
    let mut host = MockHost::new();
    let mut seq = Sequence::new();

    for (x, y) in [(90, 90), (140, 110), (190, 130)] {
        host.expect_set_cursor_shape()
            .with(eq(CursorShape::MoveAll))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        host.expect_set_window_position()
            .with(eq(x), eq(y))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
    }
    host.expect_set_cursor_shape()
        .with(eq(CursorShape::Default))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());

    let mut controller = DragController::new();
    let consumed = replay(&mut controller, &mut host, &mock_events::generate_drag_sequence());

    assert_eq!(consumed, vec![true, true, true, false]);
}

#[test]
fn test_release_without_drag_resets_cursor_once() {
    let mut host = MockHost::new();

    host.expect_set_cursor_shape()
        .with(eq(CursorShape::Default))
        .times(1)
        .return_const(());
    host.expect_set_window_position().never();

    let mut controller = DragController::new();
    replay(&mut controller, &mut host, &[PointerStep::Release]);
}

/// 300x200 pane; the close button covers (107, 159) to (192, 189)
fn router() -> PointerRouter {
    PointerRouter::new(Layout::compute((300, 200), 1.0, &ButtonStyle::default()))
}

#[test]
fn test_close_click_never_touches_host() {
    let mut host = MockHost::new();
    host.expect_set_cursor_shape().never();
    host.expect_set_window_position().never();

    let mut router = router();
    assert_eq!(router.pressed(150, 170), PointerAction::ButtonArmed);
    assert_eq!(
        router.moved(300, 300, true, Some((400, 400)), &mut host),
        PointerAction::None
    );
    assert_eq!(router.released(150, 170, &mut host), PointerAction::Close);
    assert!(!router.drag().is_dragging());
}

#[test]
fn test_cancelled_close_click_does_not_close() {
    let mut host = MockHost::new();
    host.expect_set_cursor_shape().never();
    host.expect_set_window_position().never();

    let mut router = router();
    router.pressed(150, 170);
    assert_eq!(router.released(10, 10, &mut host), PointerAction::None);
}

#[test]
fn test_body_drag_through_router() {
    let mut host = MockHost::new();
    let mut seq = Sequence::new();

    // Window at (100, 200), grabbed at (10, 10)
    for (x, y) in [(120, 230), (145, 265)] {
        host.expect_set_cursor_shape()
            .with(eq(CursorShape::MoveAll))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        host.expect_set_window_position()
            .with(eq(x), eq(y))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
    }
    host.expect_set_cursor_shape()
        .with(eq(CursorShape::Default))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());

    let mut router = router();
    assert_eq!(router.pressed(10, 10), PointerAction::DragAnchored);
    assert_eq!(
        router.moved(30, 40, true, Some((100, 200)), &mut host),
        PointerAction::WindowMoved
    );
    // Reported origin lags behind; the commanded one is used
    assert_eq!(
        router.moved(35, 45, true, Some((100, 200)), &mut host),
        PointerAction::WindowMoved
    );
    assert_eq!(router.released(35, 45, &mut host), PointerAction::None);
}

#[test]
fn test_focus_loss_mid_drag_resets_cursor_once() {
    let mut host = MockHost::new();
    let mut seq = Sequence::new();

    host.expect_set_cursor_shape()
        .with(eq(CursorShape::MoveAll))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    host.expect_set_window_position()
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    host.expect_set_cursor_shape()
        .with(eq(CursorShape::Default))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());

    let mut router = router();
    router.pressed(10, 10);
    router.moved(30, 40, true, Some((100, 200)), &mut host);
    router.focus_lost(&mut host);
    router.focus_lost(&mut host);

    assert!(!router.drag().is_dragging());
}
