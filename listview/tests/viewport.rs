use listview::{DEFAULT_VISIBLE, Viewport};
use proptest::prelude::*;

/// Check the invariants that must hold after any cursor-moving call.
fn assert_follow_invariants(vp: &Viewport) {
    if vp.total() == 0 {
        assert_eq!(vp.cursor(), 0);
        assert_eq!(vp.offset(), 0);
        return;
    }
    assert!(vp.cursor() < vp.total(), "cursor {} past total {}", vp.cursor(), vp.total());
    assert!(vp.offset() <= vp.total().saturating_sub(vp.visible()));
    if vp.visible() > 0 {
        assert!(vp.offset() <= vp.cursor(), "offset {} > cursor {}", vp.offset(), vp.cursor());
        assert!(vp.cursor() < vp.offset() + vp.visible());
    }
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_default_viewport() {
    let vp = Viewport::default();
    assert_eq!(vp.visible(), DEFAULT_VISIBLE);
    assert_eq!(vp.total(), 0);
    assert_eq!(vp.cursor(), 0);
    assert_eq!(vp.range(), 0..0);
    assert!(vp.is_empty());
}

#[test]
fn test_new_starts_at_top() {
    let vp = Viewport::new(5, 20);
    assert_eq!(vp.cursor(), 0);
    assert_eq!(vp.offset(), 0);
    assert_eq!(vp.range(), 0..5);
}

// ============================================================================
// Line movement
// ============================================================================

#[test]
fn test_move_down_follows_by_one() {
    let mut vp = Viewport::new(5, 20);
    for _ in 0..7 {
        vp.move_down();
    }
    assert_eq!(vp.cursor(), 7);
    assert_eq!(vp.offset(), 3);
}

#[test]
fn test_move_up_follows_by_one() {
    let mut vp = Viewport::new(5, 20);
    vp.move_to_bottom();
    for _ in 0..5 {
        vp.move_up();
    }
    assert_eq!(vp.cursor(), 14);
    assert_eq!(vp.offset(), 14);
}

#[test]
fn test_moves_do_not_wrap() {
    let mut vp = Viewport::new(5, 3);
    vp.move_up();
    assert_eq!(vp.cursor(), 0);

    for _ in 0..5 {
        vp.move_down();
    }
    assert_eq!(vp.cursor(), 2);
    assert_eq!(vp.offset(), 0);
}

// ============================================================================
// Re-homing
// ============================================================================

#[test]
fn test_move_to_bottom() {
    let mut vp = Viewport::new(5, 20);
    vp.move_to_bottom();
    assert_eq!(vp.cursor(), 19);
    assert_eq!(vp.offset(), 15);
}

#[test]
fn test_move_to_top_rehomes() {
    let mut vp = Viewport::new(5, 20);
    vp.move_to_bottom();
    vp.move_to_top();
    assert_eq!(vp.cursor(), 0);
    assert_eq!(vp.offset(), 0);
}

#[test]
fn test_move_to_bottom_short_list() {
    let mut vp = Viewport::new(5, 3);
    vp.move_to_bottom();
    assert_eq!(vp.cursor(), 2);
    assert_eq!(vp.offset(), 0);
}

// ============================================================================
// Paging
// ============================================================================

#[test]
fn test_page_down_uses_follow_rule() {
    let mut vp = Viewport::new(5, 20);
    vp.page_down();
    assert_eq!(vp.cursor(), 5);
    assert_eq!(vp.offset(), 1);

    vp.page_down();
    assert_eq!(vp.cursor(), 10);
    assert_eq!(vp.offset(), 6);

    vp.page_down();
    vp.page_down();
    vp.page_down();
    assert_eq!(vp.cursor(), 19);
    assert_eq!(vp.offset(), 15);
}

#[test]
fn test_page_up_clamps_at_top() {
    let mut vp = Viewport::new(5, 20);
    vp.move_to_bottom();

    vp.page_up();
    assert_eq!(vp.cursor(), 14);
    assert_eq!(vp.offset(), 14);

    vp.page_up();
    vp.page_up();
    vp.page_up();
    assert_eq!(vp.cursor(), 0);
    assert_eq!(vp.offset(), 0);
}

#[test]
fn test_half_page() {
    let mut vp = Viewport::new(10, 20);
    vp.half_page_down();
    assert_eq!(vp.cursor(), 5);
    assert_eq!(vp.offset(), 0);

    vp.half_page_up();
    assert_eq!(vp.cursor(), 0);
}

#[test]
fn test_half_page_moves_at_least_one() {
    let mut vp = Viewport::new(1, 4);
    vp.half_page_down();
    assert_eq!(vp.cursor(), 1);
    assert_eq!(vp.offset(), 1);
}

// ============================================================================
// Capacity changes
// ============================================================================

#[test]
fn test_set_total_pulls_cursor_back() {
    let mut vp = Viewport::new(5, 20);
    vp.set_cursor(18);
    assert_eq!(vp.offset(), 14);

    vp.set_total(10);
    assert_eq!(vp.cursor(), 9);
    assert_eq!(vp.offset(), 5);
    assert_follow_invariants(&vp);
}

#[test]
fn test_set_total_zero_resets() {
    let mut vp = Viewport::new(5, 20);
    vp.move_to_bottom();
    vp.set_total(0);
    assert_eq!(vp.cursor(), 0);
    assert_eq!(vp.offset(), 0);
    assert_eq!(vp.range(), 0..0);
}

#[test]
fn test_set_total_grow_keeps_cursor() {
    let mut vp = Viewport::new(5, 10);
    vp.set_cursor(7);
    vp.set_total(50);
    assert_eq!(vp.cursor(), 7);
    assert_eq!(vp.offset(), 3);
}

#[test]
fn test_set_visible_zero_does_not_panic() {
    let mut vp = Viewport::new(5, 20);
    vp.set_cursor(7);
    vp.set_visible(0);
    assert!(vp.range().is_empty());

    vp.move_down();
    vp.page_down();
    vp.page_up();
    vp.half_page_down();
    vp.scroll_to(12);
    vp.move_to_bottom();
    assert_eq!(vp.cursor(), 19);
    assert!(vp.offset() <= vp.total());
}

#[test]
fn test_set_visible_larger_than_total() {
    let mut vp = Viewport::new(5, 3);
    vp.set_cursor(2);
    vp.set_visible(10);
    assert_eq!(vp.offset(), 0);
    assert_eq!(vp.range(), 0..3);
    assert!(!vp.has_scroll());
}

#[test]
fn test_set_visible_shrink_keeps_cursor_on_screen() {
    let mut vp = Viewport::new(10, 20);
    vp.set_cursor(9);
    vp.set_visible(4);
    assert_eq!(vp.cursor(), 9);
    assert_eq!(vp.offset(), 6);
}

// ============================================================================
// Explicit scrolling
// ============================================================================

#[test]
fn test_scroll_to_moves_offset_only() {
    let mut vp = Viewport::new(5, 20);
    vp.scroll_to(12);
    assert_eq!(vp.offset(), 8);
    assert_eq!(vp.cursor(), 0);

    // Already visible
    vp.scroll_to(10);
    assert_eq!(vp.offset(), 8);

    vp.scroll_to(2);
    assert_eq!(vp.offset(), 2);

    // Out of range
    vp.scroll_to(25);
    assert_eq!(vp.offset(), 2);
}

#[test]
fn test_cursor_move_reattaches_after_scroll() {
    let mut vp = Viewport::new(5, 20);
    vp.scroll_to(12);
    vp.move_down();
    assert_eq!(vp.cursor(), 1);
    assert_eq!(vp.offset(), 1);
    assert_follow_invariants(&vp);
}

#[test]
fn test_set_offset_clamps() {
    let mut vp = Viewport::new(5, 20);
    vp.set_offset(100);
    assert_eq!(vp.offset(), 15);
    assert_eq!(vp.cursor(), 0);
    assert_eq!(vp.range(), 15..20);
}

// ============================================================================
// Predicates
// ============================================================================

#[test]
fn test_scroll_predicates() {
    let mut vp = Viewport::new(5, 20);
    assert!(!vp.can_scroll_up());
    assert!(vp.can_scroll_down());
    assert!(vp.has_scroll());

    vp.move_to_bottom();
    assert!(vp.can_scroll_up());
    assert!(!vp.can_scroll_down());

    let short = Viewport::new(5, 5);
    assert!(!short.can_scroll_up());
    assert!(!short.can_scroll_down());
    assert!(!short.has_scroll());
}

#[test]
fn test_is_visible() {
    let mut vp = Viewport::new(5, 20);
    vp.set_offset(3);
    assert!(!vp.is_visible(2));
    assert!(vp.is_visible(3));
    assert!(vp.is_visible(7));
    assert!(!vp.is_visible(8));
    assert!(!vp.is_visible(25));
}

// ============================================================================
// Empty viewport
// ============================================================================

#[test]
fn test_empty_viewport_operations_are_noops() {
    let mut vp = Viewport::new(5, 0);
    vp.move_down();
    vp.move_up();
    vp.page_down();
    vp.page_up();
    vp.move_to_bottom();
    vp.move_to_top();
    vp.scroll_to(3);
    vp.set_cursor(4);
    assert_eq!(vp.cursor(), 0);
    assert_eq!(vp.offset(), 0);
    assert_eq!(vp.range(), 0..0);
    assert!(!vp.can_scroll_up());
    assert!(!vp.can_scroll_down());
}

// ============================================================================
// Properties
// ============================================================================

#[derive(Debug, Clone)]
enum Op {
    Up,
    Down,
    PageUp,
    PageDown,
    HalfPageUp,
    HalfPageDown,
    Top,
    Bottom,
    Cursor(usize),
    Total(usize),
    Visible(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Up),
        Just(Op::Down),
        Just(Op::PageUp),
        Just(Op::PageDown),
        Just(Op::HalfPageUp),
        Just(Op::HalfPageDown),
        Just(Op::Top),
        Just(Op::Bottom),
        (0usize..80).prop_map(Op::Cursor),
        (0usize..60).prop_map(Op::Total),
        (1usize..12).prop_map(Op::Visible),
    ]
}

fn run(vp: &mut Viewport, op: &Op) {
    match *op {
        Op::Up => vp.move_up(),
        Op::Down => vp.move_down(),
        Op::PageUp => vp.page_up(),
        Op::PageDown => vp.page_down(),
        Op::HalfPageUp => vp.half_page_up(),
        Op::HalfPageDown => vp.half_page_down(),
        Op::Top => vp.move_to_top(),
        Op::Bottom => vp.move_to_bottom(),
        Op::Cursor(index) => vp.set_cursor(index),
        Op::Total(total) => vp.set_total(total),
        Op::Visible(visible) => vp.set_visible(visible),
    }
}

proptest! {
    #[test]
    fn test_cursor_containment_and_follow_under_random_moves(
        total in 0usize..60,
        visible in 0usize..12,
        ops in prop::collection::vec(op(), 0..200),
    ) {
        let mut vp = Viewport::new(visible, total);
        for op in &ops {
            run(&mut vp, op);
            assert_follow_invariants(&vp);
        }
    }

    #[test]
    fn test_single_steps_move_by_one(
        total in 1usize..60,
        visible in 1usize..12,
        start in 0usize..60,
    ) {
        let mut vp = Viewport::new(visible, total);
        vp.set_cursor(start);
        let before = vp.cursor();
        vp.move_down();
        prop_assert_eq!(vp.cursor(), (before + 1).min(total - 1));
        vp.move_up();
        prop_assert_eq!(vp.cursor(), if before + 1 < total { before } else { before.saturating_sub(1) });
    }
}
