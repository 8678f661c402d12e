use crate::{PopoverMessage, Tooltip, TooltipTarget, popover_rect};

use ratatui::layout::Rect;

fn message() -> PopoverMessage {
    PopoverMessage::new("Title", "Content")
}

/// WHAT: Toggling twice on one target returns it to zero popovers
/// WHY: Toggle is the idempotent round trip the click handler relies on
#[test]
fn given_target_when_toggled_twice_then_no_popovers_remain() {
    // Given: An empty registry
    let mut tooltip = Tooltip::new();

    // When: Toggling the same target twice
    tooltip.toggle(message(), TooltipTarget::MessageInput);
    assert_eq!(tooltip.len(), 1);
    assert!(tooltip.is_marked(TooltipTarget::MessageInput));

    tooltip.toggle(message(), TooltipTarget::MessageInput);

    // Then: Nothing remains and the marker is cleared
    assert!(tooltip.is_empty());
    assert!(!tooltip.is_marked(TooltipTarget::MessageInput));
}

/// WHAT: show() appends without dedup
/// WHY: Dedup is the caller's responsibility via toggle, by contract
#[test]
fn given_existing_popover_when_showing_again_then_duplicate_created() {
    let mut tooltip = Tooltip::new();

    tooltip.show(message(), TooltipTarget::CoordsInput);
    tooltip.show(message(), TooltipTarget::CoordsInput);

    assert_eq!(tooltip.len(), 2);
}

/// WHAT: remove() drops every entry for the target and nothing else
/// WHY: A target's popovers must all disappear with its marker
#[test]
fn given_mixed_targets_when_removing_one_then_only_it_cleared() {
    // Given: Two entries on one target, one on another
    let mut tooltip = Tooltip::new();
    tooltip.show(message(), TooltipTarget::CoordsInput);
    tooltip.show(message(), TooltipTarget::CoordsInput);
    tooltip.show(message(), TooltipTarget::MessageInput);

    // When: Removing the doubled target
    tooltip.remove(TooltipTarget::CoordsInput);

    // Then: Only the other target's entry survives
    assert_eq!(tooltip.len(), 1);
    assert!(!tooltip.is_marked(TooltipTarget::CoordsInput));
    assert!(tooltip.is_marked(TooltipTarget::MessageInput));

    // And: Removing a target with no entries is a no-op
    tooltip.remove(TooltipTarget::CoordsInput);
    assert_eq!(tooltip.len(), 1);
}

/// WHAT: A popover centers above its target with a one-row gap
/// WHY: The placement contract of the popover geometry
#[test]
fn given_roomy_area_when_placing_popover_then_centered_above_with_gap() {
    // Given: A target well inside the drawable area
    let area = Rect::new(0, 0, 80, 24);
    let target = Rect::new(10, 10, 20, 3);

    // When: Placing a 10x4 popover
    let rect = popover_rect(target, 10, 4, area);

    // Then: Horizontally centered, one empty row above the target
    assert_eq!(rect, Rect::new(15, 5, 10, 4));
    assert_eq!(target.y - (rect.y + rect.height), 1);
}

/// WHAT: Placement clamps into the drawable area
/// WHY: Popovers near edges must stay on screen
#[test]
fn given_edge_targets_when_placing_popover_then_clamped_on_screen() {
    let area = Rect::new(0, 0, 80, 24);

    // Left edge: centering would go negative
    let left = popover_rect(Rect::new(0, 10, 2, 1), 10, 4, area);
    assert_eq!(left.x, 0);

    // Top edge: no room above the target
    let top = popover_rect(Rect::new(10, 1, 10, 1), 10, 4, area);
    assert_eq!(top.y, 0);

    // Right edge: box must not overflow the area
    let right = popover_rect(Rect::new(76, 10, 4, 1), 10, 4, area);
    assert!(right.x + right.width <= area.width);
}
