//! Popover registry for inline validation and help messages.
//!
//! A popover is a transient box anchored above a target widget. The registry
//! tracks (target, popover) pairs; rendering resolves each target to its
//! on-screen rect and places the box centered above it.

use ratatui::layout::Rect;

/// Identity of a widget a popover can anchor to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipTarget {
    /// The compose-bar message input.
    MessageInput,
    /// The coordinate input inside the manual-entry modal.
    CoordsInput,
}

/// Title and body of one popover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopoverMessage {
    /// Bold first line.
    pub title: String,
    /// Body text.
    pub content: String,
}

impl PopoverMessage {
    /// Build a message from any string-ish parts.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// One registered (target, popover) pair.
#[derive(Debug, Clone)]
pub struct Popover {
    /// The anchor widget.
    pub target: TooltipTarget,
    /// The displayed message.
    pub message: PopoverMessage,
}

/// The popover registry.
#[derive(Debug, Default)]
pub struct Tooltip {
    popovers: Vec<Popover>,
}

impl Tooltip {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a popover for a target.
    ///
    /// No dedup here: calling show twice yields two entries. Toggle-driven
    /// callers get at-most-one per target; direct callers remove first.
    pub fn show(&mut self, message: PopoverMessage, target: TooltipTarget) {
        self.popovers.push(Popover { target, message });
    }

    /// Drop every popover registered for a target and clear its active
    /// marker. No-op when none is registered.
    pub fn remove(&mut self, target: TooltipTarget) {
        self.popovers.retain(|p| p.target != target);
    }

    /// Remove the target's popover if present, otherwise show one.
    pub fn toggle(&mut self, message: PopoverMessage, target: TooltipTarget) {
        if self.popover_for(target).is_some() {
            self.remove(target);
        } else {
            self.show(message, target);
        }
    }

    /// The first popover registered for a target.
    pub fn popover_for(&self, target: TooltipTarget) -> Option<&Popover> {
        self.popovers.iter().find(|p| p.target == target)
    }

    /// Whether the target should render its attention marker (the red
    /// border while a popover points at it).
    pub fn is_marked(&self, target: TooltipTarget) -> bool {
        self.popover_for(target).is_some()
    }

    /// All registered popovers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Popover> {
        self.popovers.iter()
    }

    /// Number of registered popovers.
    pub fn len(&self) -> usize {
        self.popovers.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.popovers.is_empty()
    }
}

/// Place a popover of the given size centered above its target with a
/// one-row gap, clamped into the drawable area.
pub fn popover_rect(target: Rect, width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let center_x = target.x + target.width / 2;
    let max_x = area.x + area.width - width;
    let x = center_x.saturating_sub(width / 2).clamp(area.x, max_x);
    let y = target.y.saturating_sub(height + 1).max(area.y);

    Rect {
        x,
        y,
        width,
        height,
    }
}
