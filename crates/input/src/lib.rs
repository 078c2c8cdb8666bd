//! Pointer input module (engine-facing).
//!
//! This module is intentionally independent of any windowing or device
//! layer. A collaborator converts screen positions to grid coordinates
//! (nearest-cell rounding included) and feeds the discrete event stream to
//! [`PointerTracker`], which turns it into selection and hover actions. The
//! tracker re-checks bounds on every event and silently drops anything
//! outside the board, so a sloppy collaborator cannot corrupt a gesture.
//!
//! A selection is a click: a press and a release on the same cell. Pressing
//! one cell and releasing over another disarms the gesture without
//! selecting. Hover transitions are reported as leave/enter pairs for the
//! presentation layer's highlight effect.
//!
//! # Example
//!
//! ```
//! use blockpop_input::PointerTracker;
//! use blockpop_types::{GridPos, InputAction, PointerEvent};
//!
//! let mut tracker = PointerTracker::new(4, 4);
//! let cell = GridPos::new(2, 1);
//!
//! let actions = tracker.handle_event(PointerEvent::Moved(Some(cell)));
//! assert_eq!(actions.as_slice(), &[InputAction::HoverEnter(cell)]);
//!
//! tracker.handle_event(PointerEvent::Down(cell));
//! let actions = tracker.handle_event(PointerEvent::Up(cell));
//! assert_eq!(actions.as_slice(), &[InputAction::Select(cell)]);
//! ```

use arrayvec::ArrayVec;

use blockpop_types::{GridPos, InputAction, PointerEvent};

/// Most actions a single event can yield (a hover move is leave + enter).
pub const MAX_ACTIONS_PER_EVENT: usize = 2;

/// Actions produced by one pointer event.
pub type ActionBatch = ArrayVec<InputAction, MAX_ACTIONS_PER_EVENT>;

/// Tracks the pointer gesture state between discrete events.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    width: u8,
    height: u8,
    hover: Option<GridPos>,
    armed: Option<GridPos>,
}

impl PointerTracker {
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            hover: None,
            armed: None,
        }
    }

    /// Cell currently under the pointer, if any.
    pub fn hover(&self) -> Option<GridPos> {
        self.hover
    }

    /// Cell a press is armed on, if any.
    pub fn armed(&self) -> Option<GridPos> {
        self.armed
    }

    fn validate(&self, pos: GridPos) -> Option<GridPos> {
        let in_bounds =
            pos.x >= 0 && pos.y >= 0 && pos.x < self.width as i8 && pos.y < self.height as i8;
        in_bounds.then_some(pos)
    }

    /// Consume one event and report the actions it produced.
    pub fn handle_event(&mut self, event: PointerEvent) -> ActionBatch {
        let mut actions = ActionBatch::new();
        match event {
            PointerEvent::Moved(pos) => {
                let pos = pos.and_then(|p| self.validate(p));
                if pos != self.hover {
                    if let Some(prev) = self.hover {
                        actions.push(InputAction::HoverLeave(prev));
                    }
                    if let Some(next) = pos {
                        actions.push(InputAction::HoverEnter(next));
                    }
                    self.hover = pos;
                }
            }
            PointerEvent::Down(pos) => {
                self.armed = self.validate(pos);
            }
            PointerEvent::Up(pos) => {
                if let Some(armed) = self.armed.take() {
                    if self.validate(pos) == Some(armed) {
                        actions.push(InputAction::Select(armed));
                    }
                }
            }
        }
        actions
    }
}
