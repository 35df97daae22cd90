use egui::{Context, Pos2, Rect};

/// A canvas pointer event, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed inside the canvas
    Down(Pos2),
    /// Pointer moved while a gesture is in progress
    Move(Pos2),
    /// Primary button released, ending the gesture
    Up(Pos2),
}

/// Converts raw egui pointer input into gesture events scoped to the
/// canvas rectangle.
///
/// A gesture starts only inside the canvas, but once started it follows
/// the pointer even when it leaves the rect mid-drag.
#[derive(Debug, Default)]
pub struct InputHandler {
    canvas_rect: Option<Rect>,
    last_pos: Option<Pos2>,
    gesture_active: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the canvas rectangle; events outside it start nothing.
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = Some(rect);
    }

    /// Process this frame's pointer input into gesture events.
    pub fn poll(&mut self, ctx: &Context) -> Vec<PointerEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let pos = input.pointer.latest_pos().or(self.last_pos);

            if input.pointer.primary_pressed() {
                if let Some(pos) = pos {
                    let inside = self.canvas_rect.is_some_and(|rect| rect.contains(pos));
                    if inside {
                        self.gesture_active = true;
                        events.push(PointerEvent::Down(pos));
                    }
                }
            }

            if self.gesture_active {
                if let Some(pos) = pos {
                    if Some(pos) != self.last_pos {
                        events.push(PointerEvent::Move(pos));
                    }
                }
                if input.pointer.primary_released() {
                    if let Some(pos) = pos {
                        events.push(PointerEvent::Up(pos));
                    }
                    self.gesture_active = false;
                }
            }

            if let Some(pos) = input.pointer.latest_pos() {
                self.last_pos = Some(pos);
            }
        });

        events
    }

    /// True while a press-to-release gesture is in flight.
    pub fn gesture_active(&self) -> bool {
        self.gesture_active
    }
}
