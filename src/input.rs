use egui::{Context, PointerButton, Pos2, Rect, Response};

/// Pointer input relevant to the canvas, in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed on the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved on the canvas
    PointerMove { position: Pos2 },
    /// Primary button released, wherever the pointer is
    PointerUp,
}

/// Convert a screen position into coordinates relative to the canvas' top-left corner.
/// Both are in points; the canvas maps points to its own pixels.
pub fn to_canvas_coords(pos: Pos2, canvas_rect: Rect) -> Pos2 {
    (pos - canvas_rect.min).to_pos2()
}

/// Turns raw egui pointer state into canvas `InputEvent`s, once per frame
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process this frame's input against the canvas widget `canvas`.
    ///
    /// Down and move are only reported while the canvas itself is under the
    /// pointer, so presses on popups or windows above it are left alone.
    /// Events come out in the order the browser would fire them: down, then
    /// move, then up.
    pub fn process_input(&mut self, ctx: &Context, canvas: &Response) -> Vec<InputEvent> {
        let canvas_rect = canvas.rect;
        let on_canvas = canvas.contains_pointer();
        let mut events = Vec::new();

        ctx.input(|input| {
            let hover = input.pointer.hover_pos();
            let over_canvas = hover.filter(|pos| on_canvas && canvas_rect.contains(*pos));

            if input.pointer.button_pressed(PointerButton::Primary) {
                if let Some(pos) = over_canvas {
                    events.push(InputEvent::PointerDown {
                        position: to_canvas_coords(pos, canvas_rect),
                    });
                }
            }

            if let Some(pos) = over_canvas {
                if Some(pos) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove {
                        position: to_canvas_coords(pos, canvas_rect),
                    });
                }
            }

            if input.pointer.button_released(PointerButton::Primary) {
                events.push(InputEvent::PointerUp);
            }

            self.last_pointer_pos = hover;
        });

        events
    }
}
