use egui::{Context, Key, Modifiers, PointerButton, Pos2, Rect};
use kurbo::Point;

/// Input the editor reacts to. Positions are in view space: pixels from the
/// canvas's top-left corner, Y down.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed over the canvas
    PointerDown { pos: Point, button: PointerButton },
    /// Mouse button was released
    PointerUp { pos: Point, button: PointerButton },
    /// Mouse moved over the canvas
    PointerMove { pos: Point },
    /// Mouse left the canvas
    PointerLeave,
    /// Wheel turned over the canvas; positive `delta` is away from the user
    Wheel { pos: Point, delta: f64 },
    /// Key was pressed
    KeyDown { key: Key, modifiers: Modifiers },
}

/// Canvas-relative view-space position of a screen position
pub fn to_canvas(canvas_rect: Rect, pos: Pos2) -> Point {
    Point::new(
        f64::from(pos.x - canvas_rect.min.x),
        f64::from(pos.y - canvas_rect.min.y),
    )
}

/// Handles converting raw egui input into our domain-specific InputEvents
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let keyboard_taken = ctx.wants_keyboard_input();

        ctx.input(|input| {
            let hover = input
                .pointer
                .hover_pos()
                .filter(|pos| self.canvas_rect.contains(*pos));

            match hover {
                Some(pos) => {
                    if Some(pos) != self.last_pointer_pos {
                        events.push(InputEvent::PointerMove {
                            pos: to_canvas(self.canvas_rect, pos),
                        });
                    }
                    self.last_pointer_pos = Some(pos);
                }
                None => {
                    if self.last_pointer_pos.take().is_some() {
                        events.push(InputEvent::PointerLeave);
                    }
                }
            }

            for button in [PointerButton::Primary, PointerButton::Secondary, PointerButton::Middle] {
                if input.pointer.button_pressed(button) {
                    if let Some(pos) = hover {
                        events.push(InputEvent::PointerDown {
                            pos: to_canvas(self.canvas_rect, pos),
                            button,
                        });
                    }
                }
                if input.pointer.button_released(button) {
                    // Releases outside the canvas still end the gesture
                    if let Some(pos) = input.pointer.interact_pos() {
                        events.push(InputEvent::PointerUp {
                            pos: to_canvas(self.canvas_rect, pos),
                            button,
                        });
                    }
                }
            }

            if let Some(pos) = hover {
                let delta = input.raw_scroll_delta.y;
                if delta != 0.0 {
                    events.push(InputEvent::Wheel {
                        pos: to_canvas(self.canvas_rect, pos),
                        delta: f64::from(delta),
                    });
                }
            }

            if !keyboard_taken {
                for event in &input.raw.events {
                    if let egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } = event
                    {
                        events.push(InputEvent::KeyDown {
                            key: *key,
                            modifiers: *modifiers,
                        });
                    }
                }
            }
        });

        events
    }
}
