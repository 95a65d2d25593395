/// Input event types the widget understands.
/// Coordinates are already in canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A mouse or touch moved to (x, y).
    PointerMove { x: f32, y: f32 },
    /// The pointer left the surface (mouse out, touch cancelled).
    PointerLeave,
    /// A click or the end of a tap at (x, y).
    Tap { x: f32, y: f32 },
    /// The drawing surface changed size.
    Resize { width: u32, height: u32, pixel_ratio: f32 },
}

/// A queue of input events.
/// Event handlers push into the queue; the frame loop drains it once per frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
