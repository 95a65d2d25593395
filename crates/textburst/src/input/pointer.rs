use glam::Vec2;

/// Last known pointer position in canvas space, or none.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerTracker {
    position: Option<Vec2>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, position: Vec2) {
        self.position = Some(position);
    }

    pub fn leave(&mut self) {
        self.position = None;
    }

    pub fn position(&self) -> Option<Vec2> {
        self.position
    }
}

/// On-page rectangle of the canvas element, in CSS pixels.
///
/// The canvas backing store may be larger or smaller than its layout box,
/// so client coordinates are scaled into backing-store pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClientRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ClientRect {
    /// Map client coordinates into a canvas of `canvas_width` x `canvas_height` pixels.
    pub fn to_canvas(&self, client: Vec2, canvas_width: u32, canvas_height: u32) -> Vec2 {
        let scale = Vec2::new(
            scale(canvas_width as f32, self.width),
            scale(canvas_height as f32, self.height),
        );
        (client - Vec2::new(self.left, self.top)) * scale
    }
}

fn scale(canvas: f32, rect: f32) -> f32 {
    if rect > 0.0 {
        canvas / rect
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_forgets_on_leave() {
        let mut t = PointerTracker::new();
        assert_eq!(t.position(), None);
        t.move_to(Vec2::new(3.0, 4.0));
        assert_eq!(t.position(), Some(Vec2::new(3.0, 4.0)));
        t.leave();
        assert_eq!(t.position(), None);
    }

    #[test]
    fn maps_client_to_canvas_with_offset_and_scale() {
        let rect = ClientRect { left: 10.0, top: 20.0, width: 400.0, height: 300.0 };
        let p = rect.to_canvas(Vec2::new(210.0, 170.0), 800, 600);
        assert_eq!(p, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn collapsed_rect_keeps_unit_scale() {
        let rect = ClientRect { left: 0.0, top: 0.0, width: 0.0, height: 0.0 };
        assert_eq!(rect.to_canvas(Vec2::new(5.0, 6.0), 800, 600), Vec2::new(5.0, 6.0));
    }
}
