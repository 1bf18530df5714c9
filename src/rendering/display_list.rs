use macroquad::prelude::*;

use super::Surface;

/// One retained drawing operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    FillRoundedRect { rect: Rect, radius: f32, color: Color },
}

/// Retained-mode surface. Rendering records commands here; `present`
/// replays them every frame so the last generation stays on screen while
/// the driver is waiting for its next tick.
#[derive(Clone, Debug)]
pub struct DisplayList {
    background: Color,
    fill: Color,
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new(background: Color) -> Self {
        Self {
            background,
            fill: BLACK,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Replay the recorded commands onto the window.
    pub fn present(&self) {
        clear_background(self.background);
        for command in &self.commands {
            match *command {
                DrawCommand::Clear => clear_background(self.background),
                DrawCommand::FillRoundedRect { rect, radius, color } => {
                    draw_rounded_rectangle(rect, radius, color)
                }
            }
        }
    }
}

impl Surface for DisplayList {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn fill_rounded_rect(&mut self, x: f32, y: f32, width: f32, height: f32, radius: f32) {
        self.commands.push(DrawCommand::FillRoundedRect {
            rect: Rect::new(x, y, width, height),
            radius,
            color: self.fill,
        });
    }
}

/// macroquad has no rounded rectangle: a cross of two rectangles covers the
/// body and four circles round off the corners.
fn draw_rounded_rectangle(rect: Rect, radius: f32, color: Color) {
    let r = radius.clamp(0.0, rect.w.min(rect.h) / 2.0);
    if r == 0.0 {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
        return;
    }

    draw_rectangle(rect.x + r, rect.y, rect.w - 2.0 * r, rect.h, color);
    draw_rectangle(rect.x, rect.y + r, rect.w, rect.h - 2.0 * r, color);

    let corners = [
        (rect.x + r, rect.y + r),
        (rect.x + rect.w - r, rect.y + r),
        (rect.x + r, rect.y + rect.h - r),
        (rect.x + rect.w - r, rect.y + rect.h - r),
    ];
    corners.iter().for_each(|&(cx, cy)| draw_circle(cx, cy, r, color));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_uses_current_color() {
        let mut list = DisplayList::new(BLACK);
        list.set_fill_color(RED);
        list.fill_rounded_rect(1.0, 2.0, 3.0, 4.0, 0.5);
        list.set_fill_color(BLUE);
        list.fill_rounded_rect(5.0, 6.0, 7.0, 8.0, 0.5);

        assert_eq!(
            list.commands(),
            &[
                DrawCommand::FillRoundedRect { rect: Rect::new(1.0, 2.0, 3.0, 4.0), radius: 0.5, color: RED },
                DrawCommand::FillRoundedRect { rect: Rect::new(5.0, 6.0, 7.0, 8.0), radius: 0.5, color: BLUE },
            ]
        );
    }

    #[test]
    fn test_clear_discards_previous_frame() {
        let mut list = DisplayList::new(BLACK);
        list.fill_rounded_rect(0.0, 0.0, 9.0, 9.0, 2.0);
        list.clear();

        assert_eq!(list.commands(), &[DrawCommand::Clear]);
    }
}
