//! A draggable piece sprite bound to a board cell.

use iced::alignment;
use iced::widget::canvas;
use iced::widget::text::Shaping;
use iced::{Pixels, Point, Rectangle, Size};

use crate::sprites::Sprite;

/// Sprite edge as a fraction of the square, and the matching inset that
/// centers it on the cell.
pub fn sprite_size(length: u32) -> f32 {
    length as f32 * 0.8
}

pub fn inset(length: u32) -> f32 {
    length as f32 * 0.1
}

/// One piece's visual: its sprite, the cell it rests on, and the pixel
/// anchor it follows while being dragged.
#[derive(Debug, Clone)]
pub struct Symbol {
    sprite: Sprite,
    cell: (u32, u32),
    position: Point,
    dragging: bool,
}

impl Symbol {
    pub fn new(sprite: Sprite, col: u32, row: u32) -> Self {
        Self {
            sprite,
            cell: (col, row),
            position: Point::ORIGIN,
            dragging: false,
        }
    }

    /// Cell the symbol rests on (column, row).
    pub fn cell(&self) -> (u32, u32) {
        self.cell
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Top-left corner of the sprite when resting on its cell.
    fn resting_anchor(&self, length: u32) -> Point {
        let (col, row) = self.cell;
        Point::new(
            col as f32 * length as f32 + inset(length),
            row as f32 * length as f32 + inset(length),
        )
    }

    /// Hit-tests `pt` against the symbol's on-board box. On hit the pixel
    /// anchor snaps to center on the cursor and the symbol starts dragging.
    /// A miss leaves the symbol untouched.
    pub fn begin_move(&mut self, pt: Point, length: u32) -> bool {
        if length == 0 {
            return false;
        }
        let size = sprite_size(length);
        let origin = self.resting_anchor(length);
        let hit = origin.x <= pt.x
            && pt.x <= origin.x + size
            && origin.y <= pt.y
            && pt.y <= origin.y + size;
        if hit {
            self.position = Point::new(pt.x - size / 2.0, pt.y - size / 2.0);
            self.dragging = true;
        }
        hit
    }

    /// Recenters the anchor on the cursor while dragging; no-op otherwise.
    pub fn move_to(&mut self, pt: Point, length: u32) {
        if self.dragging {
            let size = sprite_size(length);
            self.position = Point::new(pt.x - size / 2.0, pt.y - size / 2.0);
        }
    }

    /// Drops the symbol on the cell under the cursor and stops dragging;
    /// no-op when not dragging. Drops outside the board land on the
    /// nearest edge cell.
    pub fn finish_move(&mut self, pt: Point, length: u32, dimension: u32) {
        if !self.dragging {
            return;
        }
        self.dragging = false;
        if length == 0 || dimension == 0 {
            return;
        }
        let col = (pt.x.max(0.0) as u32 / length).min(dimension - 1);
        let row = (pt.y.max(0.0) as u32 / length).min(dimension - 1);
        self.cell = (col, row);
    }

    /// Draws the sprite at 80% of the square with a 10% inset, following
    /// the cursor while dragging.
    pub fn draw(&self, frame: &mut canvas::Frame, length: u32) {
        let size = sprite_size(length);
        let top_left = if self.dragging {
            self.position
        } else {
            self.resting_anchor(length)
        };
        match &self.sprite {
            Sprite::Image(handle) => {
                frame.draw_image(
                    Rectangle::new(top_left, Size::new(size, size)),
                    canvas::Image::new(handle.clone()),
                );
            }
            Sprite::Glyph { ch, color } => {
                frame.fill_text(canvas::Text {
                    content: ch.to_string(),
                    position: Point::new(top_left.x + size / 2.0, top_left.y + size / 2.0),
                    color: *color,
                    size: Pixels(size),
                    horizontal_alignment: alignment::Horizontal::Center,
                    vertical_alignment: alignment::Vertical::Center,
                    shaping: Shaping::Advanced,
                    ..canvas::Text::default()
                });
            }
        }
    }
}

#[cfg(test)]
#[path = "symbol_tests.rs"]
mod symbol_tests;
