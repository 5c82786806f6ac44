//! Chess board scene: square grid, piece symbols, and the canvas program
//! that feeds pointer events into it.

use board_core::Board;
use iced::mouse;
use iced::widget::canvas;
use iced::{Point, Rectangle, Renderer, Size, Theme};

use crate::sprites::SpriteSet;
use crate::styles;
use crate::symbol::Symbol;

/// Pointer events translated out of the canvas, carrying the cursor
/// position and the canvas size they occurred in.
#[derive(Debug, Clone)]
pub enum BoardMessage {
    Pressed(Point, Size),
    Released(Point, Size),
    Moved(Point, Size),
}

/// The full set of piece symbols plus the board dimension. Symbols keep
/// insertion order; later ones draw over earlier ones.
#[derive(Debug, Clone)]
pub struct BoardScene {
    symbols: Vec<Symbol>,
    dimension: u32,
}

impl BoardScene {
    pub fn new(symbols: Vec<Symbol>, dimension: u32) -> Self {
        Self { symbols, dimension }
    }

    /// Scans the model row-major and creates one symbol per occupied cell.
    pub fn from_board(board: &Board, sprites: &SpriteSet) -> Self {
        let mut symbols = Vec::new();
        for row in 0..board.length() {
            for col in 0..board.length() {
                if let Some(piece) = board.piece_at(col, row) {
                    symbols.push(Symbol::new(sprites.sprite(piece.code()), col as u32, row as u32));
                }
            }
        }
        tracing::info!(pieces = symbols.len(), "board loaded");
        Self::new(symbols, board.length() as u32)
    }

    pub fn dimension(&self) -> u32 {
        self.dimension
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Pixel edge of one square for the given canvas size. Derived on
    /// every call, never cached.
    pub fn square_length(&self, viewport: Size) -> u32 {
        if self.dimension == 0 {
            return 0;
        }
        viewport.width.min(viewport.height).max(0.0) as u32 / self.dimension
    }

    /// Is any symbol currently being dragged?
    pub fn drag_active(&self) -> bool {
        self.symbols.iter().any(Symbol::is_dragging)
    }

    /// Starts a drag on the first symbol that accepts the press.
    /// At most one symbol drags at a time.
    pub fn on_press(&mut self, pt: Point, viewport: Size) {
        if self.drag_active() {
            return;
        }
        let length = self.square_length(viewport);
        for symbol in &mut self.symbols {
            if symbol.begin_move(pt, length) {
                break;
            }
        }
    }

    /// Notifies every symbol of the release; only the dragging one reacts.
    pub fn on_release(&mut self, pt: Point, viewport: Size) {
        let length = self.square_length(viewport);
        for symbol in &mut self.symbols {
            symbol.finish_move(pt, length, self.dimension);
        }
    }

    /// Forwards the cursor position to every symbol.
    pub fn on_cursor_move(&mut self, pt: Point, viewport: Size) {
        let length = self.square_length(viewport);
        for symbol in &mut self.symbols {
            symbol.move_to(pt, length);
        }
    }

    /// Paints all squares, then all symbols in insertion order.
    pub fn draw(&self, frame: &mut canvas::Frame) {
        let length = self.square_length(frame.size());
        let side = length as f32;
        for row in 0..self.dimension {
            for col in 0..self.dimension {
                let color = if col % 2 == row % 2 {
                    styles::LIGHT_SQUARE
                } else {
                    styles::DARK_SQUARE
                };
                frame.fill_rectangle(
                    Point::new(col as f32 * side, row as f32 * side),
                    Size::new(side, side),
                    color,
                );
            }
        }
        for symbol in &self.symbols {
            symbol.draw(frame, length);
        }
    }
}

/// Status line shown under the board while the pointer moves.
pub fn status_line(pt: Point, length: u32, viewport: Size) -> String {
    format!(
        "(x, y) = ({}, {}), length = {}, ClientSize = ({}, {})",
        pt.x as i32, pt.y as i32, length, viewport.width as i32, viewport.height as i32,
    )
}

/// Canvas program borrowing the scene for drawing; pointer events become
/// [`BoardMessage`]s handled by the application update.
pub struct BoardCanvas<'a> {
    pub scene: &'a BoardScene,
}

impl canvas::Program<BoardMessage> for BoardCanvas<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (canvas::event::Status, Option<BoardMessage>) {
        let Some(position) = cursor.position_in(bounds) else {
            return (canvas::event::Status::Ignored, None);
        };
        let message = match event {
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                BoardMessage::Pressed(position, bounds.size())
            }
            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                BoardMessage::Released(position, bounds.size())
            }
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                BoardMessage::Moved(position, bounds.size())
            }
            _ => return (canvas::event::Status::Ignored, None),
        };
        (canvas::event::Status::Captured, Some(message))
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        self.scene.draw(&mut frame);
        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.scene.drag_active() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
