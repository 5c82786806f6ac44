use crate::types::*;

/// Standard board side length in squares.
pub const BOARD_LENGTH: usize = 8;

/// Row-major 8x8 mailbox of pieces. Row 0 is the top of the window,
/// so black's back rank sits on row 0 and white's on row 7.
#[derive(Clone, Debug)]
pub struct Board {
    squares: [Option<Piece>; BOARD_LENGTH * BOARD_LENGTH],
    length: usize,
}

impl Board {
    /// The standard chess starting position.
    pub fn new() -> Self {
        let mut b = Board {
            squares: [None; BOARD_LENGTH * BOARD_LENGTH],
            length: BOARD_LENGTH,
        };

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            b.squares[col] = Some(Piece::new(Color::Black, kind));
            b.squares[7 * BOARD_LENGTH + col] = Some(Piece::new(Color::White, kind));
        }
        for col in 0..BOARD_LENGTH {
            b.squares[BOARD_LENGTH + col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            b.squares[6 * BOARD_LENGTH + col] = Some(Piece::new(Color::White, PieceKind::Pawn));
        }
        b
    }

    /// Number of squares per side.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Piece on the given cell, or `None` when the cell is empty or the
    /// coordinates fall outside the board.
    pub fn piece_at(&self, col: usize, row: usize) -> Option<Piece> {
        if col >= self.length || row >= self.length {
            return None;
        }
        self.squares[row * self.length + col]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
