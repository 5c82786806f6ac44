#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    fn idx(self) -> u8 {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Stable sprite code: black pawn..king = 0..5, white pawn..king = 6..11.
    pub fn code(self) -> u8 {
        let base = match self.color {
            Color::Black => 0,
            Color::White => 6,
        };
        base + self.kind.idx()
    }

    /// Inverse of [`code`](Self::code); codes 12 and above are rejected.
    pub fn from_code(code: u8) -> Option<Piece> {
        if code >= 12 {
            return None;
        }
        let color = if code < 6 { Color::Black } else { Color::White };
        let kind = PieceKind::ALL[(code % 6) as usize];
        Some(Piece { color, kind })
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
