//! Piece sprite loading
//!
//! Each piece code 0..12 maps to a fixed image file name under the
//! configured asset directory. A missing file downgrades that code to a
//! Unicode glyph so the board stays usable without any assets on disk.

use std::path::Path;

use iced::widget::image;
use iced::Color;

use crate::styles;

/// Image file names indexed by piece code (black pawn..king, white pawn..king).
pub const ASSET_FILES: [&str; 12] = [
    "black_pawn.png",
    "black_knight.png",
    "black_bishop.png",
    "black_rook.png",
    "black_queen.png",
    "black_king.png",
    "white_pawn.png",
    "white_knight.png",
    "white_bishop.png",
    "white_rook.png",
    "white_queen.png",
    "white_king.png",
];

/// Glyph fallbacks for the same codes.
const GLYPHS: [char; 12] = [
    '\u{265F}', // black pawn
    '\u{265E}',
    '\u{265D}',
    '\u{265C}',
    '\u{265B}',
    '\u{265A}', // black king
    '\u{2659}', // white pawn
    '\u{2658}',
    '\u{2657}',
    '\u{2656}',
    '\u{2655}',
    '\u{2654}', // white king
];

/// Visual for one piece code: a raster image when the asset exists,
/// otherwise a colored text glyph.
#[derive(Debug, Clone)]
pub enum Sprite {
    Image(image::Handle),
    Glyph { ch: char, color: Color },
}

impl Sprite {
    fn glyph(code: usize) -> Sprite {
        let code = code % 12;
        let color = if code < 6 {
            styles::BLACK_PIECE
        } else {
            styles::WHITE_PIECE
        };
        Sprite::Glyph {
            ch: GLYPHS[code],
            color,
        }
    }
}

/// One sprite per piece code.
#[derive(Debug, Clone)]
pub struct SpriteSet {
    sprites: Vec<Sprite>,
}

impl SpriteSet {
    /// Loads sprites from `asset_dir`, falling back per file.
    pub fn load(asset_dir: &Path) -> Self {
        let sprites = (0..ASSET_FILES.len())
            .map(|code| {
                let path = asset_dir.join(ASSET_FILES[code]);
                if path.is_file() {
                    Sprite::Image(image::Handle::from_path(path))
                } else {
                    tracing::warn!(path = %path.display(), "missing piece image, using glyph");
                    Sprite::glyph(code)
                }
            })
            .collect();
        Self { sprites }
    }

    /// Glyph-only set; used in tests and when no assets ship with the binary.
    pub fn glyphs() -> Self {
        Self {
            sprites: (0..ASSET_FILES.len()).map(Sprite::glyph).collect(),
        }
    }

    /// Sprite for a piece code. Out-of-range codes get a glyph rather
    /// than panicking.
    pub fn sprite(&self, code: u8) -> Sprite {
        self.sprites
            .get(code as usize)
            .cloned()
            .unwrap_or_else(|| Sprite::glyph(code as usize))
    }
}

#[cfg(test)]
#[path = "sprites_tests.rs"]
mod sprites_tests;
