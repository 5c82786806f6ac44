//! Styling constants and shared widget styles

use iced::widget::container;
use iced::{Background, Color, Theme};

// Board colors
pub const LIGHT_SQUARE: Color = Color::from_rgb(1.0, 0.87, 0.68); // Navajo white
pub const DARK_SQUARE: Color = Color::from_rgb(0.80, 0.52, 0.25); // Peru

// Glyph colors for pieces rendered as text
pub const WHITE_PIECE: Color = Color::from_rgb(0.98, 0.98, 0.96);
pub const BLACK_PIECE: Color = Color::from_rgb(0.12, 0.12, 0.12);

// Dimensions
pub const STATUS_TEXT_SIZE: f32 = 14.0;

/// Style for the status line container at the bottom of the window.
pub fn status_bar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        ..container::Style::default()
    }
}
