//! Chessboard GUI
//!
//! A desktop window that renders an 8x8 board with draggable piece
//! sprites and a status line tracking the pointer.

mod app;
mod board;
mod config;
mod sprites;
mod styles;
mod symbol;

use app::ChessApp;
use config::UiConfig;
use iced::application;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = UiConfig::load_or_default();
    tracing::info!(asset_dir = %config.asset_dir.display(), "starting chessboard");

    let window_size = (config.window_width, config.window_height);
    application("Chess", ChessApp::update, ChessApp::view)
        .theme(ChessApp::theme)
        .window_size(window_size)
        .run_with(move || ChessApp::new(config.clone()))
}
