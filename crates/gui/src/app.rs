//! Main application state and logic

use board_core::Board;
use iced::widget::canvas::Canvas;
use iced::widget::{column, container, text};
use iced::{Element, Length, Task, Theme};

use crate::board::{self, BoardCanvas, BoardMessage, BoardScene};
use crate::config::UiConfig;
use crate::sprites::SpriteSet;
use crate::styles;

/// Main application state
pub struct ChessApp {
    /// Board scene with all piece symbols
    scene: BoardScene,
    /// Status bar text
    status: String,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    Board(BoardMessage),
}

impl ChessApp {
    pub fn new(config: UiConfig) -> (Self, Task<Message>) {
        let sprites = SpriteSet::load(&config.asset_dir);
        let board = Board::new();
        (
            Self {
                scene: BoardScene::from_board(&board, &sprites),
                status: String::from("White's Turn"),
            },
            Task::none(),
        )
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Board(BoardMessage::Pressed(pt, viewport)) => {
                self.scene.on_press(pt, viewport);
            }
            Message::Board(BoardMessage::Released(pt, viewport)) => {
                self.scene.on_release(pt, viewport);
            }
            Message::Board(BoardMessage::Moved(pt, viewport)) => {
                self.status = board::status_line(pt, self.scene.square_length(viewport), viewport);
                self.scene.on_cursor_move(pt, viewport);
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let board = Canvas::new(BoardCanvas { scene: &self.scene })
            .width(Length::Fill)
            .height(Length::Fill);

        let status_bar = container(text(&self.status).size(styles::STATUS_TEXT_SIZE))
            .width(Length::Fill)
            .padding([6.0, 10.0])
            .style(styles::status_bar);

        column![
            Element::from(board).map(Message::Board),
            status_bar,
        ]
        .into()
    }
}
