use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GameModel, GoldTile, SnakeTile, TileKind};

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw `model`, or the game over panel when the view has no model.
    /// `game` is the name of the last game started.
    pub fn render(&self, frame: &mut Frame, game: &str, model: Option<&GameModel>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_header(game, model), chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match model {
            Some(model) => frame.render_widget(self.render_grid(game, model), game_area),
            None => frame.render_widget(self.render_game_over(), game_area),
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_grid(&self, game: &str, model: &GameModel) -> Paragraph<'static> {
        let (width, height) = model.board_size();
        let mut lines = Vec::with_capacity(height);

        for y in 0..height {
            let spans: Vec<Span> = (0..width).map(|x| tile_span(model.tile_at(x, y))).collect();
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(format!(" {game} ")),
            )
            .alignment(Alignment::Center)
    }

    fn render_header(&self, game: &str, model: Option<&GameModel>) -> Paragraph<'static> {
        let mut spans = vec![
            Span::styled("Game: ", Style::default().fg(Color::Yellow)),
            Span::styled(game.to_string(), Style::default().fg(Color::White)),
        ];

        // The score is only known while the game runs.
        if let Some(model) = model {
            spans.push(Span::raw("    "));
            spans.push(Span::styled("Score: ", Style::default().fg(Color::Yellow)));
            spans.push(Span::styled(
                model.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }

    fn render_game_over(&self) -> Paragraph<'static> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("1", Style::default().fg(Color::Cyan)),
            Span::raw(" Gold  "),
            Span::styled("2", Style::default().fg(Color::Cyan)),
            Span::raw(" Snake | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn tile_span(tile: TileKind) -> Span<'static> {
    match tile {
        TileKind::Gold(GoldTile::Coin) => Span::styled(
            "$ ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        TileKind::Gold(GoldTile::Collector) => Span::styled(
            "@ ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        TileKind::Snake(SnakeTile::Head) => Span::styled(
            "■ ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        TileKind::Snake(SnakeTile::Body) => {
            Span::styled("□ ", Style::default().fg(Color::Green))
        }
        TileKind::Snake(SnakeTile::Fruit) => Span::styled(
            "O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        TileKind::Gold(GoldTile::Empty) | TileKind::Snake(SnakeTile::Empty) => {
            Span::styled(". ", Style::default().fg(Color::DarkGray))
        }
    }
}
