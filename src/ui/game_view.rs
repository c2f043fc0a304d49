use crate::game::{Disk, GameOutcome, GameState, PlayerMode, Position};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const DARK_COLOR: Color = Color::Cyan;
const LIGHT_COLOR: Color = Color::White;

pub fn render(frame: &mut Frame, state: &GameState, cursor: Position, message: &Option<String>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_header(frame, state, chunks[0]);
    render_board(frame, state, cursor, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, state, chunks[3]);
}

fn disk_color(disk: Disk) -> Color {
    match disk {
        Disk::Dark => DARK_COLOR,
        Disk::Light => LIGHT_COLOR,
    }
}

fn render_header(frame: &mut Frame, state: &GameState, area: ratatui::layout::Rect) {
    let [dark, light] = Disk::both().map(|side| state.count_disks(side));
    let counts = format!("Dark {dark} - {light} Light");

    let (status, color) = match state.outcome() {
        Some(GameOutcome::Winner(side)) => {
            (format!("Game over: {} wins  |  {}", side.name(), counts), disk_color(side))
        }
        Some(GameOutcome::Draw) => (format!("Game over: draw  |  {counts}"), Color::Gray),
        None => match state.turn() {
            Some(side) => (
                format!("{} to move  |  {}", side.name(), counts),
                disk_color(side),
            ),
            None => (counts, Color::Gray),
        },
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Reversi"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    state: &GameState,
    cursor: Position,
    area: ratatui::layout::Rect,
) {
    let board = state.board();
    let hints: Vec<Position> = match state.turn() {
        Some(side) if state.mode(side) == PlayerMode::Manual => state.valid_moves(side),
        _ => Vec::new(),
    };

    let mut lines = Vec::new();
    lines.push(Line::from(format!(
        "  ╔{}╗",
        "═".repeat(board.width() * 3)
    )));

    for (y, row) in board.rows().enumerate() {
        let mut row_spans = vec![Span::raw("  ║")];

        for (x, &cell) in row.iter().enumerate() {
            let pos = Position::new(x, y);
            let (symbol, mut style) = match cell {
                Some(disk) => (" ● ", Style::default().fg(disk_color(disk))),
                None if hints.contains(&pos) => (" + ", Style::default().fg(Color::DarkGray)),
                None => (" . ", Style::default().fg(Color::DarkGray)),
            };
            if pos == cursor {
                style = style.bg(Color::Blue);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!(
        "  ╚{}╝",
        "═".repeat(board.width() * 3)
    )));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, state: &GameState, area: ratatui::layout::Rect) {
    let line1 = Line::from("Arrows: Move  |  Enter: Place  |  R: Restart  |  Q: Quit");
    let line2 = Line::from(vec![
        Span::raw("1: "),
        Span::styled(
            format!("Dark {}", state.mode(Disk::Dark).name()),
            Style::default().fg(DARK_COLOR).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   2: "),
        Span::styled(
            format!("Light {}", state.mode(Disk::Light).name()),
            Style::default().fg(LIGHT_COLOR).add_modifier(Modifier::BOLD),
        ),
    ]);

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
