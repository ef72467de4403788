use crate::game::{Board, CellValue, GameEngine, GameMode, Player, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Width of one board cell in terminal columns.
const CELL_WIDTH: u16 = 3;
/// Columns left of the first cell: "  ║".
const LEFT_MARGIN: u16 = 3;
/// Total width of every board line.
const BOARD_WIDTH: u16 = LEFT_MARGIN + CELL_WIDTH * COLS as u16 + 2;
/// Column numbers, top border, rows, bottom border, selection indicator.
const BOARD_LINES: u16 = ROWS as u16 + 4;

/// Everything the view needs for one frame.
pub struct View<'a> {
    pub engine: &'a GameEngine,
    /// Board to draw; the finished board while the game-over popup is open.
    pub board: &'a Board,
    pub selected_column: usize,
    pub message: Option<&'a str>,
    pub dialog: Option<&'a str>,
}

/// Draw the whole screen and return the area holding the board.
pub fn render(frame: &mut Frame, view: &View) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(BOARD_LINES), // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, view.engine, chunks[0]);
    render_board(frame, view.board, view.selected_column, chunks[1]);
    render_message(frame, view.message, chunks[2]);
    render_controls(frame, chunks[3]);

    if let Some(message) = view.dialog {
        let area = frame.area();
        render_dialog(frame, message, area);
    }

    chunks[1]
}

/// Map a terminal position inside `board_area` to a board column.
pub fn column_at(board_area: Rect, x: u16, y: u16) -> Option<usize> {
    // Paragraph centering: half the area minus half the line.
    let left = board_area.x + (board_area.width / 2).saturating_sub(BOARD_WIDTH / 2) + LEFT_MARGIN;
    if y < board_area.y || y >= board_area.y + BOARD_LINES || x < left {
        return None;
    }
    let column = ((x - left) / CELL_WIDTH) as usize;
    (column < COLS).then_some(column)
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, engine: &GameEngine, area: Rect) {
    let player = engine.current_player();
    let status = match engine.mode() {
        GameMode::SinglePlayer => format!("Your move ({})  |  {}", player.name(), engine.mode().label()),
        GameMode::TwoPlayer => format!("Current Player: {}  |  {}", player.name(), engine.mode().label()),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(player_color(player)).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, board: &Board, selected_column: usize, area: Rect) {
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔══════════════════════╗"));

    // Every cell is redrawn from the board on each frame.
    for row in 0..ROWS as i32 {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS as i32 {
            let (symbol, color) = match board.cell_at(col, row) {
                CellValue::Empty => (" . ", Color::DarkGray),
                CellValue::Red => (" ● ", Color::Red),
                CellValue::Yellow => (" ● ", Color::Yellow),
                CellValue::OutOfBounds => continue,
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚══════════════════════╝"));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from(
        "←/→: Move  |  Enter/1-7/Click: Drop  |  S: New 1P game  |  T: New 2P game  |  Q: Quit",
    );

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

fn render_dialog(frame: &mut Frame, message: &str, area: Rect) {
    let popup = centered_rect(40, 6, area);
    let text = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let dialog = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Game Over!"),
        );

    frame.render_widget(Clear, popup);
    frame.render_widget(dialog, popup);
}

/// A `width` x `height` rectangle centered in `area`, clipped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
