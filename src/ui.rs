#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow truncation when casting from usize to u16 since board dimensions are validated to be small
    clippy::cast_possible_truncation,
    // Allow sign loss when going from i32 to u16 since negative coordinates are filtered first
    clippy::cast_sign_loss,
    // Allow potential wrapping when casting grid indices to i32 as board coordinates are within reasonable ranges
    clippy::cast_possible_wrap
)]

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::{App, Screen};
use crate::components::{BlockColor, Piece};
use crate::simulation::Snapshot;

// Each cell is 2 characters wide to look roughly square
const CELL_WIDTH: u16 = 2;
const SIDE_PANEL_WIDTH: u16 = 28;
const STATS_HEIGHT: u16 = 6;
const NEXT_HEIGHT: u16 = 6;
const ACHIEVEMENTS_HEIGHT: u16 = 7;
const CONTROLS_HEIGHT: u16 = 7;
const SIDE_PANEL_HEIGHT: u16 = STATS_HEIGHT + NEXT_HEIGHT + ACHIEVEMENTS_HEIGHT + CONTROLS_HEIGHT;

const BLOCK_SYMBOL: &str = "█";
const SHADOW_SYMBOL: &str = "▒";

pub fn render(f: &mut Frame, app: &App) {
    match app.screen {
        Screen::Title => render_title(f),
        Screen::Playing => render_game(f, &app.simulation.snapshot(), app.show_ghost),
    }
}

/// Outer size of the bordered board for the snapshot's grid.
#[must_use]
pub fn board_size(snapshot: &Snapshot) -> (u16, u16) {
    let width = snapshot.grid.width() as u16 * CELL_WIDTH + 2; // +2 for borders
    let height = snapshot.grid.height() as u16 + 2;
    (width, height)
}

/// Smallest terminal the game screen fits in.
#[must_use]
pub fn minimum_size(snapshot: &Snapshot) -> (u16, u16) {
    let (board_width, board_height) = board_size(snapshot);
    (
        board_width + SIDE_PANEL_WIDTH,
        board_height.max(SIDE_PANEL_HEIGHT),
    )
}

pub fn render_game(f: &mut Frame, snapshot: &Snapshot, show_ghost: bool) {
    let (min_width, min_height) = minimum_size(snapshot);

    if f.area().width < min_width || f.area().height < min_height {
        let warning_text = Paragraph::new(format!(
            "Terminal too small!\nPlease resize your terminal\nto at least {min_width}x{min_height}."
        ))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Blockfall"));

        let warning_area = centered_rect(80, 50, f.area());
        f.render_widget(warning_text, warning_area);
        return;
    }

    let game_area = centered_area(min_width, min_height, f.area());
    let (board_width, board_height) = board_size(snapshot);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(board_width),
            Constraint::Length(SIDE_PANEL_WIDTH),
        ])
        .split(game_area);

    let board_area = Rect {
        height: board_height,
        ..columns[0]
    };

    render_board(f, snapshot, show_ghost, board_area);
    render_side_panel(f, snapshot, columns[1]);

    if snapshot.game_over {
        render_game_over(f, snapshot, board_area);
    }
}

fn render_board(f: &mut Frame, snapshot: &Snapshot, show_ghost: bool, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" BLOCKFALL ")
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let buffer = f.buffer_mut();

    for (y, row) in snapshot.grid.rows().iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            if let Some(color) = cell {
                paint_cell(buffer, inner, x as i32, y as i32, BLOCK_SYMBOL, rgb(color.rgb()));
            }
        }
    }

    let current = *snapshot.current;

    // Drop shadow where the piece would land
    if show_ghost && !snapshot.game_over && snapshot.ghost_row > current.position.y {
        let (r, g, b) = current.color.shadow_rgb();
        for (x, y) in current.cells_at(current.position.x, snapshot.ghost_row) {
            paint_cell(buffer, inner, x, y, SHADOW_SYMBOL, Color::Rgb(r, g, b));
        }
    }

    for (x, y) in current.cells() {
        paint_cell(buffer, inner, x, y, BLOCK_SYMBOL, rgb(current.color.rgb()));
    }
}

// Paints one grid cell; coordinates above or outside the board are skipped
fn paint_cell(buffer: &mut Buffer, inner: Rect, x: i32, y: i32, symbol: &str, color: Color) {
    if x < 0 || y < 0 {
        return;
    }

    let cell_x = inner.x + x as u16 * CELL_WIDTH;
    let cell_y = inner.y + y as u16;
    if cell_x + CELL_WIDTH > inner.right() || cell_y >= inner.bottom() {
        return;
    }

    for dx in 0..CELL_WIDTH {
        if let Some(cell) = buffer.cell_mut((cell_x + dx, cell_y)) {
            cell.set_symbol(symbol);
            cell.set_fg(color);
            cell.set_bg(Color::Black);
        }
    }
}

fn render_side_panel(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(STATS_HEIGHT),
            Constraint::Length(NEXT_HEIGHT),
            Constraint::Length(ACHIEVEMENTS_HEIGHT),
            Constraint::Min(CONTROLS_HEIGHT),
        ])
        .split(area);

    let stats = Paragraph::new(vec![
        Line::from(format!("Score: {}", snapshot.score)),
        Line::from(format!("Level: {}", snapshot.level)),
        Line::from(format!("Lines: {}", snapshot.lines_cleared)),
        Line::from(format!("Best:  {}", snapshot.best_score)),
    ])
    .block(Block::default().borders(Borders::ALL).title(" Statistics "));
    f.render_widget(stats, sections[0]);

    render_next_piece(f, snapshot.next, sections[1]);

    let achievements: Vec<Line> = snapshot
        .achievements()
        .map(|(achievement, unlocked)| {
            if unlocked {
                Line::styled(
                    format!("✓ {}", achievement.label()),
                    Style::default().fg(Color::Green),
                )
            } else {
                Line::styled(
                    format!("□ {}", achievement.label()),
                    Style::default().fg(Color::DarkGray),
                )
            }
        })
        .collect();
    let achievements = Paragraph::new(achievements)
        .block(Block::default().borders(Borders::ALL).title(" Achievements "));
    f.render_widget(achievements, sections[2]);

    let controls = Paragraph::new(
        "←/→: Move\n\
        ↓: Soft drop\n\
        ↑: Rotate\n\
        Space: Hard drop\n\
        Esc/Q: Quit",
    )
    .block(Block::default().borders(Borders::ALL).title(" Controls "))
    .wrap(Wrap { trim: true });
    f.render_widget(controls, sections[3]);
}

/// Draws the preview piece centered in its panel.
pub fn render_next_piece(f: &mut Frame, piece: &Piece, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Next ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let piece_width = piece.width() as u16 * CELL_WIDTH;
    let piece_height = piece.height() as u16;
    let origin = Rect {
        x: inner.x + inner.width.saturating_sub(piece_width) / 2,
        y: inner.y + inner.height.saturating_sub(piece_height) / 2,
        width: piece_width.min(inner.width),
        height: piece_height.min(inner.height),
    };

    let color = rgb(piece.color.rgb());
    for (row, col) in piece.shape.filled() {
        paint_cell(f.buffer_mut(), origin, col as i32, row as i32, BLOCK_SYMBOL, color);
    }
}

fn render_game_over(f: &mut Frame, snapshot: &Snapshot, board_area: Rect) {
    let text = vec![
        Line::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Score: {}", snapshot.score)),
        Line::from(format!("Best:  {}", snapshot.best_score)),
        Line::from(""),
        Line::styled("Enter: play again", Style::default().fg(Color::Gray)),
        Line::styled("Esc: quit", Style::default().fg(Color::Gray)),
    ];

    let popup = centered_area(22, 9, board_area);
    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        popup,
    );
}

pub fn render_title(f: &mut Frame) {
    let text = vec![
        Line::styled(
            "B L O C K F A L L",
            Style::default()
                .fg(rgb(BlockColor::Cyan.rgb()))
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled("←/→: Move the piece", Style::default().fg(Color::Gray)),
        Line::styled("↑: Rotate the piece", Style::default().fg(Color::Gray)),
        Line::styled("↓: Drop faster", Style::default().fg(Color::Gray)),
        Line::styled("Space: Drop instantly", Style::default().fg(Color::Gray)),
        Line::from(""),
        Line::styled(
            "Press Enter to start",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Line::styled("Esc/Q to quit", Style::default().fg(Color::DarkGray)),
    ];

    let area = centered_rect(60, 60, f.area());
    f.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// A `width × height` rect centered in `area`, clipped to it.
#[must_use]
pub fn centered_area(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Helper function to create a centered rect using up certain percentage of the available rect
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
