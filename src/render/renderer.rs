use anyhow::{Context, Result};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::canvas::TileCanvas;
use super::surface::{Status, Surface};
use crate::game::palette::{BACKGROUND_COLOR, BORDER_COLOR};
use crate::game::{Grid, Position, Rgb};

/// Terminal columns taken by one grid cell
const CELL_COLUMNS: u16 = 2;
const FILLED_CELL: &str = "[]";
const EMPTY_CELL: &str = "  ";

fn color(rgb: Rgb) -> Color {
    let Rgb(r, g, b) = rgb;
    Color::Rgb(r, g, b)
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, canvas: &TileCanvas, status: &Status) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Field
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

        frame.render_widget(self.render_stats(status), chunks[0]);

        let field_area = Self::center_field(chunks[1], canvas);
        frame.render_widget(self.render_field(canvas), field_area);

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    /// Exact-size rectangle for the field, centered in `area` and clipped to it
    fn center_field(area: Rect, canvas: &TileCanvas) -> Rect {
        let width = (canvas.width() as u16).saturating_mul(CELL_COLUMNS).saturating_add(2);
        let height = (canvas.height() as u16).saturating_add(2);

        let [column] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        let [field] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(column);
        field
    }

    fn render_field(&self, canvas: &TileCanvas) -> Paragraph<'_> {
        let background = Style::default().bg(color(canvas.background()));

        let lines: Vec<Line> = canvas
            .rows()
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|cell| match cell {
                        Some(cell) => Span::styled(
                            FILLED_CELL,
                            Style::default().fg(color(cell.border)).bg(color(cell.fill)),
                        ),
                        None => Span::styled(EMPTY_CELL, background),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Plain)
                .border_style(Style::default().fg(color(BORDER_COLOR)))
                .style(background)
                .title(" Snake "),
        )
    }

    fn render_stats(&self, status: &Status) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

        let text = Line::from(vec![
            Span::styled("Length: ", label),
            Span::styled(status.length.to_string(), value),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(status.best_length.to_string(), value),
            Span::raw("    "),
            Span::styled("Resets: ", label),
            Span::styled(status.resets.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(status.elapsed.clone(), Style::default().fg(Color::White)),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// A [`Surface`] backed by a ratatui terminal
pub struct TerminalSurface<B: Backend> {
    terminal: Terminal<B>,
    canvas: TileCanvas,
    renderer: Renderer,
}

impl<B: Backend> TerminalSurface<B> {
    pub fn new(terminal: Terminal<B>, grid: &Grid) -> Self {
        Self {
            terminal,
            canvas: TileCanvas::new(grid, BACKGROUND_COLOR),
            renderer: Renderer::new(),
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl<B: Backend> Surface for TerminalSurface<B> {
    fn clear(&mut self, background: Rgb) {
        self.canvas.clear(background);
    }

    fn draw_tile(&mut self, position: Position, fill: Rgb, border: Rgb) {
        self.canvas.fill(position, fill, border);
    }

    fn present(&mut self, status: &Status) -> Result<()> {
        let canvas = &self.canvas;
        let renderer = &self.renderer;
        self.terminal
            .draw(|frame| renderer.render(frame, canvas, status))
            .context("Failed to draw frame")?;
        Ok(())
    }
}
