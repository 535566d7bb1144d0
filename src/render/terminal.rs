// Full-screen text tables via ratatui

use super::Renderer;
use crate::models::{DeltaSample, Sample};
use crate::views::{InterfaceRow, NetworkRow, SystemRow, interface_rows};
use anyhow::Context;
use crossterm::{cursor, execute, terminal};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};
use ratatui::{Frame, Terminal};
use serde::Deserialize;
use std::io::Stdout;

pub const TITLE: &str = " Real-Time Network Monitor (Ctrl+C to stop)";

/// Column colors of the colored style, cycled left to right.
const COLUMN_COLORS: [Color; 4] = [Color::Green, Color::Blue, Color::Yellow, Color::Red];

/// Borders + header line.
const TABLE_CHROME_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableStyle {
    /// Bold magenta headers, one color per column, rounded borders.
    #[default]
    Colored,
    /// No colors, double-line borders.
    Plain,
}

/// Redraws the title, network, system and (optionally) per-interface tables
/// on every tick.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    style: TableStyle,
    show_interfaces: bool,
}

impl TerminalRenderer<CrosstermBackend<Stdout>> {
    pub fn stdout(style: TableStyle, show_interfaces: bool) -> anyhow::Result<Self> {
        Self::new(CrosstermBackend::new(std::io::stdout()), style, show_interfaces)
    }
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(backend: B, style: TableStyle, show_interfaces: bool) -> anyhow::Result<Self> {
        let mut terminal = Terminal::new(backend).context("terminal init")?;
        terminal.clear().context("terminal clear")?;
        Ok(Self {
            terminal,
            style,
            show_interfaces,
        })
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn render(&mut self, sample: &Sample, delta: &DeltaSample) -> anyhow::Result<()> {
        let network = NetworkRow::new(sample, delta);
        let system = SystemRow::new(sample);
        let interfaces = self.show_interfaces.then(|| interface_rows(sample));
        let style = self.style;
        self.terminal
            .draw(|frame| draw(frame, style, &network, &system, interfaces.as_deref()))
            .context("terminal draw")?;
        Ok(())
    }
}

fn draw(
    frame: &mut Frame,
    style: TableStyle,
    network: &NetworkRow,
    system: &SystemRow,
    interfaces: Option<&[InterfaceRow]>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(TABLE_CHROME_HEIGHT + 1),
            Constraint::Length(TABLE_CHROME_HEIGHT + 1),
            Constraint::Min(0),
        ])
        .split(frame.size());

    frame.render_widget(Paragraph::new(TITLE), chunks[0]);
    frame.render_widget(
        table("Network Monitor", NetworkRow::HEADERS, vec![network.cells()], style),
        chunks[1],
    );
    frame.render_widget(
        table("System", SystemRow::HEADERS, vec![system.cells()], style),
        chunks[2],
    );
    if let Some(rows) = interfaces {
        let cells = rows.iter().map(InterfaceRow::cells).collect();
        frame.render_widget(
            table("Interfaces", InterfaceRow::HEADERS, cells, style),
            chunks[3],
        );
    }
}

fn table<'a, const N: usize>(
    title: &'a str,
    headers: [&'a str; N],
    rows: Vec<[&'a str; N]>,
    style: TableStyle,
) -> Table<'a> {
    let (header_style, border_type) = match style {
        TableStyle::Colored => (
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            BorderType::Rounded,
        ),
        TableStyle::Plain => (Style::default(), BorderType::Double),
    };
    let cell_style = |column: usize| match style {
        TableStyle::Colored => Style::default().fg(COLUMN_COLORS[column % COLUMN_COLORS.len()]),
        TableStyle::Plain => Style::default(),
    };

    let header = Row::new(headers.map(Cell::from)).style(header_style);
    let body = rows.into_iter().map(|row| {
        Row::new(
            row.into_iter()
                .enumerate()
                .map(|(i, text)| Cell::from(text).style(cell_style(i))),
        )
    });
    let widths = vec![Constraint::Ratio(1, N as u32); N];

    Table::new(body, widths).header(header).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(border_type),
    )
}

/// Switches stdout to the alternate screen and hides the cursor until dropped,
/// so the shell's scrollback survives the redraw loop.
pub struct AlternateScreen {
    _private: (),
}

impl AlternateScreen {
    pub fn enter() -> anyhow::Result<Self> {
        execute!(std::io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)
            .context("enter alternate screen")?;
        Ok(Self { _private: () })
    }
}

impl Drop for AlternateScreen {
    fn drop(&mut self) {
        let _ = execute!(std::io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
    }
}
