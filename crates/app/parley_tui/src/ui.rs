//! Rendering. Everything here reads [`App`] and draws; nothing mutates it.

use parley_client::ChatWidget;
use parley_client::widget::{INPUT_PLACEHOLDER, PRESET_PROMPTS};
use parley_core::Sender;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthChar;

use crate::app::App;

const HELP: &str = " Enter send · F1-F3 presets · PgUp/PgDn scroll · Esc quit";

/// Screen regions, shared by rendering and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatLayout {
    pub transcript: Rect,
    pub input: Rect,
    pub send: Rect,
    pub presets: [Rect; 3],
    pub help: Rect,
}

pub fn layout(area: Rect) -> ChatLayout {
    let [transcript, input_row, preset_row, help] = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let [input, send] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(8)]).areas(input_row);
    let presets: [Rect; 3] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(preset_row);

    ChatLayout {
        transcript,
        input,
        send,
        presets,
        help,
    }
}

/// Area inside a one-cell border.
pub fn inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

pub fn transcript_lines(widget: &ChatWidget) -> Vec<Line<'_>> {
    let mut lines = Vec::new();

    for msg in widget.transcript() {
        let label = match msg.sender {
            Sender::User => Span::styled(
                "You:",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Sender::Bot => Span::styled(
                "Bot:",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        };
        lines.push(Line::from(label));
        for line in msg.text.lines() {
            lines.push(Line::from(line));
        }
        lines.push(Line::default());
    }

    lines
}

fn transcript_paragraph(widget: &ChatWidget) -> Paragraph<'_> {
    Paragraph::new(Text::from(transcript_lines(widget))).wrap(Wrap { trim: false })
}

/// Rows the transcript takes when word-wrapped to `width` columns, as drawn.
pub fn transcript_height(widget: &ChatWidget, width: u16) -> u16 {
    let rows = transcript_paragraph(widget).line_count(width.max(1));
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Horizontal window over the input line that keeps the cursor in view.
///
/// Returns how many leading chars to skip and the cursor's column, in
/// terminal cells, within the window.
fn input_window(input: &str, cursor: usize, width: usize) -> (usize, usize) {
    let widths: Vec<usize> = input
        .chars()
        .take(cursor)
        .map(|c| c.width().unwrap_or(0))
        .collect();

    let mut column: usize = widths.iter().sum();
    let mut skip = 0;
    while width > 0 && column >= width && skip < widths.len() {
        column -= widths[skip];
        skip += 1;
    }
    (skip, column)
}

pub fn render(app: &App, frame: &mut Frame) {
    let areas = layout(frame.area());

    render_transcript(app, frame, areas.transcript);
    render_input(app.session.widget(), frame, areas.input);
    render_send(app.session.widget(), frame, areas.send);
    render_presets(app.session.widget(), frame, &areas.presets);

    frame.render_widget(
        Paragraph::new(Span::styled(HELP, Style::default().fg(Color::DarkGray))),
        areas.help,
    );
}

fn render_transcript(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" Parley v{} · {} ", parley_core::version(), app.server));

    let chat = transcript_paragraph(app.session.widget())
        .block(block)
        .scroll((app.scroll_offset(), 0));

    frame.render_widget(chat, area);
}

fn render_input(widget: &ChatWidget, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Prompt ");

    let inner_width = usize::from(area.width.saturating_sub(2));
    let (skip, column) = input_window(widget.input(), widget.cursor(), inner_width);

    let content = if widget.input().is_empty() {
        Line::from(Span::styled(
            INPUT_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut used = 0;
        let visible: String = widget
            .input()
            .chars()
            .skip(skip)
            .take_while(|c| {
                used += c.width().unwrap_or(0);
                used <= inner_width
            })
            .collect();
        Line::from(visible)
    };

    frame.render_widget(Paragraph::new(content).block(block), area);

    let x = area.x + 1 + u16::try_from(column).unwrap_or(0);
    frame.set_cursor_position((x, area.y + 1));
}

fn render_send(widget: &ChatWidget, frame: &mut Frame, area: Rect) {
    let color = if widget.input().trim().is_empty() {
        Color::DarkGray
    } else {
        Color::Green
    };

    let button = Paragraph::new(Span::styled(
        "Send",
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );

    frame.render_widget(button, area);
}

fn render_presets(widget: &ChatWidget, frame: &mut Frame, areas: &[Rect; 3]) {
    for (i, (prompt, area)) in PRESET_PROMPTS.iter().zip(areas).enumerate() {
        let selected = widget.input() == *prompt;
        let border = if selected { Color::Magenta } else { Color::DarkGray };

        let button = Paragraph::new(Line::from(vec![
            Span::styled(
                format!("F{} ", i + 1),
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            ),
            Span::raw(*prompt),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );

        frame.render_widget(button, *area);
    }
}
