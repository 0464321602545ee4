//! The classification form: key field, email pane and report pane

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::components::render_help_popup;
use super::theme::{Theme, borders};
use super::widgets::{error_bar, help_bar, sanitize_text, status_bar, wrapped_height};
use crate::app::state::{AppState, FormField};
use crate::constants::{KEY_FIELD_HEIGHT, MIN_SPLIT_VIEW_WIDTH};
use crate::session::ResultPhase;

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const CURSOR: &str = "▏";

const HINTS: [(&str, &str); 8] = [
    ("Ctrl+R", "classify"),
    ("Ctrl+L", "clear"),
    ("Ctrl+S", "export"),
    ("Ctrl+T", "template"),
    ("F2-F4", "samples"),
    ("Tab", "next field"),
    ("F1", "help"),
    ("Ctrl+Q", "quit"),
];

/// Screen regions of the form
struct FormLayout {
    title: Rect,
    key: Rect,
    email: Rect,
    report: Rect,
    status: Rect,
    hints: Rect,
}

impl FormLayout {
    fn new(area: Rect) -> Self {
        let [title, key, body, status, hints] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(KEY_FIELD_HEIGHT),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let [email, report] = if body.width >= MIN_SPLIT_VIEW_WIDTH {
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(body)
        } else {
            Layout::vertical([Constraint::Percentage(45), Constraint::Percentage(55)])
                .areas(body)
        };

        Self {
            title,
            key,
            email,
            report,
            status,
            hints,
        }
    }
}

/// Furthest the report can scroll on a screen of `area` before the pane runs
/// past its last line.
pub fn max_report_scroll(state: &AppState, area: Rect) -> u16 {
    let Some(report) = state.session.last_result() else {
        return 0;
    };
    let inner = Block::default()
        .borders(Borders::ALL)
        .inner(FormLayout::new(area).report);
    wrapped_height(&sanitize_text(report), inner.width).saturating_sub(inner.height)
}

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Theme::main_bg()), area);

    let layout = FormLayout::new(area);

    status_bar(
        frame,
        layout.title,
        "mailsift",
        &format!("{} │ {}", state.template.label(), state.model),
    );

    render_key_field(frame, layout.key, state);
    render_email_pane(frame, layout.email, state);
    render_report_pane(frame, layout.report, state, max_report_scroll(state, area));

    match &state.status.error {
        Some(error) => error_bar(frame, layout.status, error),
        None => status_bar(
            frame,
            layout.status,
            &state.status.message,
            phase_label(state.session.phase()),
        ),
    }

    help_bar(frame, layout.hints, &HINTS);

    if let Some(ref keys) = state.help {
        render_help_popup(frame, area, keys);
    }
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let block = Block::default().title(title).borders(Borders::ALL);
    if focused {
        block
            .border_type(borders::input_focused())
            .border_style(Theme::border_focused())
    } else {
        block
            .border_type(borders::panel())
            .border_style(Theme::border())
    }
}

fn render_key_field(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FormField::ApiKey;
    let block = field_block(" API key ", focused);
    let inner = block.inner(area);

    // Only the length of the key is ever rendered
    let len = state.session.api_key.masked_len();
    let mut spans = Vec::new();
    if len > 0 {
        let visible = len.min(inner.width.saturating_sub(1) as usize);
        spans.push(Span::styled("•".repeat(visible), Theme::text()));
    }
    if focused {
        spans.push(Span::styled(CURSOR, Theme::text_accent()));
    }
    if len == 0 {
        spans.push(Span::styled(
            "paste your Groq API key (kept in memory only)",
            Theme::text_muted(),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_email_pane(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FormField::Email;
    let block = field_block(" Email ", focused);
    let inner = block.inner(area);

    let email = &state.session.email_text;
    if email.is_empty() && !focused {
        let placeholder = Paragraph::new("Type or paste the email to classify. F2-F4 load samples.")
            .style(Theme::text_muted())
            .wrap(Wrap { trim: false })
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let mut text = Text::from(sanitize_text(email));
    if focused {
        // Cursor sits after the last character
        match text.lines.last_mut() {
            Some(line) => line.push_span(Span::styled(CURSOR, Theme::text_accent())),
            None => text.lines.push(Line::from(Span::styled(CURSOR, Theme::text_accent()))),
        }
    }

    // Keep the end of the email in view while typing
    let scroll = if focused {
        wrapped_height(email, inner.width).saturating_sub(inner.height)
    } else {
        0
    };

    let paragraph = Paragraph::new(text)
        .style(Theme::text())
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(block);
    frame.render_widget(paragraph, area);
}

fn render_report_pane(frame: &mut Frame, area: Rect, state: &AppState, max_scroll: u16) {
    let title = if state.session.is_pending() {
        let frame_char = SPINNER[state.spinner_frame() % SPINNER.len()];
        Line::from(vec![
            Span::styled(" Report ", Theme::label()),
            Span::styled(format!("{} classifying ", frame_char), Theme::pending()),
        ])
    } else {
        Line::from(Span::styled(" Report ", Theme::label()))
    };

    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(borders::panel())
        .border_style(Theme::border());
    if let Some(ref path) = state.last_export
        && let Some(name) = path.file_name()
    {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" saved {} ", name.to_string_lossy()),
            Theme::text_success(),
        )));
    }

    let paragraph = match state.session.last_result() {
        Some(report) => Paragraph::new(sanitize_text(report))
            .style(Theme::text())
            .scroll((state.report_scroll.min(max_scroll), 0)),
        None if state.session.is_pending() => {
            Paragraph::new("Waiting for the completion service...").style(Theme::text_muted())
        }
        None => Paragraph::new("No report yet. Press Ctrl+R to classify the email.")
            .style(Theme::text_muted()),
    };

    frame.render_widget(paragraph.wrap(Wrap { trim: false }).block(block), area);
}

fn phase_label(phase: &ResultPhase) -> &'static str {
    match phase {
        ResultPhase::Empty => "no report",
        ResultPhase::Pending => "classifying",
        ResultPhase::Success => "report ready",
        ResultPhase::Failure(_) => "failed",
    }
}
