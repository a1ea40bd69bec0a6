use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::banner;
use crate::ui::product::state::ProductFormState;
use crate::ui::theme::{ACCENT, DISABLED, GLOBAL_BORDER, HEADER_TEXT};

pub fn render(frame: &mut Frame<'_>, area: Rect, form: &ProductFormState) {
    let error_height = if form.error.is_some() { 2 } else { 0 };
    let regions = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(error_height),
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(form_widget(form), regions[0]);

    if let Some(message) = form.error.as_deref() {
        frame.render_widget(banner::error_paragraph(message), regions[1]);
    }
}

fn form_widget(form: &ProductFormState) -> Paragraph<'_> {
    let name_line = Line::from(vec![
        Span::styled(" Product Name  ", Style::default().fg(DISABLED)),
        Span::styled(form.name.as_str(), Style::default().fg(HEADER_TEXT)),
        Span::styled("_", Style::default().fg(DISABLED)),
    ]);

    let save_style = if form.can_submit() {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DISABLED)
    };
    let save_line = Line::from(vec![
        Span::raw(" "),
        Span::styled("[ Save ]", save_style),
        Span::styled("  Enter to save, Esc to go back", Style::default().fg(DISABLED)),
    ]);

    Paragraph::new(vec![name_line, Line::from(""), save_line]).block(
        Block::default()
            .title(Span::styled("Create Product", Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
