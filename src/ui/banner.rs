//! Shared inline banners: the error strip forms render under themselves
//! and the transient success notice.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{STATUS_ERROR, STATUS_OK};

/// Inline error banner, shown under the form that raised it.
pub fn error_paragraph(message: &str) -> Paragraph<'_> {
    let line = Line::from(vec![
        Span::styled(
            " Error! ",
            Style::default()
                .fg(STATUS_ERROR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(message, Style::default().fg(STATUS_ERROR)),
    ]);
    Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(STATUS_ERROR)),
    )
}

/// Transient success notice; the app clears it a few seconds after the
/// action that raised it.
pub fn notice_paragraph(text: &str) -> Paragraph<'_> {
    Paragraph::new(Line::from(Span::styled(
        format!(" {}", text),
        Style::default().fg(STATUS_OK),
    )))
}
