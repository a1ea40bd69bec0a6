use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::api::InventoryRecord;
use crate::ui::banner;
use crate::ui::inventory::state::{InventoryField, InventoryFormState};
use crate::ui::store::AppState;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, DISABLED, GLOBAL_BORDER, HEADER_TEXT,
};

const PLACEHOLDER: &str = "Select a product";

pub fn render(frame: &mut Frame<'_>, area: Rect, store: &AppState, form: &InventoryFormState) {
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

    frame.render_widget(list_widget(store, form, regions[2]), regions[2]);
}

fn form_widget(form: &InventoryFormState) -> Paragraph<'_> {
    let label_style = Style::default().fg(DISABLED);

    let product_text = form.selected.as_deref().unwrap_or(PLACEHOLDER);
    let product_style = if form.selected.is_some() {
        Style::default().fg(HEADER_TEXT)
    } else {
        Style::default().fg(DISABLED)
    };
    let mut product_line = Line::from(vec![
        Span::styled(" Product name  ", label_style),
        Span::styled(format!("< {} >", product_text), product_style),
    ]);
    if form.focus == InventoryField::Product {
        product_line = product_line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
    }

    let mut quantity_line = Line::from(vec![
        Span::styled(" Quantity      ", label_style),
        Span::styled(form.quantity.as_str(), Style::default().fg(HEADER_TEXT)),
        Span::styled("_", Style::default().fg(DISABLED)),
    ]);
    if form.focus == InventoryField::Quantity {
        quantity_line = quantity_line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
    }

    let save_style = if form.can_submit() {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DISABLED)
    };
    let save_line = Line::from(vec![
        Span::raw(" "),
        Span::styled("[ Save ]", save_style),
        Span::styled("  Enter to save", Style::default().fg(DISABLED)),
    ]);

    Paragraph::new(vec![product_line, quantity_line, save_line]).block(
        Block::default()
            .title(Span::styled("Add Inventory", Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn list_widget<'a>(
    store: &'a AppState,
    form: &InventoryFormState,
    area: Rect,
) -> Paragraph<'a> {
    let list_focused = form.focus == InventoryField::List;

    let lines: Vec<Line> = if store.inventory.is_empty() {
        vec![Line::from(Span::styled(
            " No inventory recorded",
            Style::default().fg(DISABLED),
        ))]
    } else {
        let visible = area.height.saturating_sub(2).max(1) as usize;
        let skip = form.cursor.saturating_sub(visible.saturating_sub(1));
        store
            .inventory
            .iter()
            .enumerate()
            .skip(skip)
            .take(visible)
            .map(|(index, record)| item_row(record, list_focused && index == form.cursor))
            .collect()
    };

    Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(
                format!("Inventory ({})", store.inventory.len()),
                Style::default().fg(ACCENT),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

/// One inventory record with its delete affordance. Pure rendering; the
/// delete action is bound to the row's current index by the caller.
fn item_row(record: &InventoryRecord, selected: bool) -> Line<'_> {
    let mut spans = vec![Span::styled(
        format!(" {}: {}", record.name, record.quantity),
        Style::default().fg(HEADER_TEXT),
    )];
    if selected {
        spans.push(Span::styled("  d: delete", Style::default().fg(DISABLED)));
    }

    let mut line = Line::from(spans);
    if selected {
        line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
    }
    line
}
