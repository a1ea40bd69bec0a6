use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Screen};
use crate::ui::inventory::InventoryField;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    match app.screen() {
        Screen::Inventory => inventory_key(app, key),
        Screen::CreateProduct => product_key(app, key),
    }
}

fn inventory_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'n') {
        app.go_to(Screen::CreateProduct);
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.reset_inventory();
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.focus_next();
            return;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return;
        }
        KeyCode::Enter => {
            app.submit_inventory();
            return;
        }
        _ => {}
    }

    match app.inventory_focus() {
        InventoryField::Product => match key.code {
            KeyCode::Left | KeyCode::Up => app.cycle_product(-1),
            KeyCode::Right | KeyCode::Down => app.cycle_product(1),
            _ => {}
        },
        InventoryField::Quantity => match key.code {
            KeyCode::Char(ch) if is_plain(key) => app.quantity_char(ch),
            KeyCode::Backspace => app.quantity_backspace(),
            _ => {}
        },
        InventoryField::List => match key.code {
            KeyCode::Up => app.move_cursor(-1),
            KeyCode::Down => app.move_cursor(1),
            KeyCode::Char('d') | KeyCode::Delete => app.delete_selected_item(),
            _ => {}
        },
    }
}

fn product_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.go_to(Screen::Inventory),
        KeyCode::Enter => app.submit_product(),
        KeyCode::Backspace => app.product_backspace(),
        KeyCode::Char(ch) if is_plain(key) => app.product_char(ch),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

fn is_plain(key: KeyEvent) -> bool {
    key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT
}
