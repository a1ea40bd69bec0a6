use ratatui::layout::Rect;
use ratatui::widgets::Clear;
use ratatui::Frame;

use crate::ui::app::{App, Screen};
use crate::ui::banner;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::{inventory, product};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    frame.render_widget(Header::new().widget(app.screen(), app.api_base()), header);
    frame.render_widget(Clear, body);

    // The last body line belongs to the transient notice while one shows
    let (body, notice_area) = if app.notice().is_some() && body.height > 1 {
        let notice = Rect {
            x: body.x,
            y: body.y + body.height - 1,
            width: body.width,
            height: 1,
        };
        (
            Rect {
                height: body.height - 1,
                ..body
            },
            Some(notice),
        )
    } else {
        (body, None)
    };

    match app.screen() {
        Screen::Inventory => {
            inventory::view::render(frame, body, app.store(), app.inventory_form());
        }
        Screen::CreateProduct => {
            product::view::render(frame, body, app.product_form());
        }
    }

    if let (Some(text), Some(area)) = (app.notice(), notice_area) {
        frame.render_widget(banner::notice_paragraph(text), area);
    }

    frame.render_widget(Footer::new().widget(app.screen(), footer), footer);
}
