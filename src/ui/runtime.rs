use std::io;
use std::time::Duration;

use crate::api::{worker, InventoryApi};
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(config: Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);

    let api = InventoryApi::new(&config.api);
    let sender = worker::spawn(api, events.sender())?;

    let mut app = App::new();
    app.attach_api(sender);
    app.set_api_base(config.api.base_url.clone());
    app.start_loading();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Api(outcome)) => app.on_api(outcome),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
