//! Shared test utilities and the mock inventory service.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use stockpile::api::worker::ApiCommand;
use stockpile::ui::app::App;
use tokio::sync::mpsc;

pub fn make_app() -> App {
    App::new()
}

/// Build an `App` wired to a probe channel so tests can observe exactly
/// which API commands it issues.
pub fn make_app_with_probe() -> (App, mpsc::Receiver<ApiCommand>) {
    let (tx, rx) = mpsc::channel(8);
    let mut app = App::new();
    app.attach_api(tx);
    (app, rx)
}
