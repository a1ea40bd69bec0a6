use anyhow::Context;

use stockpile::config::Config;
use stockpile::logging::init_tracing;
use stockpile::ui::runtime;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::load().context("failed to load configuration")?;
    tracing::info!(base_url = %config.api.base_url, "starting stockpile");

    runtime::run(config).context("terminal UI error")?;
    Ok(())
}
