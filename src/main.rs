#![warn(clippy::all, clippy::pedantic)]

use anyhow::Context;
use blockskit::config::Config;
use blockskit::{GameState, catalog};
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    info!("Starting Blockskit");

    let config = Config::load();
    let state = GameState::from_config(&config);

    let shapes = catalog();
    info!(
        "{} shape families, total spawn weight {}",
        shapes.len(),
        shapes.total_weight()
    );

    println!(
        "{}",
        toml::to_string_pretty(shapes).context("Failed to serialize shape catalog")?
    );

    for (family, variant) in shapes.variants() {
        println!("{family} (weight {}):\n{variant}\n", variant.weight());
    }

    println!(
        "{}",
        toml::to_string_pretty(&state.snapshot()).context("Failed to serialize game state")?
    );

    Ok(())
}
