use anyhow::Result;
use clap::Parser;
use std::time::Duration;

use oled_snake::game::GameConfig;
use oled_snake::modes::PlayMode;

#[derive(Parser)]
#[command(name = "oled_snake")]
#[command(version, about = "Snake on a simulated 64x128 monochrome panel")]
struct Cli {
    /// Panel width in cells
    #[arg(long, default_value_t = 64)]
    width: i32,

    /// Panel height in cells
    #[arg(long, default_value_t = 128)]
    height: i32,

    /// Seed for apple placement; random if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between simulation ticks
    #[arg(long, default_value_t = 125)]
    tick_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::new(cli.width, cli.height);

    let mut mode = PlayMode::new(config, cli.seed, Duration::from_millis(cli.tick_ms));
    mode.run().await
}
