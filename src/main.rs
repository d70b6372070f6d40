use anyhow::Result;
use clap::Parser;
use snake_tui::app::App;
use snake_tui::game::GameConfig;

#[derive(Parser)]
#[command(name = "snake_tui")]
#[command(version, about = "Classic snake in the terminal")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value = "20")]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value = "20")]
    height: usize,

    /// Milliseconds between game ticks
    #[arg(long, default_value = "150")]
    tick_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::new(cli.width, cli.height, cli.tick_ms);
    App::new(config).run().await
}
