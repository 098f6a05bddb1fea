use clap::Parser;
use color_eyre::Result;
use tracing::info;

use vitals::app::App;
use vitals::config;
use vitals::event::EventHandler;
use vitals::logging;
use vitals::session;
use vitals::system::provider::SysinfoProvider;
use vitals::system::sampler::Sampler;
use vitals::ui;

#[derive(Parser)]
#[command(
    name = "vitals",
    version,
    about = "Live CPU and memory dashboard for the terminal"
)]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let _ = Cli::parse();
    let config = config::load_config();

    // Running without a log file is fine; the dashboard itself is unaffected.
    let _log_path = logging::init(&config.logging).ok();

    let mut app = App::new(Sampler::new(SysinfoProvider::new()), &config);

    // Installs a panic hook that restores the terminal before reporting.
    let mut terminal = ratatui::try_init()?;
    let mut events = EventHandler::new();
    let result = session::drive(&mut app, &mut events, |view| {
        terminal.draw(|frame| ui::draw(frame, view))?;
        Ok(())
    })
    .await;
    ratatui::restore();

    info!(ok = result.is_ok(), "session ended");
    result
}
