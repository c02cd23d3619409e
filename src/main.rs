use stepmatch::adapters::FileContentSource;
use stepmatch::app::App;
use stepmatch::cli::{parse_args, run_cli_command, CliOutcome};
use stepmatch::config::GameConfig;
use stepmatch::content::{load_content, ContentModel};
use stepmatch::logging::init_logging;
use stepmatch::session::{tick_channel, TickReceiver};
use stepmatch::terminal::{setup_panic_hook, GameTerminal, TerminalManager};
use stepmatch::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use std::time::Instant;

fn main() -> Result<()> {
    // Informational flags run before any setup
    let run_args = match run_cli_command(parse_args(std::env::args())) {
        CliOutcome::Exit(code) => std::process::exit(code),
        CliOutcome::Play(args) => args,
    };

    color_eyre::install()?;

    let config = GameConfig::from_env().overlay_args(&run_args);
    if let Some(path) = &config.log_file {
        if let Err(e) = init_logging(path) {
            eprintln!("Warning: could not open log file {}: {}", path.display(), e);
        }
    }
    tracing::debug!(?config, "Configuration resolved");

    let runtime = tokio::runtime::Runtime::new()?;

    // Content is loaded once; failure is fatal and not retried
    let source = FileContentSource::new(&config.content_path);
    let content = match runtime.block_on(load_content(&source)) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("{}", e.user_message());
            eprintln!("  {}: {}", config.content_path.display(), e);
            std::process::exit(1);
        }
    };

    setup_panic_hook();
    runtime.block_on(run(content, &config))
}

async fn run(content: ContentModel, config: &GameConfig) -> Result<()> {
    let (tick_tx, mut tick_rx) = tick_channel();
    let mut app = App::from_config(content, config, tick_tx);

    let mut manager = TerminalManager::new()?;
    let result = run_app(manager.terminal(), &mut app, &mut tick_rx).await;
    manager.restore();

    if let Err(e) = &result {
        tracing::error!("Game stopped: {}", e);
    }
    result
}

async fn run_app(terminal: &mut GameTerminal, app: &mut App, ticks: &mut TickReceiver) -> Result<()> {
    let mut event_stream = EventStream::new();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }
        if app.should_quit {
            return Ok(());
        }

        let pulse_deadline = app.pulse.map(|p| tokio::time::Instant::from_std(p.until));

        tokio::select! {
            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => app.handle_key(key)?,
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(mouse)?,
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
            }

            Some(tick) = ticks.recv() => app.on_tick(tick),

            _ = sleep_until(pulse_deadline) => {
                app.expire_pulse(Instant::now());
            }
        }
    }
}

/// Resolve at `deadline`, or never when there is none.
async fn sleep_until(deadline: Option<tokio::time::Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
