mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flapwing::app::{App, AppInput, AppOptions};
use flapwing::{build_info, logging, Difficulty, FlightConfig, Pilot};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

/// How long to wait for a key before drawing the next frame.
const INPUT_POLL: Duration = Duration::from_millis(8);

#[derive(Parser, Debug)]
#[command(name = "flapwing")]
#[command(about = "Terminal flappy-bird with an auto-solve pilot")]
#[command(disable_version_flag = true)]
struct Args {
    /// Difficulty preset: novice, apprentice, journeyman, master
    #[arg(short, long, default_value = "apprentice")]
    difficulty: Difficulty,

    /// JSON file overriding world/physics parameters (replaces the preset)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start in auto-solve mode
    #[arg(short, long)]
    auto: bool,

    /// Auto-solve policy: threshold or glide-path
    #[arg(short, long, default_value = "threshold")]
    pilot: Pilot,

    /// Seed of the first run (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print version information
    #[arg(short = 'V', long)]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("{}", build_info::version_line());
        return Ok(());
    }

    let (config, difficulty) = match &args.config {
        Some(path) => (FlightConfig::from_json_file(path)?, None),
        None => (
            FlightConfig::for_difficulty(args.difficulty),
            Some(args.difficulty),
        ),
    };

    let log_path = logging::init_file("info");
    let seed = args.seed.unwrap_or_else(rand::random::<u64>);
    info!(?log_path, seed, "flapwing starting");

    let mut app = App::new(AppOptions {
        config,
        difficulty,
        auto_solve: args.auto,
        pilot: args.pilot,
        seed,
    })?;

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    // Restore the terminal even if the loop fails.
    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    println!("Best score: {}", app.best_score);
    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let mut last_frame = Instant::now();

    while !app.should_quit {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(INPUT_POLL)? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    app.process_input(map_key(key_event.code));
                }
            }
        }

        let now = Instant::now();
        app.tick(now - last_frame);
        last_frame = now;
    }

    info!(best_score = app.best_score, "flapwing exiting");
    Ok(())
}

fn map_key(code: KeyCode) -> AppInput {
    match code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => AppInput::Jump,
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Tab => AppInput::ToggleAutoSolve,
        KeyCode::Char('p') | KeyCode::Char('P') => AppInput::CyclePilot,
        KeyCode::Char('r') | KeyCode::Char('R') => AppInput::Restart,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => AppInput::Quit,
        _ => AppInput::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(map_key(KeyCode::Char(' ')), AppInput::Jump);
        assert_eq!(map_key(KeyCode::Up), AppInput::Jump);
        assert_eq!(map_key(KeyCode::Char('a')), AppInput::ToggleAutoSolve);
        assert_eq!(map_key(KeyCode::Char('p')), AppInput::CyclePilot);
        assert_eq!(map_key(KeyCode::Char('r')), AppInput::Restart);
        assert_eq!(map_key(KeyCode::Esc), AppInput::Quit);
        assert_eq!(map_key(KeyCode::Char('x')), AppInput::Other);
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["flapwing", "--auto", "-p", "glide-path", "-d", "master"]);
        assert!(args.auto);
        assert_eq!(args.pilot, Pilot::GlidePath);
        assert_eq!(args.difficulty, Difficulty::Master);
        assert!(args.seed.is_none());
    }
}
