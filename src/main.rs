mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use maze_runner::compute::{init_state, next_level, step};
use maze_runner::config::{Settings, DEFAULT_HEIGHT, DEFAULT_TICK_MS, DEFAULT_WIDTH};
use maze_runner::entities::{GameState, GameStatus, Intent, StepResult, STARTING_LIVES};
use maze_runner::error::GameError;

/// Find the exit, shoot the adversaries, eat the food.
#[derive(Parser, Debug)]
#[command(name = "maze_runner", version)]
struct Args {
    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Starting board width (odd, at least 5).
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: i32,

    /// Starting board height (odd, at least 5).
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: i32,

    #[arg(long, default_value_t = STARTING_LIVES)]
    lives: u32,

    /// Milliseconds per tick.
    #[arg(long, default_value_t = DEFAULT_TICK_MS)]
    tick_ms: u64,

    /// Write debug logs here.  Nothing is logged without it.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn settings(&self) -> Settings {
        Settings {
            width: self.width,
            height: self.height,
            lives: self.lives,
            seed: self.seed,
            tick_ms: self.tick_ms,
        }
    }
}

// ── Input mapping ─────────────────────────────────────────────────────────────

enum KeyAction {
    Play(Intent),
    Restart,
    Quit,
}

fn map_key(code: KeyCode, modifiers: KeyModifiers) -> Option<KeyAction> {
    let action = match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Play(Intent::MoveUp),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Play(Intent::MoveDown),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Play(Intent::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            KeyAction::Play(Intent::MoveRight)
        }
        KeyCode::Char(' ') => KeyAction::Play(Intent::Shoot),
        KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
        _ => return None,
    };
    Some(action)
}

/// Block until a key is pressed.  Returns `false` to quit.
fn wait_for_start<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<bool> {
    display::render_title(out)?;
    loop {
        let Ok(event) = rx.recv() else {
            return Ok(false);
        };
        if let Event::Key(KeyEvent { code, modifiers, kind: KeyEventKind::Press, .. }) = event {
            return Ok(!matches!(map_key(code, modifiers), Some(KeyAction::Quit)));
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Returns `true` → quit program,  `false` → back to the title screen.
///
/// One intent per tick: the first mapped key press drained from the channel
/// wins and any further presses queued in the same tick are dropped.  Quit
/// is honoured no matter when it arrives.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
    rng: &mut StdRng,
    tick: Duration,
) -> Result<bool, GameError> {
    loop {
        let tick_start = Instant::now();

        let mut intent = None;
        while let Ok(event) = rx.try_recv() {
            let Event::Key(KeyEvent { code, modifiers, kind: KeyEventKind::Press, .. }) = event
            else {
                continue;
            };
            match map_key(code, modifiers) {
                Some(KeyAction::Quit) => return Ok(true),
                Some(KeyAction::Restart) if state.status == GameStatus::GameOver => {
                    return Ok(false);
                }
                Some(KeyAction::Play(wanted)) if intent.is_none() => intent = Some(wanted),
                _ => {}
            }
        }

        if step(state, intent, rng) == StepResult::LevelComplete {
            next_level(state, rng)?;
        }

        display::render(out, &state.snapshot())?;

        let elapsed = tick_start.elapsed();
        if elapsed < tick {
            thread::sleep(tick - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging(path: Option<&Path>) -> std::io::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(())
}

fn main() -> Result<(), GameError> {
    let args = Args::parse();
    let settings = args.settings();
    settings.validate()?;
    init_logging(args.log_file.as_deref())?;

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = run(&mut out, &rx, &settings);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    settings: &Settings,
) -> Result<(), GameError> {
    let seed = settings.seed.unwrap_or_else(rand::random);
    info!(seed, width = settings.width, height = settings.height, "starting run");
    let mut rng = StdRng::seed_from_u64(seed);
    let tick = Duration::from_millis(settings.tick_ms);

    while wait_for_start(out, rx)? {
        let mut state = init_state(settings, &mut rng)?;
        if game_loop(out, &mut state, rx, &mut rng, tick)? {
            break;
        }
    }
    Ok(())
}
