//! rust-hanoi terminal front end.
//!
//! Reads one command per line from stdin, feeds it to a `GameSession`, and
//! draws the board after every command.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use rust_hanoi::core::{Difficulty, Disk, HanoiError, Level, SessionConfig, TowerId};
use rust_hanoi::render::TextPresenter;
use rust_hanoi::session::{Effect, GameSession, Presenter};

/// Play Tower of Hanoi in the terminal
#[derive(Parser, Debug)]
#[command(name = "rust-hanoi")]
#[command(about = "Play Tower of Hanoi in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Query string as a host page would pass it, e.g. "?level=3&difficulty=easy"
    #[arg(long, default_value = "")]
    query: String,

    /// Starting level, overrides the query
    #[arg(long)]
    level: Option<u32>,

    /// Layout style (easy or hard), overrides the query
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Pause between a win and the next level, in milliseconds
    #[arg(long, default_value = "1000")]
    advance_delay_ms: u64,
}

impl Cli {
    fn session_config(&self) -> SessionConfig {
        let mut config = SessionConfig::from_query(&self.query)
            .with_advance_delay(Duration::from_millis(self.advance_delay_ms));
        if let Some(level) = self.level {
            config = config.with_level(Level::new(level));
        }
        if let Some(difficulty) = self.difficulty {
            config = config.with_difficulty(difficulty);
        }
        config
    }
}

/// One line of player input.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Grab(TowerId, Disk),
    Drop(TowerId),
    Move(TowerId, TowerId),
    Undo,
    Restart,
    Difficulty(Difficulty),
    Show,
    Help,
    Quit,
}

const HELP: &str = "\
commands:
  grab <tower> <size>   pick up a disk
  drop <tower>          drop the picked-up disk
  move <from> <to>      grab the top of <from> and drop it on <to>
  undo                  take back the last move
  restart               start the level again
  difficulty <d>        switch to easy or hard and restart
  show                  redraw the board
  quit";

fn parse_tower(arg: Option<&str>) -> Result<TowerId> {
    let arg = arg.ok_or_else(|| anyhow!("missing tower number"))?;
    let number: u8 = arg
        .parse()
        .with_context(|| format!("bad tower number {arg:?}"))?;
    Ok(TowerId::new(number)?)
}

fn parse_command(line: &str) -> Result<Command> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(Command::Show);
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "grab" => {
            let tower = parse_tower(words.next())?;
            let size = words
                .next()
                .ok_or_else(|| anyhow!("missing disk size"))?;
            let size: u32 = size
                .parse()
                .with_context(|| format!("bad disk size {size:?}"))?;
            Command::Grab(tower, Disk::new(size))
        }
        "drop" => Command::Drop(parse_tower(words.next())?),
        "move" | "mv" => {
            let from = parse_tower(words.next())?;
            let to = parse_tower(words.next())?;
            Command::Move(from, to)
        }
        // "redo" is an alias, it still takes back the last move
        "undo" | "redo" | "u" => Command::Undo,
        "restart" | "r" => Command::Restart,
        "difficulty" => {
            let value = words
                .next()
                .ok_or_else(|| anyhow!("missing difficulty"))?;
            Command::Difficulty(value.parse()?)
        }
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => bail!("unknown command {other:?}, try \"help\""),
    };

    if let Some(extra) = words.next() {
        bail!("unexpected argument {extra:?}");
    }
    Ok(command)
}

fn run(session: &mut GameSession, command: Command) -> Result<Vec<Effect>> {
    let effects = match command {
        Command::Grab(tower, disk) => {
            if !session.on_grab(tower, disk) {
                debug!(%tower, %disk, "grab refused");
            }
            Vec::new()
        }
        Command::Drop(tower) => session.on_drop(tower),
        Command::Move(from, to) => {
            let top = session
                .tower(from)
                .peek()
                .ok_or(HanoiError::EmptyTower(from))?;
            session.on_grab(from, top);
            session.on_drop(to)
        }
        Command::Undo => session.on_undo(),
        Command::Restart => session.on_restart(),
        Command::Difficulty(difficulty) => session.set_difficulty(difficulty),
        Command::Show | Command::Help | Command::Quit => Vec::new(),
    };
    Ok(effects)
}

fn show(out: &mut impl Write, session: &GameSession, presenter: &TextPresenter) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "{}", presenter.draw())?;
    writeln!(
        out,
        "level {} ({}), {} moves",
        session.level(),
        session.difficulty(),
        session.history().len()
    )?;
    if let Some(message) = presenter.message() {
        writeln!(out, "> {message}")?;
    }
    out.flush()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.session_config();
    info!(?config, "starting session");

    let (mut session, effects) = GameSession::start(config);
    let mut presenter = TextPresenter::new();
    presenter.present(&effects);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    show(&mut out, &session, &presenter)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        let command = match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "error: {err:#}")?;
                continue;
            }
        };

        match run(&mut session, command) {
            Ok(effects) => presenter.present(&effects),
            Err(err) => writeln!(out, "error: {err:#}")?,
        }
        show(&mut out, &session, &presenter)?;

        // Single-threaded: wait out the win message, then set up the next level.
        while let Some((ticket, delay)) = presenter.take_scheduled() {
            std::thread::sleep(delay);
            let effects = session.advance(ticket);
            presenter.present(&effects);
            show(&mut out, &session, &presenter)?;
        }
    }

    Ok(())
}
