use anyhow::Result;
use arcade::constants::{POLL_INTERVAL_MS, TICK_INTERVAL_MS};
use arcade::games::{catch, dodge};
use arcade::games::{CatchDifficulty, CatchGame, DodgeDifficulty, DodgeGame, Player, Screen, TicTacToeGame};
use arcade::input::{handle_key, InputResult};
use arcade::menu::MenuState;
use arcade::ui;
use clap::{Parser, ValueEnum};
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io;
use std::time::{Duration, Instant};

/// Terminal mini-game collection: tic-tac-toe and two falling-object games.
#[derive(Parser)]
#[command(name = "arcade", version, about)]
struct Args {
    /// Seed for spawn randomness (useful for reproducing a run).
    #[arg(long)]
    seed: Option<u64>,

    /// Jump straight into a game instead of the menu.
    #[arg(long, value_enum)]
    game: Option<GameArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GameArg {
    Tictactoe,
    Dodge,
    Catch,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut screen = match args.game {
        None => Screen::Menu(MenuState::new()),
        Some(GameArg::Tictactoe) => Screen::TicTacToe(TicTacToeGame::new(Player::One)),
        Some(GameArg::Dodge) => {
            Screen::Dodge(DodgeGame::new(DodgeDifficulty::Novice, &mut rng))
        }
        Some(GameArg::Catch) => {
            Screen::Catch(CatchGame::new(CatchDifficulty::Novice, &mut rng))
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|frame| ui::draw(frame, &screen))?;

        // Poll for input, leaving time to honor the tick interval.
        if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                if let InputResult::Quit = handle_key(&mut screen, key_event.code, &mut rng) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= Duration::from_millis(TICK_INTERVAL_MS) {
            tick(&mut screen, &mut rng);
            last_tick = Instant::now();
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    Ok(())
}

/// Advance whichever action game is on screen. A finished run is not ticked
/// again until restarted, and the menu and board game have no tick behavior.
fn tick<R: Rng>(screen: &mut Screen, rng: &mut R) {
    match screen {
        Screen::Dodge(game) => dodge::logic::process_tick(game, rng),
        Screen::Catch(game) => catch::logic::process_tick(game, rng),
        Screen::Menu(_) | Screen::TicTacToe(_) => {}
    }
}
