//! Console front end for both games.
//!
//! Rendering, prompts and pacing live here. The interactive loops drive the
//! pure engines in [`crate::games`] and never make a rule decision themselves.

pub mod prompt;
pub mod render;
pub mod text;
pub mod tictactoe;
pub mod twenty_one;

pub use text::joinor;

use std::io::Write;
use std::time::Duration;

use anyhow::Result;

/// Initialize terminal logging on stderr.
///
/// Location, target and thread fields are switched off to keep lines short.
pub fn log(level: log::LevelFilter) -> Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}

/// Log level for a `-v` count: warn, info, debug, then trace.
pub fn level_for(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Sleep-based pause between screens.
#[derive(Clone, Copy, Debug)]
pub struct Pacing {
    delay: Duration,
}

impl Pacing {
    pub fn new(millis: u64) -> Self {
        Self {
            delay: Duration::from_millis(millis),
        }
    }

    /// Pause for the configured delay.
    pub fn pause(&self) {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }
}

/// Clear the terminal and home the cursor.
pub fn clear() -> Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "\x1B[2J\x1B[1;1H")?;
    stdout.flush()?;
    Ok(())
}
