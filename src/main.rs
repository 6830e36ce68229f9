//! Terminal glyph rain (default binary).
//!
//! Columns of random glyphs fall down the terminal with a fading trail until
//! any key is pressed. The only argument is the hue of the rain.

mod logging;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::runtime::Runtime;

use glyph_rain::engine::{self, RainConfig};
use glyph_rain::input::CrosstermKeys;
use glyph_rain::term::{CrosstermTerminal, Terminal};
use glyph_rain::types::{ColorMode, Hue};

#[derive(Debug, Parser)]
#[command(name = "glyph-rain", version, about)]
struct Cli {
    /// Color of the rain: green, red, blue or yellow (anything else is green)
    #[arg(allow_hyphen_values = true)]
    hue: Option<String>,

    /// Ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    rest: Vec<String>,
}

impl Cli {
    fn hue(&self) -> Hue {
        self.hue
            .as_deref()
            .map(Hue::parse_or_default)
            .unwrap_or_default()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init()?;

    let config = RainConfig::new(cli.hue(), ColorMode::detect());

    let term = CrosstermTerminal::new();
    term.size().context("cannot determine terminal size")?;

    let result = run(config, term);

    // Always try to restore terminal state.
    let _ = CrosstermTerminal::new().exit();
    result
}

fn run(config: RainConfig, term: CrosstermTerminal) -> Result<()> {
    let rt = Runtime::new().context("cannot start async runtime")?;
    let result = rt
        .block_on(engine::run_with_keys(config, term, CrosstermKeys))
        .map(|_| ());
    // A watcher still blocked on the keyboard must not keep us alive.
    rt.shutdown_timeout(Duration::from_millis(100));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hue_of(args: &[&str]) -> Hue {
        Cli::try_parse_from(args).unwrap().hue()
    }

    #[test]
    fn test_known_hues() {
        assert_eq!(hue_of(&["glyph-rain"]), Hue::Green);
        assert_eq!(hue_of(&["glyph-rain", "red"]), Hue::Red);
        assert_eq!(hue_of(&["glyph-rain", "blue"]), Hue::Blue);
        assert_eq!(hue_of(&["glyph-rain", "yellow"]), Hue::Yellow);
    }

    #[test]
    fn test_unknown_values_fall_back_to_green() {
        assert_eq!(hue_of(&["glyph-rain", "cyan"]), Hue::Green);
        assert_eq!(hue_of(&["glyph-rain", "-x"]), Hue::Green);
        assert_eq!(hue_of(&["glyph-rain", "--purple"]), Hue::Green);
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        assert_eq!(hue_of(&["glyph-rain", "red", "extra"]), Hue::Red);
        assert_eq!(hue_of(&["glyph-rain", "blue", "--fast", "-q"]), Hue::Blue);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
