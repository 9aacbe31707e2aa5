//! Menu-driven text interface.
//!
//! [`TextUi`] drives the main menu, the gameplay loop and the settings
//! editor over any line-based input and two output streams. Prompts and
//! state go to `out`; complaints about input and rejected commands go to
//! `err`. Running out of input acts like `quit` or `back` at every prompt.
//!
//! ## Example
//!
//! ```
//! use tcg::core::GameRng;
//! use tcg::ui::TextUi;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let input = "1\nquit\n3\n".as_bytes();
//! let (mut out, mut err): (Vec<u8>, Vec<u8>) = (Vec::new(), Vec::new());
//!
//! let path = dir.path().join("tcg.json");
//! let mut ui = TextUi::new(input, &mut out, &mut err, path, GameRng::new(7)).unwrap();
//! ui.main_menu().unwrap();
//! drop(ui);
//!
//! let out = String::from_utf8(out).unwrap();
//! assert!(out.contains("Active player: "));
//! assert!(err.is_empty());
//! ```

pub mod render;

use std::io::{self, BufRead, Write};
use std::num::ParseIntError;
use std::path::PathBuf;

use crate::cards::Card;
use crate::core::config_file::{self, ConfigFileError};
use crate::core::{GameConfig, GameRng, InvalidConfig};
use crate::events::GameEvent;
use crate::game::Game;

/// An editable field of the settings menu, in menu order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Setting {
    Players,
    Deck,
    InitialHealth,
    InitialManaCapacity,
    InitialHandSize,
    MaxManaCapacity,
    MaxHandSize,
    BleedingDamage,
}

impl Setting {
    const ALL: [Setting; 8] = [
        Setting::Players,
        Setting::Deck,
        Setting::InitialHealth,
        Setting::InitialManaCapacity,
        Setting::InitialHandSize,
        Setting::MaxManaCapacity,
        Setting::MaxHandSize,
        Setting::BleedingDamage,
    ];

    /// Look a setting up by its 1-based menu number.
    fn from_menu(number: usize) -> Option<Self> {
        Self::ALL.get(number.checked_sub(1)?).copied()
    }

    fn label(self) -> &'static str {
        match self {
            Setting::Players => "Set players",
            Setting::Deck => "Set deck",
            Setting::InitialHealth => "Set initial health",
            Setting::InitialManaCapacity => "Set initial mana capacity",
            Setting::InitialHandSize => "Set initial hand size",
            Setting::MaxManaCapacity => "Set max mana capacity",
            Setting::MaxHandSize => "Set max hand size",
            Setting::BleedingDamage => "Set bleeding damage amount",
        }
    }

    fn prompt(self) -> &'static str {
        match self {
            Setting::Players => "Please enter comma separated player names: ",
            Setting::Deck => {
                "Please enter comma separated integers, each representing a card's cost: "
            }
            Setting::InitialHealth | Setting::MaxManaCapacity | Setting::MaxHandSize => {
                "Please enter a positive integer: "
            }
            Setting::InitialHandSize => "Please enter an integer not greater than the deck size: ",
            Setting::InitialManaCapacity | Setting::BleedingDamage => "Please enter an integer: ",
        }
    }

    /// Parse `value` and apply it to `config`.
    fn apply(self, config: &mut GameConfig, value: &str) -> Result<(), EditError> {
        match self {
            Setting::Players => config.set_players(value.split(','))?,
            Setting::Deck => {
                let mut costs = value
                    .split(',')
                    .map(|cost| cost.trim().parse::<i32>())
                    .collect::<Result<Vec<_>, _>>()?;
                costs.sort_unstable();
                config.set_deck(costs.into_iter().map(Card::new).collect())?;
            }
            Setting::InitialHealth => config.set_initial_health(value.parse()?)?,
            Setting::InitialManaCapacity => config.set_initial_mana_capacity(value.parse()?)?,
            Setting::InitialHandSize => config.set_initial_hand_size(value.parse()?)?,
            Setting::MaxManaCapacity => config.set_max_mana_capacity(value.parse()?)?,
            Setting::MaxHandSize => config.set_max_hand_size(value.parse()?)?,
            Setting::BleedingDamage => config.set_bleeding_damage(value.parse()?)?,
        }
        Ok(())
    }
}

/// Why a settings edit was rejected. The text is shown to the user.
#[derive(Debug, thiserror::Error)]
enum EditError {
    #[error("Please enter a valid integer")]
    NotAnInteger(#[from] ParseIntError),

    #[error(transparent)]
    Invalid(#[from] InvalidConfig),
}

/// Interactive session over generic streams.
pub struct TextUi<R, W, E> {
    input: R,
    out: W,
    err: E,
    config: GameConfig,
    config_path: PathBuf,
    rng: GameRng,
    matches_played: u32,
}

impl<R: BufRead, W: Write, E: Write> TextUi<R, W, E> {
    /// Create a session, loading settings from `config_path`.
    ///
    /// Unusable settings files are reported on `err` and replaced by the
    /// defaults. A missing file is not reported.
    pub fn new(
        input: R,
        out: W,
        mut err: E,
        config_path: impl Into<PathBuf>,
        rng: GameRng,
    ) -> io::Result<Self> {
        let config_path = config_path.into();
        let (config, load_error) = config_file::load_or_default(&config_path);
        match load_error {
            None => {}
            Some(ConfigFileError::Corrupted(_)) => writeln!(
                err,
                "Previous configuration is corrupted, default configuration will be loaded instead."
            )?,
            Some(ConfigFileError::Invalid(reason)) => {
                writeln!(err, "{reason}")?;
                writeln!(
                    err,
                    "Previous configuration could not be loaded for the reason above, \
                     default configuration will be loaded instead."
                )?;
            }
            Some(ConfigFileError::Io(_)) => writeln!(
                err,
                "Previous configuration could not be loaded, default configuration will be loaded instead."
            )?,
        }

        Ok(Self {
            input,
            out,
            err,
            config,
            config_path,
            rng,
            matches_played: 0,
        })
    }

    /// Settings currently in effect.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Run the main menu until the user quits or input ends.
    pub fn main_menu(&mut self) -> io::Result<()> {
        loop {
            writeln!(
                self.out,
                "Choose an option below: \n1) Start game\n2) Customize game settings\n3) Quit"
            )?;
            let Some(choice) = self.read_line()? else {
                return Ok(());
            };
            match choice.as_str() {
                "1" => self.gameplay()?,
                "2" => self.customize_menu()?,
                "3" => return Ok(()),
                _ => writeln!(self.err, "Please enter a valid option.")?,
            }
        }
    }

    /// Play one match with the current settings.
    fn gameplay(&mut self) -> io::Result<()> {
        let rng = self
            .rng
            .for_context(&format!("match-{}", self.matches_played));
        self.matches_played += 1;

        let mut game = match Game::with_config_players(self.config.clone(), rng) {
            Ok(game) => game,
            Err(err) => return writeln!(self.err, "{err}"),
        };
        if let Err(err) = game.start() {
            return writeln!(self.err, "{err}");
        }
        self.show(&mut game)?;

        while game.is_live() {
            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            let result = match line.as_str() {
                "end" => game.end_turn(),
                "quit" => return Ok(()),
                other => match other.parse::<i32>() {
                    Ok(cost) => game.play_card(Card::new(cost)),
                    Err(_) => {
                        writeln!(self.err, "Please enter a card's cost value, 'end' or 'quit'")?;
                        continue;
                    }
                },
            };
            match result {
                Ok(()) => self.show(&mut game)?,
                Err(err) => writeln!(self.err, "{err}")?,
            }
        }
        Ok(())
    }

    /// Print pending events, then the state unless one of them ended the
    /// match.
    fn show(&mut self, game: &mut Game) -> io::Result<()> {
        let events = game.take_events();
        render::write_events(&mut self.out, &events)?;
        if !events.iter().any(GameEvent::is_terminal) {
            render::write_state(&mut self.out, game)?;
        }
        Ok(())
    }

    fn customize_menu(&mut self) -> io::Result<()> {
        loop {
            write!(self.out, "Current game settings: \n{}", self.config)?;
            writeln!(self.out, "Choose an option below: ")?;
            for (index, setting) in Setting::ALL.iter().enumerate() {
                writeln!(self.out, "{}) {}", index + 1, setting.label())?;
            }
            writeln!(self.out, "9) Revert to default settings\n10) Back to main menu")?;

            let Some(choice) = self.read_line()? else {
                return Ok(());
            };
            let number = choice.parse::<usize>().ok();
            if let Some(setting) = number.and_then(Setting::from_menu) {
                writeln!(self.out, "{}", setting.prompt())?;
                let Some(value) = self.read_line()? else {
                    return Ok(());
                };
                match setting.apply(&mut self.config, &value) {
                    Ok(()) => self.save()?,
                    Err(err) => writeln!(self.err, "{err}")?,
                }
                continue;
            }
            match number {
                Some(9) => {
                    self.config.reset();
                    self.save()?;
                }
                Some(10) => return Ok(()),
                _ => writeln!(self.err, "Please enter a valid option.")?,
            }
        }
    }

    fn save(&mut self) -> io::Result<()> {
        if let Err(err) = config_file::save(&self.config, &self.config_path) {
            tracing::warn!(path = %self.config_path.display(), error = %err, "could not save config");
            writeln!(
                self.err,
                "Unable to save config to disk, your customizations might get lost on exit."
            )?;
        }
        Ok(())
    }

    /// Next trimmed input line, or `None` once input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }
}
