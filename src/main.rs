// SPDX-License-Identifier: MPL-2.0
//! Dev-console front end for the bootstrap components.
//!
//! Setter flags persist a preference for the next boot; without setters the
//! command prints the resolved state and, when a game directory is given,
//! runs the overlay boot pipeline against it.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use evercraft_boost::application::port::host::{Restart, RestartHost};
use evercraft_boost::application::port::storage::PreferenceStore;
use evercraft_boost::config::PreferencesFile;
use evercraft_boost::infrastructure::{DeferredRestart, FsScriptLoader, SystemTimeSource};
use evercraft_boost::localization::{self, Localization};
use evercraft_boost::speed::SpeedControl;

const USAGE: &str = "\
Usage: evercraft_boost [OPTIONS]

Options:
  --config-dir <DIR>   Preference directory override
  --launch-url <URL>   Launch URL carrying the ru_debug query parameter
  --game-dir <DIR>     Game install directory; runs the overlay boot pipeline
  --locale <TAG>       Persist the locale preference (en or ru)
  --ru-debug <VAL>     Persist the translation-debug flag (1/true/on enable)
  --speed <N>          Persist the speed multiplier (clamped to 1..=20)
  --reset-speed        Persist real-time speed (same as --speed 1)
  --help               Show this help
";

struct Flags {
    config_dir: Option<PathBuf>,
    launch_url: Option<String>,
    game_dir: Option<PathBuf>,
    locale: Option<String>,
    ru_debug: Option<String>,
    speed: Option<f64>,
    reset_speed: bool,
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains("--help") {
        print!("{USAGE}");
        std::process::exit(0);
    }
    Ok(Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        launch_url: args.opt_value_from_str("--launch-url")?,
        game_dir: args.opt_value_from_str("--game-dir")?,
        locale: args.opt_value_from_str("--locale")?,
        ru_debug: args.opt_value_from_str("--ru-debug")?,
        speed: args.opt_value_from_str("--speed")?,
        reset_speed: args.contains("--reset-speed"),
    })
}

#[tokio::main]
async fn main() -> ExitCode {
    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}");
            eprint!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let store: Arc<dyn PreferenceStore> =
        Arc::new(PreferencesFile::with_dir_override(flags.config_dir));
    let host = Arc::new(DeferredRestart::new());

    let speed = SpeedControl::init(
        Arc::clone(&store),
        Arc::clone(&host) as Arc<dyn RestartHost>,
        Arc::new(SystemTimeSource::new()),
    );
    let mut locales = Localization::init(
        Arc::clone(&store),
        Arc::clone(&host) as Arc<dyn RestartHost>,
        flags.launch_url.as_deref(),
    );

    let mut mutated = false;

    if let Some(tag) = flags.locale.as_deref() {
        match locales.set_locale_tag(tag, Restart::Request) {
            Ok(locale) => println!("locale set to {locale}"),
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        }
        mutated = true;
    }

    if let Some(value) = flags.ru_debug.as_deref() {
        let enabled = localization::parse_flag(value);
        locales.set_ru_debug(enabled, Restart::Request);
        println!("ru-debug set to {enabled}");
        mutated = true;
    }

    if let Some(value) = flags.speed {
        let applied = speed.set_multiplier(value, Restart::Request);
        println!("speed multiplier set to x{applied}");
        mutated = true;
    }

    if flags.reset_speed {
        let applied = speed.reset(Restart::Request);
        println!("speed multiplier reset to x{applied}");
        mutated = true;
    }

    if mutated {
        if host.is_requested() {
            println!("restart the client for the change to take effect");
        }
        return ExitCode::SUCCESS;
    }

    if let Some(game_dir) = flags.game_dir {
        let loader = FsScriptLoader::new(game_dir);
        let outcome = locales.boot(&loader).await;
        println!("boot: {outcome}");
    }

    println!("locale:   {}", locales.locale());
    println!("ru-debug: {}", locales.ru_debug());
    println!("{}", speed.debug_snapshot());

    ExitCode::SUCCESS
}
