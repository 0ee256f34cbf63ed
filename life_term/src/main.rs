use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::sync::LazyLock;

use app_dirs2::{AppDataType, AppInfo, get_app_root};
use clap::Parser;
use life_lib::{Engine, Pattern, Session, persistence};

mod args;
mod input;
mod menu;
mod render;
mod settings;

const APP_INFO: AppInfo = AppInfo {
    name: "life_term",
    author: "life_term",
};

/// Default directory for the user configuration data.
static USER_CONFIG_PATH: LazyLock<PathBuf> = LazyLock::new(|| {
    get_app_root(AppDataType::UserConfig, &APP_INFO).unwrap_or_else(|_| PathBuf::from("."))
});

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let arguments = args::Args::parse();

    let config_path = arguments
        .config_path
        .clone()
        .unwrap_or_else(|| USER_CONFIG_PATH.clone());
    let settings_file = config_path.join("settings.json");
    let mut settings = settings::Settings::load(&settings_file);
    if arguments.halt_on_oscillation {
        settings.halt_on_oscillation = true;
    }

    let pattern = match &arguments.pattern_file {
        // A file given on the command line skips the menu; failing to load
        // it is the one fatal startup error.
        Some(path) => match persistence::load_layout(path) {
            Ok(layout) => Pattern::custom(path.display().to_string(), layout),
            Err(error) => {
                return Err(format!("could not load {}: {error}", path.display()).into());
            }
        },
        None => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            match menu::choose_pattern(&mut stdin.lock(), &mut stdout)? {
                Some(pattern) => pattern,
                None => return Ok(()),
            }
        }
    };

    log::info!(
        "starting pattern {:?} ({} cells alive)",
        pattern.name(),
        pattern.layout().alive_count()
    );
    let engine = Engine::new(pattern.layout().clone(), settings.policy());
    let session = Session::new(pattern, settings.interval(), settings.colours());

    let (commands, command_receiver) = life_lib::command_channel();
    let simulation = life_lib::start_engine(
        engine,
        session,
        command_receiver,
        render::AnsiRenderer::new(),
    )?;

    input::input_loop(io::stdin().lock(), &commands);

    let session = simulation
        .join()
        .map_err(|_| "the simulation thread panicked")?;
    settings.update_from(&session);
    settings.save(&settings_file);
    Ok(())
}
