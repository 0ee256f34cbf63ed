use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// A layout file to load & simulate immediately, skipping the menu.
    /// If the file cannot be loaded the program exits with a failure status.
    pub pattern_file: Option<PathBuf>,

    /// The path to the directory which will contain the user configuration data.
    #[arg(short, long, value_name = "DIR")]
    pub(crate) config_path: Option<PathBuf>,

    /// Pause the simulation when a period-2 or period-3 oscillation is
    /// detected, instead of only reporting it.
    #[arg(long)]
    pub halt_on_oscillation: bool,
}
