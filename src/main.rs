//! contacts - A small interactive contact book for the terminal.

mod cli;

use cli::Cli;
use contacts_cli::app::{Session, SessionEnd};
use contacts_cli::config::Config;
use contacts_cli::error::Result;
use contacts_cli::logging;
use std::fs::File;
use std::io::{self, BufReader};
use tracing::{error, info};

fn main() {
    if let Err(e) = run() {
        error!("{}: {}", e.category(), e);
        eprintln!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config_path = cli.config_path();
    let config = Config::load_from_file(&config_path)?;

    if cli.log_stderr {
        logging::init_stderr_logging(&config.log_level);
    } else {
        logging::init_file_logging(&config.log_level);
    }
    info!("Loaded config from: {}", config_path.display());

    let mut session = Session::new(config.session_options(cli.prompt.as_deref()));
    let mut stdout = io::stdout().lock();

    let end = match cli.script_path() {
        Some(path) => {
            info!("Reading commands from: {}", path.display());
            let file = File::open(path)?;
            session.run(&mut BufReader::new(file), &mut stdout)?
        }
        None => session.run(&mut io::stdin().lock(), &mut stdout)?,
    };

    if end == SessionEnd::InputClosed {
        info!("Session ended without an exit command");
    }

    Ok(())
}
