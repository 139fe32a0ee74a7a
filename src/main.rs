use family100::cli::{CliInterface, parse_cli};
use family100::game_state::game_loop;
use family100::loader::{FileLoader, HttpLoader, QuestionLoader};
use family100::logging::{default_log_path, init_logging};
use family100::tui::TuiInterface;
use log::{error, info};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    if let Err(e) = init_logging(&log_path) {
        eprintln!("Failed to set up logging at '{}': {e}", log_path.display());
        return ExitCode::FAILURE;
    }
    info!("family100 {} starting", env!("CARGO_PKG_VERSION"));

    let loader: Box<dyn QuestionLoader> = match &cli.questions_path {
        Some(path) => match FileLoader::from_file(path) {
            Ok(loader) => Box::new(loader),
            Err(e) => {
                eprintln!("Failed to load questions from '{}': {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => match HttpLoader::new(cli.api_url.clone(), cli.timeout()) {
            Ok(loader) => Box::new(loader),
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
    };

    if cli.plain {
        let stdin = io::stdin();
        game_loop(&loader, CliInterface::new(stdin.lock()));
        return ExitCode::SUCCESS;
    }

    match TuiInterface::new() {
        Ok(tui) => {
            let game = game_loop(&loader, tui);
            if let Some(session) = game.session() {
                println!("Final score: {}", session.score());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Terminal setup failed: {e}");
            eprintln!("Failed to start the terminal interface: {e}");
            eprintln!("Try again with --plain.");
            ExitCode::FAILURE
        }
    }
}
