use std::io;
use std::sync::Arc;

use clap::Parser;

use askmentor::api::HttpBackend;
use askmentor::cli::Cli;
use askmentor::config::Config;
use askmentor::model::Route;
use askmentor::session::Session;
use askmentor::state::AppState;
use askmentor::{listing, logging, tui};

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32, String> {
    let cli = Cli::parse();
    let config = Config::resolve(&cli)?;
    logging::init(&config.log_file)?;

    let session = Session::new(config.token.clone(), config.token_expires_at);
    let backend = HttpBackend::new(&config.api_base, &session, config.timeout)
        .map_err(|e| format!("Cannot create HTTP client: {}", e))?;

    // Handle --list-lessons
    if cli.list_lessons {
        return listing::list_lessons(
            session,
            &backend,
            &config.web_base,
            &mut io::stdout(),
            &mut io::stderr(),
        );
    }

    let state = AppState::new(session);
    let exit = tui::run_tui(state, Arc::new(backend))?;
    if exit.submit_pending {
        eprintln!("Quit while posting; your question may not have been posted.");
    }

    match exit.route {
        Some(Route::Login) => {
            println!("{}", listing::login_notice(&config.web_base));
            Ok(listing::NOT_SIGNED_IN)
        }
        Some(route) => {
            println!("Next: {} ({})", route.url(&config.web_base), route.describe());
            Ok(0)
        }
        None => Ok(0),
    }
}
