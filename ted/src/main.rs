use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use ted_frontend::settings::Settings;
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Initialization error")]
    Initialization,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = cli().get_matches();

    let logpath = match get_logging_path(&args) {
        Ok(it) => it,
        Err(err) => {
            eprintln!("ted: {}", err);
            return;
        }
    };

    let logfile = tracing_appender::rolling::daily(logpath, "log");
    tracing_subscriber::fmt()
        .compact()
        .with_writer(logfile)
        .init();

    debug!("starting application");

    match ted_frontend::run(Settings::default()).await {
        Ok(()) => {
            debug!("closing application");
        }
        Err(err) => {
            error!("closing application with error: {:?}", err);
        }
    }
}

fn cli() -> Command {
    Command::new("ted")
        .about("ted - a tiny terminal text editor")
        .args([Arg::new("log-dir")
            .long("log-dir")
            .action(ArgAction::Set)
            .value_parser(value_parser!(PathBuf))
            .help("directory to write log files to instead of the cache directory")])
}

fn get_logging_path(args: &ArgMatches) -> Result<PathBuf, Error> {
    if let Some(path) = args.get_one::<PathBuf>("log-dir") {
        return Ok(path.clone());
    }

    match dirs::cache_dir() {
        Some(cache_dir) => Ok(cache_dir.join("ted").join("logs")),
        None => Err(Error::Initialization),
    }
}
