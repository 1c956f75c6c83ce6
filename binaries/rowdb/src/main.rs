use {
    clap::{arg, Command},
    rowdb::{Error as SessionError, Session},
    snafu::prelude::*,
    std::{env, io, num::NonZeroUsize, process},
    storage::{Table, TABLE_MAX_PAGES},
    tracing_subscriber::EnvFilter,
};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display(
        "invalid page count `{}`, pass a positive number with `-p` or set `{}`",
        value,
        ROWDB_MAX_PAGES
    ))]
    InvalidMaxPages { value: String },

    #[snafu(display("{}", source))]
    RunSession {
        #[snafu(backtrace)]
        source: SessionError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

const ROWDB_MAX_PAGES: &str = "ROWDB_MAX_PAGES";

const DEFAULT_LOG_FILTER: &str = "warn";

const EXIT_READ_FAILURE: i32 = 1;
const EXIT_ERROR: i32 = 2;

fn cli() -> Command {
    let pkg_name = env!("CARGO_PKG_NAME");

    Command::new(pkg_name)
        .bin_name(pkg_name)
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(arg!(-p --"max-pages" <PAGES> "maximum number of pages the table may use").required(false))
}

fn main() {
    // stdout carries the operator protocol, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = try_main() {
        match err {
            // already reported to the operator by the session
            Error::RunSession { source } if source.is_read_failure() => {
                process::exit(EXIT_READ_FAILURE)
            }
            err => {
                eprintln!("{}", err);
                process::exit(EXIT_ERROR);
            }
        }
    }
}

fn try_main() -> Result<()> {
    let matches = cli().get_matches();

    let max_pages = match matches.get_one::<String>("max-pages") {
        Some(pages) => pages.to_owned(),
        None => env::var(ROWDB_MAX_PAGES).unwrap_or_else(|_| TABLE_MAX_PAGES.to_string()),
    };
    let max_pages = max_pages
        .parse::<NonZeroUsize>()
        .ok()
        .context(InvalidMaxPagesSnafu { value: &max_pages })?;

    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut session = Session::new(stdin.lock(), stdout.lock(), Table::new(max_pages));
    session.run().context(RunSessionSnafu)
}
