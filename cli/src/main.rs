use std::{
    error::Error as _,
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};
use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;
use translator::{
    Error, ErrorKind, Translation,
    stats::{check_targets, write_stats},
    translate,
};

use crate::stats_args::{StatsArgs, collect_targets};

mod stats_args;

#[derive(Parser, Debug)]
#[command(
    name = "parse",
    about = "Translates IPPcode24 source into its XML representation",
    long_about = None,
    disable_help_flag = true,
    after_help = "Exit codes: 10 invalid arguments, 11 input error, 12 output error, \
                  21 invalid header, 22 unknown instruction, 23 other lexical or syntax error"
)]
struct Cli {
    /// Print help (cannot be combined with other arguments)
    #[arg(short, long, exclusive = true)]
    help: bool,

    /// Read the source from FILE instead of stdin
    #[arg(short, long, value_name = "FILE")]
    source: Option<PathBuf>,

    /// Write the XML to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    #[allow(dead_code)]
    #[command(flatten)]
    stats: StatsArgs,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let (cli, matches) = match parse_args(std::env::args_os()) {
        Ok(parsed) => parsed,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(ErrorKind::Usage.exit_code());
        }
    };

    if cli.help {
        let _ = Cli::command().print_help();
        println!();
        return ExitCode::SUCCESS;
    }

    match run(&cli, &matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Parse errors were already reported with their source snippet.
            if !matches!(e, Error::Parse(_)) {
                error!("{}", with_causes(&e));
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn parse_args<I, T>(args: I) -> Result<(Cli, ArgMatches), clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = Cli::command().try_get_matches_from(args)?;
    let cli = Cli::from_arg_matches(&matches)?;
    Ok((cli, matches))
}

fn run(cli: &Cli, matches: &ArgMatches) -> Result<(), Error> {
    let targets = collect_targets(matches)?;
    check_targets(&targets)?;

    let (file, src) = read_source(cli.source.as_deref())?;
    debug!(%file, chars = src.chars().count(), "translating");

    let translation: Translation = translate(&src).inspect_err(|e| {
        if let Err(io_err) = e.report(&file, &src) {
            warn!("failed to print diagnostic: {io_err}");
        }
    })?;

    write_output(cli.output.as_deref(), &translation.to_xml())?;
    write_stats(&targets, &translation.stats)?;

    Ok(())
}

fn read_source(path: Option<&Path>) -> Result<(String, String), Error> {
    match path {
        Some(path) => {
            let file = fs::File::open(path).map_err(|source| Error::Input {
                path: path.to_path_buf(),
                source,
            })?;
            read_from(path, file)
        }
        None => read_from(Path::new("<stdin>"), io::stdin().lock()),
    }
}

/// Reads the whole source, which must be valid UTF-8.
fn read_from(path: &Path, mut reader: impl Read) -> Result<(String, String), Error> {
    let mut src = String::new();
    reader
        .read_to_string(&mut src)
        .map_err(|source| Error::Input {
            path: path.to_path_buf(),
            source,
        })?;
    Ok((path.display().to_string(), src))
}

fn write_output(path: Option<&Path>, xml: &str) -> Result<(), Error> {
    match path {
        Some(path) => fs::write(path, xml).map_err(|source| Error::Output {
            path: path.to_path_buf(),
            source,
        }),
        None => io::stdout()
            .lock()
            .write_all(xml.as_bytes())
            .map_err(|source| Error::Output {
                path: PathBuf::from("<stdout>"),
                source,
            }),
    }
}

fn with_causes(e: &Error) -> String {
    let mut message = e.to_string();
    let mut cause = e.source();
    while let Some(inner) = cause {
        message.push_str(&format!(": {inner}"));
        cause = inner.source();
    }
    message
}
