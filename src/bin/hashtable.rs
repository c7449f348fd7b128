use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

use hashtable::HashTable;
use hashtable::Interpreter;
use hashtable::Value;
use slog::debug;
use slog::error;
use slog::info;
use slog::o;
use slog::Discard;
use slog::Drain;
use slog::Level;
use slog::LevelFilter;
use slog::Logger;
use slog_async::Async;
use slog_term::CompactFormat;
use slog_term::TermDecorator;
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io;
use std::io::BufReader;
use std::path::PathBuf;
use std::process;
use std::result::Result;

const STDIN_PATH: &str = "-";

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn level(self) -> Option<Level> {
        match self {
            Self::Off => None,
            Self::Error => Some(Level::Error),
            Self::Warn => Some(Level::Warning),
            Self::Info => Some(Level::Info),
            Self::Debug => Some(Level::Debug),
            Self::Trace => Some(Level::Trace),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            Self::Off => write!(f, "off"),
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity of diagnostics written to stderr
    #[arg(long, value_enum, global = true, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Add three entries, look them up, remove one and look it up again
    Demo,

    /// Print the bucket id a key hashes to
    Hash { key: String },

    /// Execute a script of add/remove/lookup/hash commands against a fresh table.
    /// Reads stdin when FILE is omitted or "-". Print an error and return a non-zero exit code on failure.
    Run { file: Option<PathBuf> },
}

fn root_logger(level: LogLevel) -> Logger {
    let level = match level.level() {
        Some(level) => level,
        None => return Logger::root(Discard, o!()),
    };
    let decorator = TermDecorator::new().stderr().build();
    let drain = CompactFormat::new(decorator).build().fuse();
    let drain = LevelFilter::new(drain, level).fuse();
    let drain = Async::new(drain).build().fuse();
    Logger::root(drain, o!())
}

fn show(value: Option<&Value>) -> String {
    value.map_or_else(|| "None".to_string(), Value::to_string)
}

fn demo(log: &Logger) {
    let mut table = HashTable::new();

    table.add("name", Value::from("John"));
    table.add("age", Value::Int(30));
    table.add("city", Value::from("New York"));
    debug!(log, "populated table"; "entries" => table.len(), "buckets" => table.bucket_count());

    println!("Name: {}", show(table.lookup("name")));
    println!("Age: {}", show(table.lookup("age")));
    println!("City: {}", show(table.lookup("city")));
    println!("Unknown: {}", show(table.lookup("email")));

    table.remove("age");
    println!("Age after removal: {}", show(table.lookup("age")));
}

fn run_script(file: Option<PathBuf>, log: &Logger) -> Result<(), Box<dyn Error>> {
    let mut interpreter = Interpreter::new(log.new(o!("command" => "run")));
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match file {
        Some(path) if path.as_os_str() != STDIN_PATH => {
            info!(log, "reading script"; "file" => path.display().to_string());
            let reader = BufReader::new(File::open(&path)?);
            interpreter.run(reader, &mut out)?;
        }
        _ => {
            info!(log, "reading script from stdin");
            interpreter.run(io::stdin().lock(), &mut out)?;
        }
    }
    Ok(())
}

fn dispatch(command: Commands, log: &Logger) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Demo => demo(log),
        Commands::Hash { key } => println!("{}", hashtable::hash(&key)),
        Commands::Run { file } => run_script(file, log)?,
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let log = root_logger(cli.log_level);

    info!(log, "starting up"; "version" => env!("CARGO_PKG_VERSION"));
    debug!(log, "using configuration"; "log-level" => cli.log_level.to_string());

    let result = dispatch(cli.command, &log);
    if let Err(err) = &result {
        error!(log, "{}", err);
    }
    // flush the async drain before exiting
    drop(log);

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
