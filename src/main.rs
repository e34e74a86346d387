use clap::{Parser, Subcommand};
use enigma::cli::{run_session, show_rotors};
use enigma::Settings;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Version info from build.rs
const VERSION: &str = env!("ENIGMA_VERSION");
const PROFILE: &str = env!("ENIGMA_PROFILE");
const GIT_HASH: &str = env!("ENIGMA_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} ({})", PROFILE, VERSION, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "enigma")]
#[command(author, about = "Three-rotor Enigma machine simulator", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt or decrypt configuration and message lines
    #[command(alias = "r")]
    Run {
        /// Input file (reads stdin when omitted)
        input: Option<PathBuf>,

        /// Output file (writes stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON settings file that configures the machine before the first line
        #[arg(long)]
        settings: Option<PathBuf>,
    },

    /// Generate a random machine key
    #[command(alias = "k")]
    Keygen {
        /// Print the key as JSON settings instead of a configuration line
        #[arg(long)]
        json: bool,
    },

    /// List the available rotors and reflectors
    #[command(alias = "c")]
    Rotors,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    settings: Option<PathBuf>,
) -> enigma::Result<()> {
    let initial = match settings {
        Some(path) => {
            tracing::info!("Loading settings from {}", path.display());
            Some(Settings::load(&path)?)
        }
        None => None,
    };

    let reader: Box<dyn io::BufRead> = match input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };
    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    let messages = run_session(reader, &mut writer, initial.as_ref())?;
    tracing::info!("Processed {} message lines", messages);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("enigma {}", get_version());
        return ExitCode::SUCCESS;
    }

    init_logging(&cli.log_level);

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            if Cli::command().print_help().is_err() {
                return ExitCode::FAILURE;
            }
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Run {
            input,
            output,
            settings,
        } => run(input, output, settings),

        Commands::Keygen { json } => {
            let settings = Settings::random(&mut rand::thread_rng());
            if json {
                settings.to_json().map(|text| println!("{}", text))
            } else {
                println!("{}", settings);
                Ok(())
            }
        }

        Commands::Rotors => {
            print!("{}", show_rotors());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
