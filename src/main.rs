use artifact_size::cmd::{self, OutputArgs};
use artifact_size::report::{Format, UnchangedMode};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::process;

/// Build artifact size tracker
///
/// artifact-size measures the raw, gzip and brotli sizes of your build
/// outputs and reports how they changed between two builds.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Output flags shared by `analyze` and `compare`
#[derive(Args)]
struct OutputFlags {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Write output to file instead of stdout (format:filename or filename)
    #[arg(short = 'o', long = "output-file", value_name = "FILE")]
    output_file: Vec<String>,

    /// Write output to a GitHub Actions output (format:key)
    #[arg(long = "output-github", value_name = "FORMAT:KEY", hide = true)]
    output_github: Vec<String>,

    /// Disable header in output for formats with headers
    #[arg(long)]
    no_header: bool,
}

impl From<&OutputFlags> for OutputArgs {
    fn from(flags: &OutputFlags) -> Self {
        Self {
            format: flags.format,
            output_files: flags.output_file.clone(),
            output_github: flags.output_github.clone(),
            header: !flags.no_header,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze artifacts from a config file
    Analyze {
        /// Configuration file
        #[arg(short, long, value_name = "FILE")]
        config_file: PathBuf,

        #[command(flatten)]
        output: OutputFlags,
    },

    /// Compare two analysis results
    Compare {
        /// Base analysis file (JSON)
        #[arg(short, long, value_name = "FILE")]
        base: PathBuf,

        /// Current analysis file (JSON)
        #[arg(short, long, value_name = "FILE")]
        current: PathBuf,

        /// How to present artifacts whose size did not change
        #[arg(long, value_enum, default_value_t = UnchangedMode::Show)]
        unchanged: UnchangedMode,

        #[command(flatten)]
        output: OutputFlags,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Analyze {
            config_file,
            output,
        } => cmd::cmd_analyze(config_file, &output.into()),
        Commands::Compare {
            base,
            current,
            unchanged,
            output,
        } => cmd::cmd_compare(base, current, &output.into(), *unchanged),
        Commands::Completions { shell } => {
            cmd::cmd_completions(*shell, &mut Cli::command(), &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        use artifact_size::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
