//! devenv CLI - developer environment diagnostics
//!
//! Provides `devenv workspace`, `devenv logs`, `devenv vscode`, and the
//! machine profile commands. Reports go to stdout; logs go to stderr.

mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use devenv_scanner::budget::DEFAULT_FILE_BUDGET;
use devenv_scanner::logs::extension::ExtensionLogOptions;
use devenv_scanner::logs::DEFAULT_MAX_FILES;
use devenv_scanner::vscode::DEFAULT_CODE_BINARY;

#[derive(Parser)]
#[command(name = "devenv")]
#[command(about = "devenv - developer environment diagnostics")]
#[command(version)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze workspace file count, directory sizes, and complexity score
    Workspace {
        /// Root path to analyze
        #[arg(value_name = "ROOT")]
        root: PathBuf,

        /// Maximum files to scan
        #[arg(long, default_value_t = DEFAULT_FILE_BUDGET)]
        max_files: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
    /// Scan extension logs for warnings, errors, and performance issues
    Logs {
        /// Root directory to scan for logs
        #[arg(value_name = "ROOT")]
        root: PathBuf,

        /// Maximum log files to read
        #[arg(long, default_value_t = DEFAULT_MAX_FILES)]
        max_files: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
    /// Read recent extension logs from the VS Code workspace storage
    ExtensionLogs {
        /// Extension id (can specify multiple times)
        #[arg(long = "extension", value_name = "ID")]
        extensions: Vec<String>,

        /// Workspace storage directory (defaults to the platform location)
        #[arg(long)]
        storage: Option<PathBuf>,

        /// Number of newest files to read
        #[arg(long, default_value_t = ExtensionLogOptions::default().max_files)]
        max_files: usize,

        /// Bytes read from the end of each file
        #[arg(long, default_value_t = ExtensionLogOptions::default().max_bytes)]
        max_bytes: u64,

        /// List files without their content
        #[arg(long)]
        no_content: bool,
    },
    /// Get VS Code version, extension info, and relevant settings
    Vscode {
        /// Workspace whose .vscode/settings.json is read
        #[arg(short, long, default_value = ".")]
        workspace: PathBuf,

        /// Editor launcher to query for its version
        #[arg(long, default_value = DEFAULT_CODE_BINARY)]
        code_binary: String,
    },
    /// Show PATH entries and tool home variables
    Env,
    /// Show host system information
    Host,
    /// Collect this machine's profile for later comparison
    Profile {
        /// Workspace root to include
        #[arg(value_name = "ROOT")]
        root: PathBuf,

        /// Maximum files to scan
        #[arg(long, default_value_t = DEFAULT_FILE_BUDGET)]
        max_files: usize,

        /// Editor launcher to query for its version
        #[arg(long, default_value = DEFAULT_CODE_BINARY)]
        code_binary: String,
    },
    /// Compare two machine profiles and explain performance differences
    Compare {
        /// Profile JSON of this machine
        #[arg(value_name = "THIS")]
        this: PathBuf,

        /// Profile JSON of the other machine
        #[arg(value_name = "OTHER")]
        other: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Json,
    Markdown,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Workspace {
            root,
            max_files,
            format,
        } => commands::scan::run_workspace(&root, max_files, format),
        Commands::Logs {
            root,
            max_files,
            format,
        } => commands::scan::run_logs(&root, max_files, format),
        Commands::ExtensionLogs {
            extensions,
            storage,
            max_files,
            max_bytes,
            no_content,
        } => {
            let options = ExtensionLogOptions {
                include_content: !no_content,
                max_files,
                max_bytes,
            };
            commands::editor::run_extension_logs(&extensions, storage, &options)
        }
        Commands::Vscode {
            workspace,
            code_binary,
        } => commands::editor::run_vscode(&workspace, &code_binary),
        Commands::Env => commands::machine::run_env(),
        Commands::Host => commands::machine::run_host(),
        Commands::Profile {
            root,
            max_files,
            code_binary,
        } => commands::machine::run_profile(&root, max_files, &code_binary),
        Commands::Compare { this, other } => commands::machine::run_compare(&this, &other),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
