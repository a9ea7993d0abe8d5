// Rust guideline compliant 2026-10-16

//! Patitas CLI Application
//!
//! Command-line client for the Patitas adoption service.

use anyhow::Result;
use clap::Parser;
use patitas_app::{AppError, ErrorEnvelope};
use patitas_core::config::CONFIG_FILE;
use patitas_core::{Config, OutputFormat, Transition};
use patitas_cli::commands::{self, admin::DraftArgs, Context};
use patitas_cli::{create_formatter, logging, should_use_color, OutputFormatter};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "patitas",
    version,
    about = "Patitas: browse and manage adoptable animals",
    long_about = "Patitas is a client for a pet-adoption service. Public commands browse the catalog and recent arrivals; admin commands register animals and move them through adoption, deactivation and reactivation.",
    after_help = "Examples:\n  patitas catalog --type felina_hembra\n  patitas carousel --ticks 5\n  patitas status --status disponible --shelter REF1\n  patitas admin create --name Luna --species Felina --sex Hembra --age \"2 años\" --description Dormilona --shelter REF1\n  patitas adopt 12\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<FormatArg>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Adoption API base URL, overriding the config
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Log level (error, warn, info, debug)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Write JSON logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Json,
    Table,
    Plain,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => Self::Json,
            FormatArg::Table => Self::Table,
            FormatArg::Plain => Self::Plain,
        }
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// List the public catalog
    Catalog {
        /// Type filter, e.g. canina_macho or felina_hembra ("todos" for all)
        #[arg(long = "type")]
        kind: Option<String>,
    },

    /// Show one window of recently listed animals
    Recent {
        /// Index of the first animal to show
        #[arg(long, default_value_t = 0)]
        offset: usize,

        /// Number of animals to show
        #[arg(long)]
        window: Option<usize>,
    },

    /// Run the auto-advancing carousel of recent animals
    Carousel {
        /// Number of advances to print before exiting
        #[arg(long, default_value_t = 3)]
        ticks: usize,

        /// Seconds between advances
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        interval: Option<u64>,
    },

    /// Show details of an animal
    Show {
        /// Record ID
        id: String,
    },

    /// Show the status dashboard
    Status {
        /// Status label (disponible, adoptado, ...) or "all"
        #[arg(long)]
        status: Option<String>,

        /// Shelter code or "all"
        #[arg(long)]
        shelter: Option<String>,

        /// List the statuses present instead of the records
        #[arg(long)]
        options: bool,
    },

    /// List deactivated animals
    Inactive {
        /// Shelter code
        #[arg(long)]
        shelter: Option<String>,
    },

    /// List shelter codes
    Shelters,

    /// Staff operations
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },

    /// Mark an available animal as adopted
    Adopt {
        /// Record ID
        id: String,
    },

    /// Deactivate an available animal
    Deactivate {
        /// Record ID
        id: String,
    },

    /// Reactivate an inactive animal
    Reactivate {
        /// Record ID
        id: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum AdminAction {
    /// List available animals
    List {
        /// Shelter code
        #[arg(long)]
        shelter: Option<String>,
    },

    /// Register a new animal
    Create {
        #[command(flatten)]
        fields: DraftArgs,
    },

    /// Edit an available animal
    Edit {
        /// Record ID
        id: String,

        #[command(flatten)]
        fields: DraftArgs,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init,
}

fn load_config(cli: &Cli, path: &Path) -> Result<Config> {
    let mut config = Config::load(path).map_err(AppError::from)?;

    if let Some(base_url) = &cli.base_url {
        config.api_base_url = base_url.clone();
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(format) = cli.format {
        config.output_format = format.into();
    } else if cli.json {
        config.output_format = OutputFormat::Json;
    }

    config.validate().map_err(AppError::from)?;
    Ok(config)
}

async fn dispatch(ctx: &Context, command: Commands) -> Result<()> {
    match command {
        Commands::Catalog { kind } => commands::catalog::execute(ctx, kind).await,
        Commands::Recent { offset, window } => {
            commands::recent::execute(ctx, offset, window).await
        }
        Commands::Carousel { ticks, interval } => {
            commands::carousel::execute(ctx, ticks, interval).await
        }
        Commands::Show { id } => commands::show::execute(ctx, id).await,
        Commands::Status {
            status,
            shelter,
            options,
        } => commands::status::execute(ctx, status, shelter, options).await,
        Commands::Inactive { shelter } => commands::inactive::execute(ctx, shelter).await,
        Commands::Shelters => commands::shelters::execute(ctx).await,
        Commands::Admin { action } => match action {
            AdminAction::List { shelter } => commands::admin::list(ctx, shelter).await,
            AdminAction::Create { fields } => commands::admin::create(ctx, fields).await,
            AdminAction::Edit { id, fields } => commands::admin::edit(ctx, id, fields).await,
        },
        Commands::Adopt { id } => {
            commands::transition::execute(ctx, id, Transition::MarkAdopted).await
        }
        Commands::Deactivate { id } => {
            commands::transition::execute(ctx, id, Transition::Deactivate).await
        }
        Commands::Reactivate { id } => {
            commands::transition::execute(ctx, id, Transition::Reactivate).await
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::show(ctx);
                Ok(())
            }
            ConfigAction::Init => commands::config::init(ctx),
        },
    }
}

fn report(formatter: &dyn OutputFormatter, err: &anyhow::Error) {
    let envelope = match err.downcast_ref::<AppError>() {
        Some(app_err) => ErrorEnvelope::from_error(app_err),
        None => ErrorEnvelope::from_error(&AppError::InvalidInput(format!("{err:#}"))),
    };
    eprintln!("{}", formatter.format_error(&envelope));
}

fn run(cli: Cli, format: &mut OutputFormat, use_color: bool) -> Result<()> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    let config = load_config(&cli, &config_path)?;
    *format = config.output_format;

    let _guard = logging::init(&config.log_level, cli.log_file.as_deref())?;

    let ctx = Context {
        formatter: create_formatter(config.output_format, use_color),
        config,
        config_path,
    };

    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(dispatch(&ctx, command))
}

fn main() {
    let cli = Cli::parse();

    let use_color = !cli.no_color && should_use_color();
    let mut format = match (cli.format, cli.json) {
        (Some(format), _) => format.into(),
        (None, true) => OutputFormat::Json,
        (None, false) => OutputFormat::Table,
    };

    if let Err(err) = run(cli, &mut format, use_color) {
        report(create_formatter(format, use_color).as_ref(), &err);
        std::process::exit(1);
    }
}
