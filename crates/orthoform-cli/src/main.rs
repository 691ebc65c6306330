use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

use orthoform_cli::commands;
use orthoform_cli::config::{self, OrthoformConfig};
use orthoform_cli::host::LocalHost;
use orthoform_export::delivery::DeliveryOutcome;
use orthoform_export::export::{export_report, ExportFormat, ExportOptions};
use orthoform_export::render::build_report;

#[derive(Parser)]
#[command(name = "orthoform")]
#[command(about = "Arthroplasty follow-up forms: review and export")]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct RecordArgs {
    /// Scenario id (see `orthoform scenarios`)
    scenario: String,
    /// JSON object with the form values
    #[arg(long)]
    input: Option<PathBuf>,
    /// Set a field, e.g. --set hasQuestions=yes (repeatable)
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    assignments: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available scenarios
    Scenarios,
    /// Show the form controls for a record
    Form(RecordArgs),
    /// Show the narrative and field listing for a record
    Review(RecordArgs),
    /// Export a record as a document
    Export {
        #[command(flatten)]
        record: RecordArgs,
        /// pdf or docx (defaults to the configured format)
        #[arg(long)]
        format: Option<ExportFormat>,
        /// Directory downloads are written to
        #[arg(long)]
        out: Option<PathBuf>,
        /// Skip the viewer and download straight away
        #[arg(long)]
        no_open: bool,
    },
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective config
    Show,
    /// Write the default config if none exists
    Init,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => config::config_path()?,
    };
    let config = config::load_config(&config_path)?;

    match cli.command {
        Commands::Scenarios => print!("{}", commands::list_scenarios()),
        Commands::Form(args) => {
            let scenario = commands::scenario(&args.scenario)?;
            let record = commands::load_record(args.input.as_deref(), &args.assignments)?;
            let errors = scenario.validate(&record);
            print!("{}", commands::render_form(scenario.as_ref(), &record, &errors));
        }
        Commands::Review(args) => {
            let scenario = commands::scenario(&args.scenario)?;
            let record = commands::load_record(args.input.as_deref(), &args.assignments)?;
            let errors = scenario.validate(&record);
            let report = build_report(scenario.as_ref(), &record, today())?;
            print!("{}", commands::render_review(&report, &errors));
        }
        Commands::Export {
            record: args,
            format,
            out,
            no_open,
        } => {
            let scenario = commands::scenario(&args.scenario)?;
            let record = commands::load_record(args.input.as_deref(), &args.assignments)?;
            for error in scenario.validate(&record) {
                tracing::warn!(field = %error.field_id, "{}", error.message);
            }

            let options = ExportOptions {
                format: format.unwrap_or(config.default_format),
                styles: config.styles.clone(),
                generated_on: today(),
                release_delay: Duration::from_secs(config.release_delay_secs),
            };
            let mut host = LocalHost::new(
                out.unwrap_or_else(|| config.output_dir.clone()),
                config.open_in_viewer && !no_open,
            );
            if let Some(viewer) = &config.viewer {
                host = host.with_viewer(viewer.clone());
            }
            match export_report(scenario.as_ref(), &record, &options, &mut host)? {
                DeliveryOutcome::Viewed => println!("opened {} in the viewer", scenario.name()),
                DeliveryOutcome::Downloaded => {
                    println!("saved to {}", host.output_dir().display())
                }
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => println!("{}", serde_json::to_string_pretty(&config)?),
            ConfigAction::Init => {
                if config_path.exists() {
                    println!("config already exists at {}", config_path.display());
                } else {
                    config::save_config(&OrthoformConfig::default(), &config_path)?;
                    println!("wrote {}", config_path.display());
                }
            }
        },
    }

    Ok(())
}

fn today() -> jiff::civil::Date {
    jiff::Zoned::now().date()
}
