use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use git_releases::cli::orchestration::{run_list_workflow, ListWorkflowArgs};
use git_releases::config::{self, OutputFormat};
use git_releases::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-releases",
    version,
    about = "List the released versions of a git repository from its tags"
)]
struct Args {
    #[arg(
        default_value = ".",
        help = "Repository path, or remote URL ending in .git"
    )]
    location: String,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Exclude pre-release versions (alpha, beta, rc, ...)")]
    stable: bool,

    #[arg(short, long, help = "Only print the latest version")]
    latest: bool,

    #[arg(long, help = "Skip tags that are not versions instead of failing")]
    skip_invalid: bool,

    #[arg(long, help = "Keep the order tags were listed in")]
    unsorted: bool,

    #[arg(long, help = "Print versions as a JSON array")]
    json: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v, -vv)")]
    verbose: u8,
}

/// Log to stderr; RUST_LOG wins over -v
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let workflow_args = ListWorkflowArgs {
        location: args.location,
        stable_only: args.stable,
        latest_only: args.latest,
        skip_invalid: args.skip_invalid,
        unsorted: args.unsorted,
    };

    let result = match run_list_workflow(&workflow_args, &config) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    for warning in &result.warnings {
        ui::display_boundary_warning(warning);
    }

    let format = if args.json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    if result.versions.is_empty() && format == OutputFormat::Plain {
        ui::display_status(&format!("No versions to show for '{}'", result.location));
        return Ok(());
    }

    ui::display_versions(&result.versions, format)?;

    Ok(())
}
