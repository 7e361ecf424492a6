//! Route map CLI
//!
//! Terminal front end for the Bishkek route map widget: address
//! suggestions, route building and an interactive session.

#![allow(clippy::print_stdout)]

mod alert;
mod render;
mod session;

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use application::ports::MapViewPort;
use application::services::{RouteMapWidget, RouteOutcome};
use clap::{Parser, Subcommand};
use domain::value_objects::AddressField;
use infrastructure::{
    AppConfig, NominatimGeocodingAdapter, OsrmRoutingAdapter, TileMapView, init_logging,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::alert::TerminalAlert;
use crate::session::{Command, Reply, Session};

/// Route map CLI
#[derive(Parser)]
#[command(name = "routemap-cli")]
#[command(author, version, about = "Bishkek route map in the terminal", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ./routemap.toml if present)
    #[arg(short, long, env = "ROUTEMAP_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List address suggestions for partially typed text
    Suggest {
        /// Text typed into the field
        text: String,

        /// Field being typed into (origin or destination)
        #[arg(short, long, default_value = "origin")]
        field: AddressField,
    },

    /// Build a route between two addresses
    ///
    /// Example: routemap-cli route --origin "Ala-Too Square" --destination "Osh Bazaar"
    Route {
        /// Origin address
        #[arg(short, long)]
        origin: String,

        /// Destination address
        #[arg(short, long)]
        destination: String,
    },

    /// Drive the widget line by line
    Interactive,

    /// Print the effective configuration as TOML
    Config,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Mount the map and wire the widget to the configured services
fn build_widget(config: &AppConfig) -> anyhow::Result<(RouteMapWidget, Arc<TileMapView>)> {
    let geocoding = NominatimGeocodingAdapter::from_config(&config.geocoding)
        .context("creating geocoding client")?;
    let routing =
        OsrmRoutingAdapter::from_config(&config.routing).context("creating routing client")?;
    let map = Arc::new(TileMapView::mount(&config.map));

    let widget = RouteMapWidget::new(
        Arc::new(geocoding),
        Arc::new(routing),
        Arc::clone(&map) as Arc<dyn MapViewPort>,
        Arc::new(TerminalAlert),
        config.widget.clone(),
    );
    Ok((widget, map))
}

async fn run_interactive(session: &Session) -> anyhow::Result<()> {
    println!("{}", session::HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                continue;
            },
        };
        debug!(?command, "Executing");

        match session.execute(command).await {
            Reply::Output(text) => print!("{text}"),
            Reply::Quit => break,
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;

    // Set up logging based on verbosity
    let logging = match log_filter_from_verbosity(cli.verbose) {
        Some(filter) => config.logging.with_filter(filter),
        None => config.logging.clone(),
    };
    init_logging(&logging).context("initializing logging")?;
    info!("routemap-cli starting");

    match cli.command {
        Commands::Config => {
            print!("{}", config.to_toml()?);
        },

        Commands::Suggest { text, field } => {
            let (widget, map) = build_widget(&config)?;
            widget.input(field, &text).await;
            let snapshot = widget.snapshot();
            print!("{}", render::suggestion_list(field, &snapshot.field(field).suggestions));
            map.unmount();
        },

        Commands::Route {
            origin,
            destination,
        } => {
            let (widget, map) = build_widget(&config)?;
            widget.select(AddressField::Origin, &origin);
            widget.select(AddressField::Destination, &destination);

            let outcome = widget.build_route().await;
            let snapshot = widget.snapshot();
            print!("{}", render::summary_panel(snapshot.summary.as_ref()));
            println!();
            print!("{}", render::points_panel(snapshot.points.as_ref()));
            map.unmount();

            match outcome {
                Ok(RouteOutcome::Published(summary)) => info!(%summary, "Route built"),
                Ok(RouteOutcome::Superseded) => std::process::exit(1),
                Err(e) => {
                    // The alert has already been shown
                    debug!(error = %e, "Route build failed");
                    std::process::exit(1);
                },
            }
        },

        Commands::Interactive => {
            let (widget, map) = build_widget(&config)?;
            let session = Session::new(widget, Arc::clone(&map));
            run_interactive(&session).await?;
            map.unmount();
        },
    }

    Ok(())
}
