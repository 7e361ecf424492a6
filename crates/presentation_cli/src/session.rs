//! Interactive session
//!
//! Plays the widget line by line: typing into a field, picking a
//! suggestion, pressing build and dragging waypoints.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use application::services::{RouteMapWidget, RouteOutcome};
use domain::value_objects::{AddressField, GeoLocation};
use infrastructure::TileMapView;
use tracing::debug;

use crate::render;

pub const HELP: &str = "\
Commands:
  origin <text>             type into the origin field
  destination <text>        type into the destination field
  pick <field> <n>          choose suggestion n of a field
  build                     build the route
  drag <n> <lat> <lng>      move waypoint n (1 = origin) and reroute
  show                      show fields and panels
  map                       show the map state
  help                      show this help
  quit                      leave the session
";

/// One parsed input line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Input(AddressField, String),
    Pick(AddressField, usize),
    Build,
    Drag(usize, GeoLocation),
    Show,
    Map,
    Help,
    Quit,
}

/// Why a line could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(String);

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (type 'help' for commands)", self.0)
    }
}

impl std::error::Error for ParseError {}

fn error(message: impl Into<String>) -> ParseError {
    ParseError(message.into())
}

/// 1-based position as typed by the user
fn position(arg: Option<&str>, what: &str) -> Result<usize, ParseError> {
    let arg = arg.ok_or_else(|| error(format!("missing {what}")))?;
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(error(format!("{what} must be a number from 1, got '{arg}'"))),
    }
}

fn coordinate(arg: Option<&str>, what: &str) -> Result<f64, ParseError> {
    let arg = arg.ok_or_else(|| error(format!("missing {what}")))?;
    arg.parse()
        .map_err(|_| error(format!("{what} must be a number, got '{arg}'")))
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (keyword, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let mut args = rest.split_whitespace();

        match keyword.to_lowercase().as_str() {
            "origin" | "from" => Ok(Self::Input(AddressField::Origin, rest.to_string())),
            "destination" | "to" => Ok(Self::Input(AddressField::Destination, rest.to_string())),
            "pick" => {
                let field = args
                    .next()
                    .ok_or_else(|| error("missing field"))?
                    .parse::<AddressField>()
                    .map_err(|e| error(e.to_string()))?;
                let n = position(args.next(), "suggestion number")?;
                Ok(Self::Pick(field, n - 1))
            },
            "build" => Ok(Self::Build),
            "drag" => {
                let n = position(args.next(), "waypoint number")?;
                let lat = coordinate(args.next(), "latitude")?;
                let lng = coordinate(args.next(), "longitude")?;
                let location = GeoLocation::new(lat, lng).map_err(|e| error(e.to_string()))?;
                Ok(Self::Drag(n - 1, location))
            },
            "show" => Ok(Self::Show),
            "map" => Ok(Self::Map),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            "" => Err(error("empty command")),
            other => Err(error(format!("unknown command '{other}'"))),
        }
    }
}

/// What the session wants printed after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Output(String),
    Quit,
}

/// A widget and its map, driven by text commands
#[derive(Debug)]
pub struct Session {
    widget: RouteMapWidget,
    map: Arc<TileMapView>,
}

impl Session {
    pub const fn new(widget: RouteMapWidget, map: Arc<TileMapView>) -> Self {
        Self { widget, map }
    }

    pub const fn widget(&self) -> &RouteMapWidget {
        &self.widget
    }

    pub async fn execute(&self, command: Command) -> Reply {
        let output = match command {
            Command::Input(field, text) => {
                self.widget.input(field, &text).await;
                let snapshot = self.widget.snapshot();
                render::suggestion_list(field, &snapshot.field(field).suggestions)
            },
            Command::Pick(field, index) => match self.widget.select_index(field, index) {
                Ok(picked) => format!("{}: {picked}\n", field.label()),
                Err(e) => format!("{e}\n"),
            },
            Command::Build => self.build().await,
            Command::Drag(index, location) => match self.widget.drag_waypoint(index, location).await {
                Ok(RouteOutcome::Published(_)) => self.panels(),
                Ok(RouteOutcome::Superseded) => "Route update superseded.\n".to_string(),
                Err(e) => format!("Could not move waypoint: {e}\n"),
            },
            Command::Show => render::widget(&self.widget.snapshot()),
            Command::Map => render::map(&self.map.snapshot()),
            Command::Help => HELP.to_string(),
            Command::Quit => return Reply::Quit,
        };
        Reply::Output(output)
    }

    async fn build(&self) -> String {
        match self.widget.build_route().await {
            Ok(RouteOutcome::Published(_)) => self.panels(),
            Ok(RouteOutcome::Superseded) => "Route computation superseded.\n".to_string(),
            Err(e) => {
                // The alert has already been shown
                debug!(error = %e, "Route build failed");
                String::new()
            },
        }
    }

    fn panels(&self) -> String {
        let snapshot = self.widget.snapshot();
        let mut out = render::summary_panel(snapshot.summary.as_ref());
        out.push('\n');
        out.push_str(&render::points_panel(snapshot.points.as_ref()));
        out
    }
}
