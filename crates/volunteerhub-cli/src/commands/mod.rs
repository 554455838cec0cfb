//! Command implementations

mod config;
mod events;
mod joined;
mod links;
mod nearby;
mod search;
mod visible;

use crate::cli::{Cli, Commands, ValidityArg};
use crate::config_loader::load_config;
use crate::output::{OutputFormat, OutputWriter};
use crate::output_types::{EventItem, EventListOutput, EventRow};
use anyhow::{Context, Result};
use std::path::Path;
use volunteerhub_core::config::{CliConfigOverrides, LayeredConfig};
use volunteerhub_core::models::{Event, MembershipSet, ValidityMode};
use volunteerhub_core::ports::EventSource;
use volunteerhub_core::sources::{JsonFileSource, SampleEventSource};
use volunteerhub_geo::export::events_to_geojson;
use volunteerhub_geo::GeoEventIndex;

/// State shared by the catalog commands
pub struct CommandContext {
    pub config: LayeredConfig,
    pub index: GeoEventIndex,
    pub membership: MembershipSet,
    pub source: String,
}

impl CommandContext {
    fn load(
        events: Option<&Path>,
        config: LayeredConfig,
        membership: MembershipSet,
    ) -> Result<Self> {
        let source: Box<dyn EventSource> = match events {
            Some(path) => Box::new(JsonFileSource::new(path)),
            None => Box::new(SampleEventSource),
        };

        let index = GeoEventIndex::from_source(source.as_ref(), config.validity.value)
            .with_context(|| format!("Failed to load events from {}", source.describe()))?;

        tracing::debug!(
            "Catalog ready: {} events, {} joined, validity {:?}",
            index.len(),
            membership.len(),
            index.validity()
        );

        Ok(Self { config, index, membership, source: source.describe() })
    }

    /// Wrap events for output, marking the joined ones
    pub fn items<'a, I>(&self, events: I) -> Vec<EventItem>
    where
        I: IntoIterator<Item = &'a Event>,
    {
        events.into_iter().map(|event| EventItem::new(event, &self.membership)).collect()
    }
}

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json, cli.geojson);
    let config = load_config(cli.config.as_deref(), overrides_from(&cli))?;
    let membership: MembershipSet = cli.joined.iter().map(String::as_str).collect();

    if let Commands::Config = cli.command {
        return config::execute(&config, &output);
    }

    let ctx = CommandContext::load(cli.events.as_deref(), config, membership)?;

    match cli.command {
        Commands::Config => config::execute(&ctx.config, &output),
        Commands::Events => events::execute(&ctx, &output),
        Commands::Search(args) => search::execute(args, &ctx, &output),
        Commands::Visible(args) => visible::execute(args, &ctx, &output),
        Commands::Nearby(args) => nearby::execute(args, &ctx, &output).await,
        Commands::Joined => joined::execute(&ctx, &output),
        Commands::Links(args) => links::execute(args, &ctx, &output),
    }
}

fn overrides_from(cli: &Cli) -> CliConfigOverrides {
    let mut overrides = CliConfigOverrides {
        validity: cli.validity.map(|arg| match arg {
            ValidityArg::Strict => ValidityMode::Strict,
            ValidityArg::Lenient => ValidityMode::Lenient,
        }),
        ..Default::default()
    };

    match &cli.command {
        Commands::Nearby(args) => {
            overrides.radius_km = args.radius_km;
            overrides.location_timeout_ms = args.timeout_ms;
        }
        Commands::Visible(args) => {
            overrides.initial_span = args.span;
        }
        _ => {}
    }

    overrides
}

/// Print an event list in the selected format
fn print_event_list(output: &OutputWriter, events: &[&Event], data: EventListOutput) -> Result<()> {
    match output.format() {
        OutputFormat::GeoJson => output.geojson(&events_to_geojson(events.iter().copied())),
        OutputFormat::Json => output.result(data),
        OutputFormat::Human => {
            output.table(data.events.iter().map(EventRow::from).collect());
            Ok(())
        }
    }
}
