//! Visible command implementation

use super::CommandContext;
use crate::cli::VisibleArgs;
use crate::output::{OutputFormat, OutputWriter};
use crate::output_types::{EventRow, VisibleOutput};
use anyhow::{bail, Result};
use volunteerhub_core::models::Viewport;
use volunteerhub_geo::export::events_to_geojson;

pub fn execute(args: VisibleArgs, ctx: &CommandContext, output: &OutputWriter) -> Result<()> {
    let span = ctx.config.initial_span.value;

    let (center_latitude, center_longitude) = match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => match ctx.index.events().first() {
            Some(first) => (first.latitude, first.longitude),
            None => bail!("No events to center the map on; pass --lat and --lon"),
        },
    };

    let viewport = Viewport::new(
        center_latitude,
        center_longitude,
        args.lat_span.unwrap_or(span),
        args.lon_span.unwrap_or(span),
    );

    let visible = match args.query.as_deref() {
        Some(query) => ctx.index.visible_matching(query, &viewport)?,
        None => ctx.index.visible(&viewport)?,
    };

    match output.format() {
        OutputFormat::GeoJson => output.geojson(&events_to_geojson(visible.iter().copied())),
        OutputFormat::Json => output.result(VisibleOutput {
            viewport,
            query: args.query,
            count: visible.len(),
            events: ctx.items(visible.iter().copied()),
        }),
        OutputFormat::Human => {
            let bounds = viewport.bounds();
            output.section("Visible Events");
            output.kv(
                "Latitude",
                format!("{:.4} to {:.4}", bounds.min_latitude, bounds.max_latitude),
            );
            output.kv(
                "Longitude",
                format!("{:.4} to {:.4}", bounds.min_longitude, bounds.max_longitude),
            );
            if let Some(ref query) = args.query {
                output.kv("Query", query);
            }
            output.kv("Visible", format!("{} of {}", visible.len(), ctx.index.len()));

            let items = ctx.items(visible.iter().copied());
            output.table(items.iter().map(EventRow::from).collect());
            Ok(())
        }
    }
}
