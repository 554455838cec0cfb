//! Nearby command implementation

use super::CommandContext;
use crate::cli::NearbyArgs;
use crate::output::{OutputFormat, OutputWriter};
use crate::output_types::{EventItem, EventRow, NearbyOutput};
use anyhow::{Context, Result};
use volunteerhub_core::models::ReferenceSource;
use volunteerhub_core::ports::LocationProvider;
use volunteerhub_geo::export::{events_to_geojson, nearby_to_geojson};
use volunteerhub_geo::reference::FixedLocationProvider;
use volunteerhub_geo::{distance_to_event, ReferencePointResolver};

pub async fn execute(args: NearbyArgs, ctx: &CommandContext, output: &OutputWriter) -> Result<()> {
    let radius_km = ctx.config.radius_km.value;
    let resolver = ReferencePointResolver::from_millis(ctx.config.location_timeout_ms.value);

    // A terminal has no location service; --lat/--lon stand in for a device fix
    let device = match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => Some(FixedLocationProvider::new(lat, lon)),
        _ => None,
    };
    let provider = device.as_ref().map(|p| p as &dyn LocationProvider);

    let reference = resolver
        .resolve(provider, ctx.index.events())
        .await
        .context("Could not determine a reference point")?;

    if let ReferenceSource::FallbackEvent(ref id) = reference.source {
        output.warning(format!("Device location unavailable; measuring from event {}", id));
    }

    let (items, document) = if args.ranked {
        let ranked = ctx.index.nearby_ranked(&reference.point, radius_km)?;
        let items: Vec<EventItem> = ranked
            .iter()
            .map(|entry| EventItem::new(entry.event, &ctx.membership).with_distance(entry.distance_km))
            .collect();
        (items, nearby_to_geojson(&ranked))
    } else {
        let nearby = ctx.index.nearby(&reference.point, radius_km)?;
        let items: Vec<EventItem> = nearby
            .iter()
            .map(|event| {
                EventItem::new(event, &ctx.membership)
                    .with_distance(distance_to_event(&reference.point, event))
            })
            .collect();
        (items, events_to_geojson(nearby.iter().copied()))
    };

    match output.format() {
        OutputFormat::GeoJson => output.geojson(&document),
        OutputFormat::Json => output.result(NearbyOutput {
            reference,
            radius_km,
            ranked: args.ranked,
            count: items.len(),
            events: items,
        }),
        OutputFormat::Human => {
            output.section("Nearby Events");
            output.kv(
                "Reference",
                format!("{:.5}, {:.5}", reference.point.latitude, reference.point.longitude),
            );
            output.kv(
                "From",
                match reference.source {
                    ReferenceSource::Device => "device location".to_string(),
                    ReferenceSource::FallbackEvent(ref id) => format!("event {}", id),
                },
            );
            output.kv("Radius", format!("{} km", radius_km));
            output.kv("Found", items.len());
            output.table(items.iter().map(EventRow::from).collect());
            Ok(())
        }
    }
}
