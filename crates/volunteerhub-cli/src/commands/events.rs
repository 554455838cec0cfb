//! Events command implementation

use super::{print_event_list, CommandContext};
use crate::output::OutputWriter;
use crate::output_types::{CatalogExtent, EventListOutput};
use anyhow::Result;

pub fn execute(ctx: &CommandContext, output: &OutputWriter) -> Result<()> {
    let events: Vec<_> = ctx.index.events().iter().collect();

    // geo rects are x = longitude, y = latitude
    let extent = ctx.index.extent().map(|rect| CatalogExtent {
        min_latitude: rect.min().y,
        max_latitude: rect.max().y,
        min_longitude: rect.min().x,
        max_longitude: rect.max().x,
    });

    output.section("Event Catalog");
    output.kv("Source", &ctx.source);
    output.kv("Events", events.len());
    if let Some(ref extent) = extent {
        output.kv(
            "Extent",
            format!(
                "{:.4}..{:.4} lat, {:.4}..{:.4} lon",
                extent.min_latitude, extent.max_latitude, extent.min_longitude, extent.max_longitude
            ),
        );
    }

    let data = EventListOutput {
        source: ctx.source.clone(),
        query: None,
        extent,
        count: events.len(),
        events: ctx.items(events.iter().copied()),
    };

    print_event_list(output, &events, data)
}
