//! Links command implementation

use super::CommandContext;
use crate::cli::{LinksArgs, PlatformArg};
use crate::output::{OutputFormat, OutputWriter};
use crate::output_types::LinksOutput;
use anyhow::Result;
use volunteerhub_core::models::EventId;
use volunteerhub_geo::links::{map_links, MapPlatform};

pub fn execute(args: LinksArgs, ctx: &CommandContext, output: &OutputWriter) -> Result<()> {
    let event = ctx.index.require(&EventId::new(args.id))?;

    let platform = match args.platform {
        PlatformArg::Ios => MapPlatform::Ios,
        PlatformArg::Android => MapPlatform::Android,
        PlatformArg::Web => MapPlatform::Web,
    };
    let links = map_links(event, platform);

    match output.format() {
        OutputFormat::Json | OutputFormat::GeoJson => output.result(LinksOutput {
            id: event.id.to_string(),
            name: event.name.clone(),
            platform: platform.to_string(),
            links,
        }),
        OutputFormat::Human => {
            output.section(format!("Map links for {}", event.name));
            output.kv("Platform", platform);
            for (i, link) in links.iter().enumerate() {
                output.kv(i + 1, link);
            }
            Ok(())
        }
    }
}
