//! Joined command implementation

use super::{print_event_list, CommandContext};
use crate::output::OutputWriter;
use crate::output_types::EventListOutput;
use anyhow::Result;

pub fn execute(ctx: &CommandContext, output: &OutputWriter) -> Result<()> {
    let joined = ctx.membership.joined_events(ctx.index.events());

    let unknown = ctx.membership.iter().filter(|id| ctx.index.get(id).is_none()).count();
    if unknown > 0 {
        output.warning(format!("{} joined id(s) are not in the catalog", unknown));
    }

    output.section("Joined Events");
    output.kv("Joined", joined.len());

    let data = EventListOutput {
        source: ctx.source.clone(),
        query: None,
        extent: None,
        count: joined.len(),
        events: ctx.items(joined.iter().copied()),
    };

    print_event_list(output, &joined, data)
}
