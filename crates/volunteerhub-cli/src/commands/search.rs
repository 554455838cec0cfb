//! Search command implementation

use super::{print_event_list, CommandContext};
use crate::cli::SearchArgs;
use crate::output::OutputWriter;
use crate::output_types::EventListOutput;
use anyhow::Result;

pub fn execute(args: SearchArgs, ctx: &CommandContext, output: &OutputWriter) -> Result<()> {
    let matched = ctx.index.search(&args.query);

    output.section(format!("Events matching \"{}\"", args.query));
    output.kv("Matches", format!("{} of {}", matched.len(), ctx.index.len()));

    let data = EventListOutput {
        source: ctx.source.clone(),
        query: Some(args.query),
        extent: None,
        count: matched.len(),
        events: ctx.items(matched.iter().copied()),
    };

    print_event_list(output, &matched, data)
}
