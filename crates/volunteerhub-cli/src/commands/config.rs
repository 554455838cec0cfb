//! Config command implementation

use crate::output::{OutputFormat, OutputWriter};
use crate::output_types::{ConfigEntry, ConfigOutput};
use anyhow::Result;
use volunteerhub_core::config::LayeredConfig;

pub fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let mut entries: Vec<ConfigEntry> = config
        .to_inspection_map()
        .into_iter()
        .map(|(key, (value, source))| ConfigEntry { key, value, source })
        .collect();
    entries.sort_by(|a, b| a.key.cmp(&b.key));

    match output.format() {
        OutputFormat::Json | OutputFormat::GeoJson => output.result(ConfigOutput { entries }),
        OutputFormat::Human => {
            output.section("Effective Configuration");
            output.table(entries);
            Ok(())
        }
    }
}
