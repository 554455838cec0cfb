use crate::error::Result;
use crate::models::Event;
use crate::ports::EventSource;

/// Built-in San Francisco events used when no catalog file is given
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleEventSource;

impl SampleEventSource {
    pub fn events() -> Vec<Event> {
        vec![
            Event::new("e1", "Community Cleanup", 37.7749, -122.4194)
                .with_date("Sep 12, 2025")
                .with_time("9:00 AM")
                .with_location("Market St & 5th"),
            Event::new("e2", "Food Drive", 37.7849, -122.4094)
                .with_date("Sep 14, 2025")
                .with_time("1:00 PM")
                .with_location("Union Square"),
            Event::new("e3", "Park Restoration", 37.7649, -122.4294)
                .with_date("Sep 20, 2025")
                .with_time("8:30 AM")
                .with_location("Golden Gate Park"),
        ]
    }
}

impl EventSource for SampleEventSource {
    fn load_events(&self) -> Result<Vec<Event>> {
        Ok(Self::events())
    }

    fn describe(&self) -> String {
        "built-in sample events".to_string()
    }
}
