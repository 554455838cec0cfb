use volunteerhub_core::models::Event;

/// Keep the events whose name contains `query`, ignoring case
///
/// An empty query keeps every event. The query is not trimmed.
pub fn filter_by_keyword<'a, I>(events: I, query: &str) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    if query.is_empty() {
        return events.into_iter().collect();
    }

    let needle = query.to_lowercase();
    events
        .into_iter()
        .filter(|event| event.name.to_lowercase().contains(&needle))
        .collect()
}
