use crate::charts::{render_charts, ChartBundle};
use crate::lookup::api::RelayApi;
use crate::models::ChannelRecord;
use crate::revenue::estimate_revenue;
use thiserror::Error;

/// Where a lookup currently stands. Any failure goes straight back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupPhase {
    Idle,
    Searching,
    FetchingDetails,
    Rendered,
}

impl LookupPhase {
    pub fn is_busy(&self) -> bool {
        matches!(self, LookupPhase::Searching | LookupPhase::FetchingDetails)
    }
}

/// Each variant's message is exactly what the user gets to see.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    #[error("Please enter a channel name or URL.")]
    EmptyQuery,
    #[error("Failed to connect to backend: {0}")]
    Network(String),
    #[error("{message}")]
    Relay { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("No channels found")]
    NoChannels,
    #[error("The first search result is not a channel")]
    MissingChannelId,
    #[error("Channel details not found")]
    NoDetails,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelLookup {
    pub record: ChannelRecord,
    pub revenue: Option<f64>,
}

/// What the page shows once a lookup settles. The chart generation lives here, with the page,
/// so two pages never share a counter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupScreen {
    pub generation: u32,
    pub lookup: Option<ChannelLookup>,
    pub charts: Option<ChartBundle>,
}

impl LookupScreen {
    /// A success shows the channel with freshly keyed charts. A failure clears the previous
    /// channel so nothing stale stays on screen next to the alert.
    pub fn settle(&self, outcome: &Result<ChannelLookup, LookupError>) -> LookupScreen {
        match outcome {
            Ok(lookup) => {
                let generation = self.generation.wrapping_add(1);
                LookupScreen {
                    generation,
                    lookup: Some(lookup.clone()),
                    charts: Some(render_charts(generation)),
                }
            }
            Err(_) => LookupScreen {
                generation: self.generation,
                lookup: None,
                charts: None,
            },
        }
    }
}

/// Search, then fetch details for the first hit only. No retries: the first failure ends it.
pub async fn lookup_channel<R, F>(
    relay: &R,
    query: &str,
    mut on_phase: F,
) -> Result<ChannelLookup, LookupError>
where
    R: RelayApi,
    F: FnMut(LookupPhase),
{
    let result = fetch_channel(relay, query, &mut on_phase).await;
    on_phase(match &result {
        Ok(_) => LookupPhase::Rendered,
        Err(_) => LookupPhase::Idle,
    });
    result
}

async fn fetch_channel<R, F>(
    relay: &R,
    query: &str,
    on_phase: &mut F,
) -> Result<ChannelLookup, LookupError>
where
    R: RelayApi,
    F: FnMut(LookupPhase),
{
    let query = query.trim();
    if query.is_empty() {
        return Err(LookupError::EmptyQuery);
    }

    on_phase(LookupPhase::Searching);
    let search = relay.search(query).await?;
    let channel_id = search
        .items
        .into_iter()
        .next()
        .ok_or(LookupError::NoChannels)?
        .id
        .channel_id
        .filter(|id| !id.trim().is_empty())
        .ok_or(LookupError::MissingChannelId)?;

    on_phase(LookupPhase::FetchingDetails);
    let details = relay.channel_details(&channel_id).await?;
    let item = details.items.first().ok_or(LookupError::NoDetails)?;

    let record = ChannelRecord::from(item);
    let revenue = estimate_revenue(record.view_count.as_deref(), record.country.as_deref());
    Ok(ChannelLookup { record, revenue })
}
