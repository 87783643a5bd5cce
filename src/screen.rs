use crate::fetcher::{self, Details};
use requester::PokeApi;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Info,
    Stats,
    Moves,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Info, Tab::Stats, Tab::Moves];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Stats => "stats",
            Self::Moves => "moves",
        }
    }
}

impl Default for Tab {
    fn default() -> Self {
        Self::Info
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("Unknown tab `{0}`, expected one of info, stats, moves")]
pub struct UnknownTab(pub String);

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTab(s.to_owned()))
    }
}

/// Why the last load left the screen empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFailure {
    NotFound,
    Transient,
    Malformed,
}

impl From<&requester::Error> for FetchFailure {
    fn from(err: &requester::Error) -> Self {
        if err.is_not_found() {
            Self::NotFound
        } else if err.is_transient() {
            Self::Transient
        } else {
            Self::Malformed
        }
    }
}

#[derive(Debug, Default)]
pub struct ScreenState {
    pub identifier: Option<String>,
    pub loading: bool,
    pub details: Option<Details>,
    pub failure: Option<FetchFailure>,
    pub tab: Tab,
}

/// Handed out by [`DetailsScreen::navigate`]. Only the latest one can land
/// a result, and only once.
#[derive(Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct DetailsScreen {
    state: ScreenState,
    generation: u64,
}

impl DetailsScreen {
    pub fn new() -> Self {
        Default::default()
    }

    #[inline]
    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    #[inline]
    pub fn select_tab(&mut self, tab: Tab) {
        self.state.tab = tab;
    }

    /// Point the screen at another creature, dropping whatever was shown.
    /// `None`, or a blank name, leaves the screen blank and starts no request.
    pub fn navigate(&mut self, identifier: Option<&str>) -> Option<Ticket> {
        let identifier = identifier.map(str::trim).filter(|s| !s.is_empty());

        self.generation += 1;
        self.state.details = None;
        self.state.failure = None;
        self.state.identifier = identifier.map(str::to_owned);
        self.state.loading = identifier.is_some();

        identifier.map(|_| Ticket(self.generation))
    }

    /// Land the result of a request. Returns `false` when the ticket is
    /// stale or already used, and the outcome was thrown away.
    pub fn complete(&mut self, ticket: Ticket, outcome: requester::Result<Details>) -> bool {
        if ticket.0 != self.generation || !self.state.loading {
            log::debug!(
                "Dropping a stale result (request {}, current {})",
                ticket.0,
                self.generation
            );
            return false;
        }

        self.state.loading = false;

        match outcome {
            Ok(details) => {
                log::info!(
                    "Loaded {} with {} evolutions",
                    details.pokemon.name,
                    details.evolutions.len()
                );
                self.state.details = Some(details);
            }

            Err(why) => {
                log::error!(
                    "Cannot load {}: {}",
                    self.state.identifier.as_deref().unwrap_or_default(),
                    why
                );
                self.state.failure = Some(FetchFailure::from(&why));
            }
        }

        true
    }

    /// `navigate` + fetch + `complete`, for callers that wait in place.
    pub async fn load<A>(&mut self, api: &A, identifier: Option<&str>)
    where
        A: PokeApi + ?Sized,
    {
        let ticket = match self.navigate(identifier) {
            Some(t) => t,
            None => return,
        };

        let id = self.state.identifier.clone().unwrap_or_default();
        let outcome = fetcher::fetch_details(api, &id).await;
        self.complete(ticket, outcome);
    }
}
