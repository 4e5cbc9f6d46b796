//! Background feed loading.
//!
//! The blocking HTTP request runs on a worker thread and reports back over a
//! channel polled once per frame. Every request carries a ticket; results for
//! a superseded or cancelled ticket are dropped without touching the world.

use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, Sender};

use bevy::prelude::*;

use super::feed::{FeedClient, FeedError};
use super::record::NeoRecord;
use super::NeoFeed;
use crate::config::OrreryConfig;

/// Plugin fetching the NEO feed on startup and on refresh requests.
pub struct FeedPlugin;

impl Plugin for FeedPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NeoFeed>()
            .init_resource::<FeedState>()
            .init_resource::<FeedFetch>()
            .add_message::<FeedRefreshRequested>()
            .add_systems(Startup, request_initial_fetch)
            .add_systems(Update, (start_requested_fetch, poll_feed).chain());
    }
}

/// Ask the loader to fetch the feed again, superseding any fetch in flight.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct FeedRefreshRequested;

/// Progress of the current fetch cycle, for display.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub enum FeedState {
    #[default]
    NotLoaded,
    Loading,
    Loaded { count: usize },
    Failed(String),
}

/// Result of one worker request.
pub struct FetchOutcome {
    pub ticket: u64,
    pub result: Result<Vec<NeoRecord>, FeedError>,
}

/// Channel and ticket bookkeeping for in-flight requests.
#[derive(Resource)]
pub struct FeedFetch {
    tx: Sender<FetchOutcome>,
    rx: Mutex<Receiver<FetchOutcome>>,
    issued: u64,
    current: Option<u64>,
}

impl Default for FeedFetch {
    fn default() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx: Mutex::new(rx),
            issued: 0,
            current: None,
        }
    }
}

impl FeedFetch {
    /// Start a new request cycle; earlier tickets become stale.
    pub fn begin(&mut self) -> (u64, Sender<FetchOutcome>) {
        self.issued += 1;
        self.current = Some(self.issued);
        (self.issued, self.tx.clone())
    }

    /// Forget the in-flight request so its result is discarded on arrival.
    pub fn cancel(&mut self) {
        self.current = None;
    }

    pub fn in_flight(&self) -> bool {
        self.current.is_some()
    }

    /// Take the result of the current request if it has arrived.
    ///
    /// Stale results received along the way are dropped.
    pub fn take_current(&mut self) -> Option<Result<Vec<NeoRecord>, FeedError>> {
        let rx = self.rx.lock().ok()?;
        let mut accepted = None;
        while let Ok(outcome) = rx.try_recv() {
            if Some(outcome.ticket) == self.current {
                accepted = Some(outcome.result);
            } else {
                debug!("Dropping stale feed result (ticket {})", outcome.ticket);
            }
        }
        drop(rx);
        if accepted.is_some() {
            self.current = None;
        }
        accepted
    }
}

fn request_initial_fetch(mut requests: MessageWriter<FeedRefreshRequested>) {
    requests.write(FeedRefreshRequested);
}

/// Spawn a worker thread for the latest refresh request of this frame.
fn start_requested_fetch(
    mut requests: MessageReader<FeedRefreshRequested>,
    config: Res<OrreryConfig>,
    mut fetch: ResMut<FeedFetch>,
    mut state: ResMut<FeedState>,
) {
    if requests.read().count() == 0 {
        return;
    }

    let client = match FeedClient::from_config(&config) {
        Ok(client) => client,
        Err(err) => {
            warn!("Cannot build feed client: {err}");
            *state = FeedState::Failed(err.to_string());
            return;
        }
    };

    let (ticket, tx) = fetch.begin();
    let (start, end) = (config.start_date, config.end_date);
    *state = FeedState::Loading;
    info!("Fetching NEO feed {start} .. {end} (request {ticket})");

    std::thread::spawn(move || {
        let result = client
            .fetch_neo_feed(start, end)
            .map(|by_date| by_date.into_values().flatten().collect());
        // The receiver is gone only when the app is shutting down.
        let _ = tx.send(FetchOutcome { ticket, result });
    });
}

/// Publish a finished fetch. Failures fall back to an empty feed.
pub fn poll_feed(
    mut fetch: ResMut<FeedFetch>,
    mut feed: ResMut<NeoFeed>,
    mut state: ResMut<FeedState>,
) {
    let Some(result) = fetch.take_current() else {
        return;
    };

    match result {
        Ok(records) => {
            info!(
                "Loaded {} NEO records ({} potentially hazardous)",
                records.len(),
                records
                    .iter()
                    .filter(|r| r.is_potentially_hazardous_asteroid)
                    .count()
            );
            *state = FeedState::Loaded {
                count: records.len(),
            };
            *feed = NeoFeed::new(records);
        }
        Err(err) => {
            warn!("NEO feed unavailable, showing an empty sky: {err}");
            *state = FeedState::Failed(err.to_string());
            *feed = NeoFeed::default();
        }
    }
}
