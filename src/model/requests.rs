//! Request Model
//!
//! Generation tagging for page fetches. Every fetch gets the next generation
//! number; only a response carrying the latest issued generation may be
//! applied. Older responses are stale and get dropped.

use std::time::Instant;

/// Handle for one issued page fetch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket {
    pub generation: u64,
    pub page: u32,
}

#[derive(Clone, Debug)]
pub struct PendingFetch {
    pub ticket: RequestTicket,
    pub started_at: Instant,
}

#[derive(Clone, Debug, Default)]
pub struct RequestTracker {
    latest_generation: u64,
    in_flight: Option<PendingFetch>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new fetch, superseding whatever was in flight
    pub fn issue(&mut self, page: u32) -> RequestTicket {
        self.latest_generation += 1;
        let ticket = RequestTicket {
            generation: self.latest_generation,
            page,
        };
        self.in_flight = Some(PendingFetch {
            ticket,
            started_at: Instant::now(),
        });
        ticket
    }

    pub fn latest_generation(&self) -> u64 {
        self.latest_generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.latest_generation && self.in_flight.is_some()
    }

    /// Mark the fetch with `generation` as done
    ///
    /// Returns the pending fetch if it was the current one, `None` for stale
    /// or unknown generations (state untouched).
    pub fn complete(&mut self, generation: u64) -> Option<PendingFetch> {
        if !self.is_current(generation) {
            return None;
        }
        self.in_flight.take()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn pending_page(&self) -> Option<u32> {
        self.in_flight.as_ref().map(|pending| pending.ticket.page)
    }
}
