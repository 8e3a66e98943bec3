//! Page navigation
//!
//! Every page change issues a fresh, generation-tagged fetch. Whatever was in
//! flight before is superseded: its response will be dropped on arrival.

use log::{debug, warn};

use artview::logic::pagination;

use crate::services::ApiRequest;
use crate::App;

impl App {
    /// Request `page` from the catalog
    pub(crate) fn load_page(&mut self, page: u32) {
        let ticket = self.model.begin_page_load(page);

        if self
            .api_tx
            .send(ApiRequest::FetchPage {
                generation: ticket.generation,
                page: ticket.page,
            })
            .is_err()
        {
            warn!("API worker is gone; page {} will not load", ticket.page);
        }
    }

    pub(crate) fn next_page(&mut self) {
        let current = self.model.target_page();
        match pagination::next_page(current, self.model.catalog.total_pages) {
            Some(page) => self.load_page(page),
            None => debug!("Already on last page {}", current),
        }
    }

    pub(crate) fn prev_page(&mut self) {
        let current = self.model.target_page();
        match pagination::prev_page(current) {
            Some(page) => self.load_page(page),
            None => debug!("Already on first page"),
        }
    }

    pub(crate) fn first_page(&mut self) {
        if self.model.target_page() != 1 {
            self.load_page(1);
        }
    }

    pub(crate) fn last_page(&mut self) {
        if let Some(last) = pagination::last_page(self.model.catalog.total_pages) {
            if self.model.target_page() != last {
                self.load_page(last);
            }
        }
    }

    /// Fetch the page the user is on (or heading to) again
    pub(crate) fn reload_page(&mut self) {
        let page = self.model.target_page();
        self.load_page(page);
    }
}
