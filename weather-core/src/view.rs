//! Presentation-side state: the current report slot and the transient notice slot.
//!
//! Both slots are replaced wholesale. Searches are fenced with tickets so that
//! the most recently *issued* search decides what is on screen, no matter in
//! which order responses arrive.

use std::{sync::Arc, time::Duration};

use tokio::{sync::Mutex, task::JoinHandle};

use crate::{
    model::WeatherReport,
    provider::WeatherFetcher,
    search::{SearchError, search, validate_city},
};

/// How long the success notice stays up.
pub const NOTICE_TTL: Duration = Duration::from_secs(2);

/// Handle returned when a search starts; only the latest one may update the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Current,
    /// A newer search was issued meanwhile; the outcome was dropped.
    Stale,
}

#[derive(Debug, Default)]
pub struct ViewState {
    report: Option<WeatherReport>,
    notice: Option<String>,
    issued: u64,
}

impl ViewState {
    pub fn report(&self) -> Option<&WeatherReport> {
        self.report.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn begin_search(&mut self) -> SearchTicket {
        self.issued += 1;
        SearchTicket(self.issued)
    }

    pub fn apply(
        &mut self,
        ticket: SearchTicket,
        outcome: &Result<WeatherReport, SearchError>,
    ) -> Applied {
        if ticket.0 != self.issued {
            tracing::debug!("Dropping outcome of superseded search #{}", ticket.0);
            return Applied::Stale;
        }

        self.report = outcome.as_ref().ok().cloned();
        Applied::Current
    }

    pub fn set_notice(&mut self, text: impl Into<String>) {
        self.notice = Some(text.into());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}

pub type SharedView = Arc<Mutex<ViewState>>;

/// Show `text` now and clear it after `ttl`.
///
/// The clear is unconditional: a newer notice set within the window is wiped too.
pub async fn flash_notice(view: &SharedView, text: String, ttl: Duration) -> JoinHandle<()> {
    view.lock().await.set_notice(text);

    let view = Arc::clone(view);
    tokio::spawn(async move {
        tokio::time::sleep(ttl).await;
        view.lock().await.clear_notice();
    })
}

/// A fetcher bound to a view: runs searches and writes their outcome to the screen state.
#[derive(Debug)]
pub struct Session<F> {
    fetcher: F,
    view: SharedView,
    notice_ttl: Duration,
}

impl<F: WeatherFetcher> Session<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            view: SharedView::default(),
            notice_ttl: NOTICE_TTL,
        }
    }

    pub fn with_notice_ttl(mut self, ttl: Duration) -> Self {
        self.notice_ttl = ttl;
        self
    }

    pub fn view(&self) -> &SharedView {
        &self.view
    }

    /// Run one search end to end.
    ///
    /// Blank input is rejected before a ticket is issued, leaving the view as it was.
    pub async fn search(&self, city: &str) -> Result<WeatherReport, SearchError> {
        let city = validate_city(city)?;
        let ticket = self.view.lock().await.begin_search();

        let outcome = search(&self.fetcher, city).await;

        let applied = self.view.lock().await.apply(ticket, &outcome);

        if let (Applied::Current, Ok(report)) = (applied, &outcome) {
            tracing::info!("Showing weather for {}", report.location);
            flash_notice(
                &self.view,
                format!("Successfully found weather for {}!", report.location),
                self.notice_ttl,
            )
            .await;
        }

        outcome
    }
}
