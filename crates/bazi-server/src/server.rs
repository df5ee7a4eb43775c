//! HTTP server wiring.

use std::sync::Arc;

use axum::Router;
use chrono::{Local, NaiveDate};
use tower_http::trace::TraceLayer;

use bazi_core::{GanZhiCalendar, SexagenaryCalendar};

use crate::api;
use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::session::{MemorySessionStore, SessionStore};

/// Source of the context date for question seeding and the fortune start year.
pub type Clock = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

/// Calendar shared across handlers.
pub type SharedCalendar = Arc<dyn GanZhiCalendar + Send + Sync>;

/// State shared by all handlers.
pub type SharedState = Arc<AppState>;

/// Application state.
pub struct AppState {
    /// Session storage.
    pub store: Arc<dyn SessionStore>,
    /// Calendar used for charts and year stems.
    pub calendar: SharedCalendar,
    /// Server configuration.
    pub config: ServerConfig,
    clock: Clock,
}

impl AppState {
    /// State with an in-memory store, the built-in calendar, and the local date.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            store: Arc::new(MemorySessionStore::new()),
            calendar: Arc::new(SexagenaryCalendar::new()),
            config,
            clock: Arc::new(|| Local::now().date_naive()),
        }
    }

    /// Replace the session store.
    pub fn with_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.store = store;
        self
    }

    /// Replace the calendar.
    pub fn with_calendar(mut self, calendar: SharedCalendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// Replace the clock.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Pin the clock to a fixed date.
    pub fn with_today(self, today: NaiveDate) -> Self {
        self.with_clock(Arc::new(move || today))
    }

    /// The current context date.
    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }
}

/// Build the router over a state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(api::api_routes())
        .merge(api::health_routes())
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until the process is stopped.
pub async fn run(config: ServerConfig) -> ServerResult<()> {
    let addr = config.bind;
    let app = router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
