use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::error;

use crate::clients::api_client::ApiClient;
use crate::config::Settings;
use crate::errors::BookingResult;
use crate::events::queue::EventBus;
use crate::events::worker::run_event_worker;
use crate::handlers::session::{SessionEngine, UiEvent};
use crate::models::preferences::load_preferences;
use crate::service::api_service::BackendService;
use crate::service::notifier::Notifier;
use crate::state::AppState;

const EVENT_BUFFER: usize = 32;

/// Wires the backend client, saved preferences and notifier into an engine.
pub fn start_session(settings: &Settings, notifier: Arc<dyn Notifier>) -> BookingResult<SessionEngine> {
    let client = ApiClient::new(&settings.api_base_url, settings.request_timeout)?;
    let preferences = load_preferences(&settings.preferences_location)?;
    let store = Arc::new(Mutex::new(AppState::new(preferences)));
    let engine = SessionEngine::new(
        store,
        Arc::new(BackendService::new(client)),
        notifier,
        settings.today(),
    )
    .persist_preferences_to(&settings.preferences_location);
    Ok(engine)
}

/// Runs `events` through a fresh bus and worker and returns the resulting
/// snapshot once all of them, and any lookups they started, are done.
pub async fn dispatch(engine: &SessionEngine, events: Vec<UiEvent>) -> AppState {
    let (bus, rx) = EventBus::new(EVENT_BUFFER);
    let worker = tokio::spawn(run_event_worker(rx, engine.clone()));
    for event in events {
        bus.emit(event).await;
    }
    drop(bus);
    if let Err(err) = worker.await {
        error!(error = %err, "event worker crashed");
    }
    engine.snapshot().await
}
