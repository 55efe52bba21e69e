use tokio::sync::mpsc;

use crate::handlers::session::{SessionEngine, UiEvent};

/// Handles events in arrival order until every sender is gone, then waits
/// for slot lookups still in flight.
pub async fn run_event_worker(mut rx: mpsc::Receiver<UiEvent>, engine: SessionEngine) {
    while let Some(event) = rx.recv().await {
        engine.handle_event(event).await;
    }
    engine.settle().await;
}
