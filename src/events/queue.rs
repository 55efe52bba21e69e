use tokio::sync::mpsc;

use crate::handlers::session::UiEvent;

#[derive(Clone)]
pub struct EventBus {
    tx: mpsc::Sender<UiEvent>,
}

impl EventBus {
    pub fn new(buffer: usize) -> (Self, mpsc::Receiver<UiEvent>) {
        let (tx, rx) = mpsc::channel(buffer);
        (Self { tx }, rx)
    }

    pub async fn emit(&self, event: UiEvent) {
        if self.tx.send(event).await.is_err() {
            tracing::warn!("event worker stopped, dropping event");
        }
    }
}
