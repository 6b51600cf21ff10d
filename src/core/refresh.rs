use tokio::sync::broadcast;

/// Refresh notifications between views
///
/// An explicit event contract replaces counter bumping: the predictor emits,
/// the analytics view listens. Events carry no payload; receiving one only
/// means the server-side aggregates are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshEvent {
    /// A prediction was recorded on the service.
    PredictionRecorded,
}

/// Broadcast sender half of the refresh contract
#[derive(Debug, Clone)]
pub struct RefreshBus {
    tx: broadcast::Sender<RefreshEvent>,
}

impl RefreshBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Notify all listeners. A send with no listeners is fine: the predictor
    /// can run without the analytics view mounted.
    pub fn emit(&self, event: RefreshEvent) {
        let _ = self.tx.send(event);
    }

    pub fn subscribe(&self) -> RefreshListener {
        RefreshListener {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for RefreshBus {
    fn default() -> Self {
        Self::new(16)
    }
}

/// Receiving half; one per listening view
pub struct RefreshListener {
    rx: broadcast::Receiver<RefreshEvent>,
}

impl RefreshListener {
    /// Next pending event, if any; never blocks. Events queue up rather than
    /// collapse, so two quick emissions are observed as two events.
    pub fn try_next(&mut self) -> Option<RefreshEvent> {
        loop {
            match self.rx.try_recv() {
                Ok(event) => return Some(event),
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    tracing::warn!("Refresh listener lagged, {} events dropped", skipped);
                }
                Err(_) => return None,
            }
        }
    }
}
