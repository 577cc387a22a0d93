use super::errors::PollError;
use super::models::{PollFailure, PollPhase, StatusPoller, StatusSnapshot};
use super::retry::RetryPolicy;
use craftpulse_config::PollerSettings;
use craftpulse_events::{AppEvent, EventBus};
use craftpulse_gateway::StatusGateway;
use craftpulse_models::StatusResult;
use std::sync::Arc;
use tokio::sync::{broadcast, watch, Notify};
use tokio::task::JoinHandle;
use tokio::time::{Duration, Instant, MissedTickBehavior};

impl StatusPoller {
    pub fn new(
        gateway: Arc<StatusGateway>,
        address: String,
        settings: &PollerSettings,
        events: Arc<EventBus>,
    ) -> Arc<Self> {
        let (snapshot_tx, _) = watch::channel(StatusSnapshot::initial());
        let (shutdown_tx, _) = broadcast::channel(1);

        Arc::new(Self {
            gateway,
            address,
            interval: Duration::from_secs(settings.interval_secs),
            debounce: Duration::from_secs(settings.debounce_secs),
            retry: RetryPolicy::from_settings(settings),
            events,
            snapshot_tx,
            refresh_notify: Notify::new(),
            shutdown_tx,
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn subscribe(&self) -> watch::Receiver<StatusSnapshot> {
        self.snapshot_tx.subscribe()
    }

    pub fn snapshot(&self) -> StatusSnapshot {
        self.snapshot_tx.borrow().clone()
    }

    /// Queues a manual refresh. Triggers inside the debounce window collapse
    /// into the request already in flight or just completed.
    pub fn request_refresh(&self) {
        self.refresh_notify.notify_one();
    }

    /// Signals the polling loop to stop
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(());
    }

    pub fn start(self: Arc<Self>) -> JoinHandle<()> {
        tokio::spawn(async move { self.run().await })
    }

    async fn run(&self) {
        let mut shutdown_rx = self.shutdown_tx.subscribe();
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut last_request: Option<Instant> = None;

        loop {
            // First tick completes immediately: the mount fetch
            let manual = tokio::select! {
                _ = ticker.tick() => false,
                _ = self.refresh_notify.notified() => true,
                _ = shutdown_rx.recv() => break,
            };

            if let Some(at) = last_request {
                if at.elapsed() < self.debounce {
                    tracing::debug!("Refresh trigger for {} inside debounce window, skipped", self.address);
                    continue;
                }
            }
            last_request = Some(Instant::now());

            // Manual retries resolve within one request cycle; only the
            // automatic path walks the backoff schedule
            let attempts = if manual { 1 } else { self.retry.max_attempts };
            self.refresh(attempts, &mut shutdown_rx).await;
        }
    }

    async fn refresh(&self, max_attempts: u32, shutdown_rx: &mut broadcast::Receiver<()>) {
        self.mark_refreshing();

        let mut attempt = 0;
        loop {
            let error = match self.gateway.status(&self.address).await {
                Ok(reply) => {
                    self.publish_ready(reply.result);
                    return;
                }
                Err(e) if !e.is_retryable() => {
                    // Bad input cannot heal on retry
                    self.publish_failed(PollError::from(e));
                    return;
                }
                Err(e) => PollError::from(e),
            };

            attempt += 1;
            if attempt >= max_attempts {
                if max_attempts > 1 {
                    self.events.emit(AppEvent::PollerGaveUp {
                        address: self.address.clone(),
                        attempts: attempt,
                    });
                }
                self.publish_failed(error);
                return;
            }

            let delay = self.retry.delay(attempt - 1);
            tracing::warn!(
                "Status refresh attempt {} failed for {}: {}. Retrying in {:?}...",
                attempt,
                self.address,
                error,
                delay
            );
            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                _ = shutdown_rx.recv() => {
                    self.publish_failed(error);
                    return;
                }
            }
        }
    }

    fn mark_refreshing(&self) {
        self.snapshot_tx.send_modify(|snapshot| {
            // The very first fetch stays in Loading
            if snapshot.data.is_some() || snapshot.error.is_some() {
                snapshot.phase = PollPhase::Refreshing;
            }
        });
    }

    fn publish_ready(&self, result: StatusResult) {
        let now = chrono::Utc::now().to_rfc3339();
        self.snapshot_tx.send_modify(|snapshot| {
            snapshot.phase = PollPhase::Ready;
            snapshot.data = Some(result);
            snapshot.error = None;
            snapshot.last_updated = Some(now.clone());
        });
    }

    fn publish_failed(&self, error: PollError) {
        self.snapshot_tx.send_modify(|snapshot| {
            // Last good data stays in place for display continuity
            snapshot.phase = PollPhase::Failed;
            snapshot.error = Some(PollFailure {
                kind: error.kind(),
                message: error.to_string(),
            });
        });
    }
}
