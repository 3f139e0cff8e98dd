//! Page Controller
//!
//! Owns one page's state and runs the audit workflow.
//!
//! ```text
//!  view ──Intent──▶ dispatch ──▶ reducer ──▶ PageState (watch)
//!                                   │
//!                                   ├─ Notify ──────▶ notification queue
//!                                   └─ StartAudit ──▶ engine task
//!                                                        │ (delay)
//!                      reducer ◀── AuditCompleted ◀──────┘
//! ```

pub mod state;
pub mod intent;
pub mod reducer;

use std::collections::VecDeque;
use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::logic::AuditEngine;
use crate::models::{AuditRequest, Notification};

pub use intent::{Effect, Intent, Message};
pub use state::PageState;

/// Oldest notifications are dropped past this many undelivered ones
const NOTIFICATION_LIMIT: usize = 16;

pub struct Controller {
    id: Uuid,
    state: watch::Sender<PageState>,
    notifications: Mutex<VecDeque<Notification>>,
    engine: Arc<dyn AuditEngine>,
    cancel: CancellationToken,
    last_touched: Mutex<Instant>,
}

impl Controller {
    pub fn new(engine: Arc<dyn AuditEngine>) -> Arc<Self> {
        let (state, _) = watch::channel(PageState::default());

        Arc::new(Self {
            id: Uuid::new_v4(),
            state,
            notifications: Mutex::new(VecDeque::new()),
            engine,
            cancel: CancellationToken::new(),
            last_touched: Mutex::new(Instant::now()),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn snapshot(&self) -> PageState {
        self.state.borrow().clone()
    }

    /// Mark the page as used now
    pub fn touch(&self) {
        *self.last_touched.lock() = Instant::now();
    }

    pub fn idle_for(&self) -> Duration {
        self.last_touched.lock().elapsed()
    }

    pub fn subscribe(&self) -> watch::Receiver<PageState> {
        self.state.subscribe()
    }

    /// Apply a user intent. Returns the notifications it raised right away;
    /// they are also queued for `drain_notifications`.
    pub fn dispatch(self: &Arc<Self>, intent: Intent) -> Vec<Notification> {
        tracing::debug!("Session {} intent: {:?}", self.id, intent);
        self.touch();
        self.apply(Message::Intent(intent))
    }

    /// Wait until no audit is in flight, then return the state
    pub async fn settled(&self) -> PageState {
        let mut rx = self.subscribe();
        let settled = match rx.wait_for(|state| !state.is_loading).await {
            Ok(state) => state.clone(),
            // Sender lives in `self`, so the channel cannot close under us
            Err(_) => self.snapshot(),
        };
        settled
    }

    pub fn drain_notifications(&self) -> Vec<Notification> {
        self.notifications.lock().drain(..).collect()
    }

    /// Tear the page down. Any in-flight audit is abandoned.
    pub fn unmount(&self) {
        if !self.cancel.is_cancelled() {
            tracing::debug!("Session {} unmounted", self.id);
            self.cancel.cancel();
        }
    }

    fn apply(self: &Arc<Self>, message: Message) -> Vec<Notification> {
        let mut effects = Vec::new();

        self.state.send_if_modified(|state| {
            let transition = reducer::reduce(state, message);
            effects = transition.effects;
            match transition.state {
                Some(next) => {
                    *state = next;
                    true
                }
                None => false,
            }
        });

        let mut raised = Vec::new();
        for effect in effects {
            match effect {
                Effect::Notify(notification) => {
                    self.push_notification(notification.clone());
                    raised.push(notification);
                }
                Effect::StartAudit { request_id, request } => {
                    self.spawn_audit(request_id, request);
                }
            }
        }
        raised
    }

    fn push_notification(&self, notification: Notification) {
        let mut queue = self.notifications.lock();
        if queue.len() >= NOTIFICATION_LIMIT {
            queue.pop_front();
        }
        queue.push_back(notification);
    }

    fn spawn_audit(self: &Arc<Self>, request_id: u64, request: AuditRequest) {
        tracing::info!(
            "Session {} audit {} started ({})",
            self.id,
            request_id,
            request.source()
        );

        let controller: Weak<Self> = Arc::downgrade(self);
        let engine = Arc::clone(&self.engine);
        let cancel = self.cancel.child_token();

        tokio::spawn(async move {
            let Some(result) = engine.audit(&request, &cancel).await else {
                return;
            };

            let Some(controller) = controller.upgrade() else {
                return;
            };

            tracing::info!(
                "Session {} audit {} finished: {}",
                controller.id,
                request_id,
                result.summary
            );
            controller.apply(Message::AuditCompleted {
                request_id,
                request,
                result: Box::new(result),
            });
        });
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_pending, assert_ready, task};
    use crate::logic::MockAuditEngine;
    use crate::models::{AuditSource, Tab};

    const ADDRESS: &str = "0x1234567890123456789012345678901234567890";

    fn controller() -> Arc<Controller> {
        Controller::new(Arc::new(MockAuditEngine::default()))
    }

    #[tokio::test(start_paused = true)]
    async fn test_code_audit_completes_after_delay() {
        let page = controller();
        page.dispatch(Intent::SelectTab { tab: Tab::Upload });
        page.dispatch(Intent::EditCode { code: "contract Vault {}".to_string() });

        let raised = page.dispatch(Intent::SubmitCode);
        assert!(raised.is_empty());

        let loading = page.snapshot();
        assert!(loading.is_loading);
        assert_eq!(loading.active_tab, Tab::Upload);

        let started = tokio::time::Instant::now();
        let done = page.settled().await;
        assert!(started.elapsed() >= Duration::from_millis(2500));

        assert!(!done.is_loading);
        assert_eq!(done.active_tab, Tab::AuditResults);
        let result = done.audit_result.unwrap();
        assert_eq!(result.findings.len(), 3);
        assert_eq!(result.predicted_risks.len(), 1);
        assert_eq!(result.score, 65);
        assert_eq!(result.source_label, "PastedCode.sol");

        let queued = page.drain_notifications();
        assert_eq!(queued.len(), 1);
        assert_eq!(queued[0].title, "Audit Complete!");
        assert_eq!(
            queued[0].description,
            "Security audit for pasted code finished. Check the results tab."
        );
        assert!(page.drain_notifications().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_settled_pending_while_in_flight() {
        let page = controller();
        page.dispatch(Intent::EditCode { code: "contract A {}".to_string() });
        page.dispatch(Intent::SubmitCode);

        let mut waiting = task::spawn(page.settled());
        assert_pending!(waiting.poll());

        tokio::time::sleep(Duration::from_millis(2600)).await;
        assert!(waiting.is_woken());
        let done = assert_ready!(waiting.poll());
        assert!(!done.is_loading);
        assert!(done.audit_result.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispatch_resets_idle_clock() {
        let page = controller();
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert!(page.idle_for() >= Duration::from_secs(60));

        page.dispatch(Intent::SelectTab { tab: Tab::Technology });
        assert!(page.idle_for() < Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_address_reports_synchronously() {
        let page = controller();
        page.dispatch(Intent::EditAddress { address: "0xBAD".to_string() });

        let raised = page.dispatch(Intent::SubmitAddress);
        assert_eq!(raised.len(), 1);
        assert_eq!(raised[0].title, "Invalid Address");

        let state = page.snapshot();
        assert!(!state.is_loading);
        assert!(state.audit_result.is_none());
        assert_eq!(state.active_tab, Tab::Overview);
        assert_eq!(page.drain_notifications(), raised);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sequential_audits_replace_result() {
        let page = controller();
        page.dispatch(Intent::UploadFile {
            file_name: "Token.sol".to_string(),
            contents: "contract Token {}".to_string(),
        });
        page.dispatch(Intent::SubmitCode);
        let first = page.settled().await;
        assert_eq!(first.audit_result.unwrap().source_label, "Token.sol");

        page.dispatch(Intent::EditAddress { address: ADDRESS.to_string() });
        page.dispatch(Intent::SubmitAddress);
        assert!(page.snapshot().audit_result.is_none());

        let second = page.settled().await;
        let result = second.audit_result.unwrap();
        assert_eq!(result.source, AuditSource::Address);
        assert_eq!(result.source_label, format!("Contract at {}", ADDRESS));
        assert_eq!(page.drain_notifications().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_abandons_audit() {
        let page = controller();
        let mut rx = page.subscribe();
        page.dispatch(Intent::EditCode { code: "contract A {}".to_string() });
        page.dispatch(Intent::SubmitCode);
        page.unmount();

        tokio::time::sleep(Duration::from_secs(5)).await;

        assert!(rx.borrow_and_update().is_loading);
        assert!(page.snapshot().audit_result.is_none());
        assert!(page.drain_notifications().is_empty());
    }

    #[tokio::test]
    async fn test_notification_queue_bounded() {
        let page = controller();
        for _ in 0..(NOTIFICATION_LIMIT + 4) {
            page.dispatch(Intent::SubmitCode);
        }
        assert_eq!(page.drain_notifications().len(), NOTIFICATION_LIMIT);
    }
}
