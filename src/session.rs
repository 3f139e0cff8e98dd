//! Page sessions
//!
//! One controller per mounted page. Removing a session unmounts its page.
//! Pages nobody has touched for `idle_ttl` are unmounted by the sweeper, or
//! on demand when the store is full.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use uuid::Uuid;

use crate::controller::Controller;
use crate::logic::AuditEngine;
use crate::{AppError, AppResult};

pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Arc<Controller>>>,
    engine: Arc<dyn AuditEngine>,
    max_sessions: usize,
    idle_ttl: Duration,
}

impl SessionStore {
    pub fn new(engine: Arc<dyn AuditEngine>, max_sessions: usize, idle_ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            engine,
            max_sessions,
            idle_ttl,
        }
    }

    /// Mount a fresh page
    pub fn create(&self) -> AppResult<Arc<Controller>> {
        let mut sessions = self.sessions.write();
        if sessions.len() >= self.max_sessions {
            let evicted = Self::evict_where(&mut sessions, |page| page.idle_for() >= self.idle_ttl);
            if evicted > 0 {
                tracing::info!("Evicted {} idle sessions to make room", evicted);
            }
        }
        if sessions.len() >= self.max_sessions {
            tracing::warn!("Session limit reached ({})", self.max_sessions);
            return Err(AppError::AlreadyExists("Too many active sessions".to_string()));
        }

        let controller = Controller::new(Arc::clone(&self.engine));
        sessions.insert(controller.id(), Arc::clone(&controller));
        tracing::info!("Session {} mounted ({} active)", controller.id(), sessions.len());

        Ok(controller)
    }

    /// Look up a page and mark it as used
    pub fn get(&self, id: Uuid) -> AppResult<Arc<Controller>> {
        let controller = self
            .sessions
            .read()
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Session not found".to_string()))?;

        controller.touch();
        Ok(controller)
    }

    pub fn remove(&self, id: Uuid) -> AppResult<()> {
        let controller = self
            .sessions
            .write()
            .remove(&id)
            .ok_or_else(|| AppError::NotFound("Session not found".to_string()))?;

        controller.unmount();
        tracing::info!("Session {} removed", id);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    /// Unmount every page idle for at least `idle_ttl`. Returns how many.
    pub fn evict_idle(&self) -> usize {
        let idle_ttl = self.idle_ttl;
        Self::evict_where(&mut self.sessions.write(), |page| page.idle_for() >= idle_ttl)
    }

    fn evict_where(
        sessions: &mut HashMap<Uuid, Arc<Controller>>,
        idle: impl Fn(&Controller) -> bool,
    ) -> usize {
        let before = sessions.len();
        sessions.retain(|id, page| {
            if idle(page) {
                tracing::debug!("Session {} idle for {:?}, unmounting", id, page.idle_for());
                page.unmount();
                false
            } else {
                true
            }
        });
        before - sessions.len()
    }
}

/// Periodically evict idle pages. Runs until the store is dropped.
pub fn spawn_sweeper(store: &Arc<SessionStore>, period: Duration) -> tokio::task::JoinHandle<()> {
    let store = Arc::downgrade(store);

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let Some(store) = store.upgrade() else {
                break;
            };

            let evicted = store.evict_idle();
            if evicted > 0 {
                tracing::info!("Sweeper evicted {} idle sessions ({} active)", evicted, store.len());
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::MockAuditEngine;

    const TTL: Duration = Duration::from_secs(30 * 60);

    fn store(max_sessions: usize) -> SessionStore {
        SessionStore::new(Arc::new(MockAuditEngine::default()), max_sessions, TTL)
    }

    #[test]
    fn test_create_get_remove() {
        let store = store(4);
        let page = store.create().unwrap();

        assert_eq!(store.get(page.id()).unwrap().id(), page.id());
        assert_eq!(store.len(), 1);

        store.remove(page.id()).unwrap();
        assert_eq!(store.len(), 0);
        assert!(matches!(store.get(page.id()), Err(AppError::NotFound(_))));
        assert!(matches!(store.remove(page.id()), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_session_limit() {
        let store = store(2);
        store.create().unwrap();
        store.create().unwrap();
        assert!(matches!(store.create(), Err(AppError::AlreadyExists(_))));
    }

    #[test]
    fn test_sessions_isolated() {
        let store = store(4);
        let a = store.create().unwrap();
        let b = store.create().unwrap();

        a.dispatch(crate::controller::Intent::EditCode { code: "contract A {}".to_string() });
        assert_eq!(a.snapshot().contract_code, "contract A {}");
        assert!(b.snapshot().contract_code.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_store_reclaims_abandoned_pages() {
        let store = store(2);
        let first = store.create().unwrap();
        store.create().unwrap();

        tokio::time::sleep(Duration::from_secs(7 * 24 * 60 * 60)).await;

        let page = store.create().unwrap();
        assert_eq!(store.len(), 1);
        assert!(matches!(store.get(first.id()), Err(AppError::NotFound(_))));
        assert_eq!(store.get(page.id()).unwrap().id(), page.id());
    }

    #[tokio::test(start_paused = true)]
    async fn test_evict_idle_keeps_recently_used() {
        let store = store(4);
        let stale = store.create().unwrap();
        let active = store.create().unwrap();

        tokio::time::sleep(TTL - Duration::from_secs(60)).await;
        store.get(active.id()).unwrap();
        tokio::time::sleep(Duration::from_secs(120)).await;

        assert_eq!(store.evict_idle(), 1);
        assert!(matches!(store.get(stale.id()), Err(AppError::NotFound(_))));
        assert!(store.get(active.id()).is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_evicts_in_background() {
        let store = Arc::new(store(4));
        store.create().unwrap();
        store.create().unwrap();

        let sweeper = spawn_sweeper(&store, Duration::from_secs(60));
        tokio::time::sleep(TTL + Duration::from_secs(120)).await;
        assert_eq!(store.len(), 0);

        drop(store);
        tokio::time::sleep(Duration::from_secs(120)).await;
        assert!(sweeper.is_finished());
    }
}
