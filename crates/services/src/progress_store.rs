//! The observable holder of the current user's progress record.
//!
//! The store is the single source of truth for lesson completion and the
//! sole writer to the persistence backend for that record. Mutations commit
//! in memory first (optimistic update), notify subscribers once per commit,
//! and persist the full record asynchronously. A failed write is surfaced to
//! the caller and to subscribers but never rolls back the in-memory state.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use hub_core::model::{CourseId, LessonId, ProgressRecord};
use storage::repository::ProgressRepository;

use crate::error::ProgressStoreError;
use crate::identity::IdentityProvider;

/// A committed change, delivered to every subscriber exactly once.
#[derive(Clone, Debug, PartialEq)]
pub enum ProgressEvent {
    /// Initial load finished; carries the hydrated snapshot (possibly empty).
    Hydrated(ProgressRecord),
    /// A toggle committed; carries the new snapshot.
    Changed(ProgressRecord),
    /// A persistence write failed; the in-memory state was kept.
    WriteFailed { message: String },
    /// The hydration read failed; the store started empty and writable.
    ReadFailed { message: String },
}

type Callback = Arc<dyn Fn(&ProgressEvent) + Send + Sync>;

struct Subscriber {
    id: u64,
    callback: Callback,
}

/// Deregistration handle returned by [`ProgressStore::subscribe`].
///
/// Calling [`unsubscribe`](Subscription::unsubscribe) more than once is a
/// no-op, as is dropping the handle without calling it (the subscription
/// then lives as long as the store).
pub struct Subscription {
    id: u64,
    subscribers: Weak<Mutex<Vec<Subscriber>>>,
}

impl Subscription {
    pub fn unsubscribe(&self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            let mut guard = lock(&subscribers);
            guard.retain(|subscriber| subscriber.id != self.id);
        }
    }
}

/// Authoritative, observable per-user progress state.
///
/// Constructed once at the composition root and shared as `Arc`; all other
/// components receive owned snapshots, never live references.
pub struct ProgressStore {
    identity: Arc<dyn IdentityProvider>,
    repo: Arc<dyn ProgressRepository>,
    record: Mutex<ProgressRecord>,
    hydration_started: AtomicBool,
    loading: AtomicBool,
    subscribers: Arc<Mutex<Vec<Subscriber>>>,
    next_subscription_id: AtomicU64,
}

impl ProgressStore {
    #[must_use]
    pub fn new(identity: Arc<dyn IdentityProvider>, repo: Arc<dyn ProgressRepository>) -> Self {
        Self {
            identity,
            repo,
            record: Mutex::new(ProgressRecord::new()),
            hydration_started: AtomicBool::new(false),
            loading: AtomicBool::new(true),
            subscribers: Arc::new(Mutex::new(Vec::new())),
            next_subscription_id: AtomicU64::new(1),
        }
    }

    /// Current in-memory snapshot. Never touches storage.
    #[must_use]
    pub fn progress(&self) -> ProgressRecord {
        lock(&self.record).clone()
    }

    /// True until hydration has completed (successfully or not).
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Registers a callback invoked once per committed change, hydration
    /// included. Returns the handle that deregisters it.
    pub fn subscribe(
        &self,
        callback: impl Fn(&ProgressEvent) + Send + Sync + 'static,
    ) -> Subscription {
        let id = self.next_subscription_id.fetch_add(1, Ordering::Relaxed);
        lock(&self.subscribers).push(Subscriber {
            id,
            callback: Arc::new(callback),
        });
        Subscription {
            id,
            subscribers: Arc::downgrade(&self.subscribers),
        }
    }

    /// Loads the persisted record for the current user, exactly once.
    ///
    /// Replaces in-memory state with whatever was stored (absent document
    /// means an empty record), marks loading complete, and emits
    /// [`ProgressEvent::Hydrated`]. A failed read falls back to an empty,
    /// writable record so the UI is never stuck loading, and is reported to
    /// subscribers as [`ProgressEvent::ReadFailed`]. Later calls return the
    /// current snapshot without touching storage.
    pub async fn hydrate(&self) -> ProgressRecord {
        if self.hydration_started.swap(true, Ordering::AcqRel) {
            return self.progress();
        }

        let mut read_failure = None;
        let loaded = match self.identity.current_user() {
            Some(user) => match self.repo.load(&user).await {
                Ok(Some(record)) => record,
                Ok(None) => ProgressRecord::new(),
                Err(err) => {
                    let err = ProgressStoreError::ReadFailed(err);
                    tracing::warn!(user = %user, error = %err, "hydration failed, starting empty");
                    read_failure = Some(err.to_string());
                    ProgressRecord::new()
                }
            },
            // Not signed in: no progress available yet, not an error.
            None => ProgressRecord::new(),
        };

        *lock(&self.record) = loaded.clone();
        self.loading.store(false, Ordering::Release);
        if let Some(message) = read_failure {
            self.emit(&ProgressEvent::ReadFailed { message });
        }
        self.emit(&ProgressEvent::Hydrated(loaded.clone()));
        loaded
    }

    /// Flips completion of one lesson, commits in memory, notifies
    /// subscribers, and returns the new snapshot.
    ///
    /// Repeating the same toggle restores the prior record. Persistence is
    /// separate (see [`persist`](Self::persist)); the commit itself never
    /// blocks on I/O.
    ///
    /// # Errors
    ///
    /// Returns `ProgressStoreError::IdentityUnavailable` when nobody is
    /// signed in yet.
    pub fn toggle_lesson(
        &self,
        course_id: &CourseId,
        lesson_id: &LessonId,
    ) -> Result<ProgressRecord, ProgressStoreError> {
        if self.identity.current_user().is_none() {
            return Err(ProgressStoreError::IdentityUnavailable);
        }

        let snapshot = {
            let mut guard = lock(&self.record);
            guard.toggle(course_id, lesson_id);
            guard.clone()
        };
        self.emit(&ProgressEvent::Changed(snapshot.clone()));
        Ok(snapshot)
    }

    /// Writes the current snapshot to the backend.
    ///
    /// Each write carries the full record, so overlapping writes cannot
    /// corrupt it: the last committed in-memory state wins regardless of
    /// completion order. There is no automatic retry.
    ///
    /// # Errors
    ///
    /// Returns `ProgressStoreError::IdentityUnavailable` when nobody is
    /// signed in, or `WriteFailed` when the backend rejects the write. The
    /// optimistic in-memory state is kept either way, and a `WriteFailed`
    /// event is emitted to subscribers.
    pub async fn persist(&self) -> Result<(), ProgressStoreError> {
        let user = self
            .identity
            .current_user()
            .ok_or(ProgressStoreError::IdentityUnavailable)?;
        let snapshot = self.progress();

        match self.repo.save(&user, &snapshot).await {
            Ok(()) => Ok(()),
            Err(err) => {
                tracing::warn!(user = %user, error = %err, "progress write failed, keeping optimistic state");
                self.emit(&ProgressEvent::WriteFailed {
                    message: err.to_string(),
                });
                Err(ProgressStoreError::WriteFailed(err))
            }
        }
    }

    /// Toggle followed by a persistence write of the resulting snapshot.
    ///
    /// # Errors
    ///
    /// On `WriteFailed` the toggle has already committed in memory; only the
    /// write needs retrying.
    pub async fn toggle_and_persist(
        &self,
        course_id: &CourseId,
        lesson_id: &LessonId,
    ) -> Result<ProgressRecord, ProgressStoreError> {
        let snapshot = self.toggle_lesson(course_id, lesson_id)?;
        self.persist().await?;
        Ok(snapshot)
    }

    fn emit(&self, event: &ProgressEvent) {
        // Clone the callbacks out of the lock so a handler can subscribe or
        // unsubscribe without deadlocking.
        let callbacks: Vec<Callback> = lock(&self.subscribers)
            .iter()
            .map(|subscriber| Arc::clone(&subscriber.callback))
            .collect();
        for callback in callbacks {
            callback(event);
        }
    }
}

// A poisoned lock only means some observer panicked mid-notification; the
// guarded data itself is still consistent.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{AnonymousIdentity, SignedOutIdentity};
    use hub_core::model::UserId;
    use storage::repository::{InMemoryRepository, StorageError};

    fn store_with(repo: InMemoryRepository) -> (ProgressStore, UserId) {
        let identity = AnonymousIdentity::restore(UserId::new("test-user"));
        let user = identity.current_user().expect("fixed identity");
        let store = ProgressStore::new(Arc::new(identity), Arc::new(repo));
        (store, user)
    }

    fn ids(course: &str, lesson: &str) -> (CourseId, LessonId) {
        (CourseId::new(course), LessonId::new(lesson))
    }

    /// Repository double whose writes and/or reads always fail.
    struct FailingRepository {
        fail_load: bool,
        fail_save: bool,
    }

    #[async_trait::async_trait]
    impl ProgressRepository for FailingRepository {
        async fn load(&self, _user: &UserId) -> Result<Option<ProgressRecord>, StorageError> {
            if self.fail_load {
                Err(StorageError::Connection("backend unreachable".into()))
            } else {
                Ok(None)
            }
        }

        async fn save(
            &self,
            _user: &UserId,
            _record: &ProgressRecord,
        ) -> Result<(), StorageError> {
            if self.fail_save {
                Err(StorageError::Connection("backend unreachable".into()))
            } else {
                Ok(())
            }
        }
    }

    fn collect_events(store: &ProgressStore) -> (Subscription, Arc<Mutex<Vec<ProgressEvent>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let subscription = store.subscribe(move |event| {
            sink.lock().unwrap().push(event.clone());
        });
        (subscription, events)
    }

    #[tokio::test]
    async fn hydrates_exactly_the_persisted_record() {
        let repo = InMemoryRepository::new();
        let (store, user) = store_with(repo.clone());

        let mut stored = ProgressRecord::new();
        stored.toggle(&CourseId::new("2"), &LessonId::new("x"));
        repo.save(&user, &stored).await.unwrap();

        let hydrated = store.hydrate().await;
        assert_eq!(hydrated, stored);
        assert_eq!(store.progress(), stored);
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn hydration_without_stored_record_starts_empty() {
        let (store, _) = store_with(InMemoryRepository::new());
        let (_subscription, events) = collect_events(&store);

        let hydrated = store.hydrate().await;

        assert!(hydrated.is_empty());
        assert!(!store.is_loading());
        assert_eq!(
            events.lock().unwrap().as_slice(),
            &[ProgressEvent::Hydrated(ProgressRecord::new())]
        );
    }

    #[tokio::test]
    async fn hydration_runs_only_once() {
        let repo = InMemoryRepository::new();
        let (store, user) = store_with(repo.clone());
        store.hydrate().await;

        // A record written after hydration must not replace local state on a
        // second hydrate call.
        let mut stored = ProgressRecord::new();
        stored.toggle(&CourseId::new("c"), &LessonId::new("l"));
        repo.save(&user, &stored).await.unwrap();

        let second = store.hydrate().await;
        assert!(second.is_empty());
    }

    #[tokio::test]
    async fn failed_hydration_falls_back_to_empty_writable_state() {
        let identity = AnonymousIdentity::restore(UserId::new("test-user"));
        let store = ProgressStore::new(
            Arc::new(identity),
            Arc::new(FailingRepository {
                fail_load: true,
                fail_save: false,
            }),
        );
        let (_subscription, events) = collect_events(&store);

        let hydrated = store.hydrate().await;
        assert!(hydrated.is_empty());
        assert!(!store.is_loading(), "loading must complete on failure");

        // The failed read is surfaced to subscribers before readiness.
        let observed = events.lock().unwrap();
        assert_eq!(observed.len(), 2, "one read error, one hydration: {observed:?}");
        assert!(matches!(observed[0], ProgressEvent::ReadFailed { .. }));
        assert_eq!(observed[1], ProgressEvent::Hydrated(ProgressRecord::new()));
        drop(observed);

        // Still writable afterwards.
        let (course, lesson) = ids("c1", "a");
        let snapshot = store.toggle_lesson(&course, &lesson).unwrap();
        assert!(snapshot.is_completed(&course, &lesson));
    }

    #[tokio::test]
    async fn toggle_commits_persists_and_notifies() {
        let repo = InMemoryRepository::new();
        let (store, user) = store_with(repo.clone());
        store.hydrate().await;
        let (_subscription, events) = collect_events(&store);

        let (course, lesson) = ids("web-dev-101", "html-intro");
        let snapshot = store.toggle_and_persist(&course, &lesson).await.unwrap();

        assert!(snapshot.is_completed(&course, &lesson));
        assert_eq!(repo.load(&user).await.unwrap(), Some(snapshot.clone()));
        assert_eq!(
            events.lock().unwrap().as_slice(),
            &[ProgressEvent::Changed(snapshot)]
        );
    }

    #[tokio::test]
    async fn double_toggle_restores_prior_state() {
        let (store, _) = store_with(InMemoryRepository::new());
        store.hydrate().await;

        let (course, lesson_a) = ids("c1", "a");
        store.toggle_lesson(&course, &lesson_a).unwrap();
        let before = store.progress();

        let (_, lesson_b) = ids("c1", "b");
        store.toggle_lesson(&course, &lesson_b).unwrap();
        store.toggle_lesson(&course, &lesson_b).unwrap();

        assert_eq!(store.progress(), before);
    }

    #[tokio::test]
    async fn failed_write_keeps_optimistic_state_and_emits_one_error() {
        let identity = AnonymousIdentity::restore(UserId::new("test-user"));
        let store = ProgressStore::new(
            Arc::new(identity),
            Arc::new(FailingRepository {
                fail_load: false,
                fail_save: true,
            }),
        );
        store.hydrate().await;
        let (_subscription, events) = collect_events(&store);

        let (course, lesson) = ids("c1", "a");
        let result = store.toggle_and_persist(&course, &lesson).await;

        assert!(matches!(result, Err(ProgressStoreError::WriteFailed(_))));
        // Optimistic state retained.
        assert!(store.progress().is_completed(&course, &lesson));

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 2, "one commit, one error: {events:?}");
        assert!(matches!(events[0], ProgressEvent::Changed(_)));
        assert!(matches!(events[1], ProgressEvent::WriteFailed { .. }));
    }

    #[tokio::test]
    async fn toggle_without_identity_is_rejected() {
        let store = ProgressStore::new(
            Arc::new(SignedOutIdentity),
            Arc::new(InMemoryRepository::new()),
        );
        store.hydrate().await;

        let (course, lesson) = ids("c1", "a");
        let result = store.toggle_lesson(&course, &lesson);
        assert!(matches!(
            result,
            Err(ProgressStoreError::IdentityUnavailable)
        ));
        assert!(store.progress().is_empty());
    }

    #[tokio::test]
    async fn unsubscribe_stops_notifications_and_is_idempotent() {
        let (store, _) = store_with(InMemoryRepository::new());
        store.hydrate().await;
        let (subscription, events) = collect_events(&store);

        let (course, lesson) = ids("c1", "a");
        store.toggle_lesson(&course, &lesson).unwrap();
        assert_eq!(events.lock().unwrap().len(), 1);

        subscription.unsubscribe();
        subscription.unsubscribe(); // second call is a no-op

        store.toggle_lesson(&course, &lesson).unwrap();
        assert_eq!(events.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn each_subscriber_is_notified_once_per_commit() {
        let (store, _) = store_with(InMemoryRepository::new());
        store.hydrate().await;
        let (_first, first_events) = collect_events(&store);
        let (_second, second_events) = collect_events(&store);

        let (course, lesson) = ids("c1", "a");
        store.toggle_lesson(&course, &lesson).unwrap();

        assert_eq!(first_events.lock().unwrap().len(), 1);
        assert_eq!(second_events.lock().unwrap().len(), 1);
    }
}
