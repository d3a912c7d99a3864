//! Theme mode state
//!
//! A [`ThemeStore`] is the single source of truth for whether the shell is
//! drawn light or dark. Every screen reads the mode from the same store, and
//! every write fans out synchronously to the store's subscribers before the
//! write returns.
//!
//! # Example
//!
//! ```rust
//! use app_platform::{FixedColorScheme, HostColorScheme};
//! use app_state::theme::{ThemeMode, ThemeStore};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let store = ThemeStore::from_host(&FixedColorScheme(HostColorScheme::Dark));
//! assert_eq!(store.get_mode(), ThemeMode::Dark);
//!
//! let renders = Arc::new(AtomicUsize::new(0));
//! let counter = renders.clone();
//! let _subscription = store.subscribe(move |_mode| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! store.toggle_mode();
//! assert_eq!(store.get_mode(), ThemeMode::Light);
//! assert_eq!(renders.load(Ordering::SeqCst), 1);
//! ```

use app_platform::{ColorSchemeSource, HostColorScheme};
use parking_lot::{Mutex, ReentrantMutex};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use tokio::sync::watch;

// =============================================================================
// Theme Mode
// =============================================================================

/// Display theme of the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl ThemeMode {
    /// Both modes, light first
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Check if this is the dark mode
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// Lowercase name, as used in serialized form
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Initial mode for a host preference. Unknown hosts get light.
    pub fn from_host(scheme: HostColorScheme) -> Self {
        match scheme {
            HostColorScheme::Dark => ThemeMode::Dark,
            HostColorScheme::Light | HostColorScheme::Unknown => ThemeMode::Light,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name a theme mode
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown theme mode: {0}")]
pub struct ParseThemeModeError(pub String);

impl std::str::FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(ParseThemeModeError(s.to_string())),
        }
    }
}

// =============================================================================
// Theme Store
// =============================================================================

type Callback = Arc<dyn Fn(ThemeMode) + Send + Sync>;

struct Subscriber {
    id: u64,
    callback: Callback,
}

struct StoreInner {
    /// Current mode. The watch channel is the value cell itself.
    mode_tx: watch::Sender<ThemeMode>,
    /// Registered callbacks in registration order
    subscribers: Mutex<Vec<Subscriber>>,
    next_id: AtomicU64,
    /// Bumped on every write. A fan-out stops once a nested write has
    /// superseded it.
    generation: AtomicU64,
    /// Serializes writes so a value update and its fan-out are not interleaved
    /// with another thread's. Re-entrant so callbacks may write.
    write_lock: ReentrantMutex<()>,
}

impl StoreInner {
    fn remove(&self, id: u64) -> bool {
        let mut subscribers = self.subscribers.lock();
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);
        before != subscribers.len()
    }
}

/// Shared holder of the current [`ThemeMode`]
///
/// Cloning a store yields another handle to the same value; one store is
/// created per running application and handed to the consumer tree through a
/// [`ThemeScope`](crate::scope::ThemeScope).
///
/// Writes are synchronous: `set_mode` and `toggle_mode` update the value and
/// then call every subscriber, in registration order, before returning.
/// Callbacks run outside the store's internal locks and may read, write,
/// subscribe or unsubscribe. A write made from inside a callback supersedes
/// the fan-out in progress: subscribers not yet called receive only the
/// newer value.
#[derive(Clone)]
pub struct ThemeStore {
    inner: Arc<StoreInner>,
}

impl ThemeStore {
    /// Create a store with an explicit initial mode
    pub fn with_mode(mode: ThemeMode) -> Self {
        let (mode_tx, _) = watch::channel(mode);

        ThemeStore {
            inner: Arc::new(StoreInner {
                mode_tx,
                subscribers: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(1),
                generation: AtomicU64::new(0),
                write_lock: ReentrantMutex::new(()),
            }),
        }
    }

    /// Create a store seeded from the host's color preference
    ///
    /// The source is queried exactly once. An unknown preference yields
    /// [`ThemeMode::Light`]. Later host changes are not tracked.
    pub fn from_host<S: ColorSchemeSource + ?Sized>(source: &S) -> Self {
        let scheme = source.color_scheme();
        let mode = ThemeMode::from_host(scheme);
        if !scheme.is_known() {
            tracing::debug!("Host color scheme unknown, falling back to light");
        }
        tracing::info!(host = %scheme, %mode, "Theme store created");
        Self::with_mode(mode)
    }

    /// Get the current mode
    pub fn get_mode(&self) -> ThemeMode {
        *self.inner.mode_tx.borrow()
    }

    /// Replace the current mode and notify every subscriber
    ///
    /// Subscribers are notified even if the mode did not change.
    pub fn set_mode(&self, mode: ThemeMode) {
        let _guard = self.inner.write_lock.lock();
        let previous = self.inner.mode_tx.send_replace(mode);
        let generation = self.bump_generation();
        tracing::debug!(%previous, %mode, "Theme mode set");
        self.notify(generation);
    }

    /// Flip between light and dark, based on the mode at the time of the call
    pub fn toggle_mode(&self) {
        let _guard = self.inner.write_lock.lock();
        let mut mode = ThemeMode::default();
        self.inner.mode_tx.send_modify(|current| {
            *current = current.toggled();
            mode = *current;
        });
        let generation = self.bump_generation();
        tracing::debug!(%mode, "Theme mode toggled");
        self.notify(generation);
    }

    /// Register a callback to run after every write
    ///
    /// The callback receives the store's mode at the time it is called. The returned
    /// [`Subscription`] unregisters it when dropped.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(ThemeMode) + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.subscribers.lock().push(Subscriber {
            id,
            callback: Arc::new(callback),
        });
        tracing::debug!(subscription = id, "Theme subscriber added");

        Subscription {
            id,
            store: Arc::downgrade(&self.inner),
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.lock().len()
    }

    /// Watch the mode from async code
    ///
    /// The receiver sees every write, including ones that leave the mode
    /// unchanged.
    pub fn watch(&self) -> watch::Receiver<ThemeMode> {
        self.inner.mode_tx.subscribe()
    }

    /// Non-owning handle, for callbacks that need to read the store back
    pub fn downgrade(&self) -> WeakThemeStore {
        WeakThemeStore {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Check whether two handles point at the same store
    pub fn same_store(&self, other: &ThemeStore) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn bump_generation(&self) -> u64 {
        self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn notify(&self, generation: u64) {
        // Snapshot first so callbacks can touch the subscriber list.
        let callbacks: Vec<Callback> = self
            .inner
            .subscribers
            .lock()
            .iter()
            .map(|s| s.callback.clone())
            .collect();

        for callback in callbacks {
            // A callback wrote again; the nested fan-out already reached
            // everyone with the newer value.
            if self.inner.generation.load(Ordering::SeqCst) != generation {
                tracing::trace!(generation, "Theme fan-out superseded");
                return;
            }
            callback(self.get_mode());
        }
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::with_mode(ThemeMode::default())
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("mode", &self.get_mode())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Weak handle to a [`ThemeStore`]
#[derive(Debug, Clone, Default)]
pub struct WeakThemeStore {
    inner: Weak<StoreInner>,
}

impl WeakThemeStore {
    /// Get the store back if it is still alive
    pub fn upgrade(&self) -> Option<ThemeStore> {
        self.inner.upgrade().map(|inner| ThemeStore { inner })
    }
}

/// Registration of a theme callback
///
/// Dropping the subscription unregisters the callback.
#[must_use = "dropping a Subscription unsubscribes immediately"]
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    store: Weak<StoreInner>,
}

impl Subscription {
    /// Identifier, unique within its store
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Check if the callback is still registered
    pub fn is_active(&self) -> bool {
        self.store
            .upgrade()
            .map(|inner| inner.subscribers.lock().iter().any(|s| s.id == self.id))
            .unwrap_or(false)
    }

    /// Unregister the callback now
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            if inner.remove(self.id) {
                tracing::debug!(subscription = self.id, "Theme subscriber removed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_platform::FixedColorScheme;
    use std::sync::atomic::AtomicUsize;

    fn counter() -> (Arc<AtomicUsize>, impl Fn(ThemeMode) + Send + Sync + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let handle = count.clone();
        (count, move |_| {
            handle.fetch_add(1, Ordering::SeqCst);
        })
    }

    // ==========================================================================
    // Theme Mode Tests
    // ==========================================================================

    #[test]
    fn test_theme_mode_toggled() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[test]
    fn test_theme_mode_from_host() {
        assert_eq!(ThemeMode::from_host(HostColorScheme::Dark), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_host(HostColorScheme::Light), ThemeMode::Light);
        assert_eq!(ThemeMode::from_host(HostColorScheme::Unknown), ThemeMode::Light);
    }

    #[test]
    fn test_theme_mode_from_str() {
        assert_eq!("light".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert_eq!("DARK".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);

        let err = "system".parse::<ThemeMode>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown theme mode: system");
    }

    #[test]
    fn test_theme_mode_serialization() {
        let json = serde_json::to_string(&ThemeMode::Dark).unwrap();
        assert_eq!(json, "\"dark\"");

        let mode: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(mode, ThemeMode::Light);
        assert!(serde_json::from_str::<ThemeMode>("\"auto\"").is_err());
    }

    // ==========================================================================
    // Initialization Tests
    // ==========================================================================

    #[test]
    fn test_store_from_dark_host() {
        let store = ThemeStore::from_host(&FixedColorScheme(HostColorScheme::Dark));
        assert_eq!(store.get_mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_store_from_unknown_host_defaults_to_light() {
        let store = ThemeStore::from_host(&FixedColorScheme(HostColorScheme::Unknown));
        assert_eq!(store.get_mode(), ThemeMode::Light);

        let raw = FixedColorScheme(HostColorScheme::from_raw(Some("sepia")));
        assert_eq!(ThemeStore::from_host(&raw).get_mode(), ThemeMode::Light);
    }

    #[test]
    fn test_store_samples_host_once() {
        struct Counting(AtomicUsize);

        impl ColorSchemeSource for Counting {
            fn color_scheme(&self) -> HostColorScheme {
                self.0.fetch_add(1, Ordering::SeqCst);
                HostColorScheme::Dark
            }
        }

        let source = Counting(AtomicUsize::new(0));
        let store = ThemeStore::from_host(&source);
        store.toggle_mode();
        store.set_mode(ThemeMode::Dark);
        let _ = store.get_mode();

        assert_eq!(source.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_store_default_is_light() {
        assert_eq!(ThemeStore::default().get_mode(), ThemeMode::Light);
    }

    // ==========================================================================
    // Write Tests
    // ==========================================================================

    #[test]
    fn test_set_mode() {
        let store = ThemeStore::default();
        store.set_mode(ThemeMode::Dark);
        assert_eq!(store.get_mode(), ThemeMode::Dark);
        store.set_mode(ThemeMode::Light);
        assert_eq!(store.get_mode(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_twice_restores_mode() {
        for mode in ThemeMode::ALL {
            let store = ThemeStore::with_mode(mode);
            store.toggle_mode();
            assert_eq!(store.get_mode(), mode.toggled());
            store.toggle_mode();
            assert_eq!(store.get_mode(), mode);
        }
    }

    #[test]
    fn test_last_write_wins_regardless_of_subscribers() {
        let ops: [Option<ThemeMode>; 6] = [
            Some(ThemeMode::Dark),
            None,
            None,
            Some(ThemeMode::Dark),
            None,
            Some(ThemeMode::Light),
        ];

        for subscriber_count in [0usize, 1, 5] {
            let store = ThemeStore::default();
            let _subs: Vec<Subscription> =
                (0..subscriber_count).map(|_| store.subscribe(|_| {})).collect();

            let mut expected = store.get_mode();
            for op in ops {
                match op {
                    Some(mode) => {
                        store.set_mode(mode);
                        expected = mode;
                    }
                    None => {
                        store.toggle_mode();
                        expected = expected.toggled();
                    }
                }
                assert_eq!(store.get_mode(), expected);
            }
        }
    }

    #[test]
    fn test_set_same_mode_notifies_each_time() {
        let store = ThemeStore::default();
        let (count, callback) = counter();
        let _sub = store.subscribe(callback);

        store.set_mode(ThemeMode::Dark);
        store.set_mode(ThemeMode::Dark);

        assert_eq!(store.get_mode(), ThemeMode::Dark);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    // ==========================================================================
    // Subscription Tests
    // ==========================================================================

    #[test]
    fn test_subscribers_receive_new_mode() {
        let store = ThemeStore::default();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let _sub = store.subscribe(move |mode| sink.lock().push(mode));

        store.toggle_mode();
        store.set_mode(ThemeMode::Light);

        assert_eq!(*seen.lock(), vec![ThemeMode::Dark, ThemeMode::Light]);
    }

    #[test]
    fn test_notified_in_registration_order() {
        let store = ThemeStore::default();
        let order = Arc::new(Mutex::new(Vec::new()));

        let subs: Vec<Subscription> = (0..3)
            .map(|i| {
                let order = order.clone();
                store.subscribe(move |_| order.lock().push(i))
            })
            .collect();

        store.toggle_mode();
        assert_eq!(*order.lock(), vec![0, 1, 2]);
        drop(subs);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let store = ThemeStore::default();
        let (count, callback) = counter();
        let sub = store.subscribe(callback);
        assert_eq!(store.subscriber_count(), 1);
        assert!(sub.is_active());

        drop(sub);
        assert_eq!(store.subscriber_count(), 0);

        store.toggle_mode();
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_explicit_unsubscribe_leaves_others() {
        let store = ThemeStore::default();
        let (first_count, first) = counter();
        let (second_count, second) = counter();
        let first_sub = store.subscribe(first);
        let second_sub = store.subscribe(second);
        assert_ne!(first_sub.id(), second_sub.id());

        first_sub.unsubscribe();
        store.toggle_mode();

        assert_eq!(first_count.load(Ordering::SeqCst), 0);
        assert_eq!(second_count.load(Ordering::SeqCst), 1);
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn test_subscription_outlives_store() {
        let store = ThemeStore::default();
        let sub = store.subscribe(|_| {});
        drop(store);

        assert!(!sub.is_active());
        drop(sub);
    }

    #[test]
    fn test_reentrant_callbacks_do_not_deadlock() {
        let store = ThemeStore::with_mode(ThemeMode::Light);
        let weak = store.downgrade();
        let reads = Arc::new(Mutex::new(Vec::new()));
        let sink = reads.clone();

        // Forces dark whenever light is written, reading the store back.
        let _sub = store.subscribe(move |mode| {
            if let Some(store) = weak.upgrade() {
                sink.lock().push(store.get_mode());
                if mode == ThemeMode::Light {
                    store.set_mode(ThemeMode::Dark);
                }
            }
        });

        store.set_mode(ThemeMode::Light);
        assert_eq!(store.get_mode(), ThemeMode::Dark);
        assert_eq!(*reads.lock(), vec![ThemeMode::Light, ThemeMode::Dark]);
    }

    #[test]
    fn test_nested_write_supersedes_outer_fan_out() {
        let store = ThemeStore::with_mode(ThemeMode::Dark);
        let weak = store.downgrade();

        let _forcer = store.subscribe(move |mode| {
            if mode == ThemeMode::Light {
                if let Some(store) = weak.upgrade() {
                    store.set_mode(ThemeMode::Dark);
                }
            }
        });

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let _recorder = store.subscribe(move |mode| sink.lock().push(mode));

        store.set_mode(ThemeMode::Light);

        assert_eq!(store.get_mode(), ThemeMode::Dark);
        assert_eq!(*seen.lock(), vec![ThemeMode::Dark]);
        assert_eq!(seen.lock().last().copied(), Some(store.get_mode()));
    }

    #[test]
    fn test_subscribe_during_notification() {
        let store = ThemeStore::default();
        let weak = store.downgrade();
        let late = Arc::new(Mutex::new(Vec::<Subscription>::new()));
        let holder = late.clone();

        let _sub = store.subscribe(move |_| {
            if let Some(store) = weak.upgrade() {
                holder.lock().push(store.subscribe(|_| {}));
            }
        });

        store.toggle_mode();
        assert_eq!(store.subscriber_count(), 2);
    }

    #[test]
    fn test_clones_share_state() {
        let store = ThemeStore::default();
        let other = store.clone();
        assert!(store.same_store(&other));
        assert!(!store.same_store(&ThemeStore::default()));

        other.toggle_mode();
        assert_eq!(store.get_mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_weak_store_upgrade() {
        let store = ThemeStore::default();
        let weak = store.downgrade();
        assert!(weak.upgrade().is_some());

        drop(store);
        assert!(weak.upgrade().is_none());
        assert!(WeakThemeStore::default().upgrade().is_none());
    }

    #[test]
    fn test_store_debug() {
        let store = ThemeStore::with_mode(ThemeMode::Dark);
        let debug = format!("{:?}", store);
        assert!(debug.contains("Dark"));
    }

    // ==========================================================================
    // Watch Channel Tests
    // ==========================================================================

    #[tokio::test]
    async fn test_watch_receives_updates() {
        let store = ThemeStore::default();
        let mut rx = store.watch();
        assert_eq!(*rx.borrow(), ThemeMode::Light);

        store.toggle_mode();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), ThemeMode::Dark);

        // Unchanged writes still wake watchers
        store.set_mode(ThemeMode::Dark);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), ThemeMode::Dark);
    }

    #[test]
    fn test_store_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ThemeStore>();
        assert_send_sync::<Subscription>();
    }
}
