//! Mounting theme consumers
//!
//! A consumer is anything that renders a view from the theme it reads out of
//! a [`ThemeScope`]. Mounting renders it once and subscribes it to the store,
//! so every later mode change re-renders it before the write returns.
//! Dropping (or [`Mounted::unmount`]ing) the handle ends the subscription.
//!
//! Renders of one mounted consumer are serialized and read the store while
//! holding the view lock, so a slow render can never overwrite the view of a
//! later one.

use app_state::{Subscription, ThemeError, ThemeScope, WeakThemeStore};
use parking_lot::Mutex;
use std::sync::Arc;

/// A screen or piece of chrome whose look depends on the theme
pub trait ThemeConsumer: Send + Sync + 'static {
    /// Rendered output
    type View: Clone + Send + 'static;

    /// Name used when reporting a missing provider
    const NAME: &'static str;

    /// Render from the theme currently in `scope`
    ///
    /// Implementations read the mode at render time and never cache it.
    fn render(&self, scope: &ThemeScope) -> Result<Self::View, ThemeError>;
}

#[derive(Debug)]
struct Frame<V> {
    view: V,
    renders: u64,
}

/// A consumer subscribed to a theme store
pub struct Mounted<C: ThemeConsumer> {
    consumer: Arc<C>,
    store: WeakThemeStore,
    frame: Arc<Mutex<Frame<C::View>>>,
    subscription: Subscription,
}

impl<C: ThemeConsumer> Mounted<C> {
    /// Render `consumer` in `scope` and subscribe it to the scope's store
    pub fn mount(consumer: C, scope: &ThemeScope) -> Result<Self, ThemeError> {
        let store = scope.store(C::NAME)?;
        let consumer = Arc::new(consumer);
        let view = consumer.render(scope)?;
        let frame = Arc::new(Mutex::new(Frame { view, renders: 1 }));
        let weak = store.downgrade();

        let subscription = {
            let consumer = consumer.clone();
            let frame = frame.clone();
            let weak = weak.clone();
            store.subscribe(move |mode| {
                let Some(store) = weak.upgrade() else {
                    return;
                };
                let mut frame = frame.lock();
                match consumer.render(&ThemeScope::new(store)) {
                    Ok(view) => {
                        frame.view = view;
                        frame.renders += 1;
                        tracing::trace!(consumer = C::NAME, %mode, renders = frame.renders, "Re-rendered");
                    }
                    Err(err) => tracing::error!(consumer = C::NAME, %err, "Re-render failed"),
                }
            })
        };
        tracing::debug!(consumer = C::NAME, "Mounted theme consumer");

        Ok(Mounted {
            consumer,
            store: weak,
            frame,
            subscription,
        })
    }

    /// Latest rendered view
    pub fn view(&self) -> C::View {
        self.frame.lock().view.clone()
    }

    /// How many times the consumer has rendered, including the first
    pub fn render_count(&self) -> u64 {
        self.frame.lock().renders
    }

    /// The mounted consumer
    pub fn consumer(&self) -> &C {
        &self.consumer
    }

    /// Scope for the store this consumer is mounted on
    ///
    /// Empty if the store has since been dropped.
    pub fn scope(&self) -> ThemeScope {
        self.store
            .upgrade()
            .map(ThemeScope::new)
            .unwrap_or_else(ThemeScope::empty)
    }

    /// Re-render now, for changes that do not come from the theme
    pub fn refresh(&self) -> Result<(), ThemeError> {
        let mut frame = self.frame.lock();
        let view = self.consumer.render(&self.scope())?;
        frame.view = view;
        frame.renders += 1;
        Ok(())
    }

    /// Check if the consumer still receives theme changes
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_active()
    }

    /// Stop receiving theme changes
    pub fn unmount(self) {
        tracing::debug!(consumer = C::NAME, "Unmounted theme consumer");
    }
}

impl<C: ThemeConsumer> std::fmt::Debug for Mounted<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mounted")
            .field("consumer", &C::NAME)
            .field("renders", &self.render_count())
            .finish()
    }
}
