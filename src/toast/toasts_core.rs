use std::time::Duration;

use super::{Clock, SystemClock, Toast, ToastBuilder, ToastConfig, ToastError, ToastKind};

/// Handle to a toast inside one [`Toasts`] queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

#[derive(Debug, Clone)]
pub(super) struct Entry {
    pub(super) id: ToastId,
    pub(super) toast: Toast,
}

/// Ordered queue of live toasts plus the overlay that draws them.
///
/// Oldest toasts sit nearest the screen corner. Call [`Toasts::show`] once per
/// frame, after everything else has been drawn.
#[derive(Debug)]
pub struct Toasts<C: Clock = SystemClock> {
    pub(super) entries: Vec<Entry>,
    next_id: u64,
    clock: C,
    pub(super) config: ToastConfig,
}

impl Default for Toasts<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl Toasts<SystemClock> {
    /// Create an empty queue on the wall clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock::new())
    }
}

impl<C: Clock> Toasts<C> {
    /// Create an empty queue on a custom clock
    pub fn with_clock(clock: C) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            clock,
            config: ToastConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ToastConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ToastConfig {
        &mut self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Current time on this queue's clock
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Append a pre-built toast
    pub fn insert(&mut self, toast: Toast) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        log::debug!(
            "Inserting toast {id:?} ({:?}, {} ms): {}",
            toast.kind(),
            toast.dismiss_time().as_millis(),
            toast.content()
        );
        self.entries.push(Entry { id, toast });
        id
    }

    /// Stamp the builder with the current time and append it
    pub fn add(&mut self, builder: ToastBuilder) -> ToastId {
        let toast = builder.build(self.clock.now());
        self.insert(toast)
    }

    pub fn basic(&mut self, content: impl Into<String>) -> ToastId {
        self.add(Toast::builder(ToastKind::None).content(content))
    }

    pub fn success(&mut self, content: impl Into<String>) -> ToastId {
        self.add(Toast::builder(ToastKind::Success).content(content))
    }

    pub fn warning(&mut self, content: impl Into<String>) -> ToastId {
        self.add(Toast::builder(ToastKind::Warning).content(content))
    }

    pub fn error(&mut self, content: impl Into<String>) -> ToastId {
        self.add(Toast::builder(ToastKind::Error).content(content))
    }

    pub fn info(&mut self, content: impl Into<String>) -> ToastId {
        self.add(Toast::builder(ToastKind::Info).content(content))
    }

    /// Remove the toast at `index`, counted from the oldest
    ///
    /// # Errors
    ///
    /// [`ToastError::IndexOutOfBounds`] when `index` is past the end of the queue.
    pub fn remove(&mut self, index: usize) -> Result<Toast, ToastError> {
        let len = self.entries.len();
        if index >= len {
            return Err(ToastError::IndexOutOfBounds { index, len });
        }
        Ok(self.entries.remove(index).toast)
    }

    /// Remove a toast by handle, false if it already left the queue
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        match self.entries.iter().position(|entry| entry.id == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Toast> {
        self.entries.get(index).map(|entry| &entry.toast)
    }

    /// Toasts in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (ToastId, &Toast)> {
        self.entries.iter().map(|entry| (entry.id, &entry.toast))
    }

    /// Drop every expired toast, returns how many were removed
    pub fn prune(&mut self) -> usize {
        let now = self.clock.now();
        self.prune_at(now)
    }

    /// Drop every toast expired at `now`, returns how many were removed
    pub fn prune_at(&mut self, now: Duration) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| !entry.toast.is_expired_at(now));
        let removed = before - self.entries.len();
        if removed > 0 {
            log::debug!("Pruned {removed} expired toast(s), {} left", self.entries.len());
        }
        removed
    }
}
