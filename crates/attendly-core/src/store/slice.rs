// ── Generic resource slice ──
//
// One backend resource, one slice: `{data, loading, error}` behind a
// `watch` channel. Every mutation replaces the state subscribers see.
// There is no request de-duplication and no cancellation: a response
// that arrives late simply updates the slice, which is safe because
// slice state is decoupled from any consumer's lifetime.

use tokio::sync::watch;

/// The uniform per-resource state shape.
#[derive(Debug, Clone, Default)]
pub struct SliceState<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<String>,
}

/// A watchable resource slice.
pub struct Slice<T: Clone> {
    tx: watch::Sender<SliceState<T>>,
}

impl<T: Clone + Default> Default for Slice<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone> Slice<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _) = watch::channel(SliceState {
            data: initial,
            loading: false,
            error: None,
        });
        Self { tx }
    }

    /// A request went out: mark loading, clear the previous error.
    pub fn pending(&self) {
        self.tx.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });
    }

    /// The request succeeded: replace the data.
    pub fn fulfill(&self, data: T) {
        self.tx.send_modify(|s| {
            s.loading = false;
            s.data = data;
            s.error = None;
        });
    }

    /// The request failed: record the message, keep the old data.
    pub fn reject(&self, message: String) {
        self.tx.send_modify(|s| {
            s.loading = false;
            s.error = Some(message);
        });
    }

    /// Apply an in-place mutation (local list edits after a write).
    pub fn mutate(&self, f: impl FnOnce(&mut SliceState<T>)) {
        self.tx.send_modify(f);
    }

    /// Current state (cheap clone of the slice contents).
    pub fn current(&self) -> SliceState<T> {
        self.tx.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<SliceState<T>> {
        self.tx.subscribe()
    }
}
