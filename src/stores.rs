//! Observable UI state.
//!
//! `AppState` is created once by the application and handed to whatever
//! needs it; clones share the same cells.

use nexis_api::CustomError;
use std::sync::Arc;
use tokio::sync::watch;

/// Observable mutable cell.
///
/// Readers either poll with [`Store::get`] or [`Store::subscribe`] and await
/// changes.
#[derive(Debug, Clone)]
pub struct Store<T> {
    tx: Arc<watch::Sender<T>>,
}

impl<T> Store<T> {
    pub fn new(value: T) -> Self {
        let (tx, _) = watch::channel(value);
        Self { tx: Arc::new(tx) }
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.tx.borrow().clone()
    }

    /// Replaces the value and notifies subscribers
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Mutates the value in place and notifies subscribers once
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadingState {
    pub loading: bool,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub errors: Store<Vec<CustomError>>,
    pub loading: Store<LoadingState>,
    pub dark_mode: Store<bool>,
    pub logged_in: Store<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the loading flag; the message is dropped when loading stops.
    pub fn set_loading(&self, loading: bool, message: Option<&str>) {
        self.loading.set(LoadingState {
            loading,
            message: message.filter(|_| loading).map(str::to_string),
        });
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get().loading
    }

    /// Appends errors, renumbering them after the ones already shown
    pub fn push_errors(&self, errors: impl IntoIterator<Item = CustomError>) {
        self.errors.update(|list| {
            list.extend(errors);
            renumber(list);
        });
    }

    pub fn clear_errors(&self) {
        self.errors.set(Vec::new());
    }

    pub fn toggle_dark_mode(&self) -> bool {
        let mut enabled = false;
        self.dark_mode.update(|dark| {
            *dark = !*dark;
            enabled = *dark;
        });
        enabled
    }
}

fn renumber(list: &mut [CustomError]) {
    for (err, id) in list.iter_mut().zip(0u32..) {
        err.id = Some(id);
    }
}
