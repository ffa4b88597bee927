//! Reactive handles shared between components.
//!
//! The controllers from `autocaption` are plain structs. [`Shared`] stores
//! one in the reactive owner and pairs it with a [`Trigger`], so views
//! re-render after every mutation and async tasks can mutate it between
//! requests.

use std::cell::RefCell;

use autocaption::{AuthForm, StateCell, VideoFile, WorkflowController};
use leptos::*;
use web_sys::File;

/// Copyable handle to a controller owned by the current reactive scope.
pub struct Shared<T: 'static> {
    value: StoredValue<RefCell<T>>,
    changed: Trigger,
}

impl<T: 'static> Clone for Shared<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Shared<T> {}

impl<T: 'static> Shared<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: store_value(RefCell::new(value)),
            changed: create_trigger(),
        }
    }

    /// Reactive read: the calling view re-runs after the next mutation.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.changed.track();
        self.value.with_value(|cell| f(&cell.borrow()))
    }
}

impl<T: 'static> StateCell<T> for Shared<T> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let out = self.value.with_value(|cell| f(&mut cell.borrow_mut()));
        self.changed.notify();
        out
    }
}

/// The upload/process controller, holding browser file handles.
pub type WorkflowHandle = Shared<WorkflowController<File>>;

/// A login or register form.
pub type AuthHandle = Shared<AuthForm>;

/// Wrap a picked or dropped browser file.
pub fn video_from_file(file: File) -> VideoFile<File> {
    VideoFile::new(file.name(), file.type_(), file.size() as u64, file)
}
