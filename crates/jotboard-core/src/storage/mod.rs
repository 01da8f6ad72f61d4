//! Persistence: document store abstraction and the debounced save bridge.

mod bridge;
mod debounce;
mod memory;

pub use bridge::{LoadOutcome, PersistenceBridge};
pub use debounce::{DebouncedSaver, SAVE_DEBOUNCE};
pub use memory::MemoryStore;

use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Document not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Boxed future for async store operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Opaque key-value document store.
///
/// The canvas engine treats the backing service as load/save of string
/// blobs with last-write-wins semantics; it never interprets what the
/// store does with them.
pub trait DocumentStore: Send + Sync {
    /// Save a document blob.
    fn save(&self, id: &str, content: &str) -> BoxFuture<'_, StorageResult<()>>;

    /// Load a document blob.
    fn load(&self, id: &str) -> BoxFuture<'_, StorageResult<String>>;

    /// Delete a document.
    fn delete(&self, id: &str) -> BoxFuture<'_, StorageResult<()>>;

    /// List all document IDs.
    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>>;

    /// Check if a document exists.
    fn exists(&self, id: &str) -> BoxFuture<'_, StorageResult<bool>>;
}

#[cfg(test)]
pub(crate) fn block_on<F: Future>(f: F) -> F::Output {
    // Minimal blocking executor for tests; the store futures never park.
    use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

    fn dummy_raw_waker() -> RawWaker {
        fn no_op(_: *const ()) {}
        fn clone(_: *const ()) -> RawWaker {
            dummy_raw_waker()
        }
        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, no_op, no_op, no_op);
        RawWaker::new(std::ptr::null(), &VTABLE)
    }

    let waker = unsafe { Waker::from_raw(dummy_raw_waker()) };
    let mut cx = Context::from_waker(&waker);
    let mut f = std::pin::pin!(f);

    loop {
        match f.as_mut().poll(&mut cx) {
            Poll::Ready(result) => return result,
            Poll::Pending => {}
        }
    }
}
