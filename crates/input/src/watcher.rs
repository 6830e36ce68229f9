//! Interrupt watcher - one keystroke, one shutdown signal.
//!
//! Reading the keyboard blocks, so the watcher runs on tokio's blocking pool
//! and reports back through a `oneshot`. A oneshot can fire at most once,
//! which is exactly the contract downstream relies on.

use std::time::Duration;

use crossterm::event;
use thiserror::Error;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::map::is_interrupt;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("keyboard input unavailable: {0}")]
    Keyboard(#[from] std::io::Error),
}

/// Blocking source of keystrokes.
pub trait KeySource: Send + 'static {
    /// Block until one key has been pressed.
    fn wait_for_key(&mut self) -> Result<(), InputError>;

    /// Check, without blocking, that keys can be read at all.
    fn check_ready(&mut self) -> Result<(), InputError> {
        Ok(())
    }
}

/// Reads key events from the controlling terminal.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn wait_for_key(&mut self) -> Result<(), InputError> {
        loop {
            let ev = event::read()?;
            if is_interrupt(&ev) {
                return Ok(());
            }
            debug!(?ev, "ignoring non-key event");
        }
    }

    fn check_ready(&mut self) -> Result<(), InputError> {
        // Opens the event source; a pending event is left in the queue.
        event::poll(Duration::ZERO)?;
        Ok(())
    }
}

/// Check that `keys` can be read, then start watching them.
///
/// A keyboard that cannot be read fails here, synchronously, so the caller
/// can abort before anything is drawn.
pub fn start_watcher<K: KeySource>(
    mut keys: K,
) -> Result<(JoinHandle<Result<(), InputError>>, oneshot::Receiver<()>), InputError> {
    keys.check_ready()?;
    Ok(spawn_watcher(keys))
}

/// Start watching `keys`.
///
/// The receiver resolves with `Ok(())` after the first keystroke. If the key
/// source fails, the sender is dropped instead, so the receiver resolves with
/// an error and the join handle carries the cause.
pub fn spawn_watcher<K: KeySource>(
    mut keys: K,
) -> (JoinHandle<Result<(), InputError>>, oneshot::Receiver<()>) {
    let (tx, rx) = oneshot::channel();
    let handle = tokio::task::spawn_blocking(move || {
        keys.wait_for_key()?;
        info!("key pressed, signalling shutdown");
        // The scheduler may already be gone; nothing left to stop then.
        let _ = tx.send(());
        Ok(())
    });
    (handle, rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Immediate;

    impl KeySource for Immediate {
        fn wait_for_key(&mut self) -> Result<(), InputError> {
            Ok(())
        }
    }

    struct Broken;

    impl KeySource for Broken {
        fn wait_for_key(&mut self) -> Result<(), InputError> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no tty").into())
        }
    }

    struct NoKeyboard {
        reads: Arc<AtomicUsize>,
    }

    impl KeySource for NoKeyboard {
        fn wait_for_key(&mut self) -> Result<(), InputError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn check_ready(&mut self) -> Result<(), InputError> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no tty").into())
        }
    }

    #[tokio::test]
    async fn test_unreadable_keyboard_never_starts_reading() {
        let reads = Arc::new(AtomicUsize::new(0));
        let err = start_watcher(NoKeyboard {
            reads: reads.clone(),
        })
        .unwrap_err();
        assert!(err.to_string().contains("no tty"));

        tokio::task::yield_now().await;
        assert_eq!(reads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_start_watcher_with_working_keyboard() {
        let (handle, rx) = start_watcher(Immediate).unwrap();
        assert!(rx.await.is_ok());
        assert!(handle.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_keypress_fires_signal_once() {
        let (handle, rx) = spawn_watcher(Immediate);
        assert!(rx.await.is_ok());
        assert!(handle.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_broken_keyboard_drops_signal_and_reports_error() {
        let (handle, rx) = spawn_watcher(Broken);
        assert!(rx.await.is_err());
        let err = handle.await.unwrap().unwrap_err();
        assert!(err.to_string().contains("no tty"));
    }
}
