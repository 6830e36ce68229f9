//! Terminal input module.
//!
//! The only input this program reacts to is "some key was pressed". This
//! crate classifies crossterm events and runs the interrupt watcher that
//! turns the first keystroke into a one-shot shutdown signal.

pub mod map;
pub mod watcher;

pub use map::is_interrupt;
pub use watcher::{spawn_watcher, start_watcher, CrosstermKeys, InputError, KeySource};
