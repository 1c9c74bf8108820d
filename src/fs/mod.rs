//! Filesystem helpers for portray.

mod atomic;

pub use atomic::atomic_write;
