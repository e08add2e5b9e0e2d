//! Transport decorators
//!
//! Each decorator wraps an inner [`Transport`](crate::transport::Transport)
//! and forwards every request to it unchanged.

pub mod timing;

pub use timing::{TimedTransport, TimingStats};
