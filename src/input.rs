//! src/input.rs
//!
//! Sample sources feeding the main loop.
//!
//! Each source runs on its own reader thread and hands parsed readings to
//! the loop over a channel. The graph itself is only ever touched by the
//! thread that drains the channel.

pub mod parse;
pub mod source;

pub use parse::parse_sample;
pub use source::{InputFeed, Poll, SourceKind, Tick};
