//! Shared domain — cross-cutting ресурсы
//!
//! - SimClock (monotonic simulation time для cooldowns и despawn deadlines)

pub mod clock;

pub use clock::*;
