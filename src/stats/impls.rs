//! Implementation blocks for statistics types.

pub mod stats_atomics;
