//! Progress notification.
//!
//! A [`Progress`] sink receives `(processed, total)` byte counts at block
//! granularity. It is purely observational: nothing it does can change the
//! outcome of a run.

use std::fmt;

/// Pipeline stage being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Counting symbol frequencies.
    Scanning,
    /// Writing the packed bitstream.
    Encoding,
    /// Reading the packed bitstream.
    Decoding,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Scanning => "Counting frequencies",
            Phase::Encoding => "Encoding",
            Phase::Decoding => "Decoding",
        };
        f.write_str(name)
    }
}

/// A sink for progress notifications.
pub trait Progress {
    /// A new phase starts; `total` is the expected byte count (0 if unknown).
    fn begin(&mut self, _phase: Phase, _total: u64) {}

    /// `processed` of `total` bytes are done.
    fn update(&mut self, processed: u64, total: u64);

    /// The current phase completed.
    fn finish(&mut self) {}
}

/// A progress sink that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn update(&mut self, _processed: u64, _total: u64) {}
}

impl<F: FnMut(u64, u64)> Progress for F {
    fn update(&mut self, processed: u64, total: u64) {
        self(processed, total)
    }
}
