use std::sync::atomic::{AtomicU64, Ordering};

use peaking_core::pipeline::PeakingConfig;

use crate::config::ServerConfig;

/// Monotonic counter shared across sessions.
#[derive(Debug, Default)]
pub struct SequenceCounter(AtomicU64);

impl SequenceCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the next number. The first call returns 1.
    pub fn advance(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Numbers handed out so far.
    pub fn current(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}

/// State shared by all sessions of one server.
#[derive(Debug)]
pub struct ServerContext {
    pub config: ServerConfig,
    /// Frame numbers, claimed only when a processed frame is handed to the
    /// writer.
    pub frames: SequenceCounter,
    /// Session ids for log correlation.
    pub sessions: SequenceCounter,
}

impl ServerContext {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            frames: SequenceCounter::new(),
            sessions: SequenceCounter::new(),
        }
    }

    pub fn peaking(&self) -> &PeakingConfig {
        &self.config.peaking
    }

    pub fn queue_capacity(&self) -> usize {
        self.config.server.queue_capacity.max(1)
    }
}
