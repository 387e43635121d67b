//! Handoff to the peer-replication layer.
//!
//! The transport and its clock-offset reconciliation live elsewhere; this
//! side only fills envelopes from values the replication layer exposes and
//! hands them over without waiting for delivery.

mod emitter;
mod outbox;

pub use emitter::SyncEmitter;
pub use outbox::ChannelReplication;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnvelopeKind {
    DrawPoint,
    ResetCanvas,
}

/// One drawn point (or a canvas reset marker) as stored in the history and
/// carried to the peer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TouchRecord {
    pub x: i16,
    pub y: i16,
    pub timestamp_ms: u32,
    pub color: u16,
    pub is_reset: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyncEnvelope {
    pub kind: EnvelopeKind,
    pub sender_uptime_ms: u32,
    pub sender_offset_ms: i32,
    pub payload: TouchRecord,
}

/// Bookkeeping the replication layer keeps about the peer link. A local
/// canvas reset returns all of it to the pre-sync defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncState {
    /// Offset added to local uptime to land on the shared timeline.
    pub time_offset_ms: i32,
    /// This board has the longer uptime and serves as the time reference.
    pub is_time_reference: bool,
    pub requesting_all_data: bool,
    pub initial_sync_processed: bool,
}

impl SyncState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

pub trait Replication {
    fn time_offset_ms(&self) -> i32;

    fn reset_sync_state(&mut self);

    /// Enqueue-and-return. Delivery, retries and backpressure are the
    /// replication layer's business.
    fn broadcast(&mut self, envelope: SyncEnvelope);
}
