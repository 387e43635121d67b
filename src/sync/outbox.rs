use embassy_sync::{blocking_mutex::raw::RawMutex, channel::Channel};

use super::{EnvelopeKind, Replication, SyncEnvelope, SyncState};

/// Replication endpoint backed by a bounded channel drained by the radio
/// task. A full channel drops the envelope instead of stalling the touch
/// loop.
pub struct ChannelReplication<'a, M: RawMutex, const N: usize> {
    outbox: &'a Channel<M, SyncEnvelope, N>,
    state: SyncState,
    sent: u32,
    dropped: u32,
}

impl<'a, M: RawMutex, const N: usize> ChannelReplication<'a, M, N> {
    pub fn new(outbox: &'a Channel<M, SyncEnvelope, N>) -> Self {
        Self {
            outbox,
            state: SyncState::default(),
            sent: 0,
            dropped: 0,
        }
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    /// Written by the link-management side when it reconciles clocks.
    pub fn state_mut(&mut self) -> &mut SyncState {
        &mut self.state
    }

    pub fn sent(&self) -> u32 {
        self.sent
    }

    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}

impl<M: RawMutex, const N: usize> Replication for ChannelReplication<'_, M, N> {
    fn time_offset_ms(&self) -> i32 {
        self.state.time_offset_ms
    }

    fn reset_sync_state(&mut self) {
        self.state.reset();
    }

    fn broadcast(&mut self, envelope: SyncEnvelope) {
        match self.outbox.try_send(envelope) {
            Ok(()) => self.sent = self.sent.saturating_add(1),
            Err(_) => {
                self.dropped = self.dropped.saturating_add(1);
                match envelope.kind {
                    EnvelopeKind::ResetCanvas => {
                        log::warn!("sync: outbox full; reset envelope dropped")
                    }
                    EnvelopeKind::DrawPoint => log::warn!(
                        "sync: outbox full; dropped point x={} y={}",
                        envelope.payload.x,
                        envelope.payload.y
                    ),
                }
            }
        }
    }
}
