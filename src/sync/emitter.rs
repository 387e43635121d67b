use super::{EnvelopeKind, Replication, SyncEnvelope, TouchRecord};
use crate::dispatch::DrawAction;

/// Builds outbound envelopes. Offsets are copied from the replication layer
/// as-is; nothing here interprets or adjusts them.
#[derive(Clone, Copy, Debug, Default)]
pub struct SyncEmitter;

impl SyncEmitter {
    pub fn draw_envelope<P: Replication + ?Sized>(
        replication: &P,
        action: &DrawAction,
        timestamp_ms: u32,
    ) -> SyncEnvelope {
        SyncEnvelope {
            kind: EnvelopeKind::DrawPoint,
            sender_uptime_ms: timestamp_ms,
            sender_offset_ms: replication.time_offset_ms(),
            payload: action.record(timestamp_ms),
        }
    }

    pub fn reset_envelope<P: Replication + ?Sized>(
        replication: &P,
        color: u16,
        timestamp_ms: u32,
    ) -> SyncEnvelope {
        SyncEnvelope {
            kind: EnvelopeKind::ResetCanvas,
            sender_uptime_ms: timestamp_ms,
            sender_offset_ms: replication.time_offset_ms(),
            payload: TouchRecord {
                x: 0,
                y: 0,
                timestamp_ms,
                color,
                is_reset: true,
            },
        }
    }
}
