use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;
use heapless::Vec;

use crate::error::SubmitError;

/// Terminal state of one queued transfer, delivered through the
/// completion signal.
pub struct TransferOutcome<const N: usize> {
    /// Sequence number echoed from the [`TransferRequest`].
    pub seq: u32,
    /// Controller status code. Zero means the transfer completed cleanly.
    pub status: i32,
    /// Bytes actually clocked on the wire.
    pub transferred: usize,
    /// Inbound data, one byte per outbound byte (full-duplex).
    pub rx: Vec<u8, N>,
}

/// One-shot synchronization primitive connecting the completion context to
/// the waiting submitter. Signaled exactly once per queued transfer.
pub type TransferSignal<M, const N: usize> = Signal<M, TransferOutcome<N>>;

/// A full-duplex transfer handed to the link for queueing.
pub struct TransferRequest<'a, M: RawMutex + 'static, const N: usize> {
    /// Tag for matching the outcome to this request. A waiter discards
    /// outcomes carrying a different tag.
    pub seq: u32,
    /// Outbound bytes. Valid only for the duration of the submit call;
    /// the link must copy what it needs before returning.
    pub tx: &'a [u8],
    /// Per-transfer clock override, if any.
    pub speed_hz: Option<u32>,
    /// Where to deliver the outcome.
    pub done: &'static TransferSignal<M, N>,
}

/// The asynchronous transfer primitive of the hosting bus.
///
/// `submit` must not block: it either queues the transfer and returns, or
/// refuses it. Once queued, the outcome is signaled exactly once on `done`,
/// from whatever context the bus completes transfers on. Transfers complete
/// in submission order.
pub trait SpiLink<M: RawMutex, const N: usize> {
    fn submit(&self, req: TransferRequest<'_, M, N>) -> Result<(), SubmitError>;
}
