use embassy_sync::blocking_mutex::raw::RawMutex;
use portable_atomic::{AtomicU32, Ordering};

use crate::cell::LinkCell;
use crate::error::BridgeError;
use crate::link::{SpiLink, TransferRequest, TransferSignal};

/// Turns the link's submit-and-complete primitive into a blocking
/// request/response call.
///
/// `execute` is synchronous from the caller's point of view: it returns
/// once the transfer has reached a terminal state. It does not serialize
/// concurrent callers; the embedder is expected to funnel transactions
/// through one caller at a time (the driver's buffer lock does this).
pub struct Bridge<'d, M: RawMutex + 'static, L, const N: usize> {
    cell: &'d LinkCell<M, L>,
    done: &'static TransferSignal<M, N>,
    seq: AtomicU32,
}

impl<'d, M: RawMutex, L, const N: usize> Bridge<'d, M, L, N>
where
    L: SpiLink<M, N>,
{
    pub fn new(
        cell: &'d LinkCell<M, L>,
        done: &'static TransferSignal<M, N>,
    ) -> Self {
        Self { cell, done, seq: AtomicU32::new(0) }
    }

    /// Run one full-duplex transfer and wait for its outcome.
    ///
    /// `tx` and `rx` are expected to be the same length. On clean
    /// completion the inbound bytes are copied into `rx` and the clocked
    /// byte count is returned. On any error `rx` is left untouched.
    ///
    /// The lifecycle guard is held only across the submit call, never
    /// across the wait: a detach racing an in-flight transfer must always
    /// be able to acquire it.
    pub async fn execute(
        &self,
        tx: &[u8],
        rx: &mut [u8],
        speed_hz: Option<u32>,
    ) -> Result<usize, BridgeError> {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed).wrapping_add(1);

        // A fresh transaction starts with an empty signal. Stale outcomes
        // from an abandoned wait are filtered by tag below, relying on the
        // link completing transfers in submission order.
        self.done.reset();

        let submitted = self.cell.with_link(|link| {
            link.submit(TransferRequest {
                seq,
                tx,
                speed_hz,
                done: self.done,
            })
        });

        match submitted {
            None => return Err(BridgeError::NotAttached),
            Some(Err(e)) => return Err(BridgeError::Rejected(e.0)),
            Some(Ok(())) => {}
        }

        let outcome = loop {
            let outcome = self.done.wait().await;
            if outcome.seq == seq {
                break outcome;
            }
        };

        if outcome.status != 0 {
            return Err(BridgeError::Transport(outcome.status));
        }

        let n = outcome.rx.len().min(rx.len());
        rx[..n].copy_from_slice(&outcome.rx[..n]);
        Ok(outcome.transferred)
    }

    /// Whether a peripheral is currently attached. Advisory only; the
    /// answer can change before the next submission.
    pub fn is_attached(&self) -> bool {
        self.cell.is_attached()
    }
}
