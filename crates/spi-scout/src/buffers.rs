use alloc::boxed::Box;
use alloc::vec::Vec;

use log::error;

use crate::error::Fault;
use crate::{CMD_MAX_LEN, XFER_BUF_SZ};

/// The driver's scratch memory: outbound and inbound transfer buffers
/// plus a staging buffer for the raw caller payload.
///
/// Allocation is lazy and fallible. A failed allocation leaves whatever
/// did succeed in place; the next call re-checks each slot individually,
/// so a partial set heals itself once memory is available. The set lives
/// for the driver's whole lifetime and is freed only on drop.
pub struct BufferSet {
    tx: Option<Box<[u8]>>,
    rx: Option<Box<[u8]>>,
    staging: Option<Box<[u8]>>,
}

/// Exclusive views over all three buffers. All exist or none do.
pub struct BufferSlices<'a> {
    pub tx: &'a mut [u8],
    pub rx: &'a mut [u8],
    pub staging: &'a mut [u8],
}

impl BufferSet {
    pub const fn new() -> Self {
        Self { tx: None, rx: None, staging: None }
    }

    /// Hand out the buffers, allocating any that are still missing.
    pub fn ensure(&mut self) -> Result<BufferSlices<'_>, Fault> {
        ensure_slot(&mut self.tx, XFER_BUF_SZ, "outbound")?;
        ensure_slot(&mut self.rx, XFER_BUF_SZ, "inbound")?;
        ensure_slot(&mut self.staging, CMD_MAX_LEN, "staging")?;

        match (&mut self.tx, &mut self.rx, &mut self.staging) {
            (Some(tx), Some(rx), Some(staging)) => Ok(BufferSlices {
                tx: &mut tx[..],
                rx: &mut rx[..],
                staging: &mut staging[..],
            }),
            _ => Err(Fault::OutOfMemory),
        }
    }

    pub fn is_allocated(&self) -> bool {
        self.tx.is_some() && self.rx.is_some() && self.staging.is_some()
    }
}

impl Default for BufferSet {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_slot(
    slot: &mut Option<Box<[u8]>>,
    len: usize,
    name: &str,
) -> Result<(), Fault> {
    if slot.is_some() {
        return Ok(());
    }

    let mut buf = Vec::new();
    if buf.try_reserve_exact(len).is_err() {
        error!("failed to allocate {} buffer ({} bytes)", name, len);
        return Err(Fault::OutOfMemory);
    }
    buf.resize(len, 0);
    *slot = Some(buf.into_boxed_slice());
    Ok(())
}
