use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;
use log::{error, info, warn};
use mcp23s17::{FRAME_LEN, REPLY_LEN, REPLY_OFFSET};
use spi_bridge::{Bridge, LinkCell, PortConfig, SpiLink};

use crate::buffers::BufferSet;
use crate::command::Command;
use crate::error::Fault;
use crate::{CompletionSignal, CMD_MAX_LEN, RX_SENTINEL, XFER_BUF_SZ};

/// Driver configuration.
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Registration-time peripheral configuration, consumed by the bus
    /// provider at bind time.
    pub port: PortConfig,
    /// Clock override; rides each transfer only when it differs from
    /// `port.speed_hz`.
    pub clock_override_hz: u32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        let port = PortConfig::default();
        Self { clock_override_hz: port.speed_hz, port }
    }
}

/// Caller payload to copy into the staging buffer. Abstracting the copy
/// lets the channel wrapper report a failed copy-in without a partial
/// command ever reaching translation.
pub trait CommandSource {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy exactly `self.len()` bytes into `dst`.
    fn copy_to(&self, dst: &mut [u8]) -> Result<(), CopyError>;
}

/// The caller's payload could not be fully read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CopyError;

impl CommandSource for [u8] {
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    fn copy_to(&self, dst: &mut [u8]) -> Result<(), CopyError> {
        dst.copy_from_slice(self);
        Ok(())
    }
}

/// Signal used to interrupt a caller blocked inside the channel.
pub type CancelSignal<M> = Signal<M, ()>;

/// What one accepted command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandOutcome {
    /// Unrecognized text. Accepted and logged; no transfer happened.
    Ignored,
    /// Write command clocked out.
    Written { transferred: usize },
    /// Read command completed; `reply` holds the register pair.
    Read { transferred: usize, reply: [u8; REPLY_LEN] },
}

/// The command-channel surface.
///
/// One transaction at a time: callers serialize on the buffer-set lock
/// and nowhere else. Neither the bridge nor the lifecycle cell does any
/// caller-level locking, so this lock is the only place a second
/// concurrent caller ever waits.
pub struct CommandPort<'d, M: RawMutex + 'static, L> {
    bridge: Bridge<'d, M, L, XFER_BUF_SZ>,
    buffers: Mutex<M, BufferSet>,
    config: DriverConfig,
}

impl<'d, M: RawMutex + 'static, L> CommandPort<'d, M, L>
where
    L: SpiLink<M, XFER_BUF_SZ>,
{
    pub fn new(
        cell: &'d LinkCell<M, L>,
        done: &'static CompletionSignal<M>,
        config: DriverConfig,
    ) -> Self {
        Self {
            bridge: Bridge::new(cell, done),
            buffers: Mutex::new(BufferSet::new()),
            config,
        }
    }

    /// First-open hook: allocate the buffer set up front so commands do
    /// not pay for it. Harmless to call again; a partial set from an
    /// earlier failure is completed rather than rebuilt.
    pub async fn open(&self) -> Result<(), Fault> {
        let mut set = self.buffers.lock().await;
        set.ensure().map(|_| ())
    }

    /// Channel entry point: consume `payload` as one command. On success
    /// the whole payload counts as consumed, including for unrecognized
    /// commands.
    pub async fn write(&self, payload: &[u8]) -> Result<usize, Fault> {
        self.submit_from(payload).await.map(|_| payload.len())
    }

    /// Like [`write`](Self::write), reporting what the command did.
    pub async fn submit(&self, payload: &[u8]) -> Result<CommandOutcome, Fault> {
        self.submit_from(payload).await
    }

    /// Run one command from `source`.
    pub async fn submit_from<S>(&self, source: &S) -> Result<CommandOutcome, Fault>
    where
        S: CommandSource + ?Sized,
    {
        let len = source.len();
        if len > CMD_MAX_LEN {
            let fault = Fault::OversizedInput { len };
            warn!("{}", fault);
            return Err(fault);
        }

        let mut set = self.buffers.lock().await;
        let bufs = set.ensure()?;

        if source.copy_to(&mut bufs.staging[..len]).is_err() {
            warn!("{}", Fault::CopyFault);
            return Err(Fault::CopyFault);
        }

        let command = Command::parse(&bufs.staging[..len]);
        let Some(plan) = command.plan() else {
            let text = core::str::from_utf8(&bufs.staging[..len])
                .unwrap_or("<non-text>");
            info!("ignoring unrecognized command {:?}", text);
            return Ok(CommandOutcome::Ignored);
        };

        bufs.tx.fill(0);
        bufs.rx.fill(RX_SENTINEL);
        bufs.tx[..FRAME_LEN].copy_from_slice(&plan.frame);

        let transferred = self
            .bridge
            .execute(
                &bufs.tx[..FRAME_LEN],
                &mut bufs.rx[..FRAME_LEN],
                self.speed_override(),
            )
            .await
            .map_err(|e| {
                let fault = Fault::from(e);
                error!("{:?} failed: {}", command, fault);
                fault
            })?;

        if transferred != FRAME_LEN {
            let advisory = Fault::ShortTransfer {
                moved: transferred,
                requested: FRAME_LEN,
            };
            warn!("{:?}: {}", command, advisory);
        }

        if plan.reply_len > 0 {
            let mut reply = [0u8; REPLY_LEN];
            reply.copy_from_slice(
                &bufs.rx[REPLY_OFFSET..REPLY_OFFSET + plan.reply_len],
            );
            info!(
                "{:?} reply: {:#04x} {:#04x}",
                command, reply[0], reply[1]
            );
            Ok(CommandOutcome::Read { transferred, reply })
        } else {
            info!("{:?}: clocked {} bytes", command, transferred);
            Ok(CommandOutcome::Written { transferred })
        }
    }

    /// Run one command, bailing out with [`Fault::Interrupted`] if
    /// `cancel` fires while the caller is suspended, whether on the
    /// buffer lock or on transfer completion.
    pub async fn submit_cancellable<S>(
        &self,
        source: &S,
        cancel: &CancelSignal<M>,
    ) -> Result<CommandOutcome, Fault>
    where
        S: CommandSource + ?Sized,
    {
        match select(cancel.wait(), self.submit_from(source)).await {
            Either::First(()) => {
                warn!("{}", Fault::Interrupted);
                Err(Fault::Interrupted)
            }
            Either::Second(result) => result,
        }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    fn speed_override(&self) -> Option<u32> {
        (self.config.clock_override_hz != self.config.port.speed_hz)
            .then_some(self.config.clock_override_hz)
    }
}
