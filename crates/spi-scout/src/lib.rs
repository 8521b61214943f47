#![no_std]
//! Command channel for an MCP23S17-class port expander on an
//! asynchronous SPI bus.
//!
//! A caller writes a short textual command into the channel; the driver
//! translates it into the chip's 4-byte register frame, runs it through
//! the [`spi_bridge`] transaction bridge, and reports the outcome. The
//! peripheral may attach and detach at any time; commands issued while
//! nothing is attached fail cleanly and the channel stays usable.
//!
//! Recognized commands: `read-config`, `set-config-out`, `set-config-in`,
//! `read-io`, `write-io-on`, `write-io-off`. Anything else is accepted,
//! logged, and performs no transfer.

extern crate alloc;

mod bind;
mod buffers;
mod command;
mod error;
mod port;

pub use bind::{bind, unbind, BindError};
pub use buffers::{BufferSet, BufferSlices};
pub use command::{Command, FramePlan};
pub use error::Fault;
pub use port::{
    CancelSignal, CommandOutcome, CommandPort, CommandSource, CopyError,
    DriverConfig,
};

/// Transfer buffer capacity in bytes.
pub const XFER_BUF_SZ: usize = 128;

/// Maximum accepted command payload in bytes.
pub const CMD_MAX_LEN: usize = 32;

/// Fill pattern for the inbound buffer ahead of each transfer. A
/// transaction that never moved data leaves this behind, so it cannot be
/// mistaken for a legitimate all-zero read.
pub const RX_SENTINEL: u8 = 0xA5;

/// Completion signal sized for this driver's transfer buffers.
pub type CompletionSignal<M> = spi_bridge::TransferSignal<M, XFER_BUF_SZ>;
