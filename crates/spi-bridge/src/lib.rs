#![no_std]
//! Synchronous transactions over an asynchronous serial bus.
//!
//! The hosting bus moves data with a submit-and-complete primitive: a
//! transfer is queued without blocking and finishes later, on a completion
//! context the submitter does not control. This crate turns that into a
//! request/response call a command dispatcher can simply await, while the
//! peripheral behind it may come and go at any time.
//!
//! Three pieces cooperate:
//!
//! - [`SpiLink`]: the bus-specific submit primitive, implemented by the
//!   embedder. Completion is reported through a one-shot [`TransferSignal`].
//! - [`LinkCell`]: owns the attached link. Attach and detach may race
//!   submission from an interrupt-class context, so the cell is guarded by
//!   the cheapest lock available and never held across a wait.
//! - [`Bridge`]: submits under the cell's guard, releases it, then suspends
//!   on the completion signal until the outcome arrives.
//!
//! [`BusProvider`] is the interface to whatever discovers the bus master
//! and registers the peripheral with it; the bridge itself only ever sees
//! an already-attached link.

mod bridge;
mod cell;
mod error;
mod link;
mod provider;

pub use bridge::Bridge;
pub use cell::LinkCell;
pub use error::{BridgeError, SubmitError};
pub use link::{SpiLink, TransferOutcome, TransferRequest, TransferSignal};
pub use provider::{BusProvider, PortConfig};
