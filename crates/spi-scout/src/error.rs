use core::fmt;

use spi_bridge::BridgeError;

use crate::CMD_MAX_LEN;

/// Everything that can go wrong with a single command. All variants are
/// local to the request that hit them; none leave the lifecycle or the
/// buffer set in a bad state, and none are fatal to the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fault {
    /// No peripheral attached; the transaction was not attempted.
    /// Expected during hot-unplug cycles, retry after replug.
    NotAttached,
    /// The bus refused or failed the transfer; carries the controller's
    /// status code.
    Transport(i32),
    /// Fewer bytes moved than requested. Advisory: it is logged and the
    /// caller still receives its count, never this fault.
    ShortTransfer { moved: usize, requested: usize },
    /// Caller payload exceeds the channel maximum. Rejected before any
    /// shared state is touched.
    OversizedInput { len: usize },
    /// Caller payload could not be fully read; no partial command was
    /// translated.
    CopyFault,
    /// Lazy buffer allocation failed. Whatever did allocate stays for a
    /// later retry.
    OutOfMemory,
    /// A blocking wait was cancelled externally; try again.
    Interrupted,
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::NotAttached => {
                write!(f, "no peripheral attached")
            }
            Fault::Transport(code) => {
                write!(f, "transfer failed (status {})", code)
            }
            Fault::ShortTransfer { moved, requested } => {
                write!(f, "short transfer: moved {} of {} bytes", moved, requested)
            }
            Fault::OversizedInput { len } => {
                write!(f, "message too large: {} bytes (limit {})", len, CMD_MAX_LEN)
            }
            Fault::CopyFault => {
                write!(f, "could not read caller payload")
            }
            Fault::OutOfMemory => {
                write!(f, "buffer allocation failed")
            }
            Fault::Interrupted => {
                write!(f, "wait interrupted, try again")
            }
        }
    }
}

impl From<BridgeError> for Fault {
    fn from(e: BridgeError) -> Self {
        match e {
            BridgeError::NotAttached => Fault::NotAttached,
            // Submission refusal and completion failure share the
            // controller's code space.
            BridgeError::Rejected(code) | BridgeError::Transport(code) => {
                Fault::Transport(code)
            }
        }
    }
}
