/// Refusal to queue a transfer, carrying the controller's status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SubmitError(pub i32);

/// Errors surfaced by [`Bridge::execute`](crate::Bridge::execute).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BridgeError {
    /// No peripheral attached; nothing was submitted and nothing waits.
    NotAttached,
    /// The link refused to queue the transfer.
    Rejected(i32),
    /// The transfer completed with a nonzero controller status.
    Transport(i32),
}

impl core::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "transfer refused by link (status {})", self.0)
    }
}

impl core::fmt::Display for BridgeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BridgeError::NotAttached => {
                write!(f, "no peripheral attached")
            }
            BridgeError::Rejected(code) => {
                write!(f, "transfer not queued (status {})", code)
            }
            BridgeError::Transport(code) => {
                write!(f, "transfer failed (status {})", code)
            }
        }
    }
}
