/// Peripheral configuration handed to the bus master once, at
/// registration time. Per-transfer behavior never changes it; a transfer
/// may only override the clock speed for its own duration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PortConfig {
    /// Bus number to look up on the host.
    pub bus: u8,
    /// Chip-select line on that bus.
    pub chip_select: u8,
    /// Default clock speed in Hz.
    pub speed_hz: u32,
    /// Signaling mode (0 to 3).
    pub mode: u8,
    /// Word size in bits.
    pub bits_per_word: u8,
}

impl Default for PortConfig {
    fn default() -> Self {
        Self {
            bus: 1,
            chip_select: 0,
            speed_hz: 100_000,
            mode: 0,
            bits_per_word: 8,
        }
    }
}

/// Access to the host environment's bus-master discovery and peripheral
/// registration. Implemented by the embedder; the core only drives it
/// during attach and release.
pub trait BusProvider {
    /// Handle to a discovered bus master.
    type Master;
    /// The peripheral link produced by a successful registration.
    type Link;
    /// Failure reported by allocation or registration.
    type Error: core::fmt::Debug;

    /// Look up the master controller for `bus`, if one is loaded.
    fn find_bus(&mut self, bus: u8) -> Option<Self::Master>;

    /// Allocate a peripheral slot on `master`, configured per `config`.
    fn allocate(
        &mut self,
        master: Self::Master,
        config: &PortConfig,
    ) -> Result<Self::Link, Self::Error>;

    /// Register the allocated peripheral with the bus.
    fn register(&mut self, link: &Self::Link) -> Result<(), Self::Error>;

    /// Return a peripheral to the host, after detach or a failed
    /// registration.
    fn release(&mut self, link: Self::Link);
}
