use core::fmt;

use embassy_sync::blocking_mutex::raw::RawMutex;
use log::{error, info};
use spi_bridge::{BusProvider, LinkCell, PortConfig};

/// Why the peripheral could not be brought onto the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindError<E> {
    /// No master controller answers for this bus number.
    NoSuchBus(u8),
    /// The master refused to allocate a peripheral slot.
    Allocate(E),
    /// Registration failed; the allocated slot was released.
    Register(E),
}

impl<E: fmt::Debug> fmt::Display for BindError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::NoSuchBus(bus) => {
                write!(f, "bus {} not found; is the controller driver loaded?", bus)
            }
            BindError::Allocate(e) => {
                write!(f, "peripheral allocation failed: {:?}", e)
            }
            BindError::Register(e) => {
                write!(f, "peripheral registration failed: {:?}", e)
            }
        }
    }
}

/// Walk the provider through discovery, allocation, and registration,
/// then attach the resulting link. A link displaced by a re-bind goes
/// straight back to the provider.
pub fn bind<M, P>(
    provider: &mut P,
    config: &PortConfig,
    cell: &LinkCell<M, P::Link>,
) -> Result<(), BindError<P::Error>>
where
    M: RawMutex,
    P: BusProvider,
{
    let Some(master) = provider.find_bus(config.bus) else {
        let err = BindError::NoSuchBus(config.bus);
        error!("{}", err);
        return Err(err);
    };

    let link = match provider.allocate(master, config) {
        Ok(link) => link,
        Err(e) => {
            error!("peripheral allocation failed: {:?}", e);
            return Err(BindError::Allocate(e));
        }
    };

    if let Err(e) = provider.register(&link) {
        provider.release(link);
        error!("peripheral registration failed: {:?}", e);
        return Err(BindError::Register(e));
    }

    if let Some(previous) = cell.attach(link) {
        provider.release(previous);
    }

    info!(
        "peripheral attached on bus {} cs {} at {} Hz",
        config.bus, config.chip_select, config.speed_hz
    );
    Ok(())
}

/// Detach the current link, if any, and hand it back to the provider.
pub fn unbind<M, P>(provider: &mut P, cell: &LinkCell<M, P::Link>)
where
    M: RawMutex,
    P: BusProvider,
{
    if let Some(link) = cell.detach() {
        provider.release(link);
        info!("peripheral detached");
    }
}
