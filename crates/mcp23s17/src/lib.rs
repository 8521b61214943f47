#![no_std]
//! Wire-level definitions for the MCP23S17 16-bit SPI port expander.
//!
//! Only what the command channel needs: the BANK=0 register map and the
//! 4-byte command frames. The chip is half-duplex over a full-duplex
//! transport: a read must clock the whole address/register phase before
//! the chip drives data, so the first two inbound bytes of a read frame
//! are don't-care and the reply lives at [`REPLY_OFFSET`].

pub mod frame;
pub mod registers;

pub use frame::{
    control_byte, read_frame, write_frame, DEVICE_ADDRESS, FRAME_LEN,
    REPLY_LEN, REPLY_OFFSET,
};
pub use registers::Register;
