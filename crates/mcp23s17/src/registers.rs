/// Register map with the chip in BANK=0 mode, where the A/B port
/// registers interleave and sequential addressing walks an A register
/// into its B twin. A two-byte write starting at an A register therefore
/// programs both ports.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// I/O direction, port A. 1 = input, 0 = output.
    IODIRA = 0x00,
    /// I/O direction, port B.
    IODIRB = 0x01,
    /// Input polarity, port A.
    IPOLA = 0x02,
    /// Input polarity, port B.
    IPOLB = 0x03,
    /// Pull-up enable, port A.
    GPPUA = 0x0C,
    /// Pull-up enable, port B.
    GPPUB = 0x0D,
    /// Port value, port A. Reads the pins, writes the output latch.
    GPIOA = 0x12,
    /// Port value, port B.
    GPIOB = 0x13,
    /// Output latch, port A.
    OLATA = 0x14,
    /// Output latch, port B.
    OLATB = 0x15,
}
