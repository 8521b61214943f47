use mcp23s17::{read_frame, write_frame, Register, FRAME_LEN, REPLY_LEN};

/// The channel's command set. `Unknown` is a terminal state of its own,
/// not an error: unrecognized text is accepted and dropped.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Read the I/O direction register pair.
    ReadConfig,
    /// Configure every pin as an output.
    SetConfigOut,
    /// Configure every pin as an input.
    SetConfigIn,
    /// Read the port value register pair.
    ReadIo,
    /// Drive every output high.
    WriteIoOn,
    /// Drive every output low.
    WriteIoOff,
    Unknown,
}

/// Wire plan for one command: the outbound frame and how much of the
/// inbound buffer carries meaningful reply data.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FramePlan {
    pub frame: [u8; FRAME_LEN],
    /// 0 for writes; [`REPLY_LEN`] for reads, located at
    /// [`mcp23s17::REPLY_OFFSET`] of the inbound buffer.
    pub reply_len: usize,
}

const COMMANDS: &[(&[u8], Command)] = &[
    (b"read-config", Command::ReadConfig),
    (b"set-config-out", Command::SetConfigOut),
    (b"set-config-in", Command::SetConfigIn),
    (b"read-io", Command::ReadIo),
    (b"write-io-on", Command::WriteIoOn),
    (b"write-io-off", Command::WriteIoOff),
];

impl Command {
    /// Resolve `text` by exact-prefix match, case sensitive, first match
    /// wins. Trailing bytes (a newline from an interactive writer, say)
    /// are ignored.
    pub fn parse(text: &[u8]) -> Self {
        for (name, command) in COMMANDS {
            if text.starts_with(name) {
                return *command;
            }
        }
        Command::Unknown
    }

    /// The command's wire plan, or `None` when there is nothing to
    /// transmit.
    pub fn plan(&self) -> Option<FramePlan> {
        let plan = match self {
            Command::ReadConfig => FramePlan {
                frame: read_frame(Register::IODIRA),
                reply_len: REPLY_LEN,
            },
            Command::SetConfigOut => FramePlan {
                frame: write_frame(Register::IODIRA, 0x0000),
                reply_len: 0,
            },
            Command::SetConfigIn => FramePlan {
                frame: write_frame(Register::IODIRA, 0xFFFF),
                reply_len: 0,
            },
            Command::ReadIo => FramePlan {
                frame: read_frame(Register::GPIOA),
                reply_len: REPLY_LEN,
            },
            Command::WriteIoOn => FramePlan {
                frame: write_frame(Register::GPIOA, 0xFFFF),
                reply_len: 0,
            },
            Command::WriteIoOff => FramePlan {
                frame: write_frame(Register::GPIOA, 0x0000),
                reply_len: 0,
            },
            Command::Unknown => return None,
        };
        Some(plan)
    }
}
