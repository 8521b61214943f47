use mcp23s17::{FRAME_LEN, REPLY_LEN, REPLY_OFFSET};
use spi_scout::Command;

const KNOWN: &[(&[u8], Command)] = &[
    (b"read-config", Command::ReadConfig),
    (b"set-config-out", Command::SetConfigOut),
    (b"set-config-in", Command::SetConfigIn),
    (b"read-io", Command::ReadIo),
    (b"write-io-on", Command::WriteIoOn),
    (b"write-io-off", Command::WriteIoOff),
];

#[test]
fn every_known_command_parses() {
    for (text, expected) in KNOWN {
        assert_eq!(Command::parse(text), *expected, "{:?}", expected);
    }
}

#[test]
fn trailing_bytes_do_not_change_the_match() {
    assert_eq!(Command::parse(b"read-io\n"), Command::ReadIo);
    assert_eq!(Command::parse(b"write-io-on junk"), Command::WriteIoOn);
}

#[test]
fn unrecognized_text_is_unknown_not_an_error() {
    assert_eq!(Command::parse(b"bogus-command"), Command::Unknown);
    assert_eq!(Command::parse(b""), Command::Unknown);
    assert_eq!(Command::parse(b"READ-IO"), Command::Unknown);
    assert_eq!(Command::parse(b"read"), Command::Unknown);
    assert!(Command::Unknown.plan().is_none());
}

#[test]
fn read_bit_is_set_exactly_on_read_commands() {
    for (_, command) in KNOWN {
        let plan = command.plan().unwrap();
        let is_read =
            matches!(command, Command::ReadConfig | Command::ReadIo);
        assert_eq!(plan.frame[0] & 0x01 != 0, is_read, "{:?}", command);
    }
}

#[test]
fn frames_are_full_duplex_symmetric() {
    for (_, command) in KNOWN {
        let plan = command.plan().unwrap();
        assert_eq!(plan.frame.len(), FRAME_LEN);
        assert!(plan.reply_len == 0 || plan.reply_len == REPLY_LEN);
        assert!(REPLY_OFFSET + plan.reply_len <= FRAME_LEN);
    }
}

#[test]
fn write_io_on_frame_vector() {
    let plan = Command::WriteIoOn.plan().unwrap();
    assert_eq!(plan.frame, [0x40, 0x12, 0xFF, 0xFF]);
    assert_eq!(plan.reply_len, 0);
}

#[test]
fn read_io_frame_vector() {
    let plan = Command::ReadIo.plan().unwrap();
    assert_eq!(plan.frame, [0x41, 0x12, 0x00, 0x00]);
    assert_eq!(plan.reply_len, REPLY_LEN);
}

#[test]
fn config_frames_target_the_direction_registers() {
    assert_eq!(
        Command::ReadConfig.plan().unwrap().frame,
        [0x41, 0x00, 0x00, 0x00]
    );
    assert_eq!(
        Command::SetConfigOut.plan().unwrap().frame,
        [0x40, 0x00, 0x00, 0x00]
    );
    assert_eq!(
        Command::SetConfigIn.plan().unwrap().frame,
        [0x40, 0x00, 0xFF, 0xFF]
    );
}

#[test]
fn plans_are_stateless_and_repeatable() {
    for (_, command) in KNOWN {
        assert_eq!(command.plan(), command.plan(), "{:?}", command);
    }
}
