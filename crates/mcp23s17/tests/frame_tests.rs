use mcp23s17::{
    control_byte, read_frame, write_frame, Register, FRAME_LEN, REPLY_LEN,
    REPLY_OFFSET,
};

#[test]
fn control_byte_carries_shifted_address_and_read_bit() {
    assert_eq!(control_byte(false), 0x40);
    assert_eq!(control_byte(true), 0x41);
}

#[test]
fn read_frame_targets_register_with_zero_padding() {
    assert_eq!(read_frame(Register::GPIOA), [0x41, 0x12, 0x00, 0x00]);
    assert_eq!(read_frame(Register::IODIRA), [0x41, 0x00, 0x00, 0x00]);
}

#[test]
fn write_frame_splits_value_across_the_register_pair() {
    assert_eq!(write_frame(Register::GPIOA, 0xFFFF), [0x40, 0x12, 0xFF, 0xFF]);
    assert_eq!(write_frame(Register::GPIOA, 0x0000), [0x40, 0x12, 0x00, 0x00]);
    assert_eq!(write_frame(Register::IODIRA, 0xA55A), [0x40, 0x00, 0xA5, 0x5A]);
}

#[test]
fn reply_window_sits_past_the_address_phase() {
    assert_eq!(REPLY_OFFSET, 2);
    assert_eq!(REPLY_LEN, 2);
    assert_eq!(REPLY_OFFSET + REPLY_LEN, FRAME_LEN);
}
