use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use spi_bridge::LinkCell;

#[test]
fn starts_detached() {
    let cell: LinkCell<NoopRawMutex, u32> = LinkCell::new();
    assert!(!cell.is_attached());
    assert_eq!(cell.with_link(|l| *l), None);
}

#[test]
fn attach_makes_link_visible() {
    let cell: LinkCell<NoopRawMutex, u32> = LinkCell::new();
    assert_eq!(cell.attach(42), None);
    assert!(cell.is_attached());
    assert_eq!(cell.with_link(|l| *l), Some(42));
}

#[test]
fn detach_returns_link_and_empties_cell() {
    let cell: LinkCell<NoopRawMutex, u32> = LinkCell::new();
    cell.attach(42);
    assert_eq!(cell.detach(), Some(42));
    assert!(!cell.is_attached());
}

#[test]
fn detach_while_detached_is_a_no_op() {
    let cell: LinkCell<NoopRawMutex, u32> = LinkCell::new();
    assert_eq!(cell.detach(), None);
    assert_eq!(cell.detach(), None);
}

#[test]
fn attach_while_attached_overwrites_and_returns_displaced() {
    let cell: LinkCell<NoopRawMutex, u32> = LinkCell::new();
    cell.attach(1);
    assert_eq!(cell.attach(2), Some(1));
    assert_eq!(cell.with_link(|l| *l), Some(2));
}

#[test]
fn with_link_borrow_does_not_consume() {
    let cell: LinkCell<NoopRawMutex, u32> = LinkCell::new();
    cell.attach(7);
    assert_eq!(cell.with_link(|l| l + 1), Some(8));
    assert_eq!(cell.with_link(|l| l + 2), Some(9));
}
