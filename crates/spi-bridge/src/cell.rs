use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use log::warn;

/// Owner of the attached bus link.
///
/// The cell is the single place the link lives between attach and detach.
/// Every read goes through [`with_link`](LinkCell::with_link) under the
/// cell's guard; the guard is a spin-class blocking mutex because detach
/// may race submission from an interrupt-class completion context, and
/// because it sits on every transaction's hot path.
pub struct LinkCell<M: RawMutex, L> {
    inner: Mutex<M, RefCell<Option<L>>>,
}

impl<M: RawMutex, L> LinkCell<M, L> {
    pub fn new() -> Self {
        Self { inner: Mutex::new(RefCell::new(None)) }
    }

    /// Store `link`, making it visible to subsequent transactions.
    ///
    /// Only one peripheral instance exists, so a second attach is a
    /// protocol violation upstream; the cell overwrites anyway and hands
    /// the displaced link back so the embedder can release it.
    pub fn attach(&self, link: L) -> Option<L> {
        let displaced =
            self.inner.lock(|cell| cell.borrow_mut().replace(link));
        if displaced.is_some() {
            warn!("attach while already attached, replacing previous link");
        }
        displaced
    }

    /// Clear the cell, blocking new submissions. Transfers already queued
    /// are not aborted. Returns the link for release, or `None` if the
    /// cell was already empty.
    pub fn detach(&self) -> Option<L> {
        self.inner.lock(|cell| cell.borrow_mut().take())
    }

    /// The only read path. Runs `f` on the link under the guard, or
    /// observes absence. The reference is valid only inside `f`; it must
    /// be used for nothing beyond issuing the submit call, since a detach
    /// can invalidate the link any time after `f` returns.
    pub fn with_link<T>(&self, f: impl FnOnce(&L) -> T) -> Option<T> {
        self.inner.lock(|cell| cell.borrow().as_ref().map(f))
    }

    pub fn is_attached(&self) -> bool {
        self.inner.lock(|cell| cell.borrow().is_some())
    }
}

impl<M: RawMutex, L> Default for LinkCell<M, L> {
    fn default() -> Self {
        Self::new()
    }
}
