use std::{cell::Cell, rc::Rc};

use log::debug;

use crate::{observable::Observable, transformer::Transformer};

/// One-way synchronizer: seeds `right` with `l2r(left.get())`, then keeps
/// re-deriving it on every change of `left`. Right-hand changes never
/// propagate back.
///
/// The link stays active only while the `Linker` is kept alive; dropping it
/// (or calling [`dispose`](Linker::dispose)) deregisters the left-side
/// callback exactly once.
pub struct Linker {
    cleanup: Option<Box<dyn FnOnce()>>,
}

impl Linker {
    pub fn new<L, R>(
        left: &L,
        right: &R,
        l2r: impl Fn(L::Value) -> R::Value + 'static,
    ) -> Self
    where
        L: Observable,
        R: Observable,
    {
        right.set(l2r(left.get()));

        // Held while the right-side write runs, so an integrator who chains
        // the right side back onto the left does not echo through this link.
        let suppress = Rc::new(Cell::new(false));

        let left_token = left.register({
            let right = right.clone();
            let suppress = Rc::clone(&suppress);
            move |value| {
                if suppress.get() {
                    return;
                }
                suppress.set(true);
                right.set(l2r(value));
                suppress.set(false);
            }
        });

        debug!("Linker linked {left_token:?} -> right.");

        let cleanup: Box<dyn FnOnce()> = {
            let left = left.clone();
            Box::new(move || {
                left.deregister(left_token);
                debug!("Linker unlinked {left_token:?}.");
            })
        };

        Self {
            cleanup: Some(cleanup),
        }
    }

    pub fn with_transformer<L, R, X>(left: &L, right: &R, transformer: X) -> Self
    where
        L: Observable,
        R: Observable,
        X: Transformer<From = L::Value, To = R::Value> + 'static,
    {
        Self::new(left, right, move |value| transformer.transform(value))
    }

    /// Identity link between two observables of the same value type.
    pub fn direct<L, R>(left: &L, right: &R) -> Self
    where
        L: Observable,
        R: Observable<Value = L::Value>,
    {
        Self::new(left, right, |value| value)
    }

    /// Tears the link down now instead of at drop time.
    pub fn dispose(mut self) {
        self.run_cleanup();
    }

    fn run_cleanup(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
    }
}

impl Drop for Linker {
    fn drop(&mut self) {
        self.run_cleanup();
    }
}
