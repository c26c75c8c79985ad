use std::{cell::Cell, rc::Rc};

use log::debug;

use crate::{observable::Observable, transformer::Transformer};

/// Two-way synchronizer between two observables with possibly different
/// value types.
///
/// At construction the right-hand side is authoritative: `left` is seeded
/// with `r2l(right.get())`, then `right` is re-derived with
/// `l2r(left.get())`. With true inverses both sides converge on the right's
/// original value; with non-inverse transforms the right value may end up
/// differing from what it held before construction.
///
/// At runtime a change on one side propagates exactly one hop to the other.
/// The far side's own subscribers are notified as usual, but the binder's
/// feedback callback there is suppressed for that one notification, so the
/// pair never recurses.
///
/// The link stays active only while the `Binder` is kept alive: dropping it
/// (or calling [`dispose`](Binder::dispose)) deregisters both callbacks
/// exactly once. Callers must store the handle, or the link is torn down
/// immediately.
pub struct Binder {
    cleanup: Option<Box<dyn FnOnce()>>,
}

impl Binder {
    pub fn new<L, R>(
        left: &L,
        right: &R,
        l2r: impl Fn(L::Value) -> R::Value + 'static,
        r2l: impl Fn(R::Value) -> L::Value + 'static,
    ) -> Self
    where
        L: Observable,
        R: Observable,
    {
        left.set(r2l(right.get()));
        right.set(l2r(left.get()));

        // At most one flag is true at any instant. The flags only cover this
        // pair; cycles across chained binders (A<->B, B<->C, C<->A) are the
        // integrator's problem.
        // TODO: a crate-wide write epoch would bound cross-pair cycles too.
        let suppress_left = Rc::new(Cell::new(false));
        let suppress_right = Rc::new(Cell::new(false));

        let left_token = left.register({
            let right = right.clone();
            let suppress_left = Rc::clone(&suppress_left);
            let suppress_right = Rc::clone(&suppress_right);
            move |value| {
                if suppress_left.get() {
                    return;
                }
                suppress_right.set(true);
                right.set(l2r(value));
                suppress_right.set(false);
            }
        });
        let right_token = right.register({
            let left = left.clone();
            move |value| {
                if suppress_right.get() {
                    return;
                }
                suppress_left.set(true);
                left.set(r2l(value));
                suppress_left.set(false);
            }
        });

        debug!("Binder linked {left_token:?} <-> {right_token:?}.");

        let cleanup: Box<dyn FnOnce()> = {
            let left = left.clone();
            let right = right.clone();
            Box::new(move || {
                left.deregister(left_token);
                right.deregister(right_token);
                debug!("Binder unlinked {left_token:?} <-> {right_token:?}.");
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
        let transformer = Rc::new(transformer);
        let reverse = Rc::clone(&transformer);

        Self::new(
            left,
            right,
            move |value| transformer.transform(value),
            move |value| reverse.reverse_transform(value),
        )
    }

    /// Identity link between two observables of the same value type.
    pub fn direct<L, R>(left: &L, right: &R) -> Self
    where
        L: Observable,
        R: Observable<Value = L::Value>,
    {
        Self::new(left, right, |value| value, |value| value)
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

impl Drop for Binder {
    fn drop(&mut self) {
        self.run_cleanup();
    }
}
