use std::rc::Rc;

use crate::{
    observable::Observable,
    registry::CallbackRegistry,
    subscriber::SubscriptionToken,
};

struct Inner<T> {
    getter: Box<dyn Fn() -> T>,
    setter: Box<dyn Fn(T)>,
    on_change: CallbackRegistry<T>,
}

/// Adapts an externally-owned value (a getter/setter pair, e.g. a widget
/// property) to the [`Observable`] capability. Reads go through the getter,
/// writes through the setter followed by a notify.
///
/// The facade performs no polling and hooks no event source itself: changes
/// made to the external value outside of [`set`](Observable::set) are
/// invisible until the adapter owner reports them via [`refresh`].
///
/// [`refresh`]: FacadeObservable::refresh
pub struct FacadeObservable<T> {
    inner: Rc<Inner<T>>,
}

impl<T: Clone + 'static> FacadeObservable<T> {
    pub fn new(
        name: impl Into<String>,
        getter: impl Fn() -> T + 'static,
        setter: impl Fn(T) + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                getter: Box::new(getter),
                setter: Box::new(setter),
                on_change: CallbackRegistry::new(name),
            }),
        }
    }

    pub fn get(&self) -> T {
        (self.inner.getter)()
    }

    pub fn set(&self, value: T) {
        (self.inner.setter)(value.clone());
        self.inner.on_change.notify(value);
    }

    /// Re-reads the getter and notifies subscribers with the current external
    /// value. Adapter owners call this whenever the external system reports a
    /// change (a control event, a property-change notification, ...).
    pub fn refresh(&self) {
        self.inner.on_change.notify((self.inner.getter)());
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.on_change.subscriber_count()
    }
}

impl<T: Clone + 'static> Observable for FacadeObservable<T> {
    type Value = T;

    fn get(&self) -> T {
        FacadeObservable::get(self)
    }

    fn set(&self, value: T) {
        FacadeObservable::set(self, value)
    }

    fn register(&self, callback: impl Fn(T) + 'static) -> SubscriptionToken {
        self.inner.on_change.add(callback)
    }

    fn deregister(&self, token: SubscriptionToken) -> bool {
        self.inner.on_change.remove(token)
    }
}

impl<T> Clone for FacadeObservable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}
