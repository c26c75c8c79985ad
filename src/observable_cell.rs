use std::{
    any::type_name,
    cell::RefCell,
    fmt::{self, Debug, Formatter},
    rc::Rc,
};

use crate::{
    observable::Observable,
    registry::CallbackRegistry,
    subscriber::SubscriptionToken,
};

struct Inner<T> {
    value: RefCell<T>,
    on_change: CallbackRegistry<T>,
}

/// The simplest concrete [`Observable`]: an in-memory cell that notifies on
/// every assignment. Clones share the same cell.
pub struct ObservableCell<T> {
    inner: Rc<Inner<T>>,
}

impl<T: Clone + 'static> ObservableCell<T> {
    pub fn new(value: T, name: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: RefCell::new(value),
                on_change: CallbackRegistry::new(name),
            }),
        }
    }

    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    pub fn set(&self, value: T) {
        *self.inner.value.borrow_mut() = value.clone();
        self.inner.on_change.notify(value);
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.on_change.subscriber_count()
    }
}

impl<T: Clone + 'static> Observable for ObservableCell<T> {
    type Value = T;

    fn get(&self) -> T {
        ObservableCell::get(self)
    }

    fn set(&self, value: T) {
        ObservableCell::set(self, value)
    }

    fn register(&self, callback: impl Fn(T) + 'static) -> SubscriptionToken {
        self.inner.on_change.add(callback)
    }

    fn deregister(&self, token: SubscriptionToken) -> bool {
        self.inner.on_change.remove(token)
    }
}

impl<T> Clone for ObservableCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + PartialEq + 'static> PartialEq for ObservableCell<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.inner.value.borrow() == *other.inner.value.borrow()
    }
}

impl<T: Clone + PartialEq + 'static> PartialEq<T> for ObservableCell<T> {
    fn eq(&self, other: &T) -> bool {
        *self.inner.value.borrow() == *other
    }
}

impl<T: Debug> Debug for ObservableCell<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct(type_name::<Self>())
            .field("value", &self.inner.value.borrow())
            .field("subscribers", &self.inner.on_change.subscriber_count())
            .finish()
    }
}
