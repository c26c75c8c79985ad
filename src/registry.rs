use std::{
    any::type_name,
    cell::RefCell,
    fmt::{self, Debug, Display, Formatter},
};

use log::trace;

use crate::subscriber::{Subscriber, SubscriptionToken};

/// Ordered store of subscribed callbacks. Insertion order is delivery order.
pub struct CallbackRegistry<T> {
    pub name: String,

    subscribers: RefCell<Vec<Subscriber<T>>>,
}

impl<T> CallbackRegistry<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

impl<T: Clone + 'static> CallbackRegistry<T> {
    pub fn add(&self, callback: impl Fn(T) + 'static) -> SubscriptionToken {
        let subscriber = Subscriber::new(callback);
        let token = subscriber.token;
        self.subscribers.borrow_mut().push(subscriber);

        trace!("CallbackRegistry {} added {:?}.", self.name, token);

        token
    }

    /// Removing a token that is not present is a defined no-op; returns
    /// whether an entry was removed.
    pub fn remove(&self, token: SubscriptionToken) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let Some(index) = subscribers.iter().position(|s| s.token == token) else {
            return false;
        };
        subscribers.remove(index);

        trace!("CallbackRegistry {} removed {:?}.", self.name, token);

        true
    }

    /// Delivers `value` to every subscriber present when the call begins, in
    /// registration order. Subscribers removed by a callback mid-pass still
    /// receive this pass's value; subscribers added mid-pass do not.
    pub fn notify(&self, value: T) {
        let snapshot: Vec<Subscriber<T>> = self.subscribers.borrow().clone();

        trace!(
            "CallbackRegistry {} notifying {} subscribers.",
            self.name,
            snapshot.len()
        );

        for subscriber in snapshot {
            subscriber.dispatch(value.clone());
        }
    }
}

impl<T> Debug for CallbackRegistry<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let sub_count = self.subscriber_count();

        f.debug_struct(type_name::<Self>())
            .field("name", &self.name)
            .field("subscribers", &sub_count)
            .finish()
    }
}

impl<T> Display for CallbackRegistry<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let sub_count = self.subscriber_count();
        let sub_word = if sub_count == 1 {
            "subscriber"
        } else {
            "subscribers"
        };

        write!(f, "CallbackRegistry {} ({} {})", self.name, sub_count, sub_word)
    }
}
