use std::{
    fmt::{self, Debug, Formatter},
    rc::Rc,
};

use crate::id::get_unique_id;

/// Opaque handle identifying one registered callback. A token must not be
/// reused after the registration it names has been removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionToken(u64);

impl SubscriptionToken {
    pub(crate) fn next() -> Self {
        Self(get_unique_id())
    }
}

pub struct Subscriber<T> {
    pub token: SubscriptionToken,
    callback: Rc<dyn Fn(T)>,
}

impl<T: 'static> Subscriber<T> {
    pub fn new(callback: impl Fn(T) + 'static) -> Self {
        Self {
            token: SubscriptionToken::next(),
            callback: Rc::new(callback),
        }
    }

    pub fn dispatch(&self, value: T) {
        (self.callback)(value)
    }
}

impl<T> Clone for Subscriber<T> {
    fn clone(&self) -> Self {
        Self {
            token: self.token,
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<T> PartialEq for Subscriber<T> {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl<T> Eq for Subscriber<T> {}

impl<T> Debug for Subscriber<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscriber")
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}
