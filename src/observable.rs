use crate::{binder::Binder, linker::Linker, subscriber::SubscriptionToken};

/// Capability implemented by every value source the binding engine can link:
/// a readable/writable value plus synchronous change notification.
///
/// Implementations are cheap clonable handles over shared state; all access
/// is assumed to happen on a single logical thread of control.
pub trait Observable: Clone + 'static {
    type Value: Clone + 'static;

    fn get(&self) -> Self::Value;

    /// Stores the value, then notifies every currently-registered callback
    /// before returning. Every assignment notifies, changed or not.
    fn set(&self, value: Self::Value);

    fn register(&self, callback: impl Fn(Self::Value) + 'static) -> SubscriptionToken;

    /// Deregistering an unknown or already-removed token is a defined no-op;
    /// returns whether a registration was removed.
    fn deregister(&self, token: SubscriptionToken) -> bool;

    /// One-way link: seeds `self` with `transform(other.get())`, then follows
    /// every change of `other`. Changes of `self` never flow back. The link
    /// lives only as long as the returned handle.
    fn connect<O: Observable>(
        &self,
        other: &O,
        transform: impl Fn(O::Value) -> Self::Value + 'static,
    ) -> Linker {
        Linker::new(other, self, transform)
    }

    /// Two-way link; `self` is the authoritative side at creation time. The
    /// link lives only as long as the returned handle.
    fn bind<O: Observable>(
        &self,
        other: &O,
        transform: impl Fn(O::Value) -> Self::Value + 'static,
        reverse_transform: impl Fn(Self::Value) -> O::Value + 'static,
    ) -> Binder {
        Binder::new(other, self, transform, reverse_transform)
    }
}
