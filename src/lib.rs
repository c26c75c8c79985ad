pub mod any_observable;
pub mod binder;
pub mod facade_observable;
pub mod id;
pub mod linker;
pub mod observable;
pub mod observable_cell;
pub mod registry;
pub mod subscriber;
pub mod transformer;

pub use any_observable::AnyObservable;
pub use binder::Binder;
pub use facade_observable::FacadeObservable;
pub use linker::Linker;
pub use observable::Observable;
pub use observable_cell::ObservableCell;
pub use registry::CallbackRegistry;
pub use subscriber::{Subscriber, SubscriptionToken};
pub use transformer::{FnTransformer, IdentityTransformer, NegateTransformer, Transformer};
