use std::rc::Rc;

use crate::{
    observable::Observable,
    subscriber::SubscriptionToken,
    transformer::{NegateTransformer, Transformer},
};

struct Ops<T> {
    get: Box<dyn Fn() -> T>,
    set: Box<dyn Fn(T)>,
    register: Box<dyn Fn(Rc<dyn Fn(T)>) -> SubscriptionToken>,
    deregister: Box<dyn Fn(SubscriptionToken) -> bool>,
}

/// Type-erasing handle over some concrete [`Observable`]: stores the four
/// capability operations as closures and forwards to them without adding
/// behavior. Lets code hold "an observable of T" where the concrete type
/// must stay hidden (heterogeneous storage, crossing an abstraction
/// boundary).
pub struct AnyObservable<T> {
    ops: Rc<Ops<T>>,
}

impl<T: Clone + 'static> AnyObservable<T> {
    pub fn new<O: Observable<Value = T>>(observable: O) -> Self {
        let getter = observable.clone();
        let setter = observable.clone();
        let registrar = observable.clone();

        Self {
            ops: Rc::new(Ops {
                get: Box::new(move || getter.get()),
                set: Box::new(move |value| setter.set(value)),
                register: Box::new(move |callback: Rc<dyn Fn(T)>| {
                    registrar.register(move |value| callback(value))
                }),
                deregister: Box::new(move |token| observable.deregister(token)),
            }),
        }
    }

    /// A transformed view over the same underlying observable: reads map
    /// forward, writes map in reverse, and registered callbacks observe
    /// mapped values. Tokens forward to the underlying registry, so a view
    /// registration can be removed through either handle.
    pub fn map<U, X>(&self, transformer: X) -> AnyObservable<U>
    where
        U: Clone + 'static,
        X: Transformer<From = T, To = U> + 'static,
    {
        let transformer = Rc::new(transformer);
        let get_transformer = Rc::clone(&transformer);
        let set_transformer = Rc::clone(&transformer);
        let get_source = self.clone();
        let set_source = self.clone();
        let register_source = self.clone();
        let deregister_source = self.clone();

        AnyObservable {
            ops: Rc::new(Ops {
                get: Box::new(move || get_transformer.transform(get_source.get())),
                set: Box::new(move |value| {
                    set_source.set(set_transformer.reverse_transform(value))
                }),
                register: Box::new(move |callback: Rc<dyn Fn(U)>| {
                    let transformer = Rc::clone(&transformer);
                    register_source.register(move |value| callback(transformer.transform(value)))
                }),
                deregister: Box::new(move |token| deregister_source.deregister(token)),
            }),
        }
    }
}

impl AnyObservable<bool> {
    /// Negated view of a boolean observable.
    pub fn negated(&self) -> AnyObservable<bool> {
        self.map(NegateTransformer)
    }
}

impl<T: Clone + 'static> Observable for AnyObservable<T> {
    type Value = T;

    fn get(&self) -> T {
        (self.ops.get)()
    }

    fn set(&self, value: T) {
        (self.ops.set)(value)
    }

    fn register(&self, callback: impl Fn(T) + 'static) -> SubscriptionToken {
        (self.ops.register)(Rc::new(callback))
    }

    fn deregister(&self, token: SubscriptionToken) -> bool {
        (self.ops.deregister)(token)
    }
}

impl<T> Clone for AnyObservable<T> {
    fn clone(&self) -> Self {
        Self {
            ops: Rc::clone(&self.ops),
        }
    }
}
