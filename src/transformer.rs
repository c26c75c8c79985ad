use std::marker::PhantomData;

/// Paired forward/reverse conversion functions bridging two value types.
///
/// No inverse law is enforced between the two directions; callers pick
/// functions that are consistent enough for their use. The binder's feedback
/// guard bounds recursion but does not detect semantic drift from
/// non-inverse pairs.
pub trait Transformer {
    type From;
    type To;

    fn transform(&self, value: Self::From) -> Self::To;
    fn reverse_transform(&self, value: Self::To) -> Self::From;
}

pub struct IdentityTransformer<T> {
    _marker: PhantomData<fn(T) -> T>,
}

impl<T> IdentityTransformer<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for IdentityTransformer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for IdentityTransformer<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Copy for IdentityTransformer<T> {}

impl<T> Transformer for IdentityTransformer<T> {
    type From = T;
    type To = T;

    fn transform(&self, value: T) -> T {
        value
    }

    fn reverse_transform(&self, value: T) -> T {
        value
    }
}

/// Self-inverse boolean negation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NegateTransformer;

impl Transformer for NegateTransformer {
    type From = bool;
    type To = bool;

    fn transform(&self, value: bool) -> bool {
        !value
    }

    fn reverse_transform(&self, value: bool) -> bool {
        !value
    }
}

/// Transformer built inline from two arbitrary functions.
pub struct FnTransformer<T, U, F, G>
where
    F: Fn(T) -> U,
    G: Fn(U) -> T,
{
    forward: F,
    reverse: G,
    _marker: PhantomData<fn(T) -> U>,
}

impl<T, U, F, G> FnTransformer<T, U, F, G>
where
    F: Fn(T) -> U,
    G: Fn(U) -> T,
{
    pub fn new(forward: F, reverse: G) -> Self {
        Self {
            forward,
            reverse,
            _marker: PhantomData,
        }
    }
}

impl<T, U, F, G> Transformer for FnTransformer<T, U, F, G>
where
    F: Fn(T) -> U,
    G: Fn(U) -> T,
{
    type From = T;
    type To = U;

    fn transform(&self, value: T) -> U {
        (self.forward)(value)
    }

    fn reverse_transform(&self, value: U) -> T {
        (self.reverse)(value)
    }
}

impl<T, U, F, G> Clone for FnTransformer<T, U, F, G>
where
    F: Fn(T) -> U + Clone,
    G: Fn(U) -> T + Clone,
{
    fn clone(&self) -> Self {
        Self {
            forward: self.forward.clone(),
            reverse: self.reverse.clone(),
            _marker: PhantomData,
        }
    }
}
