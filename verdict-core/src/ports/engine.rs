// verdict-core/src/ports/engine.rs

// The contract the router needs from a validation engine, without knowing how
// the rules are evaluated (derive macros, schema files, hand-written checks...).

use crate::domain::constraint::Group;
use crate::domain::violation::ViolationSet;

pub trait ValidationEngine<T: ?Sized>: Send + Sync {
    /// Evaluates the constraints of `object` selected by `groups`.
    /// Groups are opaque to the router and passed through unmodified.
    fn validate(&self, object: &T, groups: &[Group]) -> ViolationSet;
}

impl<T: ?Sized, E: ValidationEngine<T> + ?Sized> ValidationEngine<T> for &E {
    fn validate(&self, object: &T, groups: &[Group]) -> ViolationSet {
        (**self).validate(object, groups)
    }
}

impl<T: ?Sized, E: ValidationEngine<T> + ?Sized> ValidationEngine<T> for std::sync::Arc<E> {
    fn validate(&self, object: &T, groups: &[Group]) -> ViolationSet {
        (**self).validate(object, groups)
    }
}
