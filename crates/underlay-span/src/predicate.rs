use crate::annotation::Annotation;

/// Decides whether a renderer applies to an annotation.
///
/// Predicates are stateless pure functions over the annotation and its
/// opaque host flags. Wrap a plain closure in [`FnPredicate`] to
/// narrow matching ad hoc without a named type.
pub trait AnnotationPredicate {
    fn matches(&self, annotation: &Annotation, flags: u32) -> bool;
}

/// Adapter turning any closure into a predicate.
pub struct FnPredicate<F>(pub F);

impl<F> AnnotationPredicate for FnPredicate<F>
where
    F: Fn(&Annotation, u32) -> bool,
{
    fn matches(&self, annotation: &Annotation, flags: u32) -> bool {
        (self.0)(annotation, flags)
    }
}

/// Base predicate of a style namespace: accepts every annotation whose
/// key equals the configured constant.
pub struct KeyPredicate {
    key: String,
}

impl KeyPredicate {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl AnnotationPredicate for KeyPredicate {
    fn matches(&self, annotation: &Annotation, _flags: u32) -> bool {
        annotation.key() == self.key
    }
}

/// Narrows a base predicate by an exact value match.
///
/// Composition is explicit: the base is consulted first and the value
/// check only ever narrows its accepted set, so layering stays
/// monotonic however deep the chain goes.
pub struct ValuePredicate {
    base: Box<dyn AnnotationPredicate>,
    value: String,
}

impl ValuePredicate {
    pub fn new(base: Box<dyn AnnotationPredicate>, value: impl Into<String>) -> Self {
        Self {
            base,
            value: value.into(),
        }
    }
}

impl AnnotationPredicate for ValuePredicate {
    fn matches(&self, annotation: &Annotation, flags: u32) -> bool {
        self.base.matches(annotation, flags) && annotation.value() == self.value
    }
}
