//! Deserialization options.

use crate::classes::{ClassFactory, ClassRegistry};

/// What to do with a `$n` whose index is past the last statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReferencePolicy {
    /// Resolve to `undefined`
    #[default]
    Lenient,
    /// Fail with `DeserializeError::UnresolvedReference`
    Strict,
}

/// Options for a deserialize call.
///
/// # Examples
///
/// ```
/// use deserializer::{DeserializeOptions, ReferencePolicy};
///
/// let options = DeserializeOptions::new().with_references(ReferencePolicy::Strict);
/// assert!(options.classes.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeserializeOptions {
    /// Types that class tags resolve to
    pub classes: ClassRegistry,
    /// Handling of out-of-range references
    pub references: ReferencePolicy,
}

impl DeserializeOptions {
    /// Default options: no classes, lenient references
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one class
    pub fn with_class<F>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: ClassFactory + 'static,
    {
        self.classes.register(name, factory);
        self
    }

    /// Replace the class registry
    pub fn with_classes(mut self, classes: ClassRegistry) -> Self {
        self.classes = classes;
        self
    }

    /// Set the reference policy
    pub fn with_references(mut self, policy: ReferencePolicy) -> Self {
        self.references = policy;
        self
    }
}
