//! Class tag registry.
//!
//! A document may write `Name{...}` to say the object is an instance of a
//! named type. The registry maps each known name to a factory that builds
//! the typed value from the object's resolved fields.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use tracing::warn;

use core_types::{ParsedValue, Properties, SourcePosition, Value};

/// Builds a typed value from the fields of a tagged object.
///
/// Factories run after every reference in the document is resolved, so
/// `fields` never contains placeholders. The object being constructed is
/// borrowed while the factory runs; reading it through a cyclic field is
/// fine, mutating it is not.
pub trait ClassFactory {
    /// Construct the typed value
    fn construct(&self, fields: &Properties<Value>) -> Box<dyn Any>;
}

impl<F> ClassFactory for F
where
    F: Fn(&Properties<Value>) -> Box<dyn Any>,
{
    fn construct(&self, fields: &Properties<Value>) -> Box<dyn Any> {
        self(fields)
    }
}

/// Mapping from class tag to factory.
///
/// # Examples
///
/// ```
/// use deserializer::ClassRegistry;
///
/// let mut classes = ClassRegistry::new();
/// classes.register("Point", |fields: &core_types::Properties<core_types::Value>| {
///     Box::new(fields.len()) as Box<dyn std::any::Any>
/// });
/// assert!(classes.contains("Point"));
/// ```
#[derive(Clone, Default)]
pub struct ClassRegistry {
    classes: HashMap<String, Rc<dyn ClassFactory>>,
}

impl ClassRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` under `name`, replacing any earlier registration
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: ClassFactory + 'static,
    {
        self.classes.insert(name.into(), Rc::new(factory));
        self
    }

    /// Look up the factory for `name`
    pub fn get(&self, name: &str) -> Option<Rc<dyn ClassFactory>> {
        self.classes.get(name).cloned()
    }

    /// Whether `name` is registered
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Number of registered classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether no class is registered
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Turn a parsed `Name{...}` into a tagged object if `Name` is known.
    ///
    /// Unknown names are not an error: the fields come back as a plain
    /// object and a warning is logged.
    pub fn tag_object(
        &self,
        name: String,
        fields: Properties<ParsedValue>,
        position: SourcePosition,
    ) -> ParsedValue {
        if self.contains(&name) {
            ParsedValue::TaggedObject { name, fields }
        } else {
            warn!(class = %name, offset = position.offset, "type not defined, ignored");
            ParsedValue::Object(fields)
        }
    }
}

impl fmt::Debug for ClassRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.classes.keys().collect();
        names.sort();
        f.debug_struct("ClassRegistry")
            .field("classes", &names)
            .finish()
    }
}
