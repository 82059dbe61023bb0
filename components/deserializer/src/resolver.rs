//! Reference resolution: turns the parsed statement table into a value graph.
//!
//! Every top-level container statement gets its shared handle before any
//! statement is walked, so a `$n` anywhere in the document (earlier, later,
//! or inside statement `n` itself) resolves to the same handle. Each parsed
//! node is visited exactly once.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};

use core_types::{
    ClassInstance, DeserializeError, DeserializeResult, ObjectData, ObjectRef, ParsedValue,
    Properties, Value,
};

use crate::classes::ClassFactory;
use crate::options::{DeserializeOptions, ReferencePolicy};

/// Tagged object waiting for its factory to run
struct PendingInstance {
    object: ObjectRef,
    name: String,
    factory: Rc<dyn ClassFactory>,
}

/// Second phase of deserialization.
pub struct Resolver<'a> {
    options: &'a DeserializeOptions,
    statements: Vec<Value>,
    pending: Vec<PendingInstance>,
    substitutions: usize,
}

impl<'a> Resolver<'a> {
    /// Create a resolver using `options` for classes and reference policy
    pub fn new(options: &'a DeserializeOptions) -> Self {
        Self {
            options,
            statements: Vec::new(),
            pending: Vec::new(),
            substitutions: 0,
        }
    }

    /// Resolve a statement table into the final values, one per statement.
    ///
    /// Tags in `table` are constructed with the factories in this resolver's
    /// options; a tag without a factory there is left as a plain object.
    pub fn resolve(mut self, table: Vec<ParsedValue>) -> DeserializeResult<Vec<Value>> {
        self.statements = table.iter().map(shell_for).collect();

        // Statements that are themselves references alias another statement
        for index in 0..table.len() {
            if let ParsedValue::Reference(_) = table[index] {
                self.statements[index] = self.follow_chain(&table, index)?;
            }
        }

        for (index, statement) in table.into_iter().enumerate() {
            let shell = self.statements[index].clone();
            self.fill(shell, statement)?;
        }

        self.construct_instances();
        debug!(
            statements = self.statements.len(),
            substitutions = self.substitutions,
            "resolved references"
        );
        Ok(self.statements)
    }

    /// Follow `$a` → `$b` → ... from statement `start` to a non-reference.
    /// A chain that loops back on itself resolves to `undefined`.
    fn follow_chain(&mut self, table: &[ParsedValue], start: usize) -> DeserializeResult<Value> {
        let mut visited = vec![start];
        let mut current = start;
        while let ParsedValue::Reference(target) = table[current] {
            self.substitutions += 1;
            if target >= table.len() {
                return self.out_of_range(target);
            }
            if visited.contains(&target) {
                return Ok(Value::Undefined);
            }
            visited.push(target);
            current = target;
        }
        Ok(self.statements[current].clone())
    }

    fn lookup(&mut self, index: usize) -> DeserializeResult<Value> {
        self.substitutions += 1;
        match self.statements.get(index) {
            Some(value) => Ok(value.clone()),
            None => self.out_of_range(index),
        }
    }

    fn out_of_range(&self, index: usize) -> DeserializeResult<Value> {
        match self.options.references {
            ReferencePolicy::Lenient => Ok(Value::Undefined),
            ReferencePolicy::Strict => Err(DeserializeError::UnresolvedReference {
                index,
                statements: self.statements.len(),
            }),
        }
    }

    /// Fill a top-level shell with the statement's contents
    fn fill(&mut self, shell: Value, statement: ParsedValue) -> DeserializeResult<()> {
        match (shell, statement) {
            (Value::Array(handle), ParsedValue::Array(items)) => {
                let elements = self.convert_all(items)?;
                *handle.borrow_mut() = elements;
            }
            (Value::Object(handle), ParsedValue::Object(fields)) => {
                handle.borrow_mut().properties = self.convert_fields(fields)?;
            }
            (Value::Object(handle), ParsedValue::TaggedObject { name, fields }) => {
                handle.borrow_mut().properties = self.convert_fields(fields)?;
                self.bind_class(handle, name);
            }
            // Primitives were converted when the shell was made
            _ => {}
        }
        Ok(())
    }

    fn convert(&mut self, node: ParsedValue) -> DeserializeResult<Value> {
        Ok(match node {
            ParsedValue::Reference(index) => self.lookup(index)?,
            ParsedValue::Array(items) => Value::array(self.convert_all(items)?),
            ParsedValue::Object(fields) => Value::object(self.convert_fields(fields)?),
            ParsedValue::TaggedObject { name, fields } => {
                let object = Rc::new(RefCell::new(ObjectData::new(self.convert_fields(fields)?)));
                self.bind_class(object.clone(), name);
                Value::Object(object)
            }
            primitive => convert_primitive(primitive),
        })
    }

    fn convert_all(&mut self, items: Vec<ParsedValue>) -> DeserializeResult<Vec<Value>> {
        items.into_iter().map(|item| self.convert(item)).collect()
    }

    fn convert_fields(
        &mut self,
        fields: Properties<ParsedValue>,
    ) -> DeserializeResult<Properties<Value>> {
        fields
            .into_iter()
            .map(|(key, node)| Ok((key, self.convert(node)?)))
            .collect()
    }

    /// Queue a tagged object for construction once every reference is in place.
    ///
    /// The parser already downgrades unknown tags, so a missing factory here
    /// means the table was parsed against a different registry than the one
    /// in `options`. The object then stays plain, with its own warning.
    fn bind_class(&mut self, object: ObjectRef, name: String) {
        match self.options.classes.get(&name) {
            Some(factory) => self.pending.push(PendingInstance {
                object,
                name,
                factory,
            }),
            None => warn!(class = %name, "type not defined, ignored"),
        }
    }

    /// Run factories, innermost instance first
    fn construct_instances(&mut self) {
        for pending in self.pending.drain(..) {
            let data = {
                let object = pending.object.borrow();
                pending.factory.construct(&object.properties)
            };
            pending.object.borrow_mut().class = Some(ClassInstance {
                name: pending.name,
                data,
            });
        }
    }
}

/// The value a statement starts out as: an empty handle for containers,
/// the final value for primitives, a placeholder for references.
fn shell_for(statement: &ParsedValue) -> Value {
    match statement {
        ParsedValue::Array(_) => Value::array(Vec::new()),
        ParsedValue::Object(_) | ParsedValue::TaggedObject { .. } => {
            Value::object(Properties::new())
        }
        ParsedValue::Reference(_) => Value::Undefined,
        primitive => convert_primitive(primitive.clone()),
    }
}

fn convert_primitive(node: ParsedValue) -> Value {
    match node {
        ParsedValue::Null => Value::Null,
        ParsedValue::Undefined => Value::Undefined,
        ParsedValue::Bool(b) => Value::Boolean(b),
        ParsedValue::Number(n) => Value::Number(n),
        ParsedValue::BigInt(n) => Value::BigInt(n),
        ParsedValue::String(s) => Value::String(s),
        ParsedValue::Regex(re) => Value::RegExp(Rc::new(re)),
        // Containers and references are handled by the resolver
        _ => Value::Undefined,
    }
}
