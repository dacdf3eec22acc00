//! Runtime values.
//!
//! `Value` models the dynamic values a checker inspects. Composite values are
//! reference counted and immutable: cloning is O(1), a clone is the same
//! reference for identity comparisons, and reference cycles cannot be built.

use crate::bigint::BigInt;
use crate::collections::{host_order, PropertyMap};
use crate::error::ValueError;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A dynamically typed runtime value.
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    BigInt(BigInt),
    String(Arc<str>),
    Symbol(Symbol),
    Function(Function),
    Array(Array),
    Object(Object),
}

impl Value {
    /// Build an array value.
    pub fn array<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::Array(Array::new(items.into_iter().map(Into::into)))
    }

    /// The host `typeof` tag. Null, arrays and objects are all `"object"`,
    /// classes are `"function"`.
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Function(_) => "function",
            Value::Array(_) | Value::Object(_) => "object",
        }
    }

    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Object-kind and not null: arrays and objects.
    #[inline]
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Object(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            Value::BigInt(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Host `===`: numbers by IEEE equality, strings and bigints by content,
    /// symbols, functions, arrays and objects by identity.
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a.ptr_eq(b),
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::Array(a), Value::Array(b)) => a.ptr_eq(b),
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Read a property. Objects expose their own properties, arrays their
    /// indices and `length`. Anything absent reads as `undefined`.
    pub fn get(&self, key: &str) -> Cow<'_, Value> {
        match self {
            Value::Object(object) => match object.get(key) {
                Some(value) => Cow::Borrowed(value),
                None => Cow::Owned(Value::Undefined),
            },
            Value::Array(array) => {
                if key == "length" {
                    return Cow::Owned(Value::Number(array.len() as f64));
                }
                let element = crate::collections::is_array_index(key)
                    .then(|| key.parse::<usize>().ok())
                    .flatten()
                    .and_then(|index| array.get(index));
                match element {
                    Some(value) => Cow::Borrowed(value),
                    None => Cow::Owned(Value::Undefined),
                }
            }
            _ => Cow::Owned(Value::Undefined),
        }
    }

    /// Own enumerable string keys with their values, in host order.
    /// Non-object values have none.
    pub fn own_entries(&self) -> Vec<(Cow<'_, str>, &Value)> {
        match self {
            Value::Object(object) => object
                .entries()
                .into_iter()
                .map(|(key, value)| (Cow::Borrowed(key), value))
                .collect(),
            Value::Array(array) => array
                .iter()
                .enumerate()
                .map(|(index, value)| (Cow::Owned(index.to_string()), value))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Host number-to-string conversion (`Number.prototype.toString()`).
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    // Shortest round-trip digits and their decimal exponent.
    let scientific = format!("{:e}", n.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let count = digits.len() as i32;
    let point = exponent.parse::<i32>().unwrap_or(0) + 1;

    let mut text = String::new();
    if n < 0.0 {
        text.push('-');
    }
    if count <= point && point <= 21 {
        text.push_str(&digits);
        text.extend(std::iter::repeat('0').take((point - count) as usize));
    } else if 0 < point && point <= 21 {
        let (whole, fraction) = digits.split_at(point as usize);
        text.push_str(whole);
        text.push('.');
        text.push_str(fraction);
    } else if -6 < point && point <= 0 {
        text.push_str("0.");
        text.extend(std::iter::repeat('0').take(-point as usize));
        text.push_str(&digits);
    } else {
        let (lead, rest) = digits.split_at(1);
        text.push_str(lead);
        if !rest.is_empty() {
            text.push('.');
            text.push_str(rest);
        }
        let exponent = point - 1;
        text.push_str(&format!("e{}{}", if exponent < 0 { '-' } else { '+' }, exponent.abs()));
    }
    text
}

/// Writes the host string conversion of `value`. Arrays nested `max_depth`
/// levels deep are written as `[...]`.
fn write_host_string<W: fmt::Write>(
    out: &mut W,
    value: &Value,
    depth: usize,
    max_depth: usize,
) -> fmt::Result {
    match value {
        Value::Undefined => out.write_str("undefined"),
        Value::Null => out.write_str("null"),
        Value::Boolean(b) => write!(out, "{}", b),
        Value::Number(n) => out.write_str(&format_number(*n)),
        Value::BigInt(b) => write!(out, "{}", b),
        Value::String(s) => out.write_str(s),
        Value::Symbol(s) => write!(out, "Symbol({})", s.description().unwrap_or("")),
        Value::Function(func) => match func.as_class() {
            Some(class) => write!(out, "class {} {{ }}", class.name()),
            None => write!(out, "function {}() {{ [native code] }}", func.name()),
        },
        Value::Array(_) if depth >= max_depth => out.write_str("[...]"),
        Value::Array(array) => {
            for (i, item) in array.iter().enumerate() {
                if i > 0 {
                    out.write_str(",")?;
                }
                if !matches!(item, Value::Undefined | Value::Null) {
                    write_host_string(out, item, depth + 1, max_depth)?;
                }
            }
            Ok(())
        }
        Value::Object(_) => out.write_str("[object Object]"),
    }
}

struct HostString<'a> {
    value: &'a Value,
    max_depth: usize,
}

impl fmt::Display for HostString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_host_string(f, self.value, 0, self.max_depth)
    }
}

impl Value {
    /// Host string conversion (`String(value)`), with arrays nested
    /// `max_depth` levels deep written as `[...]`.
    pub fn to_host_string(&self, max_depth: usize) -> String {
        HostString {
            value: self,
            max_depth,
        }
        .to_string()
    }
}

impl fmt::Display for Value {
    /// Host string conversion (`String(value)`), bounded at
    /// [`DEFAULT_MAX_DEPTH`](crate::DEFAULT_MAX_DEPTH) levels of arrays.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_host_string(f, self, 0, crate::json::DEFAULT_MAX_DEPTH)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value.into())
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::BigInt(value)
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Value::Symbol(value)
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        Value::Function(value)
    }
}

impl From<Class> for Value {
    fn from(value: Class) -> Self {
        Value::Function(value.constructor())
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Value::Array(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    /// `None` becomes null.
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

// ============================================================================
// Symbols
// ============================================================================

/// A unique symbol. Two symbols are equal only if they are the same symbol,
/// whatever their descriptions.
#[derive(Clone, Debug)]
pub struct Symbol(Arc<SymbolData>);

#[derive(Debug)]
struct SymbolData {
    description: Option<String>,
}

impl Symbol {
    pub fn new(description: Option<&str>) -> Self {
        Self(Arc::new(SymbolData {
            description: description.map(str::to_string),
        }))
    }

    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Symbol) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

// ============================================================================
// Functions and classes
// ============================================================================

/// A callable value: either a plain function or the constructor of a class.
#[derive(Clone, Debug)]
pub struct Function(Callable);

#[derive(Clone, Debug)]
enum Callable {
    Plain(Arc<str>),
    Class(Class),
}

impl Function {
    pub fn new(name: &str) -> Self {
        Self(Callable::Plain(Arc::from(name)))
    }

    pub fn name(&self) -> &str {
        match &self.0 {
            Callable::Plain(name) => name,
            Callable::Class(class) => class.name(),
        }
    }

    /// The class this function constructs, if it is a class constructor.
    pub fn as_class(&self) -> Option<&Class> {
        match &self.0 {
            Callable::Plain(_) => None,
            Callable::Class(class) => Some(class),
        }
    }

    pub fn ptr_eq(&self, other: &Function) -> bool {
        match (&self.0, &other.0) {
            (Callable::Plain(a), Callable::Plain(b)) => Arc::ptr_eq(a, b),
            (Callable::Class(a), Callable::Class(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

/// A class descriptor. Classes form a single-inheritance chain; abstract
/// classes cannot be constructed but can be extended.
#[derive(Clone, Debug)]
pub struct Class(Arc<ClassData>);

#[derive(Debug)]
struct ClassData {
    name: String,
    parent: Option<Class>,
    is_abstract: bool,
}

impl Class {
    /// A concrete root class.
    pub fn new(name: &str) -> Self {
        Self::with_parent(name, None, false)
    }

    /// An abstract root class.
    pub fn new_abstract(name: &str) -> Self {
        Self::with_parent(name, None, true)
    }

    /// A concrete subclass of `self`.
    pub fn extend(&self, name: &str) -> Class {
        Self::with_parent(name, Some(self.clone()), false)
    }

    /// An abstract subclass of `self`.
    pub fn extend_abstract(&self, name: &str) -> Class {
        Self::with_parent(name, Some(self.clone()), true)
    }

    fn with_parent(name: &str, parent: Option<Class>, is_abstract: bool) -> Self {
        Self(Arc::new(ClassData {
            name: name.to_string(),
            parent,
            is_abstract,
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn parent(&self) -> Option<&Class> {
        self.0.parent.as_ref()
    }

    pub fn is_abstract(&self) -> bool {
        self.0.is_abstract
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Class) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Whether `self` is `ancestor` or inherits from it.
    pub fn is_subclass_of(&self, ancestor: &Class) -> bool {
        let mut current = Some(self);
        while let Some(class) = current {
            if class.ptr_eq(ancestor) {
                return true;
            }
            current = class.parent();
        }
        false
    }

    /// The constructor function of this class as a runtime value.
    pub fn constructor(&self) -> Function {
        Function(Callable::Class(self.clone()))
    }

    /// Create an instance carrying `properties`.
    pub fn construct<I, K, V>(&self, properties: I) -> Result<Object, ValueError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        if self.is_abstract() {
            return Err(ValueError::AbstractInstantiation(self.name().to_string()));
        }
        let mut builder = ObjectBuilder {
            class: Some(self.clone()),
            properties: PropertyMap::new(),
        };
        for (key, value) in properties {
            builder = builder.property(key, value);
        }
        Ok(builder.build())
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

// ============================================================================
// Arrays and objects
// ============================================================================

/// An immutable, ordered sequence of values.
#[derive(Clone, Debug)]
pub struct Array(Arc<[Value]>);

impl Array {
    pub fn new(items: impl IntoIterator<Item = Value>) -> Self {
        Self(items.into_iter().collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Array) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An immutable object: own string-keyed properties plus the class that
/// constructed it (`None` for plain objects).
#[derive(Clone, Debug)]
pub struct Object(Arc<ObjectData>);

#[derive(Debug)]
struct ObjectData {
    class: Option<Class>,
    properties: PropertyMap,
}

impl Object {
    /// A plain object with `properties` in the given order.
    pub fn new<I, K, V>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        properties
            .into_iter()
            .fold(Self::builder(), |builder, (key, value)| builder.property(key, value))
            .build()
    }

    pub fn builder() -> ObjectBuilder {
        ObjectBuilder {
            class: None,
            properties: PropertyMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.properties.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.properties.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.properties.is_empty()
    }

    /// Own properties in host enumeration order.
    pub fn entries(&self) -> Vec<(&str, &Value)> {
        host_order(&self.0.properties)
    }

    /// The class that constructed this object.
    pub fn class(&self) -> Option<&Class> {
        self.0.class.as_ref()
    }

    /// Whether this object was constructed by `class` or one of its subclasses.
    pub fn is_instance_of(&self, class: &Class) -> bool {
        self.class().is_some_and(|own| own.is_subclass_of(class))
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Object) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Incremental construction of a plain [`Object`].
#[derive(Debug, Default)]
pub struct ObjectBuilder {
    class: Option<Class>,
    properties: PropertyMap,
}

impl ObjectBuilder {
    /// Set a property. Setting an existing key replaces its value but keeps
    /// its original position.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Object {
        Object(Arc::new(ObjectData {
            class: self.class,
            properties: self.properties,
        }))
    }
}
