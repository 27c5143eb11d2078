//! The parsed data tree.
//!
//! [`Value`] is the sum type a CSONH document decodes to: Object, Array,
//! String, Integer, Float, Boolean, Null. `Object` uses [`IndexMap`] to
//! get both insertion-order preservation and last-write-wins overwrite
//! semantics from a single `.insert()` call — exactly the contract
//! required for duplicate keys.

use std::ops::Index;

use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Object(IndexMap<String, Value>),
    Array(Vec<Value>),
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl Index<&str> for Value {
    type Output = Value;

    /// Panics if `self` is not an object or the key is absent.
    fn index(&self, key: &str) -> &Value {
        self.as_object()
            .and_then(|map| map.get(key))
            .unwrap_or_else(|| panic!("key {key:?} not found in CSONH object"))
    }
}

impl Index<usize> for Value {
    type Output = Value;

    /// Panics if `self` is not an array or the index is out of bounds.
    fn index(&self, index: usize) -> &Value {
        self.as_array()
            .and_then(|items| items.get(index))
            .unwrap_or_else(|| panic!("index {index} out of bounds in CSONH array"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_narrow_by_variant() {
        let value = Value::Integer(42);
        assert_eq!(value.as_i64(), Some(42));
        assert_eq!(value.as_str(), None);
        assert_eq!(value.as_f64(), Some(42.0));
    }

    #[test]
    fn object_indexing() {
        let mut map = IndexMap::new();
        map.insert("a".to_string(), Value::Boolean(true));
        let object = Value::Object(map);
        assert_eq!(object["a"], Value::Boolean(true));
    }

    #[test]
    fn array_indexing() {
        let array = Value::Array(vec![Value::Null, Value::Integer(1)]);
        assert_eq!(array[1], Value::Integer(1));
    }

    #[test]
    #[should_panic]
    fn indexing_missing_key_panics() {
        let object = Value::Object(IndexMap::new());
        let _ = &object["missing"];
    }
}
