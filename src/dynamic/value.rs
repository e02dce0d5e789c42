use std::iter::FusedIterator;
use std::vec;

use derive_more::{From, IsVariant};
use serde::{Deserialize, Serialize};

/// A dynamically typed argument, covering the shapes of value found in JSON.
///
/// Values deserialize straight from JSON text, so `[1, 2]` becomes a [`Value::List`] of two
/// [`Value::Int`]s and `2.0` a [`Value::Float`].
#[derive(Debug, Clone, PartialEq, From, IsVariant, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
}

impl Value {
    /// Whether the value can be iterated over. Only [`Value::Str`] (by character) and
    /// [`Value::List`] can.
    pub const fn is_iterable(&self) -> bool {
        matches!(self, Value::Str(_) | Value::List(_))
    }

    /// Renders the value as JSON for use in error messages.
    pub fn render(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"))
    }

    /// Converts the value into an iterator over its elements, or gives it back if it isn't
    /// iterable.
    pub fn into_elements(self) -> Result<Elements, Value> {
        match self {
            Value::List(items) => Ok(Elements(items.into_iter())),
            Value::Str(string) => Ok(Elements(
                string
                    .chars()
                    .map(|c| Value::Str(c.to_string()))
                    .collect::<Vec<_>>()
                    .into_iter(),
            )),
            other => Err(other),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

/// An owned iterator over the elements of an iterable [`Value`]. See [`Value::into_elements`].
#[derive(Debug, Clone)]
pub struct Elements(vec::IntoIter<Value>);

impl Iterator for Elements {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Elements {}

impl FusedIterator for Elements {}
