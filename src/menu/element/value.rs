use color_eyre::Result;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Named arguments handed to a callback on activation
pub type Kwargs = BTreeMap<String, Value>;

type CallbackFn = dyn Fn(&[Value], &Kwargs) -> Result<()>;

/// Shared handle to an invocable activation handler.
///
/// Clones point at the same function, and two handles compare equal only
/// when they do.
#[derive(Clone)]
pub struct Callback(Rc<CallbackFn>);

impl Callback {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Value], &Kwargs) -> Result<()> + 'static,
    {
        Self(Rc::new(f))
    }

    /// Invokes the handler; errors are returned to the caller untouched
    pub fn call(&self, args: &[Value], kwargs: &Kwargs) -> Result<()> {
        (self.0)(args, kwargs)
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callback({:p})", Rc::as_ptr(&self.0))
    }
}

/// Loosely typed argument value, stored and forwarded without inspection
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    Callback(Callback),
}

impl Value {
    #[must_use]
    pub fn is_invocable(&self) -> bool {
        matches!(self, Value::Callback(_))
    }

    #[must_use]
    pub fn as_callback(&self) -> Option<&Callback> {
        match self {
            Value::Callback(callback) => Some(callback),
            Value::Int(_) | Value::Float(_) | Value::Text(_) | Value::Bool(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            Value::Int(_) | Value::Float(_) | Value::Bool(_) | Value::Callback(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{}", value),
            Value::Float(value) => write!(f, "{}", value),
            Value::Text(text) => f.write_str(text),
            Value::Bool(value) => write!(f, "{}", value),
            Value::Callback(callback) => write!(f, "{:?}", callback),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Callback> for Value {
    fn from(callback: Callback) -> Self {
        Value::Callback(callback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_callback_equality_is_identity() {
        let first = Callback::new(|_, _| Ok(()));
        let second = Callback::new(|_, _| Ok(()));
        assert_eq!(first, first.clone());
        assert_ne!(first, second);
    }

    #[test]
    fn test_callback_receives_args_and_kwargs() {
        let seen = Rc::new(Cell::new(0));
        let sink = Rc::clone(&seen);
        let callback = Callback::new(move |args, kwargs| {
            sink.set(args.len() + kwargs.len());
            Ok(())
        });

        let mut kwargs = Kwargs::new();
        kwargs.insert("message".to_string(), Value::from("hi"));
        callback
            .call(&[Value::from(1), Value::from(2)], &kwargs)
            .unwrap();
        assert_eq!(seen.get(), 3);
    }

    #[test]
    fn test_invocable_detection() {
        assert!(Value::from(Callback::new(|_, _| Ok(()))).is_invocable());
        assert!(!Value::from("print").is_invocable());
        assert!(!Value::from(3).is_invocable());
    }

    #[test]
    fn test_display_plain_values() {
        assert_eq!(Value::from(2).to_string(), "2");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(Value::from("label").to_string(), "label");
        assert_eq!(Value::from(true).to_string(), "true");
    }
}
