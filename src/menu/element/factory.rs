use super::callback::CallbackElement;
use super::numeric::{Number, NumericElement};
use super::value::{Callback, Kwargs, Value};
use super::MenuElement;
use std::fmt;
use std::str::FromStr;

/// The closed set of element types the factory can build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Numeric,
    Callback,
}

impl FromStr for ElementKind {
    type Err = InvalidElementType;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "numeric" => Ok(ElementKind::Numeric),
            "callback" => Ok(ElementKind::Callback),
            _ => Err(InvalidElementType(tag.to_string())),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Numeric => f.write_str("numeric"),
            ElementKind::Callback => f.write_str("callback"),
        }
    }
}

/// Raised when an element type tag names no known element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidElementType(pub String);

impl fmt::Display for InvalidElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid menu element type '{}'", self.0)
    }
}

impl std::error::Error for InvalidElementType {}

/// Loosely typed construction arguments for [`ElementFactory::create`].
///
/// Which fields matter depends on the element kind:
/// - numeric: `initial_value`, else the first of `args`, else zero
/// - callback: `callback` when invocable, else the first of `args` when
///   invocable (and then dropped from the forwarded args)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementOptions {
    pub initial_value: Option<Value>,
    pub callback: Option<Value>,
    pub args: Vec<Value>,
}

impl ElementOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the named initial value
    #[must_use]
    pub fn with_initial_value(mut self, value: impl Into<Value>) -> Self {
        self.initial_value = Some(value.into());
        self
    }

    /// Sets the named callback
    #[must_use]
    pub fn with_callback(mut self, callback: impl Into<Value>) -> Self {
        self.callback = Some(callback.into());
        self
    }

    /// Appends a positional argument
    #[must_use]
    pub fn with_arg(mut self, arg: impl Into<Value>) -> Self {
        self.args.push(arg.into());
        self
    }
}

pub struct ElementFactory;

impl ElementFactory {
    /// Builds an element of the given kind from loosely typed options
    #[must_use]
    pub fn create(kind: ElementKind, label: &str, options: ElementOptions) -> MenuElement {
        match kind {
            ElementKind::Numeric => MenuElement::Numeric(Self::numeric_from_options(label, options)),
            ElementKind::Callback => {
                MenuElement::Callback(Self::callback_from_options(label, options))
            }
        }
    }

    /// Same as [`ElementFactory::create`] with the kind given as a tag
    pub fn create_from_tag(
        tag: &str,
        label: &str,
        options: ElementOptions,
    ) -> Result<MenuElement, InvalidElementType> {
        let kind = tag.parse::<ElementKind>()?;
        Ok(Self::create(kind, label, options))
    }

    #[must_use]
    pub fn create_numeric(label: &str, value: impl Into<Number>) -> NumericElement {
        NumericElement::new(label, value)
    }

    #[must_use]
    pub fn create_callback(label: &str, callback: Callback, args: Vec<Value>) -> CallbackElement {
        CallbackElement::new(label, Some(callback), args, Kwargs::new())
    }

    fn numeric_from_options(label: &str, options: ElementOptions) -> NumericElement {
        // Named value wins over positional; any further positional args are ignored
        let raw = options.initial_value.or_else(|| options.args.into_iter().next());
        let value = raw.map_or(Number::Float(0.0).normalized(), |raw| {
            Number::from_value_or_zero(&raw)
        });
        NumericElement::new(label, value)
    }

    fn callback_from_options(label: &str, options: ElementOptions) -> CallbackElement {
        let ElementOptions {
            callback, mut args, ..
        } = options;

        let mut callback = callback.and_then(|value| value.as_callback().cloned());

        if callback.is_none() {
            if let Some(first) = args.first().and_then(Value::as_callback).cloned() {
                args.remove(0);
                callback = Some(first);
            }
        }

        // Named arguments are not forwarded on this path
        CallbackElement::new(label, callback, args, Kwargs::new())
    }
}
