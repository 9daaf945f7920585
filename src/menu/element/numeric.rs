use super::value::Value;

/// Numeric payload of a [`NumericElement`], either whole or fractional
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Stores a float with no fractional part as an integer.
    ///
    /// Non-finite floats and floats outside the `i64` range stay floats.
    #[must_use]
    pub fn normalized(self) -> Self {
        match self {
            Number::Float(value)
                if value.is_finite()
                    && value.fract() == 0.0
                    && value >= i64::MIN as f64
                    && value < i64::MAX as f64 =>
            {
                Number::Int(value as i64)
            }
            Number::Int(_) | Number::Float(_) => self,
        }
    }

    /// Converts a loosely typed value, failing open to integer zero
    #[must_use]
    pub fn from_value_or_zero(value: &Value) -> Self {
        Self::parse_value(value).map_or(Number::Int(0), Number::normalized)
    }

    fn parse_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(value) => Some(Number::Int(*value)),
            Value::Float(value) => Some(Number::Float(*value)),
            Value::Bool(value) => Some(Number::Int(i64::from(*value))),
            Value::Text(text) => strip_digit_separators(text.trim())?
                .parse::<f64>()
                .ok()
                .map(Number::Float),
            Value::Callback(_) => None,
        }
    }
}

/// Drops `_` separators, which are only allowed between two digits
fn strip_digit_separators(text: &str) -> Option<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut digits = String::with_capacity(text.len());
    for (index, c) in chars.iter().enumerate() {
        if *c != '_' {
            digits.push(*c);
            continue;
        }
        let before = index.checked_sub(1).and_then(|i| chars.get(i));
        let after = chars.get(index + 1);
        let between_digits = matches!(
            (before, after),
            (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit()
        );
        if !between_digits {
            return None;
        }
    }
    Some(digits)
}

impl Default for Number {
    fn default() -> Self {
        Number::Int(0)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// A menu element carrying an integer or float value
#[derive(Debug, Clone, PartialEq)]
pub struct NumericElement {
    label: String,
    value: Number,
}

impl NumericElement {
    pub fn new(label: impl Into<String>, value: impl Into<Number>) -> Self {
        Self {
            label: label.into(),
            value: value.into().normalized(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn value(&self) -> Number {
        self.value
    }

    pub fn set_value(&mut self, value: impl Into<Number>) -> &mut Self {
        self.value = value.into().normalized();
        self
    }

    // In-place editing of the value is not wired up yet; activation is inert.
    pub(crate) fn activate(&self) {
        log::debug!("Numeric menu element '{}' has no activation behaviour", self.label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::element::value::Callback;

    #[test]
    fn test_normalize_whole_float() {
        assert_eq!(Number::Float(3.0).normalized(), Number::Int(3));
        assert_eq!(Number::Float(-0.0).normalized(), Number::Int(0));
    }

    #[test]
    fn test_normalize_keeps_fraction() {
        assert_eq!(Number::Float(3.5).normalized(), Number::Float(3.5));
    }

    #[test]
    fn test_normalize_non_finite() {
        assert_eq!(
            Number::Float(f64::INFINITY).normalized(),
            Number::Float(f64::INFINITY)
        );
        assert!(matches!(Number::Float(f64::NAN).normalized(), Number::Float(v) if v.is_nan()));
        assert_eq!(Number::Float(1e300).normalized(), Number::Float(1e300));
    }

    #[test]
    fn test_from_value_text() {
        assert_eq!(Number::from_value_or_zero(&Value::from("3")), Number::Int(3));
        assert_eq!(
            Number::from_value_or_zero(&Value::from(" 3.5 ")),
            Number::Float(3.5)
        );
        assert_eq!(Number::from_value_or_zero(&Value::from("abc")), Number::Int(0));
        assert_eq!(Number::from_value_or_zero(&Value::from("")), Number::Int(0));
    }

    #[test]
    fn test_from_value_digit_separators() {
        assert_eq!(Number::from_value_or_zero(&Value::from("1_000")), Number::Int(1000));
        assert_eq!(
            Number::from_value_or_zero(&Value::from("1_000.2_5")),
            Number::Float(1000.25)
        );
        assert_eq!(Number::from_value_or_zero(&Value::from("1__0")), Number::Int(0));
        assert_eq!(Number::from_value_or_zero(&Value::from("_1")), Number::Int(0));
        assert_eq!(Number::from_value_or_zero(&Value::from("1_")), Number::Int(0));
        assert_eq!(Number::from_value_or_zero(&Value::from("1_.5")), Number::Int(0));
    }

    #[test]
    fn test_from_value_other_kinds() {
        assert_eq!(Number::from_value_or_zero(&Value::from(7)), Number::Int(7));
        assert_eq!(Number::from_value_or_zero(&Value::from(2.0)), Number::Int(2));
        assert_eq!(Number::from_value_or_zero(&Value::from(true)), Number::Int(1));
        let callback = Value::from(Callback::new(|_, _| Ok(())));
        assert_eq!(Number::from_value_or_zero(&callback), Number::Int(0));
    }

    #[test]
    fn test_set_value_normalizes() {
        let mut element = NumericElement::new("volume", 1.5);
        assert_eq!(element.value(), Number::Float(1.5));
        element.set_value(4.0);
        assert_eq!(element.value(), Number::Int(4));
        assert_eq!(element.label(), "volume");
    }
}
