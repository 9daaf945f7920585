mod callback;
mod factory;
mod numeric;
mod value;

pub use callback::CallbackElement;
pub use factory::{ElementFactory, ElementKind, ElementOptions, InvalidElementType};
pub use numeric::{Number, NumericElement};
pub use value::{Callback, Kwargs, Value};

use color_eyre::Result;

/// One selectable row of a list menu
#[derive(Debug, Clone, PartialEq)]
pub enum MenuElement {
    Callback(CallbackElement),
    Numeric(NumericElement),
}

impl MenuElement {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            MenuElement::Callback(element) => element.label(),
            MenuElement::Numeric(element) => element.label(),
        }
    }

    /// Triggers the element's behaviour; callback errors propagate
    pub fn activate(&self) -> Result<()> {
        match self {
            MenuElement::Callback(element) => element.activate(),
            MenuElement::Numeric(element) => {
                element.activate();
                Ok(())
            }
        }
    }

    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self {
            MenuElement::Callback(_) => ElementKind::Callback,
            MenuElement::Numeric(_) => ElementKind::Numeric,
        }
    }

    pub fn as_callback_mut(&mut self) -> Option<&mut CallbackElement> {
        match self {
            MenuElement::Callback(element) => Some(element),
            MenuElement::Numeric(_) => None,
        }
    }

    pub fn as_numeric_mut(&mut self) -> Option<&mut NumericElement> {
        match self {
            MenuElement::Numeric(element) => Some(element),
            MenuElement::Callback(_) => None,
        }
    }
}

impl From<CallbackElement> for MenuElement {
    fn from(element: CallbackElement) -> Self {
        MenuElement::Callback(element)
    }
}

impl From<NumericElement> for MenuElement {
    fn from(element: NumericElement) -> Self {
        MenuElement::Numeric(element)
    }
}
