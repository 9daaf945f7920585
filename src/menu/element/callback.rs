use super::value::{Callback, Kwargs, Value};
use color_eyre::Result;

/// A menu element that triggers a callback on activation.
///
/// Elements built without a callback fall back to a handler that only
/// logs the element's label, so unwired entries stay visibly inert.
#[derive(Debug, Clone, PartialEq)]
pub struct CallbackElement {
    label: String,
    callback: Option<Callback>,
    args: Vec<Value>,
    kwargs: Kwargs,
}

impl CallbackElement {
    pub fn new(
        label: impl Into<String>,
        callback: Option<Callback>,
        args: Vec<Value>,
        kwargs: Kwargs,
    ) -> Self {
        Self {
            label: label.into(),
            callback,
            args,
            kwargs,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The attached callback, or `None` while the default handler is in use
    #[must_use]
    pub fn callback(&self) -> Option<&Callback> {
        self.callback.as_ref()
    }

    #[must_use]
    pub fn uses_default_handler(&self) -> bool {
        self.callback.is_none()
    }

    #[must_use]
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    #[must_use]
    pub fn kwargs(&self) -> &Kwargs {
        &self.kwargs
    }

    /// Calls the attached callback with the stored arguments
    pub fn activate(&self) -> Result<()> {
        match &self.callback {
            Some(callback) => callback.call(&self.args, &self.kwargs),
            None => {
                self.default_activation_handler();
                Ok(())
            }
        }
    }

    fn default_activation_handler(&self) {
        log::info!(
            "Default callback called for menu element with label {}",
            self.label
        );
    }

    pub fn set_callback(&mut self, callback: Callback) -> &mut Self {
        self.callback = Some(callback);
        self
    }

    pub fn set_args(&mut self, args: Vec<Value>) -> &mut Self {
        self.args = args;
        self
    }

    pub fn set_kwargs(&mut self, kwargs: Kwargs) -> &mut Self {
        self.kwargs = kwargs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_eyre::eyre::eyre;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Callback, Rc<RefCell<Vec<(Vec<Value>, Kwargs)>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let callback = Callback::new(move |args, kwargs| {
            sink.borrow_mut().push((args.to_vec(), kwargs.clone()));
            Ok(())
        });
        (callback, calls)
    }

    #[test]
    fn test_activate_without_callback_is_inert() {
        let element = CallbackElement::new("unwired", None, Vec::new(), Kwargs::new());
        assert!(element.uses_default_handler());
        assert!(element.activate().is_ok());
    }

    #[test]
    fn test_default_handler_logs_label() {
        let logs = crate::logging::capture_for_tests();
        let element = CallbackElement::new("unwired entry 7", None, Vec::new(), Kwargs::new());
        element.activate().unwrap();
        assert!(logs.recent(usize::MAX).contains(
            &"Default callback called for menu element with label unwired entry 7".to_string()
        ));
    }

    #[test]
    fn test_activate_forwards_args_and_kwargs() {
        let (callback, calls) = recorder();
        let mut kwargs = Kwargs::new();
        kwargs.insert("message".to_string(), Value::from("label 2 activated"));
        let element = CallbackElement::new("label 2", Some(callback), vec![Value::from(2)], kwargs);

        element.activate().unwrap();

        let calls = calls.borrow();
        assert_eq!(calls.len(), 1);
        let (args, kwargs) = &calls[0];
        assert_eq!(args, &vec![Value::from(2)]);
        assert_eq!(
            kwargs.get("message"),
            Some(&Value::from("label 2 activated"))
        );
    }

    #[test]
    fn test_fluent_setters_chain() {
        let (callback, calls) = recorder();
        let mut kwargs = Kwargs::new();
        kwargs.insert("message".to_string(), Value::from("label 1 activated"));

        let mut element = CallbackElement::new("label 1", None, Vec::new(), Kwargs::new());
        element
            .set_callback(callback.clone())
            .set_args(vec![Value::from(1)])
            .set_kwargs(kwargs.clone());

        assert_eq!(element.callback(), Some(&callback));
        assert_eq!(element.args(), &[Value::from(1)]);
        assert_eq!(element.kwargs(), &kwargs);

        element.activate().unwrap();
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_callback_error_propagates() {
        let failing = Callback::new(|_, _| Err(eyre!("boom")));
        let element = CallbackElement::new("bad", Some(failing), Vec::new(), Kwargs::new());
        let err = element.activate().unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }
}
