use color_eyre::Result;
use crossterm::event::KeyCode;
use gridmenu::config::{Config, WindowConfig};
use gridmenu::logging::LogBuffer;
use gridmenu::{
    Callback, Canvas, ElementFactory, ElementKind, ElementOptions, Kwargs, ListMenu, MenuSettings,
    Value,
};
use std::fmt;

/// Raised by the quit entry to ask the event loop to stop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitRequested;

impl fmt::Display for ExitRequested {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("exit requested")
    }
}

impl std::error::Error for ExitRequested {}

fn log_message(kwargs: &Kwargs) {
    if let Some(message) = kwargs.get("message") {
        log::info!("{}", message);
    }
}

/// Callback implementations
pub fn cmd_printout() -> Callback {
    Callback::new(|_, kwargs| {
        log_message(kwargs);
        Ok(())
    })
}

pub fn cmd_exit() -> Callback {
    Callback::new(|_, kwargs| {
        log_message(kwargs);
        Err(ExitRequested.into())
    })
}

fn message(text: &str) -> Kwargs {
    let mut kwargs = Kwargs::new();
    kwargs.insert("message".to_string(), Value::from(text));
    kwargs
}

/// Demo application state
pub struct App {
    pub menu: ListMenu<Canvas>,
    pub logs: LogBuffer,
    pub window: WindowConfig,
    pub debug_mode: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config, logs: LogBuffer) -> Self {
        let window = config.window.clone();
        let canvas = Canvas::new(window.menu_width, window.menu_height);
        let mut menu = ListMenu::new(Some(canvas), MenuSettings::from(config));

        if let Some(element) = menu.add_callback_element("label 1", None, Vec::new(), Kwargs::new()) {
            element
                .set_callback(cmd_printout())
                .set_kwargs(message("label 1 activated"));
        }
        menu.add_callback_element(
            "label 2",
            Some(cmd_printout()),
            vec![Value::from(2)],
            message("label 2 activated"),
        );
        menu.add_element(ElementFactory::create(
            ElementKind::Numeric,
            "volume",
            ElementOptions::new().with_initial_value("7.5"),
        ));
        if let Some(element) = menu.add_callback_element("quit", None, Vec::new(), Kwargs::new()) {
            element
                .set_callback(cmd_exit())
                .set_kwargs(message("Exiting normally"));
        }
        menu.set_active(true);

        Self {
            menu,
            logs,
            window,
            debug_mode: config.debug_mode,
            should_quit: false,
        }
    }

    /// Clears the menu console and draws the menu onto it
    pub fn redraw_menu(&mut self) {
        if let Some(canvas) = self.menu.base_mut().surface_mut() {
            canvas.clear();
        }
        self.menu.draw();
    }

    #[must_use]
    pub fn canvas(&self) -> Option<&Canvas> {
        self.menu.base().surface()
    }

    /// Runs the selected element; a requested exit ends the loop, any
    /// other callback error is handed back to the caller
    pub fn activate(&mut self) -> Result<()> {
        match self.menu.activate_selected() {
            Ok(()) => Ok(()),
            Err(err) if err.downcast_ref::<ExitRequested>().is_some() => {
                self.should_quit = true;
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}

pub fn handle_key(app: &mut App, key: KeyCode) -> Result<()> {
    match key {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Up => {
            if app.debug_mode {
                log::debug!("up");
            }
            app.menu.select_previous();
        }
        KeyCode::Down => {
            if app.debug_mode {
                log::debug!("down");
            }
            app.menu.select_next();
        }
        KeyCode::Enter => app.activate()?,
        _ => {}
    }
    Ok(())
}
