mod base;
pub mod element;
mod navigation;

pub use base::MenuBase;
pub use navigation::Navigable;

use crate::config::Config;
use crate::display::Surface;
use color_eyre::Result;
use element::{
    Callback, CallbackElement, ElementFactory, ElementKind, ElementOptions, Kwargs, MenuElement,
    Value,
};
use ratatui::style::Color;
use std::fmt;

/// Narrowest surface a menu is expected to be drawn on
pub const DEFAULT_MINIMUM_WIDTH: u16 = 10;

const SELECTED_FG: Color = Color::Black;
const SELECTED_BG: Color = Color::White;

/// Construction-time settings of a [`ListMenu`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuSettings {
    pub start_active: bool,
    pub start_hidden: bool,
    pub minimum_width: u16,
    /// Report surface problems through the `log` facade while drawing
    pub debug_mode: bool,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            start_active: true,
            start_hidden: false,
            minimum_width: DEFAULT_MINIMUM_WIDTH,
            debug_mode: false,
        }
    }
}

impl From<&Config> for MenuSettings {
    fn from(config: &Config) -> Self {
        Self {
            minimum_width: config.draw.minimum_console_width,
            debug_mode: config.debug_mode,
            ..Self::default()
        }
    }
}

/// Non-fatal problems with the surface a menu is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageWarning {
    ConsoleTooNarrow { width: u16, minimum: u16 },
    ConsoleTooShort { height: u16, elements: usize },
}

impl fmt::Display for UsageWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageWarning::ConsoleTooNarrow { width, minimum } => write!(
                f,
                "minimum console width to draw menu is not met ({} < {})",
                width, minimum
            ),
            UsageWarning::ConsoleTooShort { height, elements } => write!(
                f,
                "console height cannot fit all elements ({} rows for {} elements)",
                height, elements
            ),
        }
    }
}

/// A vertical stack of selectable elements.
///
/// Element `i` is drawn on row `i` at column 0; the selected row is drawn
/// black on white. Selection wraps at both ends and only moves while the
/// menu is active.
#[derive(Debug, Clone, PartialEq)]
pub struct ListMenu<S> {
    base: MenuBase<S>,
    elements: Vec<MenuElement>,
    selected_index: usize,
    settings: MenuSettings,
}

impl<S> ListMenu<S> {
    pub fn new(surface: Option<S>, settings: MenuSettings) -> Self {
        Self {
            base: MenuBase::new(surface, settings.start_active, settings.start_hidden),
            elements: Vec::new(),
            selected_index: 0,
            settings,
        }
    }

    #[must_use]
    pub fn base(&self) -> &MenuBase<S> {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut MenuBase<S> {
        &mut self.base
    }

    #[must_use]
    pub fn settings(&self) -> &MenuSettings {
        &self.settings
    }

    pub fn set_active(&mut self, is_active: bool) {
        self.base.set_active(is_active);
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.base.is_active()
    }

    pub fn set_hidden(&mut self, is_hidden: bool) {
        self.base.set_hidden(is_hidden);
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.base.is_hidden()
    }

    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn elements(&self) -> &[MenuElement] {
        &self.elements
    }

    /// Index of the selected element, `None` when the menu is empty
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        (!self.elements.is_empty()).then_some(self.selected_index)
    }

    #[must_use]
    pub fn selected_element(&self) -> Option<&MenuElement> {
        self.elements.get(self.selected_index)
    }

    pub fn selected_element_mut(&mut self) -> Option<&mut MenuElement> {
        self.elements.get_mut(self.selected_index)
    }

    /// Selects the next element, wrapping to the first one.
    ///
    /// Inactive menus keep their selection.
    pub fn select_next(&mut self) -> Option<&MenuElement> {
        if self.is_active() {
            self.next_item();
            self.trace_selection("next");
        }
        self.selected_element()
    }

    /// Selects the previous element, wrapping to the last one.
    ///
    /// Inactive menus keep their selection.
    pub fn select_previous(&mut self) -> Option<&MenuElement> {
        if self.is_active() {
            self.previous_item();
            self.trace_selection("previous");
        }
        self.selected_element()
    }

    /// Activates the selected element, if any; callback errors propagate
    pub fn activate_selected(&self) -> Result<()> {
        match self.selected_element() {
            Some(element) => element.activate(),
            None => Ok(()),
        }
    }

    /// Appends an element. The selected index is left untouched.
    pub fn add_element(&mut self, element: impl Into<MenuElement>) {
        self.elements.push(element.into());
    }

    /// Builds a callback element, appends it and hands it back for chaining
    pub fn add_callback_element(
        &mut self,
        label: &str,
        callback: Option<Callback>,
        args: Vec<Value>,
        kwargs: Kwargs,
    ) -> Option<&mut CallbackElement> {
        let index = self.elements.len();
        self.elements.push(MenuElement::Callback(CallbackElement::new(
            label, callback, args, kwargs,
        )));
        self.elements
            .get_mut(index)
            .and_then(MenuElement::as_callback_mut)
    }

    /// Builds an element through the factory and appends it
    pub fn create_and_add_element(&mut self, kind: ElementKind, label: &str, options: ElementOptions) {
        self.add_element(ElementFactory::create(kind, label, options));
    }

    fn trace_selection(&self, direction: &str) {
        if self.settings.debug_mode {
            log::debug!(
                "menu selection moved {} to {:?}",
                direction,
                self.selected_element().map(MenuElement::label)
            );
        }
    }
}

impl<S: Surface> ListMenu<S> {
    /// Checks the attached surface against the menu's size needs
    #[must_use]
    pub fn check_surface(&self) -> Vec<UsageWarning> {
        let Some(surface) = self.base.surface() else {
            return Vec::new();
        };

        let mut warnings = Vec::new();
        if surface.width() < self.settings.minimum_width {
            warnings.push(UsageWarning::ConsoleTooNarrow {
                width: surface.width(),
                minimum: self.settings.minimum_width,
            });
        }
        if usize::from(surface.height()) < self.elements.len() {
            warnings.push(UsageWarning::ConsoleTooShort {
                height: surface.height(),
                elements: self.elements.len(),
            });
        }
        warnings
    }

    /// Prints every label on the attached surface.
    ///
    /// Hidden menus and menus without a surface draw nothing. Rows past
    /// the bottom of the surface are left to the surface to clip.
    pub fn draw(&mut self) {
        if self.is_hidden() {
            return;
        }

        if self.settings.debug_mode {
            for warning in self.check_surface() {
                log::warn!("Warning: {}", warning);
            }
        }

        let selected = self.selected_index;
        let Some(surface) = self.base.surface_mut() else {
            return;
        };

        for (row, element) in self.elements.iter().enumerate() {
            let Ok(y) = u16::try_from(row) else {
                break;
            };
            if row == selected {
                surface.print_text(0, y, element.label(), Some(SELECTED_FG), Some(SELECTED_BG));
            } else {
                surface.print_text(0, y, element.label(), None, None);
            }
        }
    }
}

impl<S> Navigable for ListMenu<S> {
    fn item_count(&self) -> usize {
        self.elements.len()
    }

    fn selected_position(&self) -> usize {
        self.selected_index
    }

    fn set_selected_position(&mut self, index: usize) {
        self.selected_index = index;
    }
}
