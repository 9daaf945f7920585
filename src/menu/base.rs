/// State shared by every menu: the surface it draws on and its two
/// independent flags.
///
/// An inactive menu refuses navigation, a hidden menu skips drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuBase<S> {
    surface: Option<S>,
    active: bool,
    hidden: bool,
}

impl<S> MenuBase<S> {
    pub fn new(surface: Option<S>, start_active: bool, start_hidden: bool) -> Self {
        Self {
            surface,
            active: start_active,
            hidden: start_hidden,
        }
    }

    pub fn set_active(&mut self, is_active: bool) {
        self.active = is_active;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_hidden(&mut self, is_hidden: bool) {
        self.hidden = is_hidden;
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_surface(&mut self, surface: S) {
        self.surface = Some(surface);
    }

    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn take_surface(&mut self) -> Option<S> {
        self.surface.take()
    }
}
