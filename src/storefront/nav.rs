/// Mobile navigation drawer.
///
/// `aria-expanded` on the toggle and `hidden` on the drawer always agree;
/// both are derived from the single `open` flag.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NavDrawer {
    open: bool,
}

impl NavDrawer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    pub fn hidden(&self) -> bool {
        !self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Returns whether anything changed.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    pub fn on_close_button(&mut self) -> bool {
        self.close()
    }

    pub fn on_backdrop_click(&mut self) -> bool {
        self.close()
    }

    /// Keyboard handler; only Escape while open does anything.
    pub fn on_key(&mut self, key: &str) -> bool {
        key == "Escape" && self.close()
    }
}
