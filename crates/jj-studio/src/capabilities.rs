//! View capability system
//!
//! Views declare what kind of keyboard input they accept. The keyboard
//! middleware routes keys by these flags instead of by concrete view type.

use bitflags::bitflags;

bitflags! {
    /// Capabilities that a view can declare
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PanelCapabilities: u32 {
        /// View consumes printable characters as text (path entry)
        const TEXT_INPUT = 1 << 0;

        /// View supports vim-style navigation keybindings (j, k, gg, G)
        const VIM_NAVIGATION_BINDINGS = 1 << 1;
    }
}

impl PanelCapabilities {
    /// Check if view wants raw characters instead of keymap commands
    pub fn accepts_text_input(self) -> bool {
        self.contains(Self::TEXT_INPUT)
    }

    /// Check if view supports vim-style navigation
    pub fn supports_vim_navigation(self) -> bool {
        self.contains(Self::VIM_NAVIGATION_BINDINGS)
    }
}

impl Default for PanelCapabilities {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_accepts_nothing() {
        let caps = PanelCapabilities::default();
        assert!(!caps.accepts_text_input());
        assert!(!caps.supports_vim_navigation());
    }

    #[test]
    fn test_combined_flags() {
        let caps = PanelCapabilities::TEXT_INPUT | PanelCapabilities::VIM_NAVIGATION_BINDINGS;
        assert!(caps.accepts_text_input());
        assert!(caps.supports_vim_navigation());
    }
}
