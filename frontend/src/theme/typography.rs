//! Typography descriptor carried alongside the color scheme.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Typography {
    pub font_family: &'static str,
    pub body_size_px: u16,
    pub title_size_px: u16,
}

pub const DEFAULT_TYPOGRAPHY: Typography = Typography {
    font_family: "system-ui, sans-serif",
    body_size_px: 16,
    title_size_px: 22,
};

impl Default for Typography {
    fn default() -> Self {
        DEFAULT_TYPOGRAPHY
    }
}

impl Typography {
    pub fn body_css(&self) -> String {
        format!("font-family: {}; font-size: {}px;", self.font_family, self.body_size_px)
    }
}
