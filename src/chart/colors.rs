//! Color themes for charts

/// Palette shared by the flow chart and the panel charts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    /// Plot area behind the bands
    pub card: &'static str,
    pub text: &'static str,
    /// Axis ticks, connectors and secondary labels
    pub muted: &'static str,
    pub grid: &'static str,
    pub advance_top: &'static str,
    pub advance_bottom: &'static str,
    pub retreat_top: &'static str,
    pub retreat_bottom: &'static str,
    pub temperature: &'static str,
    /// City labels and headings
    pub accent: &'static str,
}

/// Dark ink-and-gold palette
pub const MANUSCRIPT: Theme = Theme {
    name: "manuscript",
    background: "#161009", // Deep brown
    card: "#251e14",       // Card brown
    text: "#e8dcc0",       // Paper white
    muted: "#a89878",      // Faded ink
    grid: "#3a2f20",       // Rule lines
    advance_top: "#d4af6a",    // Tan
    advance_bottom: "#b8922a", // Dark tan
    retreat_top: "#8a5030",    // Light umber
    retreat_bottom: "#6b3a1f", // Umber
    temperature: "#6a9fd8",    // Frost blue
    accent: "#c9a84c",         // Gold
};

/// Light paper palette for print
pub const PARCHMENT: Theme = Theme {
    name: "parchment",
    background: "#f4ecd8", // Parchment
    card: "#ebe0c5",       // Aged paper
    text: "#2b2118",       // Iron-gall ink
    muted: "#6e5f48",      // Faded ink
    grid: "#d8c9a6",       // Rule lines
    advance_top: "#d9b77a",    // Straw
    advance_bottom: "#b8922a", // Dark tan
    retreat_top: "#5c3a22",    // Sepia
    retreat_bottom: "#3a2414", // Dark sepia
    temperature: "#3f6fb5",    // Ink blue
    accent: "#8a6e30",         // Dim gold
};

pub const THEMES: [Theme; 2] = [MANUSCRIPT, PARCHMENT];

impl Default for Theme {
    fn default() -> Self {
        MANUSCRIPT
    }
}

impl Theme {
    pub fn by_name(name: &str) -> Option<Theme> {
        THEMES.into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }
}
