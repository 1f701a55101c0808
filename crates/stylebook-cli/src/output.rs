//! Output modes and terminal styling.

use clap::ValueEnum;
use console::Style;

/// How command output is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Styled when stdout supports color, plain otherwise.
    #[default]
    Auto,
    /// Always styled.
    Term,
    /// Never styled.
    Text,
    /// Machine-readable JSON.
    Json,
}

impl OutputMode {
    pub fn is_json(self) -> bool {
        self == OutputMode::Json
    }

    pub fn should_use_color(self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::Json => false,
        }
    }
}

/// Styles for the human-readable output, applied only when color is on.
pub struct Palette {
    use_color: bool,
    heading: Style,
    name: Style,
    muted: Style,
    accent: Style,
}

impl Palette {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            use_color: mode.should_use_color(),
            heading: Style::new().bold().underlined(),
            name: Style::new().cyan().bold(),
            muted: Style::new().dim(),
            accent: Style::new().green(),
        }
    }

    pub fn heading(&self, text: &str) -> String {
        self.paint(&self.heading, text)
    }

    pub fn name(&self, text: &str) -> String {
        self.paint(&self.name, text)
    }

    pub fn muted(&self, text: &str) -> String {
        self.paint(&self.muted, text)
    }

    pub fn accent(&self, text: &str) -> String {
        self.paint(&self.accent, text)
    }

    fn paint(&self, style: &Style, text: &str) -> String {
        if self.use_color {
            style.clone().force_styling(true).apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }
}
