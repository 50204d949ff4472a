//! Level label styles

use colored::Colorize;
use std::fmt;
use tracing::Level;

/// How the level of a record is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LevelStyle {
    /// `info`
    Lowercase,
    /// `info`, colored on terminals
    #[default]
    LowercaseColor,
    /// `INFO`
    Capital,
    /// `INFO`, colored on terminals
    CapitalColor,
}

impl LevelStyle {
    /// Every style, in declaration order
    pub const ALL: [LevelStyle; 4] = [
        Self::Lowercase,
        Self::LowercaseColor,
        Self::Capital,
        Self::CapitalColor,
    ];

    /// Style for a configured name, if recognized
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.name() == name)
    }

    /// Style for a configured name, falling back to [`LevelStyle::LowercaseColor`]
    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            tracing::warn!(
                level_style = name,
                fallback = Self::default().name(),
                "Unknown level style, using fallback"
            );
            Self::default()
        })
    }

    /// Configuration name of this style
    pub fn name(&self) -> &'static str {
        match self {
            Self::Lowercase => "LowercaseLevelEncoder",
            Self::LowercaseColor => "LowercaseColorLevelEncoder",
            Self::Capital => "CapitalLevelEncoder",
            Self::CapitalColor => "CapitalColorLevelEncoder",
        }
    }

    /// Whether labels are colored when the writer supports it
    pub fn is_colored(&self) -> bool {
        matches!(self, Self::LowercaseColor | Self::CapitalColor)
    }

    /// Uncolored label for `level`
    pub fn label(&self, level: &Level) -> &'static str {
        let upper = level.as_str();
        if matches!(self, Self::Capital | Self::CapitalColor) {
            return upper;
        }
        match upper {
            "TRACE" => "trace",
            "DEBUG" => "debug",
            "INFO" => "info",
            "WARN" => "warn",
            _ => "error",
        }
    }

    /// Label for `level`, colored when `ansi` is set and the style asks for it
    pub fn render(&self, level: &Level, ansi: bool) -> String {
        let label = self.label(level);
        if !(ansi && self.is_colored()) {
            return label.to_string();
        }
        match *level {
            Level::ERROR => label.red(),
            Level::WARN => label.yellow(),
            Level::INFO => label.blue(),
            _ => label.magenta(),
        }
        .to_string()
    }
}

impl fmt::Display for LevelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
