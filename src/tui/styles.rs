//! Color palette and styles for the assessment client.
//!
//! Colors chosen for:
//! - Calm, student-wellness appearance
//! - High contrast for accessibility
//! - Clear severity coding on outcomes

use ratatui::style::{Color, Modifier, Style};

/// Wellness theme color palette.
pub struct WellnessTheme;

impl WellnessTheme {
    // === Primary Colors ===

    /// Deep violet - Primary color
    pub const PRIMARY: Color = Color::Rgb(89, 46, 131); // #592E83

    /// Lighter violet for highlights
    pub const PRIMARY_LIGHT: Color = Color::Rgb(153, 132, 212); // #9984D4

    /// Darker violet for accents
    pub const PRIMARY_DARK: Color = Color::Rgb(35, 12, 51); // #230C33

    // === Secondary Colors ===

    /// Lavender - Secondary
    pub const SECONDARY: Color = Color::Rgb(202, 168, 245); // #CAA8F5

    /// Light slate for borders
    pub const SECONDARY_LIGHT: Color = Color::Rgb(148, 163, 184); // #94A3B8

    // === Semantic Colors ===

    /// Green - Success / acute (short-term) outcome
    pub const SUCCESS: Color = Color::Rgb(34, 197, 94); // #22C55E

    /// Orange - Warning / episodic outcome
    pub const WARNING: Color = Color::Rgb(249, 115, 22); // #F97316

    /// Red - Error / chronic outcome
    pub const DANGER: Color = Color::Rgb(239, 68, 68); // #EF4444

    /// Blue - Info
    pub const INFO: Color = Color::Rgb(59, 130, 246); // #3B82F6

    // === Text Colors ===

    /// Primary text (white)
    pub const TEXT_PRIMARY: Color = Color::Rgb(248, 250, 252); // #F8FAFC

    /// Secondary text (gray)
    pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184); // #94A3B8

    /// Muted text
    pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139); // #64748B

    // === Preset Styles ===

    /// Style for titles
    #[must_use]
    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for subtitles
    #[must_use]
    pub fn subtitle() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for normal text
    #[must_use]
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    /// Style for secondary text
    #[must_use]
    pub fn text_secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    /// Style for muted text
    #[must_use]
    pub fn text_muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    /// Style for success messages
    #[must_use]
    pub fn success() -> Style {
        Style::default().fg(Self::SUCCESS)
    }

    /// Style for warning messages
    #[must_use]
    pub fn warning() -> Style {
        Style::default().fg(Self::WARNING)
    }

    /// Style for danger/error messages
    #[must_use]
    pub fn danger() -> Style {
        Style::default().fg(Self::DANGER)
    }

    /// Style for info messages
    #[must_use]
    pub fn info() -> Style {
        Style::default().fg(Self::INFO)
    }

    /// Style for selected items
    #[must_use]
    pub fn selected() -> Style {
        Style::default()
            .fg(Self::PRIMARY_DARK)
            .bg(Self::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for focused elements
    #[must_use]
    pub fn focused() -> Style {
        Style::default()
            .fg(Self::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for borders
    #[must_use]
    pub fn border() -> Style {
        Style::default().fg(Self::SECONDARY_LIGHT)
    }

    /// Style for focused borders
    #[must_use]
    pub fn border_focused() -> Style {
        Style::default().fg(Self::PRIMARY_LIGHT)
    }

    /// Style for key hints
    #[must_use]
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    #[must_use]
    pub fn key_desc() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    /// Get stress class style
    #[must_use]
    pub fn stress_class(class: crate::domain::StressClass) -> Style {
        let (r, g, b) = class.color();
        Style::default().fg(Color::Rgb(r, g, b))
    }

    /// Get gauge style based on percentage (high is good)
    #[must_use]
    pub fn gauge(percentage: f64) -> Style {
        if percentage >= 0.7 {
            Self::success()
        } else if percentage >= 0.3 {
            Self::warning()
        } else {
            Self::danger()
        }
    }
}

/// Smaller inline logo
#[allow(dead_code)]
pub const LOGO_SMALL: &str = "Stresscast";
