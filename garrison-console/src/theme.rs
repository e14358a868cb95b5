use iced::{
    theme,
    widget::{button, container, text_input},
    Background, Border, Color, Shadow, Theme,
};

use garrison_model::Role;

/// Dark console theme with a steel-blue accent
#[derive(Debug, Clone, Copy)]
pub struct ConsoleTheme;

impl ConsoleTheme {
    // Core colors
    pub const BACKGROUND: Color = Color::from_rgb(0.05, 0.06, 0.08); // #0D0F14
    pub const ACCENT: Color = Color::from_rgb(0.25, 0.55, 0.95); // #408CF2
    pub const ACCENT_HOVER: Color = Color::from_rgb(0.35, 0.62, 1.0);

    // Grays
    pub const CARD_BG: Color = Color::from_rgb(0.1, 0.11, 0.14); // #1A1C24
    pub const CARD_HOVER: Color = Color::from_rgb(0.14, 0.15, 0.19);
    pub const BORDER_COLOR: Color = Color::from_rgb(0.2, 0.22, 0.27); // #333846

    // Text colors
    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.96, 0.96, 0.97);
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.72, 0.76);
    pub const TEXT_DIMMED: Color = Color::from_rgb(0.5, 0.52, 0.56);

    // Status colors
    pub const SUCCESS: Color = Color::from_rgb(0.0, 0.78, 0.45); // #00C773
    pub const ERROR: Color = Color::from_rgb(0.95, 0.3, 0.3); // #F24D4D
    pub const DESTRUCTIVE: Color = Color::from_rgb(0.85, 0.2, 0.25);
}

/// Application-wide iced theme.
pub fn console_theme() -> Theme {
    let mut palette = theme::Palette::DARK;
    palette.background = ConsoleTheme::BACKGROUND;
    palette.text = ConsoleTheme::TEXT_PRIMARY;
    palette.primary = ConsoleTheme::ACCENT;
    palette.success = ConsoleTheme::SUCCESS;
    palette.danger = ConsoleTheme::ERROR;

    Theme::custom("GarrisonConsole".to_string(), palette)
}

// Container styles using closures
#[derive(Debug, Clone, Copy)]
pub enum Container {
    Default,
    Card,
    StatCard,
    Modal,
    EmptyState,
    TableHeader,
}

impl Container {
    pub fn style(&self) -> fn(&Theme) -> container::Style {
        match self {
            Container::Default => |_| container::Style {
                text_color: Some(ConsoleTheme::TEXT_PRIMARY),
                background: Some(Background::Color(ConsoleTheme::BACKGROUND)),
                border: Border::default(),
                shadow: Shadow::default(),
            },
            Container::Card => |_| container::Style {
                text_color: Some(ConsoleTheme::TEXT_PRIMARY),
                background: Some(Background::Color(ConsoleTheme::CARD_BG)),
                border: Border {
                    color: ConsoleTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                shadow: Shadow::default(),
            },
            Container::StatCard => |_| container::Style {
                text_color: Some(ConsoleTheme::TEXT_PRIMARY),
                background: Some(Background::Color(ConsoleTheme::CARD_BG)),
                border: Border {
                    color: ConsoleTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 10.0.into(),
                },
                shadow: Shadow::default(),
            },
            Container::Modal => |_| container::Style {
                text_color: Some(ConsoleTheme::TEXT_PRIMARY),
                background: Some(Background::Color(ConsoleTheme::CARD_BG)),
                border: Border {
                    color: ConsoleTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 12.0.into(),
                },
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
                    offset: iced::Vector::new(0.0, 4.0),
                    blur_radius: 24.0,
                },
            },
            Container::EmptyState => |_| container::Style {
                text_color: Some(ConsoleTheme::TEXT_DIMMED),
                background: Some(Background::Color(ConsoleTheme::CARD_BG)),
                border: Border {
                    color: ConsoleTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                shadow: Shadow::default(),
            },
            Container::TableHeader => |_| container::Style {
                text_color: Some(ConsoleTheme::TEXT_SECONDARY),
                background: Some(Background::Color(ConsoleTheme::CARD_HOVER)),
                border: Border::default(),
                shadow: Shadow::default(),
            },
        }
    }
}

/// Badge background/text colors for a role; unknown codes use the plain
/// user scheme.
pub fn role_badge_colors(role: &Role) -> (Color, Color) {
    match role {
        Role::Admin => (
            Color::from_rgba(0.95, 0.3, 0.3, 0.2),
            Color::from_rgb(1.0, 0.55, 0.55),
        ),
        Role::BaseCommander => (
            Color::from_rgba(0.25, 0.55, 0.95, 0.2),
            Color::from_rgb(0.55, 0.75, 1.0),
        ),
        Role::LogisticsOfficer => (
            Color::from_rgba(0.0, 0.78, 0.45, 0.2),
            Color::from_rgb(0.4, 0.9, 0.65),
        ),
        Role::Analyst => (
            Color::from_rgba(0.65, 0.4, 0.95, 0.2),
            Color::from_rgb(0.8, 0.65, 1.0),
        ),
        Role::User | Role::Other(_) => (
            Color::from_rgba(0.6, 0.62, 0.66, 0.2),
            ConsoleTheme::TEXT_SECONDARY,
        ),
    }
}

/// Pill-shaped badge style for a role.
pub fn role_badge(role: &Role) -> impl Fn(&Theme) -> container::Style {
    let (background, text_color) = role_badge_colors(role);
    move |_theme| container::Style {
        text_color: Some(text_color),
        background: Some(Background::Color(background)),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 999.0.into(),
        },
        shadow: Shadow::default(),
    }
}

pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => ConsoleTheme::ACCENT_HOVER,
        button::Status::Disabled => ConsoleTheme::BORDER_COLOR,
        _ => ConsoleTheme::ACCENT,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: ConsoleTheme::TEXT_PRIMARY,
        border: Border {
            radius: 6.0.into(),
            ..Border::default()
        },
        shadow: Shadow::default(),
    }
}

pub fn secondary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => ConsoleTheme::CARD_HOVER,
        _ => ConsoleTheme::CARD_BG,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: ConsoleTheme::TEXT_SECONDARY,
        border: Border {
            color: ConsoleTheme::BORDER_COLOR,
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: Shadow::default(),
    }
}

pub fn destructive_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => ConsoleTheme::ERROR,
        button::Status::Disabled => ConsoleTheme::BORDER_COLOR,
        _ => ConsoleTheme::DESTRUCTIVE,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: ConsoleTheme::TEXT_PRIMARY,
        border: Border {
            radius: 6.0.into(),
            ..Border::default()
        },
        shadow: Shadow::default(),
    }
}

pub fn search_input(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border_color = match status {
        text_input::Status::Focused => ConsoleTheme::ACCENT,
        _ => ConsoleTheme::BORDER_COLOR,
    };
    text_input::Style {
        background: Background::Color(ConsoleTheme::CARD_BG),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 6.0.into(),
        },
        icon: ConsoleTheme::TEXT_DIMMED,
        placeholder: ConsoleTheme::TEXT_DIMMED,
        value: ConsoleTheme::TEXT_PRIMARY,
        selection: ConsoleTheme::ACCENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_role_uses_the_user_badge_scheme() {
        let unknown = Role::Other("quartermaster".to_string());
        assert_eq!(role_badge_colors(&unknown), role_badge_colors(&Role::User));
    }

    #[test]
    fn known_roles_have_distinct_badge_schemes() {
        let admin = role_badge_colors(&Role::Admin);
        let commander = role_badge_colors(&Role::BaseCommander);
        let logistics = role_badge_colors(&Role::LogisticsOfficer);
        assert_ne!(admin, commander);
        assert_ne!(commander, logistics);
    }
}
