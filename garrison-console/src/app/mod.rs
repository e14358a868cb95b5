use std::sync::Arc;

use iced::{Font, Settings};

use crate::{theme, update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Build and run the console application with the provided configuration.
pub fn run(config: AppConfig) -> iced::Result {
    let config = Arc::new(config);
    let boot_config = Arc::clone(&config);

    iced::application("Garrison Console", update::update, view::view)
        .settings(default_settings())
        .theme(|_state| theme::console_theme())
        .window(iced::window::Settings {
            size: iced::Size::new(1200.0, 800.0),
            resizable: true,
            decorations: true,
            ..Default::default()
        })
        .run_with(move || bootstrap::runtime_boot(&boot_config))
}

fn default_settings() -> Settings {
    Settings {
        id: Some("garrison-console".to_string()),
        default_font: Font::DEFAULT,
        antialiasing: true,
        ..Settings::default()
    }
}
