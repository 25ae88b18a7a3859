mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::backend::Backends;
use crate::config::AppConfig;
use iced::{Size, window};

/// Launch the working screen with the given collaborators.
pub fn run_app(
    config: AppConfig,
    backends: Backends,
    initial_source: Option<String>,
) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        ..window::Settings::default()
    };

    iced::application("Wordwise Studio", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(App::theme)
        .run_with(move || App::bootstrap(config, backends, initial_source))
}
