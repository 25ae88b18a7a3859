mod reducer;
mod runtime;

use super::super::messages::Message;
use super::super::state::{App, SIGNAL_POLL_INTERVAL_MS};
use iced::time;
use iced::{Subscription, Task};
use std::time::Duration;

impl App {
    pub fn subscription(app: &App) -> Subscription<Message> {
        let mut subscriptions: Vec<Subscription<Message>> = vec![
            time::every(Duration::from_millis(SIGNAL_POLL_INTERVAL_MS))
                .map(|_| Message::PollSystemSignals),
        ];

        if let Some(interval) = app.config.system_theme_poll_interval() {
            subscriptions.push(time::every(interval).map(|_| Message::PollSystemTheme));
        }

        Subscription::batch(subscriptions)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }
}
