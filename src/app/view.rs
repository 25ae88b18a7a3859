use super::messages::Message;
use super::state::{App, JobOutcome, PREVIEW_TEXT_SIZE_PX, PROGRESS_BAR_HEIGHT_PX};
use crate::annotation::{
    AnnotationStyle, FieldChange, Language, MAX_HINT_LEVEL, MIN_HINT_LEVEL, OutputFormat,
};
use crate::config::ThemeMode;
use crate::feedback::Severity;
use iced::widget::{
    Column, button, checkbox, column, container, horizontal_space, pick_list, progress_bar, row,
    scrollable, slider, text, text_input,
};
use iced::{Element, Length, Theme};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let idle = self.job.is_idle();
        let theme_label = match self.theme.current {
            ThemeMode::Dark => "Light Mode",
            ThemeMode::Light => "Dark Mode",
        };

        let header = row![
            text("Wordwise Studio").size(22.0),
            horizontal_space(),
            button("Resources").on_press(Message::OpenResourceFolder),
            button("Reload settings").on_press(Message::ReloadSettings),
            button(theme_label).on_press(Message::ToggleTheme),
        ]
        .spacing(8);

        let content = column![
            header,
            self.source_row(idle),
            self.option_controls(),
            self.job_controls(idle),
            self.work_message_view(),
            self.preview_panel(),
            self.settings_panel(),
        ]
        .spacing(14)
        .padding(16);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn source_row(&self, idle: bool) -> Element<'_, Message> {
        let path = text_input("Path to an EPUB, AZW3, MOBI or PDF", &self.store.current().source_path)
            .on_input(|value| Message::FieldChanged(FieldChange::SourcePath(value)))
            .width(Length::Fill);
        let choose = button("Choose book…").on_press_maybe(idle.then_some(Message::PickSource));
        row![path, choose].spacing(8).into()
    }

    fn option_controls(&self) -> Element<'_, Message> {
        let config = self.store.current();
        let pickers = row![
            text("Format"),
            pick_list(OutputFormat::ALL, Some(config.format), |format| {
                Message::FieldChanged(FieldChange::Format(format))
            }),
            text("Language"),
            pick_list(Language::ALL, Some(config.language), |language| {
                Message::FieldChanged(FieldChange::Language(language))
            }),
            text("Style"),
            pick_list(AnnotationStyle::ALL, Some(config.style), |style| {
                Message::FieldChanged(FieldChange::Style(style))
            }),
        ]
        .spacing(10);

        let hint = row![
            text(format!("Hint level {}", config.hint_level)).width(Length::Fixed(110.0)),
            slider(MIN_HINT_LEVEL..=MAX_HINT_LEVEL, config.hint_level, |level| {
                Message::FieldChanged(FieldChange::HintLevel(level))
            }),
        ]
        .spacing(10);

        let toggles = row![
            checkbox("Long definitions", config.allow_long_definition)
                .on_toggle(|on| Message::FieldChanged(FieldChange::AllowLongDefinition(on))),
            checkbox("Show phonemes", config.show_phoneme)
                .on_toggle(|on| Message::FieldChanged(FieldChange::ShowPhoneme(on))),
        ]
        .spacing(16);

        column![pickers, hint, toggles].spacing(10).into()
    }

    fn job_controls(&self, idle: bool) -> Element<'_, Message> {
        let label = if self.job.is_working() {
            "Working…"
        } else {
            "Start"
        };
        let start = button(label).on_press_maybe(idle.then_some(Message::StartJob));
        let progress = progress_bar(0.0..=100.0, f32::from(self.job.progress))
            .height(PROGRESS_BAR_HEIGHT_PX);
        let mut controls = row![start, progress, text(format!("{}%", self.job.progress))]
            .spacing(10)
            .align_y(iced::alignment::Vertical::Center);
        if self.tool_available == Some(false) {
            controls = controls.push(text("ebook-convert missing").size(12.0));
        }
        controls.into()
    }

    fn work_message_view(&self) -> Element<'_, Message> {
        let severity = self.work_message.severity;
        let message = text(self.work_message.text.as_str()).style(move |theme: &Theme| {
            text::Style {
                color: crate::theme::severity_color(theme, severity),
            }
        });
        let mut col = Column::new().push(message);
        let summary = match &self.job.last_outcome {
            Some(JobOutcome::Succeeded(done)) => Some(format!("Last run: {done}")),
            Some(JobOutcome::Failed(error)) => Some(format!("Last run failed: {error}")),
            None => None,
        };
        if let Some(summary) = summary.filter(|_| self.work_message.is_empty()) {
            col = col.push(text(summary).size(12.0));
        }
        col.into()
    }

    fn preview_panel(&self) -> Element<'_, Message> {
        let body = if self.preview.display_text.is_empty() {
            if self.preview.is_pending() {
                "Rendering preview…"
            } else {
                "No preview yet."
            }
        } else {
            self.preview.display_text.as_str()
        };
        let mut panel = column![
            text("Preview").size(18.0),
            scrollable(text(body).size(PREVIEW_TEXT_SIZE_PX)).height(Length::Fill),
        ]
        .spacing(6)
        .height(Length::Fill);
        if let Some(error) = &self.preview.last_error {
            panel = panel.push(
                text(format!("Preview not refreshed: {error}"))
                    .size(12.0)
                    .style(|theme: &Theme| text::Style {
                        color: crate::theme::severity_color(theme, Severity::Warning),
                    }),
            );
        }
        panel.into()
    }

    fn settings_panel(&self) -> Element<'_, Message> {
        if self.settings_text.is_empty() {
            return Column::new().into();
        }
        row![
            text("Stored settings").size(12.0),
            text(self.settings_text.as_str()).size(12.0),
        ]
        .spacing(8)
        .into()
    }
}
