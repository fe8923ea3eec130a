use iced::{Element, Task, Theme};

use super::{
    AppState, Message,
    screens::{Screen, ScreenData, ScreenMessage, loading_page::LoadingPageScreen},
};
use crate::core::{ExplorerConfig, load_dataset};

pub struct ExplorerApp {
    state: AppState,
    screen: ScreenData,
}

impl ExplorerApp {
    /// Start on the loading page and kick off the one dataset fetch.
    pub fn boot(config: ExplorerConfig) -> (Self, Task<Message>) {
        let source = config.source();
        let fetch = Task::perform(async move { load_dataset(&source).await }, |result| {
            Message::DatasetLoaded(result.map_err(|e| format!("{e:#}")))
        });
        (
            Self {
                state: AppState::new(),
                screen: ScreenData::LoadingPage(LoadingPageScreen),
            },
            fetch,
        )
    }

    pub fn title(&self) -> String {
        "Country Explorer".to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(|msg| match msg {
                ScreenMessage::ScreenMessage(msg) => msg,
                ScreenMessage::ParentMessage(never) => match never {},
            })
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.screen.view(&self.state).map(|msg| match msg {
            ScreenMessage::ScreenMessage(msg) => msg,
            ScreenMessage::ParentMessage(never) => match never {},
        })
    }

    pub fn theme(&self) -> Theme {
        if self.state.explorer.dark_mode() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

pub fn run(config: ExplorerConfig) -> iced::Result {
    iced::application(
        move || ExplorerApp::boot(config.clone()),
        ExplorerApp::update,
        ExplorerApp::view,
    )
    .title(ExplorerApp::title)
    .theme(ExplorerApp::theme)
    .run()
}
