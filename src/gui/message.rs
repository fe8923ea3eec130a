use crate::gui::screens::{
    ScreenMessage, explorer_page::ExplorerPageScreen, loading_page::LoadingPageScreen,
};
use crate::models::Country;

#[derive(Debug, Clone)]
pub enum Message {
    LoadingPage(ScreenMessage<LoadingPageScreen>),
    ExplorerPage(ScreenMessage<ExplorerPageScreen>),
    /// Outcome of the startup fetch; the error is already rendered to text.
    DatasetLoaded(Result<Vec<Country>, String>),
}
