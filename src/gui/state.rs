use crate::core::Explorer;

#[derive(Debug, Default)]
pub struct AppState {
    pub explorer: Explorer,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
