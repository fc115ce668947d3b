use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ThemeRequest {
    pub dark: bool,
}
