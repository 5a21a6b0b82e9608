//! Error types.

use crate::mesh::MeshError;

pub type RenderResult<T> = Result<T, RenderError>;

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("mesh error: {0}")]
    Mesh(#[from] MeshError),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid color '{0}': expected #RRGGBB or #RGB")]
    Color(String),

    #[error("window error: {0}")]
    Window(String),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

impl RenderError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn color(input: impl Into<String>) -> Self {
        Self::Color(input.into())
    }

    pub fn window(msg: impl Into<String>) -> Self {
        Self::Window(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(RenderError::config("x").to_string().contains("config error:"));
        assert!(RenderError::window("x").to_string().contains("window error:"));
        assert!(RenderError::color("#zz").to_string().contains("'#zz'"));
    }

    #[test]
    fn mesh_errors_convert() {
        let err: RenderError = MeshError::FaceTooShort { face: 2, len: 1 }.into();
        assert!(err.to_string().starts_with("mesh error:"));
    }
}
