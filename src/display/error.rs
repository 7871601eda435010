#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("SDL initialisation failed: {0}")]
    Init(String),

    #[error("Window creation failed: {0}")]
    Window(String),

    #[error("Renderer creation failed: {0}")]
    Renderer(String),

    #[error("Texture error: {0}")]
    Texture(String),

    #[error("Present failed: {0}")]
    Present(String),

    #[error("Invalid screen size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
