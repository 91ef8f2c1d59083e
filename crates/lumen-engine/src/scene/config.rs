/// Canvas construction parameters.
#[derive(Debug, Clone)]
pub struct CanvasConfig {
    /// Number of requests the frame arena reserves up front.
    ///
    /// A regular level produces a few thousand requests per frame; reserving
    /// that much avoids growth during the first frames.
    pub initial_capacity: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self { initial_capacity: 4096 }
    }
}
