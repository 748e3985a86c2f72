//! Window region for hit testing

/// Region of a window for hit testing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowRegion {
    /// Title bar area (for dragging)
    TitleBar,
    /// Close button at the right end of the title bar
    CloseButton,
    /// Bottom-right corner handle
    ResizeHandle,
    /// Content area (forwarded to the hosted app)
    Content,
}

impl WindowRegion {
    /// Get CSS cursor style for this region
    pub fn cursor(&self) -> &'static str {
        match self {
            WindowRegion::TitleBar => "move",
            WindowRegion::CloseButton => "pointer",
            WindowRegion::ResizeHandle => "se-resize",
            WindowRegion::Content => "default",
        }
    }
}
