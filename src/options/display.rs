use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Window and presentation settings.
pub struct DisplayOptions {
    /// Window title.
    pub title: String,
    /// Initial window width in logical pixels.
    pub width: u32,
    /// Initial window height in logical pixels.
    pub height: u32,
    /// Wait for vertical blank before presenting.
    pub vsync: bool,
    /// Multisample count for the 3D scene (1 disables MSAA).
    pub msaa_samples: u32,
    /// Frame-rate cap (0 = unlimited).
    pub target_fps: u32,
    /// Hide and lock the cursor to the window for mouse-look.
    pub grab_cursor: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            title: "vantage - 3d camera first person".into(),
            width: 1366,
            height: 768,
            vsync: true,
            msaa_samples: 4,
            target_fps: 0,
            grab_cursor: true,
        }
    }
}
