use serde::{Deserialize, Serialize};

use crate::math::Size;

/// Kind of application hosted by a window
///
/// The kind selects the content renderer and the default window size used
/// when a window is opened without an explicit size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationKind {
    Folder,
    Text,
    Whiteboard,
    #[serde(rename = "DEVTOOLS")]
    DevTools,
    FileExplorer,
    #[default]
    TextEditor,
    ImageViewer,
    Terminal,
    Settings,
    Browser,
    Calculator,
    AudioPlayer,
    MultiplayerSettings,
    #[serde(rename = "custom")]
    Custom,
}

impl ApplicationKind {
    /// Get all application kinds
    pub fn all() -> &'static [ApplicationKind] {
        &[
            ApplicationKind::Folder,
            ApplicationKind::Text,
            ApplicationKind::Whiteboard,
            ApplicationKind::DevTools,
            ApplicationKind::FileExplorer,
            ApplicationKind::TextEditor,
            ApplicationKind::ImageViewer,
            ApplicationKind::Terminal,
            ApplicationKind::Settings,
            ApplicationKind::Browser,
            ApplicationKind::Calculator,
            ApplicationKind::AudioPlayer,
            ApplicationKind::MultiplayerSettings,
            ApplicationKind::Custom,
        ]
    }

    /// Get the string ID used on the wire (e.g. "TEXT_EDITOR")
    pub fn id(&self) -> &'static str {
        match self {
            ApplicationKind::Folder => "FOLDER",
            ApplicationKind::Text => "TEXT",
            ApplicationKind::Whiteboard => "WHITEBOARD",
            ApplicationKind::DevTools => "DEVTOOLS",
            ApplicationKind::FileExplorer => "FILE_EXPLORER",
            ApplicationKind::TextEditor => "TEXT_EDITOR",
            ApplicationKind::ImageViewer => "IMAGE_VIEWER",
            ApplicationKind::Terminal => "TERMINAL",
            ApplicationKind::Settings => "SETTINGS",
            ApplicationKind::Browser => "BROWSER",
            ApplicationKind::Calculator => "CALCULATOR",
            ApplicationKind::AudioPlayer => "AUDIO_PLAYER",
            ApplicationKind::MultiplayerSettings => "MULTIPLAYER_SETTINGS",
            ApplicationKind::Custom => "custom",
        }
    }

    /// Parse from string ID
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|kind| kind.id() == id)
    }

    /// Pick the application that opens a file, by extension
    ///
    /// Unknown or missing extensions open in the text editor.
    pub fn for_file(filename: &str) -> Self {
        let lower = filename.to_lowercase();
        let extension = lower.rsplit('.').next().unwrap_or_default();
        match extension {
            "txt" | "md" => ApplicationKind::TextEditor,
            "png" | "jpg" | "jpeg" | "gif" => ApplicationKind::ImageViewer,
            "html" | "url" => ApplicationKind::Browser,
            "excalidraw" => ApplicationKind::Whiteboard,
            _ => ApplicationKind::TextEditor,
        }
    }
}

/// Source of per-kind window defaults
///
/// Implemented by the host application; the window manager only asks it
/// for sizes and names.
pub trait AppRegistry {
    /// Size used when a window is opened without one
    fn default_size(&self, kind: ApplicationKind) -> Size;

    /// Human-readable application name
    fn display_name(&self, kind: ApplicationKind) -> &str;
}

/// Registry with the built-in desktop applications
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinRegistry;

impl AppRegistry for BuiltinRegistry {
    fn default_size(&self, kind: ApplicationKind) -> Size {
        match kind {
            ApplicationKind::Whiteboard | ApplicationKind::DevTools | ApplicationKind::Browser => {
                Size::new(800.0, 600.0)
            }
            ApplicationKind::Settings
            | ApplicationKind::MultiplayerSettings
            | ApplicationKind::Custom => Size::new(500.0, 600.0),
            ApplicationKind::Calculator => Size::new(300.0, 400.0),
            ApplicationKind::AudioPlayer => Size::new(350.0, 450.0),
            ApplicationKind::Folder
            | ApplicationKind::Text
            | ApplicationKind::FileExplorer
            | ApplicationKind::TextEditor
            | ApplicationKind::ImageViewer
            | ApplicationKind::Terminal => Size::new(600.0, 400.0),
        }
    }

    fn display_name(&self, kind: ApplicationKind) -> &str {
        match kind {
            ApplicationKind::Folder => "Folder",
            ApplicationKind::Text | ApplicationKind::TextEditor => "Text Editor",
            ApplicationKind::Whiteboard => "Whiteboard",
            ApplicationKind::DevTools => "DevTools",
            ApplicationKind::FileExplorer => "File Explorer",
            ApplicationKind::ImageViewer => "Image Viewer",
            ApplicationKind::Terminal => "Terminal",
            ApplicationKind::Settings => "Settings",
            ApplicationKind::Browser => "Browser",
            ApplicationKind::Calculator => "Calculator",
            ApplicationKind::AudioPlayer => "Audio Player",
            ApplicationKind::MultiplayerSettings => "Multiplayer Settings",
            ApplicationKind::Custom => "Custom Application",
        }
    }
}
