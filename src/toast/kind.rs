use egui::Color32;
use egui_phosphor::regular;
use serde::{Deserialize, Serialize};

use super::error::ToastError;

/// Toast notification kind, selects the icon and accent color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum ToastKind {
    #[default]
    None,
    Success,
    Warning,
    Error,
    Info,
}

impl ToastKind {
    /// All kinds in declaration order
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Success,
        Self::Warning,
        Self::Error,
        Self::Info,
    ];

    /// Icon glyph drawn in front of the toast text, `None` for plain toasts
    pub fn icon(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Success => Some(regular::CHECK_CIRCLE),
            Self::Warning => Some(regular::WARNING),
            Self::Error => Some(regular::X_CIRCLE),
            Self::Info => Some(regular::INFO),
        }
    }

    /// Accent color for the icon
    pub fn color(self) -> Option<Color32> {
        match self {
            Self::None => None,
            Self::Success => Some(Color32::from_rgb(80, 200, 120)),
            Self::Warning => Some(Color32::GOLD),
            Self::Error => Some(Color32::from_rgb(230, 80, 80)),
            Self::Info => Some(Color32::from_rgb(100, 160, 240)),
        }
    }

    /// Display name used by the demo combo box
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Info => "Info",
        }
    }
}

impl TryFrom<u8> for ToastKind {
    type Error = ToastError;

    // Raw values outside the enum are rejected rather than shown as info.
    fn try_from(value: u8) -> Result<Self, ToastError> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(ToastError::UnknownKind(value))
    }
}
