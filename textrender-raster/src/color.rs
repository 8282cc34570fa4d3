//! Closed color palette for text, outline and background.

use image::Rgba;
use serde::{Deserialize, Serialize};

/// Colors accepted for text and outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    White,
    Black,
    Red,
    Blue,
    Green,
    Yellow,
    Cyan,
    Magenta,
}

impl TextColor {
    /// Choice order for the text color input.
    pub const ALL: [TextColor; 8] = [
        Self::White,
        Self::Black,
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Yellow,
        Self::Cyan,
        Self::Magenta,
    ];

    /// Choice order for the outline color input (black leads).
    pub const OUTLINE_ORDER: [TextColor; 8] = [
        Self::Black,
        Self::White,
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Yellow,
        Self::Cyan,
        Self::Magenta,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Cyan => "cyan",
            Self::Magenta => "magenta",
        }
    }

    pub fn rgba(self) -> Rgba<u8> {
        match self {
            Self::White => Rgba([255, 255, 255, 255]),
            Self::Black => Rgba([0, 0, 0, 255]),
            Self::Red => Rgba([255, 0, 0, 255]),
            Self::Blue => Rgba([0, 0, 255, 255]),
            Self::Green => Rgba([0, 255, 0, 255]),
            Self::Yellow => Rgba([255, 255, 0, 255]),
            Self::Cyan => Rgba([0, 255, 255, 255]),
            Self::Magenta => Rgba([255, 0, 255, 255]),
        }
    }
}

/// Colors accepted for the canvas background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundColor {
    Black,
    White,
    Transparent,
    Red,
    Blue,
    Green,
    Gray,
}

impl BackgroundColor {
    pub const ALL: [BackgroundColor; 7] = [
        Self::Black,
        Self::White,
        Self::Transparent,
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Gray,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
            Self::Transparent => "transparent",
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Gray => "gray",
        }
    }

    /// Fill color; only `Transparent` has alpha 0.
    pub fn rgba(self) -> Rgba<u8> {
        match self {
            Self::Black => Rgba([0, 0, 0, 255]),
            Self::White => Rgba([255, 255, 255, 255]),
            Self::Transparent => Rgba([0, 0, 0, 0]),
            Self::Red => Rgba([255, 0, 0, 255]),
            Self::Blue => Rgba([0, 0, 255, 255]),
            Self::Green => Rgba([0, 255, 0, 255]),
            Self::Gray => Rgba([128, 128, 128, 255]),
        }
    }
}
