//! Render request model and input ranges.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::{BackgroundColor, TextColor};

/// Distance kept from the canvas edge for left/right alignment.
pub const EDGE_MARGIN: i32 = 10;

/// Horizontal text alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    pub const ALL: [Align; 3] = [Self::Left, Self::Center, Self::Right];

    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }

    /// Start offset of a run of length `len` inside `extent`.
    pub fn offset(self, extent: i32, len: i32) -> i32 {
        match self {
            Self::Left => EDGE_MARGIN,
            Self::Center => (extent - len).div_euclid(2),
            Self::Right => extent - len - EDGE_MARGIN,
        }
    }
}

/// Layout direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Self::Horizontal, Self::Vertical];

    pub fn name(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

/// Bounds and UI step of an integer input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntInput {
    pub default: u32,
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

pub const FONT_SIZE: IntInput = IntInput { default: 48, min: 8, max: 500, step: 1 };
pub const CANVAS_SIDE: IntInput = IntInput { default: 512, min: 64, max: 4096, step: 64 };
pub const OUTLINE_WIDTH: IntInput = IntInput { default: 0, min: 0, max: 20, step: 1 };

pub const DEFAULT_TEXT: &str = "Hello World";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RequestError {
    #[error("{field} = {value} is outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
}

/// Everything one render needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderRequest {
    pub text: String,
    /// Replace the text with its `"…"` substrings before layout.
    pub extract_double_quoted_text: bool,
    pub direction: Direction,
    pub font_size: u32,
    pub width: u32,
    pub height: u32,
    pub font_name: String,
    pub text_color: TextColor,
    pub bg_color: BackgroundColor,
    pub align: Align,
    pub outline_width: u32,
    pub outline_color: TextColor,
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            extract_double_quoted_text: false,
            direction: Direction::Horizontal,
            font_size: FONT_SIZE.default,
            width: CANVAS_SIDE.default,
            height: CANVAS_SIDE.default,
            font_name: textrender_fonts::DEFAULT_FONT_NAME.to_string(),
            text_color: TextColor::White,
            bg_color: BackgroundColor::Black,
            align: Align::Left,
            outline_width: OUTLINE_WIDTH.default,
            outline_color: TextColor::Black,
        }
    }
}

impl RenderRequest {
    /// Check the integer inputs against their ranges.
    pub fn validate(&self) -> Result<(), RequestError> {
        check("font_size", self.font_size, FONT_SIZE)?;
        check("width", self.width, CANVAS_SIDE)?;
        check("height", self.height, CANVAS_SIDE)?;
        check("outline_width", self.outline_width, OUTLINE_WIDTH)?;
        Ok(())
    }
}

fn check(field: &'static str, value: u32, input: IntInput) -> Result<(), RequestError> {
    if (input.min..=input.max).contains(&value) {
        Ok(())
    } else {
        Err(RequestError::OutOfRange {
            field,
            value,
            min: input.min,
            max: input.max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_offsets() {
        assert_eq!(Align::Left.offset(512, 100), 10);
        assert_eq!(Align::Center.offset(512, 100), 206);
        assert_eq!(Align::Right.offset(512, 100), 402);
    }

    #[test]
    fn test_center_offset_floors_on_overflow() {
        // Text wider than the canvas: (100 - 151) / 2 floors to -26.
        assert_eq!(Align::Center.offset(100, 151), -26);
        assert_eq!(Align::Right.offset(100, 151), -61);
    }

    #[test]
    fn test_default_request() {
        let request = RenderRequest::default();
        assert_eq!(request.text, "Hello World");
        assert_eq!(request.font_size, 48);
        assert_eq!((request.width, request.height), (512, 512));
        assert_eq!(request.font_name, "default");
        assert_eq!(request.direction, Direction::Horizontal);
        assert!(!request.extract_double_quoted_text);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let request: RenderRequest =
            serde_json::from_str(r#"{"text": "縦書き", "direction": "vertical", "align": "center"}"#)
                .unwrap();
        assert_eq!(request.text, "縦書き");
        assert_eq!(request.direction, Direction::Vertical);
        assert_eq!(request.align, Align::Center);
        assert_eq!(request.outline_color, TextColor::Black);
    }

    #[test]
    fn test_unknown_align_rejected() {
        assert!(serde_json::from_str::<RenderRequest>(r#"{"align": "justify"}"#).is_err());
        assert!(serde_json::from_str::<RenderRequest>(r#"{"direction": "diagonal"}"#).is_err());
    }

    #[test]
    fn test_validate_ranges() {
        let too_small = RenderRequest { font_size: 7, ..Default::default() };
        assert_eq!(
            too_small.validate(),
            Err(RequestError::OutOfRange { field: "font_size", value: 7, min: 8, max: 500 })
        );

        let too_wide = RenderRequest { width: 4097, ..Default::default() };
        assert!(matches!(
            too_wide.validate(),
            Err(RequestError::OutOfRange { field: "width", .. })
        ));

        let thick = RenderRequest { outline_width: 21, ..Default::default() };
        assert!(thick.validate().is_err());

        // Off-step sizes are accepted; the step is a UI hint.
        let odd = RenderRequest { width: 100, height: 4096, ..Default::default() };
        assert!(odd.validate().is_ok());
    }

    #[test]
    fn test_names() {
        assert_eq!(Align::ALL.map(Align::name), ["left", "center", "right"]);
        assert_eq!(Direction::ALL.map(Direction::name), ["horizontal", "vertical"]);
    }
}
