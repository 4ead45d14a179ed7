//! Projection of a `ProctorResult` into drawable annotation primitives.
//!
//! Produces data only — colored text labels with normalized positions —
//! for an external overlay renderer. Positions, font sizes, and colors
//! are calibrated for a standard proctoring overlay layout: blink
//! labels above each eye, alignment labels along the top edge.

use crate::pipeline::proctor_result::ProctorResult;
use crate::signals::domain::alignment_detector::{AlignmentSignal, GazeHorizontal, GazeVertical};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const GREEN: Color = Color { r: 0, g: 255, b: 0 };
pub const RED: Color = Color { r: 255, g: 0, b: 0 };

/// One text label; `left` and `baseline` are normalized to [0, 1].
#[derive(Clone, Debug, PartialEq)]
pub struct TextAnnotation {
    pub text: String,
    pub color: Color,
    pub thickness: f64,
    pub font_height: f64,
    pub left: f64,
    pub baseline: f64,
}

const BLINK_LEFT_POS: f64 = 0.08;
const BLINK_RIGHT_POS: f64 = 0.64;
const BLINK_BASELINE: f64 = 0.25;
const BLINK_FONT_HEIGHT: f64 = 0.03;
const BLINK_THICKNESS: f64 = 3.0;

const ALIGN_HORIZONTAL_POS: f64 = 0.05;
const ALIGN_VERTICAL_POS: f64 = 0.6;
const ALIGN_BASELINE: f64 = 0.2;
const ALIGN_FONT_HEIGHT: f64 = 0.04;
const ALIGN_THICKNESS: f64 = 4.0;

fn blink_annotation(is_blinking: bool, left: f64) -> TextAnnotation {
    TextAnnotation {
        text: if is_blinking { "Blink".to_string() } else { String::new() },
        color: if is_blinking { RED } else { GREEN },
        thickness: BLINK_THICKNESS,
        font_height: BLINK_FONT_HEIGHT,
        left,
        baseline: BLINK_BASELINE,
    }
}

fn alignment_annotation(label: &str, left: f64) -> TextAnnotation {
    TextAnnotation {
        text: label.to_string(),
        color: if label == "Neutral" { GREEN } else { RED },
        thickness: ALIGN_THICKNESS,
        font_height: ALIGN_FONT_HEIGHT,
        left,
        baseline: ALIGN_BASELINE,
    }
}

/// Maps one result into its four overlay labels: left blink, right
/// blink, horizontal alignment, vertical alignment.
pub fn project(result: &ProctorResult) -> Vec<TextAnnotation> {
    let alignment = AlignmentSignal {
        horizontal: result.horizontal_align,
        vertical: result.vertical_align,
    };

    vec![
        blink_annotation(result.is_left_eye_blinking, BLINK_LEFT_POS),
        blink_annotation(result.is_right_eye_blinking, BLINK_RIGHT_POS),
        alignment_annotation(
            alignment.horizontal_direction().label(),
            ALIGN_HORIZONTAL_POS,
        ),
        alignment_annotation(alignment.vertical_direction().label(), ALIGN_VERTICAL_POS),
    ]
}

/// Direction classification shorthand used by decision consumers that
/// want the labels without building annotations.
pub fn gaze_directions(result: &ProctorResult) -> (GazeHorizontal, GazeVertical) {
    let alignment = AlignmentSignal {
        horizontal: result.horizontal_align,
        vertical: result.vertical_align,
    };
    (
        alignment.horizontal_direction(),
        alignment.vertical_direction(),
    )
}
