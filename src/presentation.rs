use crate::gesture::Offset;
use crate::swipe::Decision;

const ROTATION_PER_PIXEL: f64 = 0.1;
const EXIT_ROTATION_DEG: f64 = 30.0;
const EXIT_SCALE: f64 = 0.8;
const DRAG_SCALE: f64 = 0.95;
const OVERLAY_FULL_AT: f64 = 100.0;
const MAX_STACK_DEPTH: usize = 2;
pub const CARD_TRANSITION: &str = "all 0.3s cubic-bezier(0.175, 0.885, 0.32, 1.275)";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TranslateX {
    Pixels(f64),
    // multiples of the viewport width
    Viewports(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub translate_x: TranslateX,
    pub translate_y: f64,
    pub rotate_deg: f64,
    pub scale: f64,
    pub transition_enabled: bool,
}

impl CardTransform {
    pub fn to_style(&self) -> String {
        let translate = match self.translate_x {
            TranslateX::Pixels(x) => format!("translate({:.1}px, {:.1}px)", x, self.translate_y),
            TranslateX::Viewports(v) => format!("translateX({:.0}vw)", v * 100.0),
        };
        format!(
            "transform: {} rotate({:.2}deg) scale({}); transition: {};",
            translate,
            self.rotate_deg,
            self.scale,
            if self.transition_enabled {
                CARD_TRANSITION
            } else {
                "none"
            }
        )
    }
}

pub fn card_transform(
    offset: Offset,
    committed: Option<Decision>,
    is_dragging: bool,
) -> CardTransform {
    if let Some(decision) = committed {
        let sign = decision.sign();
        return CardTransform {
            translate_x: TranslateX::Viewports(sign),
            translate_y: 0.0,
            rotate_deg: sign * EXIT_ROTATION_DEG,
            scale: EXIT_SCALE,
            transition_enabled: true,
        };
    }

    CardTransform {
        translate_x: TranslateX::Pixels(offset.x),
        translate_y: offset.y,
        rotate_deg: offset.x * ROTATION_PER_PIXEL,
        scale: if is_dragging { DRAG_SCALE } else { 1.0 },
        transition_enabled: !is_dragging,
    }
}

pub fn overlay_opacity(offset_x: f64) -> f64 {
    (offset_x.abs() / OVERLAY_FULL_AT).min(1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Like,
    Nope,
}

impl Badge {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Like => "LIKE",
            Self::Nope => "NOPE",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Self::Like => "overlay like",
            Self::Nope => "overlay nope",
        }
    }
}

pub fn badge_for(offset_x: f64) -> Option<Badge> {
    if offset_x > 0.0 {
        Some(Badge::Like)
    } else if offset_x < 0.0 {
        Some(Badge::Nope)
    } else {
        None
    }
}

pub fn counter_label(position: usize, total: usize) -> String {
    format!("{} / {}", position + 1, total)
}

pub fn stack_depth(position: usize, total: usize) -> usize {
    total.saturating_sub(position + 1).min(MAX_STACK_DEPTH)
}

pub fn summary_line(liked: usize, total: usize) -> String {
    format!("You liked {liked} out of {total} cats")
}
