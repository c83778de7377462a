use crate::gesture::Offset;

pub const SWIPE_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Like,
    Pass,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Pass => "pass",
        }
    }

    pub fn sign(&self) -> f64 {
        match self {
            Self::Like => 1.0,
            Self::Pass => -1.0,
        }
    }
}

// Strict: a drag that stops exactly on the threshold resolves to nothing.
pub fn resolve(offset: Offset, threshold: f64) -> Option<Decision> {
    if offset.x > threshold {
        Some(Decision::Like)
    } else if offset.x < -threshold {
        Some(Decision::Pass)
    } else {
        None
    }
}

pub fn command_swipe(direction: Option<Decision>, exhausted: bool) -> Option<Decision> {
    if exhausted {
        return None;
    }
    direction
}
