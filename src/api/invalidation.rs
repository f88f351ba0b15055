use serde::{Deserialize, Serialize};

/// State change that requires the host to schedule a redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RedrawTopic {
    Series,
    XInterval,
    YInterval,
    Viewport,
}

impl RedrawTopic {
    const fn bit(self) -> u8 {
        match self {
            Self::Series => 1 << 0,
            Self::XInterval => 1 << 1,
            Self::YInterval => 1 << 2,
            Self::Viewport => 1 << 3,
        }
    }
}

/// Bitmask of pending redraw topics.
///
/// Setters on the renderer raise topics; the host drains them after each
/// mutation batch and requests a repaint from its windowing system. This
/// keeps mutation explicit instead of hiding redraw side effects in field
/// assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RedrawRequest {
    bits: u8,
}

impl RedrawRequest {
    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn from_topic(topic: RedrawTopic) -> Self {
        Self { bits: topic.bit() }
    }

    #[must_use]
    pub const fn with_topic(self, topic: RedrawTopic) -> Self {
        Self {
            bits: self.bits | topic.bit(),
        }
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    #[must_use]
    pub const fn contains(self, topic: RedrawTopic) -> bool {
        (self.bits & topic.bit()) != 0
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.bits == 0
    }
}
