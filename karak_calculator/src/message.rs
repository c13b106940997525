// Copyright 2025 the Karak Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The light-hearted verdict shown under a result.

/// How a number of cups is described.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occasion {
    /// Zero cups.
    NotASip,
    /// Exactly one cup.
    SingleCup,
    /// Two to five cups.
    SmallGathering,
    /// Six to twenty cups.
    Family,
    /// Twenty-one to fifty cups.
    NeighborhoodParty,
    /// Fifty-one to a hundred cups.
    ChaiStall,
    /// More than a hundred cups.
    ChaiMogul,
}

impl Occasion {
    /// Classifies a number of cups.
    #[must_use]
    pub const fn for_cups(cups: u64) -> Self {
        match cups {
            0 => Self::NotASip,
            1 => Self::SingleCup,
            2..=5 => Self::SmallGathering,
            6..=20 => Self::Family,
            21..=50 => Self::NeighborhoodParty,
            51..=100 => Self::ChaiStall,
            _ => Self::ChaiMogul,
        }
    }

    /// The message for this occasion, emoji included.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NotASip => "Not even a sip! \u{1F605}",
            Self::SingleCup => "Just one cup - savor it! \u{2615}",
            Self::SmallGathering => "Perfect for a small gathering! \u{1FAD6}",
            Self::Family => {
                "Enough for the whole family! \u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}"
            }
            Self::NeighborhoodParty => "Time for a neighborhood chai party! \u{1F389}",
            Self::ChaiStall => "You could open a small chai stall! \u{1F3EA}",
            Self::ChaiMogul => "Congratulations, you're now a chai mogul! \u{1F451}",
        }
    }
}

/// The message for `cups`.
#[must_use]
pub const fn humorous_message(cups: u64) -> &'static str {
    Occasion::for_cups(cups).message()
}

#[cfg(test)]
mod tests {
    use super::{Occasion, humorous_message};

    #[test]
    fn tier_boundaries() {
        let cases = [
            (0, Occasion::NotASip),
            (1, Occasion::SingleCup),
            (2, Occasion::SmallGathering),
            (5, Occasion::SmallGathering),
            (6, Occasion::Family),
            (20, Occasion::Family),
            (21, Occasion::NeighborhoodParty),
            (50, Occasion::NeighborhoodParty),
            (51, Occasion::ChaiStall),
            (100, Occasion::ChaiStall),
            (101, Occasion::ChaiMogul),
            (u64::MAX, Occasion::ChaiMogul),
        ];
        for (cups, expected) in cases {
            assert_eq!(Occasion::for_cups(cups), expected, "{cups} cups");
        }
    }

    #[test]
    fn messages_read_as_on_the_page() {
        assert!(humorous_message(0).starts_with("Not even a sip!"));
        assert!(humorous_message(1).starts_with("Just one cup - savor it!"));
        assert!(humorous_message(10_000).starts_with("Congratulations, you're now a chai mogul!"));
    }
}
