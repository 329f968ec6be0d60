use crate::cards::Rank;

/// Whether a hand contains a straight, and its top rank if so.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// Detect a straight among five ranks, in any input order.
    ///
    /// The wheel (A-2-3-4-5) counts as a straight whose top rank is Five,
    /// so it loses to every other straight.
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let mut sorted = *ranks;
        sorted.sort_by(|a, b| b.cmp(a));

        let runs_down = sorted.windows(2).all(|w| w[0].value() == w[1].value() + 1);
        if runs_down {
            return Self { is_straight: true, top_rank: Some(sorted[0]) };
        }

        // The ace plays low in exactly one pattern.
        if sorted == [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two] {
            return Self { is_straight: true, top_rank: Some(Rank::Five) };
        }

        Self { is_straight: false, top_rank: None }
    }
}
