use crate::cards::Rank;

/// Ranks grouped by their multiplicity in a hand, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Group the given ranks by multiplicity. Input order does not matter.
    pub fn from_ranks(ranks: &[Rank]) -> Self {
        let mut groups: Vec<(Rank, u8)> = Vec::with_capacity(ranks.len());
        for &rank in ranks {
            match groups.iter_mut().find(|(r, _)| *r == rank) {
                Some((_, count)) => *count += 1,
                None => groups.push((rank, 1)),
            }
        }

        // Biggest group first; ties broken by the higher rank.
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    /// Returns the rank of a four-of-a-kind, if present.
    pub fn quad(&self) -> Option<Rank> {
        self.groups.iter().find(|(_, count)| *count == 4).map(|(rank, _)| *rank)
    }

    /// Returns the rank of a three-of-a-kind, if present.
    pub fn trips(&self) -> Option<Rank> {
        self.groups.iter().find(|(_, count)| *count == 3).map(|(rank, _)| *rank)
    }

    /// Returns all pair ranks, in descending order.
    pub fn pairs(&self) -> Vec<Rank> {
        self.groups.iter().filter(|(_, count)| *count == 2).map(|(rank, _)| *rank).collect()
    }

    /// Returns all singleton (kicker) ranks, in descending order.
    pub fn kickers(&self) -> Vec<Rank> {
        self.groups.iter().filter(|(_, count)| *count == 1).map(|(rank, _)| *rank).collect()
    }

    /// Returns true if the hand has both trips and a pair (full house).
    pub fn has_full_house(&self) -> bool {
        let has_trips = self.groups.iter().any(|(_, count)| *count == 3);
        let has_pair = self.groups.iter().any(|(_, count)| *count == 2);
        has_trips && has_pair
    }

    /// Returns the internal groups for debugging/testing.
    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
