/// Iterator over all five-card index combinations from a pool of `n` cards.
///
/// Yields `[usize; 5]` index sets in lexicographic order. Used to pick the
/// best five-card hand out of six- or seven-card inputs; for `n == 5` it
/// yields the single identity combination.
pub(crate) struct ChooseFive {
    n: usize,
    indices: [usize; 5],
    done: bool,
}

impl ChooseFive {
    pub(crate) fn new(n: usize) -> Self {
        debug_assert!((5..=7).contains(&n), "pool size out of range: {n}");
        Self { n, indices: [0, 1, 2, 3, 4], done: false }
    }

    const fn total(&self) -> usize {
        // C(5,5)=1, C(6,5)=6, C(7,5)=21
        match self.n {
            5 => 1,
            6 => 6,
            _ => 21,
        }
    }
}

impl Iterator for ChooseFive {
    type Item = [usize; 5];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.indices;

        // Advance to the next combination: bump the rightmost index that has
        // room, then reset everything to its right.
        let mut i = 4;
        loop {
            if self.indices[i] < self.n - (5 - i) {
                self.indices[i] += 1;
                for j in (i + 1)..5 {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }

            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
        }

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (1, Some(self.total()))
        }
    }
}
