/// Iterator yielding strip indices in fold-then-reverse order.
///
/// Equivalent to repeatedly taking the first element of `[0, len)` and then
/// reversing what is left, without touching a working list: the remaining
/// elements always form a contiguous range and the "first" element alternates
/// between its low and high end.
///
/// ```text
/// len = 4:  [0 1 2 3] -> 0, [3 2 1] -> 3, [1 2] -> 1, [2] -> 2
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FoldIterator {
    low: usize,
    high: usize,
    from_low: bool,
}

impl FoldIterator {
    #[inline]
    pub const fn new(len: usize) -> Self {
        Self {
            low: 0,
            high: len,
            from_low: true,
        }
    }
}

impl Iterator for FoldIterator {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.low >= self.high {
            return None;
        }

        let result = if self.from_low {
            self.low += 1;
            self.low - 1
        } else {
            self.high -= 1;
            self.high
        };
        self.from_low = !self.from_low;

        Some(result)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.high - self.low;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FoldIterator {}

impl std::iter::FusedIterator for FoldIterator {}
