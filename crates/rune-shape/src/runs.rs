//! Run coalescing over index ranges.
//!
//! `split_run` walks a half-open index range and yields the maximal
//! sub-ranges over which a per-index value stays constant. Layout
//! building applies it at three granularities: bidi level and script,
//! requested style, then matched font.

use core::ops::Range;

/// Iterator returned by [`split_run`].
///
/// Yields `(offset, len, value)` triples that are contiguous, cover the
/// input range exactly and never repeat a value between neighbours.
#[derive(Debug, Clone)]
pub struct SplitRun<T, F> {
    done: bool,
    indices: Range<usize>,
    offset: usize,
    len: usize,
    last_value: T,
    value_of: F,
}

/// Split `offset..offset + len` into runs of equal `value_of(index)`.
///
/// `initial` is only a placeholder until the first index is visited; it
/// never produces a segment of its own. `value_of` is called exactly once
/// per index, in increasing order. Callers must pass `len > 0`.
pub fn split_run<T, F>(offset: usize, len: usize, initial: T, value_of: F) -> SplitRun<T, F>
where
    T: Copy + PartialEq,
    F: FnMut(usize) -> T,
{
    debug_assert!(len > 0, "split_run called with an empty range");
    SplitRun {
        done: false,
        indices: offset..offset + len,
        offset,
        len: 0,
        last_value: initial,
        value_of,
    }
}

impl<T, F> Iterator for SplitRun<T, F>
where
    T: Copy + PartialEq,
    F: FnMut(usize) -> T,
{
    type Item = (usize, usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        for index in self.indices.by_ref() {
            let value = (self.value_of)(index);
            if self.len != 0 && value != self.last_value {
                let item = (self.offset, self.len, self.last_value);
                self.offset = index;
                self.len = 1;
                self.last_value = value;
                return Some(item);
            }
            self.len += 1;
            self.last_value = value;
        }
        self.done = true;
        Some((self.offset, self.len, self.last_value))
    }
}

impl<T, F> core::iter::FusedIterator for SplitRun<T, F>
where
    T: Copy + PartialEq,
    F: FnMut(usize) -> T,
{
}
