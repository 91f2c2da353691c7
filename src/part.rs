//! Position selectors and the index arithmetic behind them.

use crate::Error;

/// Selects either a single position or a stride of positions.
///
/// Consumption is dispatched on this, so that a scalar access and a
/// bounded stride each realize exactly as much as they touch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Part {
    /// Single offset, possibly negative (counting from the back).
    Index(isize),
    /// Stride with optional bounds and a nonzero step.
    Range(Option<isize>, Option<isize>, isize),
}

/// Absolutise an index and return it if it is inside `[0, len)`.
pub(crate) fn abs_index(i: isize, len: usize) -> Option<usize> {
    wrap(i, len).filter(|i| *i < len)
}

pub(crate) fn wrap(i: isize, len: usize) -> Option<usize> {
    if i >= 0 {
        Some(i as usize)
    } else if len < -i as usize {
        None
    } else {
        Some(len - (-i as usize))
    }
}

/// Offsets touched by a resolved stride, in selection order.
pub(crate) struct Stride {
    pos: isize,
    stop: isize,
    step: isize,
}

impl Iterator for Stride {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let more = if self.step > 0 {
            self.pos < self.stop
        } else {
            self.pos > self.stop
        };
        if !more {
            return None;
        }
        let i = self.pos as usize;
        self.pos += self.step;
        Some(i)
    }
}

/// Resolve stride bounds against `len`.
///
/// Bounds wrap from the back when negative and clip to the valid range for
/// the step direction; missing bounds default to the whole sequence.
/// An empty selection is fine, a zero step is not.
pub(crate) fn bounds(
    start: Option<isize>,
    stop: Option<isize>,
    step: isize,
    len: usize,
) -> Result<(isize, isize), Error> {
    if step == 0 {
        return Err(Error::Step);
    }
    let len = len as isize;
    let adjust = |b: isize| {
        if b < 0 {
            let b = b + len;
            if b < 0 {
                if step < 0 {
                    -1
                } else {
                    0
                }
            } else {
                b
            }
        } else if b >= len {
            if step < 0 {
                len - 1
            } else {
                len
            }
        } else {
            b
        }
    };
    let default = |fwd, bwd| if step > 0 { fwd } else { bwd };
    let pos = start.map(&adjust).unwrap_or_else(|| default(0, len - 1));
    let stop = stop.map(&adjust).unwrap_or_else(|| default(len, -1));
    Ok((pos, stop))
}

/// Like [`bounds`], but yielding the selected offsets directly.
pub(crate) fn stride(
    start: Option<isize>,
    stop: Option<isize>,
    step: isize,
    len: usize,
) -> Result<Stride, Error> {
    let (pos, stop) = bounds(start, stop, step, len)?;
    Ok(Stride { pos, stop, step })
}

/// Highest offset a forward stride over `[start, stop)` touches,
/// or `None` if the selection is empty.
///
/// Only meaningful for explicit non-negative bounds and a positive step,
/// where it bounds consumption without knowing the total length.
pub(crate) fn last_touched(start: isize, stop: isize, step: isize) -> Option<isize> {
    if stop <= start {
        return None;
    }
    Some(start + (stop - 1 - start) / step * step)
}

#[test]
fn wrap_test() {
    let len = 4;
    assert_eq!(wrap(0, len), Some(0));
    assert_eq!(wrap(8, len), Some(8));
    assert_eq!(wrap(-1, len), Some(3));
    assert_eq!(wrap(-4, len), Some(0));
    assert_eq!(wrap(-8, len), None);
}

#[test]
fn stride_test() {
    let offsets = |start, stop, step, len| {
        stride(start, stop, step, len)
            .unwrap()
            .collect::<alloc::vec::Vec<_>>()
    };
    assert_eq!(offsets(Some(2), Some(8), 2, 6), [2, 4]);
    assert_eq!(offsets(None, None, 1, 3), [0, 1, 2]);
    assert_eq!(offsets(None, None, -1, 3), [2, 1, 0]);
    assert_eq!(offsets(Some(5), Some(1), -2, 6), [5, 3]);
    assert_eq!(offsets(Some(-2), None, 1, 5), [3, 4]);
    assert_eq!(offsets(Some(0), Some(-1), 1, 4), [0, 1, 2]);
    assert!(offsets(Some(4), Some(2), 1, 6).is_empty());
    assert_eq!(offsets(Some(-100), Some(100), 1, 3), [0, 1, 2]);
    assert!(stride(None, None, 0, 3).is_err());
}

#[test]
fn last_touched_test() {
    assert_eq!(last_touched(2, 5, 1), Some(4));
    assert_eq!(last_touched(2, 9, 3), Some(8));
    assert_eq!(last_touched(2, 8, 3), Some(5));
    assert_eq!(last_touched(3, 3, 1), None);
}
