//! The lazily materializing list.

use crate::part::{self, Part};
use crate::Error;
use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use itertools::Itertools;

/// A boxed, exclusively owned producer of elements.
pub type Producer<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

/// Signals that the producer yielded its terminal "no more values".
///
/// Never surfaced; every operation resolves it into either a shorter
/// result or a domain error before returning.
struct Exhausted;

/// A list over a single-pass producer that realizes elements on demand.
///
/// Elements are pulled from the producer at most once and cached in an
/// in-memory buffer, in producer order. Each operation realizes only as
/// much as it touches; operations that need the total length (such as
/// [`LazyList::len`] or anything taking a negative index) are documented
/// as forcing full realization and must not be called on an infinite
/// producer.
pub struct LazyList<'a, T> {
    buf: Vec<T>,
    src: Producer<'a, T>,
    exhausted: bool,
}

impl<'a, T: 'a> LazyList<'a, T> {
    /// Wrap a producer without pulling anything from it.
    pub fn new<I>(producer: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Self {
            buf: Vec::new(),
            src: Box::new(producer.into_iter()),
            exhausted: false,
        }
    }

    /// The already-realized prefix, in producer order.
    pub fn realized(&self) -> &[T] {
        &self.buf
    }

    /// True iff the producer has signaled that it has no further values.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Pull exactly one value from the producer into the buffer.
    fn consume_next(&mut self) -> Result<(), Exhausted> {
        if self.exhausted {
            return Err(Exhausted);
        }
        match self.src.next() {
            Some(x) => {
                self.buf.push(x);
                Ok(())
            }
            None => {
                self.exhausted = true;
                Err(Exhausted)
            }
        }
    }

    /// Pull every remaining value into the buffer.
    fn consume_rest(&mut self) {
        while self.consume_next().is_ok() {}
    }

    /// Realize everything the given selection touches, stopping early on
    /// exhaustion.
    ///
    /// A bounded forward stride realizes only through the highest offset
    /// it reaches; negative or open bounds require the total length.
    fn consume_up_to(&mut self, part: &Part) {
        match *part {
            Part::Index(i) if i >= 0 => {
                while self.buf.len() <= i as usize && self.consume_next().is_ok() {}
            }
            Part::Index(_) => self.consume_rest(),
            // a zero step selects nothing; the caller rejects it afterwards
            Part::Range(_, _, 0) => (),
            Part::Range(Some(start), Some(stop), step)
                if start >= 0 && stop >= 0 && step > 0 =>
            {
                if let Some(last) = part::last_touched(start, stop, step) {
                    self.consume_up_to(&Part::Index(last));
                }
            }
            Part::Range(..) => self.consume_rest(),
        }
    }

    /// Realize through offset `i` and return the element there, if any.
    fn realize(&mut self, i: usize) -> Option<&T> {
        while self.buf.len() <= i && self.consume_next().is_ok() {}
        self.buf.get(i)
    }

    /// Map a possibly negative index to a buffer offset.
    ///
    /// Negative input forces full realization to learn the length;
    /// `None` passes through (used for open bounds).
    fn positive_index(&mut self, index: Option<isize>) -> Result<Option<usize>, Error> {
        match index {
            None => Ok(None),
            Some(i) if i >= 0 => Ok(Some(i as usize)),
            Some(i) => {
                self.consume_rest();
                match part::wrap(i, self.buf.len()) {
                    Some(p) => Ok(Some(p)),
                    None => Err(Error::OutOfRange(i)),
                }
            }
        }
    }

    /// Realize what `index` needs, then resolve it to an in-range offset.
    fn resolve(&mut self, index: isize) -> Result<usize, Error> {
        self.consume_up_to(&Part::Index(index));
        part::abs_index(index, self.buf.len()).ok_or(Error::OutOfRange(index))
    }

    /// The element at `index`; negative indices count from the back
    /// (and force full realization).
    pub fn get(&mut self, index: isize) -> Result<&T, Error> {
        let i = self.resolve(index)?;
        Ok(&self.buf[i])
    }

    /// Replace the element at `index`.
    pub fn set(&mut self, index: isize, value: T) -> Result<(), Error> {
        let i = self.resolve(index)?;
        self.buf[i] = value;
        Ok(())
    }

    /// Remove the element at `index`, shifting later realized elements.
    /// Unconsumed producer output is unaffected and continues after them.
    pub fn delete(&mut self, index: isize) -> Result<(), Error> {
        let i = self.resolve(index)?;
        self.buf.remove(i);
        Ok(())
    }

    /// The elements a stride selects, in selection order.
    ///
    /// Bounds follow the usual slice conventions: negative values count
    /// from the back, missing ones default to the whole sequence, and a
    /// negative step walks backwards. An empty selection is fine.
    pub fn get_range(
        &mut self,
        start: Option<isize>,
        stop: Option<isize>,
        step: isize,
    ) -> Result<Vec<T>, Error>
    where
        T: Clone,
    {
        self.consume_up_to(&Part::Range(start, stop, step));
        let sel = part::stride(start, stop, step, self.buf.len())?;
        Ok(sel.map(|i| self.buf[i].clone()).collect())
    }

    /// Replace the elements a stride selects.
    ///
    /// With step 1 the replacement may have any length and is spliced in;
    /// any other step requires it to match the selection length.
    pub fn set_range<I>(
        &mut self,
        start: Option<isize>,
        stop: Option<isize>,
        step: isize,
        values: I,
    ) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
    {
        self.consume_up_to(&Part::Range(start, stop, step));
        if step == 1 {
            // an empty selection is an insertion point and must still be reached
            if let Some(s) = start {
                self.consume_up_to(&Part::Index(s));
            }
            let (a, b) = part::bounds(start, stop, step, self.buf.len())?;
            let (a, b) = (a as usize, b.max(a) as usize);
            self.buf.splice(a..b, values);
        } else {
            let offsets: Vec<_> = part::stride(start, stop, step, self.buf.len())?.collect();
            let values: Vec<_> = values.into_iter().collect();
            if offsets.len() != values.len() {
                return Err(Error::SliceLen(offsets.len(), values.len()));
            }
            for (i, v) in offsets.into_iter().zip(values) {
                self.buf[i] = v;
            }
        }
        Ok(())
    }

    /// Remove the elements a stride selects, preserving the order of the rest.
    pub fn delete_range(
        &mut self,
        start: Option<isize>,
        stop: Option<isize>,
        step: isize,
    ) -> Result<(), Error> {
        self.consume_up_to(&Part::Range(start, stop, step));
        let mut doomed: Vec<_> = part::stride(start, stop, step, self.buf.len())?.collect();
        doomed.sort_unstable();
        let mut doomed = doomed.into_iter().peekable();
        let mut i = 0;
        self.buf.retain(|_| {
            let del = doomed.peek() == Some(&i);
            if del {
                doomed.next();
            }
            i += 1;
            !del
        });
        Ok(())
    }

    /// Total number of elements.
    ///
    /// Forces full realization; unbounded on an infinite producer.
    pub fn len(&mut self) -> usize {
        self.consume_rest();
        self.buf.len()
    }

    /// True iff the list has no elements.
    ///
    /// Cheap: answers from the buffer if possible, otherwise pulls
    /// exactly one probe element.
    pub fn is_empty(&mut self) -> bool {
        self.buf.is_empty() && self.consume_next().is_err()
    }

    /// True iff some element equals `value`.
    ///
    /// Scans the buffer once, then realizes one element at a time;
    /// never consumes past the first match.
    pub fn contains(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        if self.buf.contains(value) {
            return true;
        }
        let mut i = self.buf.len();
        while let Some(x) = self.realize(i) {
            if x == value {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Lock-step equality with another lazy list.
    ///
    /// Short-circuits on the first mismatch without realizing further;
    /// equal only if both sides exhaust at the same offset.
    #[allow(clippy::should_implement_trait)]
    pub fn eq(&mut self, other: &mut Self) -> bool
    where
        T: PartialEq,
    {
        let mut i = 0;
        loop {
            match (self.realize(i), other.realize(i)) {
                (None, None) => return true,
                (Some(x), Some(y)) if x == y => i += 1,
                _ => return false,
            }
        }
    }

    /// Equality with an eager sequence; same semantics as [`LazyList::eq`]
    /// with the eager side counting as always exhausted.
    pub fn eq_slice(&mut self, other: &[T]) -> bool
    where
        T: PartialEq,
    {
        let mut i = 0;
        loop {
            match (self.realize(i), other.get(i)) {
                (None, None) => return true,
                (Some(x), Some(y)) if x == y => i += 1,
                _ => return false,
            }
        }
    }

    /// Lexicographic "strictly less than" against another lazy list.
    ///
    /// The first differing element decides; on an equal common prefix the
    /// side that exhausts first is the lesser one, and simultaneous
    /// exhaustion means equal (hence not less).
    pub fn lt(&mut self, other: &mut Self) -> bool
    where
        T: PartialOrd,
    {
        let mut i = 0;
        loop {
            match (self.realize(i), other.realize(i)) {
                (None, Some(_)) => return true,
                (None, None) | (Some(_), None) => return false,
                (Some(x), Some(y)) => match x.partial_cmp(y) {
                    Some(Ordering::Equal) => i += 1,
                    Some(Ordering::Less) => return true,
                    Some(Ordering::Greater) | None => return false,
                },
            }
        }
    }

    /// Like [`LazyList::lt`], against an eager sequence.
    pub fn lt_slice(&mut self, other: &[T]) -> bool
    where
        T: PartialOrd,
    {
        let mut i = 0;
        loop {
            match (self.realize(i), other.get(i)) {
                (None, Some(_)) => return true,
                (None, None) | (Some(_), None) => return false,
                (Some(x), Some(y)) => match x.partial_cmp(y) {
                    Some(Ordering::Equal) => i += 1,
                    Some(Ordering::Less) => return true,
                    Some(Ordering::Greater) | None => return false,
                },
            }
        }
    }

    /// Append behind everything the producer will ever yield.
    ///
    /// Forces full realization so that the new element lands strictly last.
    pub fn push(&mut self, value: T) {
        self.consume_rest();
        self.buf.push(value);
    }

    /// Splice another producer onto the tail without realizing anything.
    ///
    /// Indexing transparently spans both producers afterwards. Also
    /// available as the `+=` operator.
    pub fn extend<I>(&mut self, producer: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        if self.exhausted {
            self.src = Box::new(producer.into_iter());
            self.exhausted = false;
        } else {
            let rest = core::mem::replace(&mut self.src, Box::new(core::iter::empty()));
            self.src = Box::new(rest.chain(producer));
        }
    }

    /// Insert before the given position, shifting later realized elements.
    ///
    /// Clamps rather than fails: a past-the-end index appends and an
    /// over-negative one prepends.
    pub fn insert(&mut self, index: isize, value: T) {
        self.consume_up_to(&Part::Index(index));
        let i = match part::wrap(index, self.buf.len()) {
            Some(i) => i.min(self.buf.len()),
            None => 0,
        };
        self.buf.insert(i, value);
    }

    /// Remove and return the last element.
    ///
    /// Forces full realization to find it.
    pub fn pop(&mut self) -> Result<T, Error> {
        self.consume_rest();
        self.buf.pop().ok_or(Error::OutOfRange(-1))
    }

    /// Remove and return the element at `index`.
    pub fn pop_at(&mut self, index: isize) -> Result<T, Error> {
        let i = self.resolve(index)?;
        Ok(self.buf.remove(i))
    }

    /// Delete the first element equal to `value`.
    pub fn remove(&mut self, value: &T) -> Result<(), Error>
    where
        T: PartialEq,
    {
        let i = self.index_of(value, 0, None)?;
        self.buf.remove(i);
        Ok(())
    }

    /// Offset of the first element in `[start, stop)` equal to `value`.
    ///
    /// Scans lazily; realizes nothing past the first match. Negative
    /// bounds force full realization to resolve.
    pub fn index_of(&mut self, value: &T, start: isize, stop: Option<isize>) -> Result<usize, Error>
    where
        T: PartialEq,
    {
        let mut i = self.positive_index(Some(start))?.unwrap_or(0);
        let stop = self.positive_index(stop)?;
        loop {
            if stop.map_or(false, |s| i >= s) {
                return Err(Error::NotFound);
            }
            match self.realize(i) {
                Some(x) if x == value => return Ok(i),
                Some(_) => i += 1,
                None => return Err(Error::NotFound),
            }
        }
    }

    /// How many elements equal `value`. Forces full realization.
    pub fn count(&mut self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.consume_rest();
        self.buf.iter().filter(|x| *x == value).count()
    }

    /// Discard both the buffer and the remaining producer.
    ///
    /// Values the producer has not yielded yet are never produced, even
    /// if producing them would have side effects.
    pub fn clear(&mut self) {
        self.buf.clear();
        self.src = Box::new(core::iter::empty());
        self.exhausted = true;
    }

    /// Sort in place. Forces full realization first.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.consume_rest();
        self.buf.sort();
    }

    /// Sort in place by a comparator. Forces full realization first.
    pub fn sort_by(&mut self, compare: impl FnMut(&T, &T) -> Ordering) {
        self.consume_rest();
        self.buf.sort_by(compare);
    }

    /// Reverse in place. Forces full realization first.
    pub fn reverse(&mut self) {
        self.consume_rest();
        self.buf.reverse();
    }

    /// Every element's debug form, comma-joined and bracketed.
    ///
    /// Forces full realization.
    pub fn render(&mut self) -> String
    where
        T: fmt::Debug,
    {
        self.consume_rest();
        format!("[{}]", self.buf.iter().map(|x| format!("{x:?}")).join(", "))
    }
}

impl<'a, T: 'a> Default for LazyList<'a, T> {
    /// An empty, already exhausted list.
    fn default() -> Self {
        Self {
            buf: Vec::new(),
            src: Box::new(core::iter::empty()),
            exhausted: true,
        }
    }
}

impl<'a, T: 'a, I> core::ops::AddAssign<I> for LazyList<'a, T>
where
    I: IntoIterator<Item = T>,
    I::IntoIter: 'a,
{
    fn add_assign(&mut self, rhs: I) {
        self.extend(rhs)
    }
}

impl<'a, T: 'a> IntoIterator for LazyList<'a, T> {
    type Item = T;
    type IntoIter = Producer<'a, T>;

    /// The realized prefix, then the untouched remainder of the producer.
    fn into_iter(self) -> Self::IntoIter {
        if self.exhausted {
            Box::new(self.buf.into_iter())
        } else {
            Box::new(self.buf.into_iter().chain(self.src))
        }
    }
}

/// Shows the realized prefix without consuming anything;
/// `..` marks a producer that may still hold values.
impl<T: fmt::Debug> fmt::Debug for LazyList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        let mut iter = self.buf.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first:?}")?;
        }
        iter.try_for_each(|x| write!(f, ", {x:?}"))?;
        if !self.exhausted {
            if self.buf.is_empty() {
                write!(f, "..")?;
            } else {
                write!(f, ", ..")?;
            }
        }
        write!(f, "]")
    }
}
