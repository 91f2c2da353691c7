//! Helpers shared by the integration tests.

use std::cell::Cell;
use std::rc::Rc;

/// Producer wrapper that records how many elements it ever yielded.
pub struct Counted<I> {
    iter: I,
    yielded: Rc<Cell<usize>>,
}

/// Handle to observe how many elements a [`Counted`] producer yielded.
#[derive(Clone)]
pub struct Pulls(Rc<Cell<usize>>);

impl Pulls {
    pub fn get(&self) -> usize {
        self.0.get()
    }
}

/// Wrap a producer so tests can assert exactly how much was realized.
pub fn counted<I: IntoIterator>(iter: I) -> (Counted<I::IntoIter>, Pulls) {
    let yielded = Rc::new(Cell::new(0));
    let counted = Counted {
        iter: iter.into_iter(),
        yielded: Rc::clone(&yielded),
    };
    (counted, Pulls(yielded))
}

impl<I: Iterator> Iterator for Counted<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let x = self.iter.next();
        if x.is_some() {
            self.yielded.set(self.yielded.get() + 1);
        }
        x
    }
}
