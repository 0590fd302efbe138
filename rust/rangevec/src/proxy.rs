//! Subscript-style access to a single position of an [`IntervalList`].

use std::fmt;

use rangevec_common::Result;

use crate::IntervalList;

/// Handle to one position of a list, returned by [`IntervalList::at`].
///
/// Reads forward to [`IntervalList::get`] and writes to
/// [`IntervalList::insert`]; the proxy itself holds no state besides the
/// borrowed list and the position, and performs no validation of its own.
///
/// ```
/// use rangevec::IntervalList;
///
/// let mut list = IntervalList::new();
/// list.at(4).set(7).unwrap();
/// assert!(list.at(4) == 7);
/// assert_eq!(i64::from(list.at(5)), 0);
/// ```
pub struct IndexProxy<'a> {
    list: &'a mut IntervalList,
    position: i64,
}

impl<'a> IndexProxy<'a> {
    pub(crate) fn new(list: &'a mut IntervalList, position: i64) -> IndexProxy<'a> {
        IndexProxy { list, position }
    }

    #[inline]
    pub fn position(&self) -> i64 {
        self.position
    }

    #[inline]
    pub fn get(&self) -> i64 {
        self.list.get(self.position)
    }

    pub fn set(&mut self, value: i64) -> Result<()> {
        self.list.insert(self.position, value)
    }
}

impl PartialEq<i64> for IndexProxy<'_> {
    fn eq(&self, other: &i64) -> bool {
        self.get() == *other
    }
}

impl From<IndexProxy<'_>> for i64 {
    fn from(proxy: IndexProxy<'_>) -> i64 {
        proxy.get()
    }
}

impl fmt::Debug for IndexProxy<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexProxy")
            .field("position", &self.position)
            .field("value", &self.get())
            .finish()
    }
}

impl fmt::Display for IndexProxy<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
