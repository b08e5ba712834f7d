use crate::error::RangeError;
use std::ops::RangeInclusive;

/// A closed interval of 1-based page numbers that is known to fit the
/// document it was validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    start: u32,
    end: u32,
}

impl PageRange {
    /// Validate `start..=end` against a document of `total_pages` pages.
    ///
    /// Bounds are checked before ordering, so `6-6` on a five page document
    /// reports out of bounds rather than reversed.
    pub fn new(start: i64, end: i64, total_pages: u32) -> Result<Self, RangeError> {
        if start < 1 || end > i64::from(total_pages) {
            return Err(RangeError::OutOfBounds {
                start,
                end,
                total: total_pages,
            });
        }

        if start > end {
            return Err(RangeError::Reversed { start, end });
        }

        // Both are now within 1..=total_pages.
        Ok(PageRange {
            start: start as u32,
            end: end as u32,
        })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Number of pages in the range.
    pub fn len(&self) -> u32 {
        self.end - self.start + 1
    }

    /// Always false: a validated range holds at least one page.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, page: u32) -> bool {
        self.pages().contains(&page)
    }

    /// 1-based page numbers in ascending order.
    pub fn pages(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }
}
