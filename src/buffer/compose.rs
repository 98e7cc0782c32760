//! Compositing algebra: merge, crop, and diff over sparse buffers.
//!
//! Three set operations build composite scenes out of independently
//! populated buffers:
//! - **merge** (`+` / `+=`): right-biased union; where both operands
//!   occupy a coordinate, the right-hand cell wins;
//! - **crop** (`&` / `&=`): restriction to a bounding box;
//! - **diff** (`-` / `-=`): the left operand's cells that the right
//!   operand lacks or disagrees with.
//!
//! The non-assigning operators allocate an independent result and leave
//! both operands untouched; the assigning forms mutate only the
//! receiver. Every operation maintains the cardinality and bounds
//! caches and never leaves an empty row map in storage.

use std::collections::btree_map::Entry;
use std::ops::{Add, AddAssign, BitAnd, BitAndAssign, Sub, SubAssign};

use super::grid::Buffer;
use crate::geometry::Bounds;

impl Buffer {
    /// Merge `other` into this buffer (right-biased union).
    ///
    /// Coordinates occupied by both operands take `other`'s cell:
    /// the incoming write is the later one. Rows present only in
    /// `other` are cloned in, never aliased. The cached bounds become
    /// the box-union of both extents, and the cardinality counts each
    /// distinct coordinate once.
    pub fn merge_from(&mut self, other: &Self) {
        let incoming = other.bounds();
        let (rows, bounds, len) = self.parts_mut();

        for (y, src_row) in other.raw_rows() {
            match rows.entry(y) {
                Entry::Vacant(slot) => {
                    *len += src_row.len();
                    slot.insert(src_row.clone());
                }
                Entry::Occupied(mut slot) => {
                    let dst_row = slot.get_mut();
                    for (&x, cell) in src_row {
                        if dst_row.insert(x, *cell).is_none() {
                            *len += 1;
                        }
                    }
                }
            }
        }

        *bounds = *bounds + incoming;
    }

    /// Right-biased union of two buffers, as a new buffer.
    pub fn merged(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.merge_from(other);
        out
    }

    /// The cells whose coordinates `clip` contains, as a new buffer.
    ///
    /// Only stored rows inside `[min_y, max_y)` are visited. The
    /// result's bounds are computed from the retained cells, so an
    /// empty intersection reports [`Bounds::EMPTY`] no matter how large
    /// the clip box was.
    pub fn crop(&self, clip: Bounds) -> Self {
        let mut out = Self::new();
        for (x, y, cell) in self.cells_in(clip) {
            out.set(x, y, *cell);
        }
        out
    }

    /// Restrict this buffer to `clip` in place.
    pub fn crop_to(&mut self, clip: Bounds) {
        *self = self.crop(clip);
    }

    /// The cells of `self` that `other` lacks or disagrees with.
    ///
    /// A coordinate appears in the result iff it is occupied here and
    /// either vacant in `other` or occupied with a different cell.
    /// Coordinates only `other` occupies never appear; the result's
    /// domain is a subset of this buffer's.
    pub fn diff(&self, other: &Self) -> Self {
        let mut out = Self::new();
        for (y, row) in self.raw_rows() {
            let theirs = other.row(y);
            for (&x, cell) in row {
                if theirs.and_then(|r| r.get(&x)) != Some(cell) {
                    out.set(x, y, *cell);
                }
            }
        }
        out
    }

    /// Remove every cell that `other` holds identically, in place.
    ///
    /// Rows left without columns are deleted from storage; the bounds
    /// cache is rescanned from what remains.
    pub fn subtract(&mut self, other: &Self) {
        let (rows, bounds, len) = self.parts_mut();

        for (y, their_row) in other.raw_rows() {
            let Some(my_row) = rows.get_mut(&y) else {
                continue;
            };
            for (&x, theirs) in their_row {
                if my_row.get(&x) == Some(theirs) {
                    my_row.remove(&x);
                    *len -= 1;
                }
            }
            if my_row.is_empty() {
                rows.remove(&y);
            }
        }

        *bounds = Self::scan_bounds(rows);
    }
}

impl Add<&Buffer> for &Buffer {
    type Output = Buffer;

    #[inline]
    fn add(self, other: &Buffer) -> Buffer {
        self.merged(other)
    }
}

impl AddAssign<&Buffer> for Buffer {
    #[inline]
    fn add_assign(&mut self, other: &Buffer) {
        self.merge_from(other);
    }
}

impl BitAnd<Bounds> for &Buffer {
    type Output = Buffer;

    #[inline]
    fn bitand(self, clip: Bounds) -> Buffer {
        self.crop(clip)
    }
}

impl BitAndAssign<Bounds> for Buffer {
    #[inline]
    fn bitand_assign(&mut self, clip: Bounds) {
        self.crop_to(clip);
    }
}

impl Sub<&Buffer> for &Buffer {
    type Output = Buffer;

    #[inline]
    fn sub(self, other: &Buffer) -> Buffer {
        self.diff(other)
    }
}

impl SubAssign<&Buffer> for Buffer {
    #[inline]
    fn sub_assign(&mut self, other: &Buffer) {
        self.subtract(other);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::cell::{Cell, Rgb, Style};

    fn cell(ch: char) -> Cell {
        Cell::new(ch)
    }

    #[test]
    fn test_merge_disjoint() {
        let mut a = Buffer::new();
        let mut b = Buffer::new();
        a.set(0, 0, cell('X'));
        b.set(1, 0, cell('Y'));

        let c = &a + &b;

        assert_eq!(c.get(0, 0).map(Cell::ch), Some('X'));
        assert_eq!(c.get(1, 0).map(Cell::ch), Some('Y'));
        assert_eq!(c.len(), 2);
        // Operands untouched
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
        assert!(c.is_consistent());
    }

    #[test]
    fn test_merge_right_wins() {
        let mut a = Buffer::new();
        let mut b = Buffer::new();
        a.set(3, 3, cell('a'));
        b.set(3, 3, cell('b'));

        assert_eq!((&a + &b).get(3, 3).map(Cell::ch), Some('b'));
        assert_eq!((&b + &a).get(3, 3).map(Cell::ch), Some('a'));
    }

    #[test]
    fn test_merge_counts_distinct_coordinates() {
        let mut a = Buffer::new();
        let mut b = Buffer::new();
        a.write(0, 0, "abc", Style::DEFAULT);
        b.write(2, 0, "xyz", Style::DEFAULT); // overlaps at x=2

        let c = &a + &b;
        assert_eq!(c.len(), 5); // not 6
        assert_eq!(c.get(2, 0).map(Cell::ch), Some('x'));
        assert!(c.is_consistent());
    }

    #[test]
    fn test_merge_unions_bounds() {
        let mut a = Buffer::new();
        let mut b = Buffer::new();
        a.set(-2, -2, cell('a'));
        b.set(5, 5, cell('b'));

        let c = &a + &b;
        assert_eq!(c.bounds(), Bounds::new(-2, -2, 6, 6));
    }

    #[test]
    fn test_merge_with_empty_keeps_bounds() {
        let mut a = Buffer::new();
        a.set(4, 4, cell('a'));
        let before = a.bounds();

        a += &Buffer::new();

        // The empty operand's sentinel must not drag the box to the origin
        assert_eq!(a.bounds(), before);
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn test_merge_adopted_rows_are_independent() {
        let mut a = Buffer::new();
        let mut b = Buffer::new();
        b.set(0, 7, cell('b'));

        a += &b;
        b.set(1, 7, cell('c'));

        assert_eq!(a.get(0, 7).map(Cell::ch), Some('b'));
        assert!(a.get(1, 7).is_none());
    }

    #[test]
    fn test_merge_in_place_mutates_receiver_only() {
        let mut a = Buffer::new();
        let mut b = Buffer::new();
        a.set(0, 0, cell('X'));
        b.set(1, 0, cell('Y'));

        a += &b;

        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 1);
        assert!(a.is_consistent());
    }

    #[test]
    fn test_crop_keeps_only_contained_cells() {
        let mut buf = Buffer::new();
        buf.set(1, 1, cell('A'));
        buf.set(5, 5, cell('B'));

        let cropped = &buf & Bounds::new(0, 0, 3, 3);

        assert_eq!(cropped.get(1, 1).map(Cell::ch), Some('A'));
        assert!(cropped.get(5, 5).is_none());
        assert_eq!(cropped.len(), 1);
        // Source untouched
        assert_eq!(buf.len(), 2);
        assert!(cropped.is_consistent());
    }

    #[test]
    fn test_crop_in_place() {
        let mut buf = Buffer::new();
        buf.set(1, 1, cell('A'));
        buf.set(5, 5, cell('B'));

        buf &= Bounds::new(0, 0, 3, 3);

        assert_eq!(buf.get(1, 1).map(Cell::ch), Some('A'));
        assert!(buf.get(5, 5).is_none());
        assert_eq!(buf.len(), 1);
        assert_eq!(buf.bounds(), Bounds::unit(1, 1));
        assert!(buf.is_consistent());
    }

    #[test]
    fn test_crop_recomputes_bounds_from_retained_cells() {
        let mut buf = Buffer::new();
        buf.set(10, 10, cell('A'));

        // Non-empty crop box, empty intersection
        buf &= Bounds::new(0, 0, 5, 5);

        assert!(buf.is_empty());
        assert_eq!(buf.bounds(), Bounds::EMPTY);
    }

    #[test]
    fn test_crop_preserves_cell_values() {
        let style = Style::new(Rgb::new(9, 8, 7), Rgb::new(1, 2, 3), crate::Modifiers::BOLD);
        let mut buf = Buffer::new();
        buf.set(2, 2, Cell::styled('s', style));

        let cropped = buf.crop(Bounds::new(0, 0, 4, 4));
        assert_eq!(cropped.get(2, 2), buf.get(2, 2));
    }

    #[test]
    fn test_diff_excludes_equal_cells() {
        let mut a = Buffer::new();
        let mut b = Buffer::new();
        a.set(1, 1, cell('A'));
        a.set(2, 1, cell('B'));
        b.set(1, 1, cell('A'));

        let d = &a - &b;

        assert!(d.get(1, 1).is_none());
        assert_eq!(d.get(2, 1).map(Cell::ch), Some('B'));
        assert_eq!(d.len(), 1);
        assert!(d.is_consistent());
    }

    #[test]
    fn test_diff_keeps_changed_cells() {
        let style = Style::DEFAULT.with_fg(Rgb::new(255, 0, 0));
        let mut a = Buffer::new();
        let mut b = Buffer::new();
        a.set(0, 0, Cell::styled('A', style));
        b.set(0, 0, cell('A')); // same char, different style

        let d = &a - &b;
        assert_eq!(d.get(0, 0), a.get(0, 0));
        assert_eq!(d.len(), 1);
    }

    #[test]
    fn test_diff_domain_is_left_operand() {
        let mut a = Buffer::new();
        let mut b = Buffer::new();
        a.set(0, 0, cell('A'));
        b.set(9, 9, cell('Z')); // only in rhs

        let d = &a - &b;
        assert!(d.get(9, 9).is_none());
        assert_eq!(d.len(), 1);
    }

    #[test]
    fn test_diff_self_is_empty() {
        let mut a = Buffer::new();
        a.write(0, 0, "hello", Style::DEFAULT);
        a.write(-3, 8, "world", Style::DEFAULT);

        let d = &a - &a;
        assert!(d.is_empty());
        assert_eq!(d.bounds(), Bounds::EMPTY);
    }

    #[test]
    fn test_subtract_prunes_empty_rows() {
        let mut buf = Buffer::new();
        let mut b = Buffer::new();
        buf.set(1, 1, cell('A'));
        b.set(1, 1, cell('A'));

        buf -= &b;

        assert_eq!(buf.len(), 0);
        assert!(buf.row(1).is_none()); // row gone from storage entirely
        assert_eq!(buf.bounds(), Bounds::EMPTY);
        assert!(buf.is_consistent());
    }

    #[test]
    fn test_subtract_shrinks_bounds() {
        let mut buf = Buffer::new();
        buf.set(0, 0, cell('a'));
        buf.set(50, 50, cell('b'));

        let mut rhs = Buffer::new();
        rhs.set(50, 50, cell('b'));
        buf -= &rhs;

        assert_eq!(buf.len(), 1);
        assert_eq!(buf.bounds(), Bounds::unit(0, 0));
        // Operand untouched
        assert_eq!(rhs.len(), 1);
        assert!(buf.is_consistent());
    }

    #[test]
    fn test_subtract_keeps_disagreeing_cells() {
        let mut buf = Buffer::new();
        let mut rhs = Buffer::new();
        buf.set(2, 2, cell('A'));
        rhs.set(2, 2, cell('B')); // same coordinate, different value

        buf -= &rhs;
        assert_eq!(buf.get(2, 2).map(Cell::ch), Some('A'));
    }

    #[test]
    fn test_operators_match_named_methods() {
        let mut a = Buffer::new();
        let mut b = Buffer::new();
        a.write(0, 0, "stone", Style::DEFAULT);
        b.write(3, 0, "wall", Style::DEFAULT);
        let clip = Bounds::new(1, 0, 6, 1);

        assert_eq!((&a + &b).cells().count(), a.merged(&b).cells().count());
        assert_eq!((&a - &b).cells().count(), a.diff(&b).cells().count());
        assert_eq!((&a & clip).cells().count(), a.crop(clip).cells().count());
    }
}
