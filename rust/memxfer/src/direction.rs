//! Scan direction selection for overlapping transfers.

/// Order in which a transfer visits its units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Low addresses first.
    Forward,
    /// High addresses first.
    Backward,
    /// Source and destination coincide, nothing to move.
    NoOp,
}

/// Chooses the scan direction for copying from `from` to `to`.
///
/// This is the `memmove` rule: when the destination lies below the source, a forward
/// scan only ever overwrites source bytes it has already read; when it lies above,
/// the scan must start from the high end. The extent does not matter.
///
/// ```
/// use memxfer::direction::select_direction;
/// use memxfer::Direction;
///
/// let buf = [0u8; 16];
/// let p = buf.as_ptr();
/// unsafe {
///     assert_eq!(select_direction(p.add(4), p), Direction::Forward);
///     assert_eq!(select_direction(p, p.add(4)), Direction::Backward);
///     assert_eq!(select_direction(p, p), Direction::NoOp);
/// }
/// ```
#[inline]
pub fn select_direction(from: *const u8, to: *const u8) -> Direction {
    use std::cmp::Ordering;

    match from.addr().cmp(&to.addr()) {
        Ordering::Greater => Direction::Forward,
        Ordering::Less => Direction::Backward,
        Ordering::Equal => Direction::NoOp,
    }
}
