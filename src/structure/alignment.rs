// Tue Oct 13 2026 - Alex

pub struct Alignment;

impl Alignment {
    /// True when `size` has at most one bit set and `offset` is a multiple of it.
    pub fn is_natural(offset: u32, size: u32) -> bool {
        if size.count_ones() > 1 {
            return false;
        }
        size.wrapping_sub(1) & offset == 0
    }
}
