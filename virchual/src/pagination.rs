use crate::rewind;

/// One visible pagination bullet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bullet {
    /// Position in the visible strip.
    pub slot: usize,
    /// The slide this bullet stands for.
    pub real_index: usize,
    pub is_active: bool,
    /// Hints that more slides exist beyond this end of the strip.
    pub is_edge: bool,
    pub position_px: u32,
}

/// Bullet indicator mirroring the current index.
///
/// Only a strip of `visible` bullets is shown; it scrolls once the active bullet would leave
/// its center. The model only consumes `next`/`prev`; hosts render [`Pagination::bullets`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pagination {
    total: usize,
    current: usize,
    visible: usize,
    diameter: u32,
    is_active: bool,
}

impl Pagination {
    pub fn new(total: usize, visible: usize, diameter: u32) -> Self {
        let visible = visible.min(total);
        Self {
            total,
            current: 0,
            visible,
            diameter,
            is_active: total >= 2 && visible > 0,
        }
    }

    /// Inactive strips (fewer than two slides) ignore `next`/`prev` and render nothing.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn center(&self) -> usize {
        self.visible / 2
    }

    pub fn next(&mut self) {
        self.go(1);
    }

    pub fn prev(&mut self) {
        self.go(-1);
    }

    fn go(&mut self, sign: isize) {
        if !self.is_active {
            return;
        }
        self.current = rewind(self.current as isize + sign, self.total - 1);
    }

    /// Real index shown by the first visible bullet.
    pub fn start(&self) -> usize {
        self.current
            .saturating_sub(self.center())
            .min(self.total - self.visible)
    }

    pub fn active_slot(&self) -> usize {
        self.current - self.start()
    }

    pub fn bullets(&self) -> Vec<Bullet> {
        if !self.is_active {
            return Vec::new();
        }
        let start = self.start();
        (0..self.visible)
            .map(|slot| {
                let real_index = start + slot;
                Bullet {
                    slot,
                    real_index,
                    is_active: real_index == self.current,
                    is_edge: is_edge_bullet(slot, real_index, self.visible, self.total),
                    position_px: slot as u32 * self.diameter,
                }
            })
            .collect()
    }

    pub fn width_px(&self) -> u32 {
        self.visible as u32 * self.diameter
    }

    pub fn height_px(&self) -> u32 {
        self.diameter
    }
}

/// Whether the bullet at `slot` sits on an edge with hidden slides behind it.
pub fn is_edge_bullet(slot: usize, real_index: usize, visible: usize, total: usize) -> bool {
    if slot == 0 {
        return real_index != 0;
    }
    if slot + 1 == visible {
        return real_index + 1 < total;
    }
    false
}
