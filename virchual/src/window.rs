use crate::IndexPolicy;

/// Reads `source[index]`, wrapping out-of-range indexes around the slice.
///
/// Negative indexes read from the end, indexes past the end read from the start. Returns
/// `None` only for an empty slice.
pub fn circular_get<T: Copy>(source: &[T], index: isize) -> Option<T> {
    if source.is_empty() {
        return None;
    }
    let len = source.len() as isize;
    Some(source[index.rem_euclid(len) as usize])
}

/// Returns the `2 * radius + 1` items centered on `source[center]`, wrapping around both ends.
///
/// Sources with fewer than two items are returned unchanged. Small sources repeat: a
/// two-item source with radius 2 yields `[a, b, a, b, a]` when centered on `a`.
pub fn sliding_window<T: Copy>(source: &[T], center: usize, radius: usize) -> Vec<T> {
    if source.len() < 2 {
        return source.to_vec();
    }
    let center = center as isize;
    let radius = radius as isize;
    (center - radius..=center + radius)
        .filter_map(|i| circular_get(source, i))
        .collect()
}

/// Wraps an out-of-range index to the opposite edge of `[0, edge]`.
pub fn rewind(index: isize, edge: usize) -> usize {
    if index < 0 {
        edge
    } else if index as usize > edge {
        0
    } else {
        index as usize
    }
}

/// Clamps an index into `[0, edge]`.
pub fn trim(index: isize, edge: usize) -> usize {
    if index < 0 { 0 } else { (index as usize).min(edge) }
}

/// One slot of a [`Window`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowCell {
    /// Window-relative label (`center + center_distance`); may be negative or past the end.
    pub virtual_index: isize,
    /// Index of the real slide whose content fills this slot.
    pub real_index: usize,
    /// Signed distance from the window center, in slots.
    pub center_distance: isize,
}

/// The set of slots that must be live around the current index.
///
/// Labels are unique within a window even when real indexes repeat (small slide counts),
/// so membership is decided per label rather than per content.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    center: usize,
    radius: usize,
    cells: Vec<WindowCell>,
}

impl Window {
    pub fn new(len: usize, center: usize, radius: usize, policy: IndexPolicy) -> Self {
        let cells = match policy {
            IndexPolicy::Wrap => wrapped_cells(len, center, radius),
            IndexPolicy::Clamp => clamped_cells(len, center, radius),
        };
        Self {
            center,
            radius,
            cells,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn center(&self) -> usize {
        self.center
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    pub fn cells(&self) -> &[WindowCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell(&self, virtual_index: isize) -> Option<&WindowCell> {
        self.cells.iter().find(|c| c.virtual_index == virtual_index)
    }

    pub fn contains(&self, virtual_index: isize) -> bool {
        self.cell(virtual_index).is_some()
    }

    pub fn real_indices(&self) -> Vec<usize> {
        self.cells.iter().map(|c| c.real_index).collect()
    }

    /// Shifts every label by `shift`, keeping content and distances.
    ///
    /// Used after a rewind so the previous window lines up with the new label space.
    pub fn relabel(&self, shift: isize) -> Self {
        Self {
            center: self.center,
            radius: self.radius,
            cells: self
                .cells
                .iter()
                .map(|c| WindowCell {
                    virtual_index: c.virtual_index + shift,
                    ..*c
                })
                .collect(),
        }
    }
}

fn wrapped_cells(len: usize, center: usize, radius: usize) -> Vec<WindowCell> {
    let source: Vec<usize> = (0..len).collect();
    let reals = sliding_window(&source, center, radius);
    let origin = if len < 2 { 0 } else { center as isize - radius as isize };
    reals
        .into_iter()
        .enumerate()
        .map(|(i, real_index)| {
            let virtual_index = origin + i as isize;
            WindowCell {
                virtual_index,
                real_index,
                center_distance: virtual_index - center as isize,
            }
        })
        .collect()
}

fn clamped_cells(len: usize, center: usize, radius: usize) -> Vec<WindowCell> {
    let center_i = center as isize;
    let radius = radius as isize;
    (-radius..=radius)
        .filter_map(|d| {
            let index = center_i + d;
            (index >= 0 && (index as usize) < len).then_some(WindowCell {
                virtual_index: index,
                real_index: index as usize,
                center_distance: d,
            })
        })
        .collect()
}

/// A reconciliation step produced by [`diff`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Patch {
    Mount {
        virtual_index: isize,
        real_index: usize,
        center_distance: isize,
    },
    Unmount {
        virtual_index: isize,
        real_index: usize,
    },
}

/// Diffs two windows.
///
/// Every cell of `previous` whose label is gone from `current` (or now carries different
/// content) yields an [`Patch::Unmount`]; every cell of `current` yields a [`Patch::Mount`].
/// Unmounts come first.
pub fn diff(previous: &Window, current: &Window) -> Vec<Patch> {
    let mut patches = Vec::with_capacity(previous.len() + current.len());
    for cell in previous.cells() {
        let kept = current
            .cell(cell.virtual_index)
            .is_some_and(|c| c.real_index == cell.real_index);
        if !kept {
            patches.push(Patch::Unmount {
                virtual_index: cell.virtual_index,
                real_index: cell.real_index,
            });
        }
    }
    patches.extend(current.cells().iter().map(|c| Patch::Mount {
        virtual_index: c.virtual_index,
        real_index: c.real_index,
        center_distance: c.center_distance,
    }));
    patches
}
