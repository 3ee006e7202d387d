use crate::{Patch, Window, WindowCell, diff};

/// The parts of a slide the planner looks at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SlideRef {
    pub idx: isize,
    pub real_index: usize,
    pub is_clone: bool,
    pub is_mounted: bool,
}

/// Which slide fills a window cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Source {
    /// An existing slide, by collection position.
    Slot(usize),
    /// A new clone of the given real slide.
    Clone { of: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Assignment {
    pub source: Source,
    pub cell: WindowCell,
}

/// A complete reconciliation pass, computed before any node is touched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Plan {
    /// In mount order: center first, then outwards, left before right.
    pub assignments: Vec<Assignment>,
    /// Mounted slides that no cell claimed.
    pub unmount: Vec<usize>,
    /// Clones that no cell claimed; removed from the collection.
    pub discard: Vec<usize>,
}

impl Plan {
    pub fn new_clones(&self) -> usize {
        self.assignments
            .iter()
            .filter(|a| matches!(a.source, Source::Clone { .. }))
            .count()
    }
}

/// Assigns a slide to every cell of `current`.
///
/// Every real slide whose content is in the window takes a cell, so clones only ever fill
/// cells repeating a content that is already on screen. Preference per cell: the real slide
/// already holding the label, then the real slide for the content, then the clone already
/// holding the label, then a spare clone of the content, then a new clone.
pub(crate) fn plan(slides: &[SlideRef], previous: &Window, current: &Window) -> Plan {
    let mut cells: Vec<WindowCell> = diff(previous, current)
        .iter()
        .filter_map(|p| match *p {
            Patch::Mount {
                virtual_index,
                real_index,
                center_distance,
            } => Some(WindowCell {
                virtual_index,
                real_index,
                center_distance,
            }),
            Patch::Unmount { .. } => None,
        })
        .collect();
    cells.sort_by_key(|c| (c.center_distance.unsigned_abs(), c.center_distance));

    let mut claimed = vec![false; slides.len()];
    let mut sources: Vec<Option<Source>> = vec![None; cells.len()];

    let holder = |cell: &WindowCell, is_clone: bool, claimed: &[bool]| {
        (0..slides.len()).find(|&slot| {
            let s = &slides[slot];
            !claimed[slot]
                && s.is_mounted
                && s.is_clone == is_clone
                && s.idx == cell.virtual_index
                && s.real_index == cell.real_index
        })
    };

    for (i, cell) in cells.iter().enumerate() {
        if let Some(slot) = holder(cell, false, &claimed) {
            claimed[slot] = true;
            sources[i] = Some(Source::Slot(slot));
        }
    }

    // Remaining real slides: prefer a cell no clone is holding, so clones keep their labels.
    for slot in 0..slides.len() {
        let s = &slides[slot];
        if s.is_clone || claimed[slot] {
            continue;
        }
        let open = |i: usize| sources[i].is_none() && cells[i].real_index == s.real_index;
        let target = (0..cells.len())
            .find(|&i| open(i) && holder(&cells[i], true, &claimed).is_none())
            .or_else(|| (0..cells.len()).find(|&i| open(i)));
        if let Some(i) = target {
            claimed[slot] = true;
            sources[i] = Some(Source::Slot(slot));
        }
    }

    for (i, cell) in cells.iter().enumerate() {
        if sources[i].is_some() {
            continue;
        }
        if let Some(slot) = holder(cell, true, &claimed) {
            claimed[slot] = true;
            sources[i] = Some(Source::Slot(slot));
        }
    }

    for (i, cell) in cells.iter().enumerate() {
        if sources[i].is_some() {
            continue;
        }
        let spare = (0..slides.len()).find(|&slot| {
            let s = &slides[slot];
            !claimed[slot] && s.is_clone && s.real_index == cell.real_index
        });
        let source = match spare {
            Some(slot) => {
                claimed[slot] = true;
                Source::Slot(slot)
            }
            None => Source::Clone {
                of: cell.real_index,
            },
        };
        sources[i] = Some(source);
    }

    let assignments = cells
        .into_iter()
        .zip(sources)
        .filter_map(|(cell, source)| source.map(|source| Assignment { source, cell }))
        .collect();

    let unmount = (0..slides.len())
        .filter(|&slot| slides[slot].is_mounted && !claimed[slot])
        .collect();
    let discard = (0..slides.len())
        .filter(|&slot| slides[slot].is_clone && !claimed[slot])
        .collect();

    Plan {
        assignments,
        unmount,
        discard,
    }
}
