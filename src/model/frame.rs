//! Owned Kripke frame: world slots plus optional successor lists.

use std::borrow::Cow;

use super::{AccessibilityModel, WorldIndex};
use crate::{FrameError, Result};

/// In-memory frame.
///
/// Every slot carries a presence flag and an optional successor list.
/// Removing a world only clears its flag; edges into and out of it stay,
/// so a hole can still be a successor value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    slots: Vec<bool>,
    successors: Vec<Option<Vec<WorldIndex>>>,
}

impl Frame {
    /// Frame with `size` present worlds and no successor lists.
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![true; size],
            successors: vec![None; size],
        }
    }

    /// Build a frame of `size` worlds and add `edges` in order.
    pub fn from_edges<I>(size: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (WorldIndex, WorldIndex)>,
    {
        let mut frame = Self::new(size);
        for (from, to) in edges {
            frame.add_edge(from, to)?;
        }
        Ok(frame)
    }

    /// Number of slots, present or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn present_count(&self) -> usize {
        self.slots.iter().filter(|present| **present).count()
    }

    /// Total number of stored edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.successors.iter().flatten().map(Vec::len).sum()
    }

    pub fn is_present(&self, world: WorldIndex) -> bool {
        self.slots.get(world).copied().unwrap_or(false)
    }

    /// Append `to` to the successor list of `from`, creating the list if
    /// missing. Duplicate edges are kept.
    pub fn add_edge(&mut self, from: WorldIndex, to: WorldIndex) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        self.successors[from].get_or_insert_with(Vec::new).push(to);
        Ok(())
    }

    /// Remove every `from -> to` edge. Returns whether anything was removed.
    pub fn remove_edge(&mut self, from: WorldIndex, to: WorldIndex) -> bool {
        match self.successors.get_mut(from).and_then(Option::as_mut) {
            Some(list) => {
                let before = list.len();
                list.retain(|succ| *succ != to);
                list.len() != before
            }
            None => false,
        }
    }

    /// Mark `world` absent. Its edges are left untouched.
    pub fn remove_world(&mut self, world: WorldIndex) -> Result<()> {
        self.check_index(world)?;
        self.slots[world] = false;
        Ok(())
    }

    pub fn restore_world(&mut self, world: WorldIndex) -> Result<()> {
        self.check_index(world)?;
        self.slots[world] = true;
        Ok(())
    }

    fn check_index(&self, world: WorldIndex) -> Result<()> {
        if world < self.slots.len() {
            Ok(())
        } else {
            Err(FrameError::InvalidInput(format!(
                "world {} is outside a frame of {} slots",
                world,
                self.slots.len()
            )))
        }
    }
}

impl AccessibilityModel for Frame {
    fn world_slots(&self) -> Result<Cow<'_, [bool]>> {
        Ok(Cow::Borrowed(&self.slots))
    }

    fn successors_of(&self, world: WorldIndex) -> Result<Option<Cow<'_, [WorldIndex]>>> {
        Ok(self
            .successors
            .get(world)
            .and_then(Option::as_deref)
            .map(Cow::Borrowed))
    }
}
