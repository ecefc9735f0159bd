//! Frame property checks: reflexivity, symmetry and transitivity of an
//! accessibility relation.
//!
//! Each check walks present worlds in index order and successors in stored
//! order, and stops at the first counterexample. Successor values are
//! dereferenced whether or not they name a present world. A missing
//! successor list counts as no outgoing edges. Errors only come from the
//! model itself failing to provide its capabilities.

mod class;

pub use class::{check_all, FrameClass, FrameProperties, FrameProperty};

use crate::model::{successors_or_empty, AccessibilityModel, WorldIndex};
use crate::Result;

/// True when `holds(world, successors(world))` is true for every present
/// world, visited in index order. Stops at the first world that fails.
fn all_present_worlds<M, F>(model: &M, mut holds: F) -> Result<bool>
where
    M: AccessibilityModel + ?Sized,
    F: FnMut(WorldIndex, &[WorldIndex]) -> Result<bool>,
{
    let slots = model.world_slots()?;
    for (world, &present) in slots.iter().enumerate() {
        if !present {
            continue;
        }
        let successors = successors_or_empty(model, world)?;
        if !holds(world, &successors)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// True when `holds(target, successors(target))` is true for every target in
/// `targets`, in order. Targets are looked up without a presence check.
fn all_successors<M, F>(model: &M, targets: &[WorldIndex], mut holds: F) -> Result<bool>
where
    M: AccessibilityModel + ?Sized,
    F: FnMut(WorldIndex, &[WorldIndex]) -> bool,
{
    for &target in targets {
        let successors = successors_or_empty(model, target)?;
        if !holds(target, &successors) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Every present world sees itself.
pub fn is_reflexive<M>(model: &M) -> Result<bool>
where
    M: AccessibilityModel + ?Sized,
{
    all_present_worlds(model, |world, successors| {
        let holds = successors.contains(&world);
        if !holds {
            log::debug!("not reflexive: world {} has no self-loop", world);
        }
        Ok(holds)
    })
}

/// Every edge `i -> j` out of a present world has a back-edge `j -> i`.
pub fn is_symmetric<M>(model: &M) -> Result<bool>
where
    M: AccessibilityModel + ?Sized,
{
    all_present_worlds(model, |world, successors| {
        all_successors(model, successors, |target, back_edges| {
            let holds = back_edges.contains(&world);
            if !holds {
                log::debug!(
                    "not symmetric: edge {} -> {} has no back-edge",
                    world,
                    target
                );
            }
            holds
        })
    })
}

/// Every path `i -> mid -> end` out of a present world has a direct edge
/// `i -> end`.
pub fn is_transitive<M>(model: &M) -> Result<bool>
where
    M: AccessibilityModel + ?Sized,
{
    all_present_worlds(model, |world, direct| {
        all_successors(model, direct, |mid, mid_successors| {
            mid_successors.iter().all(|end| {
                let holds = direct.contains(end);
                if !holds {
                    log::debug!(
                        "not transitive: path {} -> {} -> {} has no edge {} -> {}",
                        world,
                        mid,
                        end,
                        world,
                        end
                    );
                }
                holds
            })
        })
    })
}
