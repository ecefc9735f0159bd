//! Kripke model access: the capability contract the checks read through,
//! plus an owned frame type and loaders for frame description files.
//!
//! The checks never see a concrete type. They only ask a model for its
//! world slots and for the successors of a world index.

mod discover;
mod document;
mod frame;

pub use discover::discover_frame_files;
pub use document::{load_frame, FrameDocument, FrameFormat, LoadedFrame, MAX_FRAME_SIZE};
pub use frame::Frame;

use std::borrow::Cow;

use crate::Result;

/// Index of a world slot, in `[0, size)`.
pub type WorldIndex = usize;

/// Read-only view of a Kripke model's accessibility relation.
pub trait AccessibilityModel {
    /// Presence flag for every slot, in index order. Absent slots are holes
    /// (e.g. deleted worlds) and are skipped by the checks.
    fn world_slots(&self) -> Result<Cow<'_, [bool]>>;

    /// Successors of `world` in their stored order.
    ///
    /// Must answer for any index that shows up as a successor value, present
    /// or not. `Ok(None)` means the world has no successor list and is read
    /// as "no outgoing edges".
    fn successors_of(&self, world: WorldIndex) -> Result<Option<Cow<'_, [WorldIndex]>>>;
}

impl<M: AccessibilityModel + ?Sized> AccessibilityModel for &M {
    fn world_slots(&self) -> Result<Cow<'_, [bool]>> {
        (**self).world_slots()
    }

    fn successors_of(&self, world: WorldIndex) -> Result<Option<Cow<'_, [WorldIndex]>>> {
        (**self).successors_of(world)
    }
}

impl<M: AccessibilityModel + ?Sized> AccessibilityModel for Box<M> {
    fn world_slots(&self) -> Result<Cow<'_, [bool]>> {
        (**self).world_slots()
    }

    fn successors_of(&self, world: WorldIndex) -> Result<Option<Cow<'_, [WorldIndex]>>> {
        (**self).successors_of(world)
    }
}

/// Successors of `world`, with a missing list normalized to an empty slice.
pub fn successors_or_empty<M>(model: &M, world: WorldIndex) -> Result<Cow<'_, [WorldIndex]>>
where
    M: AccessibilityModel + ?Sized,
{
    Ok(model
        .successors_of(world)?
        .unwrap_or(Cow::Borrowed(&[])))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FrameError;

    struct NoSuccessors;

    impl AccessibilityModel for NoSuccessors {
        fn world_slots(&self) -> Result<Cow<'_, [bool]>> {
            Ok(Cow::Owned(vec![true, true]))
        }

        fn successors_of(&self, _world: WorldIndex) -> Result<Option<Cow<'_, [WorldIndex]>>> {
            Ok(None)
        }
    }

    struct Broken;

    impl AccessibilityModel for Broken {
        fn world_slots(&self) -> Result<Cow<'_, [bool]>> {
            Err(FrameError::ContractViolation("no worlds".to_string()))
        }

        fn successors_of(&self, _world: WorldIndex) -> Result<Option<Cow<'_, [WorldIndex]>>> {
            Err(FrameError::ContractViolation("no successors".to_string()))
        }
    }

    #[test]
    fn test_missing_list_reads_as_empty() {
        let succ = successors_or_empty(&NoSuccessors, 1).unwrap();
        assert!(succ.is_empty());
    }

    #[test]
    fn test_stored_list_is_borrowed() {
        let frame = Frame::from_edges(2, [(0, 1), (0, 0)]).unwrap();
        let succ = successors_or_empty(&frame, 0).unwrap();
        assert!(matches!(succ, Cow::Borrowed(_)));
        assert_eq!(&*succ, &[1, 0]);
    }

    #[test]
    fn test_lookup_error_is_propagated() {
        let err = successors_or_empty(&Broken, 0).unwrap_err();
        assert!(matches!(err, FrameError::ContractViolation(_)));
    }

    #[test]
    fn test_boxed_and_borrowed_models_delegate() {
        let boxed: Box<dyn AccessibilityModel> = Box::new(NoSuccessors);
        assert_eq!(boxed.world_slots().unwrap().len(), 2);
        let by_ref = &&NoSuccessors;
        assert!(by_ref.successors_of(0).unwrap().is_none());
    }
}
