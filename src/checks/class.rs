//! Frame classes characterized by the three relation properties.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::{is_reflexive, is_symmetric, is_transitive};
use crate::model::AccessibilityModel;
use crate::{FrameError, Result};

/// One of the three checked relation properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FrameProperty {
    Reflexive,
    Symmetric,
    Transitive,
}

impl fmt::Display for FrameProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Reflexive => "reflexive",
            Self::Symmetric => "symmetric",
            Self::Transitive => "transitive",
        };
        f.pad(name)
    }
}

/// Verdicts of the three checks for one model
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FrameProperties {
    pub reflexive: bool,
    pub symmetric: bool,
    pub transitive: bool,
}

impl FrameProperties {
    pub fn has(&self, property: FrameProperty) -> bool {
        match property {
            FrameProperty::Reflexive => self.reflexive,
            FrameProperty::Symmetric => self.symmetric,
            FrameProperty::Transitive => self.transitive,
        }
    }

    /// Strongest modal system whose frame condition these verdicts meet
    pub fn class(&self) -> FrameClass {
        match (self.reflexive, self.symmetric, self.transitive) {
            (false, false, false) => FrameClass::K,
            (true, false, false) => FrameClass::T,
            (false, true, false) => FrameClass::KB,
            (false, false, true) => FrameClass::K4,
            (true, true, false) => FrameClass::B,
            (true, false, true) => FrameClass::S4,
            (false, true, true) => FrameClass::KB4,
            (true, true, true) => FrameClass::S5,
        }
    }
}

/// Run all three checks, in the order reflexive, symmetric, transitive.
pub fn check_all<M>(model: &M) -> Result<FrameProperties>
where
    M: AccessibilityModel + ?Sized,
{
    Ok(FrameProperties {
        reflexive: is_reflexive(model)?,
        symmetric: is_symmetric(model)?,
        transitive: is_transitive(model)?,
    })
}

/// Normal modal systems distinguished by reflexivity, symmetry and
/// transitivity of their frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FrameClass {
    K,
    T,
    KB,
    K4,
    B,
    S4,
    KB4,
    S5,
}

impl FrameClass {
    pub const ALL: [FrameClass; 8] = [
        FrameClass::K,
        FrameClass::T,
        FrameClass::KB,
        FrameClass::K4,
        FrameClass::B,
        FrameClass::S4,
        FrameClass::KB4,
        FrameClass::S5,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::K => "K",
            Self::T => "T",
            Self::KB => "KB",
            Self::K4 => "K4",
            Self::B => "B",
            Self::S4 => "S4",
            Self::KB4 => "KB4",
            Self::S5 => "S5",
        }
    }

    /// Properties a frame needs for this system
    pub fn requires(self) -> FrameProperties {
        let (reflexive, symmetric, transitive) = match self {
            Self::K => (false, false, false),
            Self::T => (true, false, false),
            Self::KB => (false, true, false),
            Self::K4 => (false, false, true),
            Self::B => (true, true, false),
            Self::S4 => (true, false, true),
            Self::KB4 => (false, true, true),
            Self::S5 => (true, true, true),
        };
        FrameProperties {
            reflexive,
            symmetric,
            transitive,
        }
    }

    /// Whether frames with `properties` are frames for this system.
    pub fn admits(self, properties: FrameProperties) -> bool {
        let required = self.requires();
        (!required.reflexive || properties.reflexive)
            && (!required.symmetric || properties.symmetric)
            && (!required.transitive || properties.transitive)
    }
}

impl fmt::Display for FrameClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for FrameClass {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|class| class.name() == upper)
            .ok_or_else(|| FrameError::InvalidInput(format!("unknown frame class: {}", s)))
    }
}
