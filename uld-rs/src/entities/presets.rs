use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::entities::Container;

/// Standard sea containers and air ULDs (lengths in cm, weights in kg).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainerPreset {
    #[serde(rename = "20ft")]
    Sea20ft,
    #[serde(rename = "40ft")]
    Sea40ft,
    #[serde(rename = "40ft HC")]
    Sea40ftHighCube,
    #[serde(rename = "LD3")]
    Ld3,
    #[serde(rename = "LD6")]
    Ld6,
    #[serde(rename = "LD9")]
    Ld9,
}

impl ContainerPreset {
    pub const ALL: [ContainerPreset; 6] = [
        ContainerPreset::Sea20ft,
        ContainerPreset::Sea40ft,
        ContainerPreset::Sea40ftHighCube,
        ContainerPreset::Ld3,
        ContainerPreset::Ld6,
        ContainerPreset::Ld9,
    ];

    pub fn container(&self) -> Container {
        match self {
            ContainerPreset::Sea20ft => Container::new(589.0, 235.0, 239.0, 28200.0),
            ContainerPreset::Sea40ft => Container::new(1203.0, 235.0, 239.0, 28800.0),
            ContainerPreset::Sea40ftHighCube => Container::new(1203.0, 235.0, 269.0, 28600.0),
            ContainerPreset::Ld3 => Container::new(156.0, 153.0, 163.0, 1588.0),
            ContainerPreset::Ld6 => Container::new(318.0, 153.0, 163.0, 3175.0),
            ContainerPreset::Ld9 => Container::new(318.0, 224.0, 163.0, 4626.0),
        }
    }

    /// True for air ULDs, false for sea containers
    pub fn is_air(&self) -> bool {
        matches!(
            self,
            ContainerPreset::Ld3 | ContainerPreset::Ld6 | ContainerPreset::Ld9
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            ContainerPreset::Sea20ft => "20ft",
            ContainerPreset::Sea40ft => "40ft",
            ContainerPreset::Sea40ftHighCube => "40ft HC",
            ContainerPreset::Ld3 => "LD3",
            ContainerPreset::Ld6 => "LD6",
            ContainerPreset::Ld9 => "LD9",
        }
    }
}

impl FromStr for ContainerPreset {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match ContainerPreset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
        {
            Some(preset) => Ok(preset),
            None => bail!(
                "unknown container preset: {s:?}, expected one of {:?}",
                ContainerPreset::ALL.map(|p| p.name())
            ),
        }
    }
}

impl Display for ContainerPreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
