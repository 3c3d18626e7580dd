use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// How far the sun's centre sits from the vertical at the phase boundary, in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SunZenith {
    /// Upper limb on the horizon, with standard refraction.
    #[default]
    Official,
    /// Centre 6° below the horizon.
    Civil,
    /// Centre 12° below the horizon.
    Nautical,
    /// Centre 18° below the horizon.
    Astronomical,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sun zenith `{0}` (expected official, civil, nautical, or astronomical)")]
pub struct UnknownZenith(pub String);

impl SunZenith {
    pub const ALL: [Self; 4] = [
        Self::Official,
        Self::Civil,
        Self::Nautical,
        Self::Astronomical,
    ];

    pub fn degrees(self) -> f64 {
        match self {
            Self::Official => 90.8889,
            Self::Civil => 96.0,
            Self::Nautical => 102.0,
            Self::Astronomical => 108.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Official => "official",
            Self::Civil => "civil",
            Self::Nautical => "nautical",
            Self::Astronomical => "astronomical",
        }
    }
}

impl fmt::Display for SunZenith {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SunZenith {
    type Err = UnknownZenith;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|z| z.name() == lower)
            .ok_or_else(|| UnknownZenith(s.to_string()))
    }
}
