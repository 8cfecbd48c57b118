//! Filter keys: (Ambisonic order, filter profile, ear)
//!
//! The canonical text form is `{order}OA{Profile}{Ear}`, e.g. `3OAAmbientR`.

use std::fmt;
use std::str::FromStr;

use obr_core::{AmbisonicOrder, AudioElementConfig, BinauralFilterProfile};

use crate::error::{FilterError, FilterResult};

/// Ear a filter feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ear {
    /// Left ear
    Left = 0,
    /// Right ear
    Right = 1,
}

impl Ear {
    /// Both ears, left first
    pub const BOTH: [Ear; 2] = [Ear::Left, Ear::Right];

    /// Key token ("L" / "R")
    pub fn as_str(&self) -> &'static str {
        match self {
            Ear::Left => "L",
            Ear::Right => "R",
        }
    }
}

impl fmt::Display for Ear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured registry key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilterKey {
    /// Ambisonic order of the decoder
    pub order: AmbisonicOrder,
    /// Acoustic profile
    pub profile: BinauralFilterProfile,
    /// Target ear
    pub ear: Ear,
}

impl FilterKey {
    /// Number of distinct keys
    pub const COUNT: usize = 4 * 3 * 2;

    pub fn new(order: AmbisonicOrder, profile: BinauralFilterProfile, ear: Ear) -> Self {
        Self {
            order,
            profile,
            ear,
        }
    }

    /// Key for one ear of an element, `None` unless the element is Ambisonic
    pub fn for_element(config: &AudioElementConfig, ear: Ear) -> Option<Self> {
        let order = config.element_type().ambisonic_order()?;
        Some(Self::new(order, config.filter_profile(), ear))
    }

    /// Every key, ordered by order, then profile, then ear
    pub fn all() -> impl Iterator<Item = FilterKey> {
        AmbisonicOrder::ALL.into_iter().flat_map(|order| {
            BinauralFilterProfile::ALL.into_iter().flat_map(move |profile| {
                Ear::BOTH
                    .into_iter()
                    .map(move |ear| FilterKey::new(order, profile, ear))
            })
        })
    }

    /// Dense table slot, matches the position in [`FilterKey::all`]
    #[inline]
    pub fn index(&self) -> usize {
        ((self.order.as_usize() - 1) * BinauralFilterProfile::ALL.len() + self.profile.index())
            * Ear::BOTH.len()
            + self.ear as usize
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}OA{}{}", self.order, self.profile, self.ear)
    }
}

impl FromStr for FilterKey {
    type Err = FilterError;

    fn from_str(s: &str) -> FilterResult<Self> {
        let malformed = || FilterError::MalformedKey(s.to_string());

        let (order, rest) = s.split_at_checked(1).ok_or_else(malformed)?;
        let rest = rest.strip_prefix("OA").ok_or_else(malformed)?;
        let order = order
            .parse::<usize>()
            .ok()
            .and_then(|n| AmbisonicOrder::from_order(n).ok())
            .ok_or_else(malformed)?;

        let (profile, ear) = if let Some(profile) = rest.strip_suffix('L') {
            (profile, Ear::Left)
        } else if let Some(profile) = rest.strip_suffix('R') {
            (profile, Ear::Right)
        } else {
            return Err(malformed());
        };
        let profile = profile
            .parse::<BinauralFilterProfile>()
            .map_err(|_| malformed())?;

        Ok(Self::new(order, profile, ear))
    }
}
