//! Audio element taxonomy: stream layouts, Ambisonic orders and filter profiles
//!
//! Every valid [`AudioElementType`] and every [`BinauralFilterProfile`] has
//! exactly one textual token. `Display` writes that token and `FromStr` reads
//! it back, so `t.to_string().parse() == Ok(t)` for all valid values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::channel::ChannelKind;
use crate::error::{ObrError, ObrResult, TokenKind};

/// Ambisonic order (determines spatial resolution)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AmbisonicOrder {
    /// First order (4 channels)
    First = 1,
    /// Second order (9 channels)
    Second = 2,
    /// Third order (16 channels)
    Third = 3,
    /// Fourth order (25 channels)
    Fourth = 4,
}

impl AmbisonicOrder {
    /// All supported orders, ascending
    pub const ALL: [AmbisonicOrder; 4] = [
        AmbisonicOrder::First,
        AmbisonicOrder::Second,
        AmbisonicOrder::Third,
        AmbisonicOrder::Fourth,
    ];

    /// Get channel count for this order
    pub fn channel_count(&self) -> usize {
        let n = *self as usize;
        (n + 1) * (n + 1)
    }

    /// Create from order number
    pub fn from_order(order: usize) -> ObrResult<Self> {
        match order {
            1 => Ok(AmbisonicOrder::First),
            2 => Ok(AmbisonicOrder::Second),
            3 => Ok(AmbisonicOrder::Third),
            4 => Ok(AmbisonicOrder::Fourth),
            _ => Err(ObrError::InvalidAmbisonicOrder(order)),
        }
    }

    /// Get order number
    pub fn as_usize(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for AmbisonicOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_usize())
    }
}

/// Acoustic character of the binaural filters applied to an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BinauralFilterProfile {
    /// Direct path only
    Direct = 0,
    /// Diffuse ambience
    #[default]
    Ambient = 1,
    /// Reverberant tail
    Reverberant = 2,
}

impl BinauralFilterProfile {
    /// All profiles in table order
    pub const ALL: [BinauralFilterProfile; 3] = [
        BinauralFilterProfile::Direct,
        BinauralFilterProfile::Ambient,
        BinauralFilterProfile::Reverberant,
    ];

    /// Textual token
    pub fn as_str(&self) -> &'static str {
        match self {
            BinauralFilterProfile::Direct => "Direct",
            BinauralFilterProfile::Ambient => "Ambient",
            BinauralFilterProfile::Reverberant => "Reverberant",
        }
    }

    /// Position in [`Self::ALL`]
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for BinauralFilterProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BinauralFilterProfile {
    type Err = ObrError;

    fn from_str(s: &str) -> ObrResult<Self> {
        if s.is_empty() {
            return Err(ObrError::MissingToken {
                kind: TokenKind::FilterType,
            });
        }

        Self::ALL
            .into_iter()
            .find(|profile| profile.as_str() == s)
            .ok_or_else(|| ObrError::UnrecognizedToken {
                kind: TokenKind::FilterType,
                token: s.to_string(),
            })
    }
}

/// Spatial layout of an audio element
///
/// Serialized with the same tokens accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AudioElementType {
    /// Sentinel for "no type chosen"; never yields a configuration
    #[default]
    #[serde(rename = "invalid")]
    Invalid,

    /// First order Ambisonics
    #[serde(rename = "1OA")]
    FirstOrderAmbisonics,
    /// Second order Ambisonics
    #[serde(rename = "2OA")]
    SecondOrderAmbisonics,
    /// Third order Ambisonics
    #[serde(rename = "3OA")]
    ThirdOrderAmbisonics,
    /// Fourth order Ambisonics
    #[serde(rename = "4OA")]
    FourthOrderAmbisonics,

    /// Mono loudspeaker layout
    #[serde(rename = "Mono")]
    LayoutMono,
    /// Stereo loudspeaker layout
    #[serde(rename = "Stereo")]
    LayoutStereo,
    /// 3.1.2 layout
    #[serde(rename = "3.1.2")]
    Layout3_1_2,
    /// 5.1 layout
    #[serde(rename = "5.1")]
    Layout5_1,
    /// 5.1.2 layout
    #[serde(rename = "5.1.2")]
    Layout5_1_2,
    /// 5.1.4 layout
    #[serde(rename = "5.1.4")]
    Layout5_1_4,
    /// 7.1 layout
    #[serde(rename = "7.1")]
    Layout7_1,
    /// 7.1.2 layout
    #[serde(rename = "7.1.2")]
    Layout7_1_2,
    /// 7.1.4 layout
    #[serde(rename = "7.1.4")]
    Layout7_1_4,
    /// 9.1.6 layout
    #[serde(rename = "9.1.6")]
    Layout9_1_6,

    /// Single mono audio object
    #[serde(rename = "OBA")]
    ObjectMono,
}

impl AudioElementType {
    /// Every valid type (excludes [`AudioElementType::Invalid`])
    pub const ALL: [AudioElementType; 15] = [
        AudioElementType::FirstOrderAmbisonics,
        AudioElementType::SecondOrderAmbisonics,
        AudioElementType::ThirdOrderAmbisonics,
        AudioElementType::FourthOrderAmbisonics,
        AudioElementType::LayoutMono,
        AudioElementType::LayoutStereo,
        AudioElementType::Layout3_1_2,
        AudioElementType::Layout5_1,
        AudioElementType::Layout5_1_2,
        AudioElementType::Layout5_1_4,
        AudioElementType::Layout7_1,
        AudioElementType::Layout7_1_2,
        AudioElementType::Layout7_1_4,
        AudioElementType::Layout9_1_6,
        AudioElementType::ObjectMono,
    ];

    /// Textual token, `None` for the sentinel
    pub fn token(&self) -> Option<&'static str> {
        use AudioElementType::*;

        let token = match self {
            Invalid => return None,
            FirstOrderAmbisonics => "1OA",
            SecondOrderAmbisonics => "2OA",
            ThirdOrderAmbisonics => "3OA",
            FourthOrderAmbisonics => "4OA",
            LayoutMono => "Mono",
            LayoutStereo => "Stereo",
            Layout3_1_2 => "3.1.2",
            Layout5_1 => "5.1",
            Layout5_1_2 => "5.1.2",
            Layout5_1_4 => "5.1.4",
            Layout7_1 => "7.1",
            Layout7_1_2 => "7.1.2",
            Layout7_1_4 => "7.1.4",
            Layout9_1_6 => "9.1.6",
            ObjectMono => "OBA",
        };
        Some(token)
    }

    /// Ambisonic order, if this is an Ambisonic type
    pub fn ambisonic_order(&self) -> Option<AmbisonicOrder> {
        match self {
            AudioElementType::FirstOrderAmbisonics => Some(AmbisonicOrder::First),
            AudioElementType::SecondOrderAmbisonics => Some(AmbisonicOrder::Second),
            AudioElementType::ThirdOrderAmbisonics => Some(AmbisonicOrder::Third),
            AudioElementType::FourthOrderAmbisonics => Some(AmbisonicOrder::Fourth),
            _ => None,
        }
    }

    /// Ambisonic type of the given order
    pub fn from_ambisonic_order(order: AmbisonicOrder) -> Self {
        match order {
            AmbisonicOrder::First => AudioElementType::FirstOrderAmbisonics,
            AmbisonicOrder::Second => AudioElementType::SecondOrderAmbisonics,
            AmbisonicOrder::Third => AudioElementType::ThirdOrderAmbisonics,
            AmbisonicOrder::Fourth => AudioElementType::FourthOrderAmbisonics,
        }
    }

    /// Is this an Ambisonic scene
    pub fn is_ambisonic(&self) -> bool {
        self.ambisonic_order().is_some()
    }

    /// Is this a named loudspeaker layout
    pub fn is_loudspeaker_layout(&self) -> bool {
        use AudioElementType::*;
        matches!(
            self,
            LayoutMono
                | LayoutStereo
                | Layout3_1_2
                | Layout5_1
                | Layout5_1_2
                | Layout5_1_4
                | Layout7_1
                | Layout7_1_2
                | Layout7_1_4
                | Layout9_1_6
        )
    }

    /// Is this an object-based element
    pub fn is_object(&self) -> bool {
        matches!(self, AudioElementType::ObjectMono)
    }

    /// Number of input channels occupied by an element of this type
    ///
    /// Order N Ambisonics uses (N+1)² channels. The sentinel has none.
    pub fn channel_count(&self) -> usize {
        use AudioElementType::*;

        if let Some(order) = self.ambisonic_order() {
            return order.channel_count();
        }

        match self {
            LayoutMono | ObjectMono => 1,
            LayoutStereo => 2,
            Layout3_1_2 | Layout5_1 => 6,
            Layout5_1_2 | Layout7_1 => 8,
            Layout5_1_4 | Layout7_1_2 => 10,
            Layout7_1_4 => 12,
            Layout9_1_6 => 16,
            _ => 0,
        }
    }

    /// Channel descriptor variant used by this type
    pub fn channel_kind(&self) -> Option<ChannelKind> {
        if self.is_object() {
            Some(ChannelKind::Object)
        } else if self.is_ambisonic() || self.is_loudspeaker_layout() {
            Some(ChannelKind::Loudspeaker)
        } else {
            None
        }
    }
}

impl fmt::Display for AudioElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token().unwrap_or("invalid"))
    }
}

impl FromStr for AudioElementType {
    type Err = ObrError;

    fn from_str(s: &str) -> ObrResult<Self> {
        if s.is_empty() {
            return Err(ObrError::MissingToken {
                kind: TokenKind::InputType,
            });
        }

        Self::ALL
            .into_iter()
            .find(|ty| ty.token() == Some(s))
            .ok_or_else(|| ObrError::UnrecognizedToken {
                kind: TokenKind::InputType,
                token: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambisonic_channel_count() {
        assert_eq!(AmbisonicOrder::First.channel_count(), 4);
        assert_eq!(AmbisonicOrder::Second.channel_count(), 9);
        assert_eq!(AmbisonicOrder::Third.channel_count(), 16);
        assert_eq!(AmbisonicOrder::Fourth.channel_count(), 25);

        for order in AmbisonicOrder::ALL {
            let ty = AudioElementType::from_ambisonic_order(order);
            assert_eq!(ty.ambisonic_order(), Some(order));
            assert_eq!(ty.channel_count(), (order.as_usize() + 1).pow(2));
        }
    }

    #[test]
    fn test_from_order() {
        assert_eq!(AmbisonicOrder::from_order(3), Ok(AmbisonicOrder::Third));
        assert_eq!(
            AmbisonicOrder::from_order(5),
            Err(ObrError::InvalidAmbisonicOrder(5))
        );
        assert!(AmbisonicOrder::from_order(0).is_err());
    }

    #[test]
    fn test_layout_channel_counts() {
        assert_eq!(AudioElementType::LayoutMono.channel_count(), 1);
        assert_eq!(AudioElementType::LayoutStereo.channel_count(), 2);
        assert_eq!(AudioElementType::Layout5_1.channel_count(), 6);
        assert_eq!(AudioElementType::Layout7_1_4.channel_count(), 12);
        assert_eq!(AudioElementType::Layout9_1_6.channel_count(), 16);
        assert_eq!(AudioElementType::ObjectMono.channel_count(), 1);
        assert_eq!(AudioElementType::Invalid.channel_count(), 0);
    }

    #[test]
    fn test_categories_are_exclusive() {
        for ty in AudioElementType::ALL {
            let flags = [ty.is_ambisonic(), ty.is_loudspeaker_layout(), ty.is_object()];
            assert_eq!(flags.iter().filter(|&&f| f).count(), 1, "{ty:?}");
            assert!(ty.channel_kind().is_some());
        }
        assert_eq!(AudioElementType::Invalid.channel_kind(), None);
    }

    #[test]
    fn test_element_type_round_trip() {
        for ty in AudioElementType::ALL {
            let token = ty.to_string();
            assert_eq!(token.parse::<AudioElementType>(), Ok(ty));
        }
        for token in ["1OA", "2OA", "3OA", "4OA", "7.1.4", "OBA"] {
            let ty: AudioElementType = token.parse().unwrap();
            assert_eq!(ty.to_string(), token);
        }
    }

    #[test]
    fn test_profile_round_trip() {
        for profile in BinauralFilterProfile::ALL {
            assert_eq!(profile.to_string().parse(), Ok(profile));
        }
        for token in ["Direct", "Ambient", "Reverberant"] {
            let profile: BinauralFilterProfile = token.parse().unwrap();
            assert_eq!(profile.to_string(), token);
        }
        assert_eq!(BinauralFilterProfile::default(), BinauralFilterProfile::Ambient);
    }

    #[test]
    fn test_unrecognized_tokens() {
        assert_eq!(
            "5OA".parse::<AudioElementType>(),
            Err(ObrError::UnrecognizedToken {
                kind: TokenKind::InputType,
                token: "5OA".into(),
            })
        );
        assert_eq!(
            "ambient".parse::<BinauralFilterProfile>(),
            Err(ObrError::UnrecognizedToken {
                kind: TokenKind::FilterType,
                token: "ambient".into(),
            })
        );
        // The sentinel has no token of its own
        assert!("invalid".parse::<AudioElementType>().is_err());
    }

    #[test]
    fn test_empty_tokens() {
        let err = "".parse::<AudioElementType>().unwrap_err();
        assert_eq!(err.to_string(), "No input type specified");

        let err = "".parse::<BinauralFilterProfile>().unwrap_err();
        assert_eq!(err.to_string(), "No filter type specified");
    }

    #[test]
    fn test_serde_uses_tokens() {
        let json = serde_json::to_string(&AudioElementType::Layout7_1_4).unwrap();
        assert_eq!(json, "\"7.1.4\"");

        let ty: AudioElementType = serde_json::from_str("\"3OA\"").unwrap();
        assert_eq!(ty, AudioElementType::ThirdOrderAmbisonics);

        let profile: BinauralFilterProfile = serde_json::from_str("\"Reverberant\"").unwrap();
        assert_eq!(profile, BinauralFilterProfile::Reverberant);
    }
}
