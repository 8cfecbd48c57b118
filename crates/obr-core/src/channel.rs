//! Per-channel descriptors of an audio element

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::element_type::AudioElementType;
use crate::layout::{Loudspeaker, layout_speakers};

/// Descriptor variant carried by an element's channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    /// Fixed-role channels (Ambisonic components, layout speakers)
    Loudspeaker,
    /// Positioned audio objects
    Object,
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelKind::Loudspeaker => f.write_str("loudspeaker"),
            ChannelKind::Object => f.write_str("object"),
        }
    }
}

/// ACN channel index from (order, degree)
pub fn acn_index(order: u32, degree: i32) -> usize {
    let order = order as i32;
    (order * order + order + degree) as usize
}

/// Get (order, degree) from ACN index
pub fn acn_to_order_degree(acn: usize) -> (u32, i32) {
    let order = acn.isqrt() as u32;
    let degree = acn as i32 - (order * order + order) as i32;
    (order, degree)
}

/// What a loudspeaker channel carries
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChannelRole {
    /// Spherical-harmonic component of an Ambisonic scene
    Ambisonic {
        /// ACN channel number
        acn: usize,
        /// Spherical-harmonic order
        order: u32,
        /// Spherical-harmonic degree
        degree: i32,
    },
    /// Feed of a named loudspeaker
    Speaker(&'static Loudspeaker),
}

/// Channel whose role is fixed by the layout and its position in it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoudspeakerChannel {
    role: ChannelRole,
}

impl LoudspeakerChannel {
    /// Ambisonic component channel
    pub fn ambisonic(acn: usize) -> Self {
        let (order, degree) = acn_to_order_degree(acn);
        Self {
            role: ChannelRole::Ambisonic { acn, order, degree },
        }
    }

    /// Named loudspeaker channel
    pub fn speaker(speaker: &'static Loudspeaker) -> Self {
        Self {
            role: ChannelRole::Speaker(speaker),
        }
    }

    /// Role of this channel
    pub fn role(&self) -> ChannelRole {
        self.role
    }

    /// Short human-readable label ("ACN 3", "Ltf", ...)
    pub fn label(&self) -> String {
        match self.role {
            ChannelRole::Ambisonic { acn, .. } => format!("ACN {acn}"),
            ChannelRole::Speaker(speaker) => speaker.label.to_string(),
        }
    }

    /// Is this the LFE feed
    pub fn is_lfe(&self) -> bool {
        matches!(self.role, ChannelRole::Speaker(s) if s.is_lfe)
    }
}

/// Positioned mono source
///
/// Angles are stored exactly as given. Azimuth is nominally in [-180, 180)
/// (0 = front, positive = right) but is not wrapped or clamped; out-of-range
/// values pass through to the renderer unchanged. Elevation is nominally in
/// [-90, 90]. Distance is in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectChannel {
    azimuth: f32,
    elevation: f32,
    distance: f32,
}

impl ObjectChannel {
    /// Create object at the given position
    pub fn new(azimuth: f32, elevation: f32, distance: f32) -> Self {
        Self {
            azimuth,
            elevation,
            distance,
        }
    }

    /// Azimuth in degrees
    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    /// Elevation in degrees
    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    /// Distance in meters
    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn set_azimuth(&mut self, azimuth: f32) {
        self.azimuth = azimuth;
    }

    pub fn set_elevation(&mut self, elevation: f32) {
        self.elevation = elevation;
    }

    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance;
    }

    /// Update the whole position at once
    pub fn set_position(&mut self, azimuth: f32, elevation: f32, distance: f32) {
        self.azimuth = azimuth;
        self.elevation = elevation;
        self.distance = distance;
    }
}

impl Default for ObjectChannel {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

/// Channel list of an element; one variant per element
#[derive(Debug, Clone, PartialEq)]
pub enum ElementChannels {
    /// Ambisonic and loudspeaker-layout elements
    Loudspeaker(Vec<LoudspeakerChannel>),
    /// Object elements
    Object(Vec<ObjectChannel>),
}

impl ElementChannels {
    /// Default channels for an element type, `None` for the sentinel
    pub fn for_type(element_type: AudioElementType) -> Option<Self> {
        let count = element_type.channel_count();

        if element_type.is_ambisonic() {
            let channels = (0..count).map(LoudspeakerChannel::ambisonic).collect();
            Some(ElementChannels::Loudspeaker(channels))
        } else if element_type.is_loudspeaker_layout() {
            let channels = layout_speakers(element_type)
                .iter()
                .map(LoudspeakerChannel::speaker)
                .collect();
            Some(ElementChannels::Loudspeaker(channels))
        } else if element_type.is_object() {
            Some(ElementChannels::Object(vec![ObjectChannel::default(); count]))
        } else {
            None
        }
    }

    /// Variant of this list
    pub fn kind(&self) -> ChannelKind {
        match self {
            ElementChannels::Loudspeaker(_) => ChannelKind::Loudspeaker,
            ElementChannels::Object(_) => ChannelKind::Object,
        }
    }

    /// Number of channels
    pub fn len(&self) -> usize {
        match self {
            ElementChannels::Loudspeaker(channels) => channels.len(),
            ElementChannels::Object(channels) => channels.len(),
        }
    }

    /// Has no channels
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acn_index() {
        assert_eq!(acn_index(0, 0), 0); // W
        assert_eq!(acn_index(1, -1), 1); // Y
        assert_eq!(acn_index(1, 0), 2); // Z
        assert_eq!(acn_index(1, 1), 3); // X
        assert_eq!(acn_index(4, 4), 24);
    }

    #[test]
    fn test_acn_round_trip() {
        for acn in 0..25 {
            let (order, degree) = acn_to_order_degree(acn);
            assert!(degree.unsigned_abs() <= order);
            assert_eq!(acn_index(order, degree), acn);
        }
    }

    #[test]
    fn test_ambisonic_channels() {
        let channels = ElementChannels::for_type(AudioElementType::SecondOrderAmbisonics).unwrap();
        assert_eq!(channels.kind(), ChannelKind::Loudspeaker);
        assert_eq!(channels.len(), 9);

        let ElementChannels::Loudspeaker(channels) = channels else {
            panic!("expected loudspeaker channels");
        };
        assert_eq!(
            channels[5].role(),
            ChannelRole::Ambisonic {
                acn: 5,
                order: 2,
                degree: -1
            }
        );
        assert_eq!(channels[5].label(), "ACN 5");
        assert!(!channels[0].is_lfe());
    }

    #[test]
    fn test_layout_channels() {
        let channels = ElementChannels::for_type(AudioElementType::Layout5_1).unwrap();
        let ElementChannels::Loudspeaker(channels) = channels else {
            panic!("expected loudspeaker channels");
        };
        let labels: Vec<String> = channels.iter().map(|c| c.label()).collect();
        assert_eq!(labels, ["L", "R", "C", "LFE", "Ls", "Rs"]);
        assert!(channels[3].is_lfe());
    }

    #[test]
    fn test_object_channels() {
        let channels = ElementChannels::for_type(AudioElementType::ObjectMono).unwrap();
        assert_eq!(channels, ElementChannels::Object(vec![ObjectChannel::default()]));
    }

    #[test]
    fn test_invalid_has_no_channels() {
        assert!(ElementChannels::for_type(AudioElementType::Invalid).is_none());
    }

    #[test]
    fn test_object_position_pass_through() {
        let mut object = ObjectChannel::default();
        object.set_azimuth(270.0);
        object.set_elevation(-95.0);
        object.set_distance(0.25);
        assert_eq!(object.azimuth(), 270.0);
        assert_eq!(object.elevation(), -95.0);
        assert_eq!(object.distance(), 0.25);

        object.set_position(-180.0, 90.0, 3.5);
        assert_eq!(object, ObjectChannel::new(-180.0, 90.0, 3.5));
    }
}
