//! Audio element configuration
//!
//! An [`AudioElementConfig`] describes one element of a multichannel input:
//! its layout, which filter profile renders it, where its channels start in
//! the stream, and one descriptor per channel. The descriptor list is built
//! from the element type and always has `element_type.channel_count()`
//! entries of a single variant.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::channel::{ChannelKind, ElementChannels, LoudspeakerChannel, ObjectChannel};
use crate::element_type::{AudioElementType, BinauralFilterProfile};
use crate::error::{ObrError, ObrResult};

/// Configuration of a single audio element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ConfigRecord", into = "ConfigRecord")]
pub struct AudioElementConfig {
    element_type: AudioElementType,
    filter_profile: BinauralFilterProfile,
    first_channel_index: usize,
    channels: ElementChannels,
}

impl AudioElementConfig {
    /// Create configuration with the default (Ambient) filter profile
    pub fn new(element_type: AudioElementType) -> ObrResult<Self> {
        Self::with_profile(element_type, BinauralFilterProfile::default())
    }

    /// Create configuration with an explicit filter profile
    pub fn with_profile(
        element_type: AudioElementType,
        filter_profile: BinauralFilterProfile,
    ) -> ObrResult<Self> {
        let channels = ElementChannels::for_type(element_type).ok_or(ObrError::InvalidType)?;

        log::debug!(
            "Audio element {} ({} channels, {} filters)",
            element_type,
            channels.len(),
            filter_profile
        );

        Ok(Self {
            element_type,
            filter_profile,
            first_channel_index: 0,
            channels,
        })
    }

    /// Element type
    pub fn element_type(&self) -> AudioElementType {
        self.element_type
    }

    /// Filter profile used for every channel
    pub fn filter_profile(&self) -> BinauralFilterProfile {
        self.filter_profile
    }

    /// Stream channel where this element starts
    pub fn first_channel_index(&self) -> usize {
        self.first_channel_index
    }

    /// Place the element in a larger stream
    ///
    /// Not checked against other elements; the session owning the element
    /// keeps ranges consistent.
    pub fn set_first_channel_index(&mut self, index: usize) {
        self.first_channel_index = index;
    }

    /// Number of input channels, derived from the element type
    pub fn num_input_channels(&self) -> usize {
        self.element_type.channel_count()
    }

    /// Stream channels occupied by this element
    ///
    /// The end saturates at `usize::MAX` for elements placed near the top of
    /// the index space.
    pub fn channel_range(&self) -> Range<usize> {
        let first = self.first_channel_index;
        first..first.saturating_add(self.num_input_channels())
    }

    /// Channel descriptors
    pub fn channels(&self) -> &ElementChannels {
        &self.channels
    }

    /// Channel descriptors with mutable object positions
    ///
    /// Loudspeaker roles stay read-only; the variant and length are fixed.
    pub fn channels_mut(&mut self) -> ChannelsMut<'_> {
        match &mut self.channels {
            ElementChannels::Loudspeaker(channels) => {
                ChannelsMut::Loudspeaker(channels.as_slice())
            }
            ElementChannels::Object(channels) => ChannelsMut::Object(channels.as_mut_slice()),
        }
    }

    /// Loudspeaker channels (Ambisonic and layout elements)
    pub fn loudspeaker_channels(&self) -> ObrResult<&[LoudspeakerChannel]> {
        match &self.channels {
            ElementChannels::Loudspeaker(channels) => Ok(channels.as_slice()),
            ElementChannels::Object(_) => Err(self.wrong_variant(ChannelKind::Loudspeaker)),
        }
    }

    /// Object channels (object elements)
    pub fn object_channels(&self) -> ObrResult<&[ObjectChannel]> {
        match &self.channels {
            ElementChannels::Object(channels) => Ok(channels.as_slice()),
            ElementChannels::Loudspeaker(_) => Err(self.wrong_variant(ChannelKind::Object)),
        }
    }

    /// Object channels for per-frame position updates
    pub fn object_channels_mut(&mut self) -> ObrResult<&mut [ObjectChannel]> {
        let actual = self.element_type;
        match &mut self.channels {
            ElementChannels::Object(channels) => Ok(channels.as_mut_slice()),
            ElementChannels::Loudspeaker(_) => Err(ObrError::WrongChannelVariant {
                requested: ChannelKind::Object,
                actual,
            }),
        }
    }

    fn wrong_variant(&self, requested: ChannelKind) -> ObrError {
        ObrError::WrongChannelVariant {
            requested,
            actual: self.element_type,
        }
    }
}

/// Mutable view of an element's channels
///
/// Slices rather than `Vec`s so the channel count cannot change.
#[derive(Debug)]
pub enum ChannelsMut<'a> {
    /// Ambisonic and loudspeaker-layout elements
    Loudspeaker(&'a [LoudspeakerChannel]),
    /// Object elements
    Object(&'a mut [ObjectChannel]),
}

/// Serialized form of a configuration
///
/// Loudspeaker roles are derived from the type and not stored. Decoding goes
/// through the constructor so a stored configuration cannot break the
/// channel invariants.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigRecord {
    element_type: AudioElementType,
    #[serde(default)]
    filter_profile: BinauralFilterProfile,
    #[serde(default)]
    first_channel_index: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    objects: Vec<ObjectChannel>,
}

impl From<AudioElementConfig> for ConfigRecord {
    fn from(config: AudioElementConfig) -> Self {
        let objects = match config.channels {
            ElementChannels::Object(objects) => objects,
            ElementChannels::Loudspeaker(_) => Vec::new(),
        };
        Self {
            element_type: config.element_type,
            filter_profile: config.filter_profile,
            first_channel_index: config.first_channel_index,
            objects,
        }
    }
}

impl TryFrom<ConfigRecord> for AudioElementConfig {
    type Error = ObrError;

    fn try_from(record: ConfigRecord) -> ObrResult<Self> {
        let mut config = Self::with_profile(record.element_type, record.filter_profile)?;
        config.first_channel_index = record.first_channel_index;

        if !record.objects.is_empty() {
            let channels = config.object_channels_mut()?;
            if channels.len() != record.objects.len() {
                return Err(ObrError::InvalidChannelCount {
                    expected: channels.len(),
                    got: record.objects.len(),
                });
            }
            channels.copy_from_slice(&record.objects);
        }

        Ok(config)
    }
}
