//! Placement of several audio elements in one multichannel stream

use crate::channel::ObjectChannel;
use crate::config::AudioElementConfig;
use crate::error::ObrResult;

/// Ordered set of audio elements sharing one input stream
///
/// Elements are packed back to back: each added element starts at the first
/// channel after the previous one.
#[derive(Debug, Clone, Default)]
pub struct SessionLayout {
    elements: Vec<AudioElementConfig>,
}

impl SessionLayout {
    /// Create empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element, assigning its first channel index
    ///
    /// Returns the element's position in the session.
    pub fn add(&mut self, mut config: AudioElementConfig) -> usize {
        let first = self
            .elements
            .last()
            .map_or(0, |last| last.channel_range().end);
        config.set_first_channel_index(first);

        log::debug!(
            "Placed {} element at channels {:?}",
            config.element_type(),
            config.channel_range()
        );

        self.elements.push(config);
        self.elements.len() - 1
    }

    /// Total number of input channels across all elements
    pub fn total_input_channels(&self) -> usize {
        self.elements.iter().map(|e| e.num_input_channels()).sum()
    }

    /// All elements in placement order
    pub fn elements(&self) -> &[AudioElementConfig] {
        &self.elements
    }

    /// Element by position
    pub fn element(&self, index: usize) -> Option<&AudioElementConfig> {
        self.elements.get(index)
    }

    /// Object positions of an element, for per-frame updates
    ///
    /// Placed elements are otherwise read-only so their channel ranges stay
    /// contiguous. `None` if there is no element at `index`.
    pub fn object_channels_mut(&mut self, index: usize) -> Option<ObrResult<&mut [ObjectChannel]>> {
        self.elements
            .get_mut(index)
            .map(AudioElementConfig::object_channels_mut)
    }

    /// Element owning a stream channel
    pub fn element_for_channel(&self, channel: usize) -> Option<(usize, &AudioElementConfig)> {
        self.elements
            .iter()
            .enumerate()
            .find(|(_, element)| element.channel_range().contains(&channel))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
