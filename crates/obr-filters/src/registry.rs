//! Process-wide filter registry
//!
//! The table is built once, on first use, and never mutated afterwards, so
//! lookups from any number of threads need no locking.

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::OnceLock;

use crate::assets::PAYLOADS;
use crate::error::FilterResult;
use crate::key::FilterKey;

/// Immutable filter payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterAsset {
    key: FilterKey,
    bytes: &'static [u8],
}

impl FilterAsset {
    fn new(key: FilterKey) -> Self {
        Self {
            key,
            bytes: PAYLOADS[key.index()],
        }
    }

    /// Key this payload is stored under
    pub fn key(&self) -> FilterKey {
        self.key
    }

    /// Raw payload
    pub fn as_bytes(&self) -> &'static [u8] {
        self.bytes
    }

    /// Payload size in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// WAV header of the payload (channels, sample rate, sample format)
    pub fn wav_spec(&self) -> FilterResult<hound::WavSpec> {
        let reader = hound::WavReader::new(Cursor::new(self.bytes))?;
        Ok(reader.spec())
    }

    /// Impulse response length in frames
    pub fn frame_count(&self) -> FilterResult<u32> {
        let reader = hound::WavReader::new(Cursor::new(self.bytes))?;
        Ok(reader.duration())
    }
}

/// Keyed store of every compiled-in filter
#[derive(Debug)]
pub struct BinauralFilterRegistry {
    /// Assets in [`FilterKey::index`] order
    assets: Vec<FilterAsset>,
    /// Canonical key text -> slot in `assets`
    by_name: HashMap<String, usize>,
}

impl BinauralFilterRegistry {
    /// Shared registry, built on first access
    pub fn global() -> &'static Self {
        static REGISTRY: OnceLock<BinauralFilterRegistry> = OnceLock::new();
        REGISTRY.get_or_init(Self::build)
    }

    fn build() -> Self {
        let assets: Vec<FilterAsset> = FilterKey::all().map(FilterAsset::new).collect();
        let by_name = assets
            .iter()
            .enumerate()
            .map(|(slot, asset)| (asset.key.to_string(), slot))
            .collect();

        log::debug!(
            "Binaural filter registry initialized: {} assets, {} bytes",
            assets.len(),
            assets.iter().map(FilterAsset::len).sum::<usize>()
        );

        Self { assets, by_name }
    }

    /// Look up by canonical key text; `None` if no such filter exists
    pub fn get(&self, key: &str) -> Option<FilterAsset> {
        let asset = self.by_name.get(key).map(|&slot| self.assets[slot]);
        if asset.is_none() {
            log::trace!("No binaural filter asset for key {key:?}");
        }
        asset
    }

    /// Look up by structured key
    ///
    /// Every structured key has an asset, so this cannot miss.
    pub fn get_key(&self, key: FilterKey) -> FilterAsset {
        self.assets[key.index()]
    }

    /// All assets, ordered as [`FilterKey::all`]
    pub fn iter(&self) -> impl Iterator<Item = FilterAsset> + '_ {
        self.assets.iter().copied()
    }

    /// Number of assets
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

/// Look up a filter by canonical key text (`"3OAAmbientR"`)
pub fn lookup(key: &str) -> Option<FilterAsset> {
    BinauralFilterRegistry::global().get(key)
}

/// Look up a filter by structured key
pub fn lookup_key(key: FilterKey) -> FilterAsset {
    BinauralFilterRegistry::global().get_key(key)
}
