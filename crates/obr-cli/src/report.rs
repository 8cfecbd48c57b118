//! Element and filter reports

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::Serialize;

use obr_core::{
    AudioElementConfig, AudioElementType, BinauralFilterProfile, ChannelRole, ElementChannels,
};
use obr_filters::{Ear, FilterAsset, FilterKey, FilterResult, lookup};

/// One input channel
#[derive(Debug, Serialize)]
pub struct ChannelReport {
    /// Stream channel index
    pub index: usize,
    /// Role label ("ACN 3", "Ltf", "Object 0")
    pub label: String,
    /// Azimuth, elevation (degrees) and distance (meters), where known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<[f32; 3]>,
}

/// One resolved filter payload
#[derive(Debug, Serialize)]
pub struct FilterReport {
    pub key: String,
    pub bytes: usize,
    pub channels: u16,
    pub sample_rate: u32,
    pub frames: u32,
    /// Processing blocks spanned by the impulse response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocks: Option<u32>,
}

impl FilterReport {
    /// Summarize a payload; `buffer_size` adds the block count
    pub fn from_asset(asset: FilterAsset, buffer_size: Option<u32>) -> FilterResult<Self> {
        let spec = asset.wav_spec()?;
        let frames = asset.frame_count()?;
        Ok(Self {
            key: asset.key().to_string(),
            bytes: asset.len(),
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            frames,
            blocks: buffer_size.map(|size| frames.div_ceil(size)),
        })
    }

    pub fn print(&self) {
        print!(
            "{:<16} {:>7} bytes  {:>2} ch  {} Hz  {:>4} frames",
            self.key, self.bytes, self.channels, self.sample_rate, self.frames
        );
        if let Some(blocks) = self.blocks {
            print!("  {blocks} blocks");
        }
        println!();
    }
}

/// Layout and filters of a configured input
#[derive(Debug, Serialize)]
pub struct ElementReport {
    pub element_type: AudioElementType,
    pub filter_profile: BinauralFilterProfile,
    pub first_channel_index: usize,
    pub num_input_channels: usize,
    pub buffer_size: u32,
    pub channels: Vec<ChannelReport>,
    pub filters: Vec<FilterReport>,
}

impl ElementReport {
    /// Describe an element and resolve its filters
    pub fn build(config: &AudioElementConfig, buffer_size: u32) -> Result<Self> {
        let filters = resolve_filters(config)?
            .into_iter()
            .map(|asset| FilterReport::from_asset(asset, Some(buffer_size)))
            .collect::<FilterResult<Vec<_>>>()?;

        Ok(Self {
            element_type: config.element_type(),
            filter_profile: config.filter_profile(),
            first_channel_index: config.first_channel_index(),
            num_input_channels: config.num_input_channels(),
            buffer_size,
            channels: channel_reports(config),
            filters,
        })
    }

    pub fn print(&self) {
        println!(
            "{} input, {} channels starting at {}, {} filters, buffer {} samples",
            self.element_type,
            self.num_input_channels,
            self.first_channel_index,
            self.filter_profile,
            self.buffer_size
        );

        for channel in &self.channels {
            match channel.position {
                Some([azimuth, elevation, distance]) => println!(
                    "  [{:>2}] {:<8} az {azimuth:>7.1}  el {elevation:>5.1}  dist {distance:.2}",
                    channel.index, channel.label
                ),
                None => println!("  [{:>2}] {}", channel.index, channel.label),
            }
        }

        if self.filters.is_empty() {
            println!("No Ambisonic binaural filters for {} input", self.element_type);
        }
        for filter in &self.filters {
            filter.print();
        }
    }
}

fn channel_reports(config: &AudioElementConfig) -> Vec<ChannelReport> {
    let first = config.first_channel_index();

    match config.channels() {
        ElementChannels::Loudspeaker(channels) => channels
            .iter()
            .enumerate()
            .map(|(i, channel)| ChannelReport {
                index: first.saturating_add(i),
                label: channel.label(),
                position: match channel.role() {
                    ChannelRole::Speaker(speaker) if !speaker.is_lfe => {
                        Some([speaker.azimuth, speaker.elevation, 1.0])
                    }
                    _ => None,
                },
            })
            .collect(),
        ElementChannels::Object(objects) => objects
            .iter()
            .enumerate()
            .map(|(i, object)| ChannelReport {
                index: first.saturating_add(i),
                label: format!("Object {i}"),
                position: Some([object.azimuth(), object.elevation(), object.distance()]),
            })
            .collect(),
    }
}

/// Left and right filters of an Ambisonic element; empty for other types
///
/// Goes through text keys, as a renderer loading filters by name would.
pub fn resolve_filters(config: &AudioElementConfig) -> Result<Vec<FilterAsset>> {
    Ear::BOTH
        .into_iter()
        .filter_map(|ear| FilterKey::for_element(config, ear))
        .map(|key| lookup(&key.to_string()).ok_or_else(|| missing_filter(key)))
        .collect()
}

/// Resolve a single text key
///
/// A miss names the (order, profile, ear) triple when the key parses, or the
/// parse error when it does not.
pub fn lookup_filter(key: &str) -> Result<FilterAsset> {
    lookup(key).ok_or_else(|| match key.parse::<FilterKey>() {
        Err(err) => anyhow!("No binaural filter for key {key:?}: {err}"),
        Ok(parsed) => missing_filter(parsed),
    })
}

fn missing_filter(key: FilterKey) -> anyhow::Error {
    anyhow!(
        "No binaural filter for order {}, profile {}, ear {}",
        key.order,
        key.profile,
        key.ear
    )
}

/// Write an element's filters to `dir` as `{key}.wav`
pub fn export_filters(config: &AudioElementConfig, dir: &Path) -> Result<Vec<PathBuf>> {
    let filters = resolve_filters(config)?;
    if filters.is_empty() {
        return Ok(Vec::new());
    }

    fs::create_dir_all(dir).with_context(|| format!("Cannot create {}", dir.display()))?;

    filters
        .into_iter()
        .map(|asset| {
            let path = dir.join(format!("{}.wav", asset.key()));
            fs::write(&path, asset.as_bytes())
                .with_context(|| format!("Cannot write {}", path.display()))?;
            log::info!("Wrote {} ({} bytes)", path.display(), asset.len());
            Ok(path)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(ty: AudioElementType, profile: BinauralFilterProfile) -> AudioElementConfig {
        AudioElementConfig::with_profile(ty, profile).unwrap()
    }

    #[test]
    fn test_ambisonic_report() {
        let config = config(
            AudioElementType::FirstOrderAmbisonics,
            BinauralFilterProfile::Direct,
        );
        let report = ElementReport::build(&config, 64).unwrap();

        assert_eq!(report.num_input_channels, 4);
        assert_eq!(report.channels.len(), 4);
        assert_eq!(report.channels[3].label, "ACN 3");

        let keys: Vec<&str> = report.filters.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, ["1OADirectL", "1OADirectR"]);
        for filter in &report.filters {
            assert_eq!(filter.channels, 4);
            assert_eq!(filter.blocks, Some(filter.frames.div_ceil(64)));
        }
    }

    #[test]
    fn test_layout_report_has_no_filters() {
        let config = config(AudioElementType::Layout7_1_4, BinauralFilterProfile::Ambient);
        let report = ElementReport::build(&config, 256).unwrap();

        assert_eq!(report.channels.len(), 12);
        assert!(report.filters.is_empty());
        assert_eq!(report.channels[3].label, "LFE");
        assert!(report.channels[3].position.is_none());
        assert_eq!(report.channels[8].position, Some([-45.0, 45.0, 1.0]));
    }

    #[test]
    fn test_object_report() {
        let mut config = config(AudioElementType::ObjectMono, BinauralFilterProfile::Ambient);
        config.set_first_channel_index(3);
        config.object_channels_mut().unwrap()[0].set_position(15.0, -5.0, 2.5);

        let report = ElementReport::build(&config, 256).unwrap();
        assert_eq!(report.channels.len(), 1);
        assert_eq!(report.channels[0].index, 3);
        assert_eq!(report.channels[0].position, Some([15.0, -5.0, 2.5]));
    }

    #[test]
    fn test_report_json() {
        let config = config(
            AudioElementType::SecondOrderAmbisonics,
            BinauralFilterProfile::Reverberant,
        );
        let report = ElementReport::build(&config, 256).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["element_type"], "2OA");
        assert_eq!(json["filter_profile"], "Reverberant");
        assert_eq!(json["filters"][1]["key"], "2OAReverberantR");
        assert!(json["channels"][0].get("position").is_none());
    }

    #[test]
    fn test_object_report_near_index_limit() {
        let mut config = config(AudioElementType::ObjectMono, BinauralFilterProfile::Ambient);
        config.set_first_channel_index(usize::MAX);

        let report = ElementReport::build(&config, 256).unwrap();
        assert_eq!(report.channels[0].index, usize::MAX);
    }

    #[test]
    fn test_layout_report_near_index_limit() {
        let mut config = config(AudioElementType::Layout7_1_4, BinauralFilterProfile::Ambient);
        config.set_first_channel_index(usize::MAX - 3);

        let report = ElementReport::build(&config, 256).unwrap();
        assert_eq!(report.channels.len(), 12);
        assert_eq!(report.channels[0].index, usize::MAX - 3);
        assert_eq!(report.channels[2].index, usize::MAX - 1);
        assert!(report.channels[3..].iter().all(|c| c.index == usize::MAX));
    }

    #[test]
    fn test_lookup_filter() {
        let asset = lookup_filter("2OADirectR").unwrap();
        assert_eq!(asset.key().to_string(), "2OADirectR");

        let err = lookup_filter("5OAAmbientL").unwrap_err();
        assert_eq!(
            err.to_string(),
            "No binaural filter for key \"5OAAmbientL\": \
             Malformed binaural filter key: \"5OAAmbientL\""
        );

        let err = lookup_filter("").unwrap_err();
        assert!(err.to_string().starts_with("No binaural filter for key \"\""));
    }

    #[test]
    fn test_missing_filter_names_triple() {
        let key = FilterKey::new(
            obr_core::AmbisonicOrder::Fourth,
            BinauralFilterProfile::Reverberant,
            Ear::Right,
        );
        assert_eq!(
            missing_filter(key).to_string(),
            "No binaural filter for order 4, profile Reverberant, ear R"
        );
    }

    #[test]
    fn test_export_filters() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(
            AudioElementType::ThirdOrderAmbisonics,
            BinauralFilterProfile::Ambient,
        );

        let written = export_filters(&config, dir.path()).unwrap();
        assert_eq!(
            written,
            vec![
                dir.path().join("3OAAmbientL.wav"),
                dir.path().join("3OAAmbientR.wav")
            ]
        );

        let bytes = fs::read(&written[1]).unwrap();
        assert_eq!(bytes, lookup("3OAAmbientR").unwrap().as_bytes());
    }

    #[test]
    fn test_export_skips_non_ambisonic() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("filters");
        let config = config(AudioElementType::ObjectMono, BinauralFilterProfile::Ambient);

        assert!(export_filters(&config, &target).unwrap().is_empty());
        assert!(!target.exists());
    }
}
