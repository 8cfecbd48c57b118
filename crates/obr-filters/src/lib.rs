//! Open Binaural Renderer - binaural filter assets
//!
//! Pre-measured Ambisonic-to-binaural impulse responses, compiled into the
//! binary and resolved by (order, profile, ear):
//!
//! - 4 Ambisonic orders × 3 profiles (Direct, Ambient, Reverberant) × 2 ears
//! - Text keys `{order}OA{Profile}{Ear}` (`"3OAAmbientR"`) or [`FilterKey`]
//! - Read-only, process-wide table; safe to query from any thread
//!
//! An unknown text key yields `None`. Whether that aborts an element or
//! only skips a channel is the renderer's decision.
//!
//! ## Usage
//!
//! ```rust
//! use obr_core::{AudioElementConfig, AudioElementType};
//! use obr_filters::{Ear, FilterKey, lookup, lookup_key};
//!
//! let config = AudioElementConfig::new(AudioElementType::ThirdOrderAmbisonics).unwrap();
//! let key = FilterKey::for_element(&config, Ear::Right).unwrap();
//! assert_eq!(key.to_string(), "3OAAmbientR");
//!
//! let filter = lookup_key(key);
//! assert_eq!(lookup("3OAAmbientR"), Some(filter));
//! assert!(lookup("5OAAmbientL").is_none());
//! ```

mod assets;
mod error;
mod key;
mod registry;

pub use error::{FilterError, FilterResult};
pub use key::{Ear, FilterKey};
pub use registry::{BinauralFilterRegistry, FilterAsset, lookup, lookup_key};
