//! Open Binaural Renderer - audio element model
//!
//! Describes how a multichannel input is organized for binaural rendering:
//!
//! ## Element types
//! - Ambisonic scenes, orders 1-4 ((N+1)² channels, ACN order)
//! - Named loudspeaker layouts (mono through 9.1.6)
//! - Mono audio objects (azimuth, elevation, distance)
//!
//! ## Configuration
//! - [`AudioElementConfig`]: type, filter profile, stream placement, channels
//! - [`SessionLayout`]: several elements packed into one stream
//!
//! ## Tokens
//! Element types and filter profiles parse from and print to the tokens
//! used on the command line (`3OA`, `7.1.4`, `OBA`, `Reverberant`, ...).
//!
//! ## Usage
//!
//! ```rust
//! use obr_core::{AudioElementConfig, AudioElementType, BinauralFilterProfile};
//!
//! let ty: AudioElementType = "3OA".parse().unwrap();
//! let config = AudioElementConfig::with_profile(ty, BinauralFilterProfile::Direct).unwrap();
//! assert_eq!(config.num_input_channels(), 16);
//! ```

pub mod channel;
pub mod config;
pub mod element_type;
pub mod layout;
pub mod session;

mod error;

pub use channel::{ChannelKind, ChannelRole, ElementChannels, LoudspeakerChannel, ObjectChannel};
pub use config::{AudioElementConfig, ChannelsMut};
pub use element_type::{AmbisonicOrder, AudioElementType, BinauralFilterProfile};
pub use error::{ObrError, ObrResult, TokenKind};
pub use layout::Loudspeaker;
pub use session::SessionLayout;
