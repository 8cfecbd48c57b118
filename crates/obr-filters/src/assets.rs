//! Filter payloads embedded at build time
//!
//! Each payload is a 16-bit PCM WAV holding one impulse response per
//! Ambisonic component ((N+1)² channels) for one ear. Table order matches
//! [`FilterKey::index`](crate::FilterKey::index).

use crate::key::FilterKey;

macro_rules! filter_asset {
    ($order:literal, $profile:literal, $ear:literal) => {
        include_bytes!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/assets/binaural_filters_",
            $order,
            "_oa_",
            $profile,
            "_",
            $ear,
            ".wav"
        ))
    };
}

/// Raw payloads, indexed by [`FilterKey::index`]
pub(crate) static PAYLOADS: [&[u8]; FilterKey::COUNT] = [
    filter_asset!(1, "direct", "l"),
    filter_asset!(1, "direct", "r"),
    filter_asset!(1, "ambient", "l"),
    filter_asset!(1, "ambient", "r"),
    filter_asset!(1, "reverberant", "l"),
    filter_asset!(1, "reverberant", "r"),
    filter_asset!(2, "direct", "l"),
    filter_asset!(2, "direct", "r"),
    filter_asset!(2, "ambient", "l"),
    filter_asset!(2, "ambient", "r"),
    filter_asset!(2, "reverberant", "l"),
    filter_asset!(2, "reverberant", "r"),
    filter_asset!(3, "direct", "l"),
    filter_asset!(3, "direct", "r"),
    filter_asset!(3, "ambient", "l"),
    filter_asset!(3, "ambient", "r"),
    filter_asset!(3, "reverberant", "l"),
    filter_asset!(3, "reverberant", "r"),
    filter_asset!(4, "direct", "l"),
    filter_asset!(4, "direct", "r"),
    filter_asset!(4, "ambient", "l"),
    filter_asset!(4, "ambient", "r"),
    filter_asset!(4, "reverberant", "l"),
    filter_asset!(4, "reverberant", "r"),
];
