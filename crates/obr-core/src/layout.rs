//! Nominal loudspeaker positions for the named layouts
//!
//! Angles are in degrees. Azimuth: 0 = front, positive = right.
//! Elevation: positive = up. Channel order is the order of each table.

use serde::Serialize;

use crate::element_type::AudioElementType;

/// Single loudspeaker of a named layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Loudspeaker {
    /// Speaker label (e.g., "L", "R", "C", "Lss")
    pub label: &'static str,
    /// Nominal azimuth in degrees
    pub azimuth: f32,
    /// Nominal elevation in degrees
    pub elevation: f32,
    /// Is this a subwoofer/LFE
    pub is_lfe: bool,
}

impl Loudspeaker {
    const fn new(label: &'static str, azimuth: f32, elevation: f32) -> Self {
        Self {
            label,
            azimuth,
            elevation,
            is_lfe: false,
        }
    }

    const fn lfe() -> Self {
        Self {
            label: "LFE",
            azimuth: 0.0,
            elevation: 0.0,
            is_lfe: true,
        }
    }
}

const L: Loudspeaker = Loudspeaker::new("L", -30.0, 0.0);
const R: Loudspeaker = Loudspeaker::new("R", 30.0, 0.0);
const C: Loudspeaker = Loudspeaker::new("C", 0.0, 0.0);
const LFE: Loudspeaker = Loudspeaker::lfe();
const LS: Loudspeaker = Loudspeaker::new("Ls", -110.0, 0.0);
const RS: Loudspeaker = Loudspeaker::new("Rs", 110.0, 0.0);
const LW: Loudspeaker = Loudspeaker::new("Lw", -60.0, 0.0);
const RW: Loudspeaker = Loudspeaker::new("Rw", 60.0, 0.0);
const LSS: Loudspeaker = Loudspeaker::new("Lss", -90.0, 0.0);
const RSS: Loudspeaker = Loudspeaker::new("Rss", 90.0, 0.0);
const LSR: Loudspeaker = Loudspeaker::new("Lsr", -135.0, 0.0);
const RSR: Loudspeaker = Loudspeaker::new("Rsr", 135.0, 0.0);
const LTF: Loudspeaker = Loudspeaker::new("Ltf", -45.0, 45.0);
const RTF: Loudspeaker = Loudspeaker::new("Rtf", 45.0, 45.0);
const LTM: Loudspeaker = Loudspeaker::new("Ltm", -90.0, 45.0);
const RTM: Loudspeaker = Loudspeaker::new("Rtm", 90.0, 45.0);
const LTR: Loudspeaker = Loudspeaker::new("Ltr", -135.0, 45.0);
const RTR: Loudspeaker = Loudspeaker::new("Rtr", 135.0, 45.0);

static MONO: [Loudspeaker; 1] = [C];
static STEREO: [Loudspeaker; 2] = [L, R];
static LAYOUT_3_1_2: [Loudspeaker; 6] = [L, R, C, LFE, LTF, RTF];
static LAYOUT_5_1: [Loudspeaker; 6] = [L, R, C, LFE, LS, RS];
static LAYOUT_5_1_2: [Loudspeaker; 8] = [L, R, C, LFE, LS, RS, LTM, RTM];
static LAYOUT_5_1_4: [Loudspeaker; 10] = [L, R, C, LFE, LS, RS, LTF, RTF, LTR, RTR];
static LAYOUT_7_1: [Loudspeaker; 8] = [L, R, C, LFE, LSS, RSS, LSR, RSR];
static LAYOUT_7_1_2: [Loudspeaker; 10] = [L, R, C, LFE, LSS, RSS, LSR, RSR, LTM, RTM];
static LAYOUT_7_1_4: [Loudspeaker; 12] = [L, R, C, LFE, LSS, RSS, LSR, RSR, LTF, RTF, LTR, RTR];
static LAYOUT_9_1_6: [Loudspeaker; 16] = [
    L, R, C, LFE, LW, RW, LSS, RSS, LSR, RSR, LTF, RTF, LTM, RTM, LTR, RTR,
];

/// Loudspeakers of a named layout, in channel order
///
/// Empty for Ambisonic, object and invalid types.
pub fn layout_speakers(element_type: AudioElementType) -> &'static [Loudspeaker] {
    use AudioElementType::*;

    match element_type {
        LayoutMono => &MONO,
        LayoutStereo => &STEREO,
        Layout3_1_2 => &LAYOUT_3_1_2,
        Layout5_1 => &LAYOUT_5_1,
        Layout5_1_2 => &LAYOUT_5_1_2,
        Layout5_1_4 => &LAYOUT_5_1_4,
        Layout7_1 => &LAYOUT_7_1,
        Layout7_1_2 => &LAYOUT_7_1_2,
        Layout7_1_4 => &LAYOUT_7_1_4,
        Layout9_1_6 => &LAYOUT_9_1_6,
        _ => &[],
    }
}
