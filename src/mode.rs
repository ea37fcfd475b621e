//! Operating modes and the button-driven mode cycle.

const MODE_NAME_OFF: &str = "off";
const MODE_NAME_RAINBOW: &str = "rainbow";
const MODE_NAME_ION_GUN: &str = "ion_gun";
const MODE_NAME_WARMING_STRIPES: &str = "warming_stripes";
const MODE_NAME_RANDOM: &str = "random";
const MODE_NAME_COLOUR_PICK: &str = "colour_pick";

const MODE_ID_OFF: u8 = 0;
const MODE_ID_RAINBOW: u8 = 1;
const MODE_ID_ION_GUN: u8 = 2;
const MODE_ID_WARMING_STRIPES: u8 = 3;
const MODE_ID_RANDOM: u8 = 4;
const MODE_ID_COLOUR_PICK: u8 = 5;

/// Operating modes, in the order the mode button cycles through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Mode {
    /// Strip blank except for the power indicator pixel.
    #[default]
    Off = MODE_ID_OFF,
    /// Colour cycling rainbows.
    Rainbow = MODE_ID_RAINBOW,
    /// Shooting ion blobs.
    IonGun = MODE_ID_ION_GUN,
    /// Static climate warming stripes display.
    WarmingStripes = MODE_ID_WARMING_STRIPES,
    /// Random colour crossfade every second.
    Random = MODE_ID_RANDOM,
    /// Pick a colour channel by channel with the bump buttons.
    ColourPick = MODE_ID_COLOUR_PICK,
}

impl Mode {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_OFF => Self::Off,
            MODE_ID_RAINBOW => Self::Rainbow,
            MODE_ID_ION_GUN => Self::IonGun,
            MODE_ID_WARMING_STRIPES => Self::WarmingStripes,
            MODE_ID_RANDOM => Self::Random,
            MODE_ID_COLOUR_PICK => Self::ColourPick,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => MODE_NAME_OFF,
            Self::Rainbow => MODE_NAME_RAINBOW,
            Self::IonGun => MODE_NAME_ION_GUN,
            Self::WarmingStripes => MODE_NAME_WARMING_STRIPES,
            Self::Random => MODE_NAME_RANDOM,
            Self::ColourPick => MODE_NAME_COLOUR_PICK,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_OFF => Some(Self::Off),
            MODE_NAME_RAINBOW => Some(Self::Rainbow),
            MODE_NAME_ION_GUN => Some(Self::IonGun),
            MODE_NAME_WARMING_STRIPES => Some(Self::WarmingStripes),
            MODE_NAME_RANDOM => Some(Self::Random),
            MODE_NAME_COLOUR_PICK => Some(Self::ColourPick),
            _ => None,
        }
    }

    /// Next mode in the cycle, wrapping back to [`Mode::Off`].
    pub const fn next(self) -> Self {
        match self {
            Self::Off => Self::Rainbow,
            Self::Rainbow => Self::IonGun,
            Self::IonGun => Self::WarmingStripes,
            Self::WarmingStripes => Self::Random,
            Self::Random => Self::ColourPick,
            Self::ColourPick => Self::Off,
        }
    }
}
