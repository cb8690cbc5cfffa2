//! Disc flight numbers and the throw descriptors that shape a rendered path.

use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::constants::ranges;
use crate::error::{InvalidInputError, ensure_finite};

/// The four manufacturer flight numbers of a disc.
///
/// Values outside the typical ranges are accepted; the model formulas are
/// continuous everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FlightNumbers {
    /// How fast the disc must be thrown to fly as rated, typically 1 to 15
    pub speed: f64,
    /// Ability to stay aloft, typically 1 to 7
    pub glide: f64,
    /// High-speed drift during the early flight, typically -5 to 1
    pub turn: f64,
    /// Low-speed hook at the end of the flight, typically 0 to 5
    pub fade: f64,
}

impl FlightNumbers {
    /// Flight numbers in manufacturer order.
    pub const fn new(speed: f64, glide: f64, turn: f64, fade: f64) -> Self {
        Self { speed, glide, turn, fade }
    }

    /// Reject non-finite fields.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        ensure_finite("speed", self.speed)?;
        ensure_finite("glide", self.glide)?;
        ensure_finite("turn", self.turn)?;
        ensure_finite("fade", self.fade)?;
        Ok(())
    }

    /// Whether every number sits inside its typical manufacturer range.
    pub fn is_typical(&self) -> bool {
        ranges::SPEED.contains(&self.speed)
            && ranges::GLIDE.contains(&self.glide)
            && ranges::TURN.contains(&self.turn)
            && ranges::FADE.contains(&self.fade)
    }

    pub(crate) fn warn_if_atypical(&self) {
        if !self.is_typical() {
            warn!(
                "flight numbers {} are outside typical ranges, rendering anyway",
                self
            );
        }
    }

    /// Net lateral tendency, `turn + fade`.
    pub fn stability(&self) -> f64 {
        self.turn + self.fade
    }

    /// [`Stability`] rating of [`Self::stability`].
    pub fn stability_class(&self) -> Stability {
        Stability::classify(self.stability())
    }
}

impl fmt::Display for FlightNumbers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {} | {}", self.speed, self.glide, self.turn, self.fade)
    }
}

/// Coarse stability rating from `turn + fade`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stability {
    /// Drifts with the turn
    Understable,
    /// Flies roughly straight
    Stable,
    /// Fights the turn and fades hard
    Overstable,
}

impl Stability {
    /// Below -1 is understable, above 1 overstable.
    pub fn classify(stability: f64) -> Self {
        if stability < -1.0 {
            Self::Understable
        } else if stability > 1.0 {
            Self::Overstable
        } else {
            Self::Stable
        }
    }
}

/// Throwing hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Hand {
    /// Right-handed thrower
    Right,
    /// Left-handed thrower
    Left,
}

/// Throwing motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Motion {
    /// Arm crosses the body, disc released from the far side
    Backhand,
    /// Sidearm flick, disc released from the throwing side
    Forehand,
}

/// Throwing hand and motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThrowStyle {
    /// RHBH, the reference orientation
    #[default]
    RightHandBackhand,
    /// RHFH, mirrored
    RightHandForehand,
    /// LHBH, mirrored
    LeftHandBackhand,
    /// LHFH, same spin as RHBH
    LeftHandForehand,
}

impl ThrowStyle {
    /// Every style, reference orientation first.
    pub const ALL: [ThrowStyle; 4] = [
        ThrowStyle::RightHandBackhand,
        ThrowStyle::RightHandForehand,
        ThrowStyle::LeftHandBackhand,
        ThrowStyle::LeftHandForehand,
    ];

    /// Style for a hand and motion.
    pub fn new(hand: Hand, motion: Motion) -> Self {
        match (hand, motion) {
            (Hand::Right, Motion::Backhand) => Self::RightHandBackhand,
            (Hand::Right, Motion::Forehand) => Self::RightHandForehand,
            (Hand::Left, Motion::Backhand) => Self::LeftHandBackhand,
            (Hand::Left, Motion::Forehand) => Self::LeftHandForehand,
        }
    }

    /// Throwing hand.
    pub fn hand(&self) -> Hand {
        match self {
            Self::RightHandBackhand | Self::RightHandForehand => Hand::Right,
            Self::LeftHandBackhand | Self::LeftHandForehand => Hand::Left,
        }
    }

    /// Throwing motion.
    pub fn motion(&self) -> Motion {
        match self {
            Self::RightHandBackhand | Self::LeftHandBackhand => Motion::Backhand,
            Self::RightHandForehand | Self::LeftHandForehand => Motion::Forehand,
        }
    }

    /// Whether the disc spins opposite to a right-hand backhand, flipping
    /// turn and fade to the other side.
    pub fn is_mirrored(&self) -> bool {
        matches!(self, Self::RightHandForehand | Self::LeftHandBackhand)
    }

    /// Kebab-case name, as used in JSON and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RightHandBackhand => "right-hand-backhand",
            Self::RightHandForehand => "right-hand-forehand",
            Self::LeftHandBackhand => "left-hand-backhand",
            Self::LeftHandForehand => "left-hand-forehand",
        }
    }

    /// Short form such as `RHBH`. Parsing accepts it in any case.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::RightHandBackhand => "RHBH",
            Self::RightHandForehand => "RHFH",
            Self::LeftHandBackhand => "LHBH",
            Self::LeftHandForehand => "LHFH",
        }
    }
}

impl fmt::Display for ThrowStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThrowStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|style| key == style.as_str() || key == style.abbreviation().to_ascii_lowercase())
            .ok_or_else(|| format!("unknown throw style `{s}`"))
    }
}

/// Disc angle relative to the ground at release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReleaseAngle {
    /// Outer edge tilted down
    Hyzer,
    /// Level
    Flat,
    /// Outer edge tilted up
    Anhyzer,
}

impl ReleaseAngle {
    /// Hyzer, flat, anhyzer.
    pub const ALL: [ReleaseAngle; 3] = [ReleaseAngle::Hyzer, ReleaseAngle::Flat, ReleaseAngle::Anhyzer];

    /// Lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hyzer => "hyzer",
            Self::Flat => "flat",
            Self::Anhyzer => "anhyzer",
        }
    }
}

impl fmt::Display for ReleaseAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReleaseAngle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|angle| key == angle.as_str())
            .ok_or_else(|| format!("unknown release angle `{s}`"))
    }
}
