//! Backdrop configuration.
//!
//! The host exposes board and node sizes either as raw power-of-two
//! exponents or as named tiers. Both forms resolve to plain integers before
//! reaching the pattern generator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChequerError, Result};
use crate::pattern::{self, PixelBuffer, Tiling, PARALLEL_THRESHOLD};

use super::Colour;

/// Largest accepted board size exponent (32768 px).
pub const MAX_SIZE_EXPONENT: u32 = 15;

/// Largest accepted radius exponent; keeps `8 × radius` within `u32`.
pub const MAX_RADIUS_EXPONENT: u32 = 24;

pub const DEFAULT_SIZE_EXPONENT: u32 = 6;
pub const DEFAULT_RADIUS_EXPONENT: u32 = 1;

/// A named, enumerated presentation option.
pub trait Tier: Sized + Copy + 'static {
    /// Human-readable option name used in errors.
    const KIND: &'static str;
    const ALL: &'static [Self];

    fn name(self) -> &'static str;
    fn value(self) -> u32;

    /// Parse from a tier name, or from its numeric value.
    fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(s) || s.parse::<u32>() == Ok(t.value()))
            .ok_or_else(|| ChequerError::Parse {
                message: format!("Unknown {}: {}", Self::KIND, s),
                help: Some(format!(
                    "Expected one of: {}",
                    Self::ALL
                        .iter()
                        .map(|t| format!("{} ({})", t.name(), t.value()))
                        .collect::<Vec<_>>()
                        .join(", ")
                )),
            })
    }
}

/// Tiers may be written as names or numbers in `chequer.yaml`.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum TierRepr {
    Value(u32),
    Name(String),
}

impl TierRepr {
    fn resolve<T: Tier>(self) -> Result<T> {
        match self {
            TierRepr::Value(v) => T::parse(&v.to_string()),
            TierRepr::Name(s) => T::parse(&s),
        }
    }
}

/// Board (canvas) side length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TierRepr", into = "String")]
pub enum BoardSize {
    Tiny,
    Small,
    Medium,
    Large,
    Huge,
}

impl Tier for BoardSize {
    const KIND: &'static str = "board size";
    const ALL: &'static [Self] = &[
        Self::Tiny,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::Huge,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Tiny => "tiny",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Huge => "huge",
        }
    }

    fn value(self) -> u32 {
        match self {
            Self::Tiny => 128,
            Self::Small => 256,
            Self::Medium => 512,
            Self::Large => 1024,
            Self::Huge => 2048,
        }
    }
}

/// Rendered node footprint radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TierRepr", into = "String")]
pub enum NodeSize {
    Xs,
    S,
    M,
    L,
    Xl,
}

impl Tier for NodeSize {
    const KIND: &'static str = "node size";
    const ALL: &'static [Self] = &[Self::Xs, Self::S, Self::M, Self::L, Self::Xl];

    fn name(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::S => "s",
            Self::M => "m",
            Self::L => "l",
            Self::Xl => "xl",
        }
    }

    fn value(self) -> u32 {
        match self {
            Self::Xs => 1,
            Self::S => 2,
            Self::M => 4,
            Self::L => 8,
            Self::Xl => 16,
        }
    }
}

/// Gap between nodes, as a multiple of the footprint radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TierRepr", into = "String")]
pub enum Spacing {
    None,
    Small,
    Large,
}

impl Tier for Spacing {
    const KIND: &'static str = "spacing";
    const ALL: &'static [Self] = &[Self::None, Self::Small, Self::Large];

    fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Small => "small",
            Self::Large => "large",
        }
    }

    fn value(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Small => 1,
            Self::Large => 3,
        }
    }
}

macro_rules! tier_conversions {
    ($($ty:ty),+) => {$(
        impl FromStr for $ty {
            type Err = ChequerError;

            fn from_str(s: &str) -> Result<Self> {
                <$ty as Tier>::parse(s)
            }
        }

        impl TryFrom<TierRepr> for $ty {
            type Error = ChequerError;

            fn try_from(repr: TierRepr) -> Result<Self> {
                repr.resolve()
            }
        }

        impl From<$ty> for String {
            fn from(tier: $ty) -> Self {
                tier.name().to_string()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    )+};
}

tier_conversions!(BoardSize, NodeSize, Spacing);

/// How board and node sizes are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sizing {
    /// Canvas `2^size_exponent`, footprint radius `2^radius_exponent`, no spacing.
    Exponent {
        size_exponent: u32,
        radius_exponent: u32,
    },
    /// Named tiers.
    Tiered {
        board: BoardSize,
        node: NodeSize,
        spacing: Spacing,
    },
}

impl Default for Sizing {
    fn default() -> Self {
        Self::Exponent {
            size_exponent: DEFAULT_SIZE_EXPONENT,
            radius_exponent: DEFAULT_RADIUS_EXPONENT,
        }
    }
}

/// A snapshot of everything that determines the backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    pub sizing: Sizing,
    pub colour_a: Colour,
    pub colour_b: Colour,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            sizing: Sizing::default(),
            colour_a: Colour::TAN,
            colour_b: Colour::CREAM,
        }
    }
}

impl Configuration {
    pub fn new(sizing: Sizing) -> Self {
        Self {
            sizing,
            ..Self::default()
        }
    }

    pub fn with_colours(mut self, colour_a: Colour, colour_b: Colour) -> Self {
        self.colour_a = colour_a;
        self.colour_b = colour_b;
        self
    }

    /// Translate presentation options into plain integers.
    pub fn resolve(&self) -> Result<Resolved> {
        let (canvas_size, footprint_radius, spacing_factor) = match self.sizing {
            Sizing::Exponent {
                size_exponent,
                radius_exponent,
            } => (
                pattern::pow2(size_exponent, MAX_SIZE_EXPONENT, "board size")?,
                pattern::pow2(radius_exponent, MAX_RADIUS_EXPONENT, "node radius")?,
                0,
            ),
            Sizing::Tiered {
                board,
                node,
                spacing,
            } => (board.value(), node.value(), spacing.value()),
        };

        Ok(Resolved {
            canvas_size,
            footprint_radius: i64::from(footprint_radius),
            spacing_factor: i64::from(spacing_factor),
            colour_a: self.colour_a,
            colour_b: self.colour_b,
        })
    }
}

/// Configuration reduced to the integers the generator works with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub canvas_size: u32,
    pub footprint_radius: i64,
    pub spacing_factor: i64,
    pub colour_a: Colour,
    pub colour_b: Colour,
}

impl Resolved {
    pub fn effective_radius(&self) -> Result<i64> {
        pattern::effective_radius(self.footprint_radius, self.spacing_factor)
    }

    pub fn partition_size(&self) -> Result<u32> {
        pattern::derive_partition_size(self.footprint_radius, self.spacing_factor)
    }

    pub fn tiling(&self) -> Result<Tiling> {
        Tiling::new(self.canvas_size, self.partition_size()?)
    }

    /// Derive the partition size and generate the backdrop.
    pub fn generate(&self) -> Result<PixelBuffer> {
        let partition = self.partition_size()?;
        if self.canvas_size >= PARALLEL_THRESHOLD {
            pattern::generate_par(self.canvas_size, partition, self.colour_a, self.colour_b)
        } else {
            pattern::generate(self.canvas_size, partition, self.colour_a, self.colour_b)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_resolves_to_original_backdrop() {
        let resolved = Configuration::default().resolve().unwrap();
        assert_eq!(
            resolved,
            Resolved {
                canvas_size: 64,
                footprint_radius: 2,
                spacing_factor: 0,
                colour_a: Colour::TAN,
                colour_b: Colour::CREAM,
            }
        );
        assert_eq!(resolved.partition_size().unwrap(), 16);
    }

    #[test]
    fn test_tiered_resolution() {
        let config = Configuration::new(Sizing::Tiered {
            board: BoardSize::Large,
            node: NodeSize::M,
            spacing: Spacing::Small,
        });
        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.canvas_size, 1024);
        assert_eq!(resolved.effective_radius().unwrap(), 8);
        assert_eq!(resolved.partition_size().unwrap(), 64);
        assert!(resolved.tiling().unwrap().clean);
    }

    #[test]
    fn test_exponent_out_of_range() {
        let config = Configuration::new(Sizing::Exponent {
            size_exponent: 16,
            radius_exponent: 1,
        });
        assert!(config.resolve().unwrap_err().is_invalid_parameter());

        let config = Configuration::new(Sizing::Exponent {
            size_exponent: 6,
            radius_exponent: 25,
        });
        assert!(config.resolve().unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn test_largest_radius_still_derives() {
        let config = Configuration::new(Sizing::Exponent {
            size_exponent: 6,
            radius_exponent: MAX_RADIUS_EXPONENT,
        });
        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.partition_size().unwrap(), 8 << 24);
    }

    #[test]
    fn test_generate_uses_resolved_colours() {
        let config = Configuration::default().with_colours(Colour::BLACK, Colour::WHITE);
        let buf = config.resolve().unwrap().generate().unwrap();
        assert_eq!(buf.size(), 64);
        assert_eq!(buf.get(0, 0), Some(Colour::BLACK));
        assert_eq!(buf.get(16, 0), Some(Colour::WHITE));
    }

    #[test]
    fn test_tier_parse_names_and_values() {
        assert_eq!("medium".parse::<BoardSize>().unwrap(), BoardSize::Medium);
        assert_eq!("2048".parse::<BoardSize>().unwrap(), BoardSize::Huge);
        assert_eq!("XL".parse::<NodeSize>().unwrap(), NodeSize::Xl);
        assert_eq!("3".parse::<Spacing>().unwrap(), Spacing::Large);
        assert!("300".parse::<BoardSize>().is_err());
        assert!("wide".parse::<Spacing>().is_err());
    }

    #[test]
    fn test_tier_serde() {
        #[derive(Deserialize)]
        struct Tiers {
            board: BoardSize,
            node: NodeSize,
            spacing: Spacing,
        }

        let tiers: Tiers = serde_yaml::from_str("board: 256\nnode: l\nspacing: none").unwrap();
        assert_eq!(tiers.board, BoardSize::Small);
        assert_eq!(tiers.node, NodeSize::L);
        assert_eq!(tiers.spacing, Spacing::None);

        assert_eq!(serde_json::to_string(&BoardSize::Huge).unwrap(), "\"huge\"");
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(NodeSize::Xs.to_string(), "xs");
        assert_eq!(Spacing::Large.to_string(), "large");
    }
}
