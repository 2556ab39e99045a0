//! Project manifest (chequer.yaml) parsing.
//!
//! The manifest holds the backdrop configuration a host would otherwise
//! expose in its editor: board and node sizing, the colour pair, and
//! output settings. Every field is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ChequerError, Result};
use crate::types::{
    BoardSize, Colour, Configuration, NodeSize, Sizing, Spacing, DEFAULT_RADIUS_EXPONENT,
    DEFAULT_SIZE_EXPONENT,
};

/// Manifest filename looked up in the project directory.
pub const MANIFEST_FILENAME: &str = "chequer.yaml";

/// Project manifest loaded from chequer.yaml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Board side length as a power-of-two exponent.
    pub size_exponent: Option<u32>,

    /// Node footprint radius as a power-of-two exponent.
    pub radius_exponent: Option<u32>,

    pub board: Option<BoardSize>,
    pub node: Option<NodeSize>,
    pub spacing: Option<Spacing>,

    pub colour_a: Option<Colour>,
    pub colour_b: Option<Colour>,

    /// Output PNG path.
    pub output: Option<PathBuf>,

    /// Integer upscaling factor for the PNG.
    pub scale: Option<u32>,
}

impl Manifest {
    /// Load manifest from a chequer.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ChequerError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `path` if given, else `chequer.yaml` in the current directory if
    /// it exists, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(MANIFEST_FILENAME);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ChequerError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
        })
    }

    fn has_exponents(&self) -> bool {
        self.size_exponent.is_some() || self.radius_exponent.is_some()
    }

    fn has_tiers(&self) -> bool {
        self.board.is_some() || self.node.is_some() || self.spacing.is_some()
    }

    /// Layer `overrides` on top of this manifest.
    ///
    /// Set fields in `overrides` win. If `overrides` chooses a sizing style
    /// (exponents or tiers), the other style is cleared from the result.
    pub fn overlay(mut self, overrides: &Manifest) -> Self {
        if overrides.has_exponents() {
            self.board = None;
            self.node = None;
            self.spacing = None;
        } else if overrides.has_tiers() {
            self.size_exponent = None;
            self.radius_exponent = None;
        }

        self.size_exponent = overrides.size_exponent.or(self.size_exponent);
        self.radius_exponent = overrides.radius_exponent.or(self.radius_exponent);
        self.board = overrides.board.or(self.board);
        self.node = overrides.node.or(self.node);
        self.spacing = overrides.spacing.or(self.spacing);
        self.colour_a = overrides.colour_a.or(self.colour_a);
        self.colour_b = overrides.colour_b.or(self.colour_b);
        self.output = overrides.output.clone().or(self.output);
        self.scale = overrides.scale.or(self.scale);
        self
    }

    /// Build the backdrop configuration, filling unset fields with defaults.
    pub fn configuration(&self) -> Result<Configuration> {
        if self.has_exponents() && self.has_tiers() {
            return Err(ChequerError::Config {
                message: "exponent sizing and tier sizing are both set".to_string(),
                help: Some(
                    "Use size_exponent/radius_exponent or board/node/spacing, not both"
                        .to_string(),
                ),
            });
        }

        let sizing = if self.has_tiers() {
            Sizing::Tiered {
                board: self.board.unwrap_or(BoardSize::Medium),
                node: self.node.unwrap_or(NodeSize::S),
                spacing: self.spacing.unwrap_or(Spacing::None),
            }
        } else {
            Sizing::Exponent {
                size_exponent: self.size_exponent.unwrap_or(DEFAULT_SIZE_EXPONENT),
                radius_exponent: self.radius_exponent.unwrap_or(DEFAULT_RADIUS_EXPONENT),
            }
        };

        Ok(Configuration::new(sizing).with_colours(
            self.colour_a.unwrap_or(Colour::TAN),
            self.colour_b.unwrap_or(Colour::CREAM),
        ))
    }

    /// Get the effective output path.
    pub fn effective_output(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from("backdrop.png"))
    }

    /// Get the effective scale factor.
    pub fn effective_scale(&self) -> u32 {
        self.scale.unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_empty_manifest() {
        let manifest = Manifest::parse("").unwrap();
        assert_eq!(manifest, Manifest::default());
        assert_eq!(manifest.configuration().unwrap(), Configuration::default());
        assert_eq!(manifest.effective_output(), PathBuf::from("backdrop.png"));
        assert_eq!(manifest.effective_scale(), 1);
    }

    #[test]
    fn test_parse_exponent_manifest() {
        let yaml = r##"
size_exponent: 9
radius_exponent: 2
colour_a: "#000000"
output: out/board.png
scale: 2
"##;
        let manifest = Manifest::parse(yaml).unwrap();
        let config = manifest.configuration().unwrap();

        assert_eq!(
            config.sizing,
            Sizing::Exponent {
                size_exponent: 9,
                radius_exponent: 2
            }
        );
        assert_eq!(config.colour_a, Colour::BLACK);
        assert_eq!(config.colour_b, Colour::CREAM);
        assert_eq!(manifest.effective_output(), PathBuf::from("out/board.png"));
        assert_eq!(manifest.effective_scale(), 2);
    }

    #[test]
    fn test_parse_tiered_manifest() {
        let yaml = "board: large\nnode: 4\nspacing: small\n";
        let config = Manifest::parse(yaml).unwrap().configuration().unwrap();

        assert_eq!(
            config.sizing,
            Sizing::Tiered {
                board: BoardSize::Large,
                node: NodeSize::M,
                spacing: Spacing::Small,
            }
        );
        assert_eq!(config.resolve().unwrap().partition_size().unwrap(), 64);
    }

    #[test]
    fn test_partial_tiers_use_defaults() {
        let config = Manifest::parse("spacing: large").unwrap().configuration().unwrap();
        assert_eq!(
            config.sizing,
            Sizing::Tiered {
                board: BoardSize::Medium,
                node: NodeSize::S,
                spacing: Spacing::Large,
            }
        );
    }

    #[test]
    fn test_mixed_sizing_is_config_error() {
        let manifest = Manifest::parse("size_exponent: 8\nboard: small").unwrap();
        let err = manifest.configuration().unwrap_err();
        assert!(matches!(err, ChequerError::Config { .. }));
    }

    #[test]
    fn test_invalid_manifest() {
        assert!(Manifest::parse("board: enormous").is_err());
        assert!(Manifest::parse("colour_a: \"#xyz\"").is_err());
        assert!(Manifest::parse("radius: 3").is_err());
    }

    #[test]
    fn test_overlay_switches_sizing_style() {
        let base = Manifest::parse("board: small\nnode: xl\nscale: 4").unwrap();
        let overrides = Manifest {
            size_exponent: Some(7),
            ..Default::default()
        };

        let merged = base.overlay(&overrides);
        assert_eq!(merged.board, None);
        assert_eq!(merged.node, None);
        assert_eq!(merged.size_exponent, Some(7));
        assert_eq!(merged.scale, Some(4));
        assert!(merged.configuration().is_ok());
    }

    #[test]
    fn test_overlay_keeps_unset_fields() {
        let base = Manifest::parse("size_exponent: 8\ncolour_b: \"#FFFFFF\"").unwrap();
        let overrides = Manifest {
            radius_exponent: Some(3),
            colour_a: Some(Colour::BLACK),
            ..Default::default()
        };

        let config = base.overlay(&overrides).configuration().unwrap();
        assert_eq!(
            config.sizing,
            Sizing::Exponent {
                size_exponent: 8,
                radius_exponent: 3
            }
        );
        assert_eq!(config.colour_a, Colour::BLACK);
        assert_eq!(config.colour_b, Colour::WHITE);
    }
}
