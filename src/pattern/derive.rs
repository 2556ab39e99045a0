//! Partition size derivation.
//!
//! A square tile of side `8r` is the smallest square that packs a 4×4 grid
//! of circles of radius `r` (four diameters per side). The chequerboard uses
//! that tile as its repeating unit so tile edges line up with rendered nodes.

use crate::error::{ChequerError, Result};

/// Circles packed along one side of a partition.
pub const CIRCLES_PER_SIDE: i64 = 4;

/// Partition side length in units of footprint radius.
pub const PARTITION_RADII: i64 = 2 * CIRCLES_PER_SIDE;

/// Radius of a node footprint inflated by its spacing factor.
///
/// Fails if `footprint_radius <= 0`, `spacing_factor < 0`, or the product
/// overflows.
pub fn effective_radius(footprint_radius: i64, spacing_factor: i64) -> Result<i64> {
    if footprint_radius <= 0 {
        return Err(ChequerError::InvalidParameter {
            message: format!("footprint radius must be positive, got {}", footprint_radius),
            help: Some("Node footprints are at least one pixel in radius".to_string()),
        });
    }
    if spacing_factor < 0 {
        return Err(ChequerError::InvalidParameter {
            message: format!("spacing factor must be non-negative, got {}", spacing_factor),
            help: Some("Use 0 for no spacing".to_string()),
        });
    }

    spacing_factor
        .checked_add(1)
        .and_then(|inflation| footprint_radius.checked_mul(inflation))
        .ok_or_else(|| {
            ChequerError::invalid(format!(
                "effective radius overflows for radius {} and spacing {}",
                footprint_radius, spacing_factor
            ))
        })
}

/// Derive the chequerboard partition size from a node footprint.
///
/// `partition = 8 × footprint_radius × (1 + spacing_factor)`.
pub fn derive_partition_size(footprint_radius: i64, spacing_factor: i64) -> Result<u32> {
    let radius = effective_radius(footprint_radius, spacing_factor)?;

    radius
        .checked_mul(PARTITION_RADII)
        .and_then(|side| u32::try_from(side).ok())
        .ok_or_else(|| ChequerError::InvalidParameter {
            message: format!("partition size for effective radius {} is too large", radius),
            help: Some("Reduce the node size or spacing".to_string()),
        })
}

/// `2^exponent`, rejecting exponents above `max`.
pub fn pow2(exponent: u32, max: u32, what: &str) -> Result<u32> {
    if exponent > max {
        return Err(ChequerError::InvalidParameter {
            message: format!("{} exponent {} is out of range", what, exponent),
            help: Some(format!("Use an exponent between 0 and {}", max)),
        });
    }
    Ok(1u32 << exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_radius() {
        assert_eq!(derive_partition_size(1, 0).unwrap(), 8);
    }

    #[test]
    fn test_with_spacing() {
        assert_eq!(derive_partition_size(4, 1).unwrap(), 64);
        assert_eq!(derive_partition_size(16, 3).unwrap(), 512);
    }

    #[test]
    fn test_default_exponent_variant() {
        // radius exponent 1 -> radius 2 -> 16px partitions
        let radius = pow2(1, 24, "radius").unwrap();
        assert_eq!(derive_partition_size(radius as i64, 0).unwrap(), 16);
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        assert!(derive_partition_size(0, 0).unwrap_err().is_invalid_parameter());
        assert!(derive_partition_size(-2, 0).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn test_rejects_negative_spacing() {
        assert!(derive_partition_size(2, -1).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn test_rejects_overflow() {
        assert!(derive_partition_size(i64::MAX, 1).is_err());
        assert!(derive_partition_size(1 << 30, 0).is_err());
        assert!(derive_partition_size(1, i64::MAX).is_err());
    }

    #[test]
    fn test_pow2_bounds() {
        assert_eq!(pow2(0, 15, "size").unwrap(), 1);
        assert_eq!(pow2(11, 15, "size").unwrap(), 2048);
        assert!(pow2(16, 15, "size").unwrap_err().is_invalid_parameter());
    }
}
