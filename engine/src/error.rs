//! Error types for archipelago configuration and generation.

/// Errors raised while configuring or generating an archipelago.
///
/// All of them are recoverable: fix the configuration and regenerate.
#[derive(Debug)]
pub enum ArchipelagoError {
    /// The rotated island footprint cannot fit inside one region.
    IslandExceedsRegion {
        /// Widest extent of the footprint under any yaw
        island_diagonal: f32,
        /// Side length of a region cell
        region_size: f32,
    },
    /// A configuration field holds an unusable value.
    InvalidParameter {
        /// Name of the offending field
        name: &'static str,
        /// What is wrong with it
        reason: String,
    },
    /// JSON serialization/deserialization error.
    Json(serde_json::Error),
}

impl std::fmt::Display for ArchipelagoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArchipelagoError::IslandExceedsRegion {
                island_diagonal,
                region_size,
            } => write!(
                f,
                "island footprint diagonal {island_diagonal:.2} does not fit region size {region_size:.2}"
            ),
            ArchipelagoError::InvalidParameter { name, reason } => {
                write!(f, "invalid config parameter `{name}`: {reason}")
            }
            ArchipelagoError::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for ArchipelagoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArchipelagoError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ArchipelagoError {
    fn from(e: serde_json::Error) -> Self {
        ArchipelagoError::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ArchipelagoError::IslandExceedsRegion {
            island_diagonal: 169.7056,
            region_size: 150.0,
        };
        assert_eq!(
            err.to_string(),
            "island footprint diagonal 169.71 does not fit region size 150.00"
        );

        let err = ArchipelagoError::InvalidParameter {
            name: "bridge_width",
            reason: "0 must be greater than zero".to_string(),
        };
        assert!(err.to_string().contains("`bridge_width`"));
    }

    #[test]
    fn test_json_error_has_source() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = ArchipelagoError::from(json_err);
        assert!(std::error::Error::source(&err).is_some());
    }
}
