use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Orientation bucket of a video, used as the object key prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectRatio {
    Landscape,
    Portrait,
    Other,
}

impl AspectRatio {
    /// Classifies `width / height`. Both bounds are exclusive: 16:9 lands in
    /// landscape, 9:16 in portrait, everything else (square, 3:2, 2:1) is other.
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        if height == 0 {
            return AspectRatio::Other;
        }
        let ratio = f64::from(width) / f64::from(height);
        if ratio > 1.5 && ratio < 2.0 {
            AspectRatio::Landscape
        } else if ratio > 0.4 && ratio < 0.8 {
            AspectRatio::Portrait
        } else {
            AspectRatio::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Landscape => "landscape",
            AspectRatio::Portrait => "portrait",
            AspectRatio::Other => "other",
        }
    }
}

impl Display for AspectRatio {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
