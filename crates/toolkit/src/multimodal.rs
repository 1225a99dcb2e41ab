//! Media type classification and stub media analysis.
//!
//! Modality is inferred from the file extension alone; file contents are
//! never read. The analysis functions return fixed payloads that only echo
//! the input path back, so the file need not exist.

use agent_toolkit_core::Modality;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Extensions recognized per modality, checked in this order.
const SUPPORTED_FORMATS: [(Modality, &[&str]); 3] = [
    (Modality::Image, &["jpg", "jpeg", "png", "gif", "webp"]),
    (Modality::Audio, &["mp3", "wav", "ogg", "aac"]),
    (Modality::Video, &["mp4", "webm", "avi", "mov"]),
];

/// Stub image analysis payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAnalysis {
    /// Objects "detected" in the image
    pub detected_objects: Vec<String>,
    /// Number of text regions
    pub text_regions: u32,
    /// Dominant colors as hex strings
    pub dominant_colors: Vec<String>,
}

impl Default for ImageAnalysis {
    fn default() -> Self {
        Self {
            detected_objects: ["screenshot", "code", "documentation"]
                .map(String::from)
                .to_vec(),
            text_regions: 3,
            dominant_colors: ["#ffffff", "#282c34"].map(String::from).to_vec(),
        }
    }
}

/// Stub audio feature payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    /// Duration in seconds
    pub duration: f64,
    /// Sampling rate in Hz
    pub sampling_rate: u32,
    /// Whether speech was "detected"
    pub detected_speech: bool,
    /// Spoken language code
    pub language: String,
}

impl Default for AudioFeatures {
    fn default() -> Self {
        Self {
            duration: 45.6,
            sampling_rate: 44_100,
            detected_speech: true,
            language: "zh-CN".to_string(),
        }
    }
}

/// Result of a media analysis, tagged by media kind.
///
/// Serializes as `{"type": "image", "path": ..., "analysis": {...}}` or
/// `{"type": "audio", "path": ..., "features": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MediaAnalysis {
    /// Image analysis
    Image {
        /// Input path, echoed back
        path: String,
        /// Stub payload
        analysis: ImageAnalysis,
    },
    /// Audio analysis
    Audio {
        /// Input path, echoed back
        path: String,
        /// Stub payload
        features: AudioFeatures,
    },
}

impl MediaAnalysis {
    /// Returns the path the analysis was requested for.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Image { path, .. } | Self::Audio { path, .. } => path,
        }
    }
}

/// Classifies media files and produces stub analyses.
///
/// # Examples
///
/// ```
/// use agent_toolkit::multimodal::MultimodalEnhancer;
/// use agent_toolkit_core::Modality;
///
/// let enhancer = MultimodalEnhancer::new();
/// assert_eq!(enhancer.detect_modality("photo.PNG"), Some(Modality::Image));
/// assert_eq!(enhancer.detect_modality("archive.zip"), None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MultimodalEnhancer;

impl MultimodalEnhancer {
    /// Creates a new enhancer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Infers the modality of a file from its extension.
    ///
    /// Matching is case-insensitive. Files without an extension, including
    /// dotfiles such as `.png`, have no modality.
    #[must_use]
    pub fn detect_modality(&self, file_path: impl AsRef<Path>) -> Option<Modality> {
        let ext = file_path.as_ref().extension()?.to_str()?.to_lowercase();

        SUPPORTED_FORMATS
            .iter()
            .find(|(_, formats)| formats.contains(&ext.as_str()))
            .map(|(modality, _)| *modality)
    }

    /// Returns the stub image analysis for `image_path`.
    #[must_use]
    pub fn analyze_image(&self, image_path: impl AsRef<Path>) -> MediaAnalysis {
        MediaAnalysis::Image {
            path: image_path.as_ref().display().to_string(),
            analysis: ImageAnalysis::default(),
        }
    }

    /// Returns the stub audio features for `audio_path`.
    #[must_use]
    pub fn extract_audio_features(&self, audio_path: impl AsRef<Path>) -> MediaAnalysis {
        MediaAnalysis::Audio {
            path: audio_path.as_ref().display().to_string(),
            features: AudioFeatures::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detect_modality_case_insensitive() {
        let enhancer = MultimodalEnhancer::new();
        assert_eq!(enhancer.detect_modality("photo.PNG"), Some(Modality::Image));
        assert_eq!(enhancer.detect_modality("clip.Mov"), Some(Modality::Video));
        assert_eq!(enhancer.detect_modality("song.mp3"), Some(Modality::Audio));
    }

    #[test]
    fn test_detect_modality_every_extension() {
        let enhancer = MultimodalEnhancer::new();
        for (modality, formats) in SUPPORTED_FORMATS {
            for ext in formats {
                let name = format!("file.{ext}");
                assert_eq!(enhancer.detect_modality(&name), Some(modality), "{name}");
            }
        }
    }

    #[test]
    fn test_detect_modality_no_match() {
        let enhancer = MultimodalEnhancer::new();
        assert_eq!(enhancer.detect_modality("archive.zip"), None);
        assert_eq!(enhancer.detect_modality("README"), None);
        assert_eq!(enhancer.detect_modality(".png"), None);
        assert_eq!(enhancer.detect_modality("photo."), None);
    }

    #[test]
    fn test_detect_modality_uses_last_extension() {
        let enhancer = MultimodalEnhancer::new();
        assert_eq!(
            enhancer.detect_modality("/tmp/backup.png.zip"),
            None
        );
        assert_eq!(
            enhancer.detect_modality("/tmp/frames.tar.webm"),
            Some(Modality::Video)
        );
    }

    #[test]
    fn test_analyze_image_stub() {
        let analysis = MultimodalEnhancer::new().analyze_image("/does/not/exist.png");
        assert_eq!(analysis.path(), "/does/not/exist.png");
        assert_eq!(
            serde_json::to_value(&analysis).unwrap(),
            json!({
                "type": "image",
                "path": "/does/not/exist.png",
                "analysis": {
                    "detected_objects": ["screenshot", "code", "documentation"],
                    "text_regions": 3,
                    "dominant_colors": ["#ffffff", "#282c34"]
                }
            })
        );
    }

    #[test]
    fn test_extract_audio_features_stub() {
        let analysis = MultimodalEnhancer::new().extract_audio_features("talk.wav");
        match analysis {
            MediaAnalysis::Audio { path, features } => {
                assert_eq!(path, "talk.wav");
                assert!((features.duration - 45.6).abs() < f64::EPSILON);
                assert_eq!(features.sampling_rate, 44_100);
                assert!(features.detected_speech);
                assert_eq!(features.language, "zh-CN");
            }
            MediaAnalysis::Image { .. } => panic!("expected audio analysis"),
        }
    }

    #[test]
    fn test_analysis_ignores_file_kind() {
        // Stubs do not check the modality of the path they are given
        let analysis = MultimodalEnhancer::new().analyze_image("notes.txt");
        assert!(matches!(analysis, MediaAnalysis::Image { .. }));
    }
}
