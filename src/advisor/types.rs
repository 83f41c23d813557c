use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Option sets offered by the form. Free text is accepted everywhere these
/// are used; the lists only seed the selectors.
pub const GENDER_OPTIONS: &[&str] = &["Female", "Male", "Non-binary"];
pub const SKIN_TONES: &[&str] = &["Fair", "Light", "Medium", "Tan", "Deep"];
pub const BODY_SHAPES: &[&str] = &[
    "Hourglass",
    "Pear",
    "Rectangle",
    "Inverted Triangle",
    "Athletic",
];
pub const OCCASIONS: &[&str] = &[
    "Casual Day Out",
    "Date Night",
    "Job Interview",
    "Wedding Guest",
    "Gym/Active",
];
pub const WEATHER_CONDITIONS: &[&str] = &["Sunny & Hot", "Mild/Spring", "Cold/Rainy", "Freezing"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
    #[serde(rename = "Non-binary")]
    NonBinary,
    #[serde(other)]
    Unspecified,
}

impl Gender {
    /// Parses a form value, falling back to `Unspecified` for anything
    /// outside the recognized set.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "female" => Self::Female,
            "male" => Self::Male,
            "non-binary" | "nonbinary" | "non binary" => Self::NonBinary,
            _ => Self::Unspecified,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Female => "Female",
            Self::Male => "Male",
            Self::NonBinary => "Non-binary",
            Self::Unspecified => "Unspecified",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub gender: Gender,
    pub skin_tone: String,
    pub body_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylingContext {
    pub occasion: String,
    pub weather: String,
}

/// An uploaded clothing photo. Only constructible from bytes that sniff as a
/// supported image format, so holding one implies the upload was valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClothingImage {
    bytes: Vec<u8>,
    mime_type: String,
}

impl ClothingImage {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::invalid_input("the uploaded image is empty"));
        }

        let format = image::guess_format(&bytes)
            .map_err(|_| Error::invalid_input("the uploaded file is not a recognizable image"))?;

        let mime_type = match format {
            image::ImageFormat::Jpeg => "image/jpeg",
            image::ImageFormat::Png => "image/png",
            image::ImageFormat::WebP => "image/webp",
            other => {
                return Err(Error::invalid_input(format!(
                    "unsupported image format {other:?}; use JPEG, PNG or WEBP"
                )));
            }
        };

        Ok(Self {
            bytes,
            mime_type: mime_type.to_string(),
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }
}

/// The styling text returned by the model, verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceResult {
    pub text: String,
}

/// Everything one "get advice" action needs, scoped to a single request.
/// Built from the form submission and dropped after rendering; nothing here
/// outlives the response.
#[derive(Debug, Clone)]
pub struct AdviceSession {
    pub credential: String,
    pub profile: UserProfile,
    pub context: StylingContext,
    pub image: Option<ClothingImage>,
}
