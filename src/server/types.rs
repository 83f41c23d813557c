use crate::{
    Result,
    advisor::{AdviceSession, ClothingImage, Gender, StylingContext, UserProfile},
};

/// Raw fields collected from the multipart form before validation.
#[derive(Debug, Default)]
pub struct AdviceSubmission {
    pub api_key: Option<String>,
    pub gender: Option<String>,
    pub skin_tone: Option<String>,
    pub body_type: Option<String>,
    pub occasion: Option<String>,
    pub weather: Option<String>,
    pub image: Option<Vec<u8>>,
}

impl AdviceSubmission {
    /// Validates the upload and assembles the session-scoped context object.
    /// A missing credential is left empty here; the requester enforces the
    /// presence invariant before any network call.
    pub fn into_session(self) -> Result<AdviceSession> {
        let image = match self.image {
            Some(bytes) => Some(ClothingImage::from_bytes(bytes)?),
            None => None,
        };

        Ok(AdviceSession {
            credential: self.api_key.unwrap_or_default(),
            profile: UserProfile {
                gender: Gender::parse(self.gender.as_deref().unwrap_or_default()),
                skin_tone: self.skin_tone.unwrap_or_default(),
                body_type: self.body_type.unwrap_or_default(),
            },
            context: StylingContext {
                occasion: self.occasion.unwrap_or_default(),
                weather: self.weather.unwrap_or_default(),
            },
            image,
        })
    }
}
