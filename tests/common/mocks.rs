use async_trait::async_trait;
use outfit_stylist::{
    Error, Result,
    advisor::{AdviceSession, ClothingImage, Gender, StylingContext, UserProfile},
    llm::AdviceBackend,
};
use std::sync::{Arc, Mutex};

/// Minimal PNG header, enough for format sniffing.
pub const PNG_HEADER: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
];

pub fn png_image() -> ClothingImage {
    ClothingImage::from_bytes(PNG_HEADER.to_vec()).unwrap()
}

#[derive(Debug, Clone)]
pub struct RecordedSubmission {
    pub prompt: String,
    pub mime_type: String,
    pub image_len: usize,
    pub credential: String,
}

#[derive(Debug, Clone)]
pub enum MockFailure {
    Authentication(String),
    Upstream(String),
    Empty,
}

/// Mock advice backend for testing. Records every submission so tests can
/// assert how many outbound calls were made and with what.
#[derive(Debug, Clone)]
pub struct MockAdviceBackend {
    pub responses: Arc<Mutex<Vec<String>>>,
    pub submissions: Arc<Mutex<Vec<RecordedSubmission>>>,
    pub failure: Option<MockFailure>,
}

impl MockAdviceBackend {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            submissions: Arc::new(Mutex::new(Vec::new())),
            failure: None,
        }
    }

    pub fn with_responses(self, responses: Vec<&str>) -> Self {
        *self.responses.lock().unwrap() = responses.into_iter().map(String::from).collect();
        self
    }

    pub fn with_failure(mut self, failure: MockFailure) -> Self {
        self.failure = Some(failure);
        self
    }

    pub fn submissions(&self) -> Vec<RecordedSubmission> {
        self.submissions.lock().unwrap().clone()
    }
}

impl Default for MockAdviceBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AdviceBackend for MockAdviceBackend {
    async fn submit(
        &self,
        prompt: &str,
        image: &ClothingImage,
        credential: &str,
    ) -> Result<String> {
        self.submissions.lock().unwrap().push(RecordedSubmission {
            prompt: prompt.to_string(),
            mime_type: image.mime_type().to_string(),
            image_len: image.bytes().len(),
            credential: credential.to_string(),
        });

        if let Some(ref failure) = self.failure {
            return Err(match failure {
                MockFailure::Authentication(msg) => Error::authentication(msg.clone()),
                MockFailure::Upstream(msg) => Error::upstream(msg.clone()),
                MockFailure::Empty => Error::EmptyResponse,
            });
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::upstream("no more mock responses available"));
        }
        Ok(responses.remove(0))
    }
}

/// A complete valid session: profile {female, fair, pear}, context
/// {casual, sunny}, a PNG upload and a non-empty credential.
pub fn sample_session() -> AdviceSession {
    AdviceSession {
        credential: "test-api-key".to_string(),
        profile: UserProfile {
            gender: Gender::Female,
            skin_tone: "Fair".to_string(),
            body_type: "Pear".to_string(),
        },
        context: StylingContext {
            occasion: "Casual Day Out".to_string(),
            weather: "Sunny & Hot".to_string(),
        },
        image: Some(png_image()),
    }
}
