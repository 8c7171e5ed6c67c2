//! Fake generative client for testing.
//!
//! Returns queued responses without network access and counts calls per
//! capability, so tests can assert that duplicate requests were suppressed
//! and not merely that no duplicate mutation happened.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use super::{GenerateError, GenerativeClient, InlineImage};

/// A fake generative client for testing.
#[derive(Debug, Default)]
pub struct FakeClient {
    structured: Mutex<VecDeque<Result<String, GenerateError>>>,
    image: Mutex<Option<InlineImage>>,
    fail_image: AtomicBool,
    structured_calls: AtomicUsize,
    image_calls: AtomicUsize,
    structured_prompts: Mutex<Vec<String>>,
    image_prompts: Mutex<Vec<String>>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one successful structured response.
    pub fn with_structured_response(response: impl Into<String>) -> Self {
        let client = Self::new();
        client.push_structured(Ok(response.into()));
        client
    }

    /// Queue a structured outcome; responses are consumed in FIFO order.
    pub fn push_structured(&self, outcome: Result<String, GenerateError>) {
        self.structured
            .lock()
            .unwrap()
            .push_back(outcome);
    }

    /// Set the image payload returned by every image call.
    pub fn set_image(&self, image: Option<InlineImage>) {
        *self.image.lock().unwrap() = image;
    }

    /// Make every image call fail with a request error.
    pub fn fail_image_calls(&self) {
        self.fail_image.store(true, Ordering::SeqCst);
    }

    pub fn structured_calls(&self) -> usize {
        self.structured_calls.load(Ordering::SeqCst)
    }

    pub fn image_calls(&self) -> usize {
        self.image_calls.load(Ordering::SeqCst)
    }

    /// The most recent structured-generation prompt, if any call was made.
    pub fn last_structured_prompt(&self) -> Option<String> {
        self.structured_prompts
            .lock()
            .unwrap()
            .last()
            .cloned()
    }

    /// The most recent image-generation prompt, if any call was made.
    pub fn last_image_prompt(&self) -> Option<String> {
        self.image_prompts
            .lock()
            .unwrap()
            .last()
            .cloned()
    }
}

#[async_trait]
impl GenerativeClient for FakeClient {
    async fn generate_structured(
        &self,
        _api_key: &str,
        _system_instruction: &str,
        prompt: &str,
        _response_schema: &JsonValue,
    ) -> Result<String, GenerateError> {
        self.structured_calls.fetch_add(1, Ordering::SeqCst);
        self.structured_prompts
            .lock()
            .unwrap()
            .push(prompt.to_string());

        self.structured
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(GenerateError::RequestFailed(
                    "FakeClient: no structured response queued".to_string(),
                ))
            })
    }

    async fn generate_image(
        &self,
        _api_key: &str,
        prompt: &str,
    ) -> Result<Option<InlineImage>, GenerateError> {
        self.image_calls.fetch_add(1, Ordering::SeqCst);
        self.image_prompts
            .lock()
            .unwrap()
            .push(prompt.to_string());

        if self.fail_image.load(Ordering::SeqCst) {
            return Err(GenerateError::RequestFailed(
                "FakeClient: image failure injected".to_string(),
            ));
        }

        Ok(self.image.lock().unwrap().clone())
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}
