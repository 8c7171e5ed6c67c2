//! On-demand dish-image enrichment.
//!
//! Cosmetic augmentation of a recipe with a generated photo. Every failure
//! path resolves to "no image": enrichment must never block or fail the
//! surrounding flow. Duplicate suppression at recipe-id granularity is the
//! caller's responsibility (see the view-state controller).

use std::sync::Arc;

use base64::Engine;

use crate::ai::prompts::render_dish_image_prompt;
use crate::ai::GenerativeClient;
use crate::credentials::CredentialResolver;

/// Service that fetches a generated dish image as a displayable data URI.
#[derive(Debug)]
pub struct ImageEnrichmentService {
    client: Arc<dyn GenerativeClient>,
    credentials: Arc<dyn CredentialResolver>,
}

impl ImageEnrichmentService {
    pub fn new(client: Arc<dyn GenerativeClient>, credentials: Arc<dyn CredentialResolver>) -> Self {
        Self {
            client,
            credentials,
        }
    }

    /// Whether a credential currently resolves. The controller checks this
    /// before issuing a request so a keyless session never marks a recipe as
    /// attempted.
    pub fn credential_available(&self) -> bool {
        self.credentials.resolve().is_some()
    }

    /// Request a generated photo of the dish, returning a `data:` URI, or
    /// `None` on any failure. Never retried automatically.
    pub async fn request_dish_image(&self, dish_name: &str) -> Option<String> {
        let api_key = match self.credentials.resolve() {
            Some(key) => key,
            None => {
                tracing::debug!(dish = dish_name, "skipping image enrichment, no credential");
                return None;
            }
        };

        let prompt = render_dish_image_prompt(dish_name);

        let image = match self.client.generate_image(&api_key, &prompt).await {
            Ok(Some(image)) => image,
            Ok(None) => {
                tracing::debug!(dish = dish_name, "model returned no inline image");
                return None;
            }
            Err(e) => {
                tracing::warn!(dish = dish_name, error = %e, "image generation failed");
                return None;
            }
        };

        // Payload must be valid base64 to be displayable.
        if base64::engine::general_purpose::STANDARD
            .decode(&image.data)
            .is_err()
        {
            tracing::warn!(dish = dish_name, "discarding undecodable image payload");
            return None;
        }

        Some(format!(
            "data:{};base64,{}",
            image.mime_type, image.data
        ))
    }
}
