//! Recommendation request service.
//!
//! Turns structured preferences into a natural-language prompt, calls the
//! generative model, and validates the structured response into normalized
//! recipes with session-unique ids.

use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::ai::prompts::{render_recommend_prompt, RECOMMEND_SYSTEM_INSTRUCTION};
use crate::ai::{recipe_response_schema, GenerativeClient};
use crate::credentials::CredentialResolver;
use crate::error::RecommendError;
use crate::types::{Recipe, UserPreferences};

/// Result of a recommendation request.
#[derive(Debug)]
pub struct RecipeBatch {
    /// Normalized recipes, in the order the model returned them.
    pub recipes: Vec<Recipe>,
    /// Rows dropped by lenient per-row validation.
    pub dropped_rows: usize,
}

/// Service that requests structured recipes from the generative model.
///
/// Holds no retry logic; retry is a caller-level policy triggered by explicit
/// user action.
#[derive(Debug)]
pub struct RecommendationService {
    client: Arc<dyn GenerativeClient>,
    credentials: Arc<dyn CredentialResolver>,
}

impl RecommendationService {
    pub fn new(client: Arc<dyn GenerativeClient>, credentials: Arc<dyn CredentialResolver>) -> Self {
        Self {
            client,
            credentials,
        }
    }

    /// Request recipes matching the given preferences.
    ///
    /// Fails with [`RecommendError::Configuration`] before any network
    /// attempt when no credential resolves, [`RecommendError::Upstream`] on
    /// call failure or unparsable payloads, and
    /// [`RecommendError::EmptyResult`] when nothing survives validation.
    pub async fn request_recipes(
        &self,
        prefs: &UserPreferences,
    ) -> Result<RecipeBatch, RecommendError> {
        let api_key = self.credentials.resolve().ok_or_else(|| {
            RecommendError::Configuration(
                "no stored or process-level API key available".to_string(),
            )
        })?;

        let prompt = render_recommend_prompt(prefs);
        let schema = recipe_response_schema();

        let payload = self
            .client
            .generate_structured(&api_key, RECOMMEND_SYSTEM_INSTRUCTION, &prompt, &schema)
            .await?;

        let rows: Vec<JsonValue> = serde_json::from_str(&payload).map_err(|e| {
            RecommendError::Upstream(format!("response was not a JSON array: {e}"))
        })?;

        let batch = self.validate_rows(rows, prefs.time_limit);

        if batch.recipes.is_empty() {
            return Err(RecommendError::EmptyResult);
        }

        Ok(batch)
    }

    /// Lenient per-row validation: malformed rows are dropped and counted
    /// instead of failing the batch. Rows exceeding a requested time limit
    /// violate the model contract and are dropped the same way.
    fn validate_rows(&self, rows: Vec<JsonValue>, time_limit: Option<u32>) -> RecipeBatch {
        let generated_at = chrono::Utc::now().timestamp_millis();
        let mut recipes = Vec::with_capacity(rows.len());
        let mut dropped_rows = 0;

        for (idx, row) in rows.into_iter().enumerate() {
            let mut recipe: Recipe = match serde_json::from_value(row) {
                Ok(recipe) => recipe,
                Err(e) => {
                    tracing::warn!(row = idx, error = %e, "dropping malformed recipe row");
                    dropped_rows += 1;
                    continue;
                }
            };

            recipe.normalize();

            if let Some(limit) = time_limit {
                if recipe.total_time_minutes > limit {
                    tracing::warn!(
                        row = idx,
                        total = recipe.total_time_minutes,
                        limit,
                        "dropping recipe exceeding requested time limit"
                    );
                    dropped_rows += 1;
                    continue;
                }
            }

            recipe.id = format!("gen-{generated_at}-{idx}");
            recipes.push(recipe);
        }

        RecipeBatch {
            recipes,
            dropped_rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{FakeClient, GenerateError};
    use crate::credentials::{CredentialChain, StoredCredential};
    use serde_json::json;

    fn recipe_row(name: &str, total_minutes: u32) -> JsonValue {
        json!({
            "name": name,
            "description": "測試料理",
            "cuisine": "台式",
            "difficulty": 2,
            "prepTimeMinutes": total_minutes / 2,
            "cookTimeMinutes": total_minutes - total_minutes / 2,
            "totalTimeMinutes": total_minutes,
            "ingredients": [
                { "name": "雞蛋", "shape": "打散", "texture": "生", "amount": "2顆", "colorHex": "#fde68a" }
            ],
            "tasteProfile": { "salty": 3, "acidic": 0, "sweet": 1, "spicy": 0, "bitter": 0 },
            "cookingMethods": ["炒"],
            "steps": [
                { "stepNumber": 1, "instruction": "熱鍋下油，倒入蛋液快速翻炒至半熟後盛起備用",
                  "successTip": "蛋液邊緣微微凝固", "heatLevel": "中火", "durationSeconds": 60 }
            ]
        })
    }

    fn service_with(client: Arc<FakeClient>, key: Option<&str>) -> RecommendationService {
        let credentials: Arc<dyn crate::credentials::CredentialResolver> = match key {
            Some(k) => Arc::new(StoredCredential::with_value(k)),
            None => Arc::new(CredentialChain::default()),
        };
        RecommendationService::new(client, credentials)
    }

    #[tokio::test]
    async fn success_assigns_unique_ids_in_received_order() {
        let payload = json!([recipe_row("蛋炒飯", 20), recipe_row("煎蛋", 10)]).to_string();
        let client = Arc::new(FakeClient::with_structured_response(payload));
        let service = service_with(client.clone(), Some("key"));

        let batch = service
            .request_recipes(&UserPreferences::default())
            .await
            .unwrap();

        assert_eq!(batch.recipes.len(), 2);
        assert_eq!(batch.dropped_rows, 0);
        assert_eq!(batch.recipes[0].name, "蛋炒飯");
        assert_eq!(batch.recipes[1].name, "煎蛋");
        assert_ne!(batch.recipes[0].id, batch.recipes[1].id);
        assert!(batch.recipes[0].id.starts_with("gen-"));
    }

    #[tokio::test]
    async fn missing_credential_fails_before_any_call() {
        let client = Arc::new(FakeClient::with_structured_response("[]"));
        let service = service_with(client.clone(), None);

        let err = service
            .request_recipes(&UserPreferences::default())
            .await
            .unwrap_err();

        assert!(matches!(err, RecommendError::Configuration(_)));
        assert_eq!(client.structured_calls(), 0);
    }

    #[tokio::test]
    async fn empty_array_is_empty_result() {
        let client = Arc::new(FakeClient::with_structured_response("[]"));
        let service = service_with(client, Some("key"));

        let err = service
            .request_recipes(&UserPreferences::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RecommendError::EmptyResult));
    }

    #[tokio::test]
    async fn non_json_payload_is_upstream_error() {
        let client = Arc::new(FakeClient::with_structured_response("抱歉，我無法回答。"));
        let service = service_with(client, Some("key"));

        let err = service
            .request_recipes(&UserPreferences::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RecommendError::Upstream(_)));
    }

    #[tokio::test]
    async fn upstream_failure_maps_to_upstream_error() {
        let client = Arc::new(FakeClient::new());
        client.push_structured(Err(GenerateError::ApiError {
            status: 500,
            message: "internal".to_string(),
        }));
        let service = service_with(client, Some("key"));

        let err = service
            .request_recipes(&UserPreferences::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RecommendError::Upstream(_)));
    }

    #[tokio::test]
    async fn malformed_rows_are_dropped_and_counted() {
        let payload = json!([recipe_row("合格", 20), { "name": "缺欄位" }]).to_string();
        let client = Arc::new(FakeClient::with_structured_response(payload));
        let service = service_with(client, Some("key"));

        let batch = service
            .request_recipes(&UserPreferences::default())
            .await
            .unwrap();
        assert_eq!(batch.recipes.len(), 1);
        assert_eq!(batch.dropped_rows, 1);
    }

    #[tokio::test]
    async fn all_rows_dropped_is_empty_result() {
        let payload = json!([{ "name": "壞掉" }]).to_string();
        let client = Arc::new(FakeClient::with_structured_response(payload));
        let service = service_with(client, Some("key"));

        let err = service
            .request_recipes(&UserPreferences::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RecommendError::EmptyResult));
    }

    #[tokio::test]
    async fn time_limit_violations_are_dropped() {
        let payload = json!([recipe_row("快炒", 25), recipe_row("慢燉", 90)]).to_string();
        let client = Arc::new(FakeClient::with_structured_response(payload));
        let service = service_with(client, Some("key"));

        let prefs = UserPreferences {
            time_limit: Some(30),
            ..Default::default()
        };
        let batch = service.request_recipes(&prefs).await.unwrap();
        assert_eq!(batch.recipes.len(), 1);
        assert_eq!(batch.recipes[0].name, "快炒");
        assert_eq!(batch.dropped_rows, 1);
    }

    // Time budget plus on-hand ingredients drive the prompt, and the
    // surviving recipes honor the budget and feature the ingredients.
    #[tokio::test]
    async fn on_hand_ingredients_and_time_budget_flow_through() {
        let payload = json!([recipe_row("洋蔥炒蛋", 20)]).to_string();
        let client = Arc::new(FakeClient::with_structured_response(payload));
        let service = service_with(client.clone(), Some("key"));

        let prefs = UserPreferences {
            time_limit: Some(30),
            ingredients_on_hand: Some("雞蛋,洋蔥".to_string()),
            mood: Some(String::new()),
            desired_cuisine: vec![],
        };

        let batch = service.request_recipes(&prefs).await.unwrap();
        assert!(batch.recipes[0].total_time_minutes <= 30);
        assert!(batch.recipes[0]
            .ingredients
            .iter()
            .any(|i| i.name.contains("雞蛋") || i.name.contains("洋蔥")));

        let prompt = client.last_structured_prompt().unwrap();
        assert!(prompt.contains("雞蛋,洋蔥"));
        assert!(prompt.contains("30 分鐘"));
        assert!(!prompt.contains("心情"));
    }
}
