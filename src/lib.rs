//! Core engine for an AI-assisted recipe recommendation and guided-cooking
//! app: the preference-to-recipe request pipeline, on-demand dish-image
//! enrichment, the view-state controller with its degrade-to-demo-mode
//! policy, and the cooking-mode session with per-step countdown timers.
//!
//! Rendering is out of scope; a UI layer observes [`app::AppController`] and
//! calls its operations.

pub mod ai;
pub mod app;
pub mod cooking;
pub mod credentials;
pub mod enrich;
pub mod error;
pub mod fallback;
pub mod recommend;
pub mod types;

pub use ai::{FakeClient, GeminiClient, GenerateError, GenerativeClient, InlineImage};
pub use app::{AppController, Diagnostic, Screen};
pub use cooking::{CookingHandle, CookingSession, SessionTimer, SharedSession, StepAdvance};
pub use credentials::{
    CredentialChain, CredentialResolver, EnvCredential, StoredCredential, API_KEY_ENV_VAR,
};
pub use enrich::ImageEnrichmentService;
pub use error::RecommendError;
pub use recommend::{RecipeBatch, RecommendationService};
pub use types::{
    CookingMethod, CookingStep, CuisineType, HeatLevel, Ingredient, Recipe, Sauce,
    SauceIngredient, TasteProfile, UserPreferences,
};
