//! Application view-state controller.
//!
//! Orchestrates which screen is active, holds the preference draft and the
//! recipe set, drives the recommendation and image-enrichment services, and
//! implements the degrade-to-demo-mode policy: the user is never shown an
//! empty or broken results screen.

use std::collections::HashSet;

use crate::cooking::{CookingHandle, StepAdvance};
use crate::enrich::ImageEnrichmentService;
use crate::error::RecommendError;
use crate::fallback;
use crate::recommend::{RecipeBatch, RecommendationService};
use crate::types::{Recipe, UserPreferences};

/// The four navigable screens. An active cooking session is orthogonal: it
/// fully replaces the presentation without changing the screen underneath.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Search,
    Results,
    Detail,
}

/// User-facing diagnostic recorded when the live path degrades to demo mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Short user-facing explanation for the banner.
    pub message: String,
    /// Raw error text for the expandable diagnostic log.
    pub detail: String,
}

/// Application state machine over screens, results, and the cooking session.
#[derive(Debug)]
pub struct AppController {
    recommender: RecommendationService,
    enricher: ImageEnrichmentService,
    screen: Screen,
    recipes: Vec<Recipe>,
    selected_id: Option<String>,
    prefs: UserPreferences,
    loading: bool,
    image_loading: bool,
    demo_mode: bool,
    diagnostic: Option<Diagnostic>,
    /// Rows dropped by lenient validation in the latest successful batch.
    dropped_rows: usize,
    /// Monotonic stamp for stale-response suppression.
    request_seq: u64,
    /// Recipe ids an image request was already issued for.
    image_requested: HashSet<String>,
    cooking: Option<CookingHandle>,
}

impl AppController {
    /// Create the controller on the home screen, showcasing the demo recipes.
    pub fn new(recommender: RecommendationService, enricher: ImageEnrichmentService) -> Self {
        Self {
            recommender,
            enricher,
            screen: Screen::Home,
            recipes: fallback::demo_recipes(),
            selected_id: None,
            prefs: UserPreferences::default(),
            loading: false,
            image_loading: false,
            demo_mode: false,
            diagnostic: None,
            dropped_rows: 0,
            request_seq: 0,
            image_requested: HashSet::new(),
            cooking: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn selected_recipe(&self) -> Option<&Recipe> {
        let id = self.selected_id.as_deref()?;
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn preferences(&self) -> &UserPreferences {
        &self.prefs
    }

    /// Mutable access to the preference draft, edited on the search screen.
    pub fn preferences_mut(&mut self) -> &mut UserPreferences {
        &mut self.prefs
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_image_loading(&self) -> bool {
        self.image_loading
    }

    pub fn is_demo_mode(&self) -> bool {
        self.demo_mode
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        self.diagnostic.as_ref()
    }

    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }

    pub fn is_cooking(&self) -> bool {
        self.cooking.is_some()
    }

    pub fn cooking(&self) -> Option<&CookingHandle> {
        self.cooking.as_ref()
    }

    /// Explicit navigation to the search screen.
    pub fn open_search(&mut self) {
        self.screen = Screen::Search;
    }

    /// Home is always reachable and clears nothing; only the selection
    /// becomes irrelevant until reselected.
    pub fn go_home(&mut self) {
        self.screen = Screen::Home;
    }

    pub fn back_to_results(&mut self) {
        self.screen = Screen::Results;
    }

    /// Dispatch a recommendation request for the current preference draft.
    /// The preferences are snapshotted at dispatch, so edits during the call
    /// do not leak into it. A later submission supersedes this one.
    pub async fn submit_search(&mut self) {
        let seq = self.begin_search();
        let prefs = self.prefs.clone();
        let outcome = self.recommender.request_recipes(&prefs).await;
        self.apply_search_outcome(seq, outcome);
    }

    /// Re-issue the identical request (the preference draft is untouched by
    /// fallback handling).
    pub async fn retry(&mut self) {
        self.submit_search().await;
    }

    /// Stamp a new request and enter the loading results state. Split from
    /// [`Self::apply_search_outcome`] so an embedder dispatching requests
    /// concurrently gets stale-response suppression.
    pub fn begin_search(&mut self) -> u64 {
        self.request_seq += 1;
        self.loading = true;
        self.screen = Screen::Results;
        self.request_seq
    }

    /// Apply a request outcome. Outcomes stamped with anything but the latest
    /// sequence are dropped: a slow early response must not overwrite the
    /// results of a later request.
    pub fn apply_search_outcome(&mut self, seq: u64, outcome: Result<RecipeBatch, RecommendError>) {
        if seq != self.request_seq {
            tracing::debug!(seq, latest = self.request_seq, "dropping stale response");
            return;
        }
        self.loading = false;

        match outcome {
            Ok(batch) => {
                if batch.dropped_rows > 0 {
                    tracing::warn!(dropped = batch.dropped_rows, "some recipe rows were dropped");
                }
                self.recipes = batch.recipes;
                self.dropped_rows = batch.dropped_rows;
                self.demo_mode = false;
                self.diagnostic = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "recommendation failed, degrading to demo mode");
                self.recipes = fallback::demo_recipes();
                self.dropped_rows = 0;
                self.demo_mode = true;
                self.diagnostic = Some(Self::diagnose(&err));
            }
        }
    }

    fn diagnose(err: &RecommendError) -> Diagnostic {
        let message = match err {
            RecommendError::Configuration(_) => "尚未設定 API 金鑰，已切換至展示模式。",
            RecommendError::Upstream(_) => "AI 服務連線異常，已切換至展示模式。",
            RecommendError::EmptyResult => "AI 回傳了空的食譜列表，請稍後再試。",
        };
        Diagnostic {
            message: message.to_string(),
            detail: err.to_string(),
        }
    }

    /// Select a recipe card and open its detail view. Returns `false` for an
    /// unknown id. Triggers at-most-once image enrichment for the recipe.
    pub async fn select_recipe(&mut self, id: &str) -> bool {
        if !self.recipes.iter().any(|r| r.id == id) {
            return false;
        }
        self.selected_id = Some(id.to_string());
        self.screen = Screen::Detail;
        self.maybe_enrich_image().await;
        true
    }

    /// Fetch a generated dish image for the selected recipe when it lacks
    /// one, outside demo mode, with a resolvable credential, at most once per
    /// recipe id. The image is merged into the backing list entry, so
    /// returning to results shows it without refetching.
    async fn maybe_enrich_image(&mut self) {
        let Some((id, name)) = self
            .selected_recipe()
            .filter(|r| r.image_url.is_none())
            .map(|r| (r.id.clone(), r.name.clone()))
        else {
            return;
        };

        if self.demo_mode
            || self.image_requested.contains(&id)
            || !self.enricher.credential_available()
        {
            return;
        }

        self.image_requested.insert(id.clone());
        self.image_loading = true;
        let image_url = self.enricher.request_dish_image(&name).await;
        self.image_loading = false;

        if let Some(url) = image_url {
            if let Some(recipe) = self.recipes.iter_mut().find(|r| r.id == id) {
                recipe.image_url = Some(url);
            }
        }
    }

    /// Enter cooking mode for the selected recipe. Requires at least one
    /// step; returns whether a session started.
    pub fn start_cooking(&mut self) -> bool {
        let Some(recipe) = self.selected_recipe() else {
            return false;
        };
        match CookingHandle::start(recipe) {
            Some(handle) => {
                self.cooking = Some(handle);
                true
            }
            None => false,
        }
    }

    /// Exit cooking mode, discarding the session and cancelling its timer.
    /// The underlying screen is untouched.
    pub fn exit_cooking(&mut self) {
        self.cooking = None;
    }

    /// Advance the active session one step. Advancing past the final step
    /// finishes and exits the session.
    pub async fn advance_step(&mut self) -> Option<StepAdvance> {
        let outcome = match &self.cooking {
            Some(handle) => handle.session().lock().await.advance(),
            None => return None,
        };
        if outcome == StepAdvance::Finished {
            self.exit_cooking();
        }
        Some(outcome)
    }

    /// Step back in the active session. No-op at the first step.
    pub async fn retreat_step(&mut self) -> bool {
        match &self.cooking {
            Some(handle) => handle.session().lock().await.retreat(),
            None => false,
        }
    }
}
