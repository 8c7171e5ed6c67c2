//! Cooking-mode session: a step-sequencing state machine with a per-step
//! countdown timer.
//!
//! The session itself is a plain state machine (`tick` is just another
//! transition), so tests drive it synchronously. [`SessionTimer`] is the one
//! recurring background activity: a spawned one-second ticker whose guard
//! aborts the task on drop, making teardown deterministic.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::types::{CookingStep, Recipe};

/// Outcome of an advance request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAdvance {
    /// Moved to the given step index.
    Moved(usize),
    /// Advance was requested on the final step: the session is complete.
    Finished,
}

/// Step-by-step guided execution of one recipe.
///
/// Invariants: the current index stays within `[0, N-1]`; the timer never
/// goes negative; timers never carry over between steps and never auto-start.
#[derive(Debug)]
pub struct CookingSession {
    recipe_name: String,
    steps: Vec<CookingStep>,
    current: usize,
    remaining_seconds: u32,
    running: bool,
}

impl CookingSession {
    /// Start a fresh session at step 0. Returns `None` for a recipe without
    /// steps, which cannot be cooked through.
    pub fn new(recipe: &Recipe) -> Option<Self> {
        if recipe.steps.is_empty() {
            return None;
        }

        let mut session = Self {
            recipe_name: recipe.name.clone(),
            steps: recipe.steps.clone(),
            current: 0,
            remaining_seconds: 0,
            running: false,
        };
        session.load_step_timer();
        Some(session)
    }

    pub fn recipe_name(&self) -> &str {
        &self.recipe_name
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn current_step(&self) -> &CookingStep {
        &self.steps[self.current]
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_timer_running(&self) -> bool {
        self.running
    }

    /// Completed fraction for a progress bar, counting the current step.
    pub fn progress(&self) -> f32 {
        (self.current + 1) as f32 / self.steps.len() as f32
    }

    fn load_step_timer(&mut self) {
        self.remaining_seconds = self.current_step().duration_seconds.unwrap_or(0);
        self.running = false;
    }

    /// Move to the next step. On the final step this signals completion
    /// instead; the index never leaves `[0, N-1]`.
    pub fn advance(&mut self) -> StepAdvance {
        if self.current + 1 >= self.steps.len() {
            return StepAdvance::Finished;
        }
        self.current += 1;
        self.load_step_timer();
        StepAdvance::Moved(self.current)
    }

    /// Move to the previous step. No-op at step 0; returns whether it moved.
    pub fn retreat(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        self.load_step_timer();
        true
    }

    /// Flip the timer. No effect on steps without a configured duration.
    pub fn toggle_timer(&mut self) {
        if self.current_step().duration_seconds.is_none() {
            return;
        }
        self.running = !self.running;
    }

    /// Restore the timer to the step's configured duration, stopped.
    pub fn reset_timer(&mut self) {
        self.load_step_timer();
    }

    /// One second elapsed. Only mutates state while the timer is running;
    /// reaching zero stops the timer without advancing the step.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.running = false;
        }
    }
}

/// Shared handle to a session, for the ticker task and the UI to observe.
pub type SharedSession = Arc<Mutex<CookingSession>>;

/// One-second ticker driving a session's countdown. Aborts its task on drop.
#[derive(Debug)]
pub struct SessionTimer {
    handle: JoinHandle<()>,
}

impl SessionTimer {
    /// Spawn the ticker for a session. At most one timer should exist per
    /// session; the session's owner holds the guard.
    pub fn spawn(session: SharedSession) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick of an interval fires immediately; harmless here
            // since a fresh session's timer is never running.
            loop {
                interval.tick().await;
                session.lock().await.tick();
            }
        });
        Self { handle }
    }
}

impl Drop for SessionTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// An active cooking session together with its ticker.
///
/// Dropping the handle tears the session down: the ticker task is aborted and
/// no state persists to a future session for the same recipe.
#[derive(Debug)]
pub struct CookingHandle {
    session: SharedSession,
    _timer: SessionTimer,
}

impl CookingHandle {
    /// Enter cooking mode for a recipe. `None` if the recipe has no steps.
    pub fn start(recipe: &Recipe) -> Option<Self> {
        let session = Arc::new(Mutex::new(CookingSession::new(recipe)?));
        let timer = SessionTimer::spawn(session.clone());
        Some(Self {
            session,
            _timer: timer,
        })
    }

    pub fn session(&self) -> &SharedSession {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback;

    fn four_step_recipe() -> Recipe {
        // 黃金脆皮煎餃 has four steps, two of them timed.
        fallback::demo_recipes().remove(0)
    }

    #[test]
    fn fresh_session_starts_at_step_zero_stopped() {
        let recipe = four_step_recipe();
        let session = CookingSession::new(&recipe).unwrap();
        assert_eq!(session.current_index(), 0);
        assert!(!session.is_timer_running());
        // Step 1 has no duration configured.
        assert_eq!(session.remaining_seconds(), 0);
    }

    #[test]
    fn recipe_without_steps_cannot_start() {
        let mut recipe = four_step_recipe();
        recipe.steps.clear();
        assert!(CookingSession::new(&recipe).is_none());
    }

    #[test]
    fn advance_walks_to_last_step_then_finishes() {
        let recipe = four_step_recipe();
        let mut session = CookingSession::new(&recipe).unwrap();

        assert_eq!(session.advance(), StepAdvance::Moved(1));
        assert_eq!(session.advance(), StepAdvance::Moved(2));
        assert_eq!(session.advance(), StepAdvance::Moved(3));
        // Fourth advance on a four-step recipe signals completion, not index 4.
        assert_eq!(session.advance(), StepAdvance::Finished);
        assert_eq!(session.current_index(), 3);
    }

    #[test]
    fn retreat_is_a_noop_at_step_zero() {
        let recipe = four_step_recipe();
        let mut session = CookingSession::new(&recipe).unwrap();
        assert!(!session.retreat());
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn index_change_reloads_timer_and_stops_it() {
        let recipe = four_step_recipe();
        let mut session = CookingSession::new(&recipe).unwrap();

        // Step 3 (index 2) is timed at 120s.
        session.advance();
        session.advance();
        assert_eq!(session.remaining_seconds(), 120);
        session.toggle_timer();
        session.tick();
        assert_eq!(session.remaining_seconds(), 119);

        // Retreating resets to the new step's duration, stopped.
        session.retreat();
        assert!(!session.is_timer_running());
        assert_eq!(session.remaining_seconds(), 0);

        // Coming back, the 120s timer is fresh again: no carry-over.
        session.advance();
        assert_eq!(session.remaining_seconds(), 120);
        assert!(!session.is_timer_running());
    }

    #[test]
    fn toggle_has_no_effect_without_a_duration() {
        let recipe = four_step_recipe();
        let mut session = CookingSession::new(&recipe).unwrap();
        session.toggle_timer();
        assert!(!session.is_timer_running());
    }

    #[test]
    fn timer_counts_down_and_reset_restores() {
        let mut recipe = four_step_recipe();
        recipe.steps[0].duration_seconds = Some(120);
        let mut session = CookingSession::new(&recipe).unwrap();

        session.toggle_timer();
        for _ in 0..5 {
            session.tick();
        }
        assert_eq!(session.remaining_seconds(), 115);
        assert!(session.is_timer_running());

        session.reset_timer();
        assert_eq!(session.remaining_seconds(), 120);
        assert!(!session.is_timer_running());
    }

    #[test]
    fn reaching_zero_stops_without_advancing() {
        let mut recipe = four_step_recipe();
        recipe.steps[0].duration_seconds = Some(2);
        let mut session = CookingSession::new(&recipe).unwrap();

        session.toggle_timer();
        session.tick();
        session.tick();
        assert_eq!(session.remaining_seconds(), 0);
        assert!(!session.is_timer_running());
        assert_eq!(session.current_index(), 0);

        // Extra ticks while stopped never go negative.
        session.tick();
        assert_eq!(session.remaining_seconds(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_drives_the_session_and_stops_on_drop() {
        let mut recipe = four_step_recipe();
        recipe.steps[0].duration_seconds = Some(120);

        let handle = CookingHandle::start(&recipe).unwrap();
        // Let the ticker task initialize its interval.
        tokio::task::yield_now().await;

        handle.session().lock().await.toggle_timer();
        for _ in 0..5 {
            tokio::time::advance(Duration::from_secs(1)).await;
            tokio::task::yield_now().await;
        }
        assert_eq!(handle.session().lock().await.remaining_seconds(), 115);

        let session = handle.session().clone();
        drop(handle);
        tokio::task::yield_now().await;

        // With the guard dropped the ticker is aborted: time passing no
        // longer mutates the session.
        tokio::time::advance(Duration::from_secs(10)).await;
        tokio::task::yield_now().await;
        assert_eq!(session.lock().await.remaining_seconds(), 115);
    }
}
