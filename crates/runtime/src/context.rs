//! Per-playback execution handle.
//!
//! An [`EventContext`] threads together everything a story driver needs
//! while one event plays: entropy, where and when the event runs, the shared
//! repositories and the presentation callback. Dependencies are injected
//! through [`EventContextBuilder`]; nothing is looked up globally.
use std::sync::Arc;

use game_core::{
    EffectEvent, Encounter, EvalEnv, EventCondition, EventLocation, EventValue, GameConfig,
    GameError, RandomSource, ResolveError, Timestamp, resolve_condition, resolve_value,
};

use crate::api::{EventCallback, Result, RuntimeError};
use crate::clock;
use crate::random::StdRandom;
use crate::repository::{
    ArchiveRepository, GameStateRepository, InMemoryResources, InMemorySaveStore,
    ResourceRepository, SaveSlotStore,
};

/// Shared repositories borrowed by every context of a session.
#[derive(Clone)]
pub struct Repositories {
    pub game_state: Arc<GameStateRepository>,
    pub resources: Arc<dyn ResourceRepository>,
    pub archive: Arc<ArchiveRepository>,
}

impl Repositories {
    /// Game state and archive share `saves`; resources are independent.
    pub fn new(saves: Arc<dyn SaveSlotStore>, resources: Arc<dyn ResourceRepository>) -> Self {
        Self {
            game_state: Arc::new(GameStateRepository::new(Arc::clone(&saves))),
            resources,
            archive: Arc::new(ArchiveRepository::new(saves)),
        }
    }

    /// Empty in-memory repositories for tests and local runs.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemorySaveStore::new()),
            Arc::new(InMemoryResources::new()),
        )
    }
}

/// Execution handle for one event playback.
///
/// Suspending methods take `&mut self`: a context can have at most one
/// outstanding suspension, and two flows cannot share it.
pub struct EventContext {
    rng: Arc<dyn RandomSource>,
    location: Option<EventLocation>,
    timestamp: Timestamp,
    callback: Arc<dyn EventCallback>,
    repositories: Repositories,
    config: GameConfig,
}

impl EventContext {
    pub fn builder(
        callback: Arc<dyn EventCallback>,
        repositories: Repositories,
    ) -> EventContextBuilder {
        EventContextBuilder::new(callback, repositories)
    }

    pub fn rng(&self) -> &dyn RandomSource {
        self.rng.as_ref()
    }

    pub fn location(&self) -> Option<&EventLocation> {
        self.location.as_ref()
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn repositories(&self) -> &Repositories {
        &self.repositories
    }

    pub fn game_state(&self) -> &GameStateRepository {
        &self.repositories.game_state
    }

    pub fn resources(&self) -> &dyn ResourceRepository {
        self.repositories.resources.as_ref()
    }

    pub fn archive(&self) -> &ArchiveRepository {
        &self.repositories.archive
    }

    /// Evaluation environment over this context's entropy and game state.
    pub fn env(&self) -> EvalEnv<'_> {
        EvalEnv::new(self.rng.as_ref(), self.repositories.game_state.as_ref())
    }

    pub fn resolve_value(&self, value: &EventValue) -> Result<i32> {
        resolve_value(value, &self.env()).map_err(|err| self.resolve_failed(err))
    }

    pub fn check_condition(&self, condition: &EventCondition) -> Result<bool> {
        resolve_condition(condition, &self.env()).map_err(|err| self.resolve_failed(err))
    }

    fn resolve_failed(&self, err: ResolveError) -> RuntimeError {
        let severity = err.severity();
        if severity.is_internal() {
            tracing::error!(
                code = err.error_code(),
                severity = severity.as_str(),
                location = ?self.location,
                "event resolution hit an unimplemented branch: {}",
                err
            );
        } else {
            tracing::warn!(
                code = err.error_code(),
                severity = severity.as_str(),
                location = ?self.location,
                "event resolution failed: {}",
                err
            );
        }
        err.into()
    }

    pub async fn wait_for_continue(&mut self) -> Result<()> {
        self.callback.wait_for_continue().await
    }

    pub async fn wait_for_choice(&mut self, choices: Vec<String>) -> Result<usize> {
        self.callback.wait_for_choice(choices).await
    }

    pub async fn wait_for_movement(&mut self) -> Result<()> {
        self.callback.wait_for_movement().await
    }

    /// Hands `encounter` to the presentation layer; returns whether the
    /// player won.
    pub async fn wait_for_combat(&mut self, encounter: Encounter) -> Result<bool> {
        self.callback.wait_for_combat(encounter).await
    }

    /// Fire-and-continue delivery of a finished effect.
    pub fn emit(&self, effect: EffectEvent) {
        self.callback.deliver_effect(effect);
    }
}

impl std::fmt::Debug for EventContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventContext")
            .field("location", &self.location)
            .field("timestamp", &self.timestamp)
            .finish_non_exhaustive()
    }
}

/// Builder for [`EventContext`].
///
/// Defaults: entropy-seeded [`StdRandom`], no location, wall-clock time and
/// the base [`GameConfig`].
pub struct EventContextBuilder {
    callback: Arc<dyn EventCallback>,
    repositories: Repositories,
    rng: Option<Arc<dyn RandomSource>>,
    location: Option<EventLocation>,
    timestamp: Option<Timestamp>,
    config: GameConfig,
}

impl EventContextBuilder {
    fn new(callback: Arc<dyn EventCallback>, repositories: Repositories) -> Self {
        Self {
            callback,
            repositories,
            rng: None,
            location: None,
            timestamp: None,
            config: GameConfig::default(),
        }
    }

    /// Share a random source across contexts.
    pub fn rng(mut self, rng: Arc<dyn RandomSource>) -> Self {
        self.rng = Some(rng);
        self
    }

    pub fn location(mut self, location: EventLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Pin the context time instead of reading the wall clock.
    pub fn timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> EventContext {
        let rng: Arc<dyn RandomSource> = match self.rng {
            Some(rng) => rng,
            None => Arc::new(StdRandom::from_entropy()),
        };
        let context = EventContext {
            rng,
            location: self.location,
            timestamp: self.timestamp.unwrap_or_else(clock::now),
            callback: self.callback,
            repositories: self.repositories,
            config: self.config,
        };

        match &context.location {
            Some(location) => {
                tracing::info!(%location, timestamp = %context.timestamp, "event context created")
            }
            None => tracing::info!(timestamp = %context.timestamp, "event context created"),
        }
        context
    }
}
