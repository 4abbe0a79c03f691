//! Event playback through a fully wired context.

use std::sync::Arc;

use game_core::{
    CombatStats, Comparator, CurrencyType, EffectEvent, Encounter, EncounterOutcome, Entity,
    EntityId, EntityKind, ErrorSeverity, EventCondition, EventLocation, EventValue, GameConfig, PcgRng,
    ResolveError, Timestamp, VariableRef,
};
use runtime::{
    ChannelCallback, EventContext, PresentationPort, PresentationRequest, Repositories,
    RuntimeConfig, RuntimeError, SaveSlot,
};

fn context(rng: Arc<PcgRng>) -> (EventContext, PresentationPort) {
    let (callback, port) = ChannelCallback::new(&RuntimeConfig::default());
    let context = EventContext::builder(Arc::new(callback), Repositories::in_memory())
        .rng(rng)
        .location(EventLocation::new("chapter1/village", 4))
        .timestamp(Timestamp::from_millis(1_700_000_000_000))
        .build();
    (context, port)
}

/// Answers choices with `pick` and resolves combat automatically.
fn spawn_presenter(mut port: PresentationPort, pick: usize) {
    tokio::spawn(async move {
        let rng = PcgRng::seeded(99);
        while let Some(request) = port.next_request().await {
            match request {
                PresentationRequest::Continue(responder)
                | PresentationRequest::Movement(responder) => {
                    responder.respond(());
                }
                PresentationRequest::Choice { responder, .. } => {
                    responder.respond(pick);
                }
                PresentationRequest::Combat {
                    mut encounter,
                    responder,
                } => {
                    while encounter.outcome() == EncounterOutcome::Ongoing {
                        encounter.play_round(&rng);
                    }
                    responder.respond(encounter.outcome() == EncounterOutcome::Victory);
                }
            }
        }
    });
}

#[tokio::test]
async fn builder_overrides_location_and_time() {
    let (context, _port) = context(Arc::new(PcgRng::seeded(1)));

    assert_eq!(
        context.location(),
        Some(&EventLocation::new("chapter1/village", 4))
    );
    assert_eq!(context.timestamp(), Timestamp::from_millis(1_700_000_000_000));
    assert_eq!(context.config(), &GameConfig::default());
}

#[tokio::test]
async fn default_timestamp_reads_the_wall_clock() {
    let (callback, _port) = ChannelCallback::new(&RuntimeConfig::default());
    let context = EventContext::builder(Arc::new(callback), Repositories::in_memory()).build();

    assert!(context.timestamp() > Timestamp::from_millis(1_600_000_000_000));
    assert!(context.location().is_none());
}

#[tokio::test]
async fn resolvers_read_live_game_state() {
    let (context, _port) = context(Arc::new(PcgRng::seeded(1)));

    let gold = EventValue::Currency(CurrencyType::Gold);
    assert_eq!(context.resolve_value(&gold).unwrap(), 0);

    context
        .game_state()
        .set_balance(CurrencyType::Gold, 120)
        .unwrap();
    assert_eq!(context.resolve_value(&gold).unwrap(), 120);

    let can_afford = EventCondition::compare(gold, Comparator::GreaterOrEqual, 100);
    assert!(context.check_condition(&can_afford).unwrap());
}

#[tokio::test]
async fn unimplemented_lookups_fail_loudly() {
    let (context, _port) = context(Arc::new(PcgRng::seeded(1)));

    let err = context
        .resolve_value(&EventValue::SavedVariable(VariableRef::new("met_guide")))
        .unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Resolve(ResolveError::NotImplemented { .. })
    ));
    assert_eq!(err.severity(), ErrorSeverity::Internal);
    assert_eq!(err.error_code(), "RESOLVE_NOT_IMPLEMENTED");

    let err = context.resolve_value(&EventValue::random(9, 3)).unwrap_err();
    assert_eq!(err.severity(), ErrorSeverity::Validation);
    assert_eq!(err.error_code(), "RESOLVE_INVALID_RANGE");
}

#[tokio::test]
async fn identical_seeds_replay_identical_draws() {
    let roll = EventValue::random(1, 100);
    let draws = |seed| {
        let (context, _port) = context(Arc::new(PcgRng::seeded(seed)));
        (0..20)
            .map(|_| context.resolve_value(&roll).unwrap())
            .collect::<Vec<_>>()
    };

    assert_eq!(draws(42), draws(42));
    assert!(draws(42).iter().all(|value| (1..=100).contains(value)));
}

#[tokio::test]
async fn scripted_event_plays_to_completion() {
    let (mut context, mut port) = context(Arc::new(PcgRng::seeded(7)));
    let mut effects = port.subscribe_effects();
    spawn_presenter(port, 0);

    context.emit(EffectEvent::dialogue(Some("Elder"), "Slimes again..."));
    context.wait_for_continue().await.unwrap();

    let choice = context
        .wait_for_choice(vec!["Fight".into(), "Flee".into()])
        .await
        .unwrap();
    assert_eq!(choice, 0);

    let encounter = Encounter::new(
        vec![
            Entity::new(EntityId::PLAYER, EntityKind::Player, "Hero")
                .with_stats(CombatStats::new(30, 10, 15)),
        ],
        vec![
            Entity::new(EntityId(10), EntityKind::Enemy, "Slime")
                .with_hp(15)
                .with_stats(CombatStats::new(2, 5, 3)),
        ],
        context.config().clone(),
    )
    .unwrap();
    assert!(context.wait_for_combat(encounter).await.unwrap());
    context.wait_for_movement().await.unwrap();

    assert_eq!(
        effects.recv().await.unwrap(),
        EffectEvent::dialogue(Some("Elder"), "Slimes again...")
    );
}

#[tokio::test]
async fn game_state_flushes_to_the_loaded_slot() {
    let (context, _port) = context(Arc::new(PcgRng::seeded(1)));
    let slot = SaveSlot::new(2).unwrap();

    context.archive().create(slot, "Ayla").await.unwrap();
    context.game_state().load(slot).await.unwrap();
    context
        .game_state()
        .adjust_balance(CurrencyType::Gem, 3)
        .unwrap();
    context.game_state().flush().await.unwrap();

    let summary = context.archive().select(slot).await.unwrap();
    assert_eq!(summary.player_name, "Ayla");
    assert_eq!(context.archive().active_slot(), Some(slot));

    // Reloading picks the flushed balance back up.
    context
        .game_state()
        .set_balance(CurrencyType::Gem, 0)
        .unwrap();
    context.game_state().load(slot).await.unwrap();
    assert_eq!(context.game_state().balance(CurrencyType::Gem), 3);
}
