//! Request/response behaviour of the channel-backed callback.

use std::sync::Arc;
use std::time::Duration;

use game_core::{
    CombatStats, EffectEvent, Encounter, Entity, EntityId, EntityKind, GameConfig,
};
use runtime::{
    CancelReason, ChannelCallback, EventCallback, PresentationRequest, RequestKind,
    RuntimeConfig, RuntimeError,
};

fn skirmish() -> Encounter {
    Encounter::new(
        vec![Entity::new(EntityId::PLAYER, EntityKind::Player, "Hero")],
        vec![
            Entity::new(EntityId(10), EntityKind::Enemy, "Slime")
                .with_hp(20)
                .with_stats(CombatStats::new(5, 5, 5)),
        ],
        GameConfig::default(),
    )
    .unwrap()
}

fn choices(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| label.to_string()).collect()
}

#[tokio::test]
async fn presenter_answers_every_request_kind() {
    let (callback, mut port) = ChannelCallback::new(&RuntimeConfig::default());

    let presenter = tokio::spawn(async move {
        let mut seen = Vec::new();
        while let Some(request) = port.next_request().await {
            seen.push(request.kind());
            match request {
                PresentationRequest::Continue(responder)
                | PresentationRequest::Movement(responder) => {
                    responder.respond(());
                }
                PresentationRequest::Choice { choices, responder } => {
                    responder.respond(choices.len() - 1);
                }
                PresentationRequest::Combat { encounter, responder } => {
                    responder.respond(encounter.enemies().len() == 1);
                }
            }
        }
        seen
    });

    callback.wait_for_continue().await.unwrap();
    let picked = callback
        .wait_for_choice(choices(&["Stay", "Leave"]))
        .await
        .unwrap();
    assert_eq!(picked, 1);
    callback.wait_for_movement().await.unwrap();
    assert!(callback.wait_for_combat(skirmish()).await.unwrap());

    drop(callback);
    assert_eq!(
        presenter.await.unwrap(),
        vec![
            RequestKind::Continue,
            RequestKind::Choice,
            RequestKind::Movement,
            RequestKind::Combat
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn unanswered_request_times_out() {
    let config = RuntimeConfig {
        response_timeout: Some(Duration::from_secs(5)),
        ..RuntimeConfig::default()
    };
    let (callback, mut port) = ChannelCallback::new(&config);

    let err = callback.wait_for_continue().await.unwrap_err();
    assert!(err.is_cancelled());
    assert!(matches!(
        err,
        RuntimeError::Cancelled {
            request: RequestKind::Continue,
            reason: CancelReason::Timeout
        }
    ));

    // The stale request is still queued, but nobody waits for it anymore.
    match port.next_request().await {
        Some(PresentationRequest::Continue(responder)) => assert!(responder.is_abandoned()),
        other => panic!("unexpected request: {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn presenter_is_woken_when_the_requester_gives_up() {
    let config = RuntimeConfig {
        response_timeout: Some(Duration::from_secs(5)),
        ..RuntimeConfig::default()
    };
    let (callback, mut port) = ChannelCallback::new(&config);
    let waiting = tokio::spawn(async move { callback.wait_for_continue().await });

    let mut responder = match port.next_request().await {
        Some(PresentationRequest::Continue(responder)) => responder,
        other => panic!("unexpected request: {other:?}"),
    };
    assert!(!responder.is_abandoned());

    tokio::time::timeout(Duration::from_secs(60), responder.closed())
        .await
        .expect("responder should observe the timeout");
    assert!(responder.is_abandoned());
    assert!(!responder.respond(()));

    let err = waiting.await.unwrap().unwrap_err();
    assert_eq!(err.error_code(), "RUNTIME_CANCELLED");
}

#[tokio::test]
async fn dismissed_request_is_cancelled() {
    let (callback, mut port) = ChannelCallback::new(&RuntimeConfig::default());

    let presenter = tokio::spawn(async move {
        let request = port.next_request().await;
        drop(request);
        port
    });

    let err = callback
        .wait_for_choice(choices(&["Yes", "No"]))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Cancelled {
            request: RequestKind::Choice,
            reason: CancelReason::Dismissed
        }
    ));
    presenter.await.unwrap();
}

#[tokio::test]
async fn closed_port_cancels_immediately() {
    let (callback, port) = ChannelCallback::new(&RuntimeConfig::default());
    drop(port);

    let err = callback.wait_for_movement().await.unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Cancelled {
            request: RequestKind::Movement,
            reason: CancelReason::Disconnected
        }
    ));
}

#[tokio::test]
async fn second_suspension_is_rejected_while_one_is_outstanding() {
    let (callback, mut port) = ChannelCallback::new(&RuntimeConfig::default());
    let callback = Arc::new(callback);

    let first = tokio::spawn({
        let callback = Arc::clone(&callback);
        async move { callback.wait_for_continue().await }
    });
    let request = port.next_request().await.unwrap();

    let err = callback.wait_for_movement().await.unwrap_err();
    assert!(matches!(err, RuntimeError::SuspensionPending));

    match request {
        PresentationRequest::Continue(responder) => assert!(responder.respond(())),
        other => panic!("unexpected request: {other:?}"),
    }
    first.await.unwrap().unwrap();

    // Released once the first suspension resolved.
    let second = tokio::spawn({
        let callback = Arc::clone(&callback);
        async move { callback.wait_for_movement().await }
    });
    match port.next_request().await {
        Some(PresentationRequest::Movement(responder)) => assert!(responder.respond(())),
        other => panic!("unexpected request: {other:?}"),
    }
    second.await.unwrap().unwrap();
}

#[tokio::test]
async fn choice_answers_are_validated() {
    let (callback, mut port) = ChannelCallback::new(&RuntimeConfig::default());

    let err = callback.wait_for_choice(Vec::new()).await.unwrap_err();
    assert!(matches!(err, RuntimeError::NoChoices));

    tokio::spawn(async move {
        if let Some(PresentationRequest::Choice { responder, .. }) = port.next_request().await {
            responder.respond(7);
        }
    });
    let err = callback
        .wait_for_choice(choices(&["Left", "Right"]))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::InvalidChoice { index: 7, count: 2 }
    ));
}

#[tokio::test]
async fn effects_are_buffered_until_the_presenter_reads_them() {
    let (callback, mut port) = ChannelCallback::new(&RuntimeConfig::default());

    callback.deliver_effect(EffectEvent::dialogue(Some("Guide"), "Welcome back."));
    callback.deliver_effect(EffectEvent::Heal {
        target: EntityId::PLAYER,
        amount: 12,
    });

    assert_eq!(
        port.effects().recv().await.unwrap(),
        EffectEvent::dialogue(Some("Guide"), "Welcome back.")
    );
    assert_eq!(
        port.effects().recv().await.unwrap(),
        EffectEvent::Heal {
            target: EntityId::PLAYER,
            amount: 12
        }
    );
}
