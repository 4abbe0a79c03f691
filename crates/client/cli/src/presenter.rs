//! Console presentation layer.
//!
//! Answers playback requests from stdin and prints delivered effects.
//! Combat is not interactive: encounters are played out automatically with
//! the shared random source.
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use game_core::{
    EffectEvent, Encounter, EncounterOutcome, Entity, EntityId, GameConfig, RandomSource,
};
use runtime::{PresentationPort, PresentationRequest, Responder};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::broadcast::error::RecvError;

/// Rounds after which an encounter counts as lost.
const MAX_ROUNDS: u32 = 50;

/// One combat tick; paces automatic rounds and revealed text.
const ROUND_PAUSE: Duration = Duration::from_millis(GameConfig::COMBAT_TICK_INTERVAL_MS);

pub struct ConsolePresenter {
    port: PresentationPort,
    rng: Arc<dyn RandomSource>,
    auto_advance: bool,
    text_speed: u8,
}

impl ConsolePresenter {
    pub fn new(
        port: PresentationPort,
        rng: Arc<dyn RandomSource>,
        auto_advance: bool,
        text_speed: u8,
    ) -> Self {
        Self {
            port,
            rng,
            auto_advance,
            text_speed,
        }
    }

    /// Serves requests until the playback side hangs up.
    pub async fn run(self) -> Result<()> {
        let Self {
            port,
            rng,
            auto_advance,
            text_speed,
        } = self;
        let (mut requests, mut effects) = port.into_parts();
        let mut input = BufReader::new(tokio::io::stdin()).lines();
        let mut effects_open = true;

        loop {
            tokio::select! {
                // Effects are emitted before the prompt that follows them.
                biased;

                effect = effects.recv(), if effects_open => match effect {
                    Ok(effect) => reveal(&describe(&effect, None), text_speed).await?,
                    Err(RecvError::Lagged(missed)) => {
                        tracing::warn!(missed, "presenter fell behind on effects");
                    }
                    Err(RecvError::Closed) => effects_open = false,
                },

                request = requests.recv() => match request {
                    Some(request) => {
                        tracing::debug!(request = %request.kind(), "presenting");
                        answer(request, &mut input, rng.as_ref(), auto_advance).await?;
                    }
                    None => break,
                },
            }
        }

        while let Ok(effect) = effects.try_recv() {
            reveal(&describe(&effect, None), text_speed).await?;
        }
        Ok(())
    }
}

/// Prints a line `text_speed` characters per combat tick.
async fn reveal(line: &str, text_speed: u8) -> Result<()> {
    if text_speed == 0 {
        println!("{}", line);
        return Ok(());
    }
    let chars: Vec<char> = line.chars().collect();
    let mut stdout = std::io::stdout();
    for chunk in chars.chunks(usize::from(text_speed)) {
        write!(stdout, "{}", chunk.iter().collect::<String>())?;
        stdout.flush()?;
        tokio::time::sleep(ROUND_PAUSE).await;
    }
    writeln!(stdout)?;
    Ok(())
}

async fn answer(
    request: PresentationRequest,
    input: &mut Lines<BufReader<Stdin>>,
    rng: &dyn RandomSource,
    auto_advance: bool,
) -> Result<()> {
    match request {
        PresentationRequest::Continue(responder) => {
            if auto_advance {
                responder.respond(());
            } else {
                println!("  [press Enter]");
                respond_on_input(responder, input, |_| Some(())).await?;
            }
        }
        PresentationRequest::Movement(responder) => {
            println!("  ...");
            responder.respond(());
        }
        PresentationRequest::Choice { choices, responder } => {
            for (index, choice) in choices.iter().enumerate() {
                println!("  {}) {}", index + 1, choice);
            }
            let count = choices.len();
            respond_on_input(responder, input, |line| {
                line.trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|picked| (1..=count).contains(picked))
                    .map(|picked| picked - 1)
            })
            .await?;
        }
        PresentationRequest::Combat {
            mut encounter,
            responder,
        } => {
            responder.respond(auto_battle(&mut encounter, rng).await);
        }
    }
    Ok(())
}

/// Reads lines until `parse` accepts one. End of input drops the responder,
/// which cancels the waiting request. Returns early if the requester gives up
/// first, so a timed-out prompt never keeps the presenter blocked on stdin.
async fn respond_on_input<T>(
    mut responder: Responder<T>,
    input: &mut Lines<BufReader<Stdin>>,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<()> {
    loop {
        let line = tokio::select! {
            line = input.next_line() => line?,
            _ = responder.closed() => {
                tracing::info!("request abandoned before input arrived");
                println!("  (prompt expired)");
                return Ok(());
            }
        };
        let Some(line) = line else {
            tracing::info!("stdin closed; dismissing request");
            return Ok(());
        };
        if let Some(value) = parse(&line) {
            responder.respond(value);
            return Ok(());
        }
        println!("  (try again)");
    }
}

async fn auto_battle(encounter: &mut Encounter, rng: &dyn RandomSource) -> bool {
    let names = |ids: &[Entity]| {
        ids.iter()
            .map(|entity| entity.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!(
        "  Battle! {} vs {}",
        names(encounter.party()),
        names(encounter.enemies())
    );

    while encounter.outcome() == EncounterOutcome::Ongoing && encounter.turn() < MAX_ROUNDS {
        for effect in encounter.play_round(rng) {
            println!("  {}", describe(&effect, Some(&*encounter)));
        }
        tokio::time::sleep(ROUND_PAUSE).await;
    }

    let won = encounter.outcome() == EncounterOutcome::Victory;
    tracing::info!(turns = encounter.turn(), won, "battle resolved");
    won
}

fn describe(effect: &EffectEvent, encounter: Option<&Encounter>) -> String {
    let name = |id: EntityId| {
        encounter
            .and_then(|encounter| encounter.entity(id))
            .map(|entity| entity.name.clone())
            .unwrap_or_else(|| id.to_string())
    };

    match effect {
        EffectEvent::Damage {
            source,
            target,
            amount,
            absorbed,
            critical,
        } => {
            let mut line = format!("{} hits {} for {}", name(*source), name(*target), amount);
            if *absorbed > 0 {
                line.push_str(&format!(" ({} absorbed)", absorbed));
            }
            if *critical {
                line.push_str(" - critical!");
            }
            line
        }
        EffectEvent::Miss { source, target } => {
            format!("{} misses {}", name(*source), name(*target))
        }
        EffectEvent::Heal { target, amount } => format!("{} recovers {} HP", name(*target), amount),
        EffectEvent::ShieldGranted {
            target,
            value,
            turns,
        } => match turns {
            Some(turns) => format!("{} gains a {} point shield for {} turns", name(*target), value, turns),
            None => format!("{} gains a {} point shield", name(*target), value),
        },
        EffectEvent::ShieldExpired { target, count } => {
            format!("{} loses {} shield(s)", name(*target), count)
        }
        EffectEvent::Dialogue { speaker, text } => match speaker {
            Some(speaker) => format!("{}: \"{}\"", speaker, text),
            None => text.clone(),
        },
    }
}
