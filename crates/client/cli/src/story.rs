//! Scripted demo event: a toll bridge guarded by slimes.
use game_core::{
    Action, ActionSlot, CombatStats, Comparator, CurrencyType, EffectEvent, Encounter, Entity,
    EntityId, EntityKind, EventCondition, EventLocation, EventValue, GameStateView, Shield,
    SkillId,
};
use runtime::{EventContext, Result};

const TOLL: i32 = 30;

pub fn start_location() -> EventLocation {
    EventLocation::new("chapter1/bridge", 0)
}

pub async fn play(context: &mut EventContext) -> Result<()> {
    let gold = EventValue::Currency(CurrencyType::Gold);

    context.emit(EffectEvent::dialogue(
        Some("Toll keeper"),
        "Thirty gold to cross. No exceptions.",
    ));
    context.wait_for_continue().await?;

    // First visit: roll a starting purse.
    if context.game_state().currency(CurrencyType::Gold).is_none() {
        let purse = context.resolve_value(&EventValue::random(20, 60))?;
        context
            .game_state()
            .set_balance(CurrencyType::Gold, purse)?;
        context.emit(EffectEvent::dialogue(
            None,
            format!("You count {} gold in your pouch.", purse),
        ));
    }

    let can_pay = EventCondition::compare(gold, Comparator::GreaterOrEqual, TOLL);
    let mut options = vec!["Force your way across".to_string()];
    if context.check_condition(&can_pay)? {
        options.push(format!("Pay the toll ({} gold)", TOLL));
    }

    if context.wait_for_choice(options).await? == 1 {
        let left = context
            .game_state()
            .adjust_balance(CurrencyType::Gold, -TOLL)?;
        context.emit(EffectEvent::dialogue(
            Some("Toll keeper"),
            format!("Pleasure. You have {} gold left.", left),
        ));
        context.wait_for_movement().await?;
        return Ok(());
    }

    context.emit(EffectEvent::dialogue(
        Some("Toll keeper"),
        "Slimes! Deal with him!",
    ));
    let hero = Entity::new(EntityId::PLAYER, EntityKind::Player, "Wanderer")
        .with_stats(CombatStats::new(14, 10, 12))
        .with_skills([SkillId::new("slash"), SkillId::new("ward")]);
    for skill in hero.skills.iter().filter_map(|id| context.resources().skill(id)) {
        context.emit(EffectEvent::dialogue(
            None,
            format!("{} readies {}: {}", hero.name, skill.name, skill.description),
        ));
    }

    let mut encounter = Encounter::new(
        vec![hero],
        vec![
            slime(EntityId(10), "Green Slime"),
            slime(EntityId(11), "Blue Slime"),
        ],
        context.config().clone(),
    )?;

    let mut ward =
        ActionSlot::from(Action::new(EntityId::PLAYER, "ward", 1).with_value("shield", 15.0));
    context.emit(cast_ward(&mut ward, &mut encounter)?);

    let won = context.wait_for_combat(encounter).await?;
    if won {
        let bounty = context.resolve_value(&EventValue::random(10, 25))?;
        let total = context
            .game_state()
            .adjust_balance(CurrencyType::Gold, bounty)?;
        context.emit(EffectEvent::dialogue(
            None,
            format!("The slimes leave {} gold behind. Purse: {}.", bounty, total),
        ));
    } else {
        context.emit(EffectEvent::dialogue(
            Some("Toll keeper"),
            "Come back when you can pay.",
        ));
    }
    context.wait_for_movement().await?;
    Ok(())
}

fn slime(id: EntityId, name: &str) -> Entity {
    Entity::new(id, EntityKind::Enemy, name)
        .with_hp(30)
        .with_stats(CombatStats::new(6, 6, 8))
}

/// Ward effect handler: shields the caster for two turns.
fn cast_ward(slot: &mut ActionSlot, encounter: &mut Encounter) -> Result<EffectEvent> {
    slot.record_use();
    let value = slot.values().get("shield").copied().unwrap_or(10.0) as u32;
    Ok(encounter.grant_shield(slot.user(), Shield::timed(value, 2))?)
}
