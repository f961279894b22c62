struct GameplaySystemContext<'a> {
    now_ms: u64,
    input: &'a InputSnapshot,
    player_id: Option<EntityId>,
    tuning: &'a GameplayTuning,
    session: &'a mut SessionState,
    rng: &'a mut ChaCha8Rng,
    world: &'a mut EntityManager,
}

#[derive(Default)]
struct GameplaySystemsHost {
    last_tick_order: Vec<GameplaySystemId>,
}

impl GameplaySystemsHost {
    /// Runs every system once in [`GAMEPLAY_SYSTEM_ORDER`]. A failing system
    /// aborts the rest of the tick, including the flush.
    fn run_once_per_tick(
        &mut self,
        context: &mut GameplaySystemContext<'_>,
    ) -> Result<(), CollisionError> {
        self.last_tick_order.clear();
        for system_id in GAMEPLAY_SYSTEM_ORDER {
            self.last_tick_order.push(system_id);
            match system_id {
                GameplaySystemId::ApplyInput => apply_input_system(context),
                GameplaySystemId::Movement => movement_system(context)?,
                GameplaySystemId::Collision => collision_system(context)?,
                GameplaySystemId::Spawner => spawner_system(context)?,
                GameplaySystemId::Lifespan => lifespan_system(context),
                GameplaySystemId::Flush => context.world.update(),
            }
        }
        Ok(())
    }

    #[cfg(test)]
    fn last_tick_order(&self) -> &[GameplaySystemId] {
        &self.last_tick_order
    }
}

fn apply_input_system(context: &mut GameplaySystemContext<'_>) {
    let Some(player) = context
        .player_id
        .and_then(|id| context.world.find_entity_mut(id))
    else {
        return;
    };
    // Movement reports the missing component.
    let Some(intent) = player.input.as_mut() else {
        return;
    };
    intent.forward = context.input.is_down(InputAction::Forward);
    intent.backward = context.input.is_down(InputAction::Backward);
    intent.left = context.input.is_down(InputAction::Left);
    intent.right = context.input.is_down(InputAction::Right);
}

fn movement_system(context: &mut GameplaySystemContext<'_>) -> Result<(), CollisionError> {
    let Some(player) = context
        .player_id
        .and_then(|id| context.world.find_entity_mut(id))
    else {
        return Ok(());
    };
    let Some(intent) = player.input else {
        return Err(player.missing("input"));
    };
    let step = intent.direction() * context.tuning.player_speed;
    match player.transform.as_mut() {
        Some(transform) => {
            transform.position += step;
            Ok(())
        }
        None => Err(player.missing("transform")),
    }
}

fn collision_system(context: &mut GameplaySystemContext<'_>) -> Result<(), CollisionError> {
    let Some(player_id) = context.player_id else {
        return Ok(());
    };
    let window_size = context.tuning.window_size;
    let Some(player) = context.world.find_entity_mut(player_id) else {
        return Ok(());
    };
    let flags = detect_out_of_bounds(player, window_size)?;
    enforce_controlled_bounds(player, flags, window_size)?;

    let mut collected = Vec::new();
    if let Some(player) = context.world.find_entity(player_id) {
        for entity in context.world.entities() {
            if !entity.is_active() || entity.id() == player_id {
                continue;
            }
            if overlaps(player, entity)? {
                collected.push(entity.id());
            }
        }
    }

    for id in collected {
        if context.world.destroy(id) {
            context.session.score += 1;
            info!(entity_id = id.0, score = context.session.score, "hazard_collected");
        }
    }
    Ok(())
}

fn spawner_system(context: &mut GameplaySystemContext<'_>) -> Result<(), CollisionError> {
    if context.now_ms.saturating_sub(context.session.last_spawn_ms)
        < context.tuning.spawn_interval_ms
    {
        return Ok(());
    }
    context.session.last_spawn_ms = context.now_ms;
    spawn_hazard(
        context.world,
        context.rng,
        context.tuning.window_size,
        &context.tuning.hazard,
        context.now_ms,
    )?;
    Ok(())
}

fn lifespan_system(context: &mut GameplaySystemContext<'_>) {
    let now_ms = context.now_ms;
    let expired = context
        .world
        .entities()
        .iter()
        .filter(|entity| entity.is_active())
        .filter_map(|entity| {
            let lifespan = entity.lifespan?;
            lifespan
                .is_expired(now_ms)
                .then(|| (entity.id(), lifespan.elapsed_ms(now_ms)))
        })
        .collect::<Vec<_>>();

    for (id, age_ms) in expired {
        context.world.destroy(id);
        debug!(entity_id = id.0, age_ms, "hazard_expired");
    }
}
