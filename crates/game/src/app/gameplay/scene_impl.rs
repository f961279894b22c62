struct ArcadeScene {
    tuning: GameplayTuning,
    session: SessionState,
    player_id: Option<EntityId>,
    rng: ChaCha8Rng,
    systems: GameplaySystemsHost,
}

impl ArcadeScene {
    fn new(tuning: GameplayTuning, seed: u64) -> Self {
        Self {
            tuning,
            session: SessionState::new(),
            player_id: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
            systems: GameplaySystemsHost::default(),
        }
    }

    fn spawn_player(&mut self, world: &mut EntityManager) -> EntityId {
        let id = world.create_entity(tags::PLAYER);
        if let Some(player) = world.find_entity_mut(id) {
            player.transform = Some(Transform::at(self.tuning.player_spawn));
            player.shape = Some(self.tuning.player_shape);
            player.input = Some(Input::default());
        }
        id
    }

    #[cfg(test)]
    fn session(&self) -> SessionState {
        self.session
    }
}

impl Scene for ArcadeScene {
    fn load(&mut self, world: &mut EntityManager) {
        self.session = SessionState::new();
        let player_id = self.spawn_player(world);
        world.update();
        self.player_id = Some(player_id);
        info!(
            entity_id = player_id.0,
            x = self.tuning.player_spawn.x,
            y = self.tuning.player_spawn.y,
            system_order = GAMEPLAY_SYSTEM_ORDER_TEXT,
            "player_spawned"
        );
    }

    fn update(&mut self, clock: &TickClock, input: &InputSnapshot, world: &mut EntityManager) {
        if !self.session.running {
            return;
        }
        if input.quit_requested() {
            info!(reason = "quit_key", score = self.session.score, "shutdown_requested");
            self.session.running = false;
            return;
        }
        if input.pause_pressed() {
            self.set_paused(!self.session.paused);
        }
        if self.session.paused {
            return;
        }

        let mut context = GameplaySystemContext {
            now_ms: clock.now_ms(),
            input,
            player_id: self.player_id,
            tuning: &self.tuning,
            session: &mut self.session,
            rng: &mut self.rng,
            world,
        };
        if let Err(err) = self.systems.run_once_per_tick(&mut context) {
            error!(error = %err, tick = clock.tick(), "tick_failed");
            self.session.running = false;
        }
    }

    fn unload(&mut self, _world: &mut EntityManager) {
        self.player_id = None;
        info!(score = self.session.score, "scene_unloaded");
    }

    fn is_running(&self) -> bool {
        self.session.running
    }

    fn set_paused(&mut self, paused: bool) {
        if self.session.paused != paused {
            self.session.paused = paused;
            info!(paused, "pause_toggled");
        }
    }

    fn debug_title(&self, world: &EntityManager) -> Option<String> {
        let paused = if self.session.paused { " | PAUSED" } else { "" };
        Some(format!(
            "{} | Score: {} | Hazards: {}{}",
            self.tuning.window_title,
            self.session.score,
            world.entities_by_tag(tags::ENEMY).len(),
            paused
        ))
    }
}
