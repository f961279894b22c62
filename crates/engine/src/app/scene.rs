use super::clock::TickClock;
use super::input::{ActionStates, InputAction};
use crate::world::EntityManager;

#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    quit_requested: bool,
    pause_pressed: bool,
    actions: ActionStates,
}

impl InputSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn new(quit_requested: bool, pause_pressed: bool, actions: ActionStates) -> Self {
        Self {
            quit_requested,
            pause_pressed,
            actions,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// True only on the tick the pause key went down.
    pub fn pause_pressed(&self) -> bool {
        self.pause_pressed
    }

    pub fn is_down(&self, action: InputAction) -> bool {
        self.actions.is_down(action)
    }

    pub fn with_action_down(mut self, action: InputAction, is_down: bool) -> Self {
        self.actions.set(action, is_down);
        self
    }

    pub fn with_quit_requested(mut self, quit_requested: bool) -> Self {
        self.quit_requested = quit_requested;
        self
    }

    pub fn with_pause_pressed(mut self, pause_pressed: bool) -> Self {
        self.pause_pressed = pause_pressed;
        self
    }
}

/// Game logic driven by the loop runner. `update` is called once per fixed
/// tick and owns the whole tick, including flushing the entity manager.
pub trait Scene {
    fn load(&mut self, world: &mut EntityManager);
    fn update(&mut self, clock: &TickClock, input: &InputSnapshot, world: &mut EntityManager);
    fn unload(&mut self, world: &mut EntityManager);
    fn is_running(&self) -> bool;
    fn set_paused(&mut self, paused: bool);
    fn debug_title(&self, _world: &EntityManager) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_each_field_independently() {
        let snapshot = InputSnapshot::empty()
            .with_action_down(InputAction::Left, true)
            .with_pause_pressed(true);

        assert!(snapshot.is_down(InputAction::Left));
        assert!(!snapshot.is_down(InputAction::Right));
        assert!(snapshot.pause_pressed());
        assert!(!snapshot.quit_requested());

        let released = snapshot.with_action_down(InputAction::Left, false);
        assert!(!released.is_down(InputAction::Left));
    }
}
