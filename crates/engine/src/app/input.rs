/// Held movement intents, one per direction of the controlled entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    Forward,
    Backward,
    Left,
    Right,
}

impl InputAction {
    pub const ALL: [InputAction; 4] = [
        InputAction::Forward,
        InputAction::Backward,
        InputAction::Left,
        InputAction::Right,
    ];

    const fn slot(self) -> usize {
        match self {
            InputAction::Forward => 0,
            InputAction::Backward => 1,
            InputAction::Left => 2,
            InputAction::Right => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ActionStates([bool; InputAction::ALL.len()]);

impl ActionStates {
    pub(crate) fn set(&mut self, action: InputAction, is_down: bool) {
        self.0[action.slot()] = is_down;
    }

    pub(crate) fn is_down(&self, action: InputAction) -> bool {
        self.0[action.slot()]
    }
}
