//! Game State Machine
//!
//! Menu selection starts a match, a win returns to the menu, and the pause
//! key freezes a running match.

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Playing,
    Paused,
}

/// Who controls the right paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    SinglePlayer,
    Multiplayer,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    SelectSinglePlayer,
    SelectMultiplayer,
    MatchWon,
    TogglePause,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: GameState,
    pub to_state: GameState,
    pub action: GameAction,
}

/// Game Finite State Machine
#[derive(Debug, Clone)]
pub struct GameFsm {
    state: GameState,
    mode: GameMode,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: GameState::Menu,
            mode: GameMode::SinglePlayer,
        }
    }

    /// Get current state
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Mode chosen at the last menu selection
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        let Some(next_state) = self.get_next_state(action) else {
            log::trace!("rejected {:?} in {:?}", action, from_state);
            return TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            };
        };

        match action {
            GameAction::SelectSinglePlayer => self.mode = GameMode::SinglePlayer,
            GameAction::SelectMultiplayer => self.mode = GameMode::Multiplayer,
            GameAction::MatchWon | GameAction::TogglePause => {}
        }
        self.state = next_state;

        TransitionResult {
            success: true,
            from_state,
            to_state: next_state,
            action,
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: GameAction) -> Option<GameState> {
        match (self.state, action) {
            // From Menu
            (GameState::Menu, GameAction::SelectSinglePlayer) => Some(GameState::Playing),
            (GameState::Menu, GameAction::SelectMultiplayer) => Some(GameState::Playing),

            // From Playing
            (GameState::Playing, GameAction::MatchWon) => Some(GameState::Menu),
            (GameState::Playing, GameAction::TogglePause) => Some(GameState::Paused),

            // From Paused
            (GameState::Paused, GameAction::TogglePause) => Some(GameState::Playing),

            // Invalid transition
            _ => None,
        }
    }

    /// Check if currently in a playing state
    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}
