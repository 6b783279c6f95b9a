//! One player's table: entities, score and the state machine that drives them

use glam::IVec2;
use hecs::World;

use crate::{
    create_ball, create_paddle, step, Ball, Config, Events, GameAction, GameFsm, GameMode,
    GameRng, GameState, KeyState, MoveQueue, Paddle, Score, Side,
};

pub struct GameSession {
    world: World,
    config: Config,
    fsm: GameFsm,
    score: Score,
    events: Events,
    move_queue: MoveQueue,
    rng: GameRng,
}

impl GameSession {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut session = Self {
            world: World::new(),
            config,
            fsm: GameFsm::new(),
            score: Score::new(),
            events: Events::new(),
            move_queue: MoveQueue::new(),
            rng: GameRng::new(seed),
        };
        session.reset();
        session
    }

    /// Zero the score and respawn both paddles and the ball at their start
    /// positions. State and mode are left alone.
    pub fn reset(&mut self) {
        self.score = Score::new();
        self.events.clear();
        self.move_queue.clear();
        self.world.clear();

        create_paddle(
            &mut self.world,
            Side::Left,
            self.config.paddle_spawn(Side::Left),
        );
        create_paddle(
            &mut self.world,
            Side::Right,
            self.config.paddle_spawn(Side::Right),
        );
        create_ball(
            &mut self.world,
            self.config.ball_spawn(),
            self.config.ball_speed,
        );
    }

    pub fn state(&self) -> GameState {
        self.fsm.state()
    }

    pub fn mode(&self) -> GameMode {
        self.fsm.mode()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Events raised by the most recent update
    pub fn events(&self) -> Events {
        self.events
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| *b)
    }

    /// Menu click: start a match if `pos` hits one of the mode buttons.
    /// Returns the selected mode; clicks outside the menu state are ignored.
    pub fn handle_click(&mut self, pos: IVec2) -> Option<GameMode> {
        if self.state() != GameState::Menu {
            return None;
        }

        let action = if self.config.single_player_button().contains_point(pos) {
            GameAction::SelectSinglePlayer
        } else if self.config.multiplayer_button().contains_point(pos) {
            GameAction::SelectMultiplayer
        } else {
            return None;
        };

        if !self.fsm.transition(action).success {
            return None;
        }
        log::info!("starting {:?} match", self.mode());
        Some(self.mode())
    }

    /// Flip between playing and paused. Returns false outside a match.
    pub fn toggle_pause(&mut self) -> bool {
        let result = self.fsm.transition(GameAction::TogglePause);
        if result.success {
            log::info!("{:?} -> {:?}", result.from_state, result.to_state);
        }
        result.success
    }

    /// Run one frame of play. Does nothing unless a match is in progress.
    ///
    /// When the frame produces a winner the session is reset and returns to
    /// the menu; the winner is returned and kept in `events()`.
    pub fn update(&mut self, keys: &KeyState) -> Option<Side> {
        if !self.fsm.is_playing() {
            return None;
        }

        step(
            &mut self.world,
            &self.config,
            self.fsm.mode(),
            keys,
            &mut self.score,
            &mut self.events,
            &mut self.move_queue,
            &mut self.rng,
        );

        let winner = self.events.winner?;
        log::info!("{} Player Wins!", winner.label());

        let events = self.events;
        self.reset();
        self.events = events;
        self.fsm.transition(GameAction::MatchWon);

        Some(winner)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Config::default(), 12345)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Key, Rect};

    fn playing(mode: GameMode) -> GameSession {
        let mut session = GameSession::default();
        let button = match mode {
            GameMode::SinglePlayer => session.config().single_player_button(),
            GameMode::Multiplayer => session.config().multiplayer_button(),
        };
        assert_eq!(session.handle_click(button.center()), Some(mode));
        session
    }

    fn set_ball(session: &mut GameSession, rect: Rect, vel: IVec2) {
        for (_e, ball) in session.world.query_mut::<&mut Ball>() {
            ball.rect = rect;
            ball.vel = vel;
        }
    }

    #[test]
    fn test_new_session_starts_in_menu_with_entities_spawned() {
        let session = GameSession::default();
        assert_eq!(session.state(), GameState::Menu);
        assert_eq!(session.score(), Score::new());

        let left = session.paddle(Side::Left).expect("left paddle");
        let right = session.paddle(Side::Right).expect("right paddle");
        assert_eq!(left.rect, Rect::new(20, 250, 10, 100));
        assert_eq!(right.rect, Rect::new(770, 250, 10, 100));

        let ball = session.ball().expect("ball");
        assert_eq!(ball.rect.center(), IVec2::new(400, 300));
        assert_eq!(ball.vel, IVec2::new(5, 5));
    }

    #[test]
    fn test_click_multiplayer_button_starts_match() {
        let mut session = GameSession::default();
        assert_eq!(
            session.handle_click(IVec2::new(400, 375)),
            Some(GameMode::Multiplayer)
        );
        assert_eq!(session.mode(), GameMode::Multiplayer);
        assert_eq!(session.state(), GameState::Playing);
    }

    #[test]
    fn test_click_outside_buttons_is_ignored() {
        let mut session = GameSession::default();
        assert_eq!(session.handle_click(IVec2::new(10, 10)), None);
        assert_eq!(session.state(), GameState::Menu);
    }

    #[test]
    fn test_click_while_playing_is_ignored() {
        let mut session = playing(GameMode::SinglePlayer);
        assert_eq!(session.handle_click(IVec2::new(400, 375)), None);
        assert_eq!(session.mode(), GameMode::SinglePlayer);
    }

    #[test]
    fn test_update_does_nothing_in_menu() {
        let mut session = GameSession::default();
        let before = session.ball();
        assert_eq!(session.update(&KeyState::new()), None);
        assert_eq!(session.ball(), before);
    }

    #[test]
    fn test_update_moves_ball_and_paddle() {
        let mut session = playing(GameMode::Multiplayer);
        let keys: KeyState = [Key::W, Key::Down].into_iter().collect();

        session.update(&keys);

        assert_eq!(session.paddle(Side::Left).map(|p| p.rect.y), Some(245));
        assert_eq!(session.paddle(Side::Right).map(|p| p.rect.y), Some(255));
        assert_eq!(
            session.ball().map(|b| b.rect.top_left()),
            Some(IVec2::new(398, 298))
        );
    }

    #[test]
    fn test_ball_at_left_wall_scores_for_right() {
        let mut session = playing(GameMode::Multiplayer);
        set_ball(&mut session, Rect::new(4, 100, 15, 15), IVec2::new(-5, 5));

        session.update(&KeyState::new());

        assert_eq!(session.score(), Score { left: 0, right: 1 });
        assert!(session.events().right_scored);
        assert_eq!(session.ball().map(|b| b.rect.center()), Some(IVec2::new(400, 300)));
    }

    #[test]
    fn test_win_resets_and_returns_to_menu() {
        let mut session = playing(GameMode::SinglePlayer);
        session.score = Score { left: 10, right: 9 };
        set_ball(&mut session, Rect::new(780, 100, 15, 15), IVec2::new(5, 5));

        let winner = session.update(&KeyState::new());

        assert_eq!(winner, Some(Side::Left));
        assert_eq!(session.events().winner, Some(Side::Left));
        assert_eq!(session.state(), GameState::Menu);
        assert_eq!(session.score(), Score::new());
        assert_eq!(
            session.ball().map(|b| b.rect),
            Some(session.config().ball_spawn())
        );
    }

    #[test]
    fn test_no_win_at_eleven_ten() {
        let mut session = playing(GameMode::Multiplayer);
        session.score = Score { left: 10, right: 10 };
        set_ball(&mut session, Rect::new(780, 100, 15, 15), IVec2::new(5, 5));

        assert_eq!(session.update(&KeyState::new()), None);
        assert_eq!(session.score(), Score { left: 11, right: 10 });
        assert_eq!(session.state(), GameState::Playing);
    }

    #[test]
    fn test_pause_freezes_updates() {
        let mut session = playing(GameMode::SinglePlayer);
        assert!(session.toggle_pause());
        assert_eq!(session.state(), GameState::Paused);

        let before = session.ball();
        session.update(&KeyState::new());
        assert_eq!(session.ball(), before);

        assert!(session.toggle_pause());
        session.update(&KeyState::new());
        assert_ne!(session.ball(), before);
    }

    #[test]
    fn test_pause_ignored_in_menu() {
        let mut session = GameSession::default();
        assert!(!session.toggle_pause());
        assert_eq!(session.state(), GameState::Menu);
    }
}
