//! Drawing contract for the host and the scenes built on top of it

use glam::IVec2;

use crate::{Ball, Config, GameSession, Paddle, Rect};

/// RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const WHITE: Color = Color(255, 255, 255);
    pub const BLACK: Color = Color(0, 0, 0);
    pub const RED: Color = Color(255, 0, 0);
    pub const GRAY: Color = Color(200, 200, 200);
}

/// Text sizes used by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Large,
    Small,
}

impl Font {
    /// Nominal pixel height
    pub fn size(self) -> u32 {
        match self {
            Font::Large => 50,
            Font::Small => 30,
        }
    }
}

/// Primitive drawing surface supplied by the host
pub trait Renderer {
    type Error;

    fn clear(&mut self, color: Color) -> Result<(), Self::Error>;
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), Self::Error>;
    fn fill_ellipse(&mut self, rect: Rect, color: Color) -> Result<(), Self::Error>;
    /// Draw `text` with its top-left corner at `pos`
    fn draw_text(
        &mut self,
        text: &str,
        font: Font,
        color: Color,
        pos: IVec2,
    ) -> Result<(), Self::Error>;
    fn present(&mut self) -> Result<(), Self::Error>;
}

pub fn draw_menu<R: Renderer>(renderer: &mut R, config: &Config) -> Result<(), R::Error> {
    let center = config.arena().center();
    renderer.clear(Color::BLACK)?;
    renderer.draw_text(
        "Table Tennis",
        Font::Large,
        Color::WHITE,
        center - IVec2::new(100, 100),
    )?;

    let single = config.single_player_button();
    renderer.fill_rect(single, Color::GRAY)?;
    renderer.draw_text(
        "Single Player",
        Font::Small,
        Color::BLACK,
        single.top_left() + IVec2::new(30, 15),
    )?;

    let multi = config.multiplayer_button();
    renderer.fill_rect(multi, Color::GRAY)?;
    renderer.draw_text(
        "Multiplayer",
        Font::Small,
        Color::BLACK,
        multi.top_left() + IVec2::new(40, 15),
    )
}

/// Paddles, ball and score overlay
pub fn draw_playfield<R: Renderer>(renderer: &mut R, session: &GameSession) -> Result<(), R::Error> {
    renderer.clear(Color::BLACK)?;

    for (_e, paddle) in session.world().query::<&Paddle>().iter() {
        renderer.fill_rect(paddle.rect, Color::WHITE)?;
    }
    for (_e, ball) in session.world().query::<&Ball>().iter() {
        renderer.fill_ellipse(ball.rect, Color::RED)?;
    }

    draw_score(renderer, session)
}

pub fn draw_score<R: Renderer>(renderer: &mut R, session: &GameSession) -> Result<(), R::Error> {
    let score = session.score();
    let pos = IVec2::new(session.config().arena_width / 2 - 50, 10);
    renderer.draw_text(
        &format!("{} - {}", score.left, score.right),
        Font::Large,
        Color::WHITE,
        pos,
    )
}

pub fn draw_paused<R: Renderer>(renderer: &mut R, config: &Config) -> Result<(), R::Error> {
    let pos = config.arena().center() - IVec2::new(60, 25);
    renderer.draw_text("Paused", Font::Large, Color::GRAY, pos)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::Side;

    /// Everything a scene asked the renderer to do
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) enum DrawCall {
        Clear(Color),
        Rect(Rect, Color),
        Ellipse(Rect, Color),
        Text(String, Font, Color, IVec2),
        Present,
    }

    #[derive(Default)]
    pub(crate) struct Recorder {
        pub(crate) calls: Vec<DrawCall>,
    }

    impl Renderer for Recorder {
        type Error = std::convert::Infallible;

        fn clear(&mut self, color: Color) -> Result<(), Self::Error> {
            self.calls.push(DrawCall::Clear(color));
            Ok(())
        }

        fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), Self::Error> {
            self.calls.push(DrawCall::Rect(rect, color));
            Ok(())
        }

        fn fill_ellipse(&mut self, rect: Rect, color: Color) -> Result<(), Self::Error> {
            self.calls.push(DrawCall::Ellipse(rect, color));
            Ok(())
        }

        fn draw_text(
            &mut self,
            text: &str,
            font: Font,
            color: Color,
            pos: IVec2,
        ) -> Result<(), Self::Error> {
            self.calls
                .push(DrawCall::Text(text.to_string(), font, color, pos));
            Ok(())
        }

        fn present(&mut self) -> Result<(), Self::Error> {
            self.calls.push(DrawCall::Present);
            Ok(())
        }
    }

    #[test]
    fn test_menu_layout() {
        let config = Config::new();
        let mut recorder = Recorder::default();

        draw_menu(&mut recorder, &config).unwrap();

        assert_eq!(
            recorder.calls,
            vec![
                DrawCall::Clear(Color::BLACK),
                DrawCall::Text(
                    "Table Tennis".into(),
                    Font::Large,
                    Color::WHITE,
                    IVec2::new(300, 200)
                ),
                DrawCall::Rect(Rect::new(300, 250, 200, 50), Color::GRAY),
                DrawCall::Text(
                    "Single Player".into(),
                    Font::Small,
                    Color::BLACK,
                    IVec2::new(330, 265)
                ),
                DrawCall::Rect(Rect::new(300, 350, 200, 50), Color::GRAY),
                DrawCall::Text(
                    "Multiplayer".into(),
                    Font::Small,
                    Color::BLACK,
                    IVec2::new(340, 365)
                ),
            ]
        );
    }

    #[test]
    fn test_playfield_draws_entities_and_score() {
        let session = GameSession::default();
        let mut recorder = Recorder::default();

        draw_playfield(&mut recorder, &session).unwrap();

        let calls = &recorder.calls;
        assert_eq!(calls.first(), Some(&DrawCall::Clear(Color::BLACK)));
        for side in [Side::Left, Side::Right] {
            let rect = session.config().paddle_spawn(side);
            assert!(calls.contains(&DrawCall::Rect(rect, Color::WHITE)), "{:?} paddle", side);
        }
        assert!(calls.contains(&DrawCall::Ellipse(
            session.config().ball_spawn(),
            Color::RED
        )));
        assert_eq!(
            calls.last(),
            Some(&DrawCall::Text(
                "0 - 0".into(),
                Font::Large,
                Color::WHITE,
                IVec2::new(350, 10)
            ))
        );
    }
}
