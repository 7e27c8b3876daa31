//! What gets drawn in each phase, and where

use super::shapes::Shape;
use super::vertex::colors;
use super::{Renderer, TextRenderer};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::{GamePhase, GameState};

pub const TITLE_TEXT: &str = "gl_jump";
pub const PROMPT_TEXT: &str = "press [ space ] to start";

pub fn score_text(score: u64) -> String {
    format!("score: {}", score)
}

pub fn best_text(score: u64) -> String {
    format!("best: {}", score)
}

/// Draw `text` horizontally centered, vertically centered on `center_y`
fn draw_centered<R: TextRenderer>(r: &mut R, text: &str, center_y: f32) {
    let (width, height) = r.measure_text(text);
    r.render_text(
        text,
        SCREEN_WIDTH / 2.0 - width / 2.0,
        center_y - height / 2.0 + 2.0,
    );
}

/// Emit all draw calls for the current state
///
/// `best` is the best finished run so far, shown on the title screen.
pub fn draw_scene<R: Renderer + TextRenderer>(state: &GameState, best: Option<u64>, r: &mut R) {
    match state.phase {
        GamePhase::Start => {
            r.draw_shape(&Shape::from(&state.player), colors::PLAYER);
            r.draw_shape(&Shape::from(&state.ground), colors::GROUND);

            draw_centered(r, TITLE_TEXT, SCREEN_HEIGHT - SCREEN_HEIGHT / 3.0);
            draw_centered(r, PROMPT_TEXT, SCREEN_HEIGHT - SCREEN_HEIGHT / 2.6);
            if state.score > 0 {
                draw_centered(r, &score_text(state.score), SCREEN_HEIGHT - SCREEN_HEIGHT / 2.4);
            }
            if let Some(best) = best.filter(|&b| b > 0) {
                draw_centered(r, &best_text(best), SCREEN_HEIGHT - SCREEN_HEIGHT / 2.2);
            }
        }
        GamePhase::Game => {
            // Back to front
            r.draw_shape(&Shape::from(&state.background), colors::BACKGROUND_OBSTACLE);
            r.draw_shape(&Shape::from(&state.player), colors::PLAYER);
            r.draw_shape(&Shape::from(&state.obstacle), colors::OBSTACLE);
            r.draw_shape(&Shape::from(&state.ground), colors::GROUND);

            r.render_text(&score_text(state.score), 10.0, SCREEN_HEIGHT - 20.0);
        }
        GamePhase::End => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::FrameBuilder;
    use crate::tuning::Tuning;

    #[test]
    fn test_title_screen() {
        let state = GameState::new(Tuning::default());
        let mut builder = FrameBuilder::default();
        draw_scene(&state, None, &mut builder);
        let frame = builder.finish();

        assert_eq!(frame.shapes.len(), 2);
        assert!(matches!(frame.shapes[0].shape, Shape::Rectangle { .. }));
        assert!(matches!(frame.shapes[1].shape, Shape::Line { .. }));
        assert_eq!(frame.texts.len(), 2);
        assert!(frame.has_text(TITLE_TEXT));
        assert!(frame.has_text(PROMPT_TEXT));
    }

    #[test]
    fn test_title_centered() {
        let state = GameState::new(Tuning::default());
        let mut builder = FrameBuilder::default();
        draw_scene(&state, None, &mut builder);
        let frame = builder.finish();

        // 7 chars * 7px = 49px wide
        let title = &frame.texts[0];
        assert_eq!(title.text, TITLE_TEXT);
        assert!((title.pos.x - (250.0 - 24.5)).abs() < 1e-4);
    }

    #[test]
    fn test_title_screen_shows_last_and_best_score() {
        let mut state = GameState::new(Tuning::default());
        state.score = 42;
        let mut builder = FrameBuilder::default();
        draw_scene(&state, Some(99), &mut builder);
        let frame = builder.finish();

        assert!(frame.has_text("score: 42"));
        assert!(frame.has_text("best: 99"));
    }

    #[test]
    fn test_game_screen() {
        let mut state = GameState::new(Tuning::default());
        state.phase = GamePhase::Game;
        state.score = 7;
        let mut builder = FrameBuilder::default();
        draw_scene(&state, Some(99), &mut builder);
        let frame = builder.finish();

        let kinds: Vec<_> = frame.shapes.iter().map(|d| d.color).collect();
        assert_eq!(
            kinds,
            vec![
                colors::BACKGROUND_OBSTACLE,
                colors::PLAYER,
                colors::OBSTACLE,
                colors::GROUND
            ]
        );
        assert_eq!(frame.vertices.len(), 3 + 6 + 3 + 6);
        assert_eq!(frame.texts.len(), 1);
        assert_eq!(frame.texts[0].text, "score: 7");
        assert_eq!(frame.texts[0].pos.x, 10.0);
        assert_eq!(frame.texts[0].pos.y, 480.0);
    }
}
