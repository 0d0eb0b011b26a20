//! The snowball countdown game
//!
//! Press Enter to start a countdown, then pop snowballs with D. Clearing
//! every snowball before the countdown reaches zero wins.

use sandbox2d_core::{PhysicsWorld, ShapeKey, ShapeRegistry};
use sandbox2d_input::InputTracker;
use winit::keyboard::KeyCode;

use crate::input::{InputAction, InputMapper};

/// Where the game is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Snowballs fall; waiting for Enter
    Waiting,
    /// Countdown running
    Running { frames_left: u32 },
    /// Only the walls are left
    Won,
    /// The countdown ran out
    Lost,
}

impl GameState {
    /// True once the game can no longer change
    pub fn is_finished(&self) -> bool {
        matches!(self, GameState::Won | GameState::Lost)
    }
}

/// What the game sees of the input for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Enter went down this frame
    pub start: bool,
    /// D went down this frame
    pub pop: bool,
    /// A/D and W/S held state as -1, 0 or 1 (screen axes, Y down)
    pub steer: [i32; 2],
    /// Mouse velocity in pixels per second
    pub mouse_velocity: [f64; 2],
}

impl FrameInput {
    /// Read this frame's input
    ///
    /// Call after [`InputTracker::begin_frame`]. Mouse motion is per frame, so
    /// scaling it by the frame rate gives pixels per second.
    pub fn gather(input: &InputTracker, fps: u32) -> Self {
        let (dx, dy) = input.mouse_relative();
        let fps = fps as f64;
        Self {
            start: InputMapper::triggered(input, InputAction::StartGame),
            pop: InputMapper::triggered(input, InputAction::PopSnowball),
            steer: [
                input.axis(KeyCode::KeyA, KeyCode::KeyD),
                input.axis(KeyCode::KeyW, KeyCode::KeyS),
            ],
            mouse_velocity: [dx * fps, dy * fps],
        }
    }
}

/// Countdown game state over a registry of walls and snowballs
#[derive(Debug)]
pub struct SnowballGame {
    state: GameState,
    countdown_frames: u32,
    /// Live shapes that are not snowballs
    wall_count: usize,
    /// Snowballs still alive, oldest first
    snowballs: Vec<ShapeKey>,
}

impl SnowballGame {
    pub fn new(countdown_frames: u32, wall_count: usize, snowballs: Vec<ShapeKey>) -> Self {
        Self {
            state: GameState::Waiting,
            countdown_frames: countdown_frames.max(1),
            wall_count,
            snowballs,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Snowballs not yet popped
    pub fn snowballs_left(&self) -> usize {
        self.snowballs.len()
    }

    /// Advance one frame
    pub fn update(
        &mut self,
        input: &FrameInput,
        world: &mut PhysicsWorld,
        registry: &mut ShapeRegistry,
    ) -> GameState {
        if input.start && self.state == GameState::Waiting {
            log::info!("Game started: {} frames on the clock", self.countdown_frames);
            self.state = GameState::Running {
                frames_left: self.countdown_frames,
            };
        }

        let GameState::Running { frames_left } = self.state else {
            return self.state;
        };

        if registry.len() <= self.wall_count {
            log::info!("You live!");
            self.state = GameState::Won;
            return self.state;
        }

        let frames_left = frames_left.saturating_sub(1);
        log::debug!("{} frames left", frames_left);
        self.state = if frames_left == 0 {
            log::info!("You die");
            GameState::Lost
        } else {
            GameState::Running { frames_left }
        };

        if input.pop && registry.len() > self.wall_count {
            self.pop_snowball(world, registry);
        }

        self.state
    }

    /// Delete the newest remaining snowball
    fn pop_snowball(&mut self, world: &mut PhysicsWorld, registry: &mut ShapeRegistry) {
        while let Some(key) = self.snowballs.pop() {
            if registry.delete(world, key) {
                log::debug!("Popped snowball, {} left", self.snowballs.len());
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandbox2d_core::{Circle, CollisionInfo, Line, PhysicsConfig, ScreenSpace, Vector};

    fn arena(snowballs: usize) -> (PhysicsWorld, ShapeRegistry, Vec<ShapeKey>) {
        let mut world = PhysicsWorld::with_config(
            PhysicsConfig::default().with_screen(ScreenSpace::new(20.0, 600.0)),
        );
        let mut registry = ShapeRegistry::new();

        let floor = Line::new_static(&mut world, Vector::new(10.0, 590.0), Vector::new(890.0, 590.0)).unwrap();
        registry.spawn(floor);

        let keys = (0..snowballs)
            .map(|i| {
                let ball = Circle::new_dynamic(
                    &mut world,
                    Vector::new(100.0 + i as f32 * 30.0, 20.0),
                    10.0,
                    CollisionInfo::SNOW,
                )
                .unwrap();
                registry.spawn(ball)
            })
            .collect();

        (world, registry, keys)
    }

    fn press_start() -> FrameInput {
        FrameInput {
            start: true,
            ..Default::default()
        }
    }

    fn press_pop() -> FrameInput {
        FrameInput {
            pop: true,
            ..Default::default()
        }
    }

    // ===== State machine =====

    #[test]
    fn test_waits_for_start() {
        let (mut world, mut registry, keys) = arena(2);
        let mut game = SnowballGame::new(10, 1, keys);

        for _ in 0..20 {
            game.update(&FrameInput::default(), &mut world, &mut registry);
        }
        assert_eq!(game.state(), GameState::Waiting);
    }

    #[test]
    fn test_start_begins_countdown() {
        let (mut world, mut registry, keys) = arena(2);
        let mut game = SnowballGame::new(10, 1, keys);

        let state = game.update(&press_start(), &mut world, &mut registry);
        assert_eq!(state, GameState::Running { frames_left: 9 });
    }

    #[test]
    fn test_second_start_does_not_reset() {
        let (mut world, mut registry, keys) = arena(2);
        let mut game = SnowballGame::new(10, 1, keys);

        game.update(&press_start(), &mut world, &mut registry);
        game.update(&FrameInput::default(), &mut world, &mut registry);
        let state = game.update(&press_start(), &mut world, &mut registry);
        assert_eq!(state, GameState::Running { frames_left: 7 });
    }

    #[test]
    fn test_countdown_runs_out() {
        let (mut world, mut registry, keys) = arena(2);
        let mut game = SnowballGame::new(3, 1, keys);

        game.update(&press_start(), &mut world, &mut registry);
        game.update(&FrameInput::default(), &mut world, &mut registry);
        let state = game.update(&FrameInput::default(), &mut world, &mut registry);
        assert_eq!(state, GameState::Lost);
        assert!(state.is_finished());

        // Finished games ignore input
        game.update(&press_pop(), &mut world, &mut registry);
        assert_eq!(game.snowballs_left(), 2);
    }

    // ===== Popping =====

    #[test]
    fn test_pop_ignored_before_start() {
        let (mut world, mut registry, keys) = arena(2);
        let mut game = SnowballGame::new(10, 1, keys);

        game.update(&press_pop(), &mut world, &mut registry);
        assert_eq!(game.snowballs_left(), 2);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_pop_removes_newest() {
        let (mut world, mut registry, keys) = arena(3);
        let newest = keys[2];
        let mut game = SnowballGame::new(100, 1, keys);

        game.update(&press_start(), &mut world, &mut registry);
        game.update(&press_pop(), &mut world, &mut registry);

        assert_eq!(game.snowballs_left(), 2);
        assert!(!registry.contains(newest));
        assert_eq!(world.body_count(), 3);
    }

    #[test]
    fn test_clearing_snowballs_wins() {
        let (mut world, mut registry, keys) = arena(2);
        let mut game = SnowballGame::new(100, 1, keys);

        game.update(&press_start(), &mut world, &mut registry);
        game.update(&press_pop(), &mut world, &mut registry);
        game.update(&press_pop(), &mut world, &mut registry);
        assert_eq!(registry.len(), 1);

        let state = game.update(&FrameInput::default(), &mut world, &mut registry);
        assert_eq!(state, GameState::Won);
    }

    #[test]
    fn test_pop_skips_already_deleted() {
        let (mut world, mut registry, keys) = arena(2);
        let oldest = keys[0];
        let newest = keys[1];
        let mut game = SnowballGame::new(100, 1, keys);

        registry.delete(&mut world, newest);
        game.update(&press_start(), &mut world, &mut registry);
        game.update(&press_pop(), &mut world, &mut registry);

        assert!(!registry.contains(oldest));
        assert_eq!(game.snowballs_left(), 0);
    }

    // ===== Frame input =====

    #[test]
    fn test_gather_scales_mouse_by_fps() {
        let mut input = InputTracker::new();
        input.accumulate_mouse_motion(2.0, -1.0);
        input.begin_frame();

        let frame = FrameInput::gather(&input, 60);
        assert_eq!(frame.mouse_velocity, [120.0, -60.0]);
    }

    #[test]
    fn test_gather_reads_actions_and_axes() {
        let mut input = InputTracker::new();
        input.mark_pressed(KeyCode::Enter);
        input.mark_pressed(KeyCode::KeyD);
        input.mark_pressed(KeyCode::KeyW);

        let frame = FrameInput::gather(&input, 60);
        assert!(frame.start);
        assert!(frame.pop);
        assert_eq!(frame.steer, [1, -1]);

        input.end_frame();
        let frame = FrameInput::gather(&input, 60);
        assert!(!frame.start);
        assert!(!frame.pop);
        assert_eq!(frame.steer, [1, -1]);
    }
}
