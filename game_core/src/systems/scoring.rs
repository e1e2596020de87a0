use crate::{Ball, Config, Events};
use hecs::World;

/// Flag a ball that crossed the left or right boundary.
///
/// Only raises the scoring event; the session owns the score and the
/// round transition.
pub fn check_exits(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query::<&Ball>().iter() {
        if ball.ready {
            continue;
        }
        if ball.pos.x < 0.0 {
            // Out the left side: right player takes the point
            events.right_scored = true;
        } else if ball.pos.x > config.field_width {
            events.left_scored = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ball, Config, Events, Side};
    use glam::Vec2;

    fn launched_ball(pos: Vec2, vel: Vec2) -> Ball {
        Ball {
            pos,
            vel,
            ready: false,
            spinning: true,
        }
    }

    #[test]
    fn test_left_exit_scores_right_player() {
        let mut world = World::new();
        let config = Config::new();
        let mut events = Events::new();
        world.spawn((launched_ball(Vec2::new(-1.0, 360.0), Vec2::new(-600.0, 0.0)),));

        check_exits(&mut world, &config, &mut events);

        assert!(events.right_scored);
        assert!(!events.left_scored);
    }

    #[test]
    fn test_right_exit_scores_left_player() {
        let mut world = World::new();
        let config = Config::new();
        let mut events = Events::new();
        world.spawn((launched_ball(
            Vec2::new(config.field_width + 1.0, 360.0),
            Vec2::new(600.0, 0.0),
        ),));

        check_exits(&mut world, &config, &mut events);

        assert!(events.left_scored);
        assert!(!events.right_scored);
    }

    #[test]
    fn test_in_bounds_ball_raises_nothing() {
        let mut world = World::new();
        let config = Config::new();
        let mut events = Events::new();
        let mut ball = Ball::resting(config.field_center());
        ball.launch(Side::Right, 600.0);
        world.spawn((ball,));

        check_exits(&mut world, &config, &mut events);

        assert!(!events.left_scored);
        assert!(!events.right_scored);
    }
}
