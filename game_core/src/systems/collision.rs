use crate::{Ball, Config, Events, GameRng, Paddle, Params, Side};
use hecs::World;
use rand::Rng;

/// Resolve ball collisions against the top/bottom walls and both paddles.
///
/// Every paddle is checked independently in the same pass; resolving one
/// hit never skips the remaining checks.
pub fn check_collisions(world: &mut World, config: &Config, rng: &mut GameRng, events: &mut Events) {
    let ball_data = {
        let mut query = world.query::<&Ball>();
        query
            .iter()
            .next()
            .map(|(_e, ball)| (ball.pos, ball.vel, ball.ready))
    };

    let (mut pos, mut vel, ready) = match ball_data {
        Some(data) => data,
        None => return,
    };
    if ready {
        return;
    }

    let radius = config.ball_radius;
    let mut touched = false;

    // Top/bottom wall bounce, elastic
    if pos.y - radius <= 0.0 || pos.y + radius >= config.field_height {
        vel.y = -vel.y;
        if pos.y - radius <= 0.0 {
            pos.y = radius;
        }
        if pos.y + radius >= config.field_height {
            pos.y = config.field_height - radius;
        }
        events.ball_hit_wall = true;
        touched = true;
    }

    let paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();

    for (side, paddle_y) in paddles {
        let paddle_x = config.paddle_x(side);
        let half_width = config.paddle_width / 2.0;
        let half_height = config.paddle_height / 2.0;

        let dx = (pos.x - paddle_x).abs();
        let dy = (pos.y - paddle_y).abs();

        if dx < half_width + radius && dy < half_height + radius {
            // Only bounce a ball moving toward the paddle
            let toward = match side {
                Side::Left => vel.x < 0.0,
                Side::Right => vel.x > 0.0,
            };
            if !toward {
                continue;
            }

            vel.x = -vel.x;

            // Vertical deflection is linear in the signed offset from the
            // paddle center; a dead-center hit gets a small downward nudge
            // so the ball never bounces perfectly flat.
            let offset = pos.y - paddle_y;
            vel.y = if offset != 0.0 {
                config.deflect_per_offset * offset
            } else {
                rng.0.gen_range(Params::NUDGE_MIN..Params::NUDGE_MAX)
            };

            // Push the ball out of the paddle face
            pos.x = match side {
                Side::Left => paddle_x + half_width + radius,
                Side::Right => paddle_x - half_width - radius,
            };

            events.ball_hit_paddle = true;
            touched = true;
        }
    }

    if touched {
        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ball, Config, Events, GameRng, Paddle, Side};
    use glam::Vec2;

    fn launched_ball(pos: Vec2, vel: Vec2) -> Ball {
        Ball {
            pos,
            vel,
            ready: false,
            spinning: true,
        }
    }

    fn ball_state(world: &World) -> (Vec2, Vec2) {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| (b.pos, b.vel))
            .unwrap()
    }

    #[test]
    fn test_top_wall_bounce_flips_vy_losslessly() {
        let mut world = World::new();
        let config = Config::new();
        let mut rng = GameRng::default();
        let mut events = Events::new();
        world.spawn((launched_ball(
            Vec2::new(640.0, config.ball_radius - 1.0),
            Vec2::new(600.0, -250.0),
        ),));

        check_collisions(&mut world, &config, &mut rng, &mut events);

        let (pos, vel) = ball_state(&world);
        assert_eq!(vel.y, 250.0);
        assert_eq!(vel.x, 600.0);
        assert!(pos.y >= config.ball_radius);
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_bottom_wall_bounce_flips_vy_losslessly() {
        let mut world = World::new();
        let config = Config::new();
        let mut rng = GameRng::default();
        let mut events = Events::new();
        world.spawn((launched_ball(
            Vec2::new(640.0, config.field_height - config.ball_radius + 1.0),
            Vec2::new(-600.0, 175.0),
        ),));

        check_collisions(&mut world, &config, &mut rng, &mut events);

        let (pos, vel) = ball_state(&world);
        assert_eq!(vel.y, -175.0);
        assert_eq!(vel.x, -600.0);
        assert!(pos.y <= config.field_height - config.ball_radius);
    }

    #[test]
    fn test_paddle_hit_reflects_and_deflects_linearly() {
        let mut world = World::new();
        let config = Config::new();
        let mut rng = GameRng::default();
        let mut events = Events::new();
        let paddle_y = 360.0;
        world.spawn((Paddle::new(Side::Left, paddle_y),));
        world.spawn((Paddle::new(Side::Right, paddle_y),));

        // Ball overlapping the left paddle face, 20 units above center
        let paddle_x = config.paddle_x(Side::Left);
        world.spawn((launched_ball(
            Vec2::new(paddle_x + config.paddle_width / 2.0, paddle_y - 20.0),
            Vec2::new(-600.0, 0.0),
        ),));

        check_collisions(&mut world, &config, &mut rng, &mut events);

        let (pos, vel) = ball_state(&world);
        assert_eq!(vel.x, 600.0, "horizontal direction reflected");
        assert_eq!(vel.y, config.deflect_per_offset * -20.0);
        assert!(
            pos.x >= paddle_x + config.paddle_width / 2.0 + config.ball_radius,
            "ball pushed clear of the paddle"
        );
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_dead_center_hit_gets_nudged() {
        let config = Config::new();
        let paddle_y = 360.0;
        let paddle_x = config.paddle_x(Side::Right);

        for seed in 0..50 {
            let mut world = World::new();
            let mut rng = GameRng::new(seed);
            let mut events = Events::new();
            world.spawn((Paddle::new(Side::Right, paddle_y),));
            world.spawn((launched_ball(
                Vec2::new(paddle_x - config.paddle_width / 2.0, paddle_y),
                Vec2::new(600.0, 0.0),
            ),));

            check_collisions(&mut world, &config, &mut rng, &mut events);

            let (_pos, vel) = ball_state(&world);
            assert_eq!(vel.x, -600.0);
            assert!(
                vel.y >= Params::NUDGE_MIN && vel.y < Params::NUDGE_MAX,
                "nudge {} out of range",
                vel.y
            );
        }
    }

    #[test]
    fn test_ball_moving_away_is_not_bounced() {
        let mut world = World::new();
        let config = Config::new();
        let mut rng = GameRng::default();
        let mut events = Events::new();
        let paddle_y = 360.0;
        world.spawn((Paddle::new(Side::Left, paddle_y),));
        let paddle_x = config.paddle_x(Side::Left);
        world.spawn((launched_ball(
            Vec2::new(paddle_x + config.paddle_width / 2.0, paddle_y),
            Vec2::new(600.0, 0.0),
        ),));

        check_collisions(&mut world, &config, &mut rng, &mut events);

        let (_pos, vel) = ball_state(&world);
        assert_eq!(vel.x, 600.0);
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_wall_and_paddle_resolved_in_same_pass() {
        // Ball pinned in the top-left corner against the paddle: the wall
        // bounce must not short-circuit the paddle check.
        let mut world = World::new();
        let config = Config::new();
        let mut rng = GameRng::default();
        let mut events = Events::new();
        let paddle_y = config.paddle_margin;
        world.spawn((Paddle::new(Side::Left, paddle_y),));
        let paddle_x = config.paddle_x(Side::Left);
        world.spawn((launched_ball(
            Vec2::new(paddle_x + config.paddle_width / 2.0, config.ball_radius - 1.0),
            Vec2::new(-600.0, -100.0),
        ),));

        check_collisions(&mut world, &config, &mut rng, &mut events);

        assert!(events.ball_hit_wall);
        assert!(events.ball_hit_paddle);
        let (_pos, vel) = ball_state(&world);
        assert_eq!(vel.x, 600.0);
    }

    #[test]
    fn test_ready_ball_ignores_collisions() {
        let mut world = World::new();
        let config = Config::new();
        let mut rng = GameRng::default();
        let mut events = Events::new();
        world.spawn((Paddle::new(Side::Left, 360.0),));
        world.spawn((Ball::resting(Vec2::new(config.paddle_x(Side::Left), 360.0)),));

        check_collisions(&mut world, &config, &mut rng, &mut events);

        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }
}
