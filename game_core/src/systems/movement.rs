use crate::Ball;
use hecs::World;

/// Integrate ball position. A ready ball rests at center and does not move.
pub fn move_ball(world: &mut World, dt: f32) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if !ball.ready {
            ball.pos += ball.vel * dt;
        }
    }
}
