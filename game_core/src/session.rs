use crate::components::{Ball, ControlScheme, Paddle, Player, Side};
use crate::config::Config;
use crate::params::Params;
use crate::resources::{Events, GameRng, InputSample, RoundPause, Score, SpeedRamp};
use crate::systems::{
    apply_inputs, check_collisions, check_exits, limit_paddle_movements, move_ball,
};
use hecs::World;
use rand::Rng;

/// Match lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Ball resting, waiting for the launch input
    Idle,
    /// Ball in motion, collisions and scoring active
    Playing,
    /// A side just scored; brief pause before the field re-arms
    RoundOver,
    /// A side reached the winning score; launch input restarts the match
    GameOver,
}

/// Snapshot of everything the presentation layer needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct SessionView {
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_spinning: bool,
    pub left_paddle_y: f32,
    pub right_paddle_y: f32,
    pub score: Score,
    pub phase: Phase,
}

/// The owned game aggregate: entity world, resources, and the phase
/// machine. All mutation flows through `advance_frame` and
/// `handle_launch`; there is no ambient state.
pub struct GameSession {
    world: World,
    config: Config,
    score: Score,
    events: Events,
    rng: GameRng,
    ramp: SpeedRamp,
    pause: RoundPause,
    phase: Phase,
}

impl GameSession {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let center = config.field_center();

        // Left player on the cursor keys, right player on the pointer
        world.spawn((
            Paddle::new(Side::Left, center.y),
            Player::new(Side::Left, ControlScheme::UpDownKeys),
        ));
        world.spawn((
            Paddle::new(Side::Right, center.y),
            Player::new(Side::Right, ControlScheme::Pointer),
        ));
        world.spawn((Ball::resting(center),));

        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            ramp: SpeedRamp::new(),
            pause: RoundPause::new(),
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Events raised by the most recent frame
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn speed_ramp_running(&self) -> bool {
        self.ramp.is_running()
    }

    pub fn ball(&self) -> Ball {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .expect("session always holds a ball")
    }

    pub fn paddle_y(&self, side: Side) -> f32 {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.y)
            .expect("session always holds both paddles")
    }

    pub fn view(&self) -> SessionView {
        let ball = self.ball();
        SessionView {
            ball_x: ball.pos.x,
            ball_y: ball.pos.y,
            ball_spinning: ball.spinning,
            left_paddle_y: self.paddle_y(Side::Left),
            right_paddle_y: self.paddle_y(Side::Right),
            score: self.score,
            phase: self.phase,
        }
    }

    /// Advance the simulation by one frame.
    ///
    /// Input is applied in every phase (paddles stay live while the ball
    /// rests, as in the original). Ball physics only runs while Playing,
    /// in fixed micro-steps so a long frame cannot tunnel the ball
    /// through a paddle.
    pub fn advance_frame(&mut self, sample: &InputSample, dt_ms: f32) {
        self.events.clear();

        if sample.launch {
            self.handle_launch();
        }

        apply_inputs(&mut self.world, sample, &self.config);
        limit_paddle_movements(&mut self.world, &self.config);

        match self.phase {
            Phase::Playing => {
                let fires = self.ramp.tick(dt_ms, self.config.ramp_interval_ms);
                if fires > 0 {
                    self.bump_ball_speed(fires as f32 * self.config.ball_speed_increment);
                }

                let mut remaining = (dt_ms / 1000.0).min(Params::MAX_DT);
                while remaining > 0.0 && self.phase == Phase::Playing {
                    let step = remaining.min(Params::FIXED_DT);
                    remaining -= step;

                    move_ball(&mut self.world, step);
                    check_collisions(&mut self.world, &self.config, &mut self.rng, &mut self.events);
                    check_exits(&mut self.world, &self.config, &mut self.events);

                    if self.events.left_scored {
                        self.end_round(Side::Left);
                    } else if self.events.right_scored {
                        self.end_round(Side::Right);
                    }
                }
            }
            Phase::RoundOver => {
                if self.pause.tick(dt_ms) {
                    self.phase = Phase::Idle;
                }
            }
            Phase::Idle | Phase::GameOver => {}
        }
    }

    /// React to the launch trigger. Total over all phases: releases the
    /// ball from Idle, restarts the match from GameOver, and is a no-op
    /// mid-round.
    pub fn handle_launch(&mut self) {
        match self.phase {
            Phase::Idle => {
                let toward = if self.rng.0.gen_bool(0.5) {
                    Side::Right
                } else {
                    Side::Left
                };
                for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
                    ball.launch(toward, self.config.ball_speed_start);
                }
                self.ramp.start();
                self.phase = Phase::Playing;
                self.events.launched = true;
            }
            Phase::GameOver => {
                self.score.reset();
                let center = self.config.field_center();
                for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
                    ball.rest(center);
                }
                self.phase = Phase::Idle;
                self.events.match_reset = true;
            }
            Phase::Playing | Phase::RoundOver => {}
        }
    }

    /// A side scored: book the point, stop the speed ramp, re-center the
    /// ball, and either finish the match or schedule the next round.
    fn end_round(&mut self, scorer: Side) {
        self.score.point_to(scorer);
        self.ramp.stop();

        let center = self.config.field_center();
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.rest(center);
        }

        self.phase = Phase::RoundOver;
        if let Some(winner) = self.score.has_winner(self.config.win_score) {
            self.events.match_over = Some(winner);
            self.phase = Phase::GameOver;
        } else {
            self.pause.start(self.config.round_pause_ms);
        }
    }

    fn bump_ball_speed(&mut self, amount: f32) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            if ball.vel.x < 0.0 {
                ball.vel.x -= amount;
            } else {
                ball.vel.x += amount;
            }
        }
    }
}
