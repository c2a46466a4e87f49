//! Per-frame simulation tick
//!
//! Advances the episode by exactly one frame. Step order matters: intent,
//! jump, gravity, x pass, y pass, world bounds, fall-off, coins, win check.

use serde::{Deserialize, Serialize};

use super::collision::{resolve_x, resolve_y};
use super::state::{GameEvent, GameState, Outcome};
use crate::consts::*;
use crate::tuning::Tuning;

/// Logical keys held during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Advance the episode by one frame. Does nothing once the episode is won or lost.
pub fn tick(state: &mut GameState, input: &TickInput, tuning: &Tuning) {
    if state.outcome.is_terminal() {
        return;
    }

    state.time_ticks += 1;

    let platforms = state.level.platform_rects();
    let p = &mut state.player;

    // Horizontal intent: accelerate toward a single held direction, else damp
    match (input.left, input.right) {
        (true, false) => {
            p.vel.x -= tuning.move_accel;
            p.facing = -1;
        }
        (false, true) => {
            p.vel.x += tuning.move_accel;
            p.facing = 1;
        }
        _ => p.vel.x *= tuning.friction,
    }
    p.vel.x = p.vel.x.clamp(-tuning.max_speed_x, tuning.max_speed_x);

    // Jump only from the ground
    if input.jump && p.on_ground {
        p.vel.y = tuning.jump_velocity;
        p.on_ground = false;
    }

    // Gravity with terminal fall speed
    p.vel.y = (p.vel.y + tuning.gravity).min(tuning.max_fall_speed);

    // X pass
    p.pos.x += p.vel.x;
    resolve_x(&mut p.pos, &mut p.vel, p.size, &platforms);

    // Y pass; grounded only if this pass lands on something
    p.pos.y += p.vel.y;
    p.on_ground = false;
    if resolve_y(&mut p.pos, &mut p.vel, p.size, &platforms).landed {
        p.on_ground = true;
    }

    // Horizontal world bounds
    if p.pos.x < 0.0 {
        p.pos.x = 0.0;
        p.vel.x = 0.0;
    }
    if p.pos.x + p.size.x > WORLD_WIDTH {
        p.pos.x = WORLD_WIDTH - p.size.x;
        p.vel.x = 0.0;
    }

    // Fell off the world
    if p.pos.y > WORLD_HEIGHT + tuning.fall_margin {
        state.lives = state.lives.saturating_sub(1);
        state.events.push(GameEvent::LifeLost { lives: state.lives });
        if state.lives == 0 {
            state.outcome = Outcome::Lost;
            state.events.push(GameEvent::Lost);
            return;
        }
        p.respawn();
        state.events.push(GameEvent::Respawned);
    }

    // Coin pickups (several may land in one tick)
    let hitbox = p.rect();
    for (index, coin) in state.level.coins.iter_mut().enumerate() {
        if coin.taken || !coin.touches(&hitbox) {
            continue;
        }
        coin.taken = true;
        state.score += COIN_VALUE;
        state.events.push(GameEvent::CoinCollected {
            index,
            score: state.score,
        });
    }

    if state.all_coins_taken() {
        state.outcome = Outcome::Won;
        state.events.push(GameEvent::Won);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::Coin;
    use crate::spawn_point;
    use glam::Vec2;
    use proptest::prelude::*;

    fn fresh() -> (GameState, Tuning) {
        let tuning = Tuning::default();
        (GameState::new(), tuning)
    }

    /// Let the player drop onto the ground from spawn
    fn settle(state: &mut GameState, tuning: &Tuning) {
        for _ in 0..120 {
            tick(state, &TickInput::default(), tuning);
            if state.player.on_ground {
                return;
            }
        }
        panic!("player never landed");
    }

    /// Center the player on a coin, at rest
    fn place_on_coin(state: &mut GameState, index: usize) {
        let coin = state.level.coins[index].pos;
        state.player.pos = coin - state.player.size / 2.0;
        state.player.vel = Vec2::ZERO;
        state.player.on_ground = false;
    }

    const JUMP: TickInput = TickInput {
        left: false,
        right: false,
        jump: true,
    };
    const RIGHT: TickInput = TickInput {
        left: false,
        right: true,
        jump: false,
    };
    const LEFT: TickInput = TickInput {
        left: true,
        right: false,
        jump: false,
    };

    #[test]
    fn test_fresh_episode() {
        let (state, _) = fresh();
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert!(!state.won());
        assert!(!state.lost());
        assert_eq!(state.player.pos, Vec2::new(40.0, WORLD_HEIGHT - 90.0));
    }

    #[test]
    fn test_lands_on_ground() {
        let (mut state, tuning) = fresh();
        settle(&mut state, &tuning);
        assert_eq!(state.player.pos.y, WORLD_HEIGHT - 40.0 - PLAYER_HEIGHT);
        assert_eq!(state.player.vel.y, 0.0);
    }

    #[test]
    fn test_standing_stays_grounded() {
        let (mut state, tuning) = fresh();
        settle(&mut state, &tuning);
        let y = state.player.pos.y;
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), &tuning);
            assert!(state.player.on_ground);
            assert_eq!(state.player.vel.y, 0.0);
            assert_eq!(state.player.pos.y, y);
        }
    }

    #[test]
    fn test_jump_from_ground() {
        let (mut state, tuning) = fresh();
        settle(&mut state, &tuning);
        let y = state.player.pos.y;

        tick(&mut state, &JUMP, &tuning);
        assert!(!state.player.on_ground);
        // Jump impulse, then this tick's gravity
        let expected = tuning.jump_velocity + tuning.gravity;
        assert!((state.player.vel.y - expected).abs() < 1e-5);
        assert!(state.player.pos.y < y);
    }

    #[test]
    fn test_no_double_jump() {
        let (mut state, tuning) = fresh();
        settle(&mut state, &tuning);
        tick(&mut state, &JUMP, &tuning);
        let vy = state.player.vel.y;
        tick(&mut state, &JUMP, &tuning);
        // Airborne: holding jump only lets gravity act
        assert!((state.player.vel.y - (vy + tuning.gravity)).abs() < 1e-5);
    }

    #[test]
    fn test_airborne_jump_ignored_at_spawn() {
        let (mut state, tuning) = fresh();
        tick(&mut state, &JUMP, &tuning);
        assert!((state.player.vel.y - tuning.gravity).abs() < 1e-5);
    }

    #[test]
    fn test_acceleration_and_clamp() {
        let (mut state, tuning) = fresh();
        settle(&mut state, &tuning);

        tick(&mut state, &RIGHT, &tuning);
        assert!((state.player.vel.x - 0.8).abs() < 1e-5);
        assert_eq!(state.player.facing, 1);

        for _ in 0..20 {
            tick(&mut state, &RIGHT, &tuning);
        }
        assert_eq!(state.player.vel.x, tuning.max_speed_x);

        tick(&mut state, &LEFT, &tuning);
        assert_eq!(state.player.facing, -1);
        assert!((state.player.vel.x - 4.2).abs() < 1e-5);
    }

    #[test]
    fn test_friction_decay_not_zeroing() {
        let (mut state, tuning) = fresh();
        settle(&mut state, &tuning);
        state.player.vel.x = 5.0;

        tick(&mut state, &TickInput::default(), &tuning);
        assert!((state.player.vel.x - 4.0).abs() < 1e-5);

        // Both directions held also damps
        let both = TickInput {
            left: true,
            right: true,
            jump: false,
        };
        tick(&mut state, &both, &tuning);
        assert!((state.player.vel.x - 3.2).abs() < 1e-5);
        assert_eq!(state.player.facing, 1);
    }

    #[test]
    fn test_left_world_bound() {
        let (mut state, tuning) = fresh();
        settle(&mut state, &tuning);
        for _ in 0..60 {
            tick(&mut state, &LEFT, &tuning);
        }
        assert_eq!(state.player.pos.x, 0.0);
        assert_eq!(state.player.vel.x, 0.0);
    }

    #[test]
    fn test_right_world_bound() {
        let (mut state, tuning) = fresh();
        settle(&mut state, &tuning);
        state.player.pos.x = WORLD_WIDTH - PLAYER_WIDTH - 1.0;
        state.player.vel.x = 5.0;
        tick(&mut state, &RIGHT, &tuning);
        assert_eq!(state.player.pos.x, WORLD_WIDTH - PLAYER_WIDTH);
        assert_eq!(state.player.vel.x, 0.0);
    }

    #[test]
    fn test_terminal_fall_speed() {
        let (mut state, tuning) = fresh();
        // Far above everything so nothing is hit for a while
        state.player.pos = Vec2::new(740.0, -2000.0);
        for _ in 0..40 {
            tick(&mut state, &TickInput::default(), &tuning);
            assert!(state.player.vel.y <= tuning.max_fall_speed);
        }
        assert_eq!(state.player.vel.y, tuning.max_fall_speed);
    }

    #[test]
    fn test_head_bump_under_ledge() {
        let (mut state, tuning) = fresh();
        // Just under the first brick (80..200, 310..330), moving up
        state.player.pos = Vec2::new(120.0, 332.0);
        state.player.vel = Vec2::new(0.0, -10.0);
        tick(&mut state, &TickInput::default(), &tuning);
        assert_eq!(state.player.pos.y, 330.0);
        assert_eq!(state.player.vel.y, 0.0);
        assert!(!state.player.on_ground);
    }

    #[test]
    fn test_side_collision_with_ledge() {
        let (mut state, tuning) = fresh();
        // Level with the first brick, approaching from the left
        state.player.pos = Vec2::new(60.0, 312.0);
        state.player.vel = Vec2::new(5.0, -0.9);
        tick(&mut state, &RIGHT, &tuning);
        assert_eq!(state.player.pos.x, 80.0 - PLAYER_WIDTH);
        assert_eq!(state.player.vel.x, 0.0);
    }

    #[test]
    fn test_coin_pickup_once() {
        let (mut state, tuning) = fresh();
        place_on_coin(&mut state, 0);

        tick(&mut state, &TickInput::default(), &tuning);
        assert!(state.level.coins[0].taken);
        assert_eq!(state.score, 100);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::CoinCollected {
                index: 0,
                score: 100
            }]
        );

        // Still overlapping: nothing more happens
        tick(&mut state, &TickInput::default(), &tuning);
        assert_eq!(state.score, 100);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_multiple_coins_same_tick() {
        let (mut state, tuning) = fresh();
        let first = state.level.coins[0].pos;
        state.level.coins.push(Coin::new(first.x + 4.0, first.y));
        place_on_coin(&mut state, 0);

        tick(&mut state, &TickInput::default(), &tuning);
        assert_eq!(state.score, 200);
        assert_eq!(state.coins_taken(), 2);
    }

    #[test]
    fn test_fall_with_last_life_loses() {
        let (mut state, tuning) = fresh();
        state.lives = 1;
        state.player.pos = Vec2::new(300.0, WORLD_HEIGHT + 121.0);

        tick(&mut state, &TickInput::default(), &tuning);
        assert_eq!(state.lives, 0);
        assert!(state.lost());
        assert!(!state.won());
        // No respawn
        assert!(state.player.pos.y > WORLD_HEIGHT + tuning.fall_margin);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::LifeLost { lives: 0 }, GameEvent::Lost]
        );
    }

    #[test]
    fn test_fall_with_lives_left_respawns() {
        let (mut state, tuning) = fresh();
        state.lives = 2;
        state.player.pos = Vec2::new(300.0, WORLD_HEIGHT + 121.0);
        state.player.vel = Vec2::new(3.0, 18.0);

        tick(&mut state, &TickInput::default(), &tuning);
        assert_eq!(state.lives, 1);
        assert!(state.is_running());
        assert_eq!(state.player.pos, spawn_point());
        assert_eq!(state.player.vel, Vec2::ZERO);
        assert!(!state.player.on_ground);
    }

    #[test]
    fn test_just_above_threshold_is_not_a_fall() {
        let (mut state, tuning) = fresh();
        state.player.pos = Vec2::new(300.0, WORLD_HEIGHT + tuning.fall_margin - 2.0);
        tick(&mut state, &TickInput::default(), &tuning);
        assert_eq!(state.lives, 3);
    }

    #[test]
    fn test_win_on_last_coin_only() {
        let (mut state, tuning) = fresh();
        for index in [2, 0, 3] {
            place_on_coin(&mut state, index);
            tick(&mut state, &TickInput::default(), &tuning);
            assert!(!state.won());
        }
        place_on_coin(&mut state, 1);
        tick(&mut state, &TickInput::default(), &tuning);
        assert!(state.won());
        assert_eq!(state.score, 400);
        assert!(state.drain_events().contains(&GameEvent::Won));
    }

    #[test]
    fn test_terminal_state_does_not_advance() {
        let (mut state, tuning) = fresh();
        state.outcome = Outcome::Won;
        let before = state.player.pos;
        tick(&mut state, &RIGHT, &tuning);
        assert_eq!(state.player.pos, before);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_jump_onto_first_ledge() {
        let (mut state, tuning) = fresh();
        settle(&mut state, &tuning);

        // From spawn, a running jump clears the first ledge's left edge
        let input = TickInput {
            left: false,
            right: true,
            jump: true,
        };
        let ledge_top = WORLD_HEIGHT - 140.0 - PLAYER_HEIGHT;
        let mut landed = false;
        for _ in 0..60 {
            tick(&mut state, &input, &tuning);
            if state.player.on_ground && state.player.pos.y == ledge_top {
                landed = true;
                break;
            }
        }
        assert!(landed, "never landed on the ledge: {:?}", state.player);
    }

    fn arb_input() -> impl Strategy<Value = TickInput> {
        (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(left, right, jump)| TickInput {
            left,
            right,
            jump,
        })
    }

    proptest! {
        #[test]
        fn prop_invariants_hold(inputs in prop::collection::vec(arb_input(), 1..400)) {
            let (mut state, tuning) = fresh();
            for input in &inputs {
                tick(&mut state, input, &tuning);

                let taken = state.coins_taken() as u32;
                prop_assert_eq!(state.score, 100 * taken);
                prop_assert!(state.lives <= 3);
                prop_assert!(state.lives > 0 || state.lost());
                prop_assert_eq!(state.won(), state.all_coins_taken());
                prop_assert!(!(state.won() && state.lost()));
                prop_assert!(state.player.vel.x.abs() <= tuning.max_speed_x);
                prop_assert!(state.player.vel.y <= tuning.max_fall_speed);
                prop_assert!(state.player.pos.x >= 0.0);
                prop_assert!(state.player.pos.x <= WORLD_WIDTH - PLAYER_WIDTH);
            }
        }

        #[test]
        fn prop_deterministic(inputs in prop::collection::vec(arb_input(), 1..200)) {
            let (mut a, tuning) = fresh();
            let (mut b, _) = fresh();
            for input in &inputs {
                tick(&mut a, input, &tuning);
                tick(&mut b, input, &tuning);
            }
            prop_assert_eq!(a.player.pos, b.player.pos);
            prop_assert_eq!(a.player.vel, b.player.vel);
            prop_assert_eq!(a.score, b.score);
            prop_assert_eq!(a.time_ticks, b.time_ticks);
        }
    }
}
