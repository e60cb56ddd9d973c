use rand_chacha::rand_core::Rng;

use crate::components::{Appearance, Position, SimpleAi};
use crate::ecs::System;
use crate::types::LogEvent;

use super::{SIMPLE_AI_SYSTEM, TurnContext, is_free};

/// Random wandering. Every wanderer rolls a step in each axis once per key
/// the game screen handles, whether or not the player moved, and takes it
/// only if the destination is free. Keys that leave the game screen or quit
/// freeze the world.
#[derive(Debug, Default)]
pub struct SimpleAiSystem;

impl System for SimpleAiSystem {
    fn name(&self) -> &'static str {
        SIMPLE_AI_SYSTEM
    }

    fn process(&mut self, ctx: &mut TurnContext<'_>) {
        if ctx.key.is_none() || ctx.screen_request.is_some() || ctx.quit_requested {
            return;
        }
        for entity in ctx.world.entities_with::<SimpleAi>() {
            if !ctx.world.has::<Appearance>(entity) {
                continue;
            }
            let Some(from) = ctx.world.get::<Position>(entity).map(|position| position.pos())
            else {
                continue;
            };
            let dx = step(ctx);
            let dy = step(ctx);
            let to = from.offset(dx, dy);
            if to == from || !is_free(ctx.world, ctx.map, to) {
                continue;
            }
            ctx.world.update(entity, Position::from(to));
            ctx.log.push(LogEvent::CreatureMoved { entity, from, to });
        }
    }
}

fn step(ctx: &mut TurnContext<'_>) -> i32 {
    (ctx.rng.next_u64() % 3) as i32 - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::TileKind;
    use crate::systems::InputSystem;
    use crate::systems::test_support::TurnFixture;
    use crate::types::{Key, Pos};

    fn creature_moves(log: &[LogEvent]) -> usize {
        log.iter().filter(|event| matches!(event, LogEvent::CreatureMoved { .. })).count()
    }

    /// Runs input then AI for one key, the way the game feeds its systems.
    fn press(fixture: &mut TurnFixture, key: Key) {
        let mut ctx = fixture.context(Some(key));
        InputSystem.process(&mut ctx);
        SimpleAiSystem.process(&mut ctx);
    }

    #[test]
    fn wanderers_hold_still_without_a_key() {
        let mut fixture = TurnFixture::open_room(12, 12);
        let rat = fixture.spawn_wanderer(Pos::new(3, 3), 'r');

        for _ in 0..20 {
            let mut ctx = fixture.context(None);
            SimpleAiSystem.process(&mut ctx);
        }
        assert_eq!(fixture.world.get::<Position>(rat), Some(&Position { x: 3, y: 3 }));
        assert!(fixture.log.is_empty());
    }

    #[test]
    fn wanderers_act_on_keys_that_do_not_move_the_player() {
        let mut fixture = TurnFixture::open_room(12, 12);
        fixture.place_player(Pos::new(1, 1));
        fixture.spawn_wanderer(Pos::new(6, 6), 'r');

        for _ in 0..30 {
            press(&mut fixture, Key::Z);
            press(&mut fixture, Key::Other);
            press(&mut fixture, Key::Left);
        }
        assert_eq!(fixture.player_pos(), Pos::new(1, 1));
        assert!(fixture.log.contains(&LogEvent::MovementBlocked { at: Pos::new(0, 1) }));
        assert!(creature_moves(&fixture.log) > 0, "ninety passes without a single step");
    }

    #[test]
    fn leaving_or_quitting_freezes_wanderers() {
        let mut fixture = TurnFixture::open_room(12, 12);
        let rat = fixture.spawn_wanderer(Pos::new(3, 3), 'r');

        for _ in 0..20 {
            press(&mut fixture, Key::Escape);
            press(&mut fixture, Key::Close);
        }
        assert_eq!(fixture.world.get::<Position>(rat), Some(&Position { x: 3, y: 3 }));
        assert_eq!(creature_moves(&fixture.log), 0);
    }

    #[test]
    fn wanderers_take_single_steps_onto_free_floor() {
        let mut fixture = TurnFixture::open_room(12, 12);
        let rat = fixture.spawn_wanderer(Pos::new(3, 3), 'r');

        let mut last = Pos::new(3, 3);
        for _ in 0..50 {
            let mut ctx = fixture.context(Some(Key::Other));
            SimpleAiSystem.process(&mut ctx);

            let now = fixture.world.get::<Position>(rat).expect("rat has position").pos();
            assert!((now.x - last.x).abs() <= 1 && (now.y - last.y).abs() <= 1);
            assert_eq!(fixture.map.tile_at(now), TileKind::Floor);
            assert_ne!(now, fixture.player_pos());
            last = now;
        }
        assert!(
            fixture.log.iter().any(|event| matches!(event, LogEvent::CreatureMoved { .. })),
            "fifty passes without a single step"
        );
    }

    #[test]
    fn boxed_in_wanderer_never_moves() {
        let mut fixture = TurnFixture::open_room(12, 12);
        for y in 1..11 {
            for x in 1..11 {
                fixture.map.set_tile(Pos::new(x, y), TileKind::Wall);
            }
        }
        fixture.map.set_tile(Pos::new(5, 5), TileKind::Floor);
        fixture.place_player(Pos::new(1, 1));
        let rat = fixture.spawn_wanderer(Pos::new(5, 5), 'r');

        for _ in 0..20 {
            let mut ctx = fixture.context(Some(Key::Other));
            SimpleAiSystem.process(&mut ctx);
        }
        assert_eq!(fixture.world.get::<Position>(rat), Some(&Position { x: 5, y: 5 }));
    }

    #[test]
    fn wanderers_without_appearance_are_skipped() {
        let mut fixture = TurnFixture::open_room(12, 12);
        let rat = fixture.spawn_wanderer(Pos::new(3, 3), 'r');
        fixture.world.remove::<Appearance>(rat);

        for _ in 0..20 {
            let mut ctx = fixture.context(Some(Key::Other));
            SimpleAiSystem.process(&mut ctx);
        }
        assert_eq!(fixture.world.get::<Position>(rat), Some(&Position { x: 3, y: 3 }));
    }
}
