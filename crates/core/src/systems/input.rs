use crate::components::{Appearance, Movement, Position};
use crate::ecs::System;
use crate::screens::TITLE_SCREEN;
use crate::types::{Key, LogEvent};

use super::{INPUT_SYSTEM, TurnContext, is_free};

/// Applies the pending key to the player entity.
#[derive(Debug, Default)]
pub struct InputSystem;

impl System for InputSystem {
    fn name(&self) -> &'static str {
        INPUT_SYSTEM
    }

    fn process(&mut self, ctx: &mut TurnContext<'_>) {
        let Some(key) = ctx.key else {
            return;
        };
        match key {
            Key::Escape => {
                ctx.screen_request = Some(TITLE_SCREEN.to_string());
                return;
            }
            Key::Close => {
                ctx.quit_requested = true;
                ctx.log.push(LogEvent::QuitRequested);
                return;
            }
            Key::Z => {
                ctx.map.make_all_visible();
                ctx.log.push(LogEvent::MapRevealed);
                tracing::debug!("map revealed");
                return;
            }
            _ => {}
        }

        let Some((dx, dy)) = key.movement_delta() else {
            return;
        };
        let player = ctx.player;
        if !ctx.world.has::<Appearance>(player) || !ctx.world.has::<Movement>(player) {
            return;
        }
        let Some(from) = ctx.world.get::<Position>(player).map(|position| position.pos()) else {
            return;
        };

        let to = from.offset(dx, dy);
        if !is_free(ctx.world, ctx.map, to) {
            tracing::debug!(x = to.x, y = to.y, "player movement blocked");
            ctx.log.push(LogEvent::MovementBlocked { at: to });
            return;
        }
        ctx.world.update(player, Position::from(to));
        ctx.log.push(LogEvent::PlayerMoved { from, to });
        ctx.turn_taken = true;
    }
}
