use crate::components::{Appearance, Position};
use crate::console::{ENTITY_LAYER, TOP_LAYER};
use crate::ecs::System;

use super::{RENDER_SYSTEM, TurnContext};

/// Draws every visible entity through the camera. Lower layers are drawn
/// first so an entity on a higher layer wins a shared cell.
#[derive(Debug, Default)]
pub struct RenderSystem;

impl System for RenderSystem {
    fn name(&self) -> &'static str {
        RENDER_SYSTEM
    }

    fn process(&mut self, ctx: &mut TurnContext<'_>) {
        let mut drawable: Vec<_> = ctx
            .world
            .entities_with::<Appearance>()
            .into_iter()
            .filter_map(|id| {
                let pos = ctx.world.get::<Position>(id)?.pos();
                let appearance = ctx.world.get::<Appearance>(id)?;
                Some((appearance.layer, id, pos, appearance.glyph))
            })
            .collect();
        drawable.sort_by_key(|&(layer, id, _, _)| (layer, id));

        for (layer, _, pos, glyph) in drawable {
            if !ctx.map.is_visible_to_player(pos) {
                continue;
            }
            let Some((cx, cy)) = ctx.camera.to_camera_coordinates(pos.x, pos.y) else {
                continue;
            };
            for cleared in ENTITY_LAYER..=TOP_LAYER {
                ctx.console.clear_area(cx, cy, 1, 1, cleared);
            }
            ctx.console.print_glyph(cx, cy, glyph, layer);
        }
    }
}
