use crate::ecs::{Component, ComponentStore, World};
use crate::types::{Glyph, Pos};

/// Location on the game map. Entities without one are never rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn pos(self) -> Pos {
        Pos::new(self.x, self.y)
    }
}

impl From<Pos> for Position {
    fn from(pos: Pos) -> Self {
        Self { x: pos.x, y: pos.y }
    }
}

/// How an entity looks on the terminal, and which console layer it is drawn on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Appearance {
    pub glyph: Glyph,
    pub layer: usize,
    pub name: String,
    pub description: String,
}

/// Flag: the entity is able to move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Movement;

/// Flag: nothing else may step into this entity's cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Blocking;

/// Flag: the entity wanders randomly once per spent turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimpleAi;

/// Flag: the entity is driven by player input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Player;

macro_rules! component {
    ($ty:ty, $field:ident) => {
        impl Component for $ty {
            fn store(world: &World) -> &ComponentStore<Self> {
                &world.$field
            }

            fn store_mut(world: &mut World) -> &mut ComponentStore<Self> {
                &mut world.$field
            }
        }
    };
}

component!(Position, positions);
component!(Appearance, appearances);
component!(Movement, movement);
component!(Blocking, blocking);
component!(SimpleAi, simple_ai);
component!(Player, players);
