//! Ray-cast field of vision.
//! One ray per whole degree is marched outward from the viewer in unit
//! steps; every cell a ray touches is lit, and a ray stops at the first
//! sight-blocking cell after lighting it.

use crate::map::GameMap;
use crate::types::Pos;

const RAY_COUNT: usize = 360;

pub struct FieldOfVision {
    radius: u32,
    sin_table: [f64; RAY_COUNT],
    cos_table: [f64; RAY_COUNT],
}

impl FieldOfVision {
    pub fn new(radius: u32) -> Self {
        let mut sin_table = [0.0; RAY_COUNT];
        let mut cos_table = [0.0; RAY_COUNT];
        for degree in 0..RAY_COUNT {
            let radians = (degree as f64).to_radians();
            sin_table[degree] = radians.sin();
            cos_table[degree] = radians.cos();
        }
        Self { radius, sin_table, cos_table }
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: u32) {
        self.radius = radius;
    }

    pub fn ray_cast(&self, map: &mut GameMap, origin: Pos) {
        map.clear_visible();
        if !map.in_bounds(origin) {
            return;
        }
        map.set_visible(origin);

        let max_x = (map.width - 1) as f64;
        let max_y = (map.height - 1) as f64;
        for degree in 0..RAY_COUNT {
            let step_x = self.sin_table[degree];
            let step_y = self.cos_table[degree];
            let mut x = f64::from(origin.x);
            let mut y = f64::from(origin.y);

            for _ in 0..self.radius {
                x += step_x;
                y += step_y;
                if x < 0.0 || y < 0.0 || x > max_x || y > max_y {
                    break;
                }
                let cell = Pos { y: y.round() as i32, x: x.round() as i32 };
                map.set_visible(cell);
                if map.blocks_sight(cell) {
                    break;
                }
            }
        }
    }
}
