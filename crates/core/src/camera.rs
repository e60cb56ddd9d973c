//! Viewport over the game map. The camera's top-left corner is a map
//! coordinate; screen cells are offsets from it.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Camera {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Camera {
    pub fn new(width: i32, height: i32) -> Self {
        Self { x: 0, y: 0, width, height }
    }

    /// Centres the view on the target, then clamps so the view never shows
    /// space past the map edge. A map narrower than the view pins to zero.
    pub fn move_to(&mut self, target_x: i32, target_y: i32, map_width: i32, map_height: i32) {
        self.x = clamp_axis(target_x - self.width / 2, self.width, map_width);
        self.y = clamp_axis(target_y - self.height / 2, self.height, map_height);
    }

    pub fn to_camera_coordinates(&self, map_x: i32, map_y: i32) -> Option<(i32, i32)> {
        let cx = map_x - self.x;
        let cy = map_y - self.y;
        if cx < 0 || cy < 0 || cx >= self.width || cy >= self.height {
            return None;
        }
        Some((cx, cy))
    }

    pub fn to_map_coordinates(&self, camera_x: i32, camera_y: i32) -> (i32, i32) {
        (camera_x + self.x, camera_y + self.y)
    }
}

fn clamp_axis(start: i32, view: i32, map: i32) -> i32 {
    let max_start = (map - view).max(0);
    start.clamp(0, max_start)
}
