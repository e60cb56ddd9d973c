//! Stable snapshot hashing for deterministic verification.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.turn);
        hasher.write_u8(u8::from(self.quit));
        hasher.write(self.current_screen().unwrap_or_default().as_bytes());
        hasher.write_u8(0);

        for id in self.world.entities_with::<Position>() {
            if let Some(position) = self.world.get::<Position>(id) {
                hasher.write_u8(u8::from(id == self.player));
                hasher.write_i32(position.x);
                hasher.write_i32(position.y);
            }
        }

        for (&visible, &explored) in self.map.visible.iter().zip(&self.map.explored) {
            hasher.write_u8(u8::from(visible) | (u8::from(explored) << 1));
        }
        hasher.finish()
    }
}

/// `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}
