//! Assembly surface state.
//!
//! Captured parts land here as placeable instances the player arranges
//! into the target kanji. The board knows nothing about rendering or
//! drag mechanics; the host supplies coordinates.

use serde::{Deserialize, Serialize};

/// Default round target.
pub const DEFAULT_TARGET_KANJI: char = '休';

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedPart {
    pub instance_id: u64,
    pub part_id: String,
    pub label: char,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotation: f64,
    pub z_index: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblyBoard {
    target: char,
    placed: Vec<PlacedPart>,
    selected: Option<u64>,
    next_instance_id: u64,
}

impl AssemblyBoard {
    #[must_use]
    pub const fn new(target: char) -> Self {
        Self {
            target,
            placed: Vec::new(),
            selected: None,
            next_instance_id: 0,
        }
    }

    #[must_use]
    pub const fn target(&self) -> char {
        self.target
    }

    #[must_use]
    pub fn placed(&self) -> &[PlacedPart] {
        &self.placed
    }

    #[must_use]
    pub const fn selected(&self) -> Option<u64> {
        self.selected
    }

    /// Place a new instance on top of the stack and return its id.
    pub fn add_part(&mut self, part_id: &str, label: char, x: f64, y: f64) -> u64 {
        let instance_id = self.next_instance_id;
        self.next_instance_id += 1;
        let z_index = u32::try_from(self.placed.len()).unwrap_or(u32::MAX);
        self.placed.push(PlacedPart {
            instance_id,
            part_id: part_id.to_string(),
            label,
            x,
            y,
            scale: 1.0,
            rotation: 0.0,
            z_index,
        });
        instance_id
    }

    /// Move an instance; unknown ids are ignored.
    pub fn move_part(&mut self, instance_id: u64, x: f64, y: f64) -> bool {
        if let Some(part) = self
            .placed
            .iter_mut()
            .find(|p| p.instance_id == instance_id)
        {
            part.x = x;
            part.y = y;
            true
        } else {
            false
        }
    }

    pub fn select(&mut self, instance_id: Option<u64>) {
        self.selected = instance_id.filter(|id| {
            self.placed.iter().any(|p| p.instance_id == *id)
        });
    }

    /// Remove the selected instance, if any.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.selected.take() else {
            return false;
        };
        let before = self.placed.len();
        self.placed.retain(|p| p.instance_id != id);
        self.placed.len() != before
    }

    /// Clear the board and the selection; instance ids keep counting up.
    pub fn reset(&mut self) {
        self.placed.clear();
        self.selected = None;
    }

    /// Whether a judge's recognized text matches this round's target.
    #[must_use]
    pub fn matches(&self, recognized: &str) -> bool {
        recognized.chars().next() == Some(self.target)
    }
}

impl Default for AssemblyBoard {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_KANJI)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_assigns_increasing_instances_and_z_order() {
        let mut board = AssemblyBoard::default();
        let a = board.add_part("person", '亻', 100.0, 120.0);
        let b = board.add_part("tree", '木', 160.0, 120.0);
        assert!(b > a);
        assert_eq!(board.placed()[0].z_index, 0);
        assert_eq!(board.placed()[1].z_index, 1);
    }

    #[test]
    fn move_ignores_unknown_instances() {
        let mut board = AssemblyBoard::default();
        let id = board.add_part("sun", '日', 10.0, 10.0);
        assert!(board.move_part(id, 50.0, 60.0));
        assert!(!board.move_part(id + 99, 0.0, 0.0));
        let part = &board.placed()[0];
        assert!((part.x - 50.0).abs() < f64::EPSILON);
        assert!((part.y - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn delete_requires_a_valid_selection() {
        let mut board = AssemblyBoard::default();
        let id = board.add_part("fire", '火', 0.0, 0.0);
        assert!(!board.delete_selected());
        board.select(Some(id + 1));
        assert_eq!(board.selected(), None);
        board.select(Some(id));
        assert!(board.delete_selected());
        assert!(board.placed().is_empty());
        assert_eq!(board.selected(), None);
    }

    #[test]
    fn reset_clears_parts_but_not_id_sequence() {
        let mut board = AssemblyBoard::default();
        board.add_part("moon", '月', 0.0, 0.0);
        board.reset();
        assert!(board.placed().is_empty());
        let next = board.add_part("heart", '心', 0.0, 0.0);
        assert_eq!(next, 1);
    }

    #[test]
    fn target_matching_uses_the_first_recognized_char() {
        let board = AssemblyBoard::new('休');
        assert!(board.matches("休"));
        assert!(board.matches("休み"));
        assert!(!board.matches("体"));
        assert!(!board.matches(""));
    }
}
