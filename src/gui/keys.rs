//! Keyboard shortcuts for the picker window.

use iced::keyboard::{Key, key::Named};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Close,
    Refresh,
    Highlight(usize),
    Select(usize),
    Ignore,
}

/// Moves the highlight through a row-major grid of `total` cells.
///
/// Left/right wrap around the whole list, up/down clamp to the first and
/// last cell. With nothing highlighted, movement starts from cell 0.
pub fn navigate(current: Option<usize>, key: &Key, cols: usize, total: usize) -> Option<usize> {
    if total == 0 || cols == 0 {
        return None;
    }

    let idx = current.unwrap_or(0).min(total - 1);

    match key {
        Key::Named(Named::ArrowRight) => Some((idx + 1) % total),
        Key::Named(Named::ArrowLeft) => Some(if idx == 0 { total - 1 } else { idx - 1 }),
        Key::Named(Named::ArrowDown) => Some((idx + cols).min(total - 1)),
        Key::Named(Named::ArrowUp) => Some(idx.saturating_sub(cols)),
        _ => None,
    }
}

pub fn key_action(key: &Key, hovered: Option<usize>, cols: usize, total: usize) -> KeyAction {
    match key {
        Key::Named(Named::Escape) => KeyAction::Close,
        Key::Character(c) if c.as_str() == "r" => KeyAction::Refresh,
        Key::Named(Named::Enter) => match hovered {
            Some(idx) if idx < total => KeyAction::Select(idx),
            _ => KeyAction::Ignore,
        },
        key => navigate(hovered, key, cols, total).map_or(KeyAction::Ignore, KeyAction::Highlight),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RIGHT: Key = Key::Named(Named::ArrowRight);
    const LEFT: Key = Key::Named(Named::ArrowLeft);
    const DOWN: Key = Key::Named(Named::ArrowDown);
    const UP: Key = Key::Named(Named::ArrowUp);

    #[test]
    fn left_and_right_wrap() {
        assert_eq!(navigate(Some(6), &RIGHT, 3, 7), Some(0));
        assert_eq!(navigate(Some(0), &LEFT, 3, 7), Some(6));
        assert_eq!(navigate(Some(2), &RIGHT, 3, 7), Some(3));
        assert_eq!(navigate(Some(3), &LEFT, 3, 7), Some(2));
    }

    #[test]
    fn down_clamps_into_partial_last_row() {
        assert_eq!(navigate(Some(4), &DOWN, 3, 7), Some(6));
        assert_eq!(navigate(Some(1), &DOWN, 3, 7), Some(4));
        assert_eq!(navigate(Some(6), &DOWN, 3, 7), Some(6));
    }

    #[test]
    fn up_clamps_at_first_row() {
        assert_eq!(navigate(Some(2), &UP, 3, 7), Some(0));
        assert_eq!(navigate(Some(0), &UP, 3, 7), Some(0));
        assert_eq!(navigate(Some(5), &UP, 3, 7), Some(2));
    }

    #[test]
    fn starts_from_first_cell_without_highlight() {
        assert_eq!(navigate(None, &RIGHT, 3, 7), Some(1));
        assert_eq!(navigate(None, &LEFT, 3, 7), Some(6));
        assert_eq!(navigate(None, &DOWN, 3, 7), Some(3));
    }

    #[test]
    fn empty_grid_never_highlights() {
        for key in [RIGHT, LEFT, DOWN, UP] {
            assert_eq!(navigate(None, &key, 0, 0), None);
            assert_eq!(navigate(Some(3), &key, 3, 0), None);
            assert_eq!(key_action(&key, None, 0, 0), KeyAction::Ignore);
        }
    }

    #[test]
    fn stale_highlight_is_clamped() {
        assert_eq!(navigate(Some(10), &UP, 3, 7), Some(3));
    }

    #[test]
    fn escape_and_r_work_without_images() {
        assert_eq!(key_action(&Key::Named(Named::Escape), None, 0, 0), KeyAction::Close);
        assert_eq!(key_action(&Key::Character("r".into()), None, 0, 0), KeyAction::Refresh);
        assert_eq!(key_action(&Key::Character("r".into()), Some(2), 3, 7), KeyAction::Refresh);
    }

    #[test]
    fn enter_selects_the_highlight() {
        let enter = Key::Named(Named::Enter);
        assert_eq!(key_action(&enter, Some(4), 3, 7), KeyAction::Select(4));
        assert_eq!(key_action(&enter, None, 3, 7), KeyAction::Ignore);
        assert_eq!(key_action(&enter, Some(7), 3, 7), KeyAction::Ignore);
    }

    #[test]
    fn arrows_become_highlights() {
        assert_eq!(key_action(&RIGHT, Some(1), 3, 7), KeyAction::Highlight(2));
        assert_eq!(key_action(&Key::Character("x".into()), Some(1), 3, 7), KeyAction::Ignore);
    }
}
