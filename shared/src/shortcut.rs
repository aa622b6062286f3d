/// Keyboard actions available on the drawing screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    Undo,
    Redo,
    DeleteSelected,
}

impl Shortcut {
    /// Whether the browser's own handling of the key should be cancelled.
    /// Backspace with nothing selected keeps its browser meaning.
    pub fn suppresses_default(self, changed: bool) -> bool {
        match self {
            Shortcut::Undo | Shortcut::Redo => true,
            Shortcut::DeleteSelected => changed,
        }
    }
}

/// Maps a key press to a drawing action. `modifier` is Ctrl or Cmd.
/// Shift+Z is checked before plain Z.
pub fn shortcut(key: &str, modifier: bool, shift: bool) -> Option<Shortcut> {
    if !modifier {
        return match key {
            "Delete" | "Backspace" => Some(Shortcut::DeleteSelected),
            _ => None,
        };
    }
    if shift && key.eq_ignore_ascii_case("z") {
        return Some(Shortcut::Redo);
    }
    if key.eq_ignore_ascii_case("z") {
        return Some(Shortcut::Undo);
    }
    if key.eq_ignore_ascii_case("y") {
        return Some(Shortcut::Redo);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undo_and_redo_bindings() {
        assert_eq!(shortcut("z", true, false), Some(Shortcut::Undo));
        assert_eq!(shortcut("z", true, true), Some(Shortcut::Redo));
        assert_eq!(shortcut("y", true, false), Some(Shortcut::Redo));
    }

    #[test]
    fn shift_produces_uppercase_z() {
        assert_eq!(shortcut("Z", true, true), Some(Shortcut::Redo));
        assert_eq!(shortcut("Y", true, true), Some(Shortcut::Redo));
    }

    #[test]
    fn delete_keys_need_no_modifier() {
        assert_eq!(shortcut("Delete", false, false), Some(Shortcut::DeleteSelected));
        assert_eq!(shortcut("Backspace", false, false), Some(Shortcut::DeleteSelected));
        assert_eq!(shortcut("Delete", true, false), None);
    }

    #[test]
    fn unmodified_letters_are_ignored() {
        assert_eq!(shortcut("z", false, false), None);
        assert_eq!(shortcut("Z", false, true), None);
        assert_eq!(shortcut("y", false, false), None);
        assert_eq!(shortcut("a", true, false), None);
        assert_eq!(shortcut("Escape", false, false), None);
    }

    #[test]
    fn delete_keeps_browser_default_when_nothing_was_removed() {
        assert!(!Shortcut::DeleteSelected.suppresses_default(false));
        assert!(Shortcut::DeleteSelected.suppresses_default(true));
        assert!(Shortcut::Undo.suppresses_default(false));
        assert!(Shortcut::Redo.suppresses_default(false));
    }
}
