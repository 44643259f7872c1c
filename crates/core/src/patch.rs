//! Presence-aware update values

/// Update instruction for a field that may hold no value.
///
/// Distinguishes "leave as is" from "clear" so an explicit `null` in an
/// update is not mistaken for an omitted field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Patch<T> {
    #[default]
    Unchanged,
    Clear,
    Set(T),
}

impl<T> Patch<T> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// Applies the instruction to the current value
    pub fn apply(self, current: &mut Option<T>) {
        match self {
            Self::Unchanged => {}
            Self::Clear => *current = None,
            Self::Set(value) => *current = Some(value),
        }
    }

    /// The value being written, if any
    pub fn as_set(&self) -> Option<&T> {
        match self {
            Self::Set(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply() {
        let mut value = Some(1);
        Patch::Unchanged.apply(&mut value);
        assert_eq!(value, Some(1));

        Patch::Set(2).apply(&mut value);
        assert_eq!(value, Some(2));

        Patch::Clear.apply(&mut value);
        assert_eq!(value, None);
    }
}
