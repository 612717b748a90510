//! Spaces of the entity-structured convention.
use serde::{Deserialize, Serialize};

/// An entity type: the feature list shared by all records of one named
/// observation group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Ordered feature names of a record.
    pub features: Vec<String>,
}

/// The observation schema: named entity types with a stable order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObsSpace {
    /// Pairs of group name and entity type.
    pub entities: Vec<(String, Entity)>,
}

/// A global categorical action: one choice out of a fixed list, not bound
/// to any particular entity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlobalCategoricalActionSpace {
    /// Ordered names of the available choices.
    pub choices: Vec<String>,
}

/// Legality mask of a global categorical action.
///
/// `None` means every choice is currently legal.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalCategoricalActionMask {
    /// Per-choice legality flags, or `None` for all-legal.
    pub mask: Option<Vec<bool>>,
}

impl GlobalCategoricalActionMask {
    /// Whether the choice with the given index is legal.
    pub fn is_legal(&self, index: usize) -> bool {
        match &self.mask {
            None => true,
            Some(mask) => mask.get(index).copied().unwrap_or(false),
        }
    }
}

/// A chosen value of a global categorical action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlobalCategoricalAction {
    /// Index of the chosen value in the action's choice list.
    pub index: usize,
}

#[cfg(test)]
mod tests {
    use super::GlobalCategoricalActionMask;

    #[test]
    fn test_default_mask_is_all_legal() {
        let mask = GlobalCategoricalActionMask::default();
        assert!(mask.is_legal(0));
        assert!(mask.is_legal(100));
    }

    #[test]
    fn test_explicit_mask() {
        let mask = GlobalCategoricalActionMask {
            mask: Some(vec![true, false]),
        };
        assert!(mask.is_legal(0));
        assert!(!mask.is_legal(1));
        assert!(!mask.is_legal(2));
    }
}
