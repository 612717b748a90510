//! Space descriptors of observations and actions.
use serde::{Deserialize, Serialize};

/// Describes the shape of an observation or action space.
///
/// Environments report their spaces with this type so that wrappers can
/// translate between interface conventions without knowing the concrete
/// observation and action types of the environment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Space {
    /// A fixed-length vector of real numbers.
    ///
    /// `shape` excludes the batch dimension; observation instances of a
    /// `Box` group may carry any number of rows of this shape.
    Box {
        /// Shape of a single record in the space.
        shape: Vec<usize>,
    },

    /// A discrete set of `n` choices, `0..n`.
    Discrete {
        /// The number of choices.
        n: usize,
    },

    /// Named sub-spaces with a stable order.
    Dict {
        /// Pairs of group name and sub-space.
        spaces: Vec<(String, Space)>,
    },
}

impl Space {
    /// A 1-dimensional [`Space::Box`] of the given length.
    pub fn vector(len: usize) -> Self {
        Self::Box { shape: vec![len] }
    }

    /// A [`Space::Discrete`] space of `n` choices.
    pub fn discrete(n: usize) -> Self {
        Self::Discrete { n }
    }

    /// A [`Space::Dict`] space of named sub-spaces.
    pub fn dict(spaces: Vec<(String, Space)>) -> Self {
        Self::Dict { spaces }
    }
}

#[cfg(test)]
mod tests {
    use super::Space;

    #[test]
    fn test_dict_space() {
        let space = Space::dict(vec![
            ("A".to_string(), Space::vector(3)),
            ("B".to_string(), Space::vector(2)),
        ]);

        match space {
            Space::Dict { spaces } => {
                assert_eq!(spaces.len(), 2);
                assert_eq!(spaces[0].0, "A");
                assert_eq!(spaces[0].1, Space::Box { shape: vec![3] });
            }
            _ => panic!(),
        }
    }
}
