pub mod hash_mapping;
pub mod sorted_mapping;

use crate::mapping::hash_mapping::HashMapping;
use crate::mapping::sorted_mapping::SortedMapping;

/// Storage for the outgoing edges of a single node, keyed by the character on the edge.
/// Keys are unique; children are only ever created through `child_or_insert_with`.
pub trait NodeMapping<N>: Default {
    fn seek_child(&self, key: char) -> Option<&N>;
    fn seek_child_mut(&mut self, key: char) -> Option<&mut N>;
    /// Returns the child for `key`, creating it with `make` if there is none.
    fn child_or_insert_with<F>(&mut self, key: char, make: F) -> &mut N
    where
        F: FnOnce() -> N;
    fn num_children(&self) -> usize;
    fn iter(&self) -> Box<dyn Iterator<Item = (char, &N)> + '_>;
    fn values_mut(&mut self) -> Box<dyn Iterator<Item = &mut N> + '_>;
    /// Removes every child, handing ownership of them to the caller.
    fn drain(&mut self) -> Box<dyn Iterator<Item = N> + '_>;
    fn is_empty(&self) -> bool {
        self.num_children() == 0
    }
}

/// Selects, at the type level, which [`NodeMapping`] the nodes of a trie use for their children.
pub trait MappingKind {
    type Mapping<N>: NodeMapping<N>;
}

/// Children in a `HashMap`. Iteration order is unspecified.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashedChildren;

impl MappingKind for HashedChildren {
    type Mapping<N> = HashMapping<N>;
}

/// Children in a sorted vector. Iteration is in ascending character order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortedChildren;

impl MappingKind for SortedChildren {
    type Mapping<N> = SortedMapping<N>;
}
