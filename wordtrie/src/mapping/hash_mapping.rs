use std::collections::HashMap;

use crate::mapping::NodeMapping;

/// Maps a character to a node through a `HashMap`. Lookups are O(1) on average regardless of
/// fan-out, at the cost of an unspecified iteration order.
pub struct HashMapping<N> {
    pub(crate) children: HashMap<char, N>,
}

impl<N> Default for HashMapping<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> HashMapping<N> {
    #[inline]
    pub fn new() -> Self {
        Self {
            children: HashMap::new(),
        }
    }
}

impl<N> NodeMapping<N> for HashMapping<N> {
    #[inline]
    fn seek_child(&self, key: char) -> Option<&N> {
        self.children.get(&key)
    }

    #[inline]
    fn seek_child_mut(&mut self, key: char) -> Option<&mut N> {
        self.children.get_mut(&key)
    }

    #[inline]
    fn child_or_insert_with<F>(&mut self, key: char, make: F) -> &mut N
    where
        F: FnOnce() -> N,
    {
        self.children.entry(key).or_insert_with(make)
    }

    #[inline(always)]
    fn num_children(&self) -> usize {
        self.children.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (char, &N)> + '_> {
        Box::new(self.children.iter().map(|(k, n)| (*k, n)))
    }

    fn values_mut(&mut self) -> Box<dyn Iterator<Item = &mut N> + '_> {
        Box::new(self.children.values_mut())
    }

    fn drain(&mut self) -> Box<dyn Iterator<Item = N> + '_> {
        Box::new(self.children.drain().map(|(_, n)| n))
    }
}
