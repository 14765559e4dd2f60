use crate::mapping::NodeMapping;

/// Maps a character to a node, using a vector of (key, node) pairs kept sorted by key.
/// Lookups are a binary search over the keys. On insert, the entries to the right of the
/// insertion point are shifted to keep the vector sorted.
/// Iteration is in ascending key order, which makes enumeration of a subtree lexicographic.
pub struct SortedMapping<N> {
    pub(crate) children: Vec<(char, N)>,
}

impl<N> Default for SortedMapping<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> SortedMapping<N> {
    #[inline]
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    #[inline]
    fn find_key_position(&self, key: char) -> Result<usize, usize> {
        self.children.binary_search_by_key(&key, |(k, _)| *k)
    }
}

impl<N> NodeMapping<N> for SortedMapping<N> {
    fn seek_child(&self, key: char) -> Option<&N> {
        let idx = self.find_key_position(key).ok()?;
        self.children.get(idx).map(|(_, n)| n)
    }

    fn seek_child_mut(&mut self, key: char) -> Option<&mut N> {
        let idx = self.find_key_position(key).ok()?;
        self.children.get_mut(idx).map(|(_, n)| n)
    }

    fn child_or_insert_with<F>(&mut self, key: char, make: F) -> &mut N
    where
        F: FnOnce() -> N,
    {
        let idx = match self.find_key_position(key) {
            Ok(idx) => idx,
            Err(idx) => {
                self.children.insert(idx, (key, make()));
                idx
            }
        };
        &mut self.children[idx].1
    }

    #[inline(always)]
    fn num_children(&self) -> usize {
        self.children.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (char, &N)> + '_> {
        Box::new(self.children.iter().map(|(k, n)| (*k, n)))
    }

    fn values_mut(&mut self) -> Box<dyn Iterator<Item = &mut N> + '_> {
        Box::new(self.children.iter_mut().map(|(_, n)| n))
    }

    fn drain(&mut self) -> Box<dyn Iterator<Item = N> + '_> {
        Box::new(self.children.drain(..).map(|(_, n)| n))
    }
}

#[cfg(test)]
mod tests {
    use crate::mapping::NodeMapping;
    use crate::mapping::sorted_mapping::SortedMapping;

    #[test]
    fn test_insert_seek() {
        let mut node = SortedMapping::<u32>::new();
        for (c, v) in [('d', 4), ('a', 1), ('c', 3), ('b', 2)] {
            node.child_or_insert_with(c, || v);
        }
        assert_eq!(node.num_children(), 4);
        for (c, v) in [('a', 1), ('b', 2), ('c', 3), ('d', 4)] {
            assert_eq!(node.seek_child(c), Some(&v));
        }
        assert_eq!(node.seek_child('e'), None);
        assert_eq!(node.seek_child_mut('0'), None);
    }

    #[test]
    fn test_iteration_is_sorted() {
        let mut node = SortedMapping::<u32>::new();
        // Insert in reverse order.
        for c in ('a'..='z').rev() {
            *node.child_or_insert_with(c, || 0) += c as u32;
        }
        let keys: Vec<char> = node.iter().map(|(k, _)| k).collect();
        let expected: Vec<char> = ('a'..='z').collect();
        assert_eq!(keys, expected);

        for v in node.values_mut() {
            *v = 0;
        }
        assert!(node.iter().all(|(_, v)| *v == 0));

        assert_eq!(node.drain().count(), 26);
        assert_eq!(node.num_children(), 0);
    }

    #[test]
    fn test_child_or_insert_with_keeps_existing() {
        let mut node = SortedMapping::<u32>::new();
        node.child_or_insert_with('m', || 5);
        assert_eq!(*node.child_or_insert_with('m', || 99), 5);
        assert_eq!(*node.child_or_insert_with('n', || 99), 99);
        assert_eq!(node.num_children(), 2);
    }
}
