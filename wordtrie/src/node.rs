use crate::mapping::{MappingKind, NodeMapping};

/// One character position in the trie. The node exclusively owns its children; there are no
/// parent pointers, so every traversal runs root-to-leaf.
pub(crate) struct Node<K: MappingKind> {
    /// The character on the edge leading into this node. `None` only for the root.
    pub(crate) element: Option<char>,
    pub(crate) is_word: bool,
    pub(crate) children: K::Mapping<Node<K>>,
}

impl<K: MappingKind> Node<K> {
    #[inline]
    pub(crate) fn new_root() -> Self {
        Self {
            element: None,
            is_word: false,
            children: Default::default(),
        }
    }

    #[inline]
    pub(crate) fn new_inner(element: char) -> Self {
        Self {
            element: Some(element),
            is_word: false,
            children: Default::default(),
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn num_children(&self) -> usize {
        self.children.num_children()
    }

    /// Follows `path` one character at a time. `None` as soon as an edge is missing.
    pub(crate) fn seek(&self, path: &str) -> Option<&Node<K>> {
        path.chars().try_fold(self, |node, c| node.children.seek_child(c))
    }

    pub(crate) fn seek_mut(&mut self, path: &str) -> Option<&mut Node<K>> {
        path.chars().try_fold(self, |node, c| node.children.seek_child_mut(c))
    }

    /// Follows `path`, creating any missing nodes along the way. Returns the terminal node and
    /// the number of nodes created.
    pub(crate) fn seek_or_create(&mut self, path: &str) -> (&mut Node<K>, usize) {
        let mut created = 0;
        let mut current = self;
        for c in path.chars() {
            current = current.children.child_or_insert_with(c, || {
                created += 1;
                Node::new_inner(c)
            });
        }
        (current, created)
    }

    /// Clears the word flag on this node and every node below it. Uses an explicit stack so
    /// that deep tries can't exhaust the call stack. Returns how many flags were cleared.
    pub(crate) fn clear_subtree(&mut self) -> usize {
        let mut cleared = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.is_word {
                node.is_word = false;
                cleared += 1;
            }
            stack.extend(node.children.values_mut());
        }
        cleared
    }

    pub(crate) fn iter(&self) -> Box<dyn Iterator<Item = (char, &Self)> + '_> {
        self.children.iter()
    }
}

// The default drop glue would recurse once per level; long words would blow the stack.
impl<K: MappingKind> Drop for Node<K> {
    fn drop(&mut self) {
        if self.children.is_empty() {
            return;
        }
        let mut stack: Vec<Node<K>> = self.children.drain().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain());
        }
    }
}
