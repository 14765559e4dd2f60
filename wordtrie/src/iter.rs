use crate::mapping::MappingKind;
use crate::node::Node;

type IterEntry<'a, K> = (char, &'a Node<K>);
type NodeIterator<'a, K> = dyn Iterator<Item = IterEntry<'a, K>> + 'a;

/// Iterator over every word in a subtree, each yielded as the full string from the trie root.
///
/// Order follows the child mapping: unspecified for hashed children, lexicographic for sorted
/// children. The traversal keeps an explicit stack of child iterators rather than recursing.
pub struct Words<'a, K: MappingKind + 'a> {
    // The subtree root is reported before any of its children are visited.
    start: Option<&'a Node<K>>,
    node_iter_stack: Vec<Box<NodeIterator<'a, K>>>,

    // Pushed and popped one character at a time as we descend and ascend the tree.
    cur_key: String,
}

impl<'a, K: MappingKind + 'a> Words<'a, K> {
    pub(crate) fn new(node: &'a Node<K>, prefix: &str) -> Self {
        Self {
            start: Some(node),
            node_iter_stack: Vec::new(),
            cur_key: prefix.to_string(),
        }
    }
}

impl<'a, K: MappingKind + 'a> Iterator for Words<'a, K> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            self.node_iter_stack.push(start.iter());
            if start.is_word {
                return Some(self.cur_key.clone());
            }
        }

        // Grab the last iterator from the stack, and see if there's more to iterate off of it.
        // If not, pop it off along with the character that led to it, and continue the loop.
        // If there is, descend into the child, and report it if it ends a word.
        loop {
            let last_iter = self.node_iter_stack.last_mut()?;

            let Some((c, node)) = last_iter.next() else {
                self.node_iter_stack.pop();
                // The bottom iterator belongs to the start node, which has no character of its
                // own beyond the prefix.
                if !self.node_iter_stack.is_empty() {
                    self.cur_key.pop();
                }
                continue;
            };

            debug_assert_eq!(node.element, Some(c));
            self.cur_key.push(c);
            self.node_iter_stack.push(node.iter());
            if node.is_word {
                return Some(self.cur_key.clone());
            }
        }
    }
}
