// Prefix-tree dictionary index
//
// All nodes live in one arena owned by the `Trie`. A node's identity is its
// arena index, assigned from the arena length when the node is created, so
// identities are unique within one trie and comparisons are integer
// comparisons.

use std::fmt;

use hashbrown::{HashMap, HashSet};

/// Index of a node in its trie's arena.
pub type NodeId = u32;

/// One node of the prefix tree.
#[derive(Debug, Clone)]
pub struct TrieNode {
    /// Character on the edge from the parent. `None` only for the root.
    chr: Option<char>,
    /// Parent node. `None` only for the root.
    parent: Option<NodeId>,
    /// Outgoing edges keyed by character.
    children: HashMap<char, NodeId>,
    /// Dictionary word completed at this node, if any.
    word: Option<String>,
}

impl TrieNode {
    fn new(chr: Option<char>, parent: Option<NodeId>) -> Self {
        Self {
            chr,
            parent,
            children: HashMap::with_capacity(2),
            word: None,
        }
    }

    /// Character labelling the edge into this node.
    pub fn chr(&self) -> Option<char> {
        self.chr
    }

    /// Parent of this node in the tree.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Terminal payload, set on nodes that end a vocabulary entry.
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    /// Returns `true` if a vocabulary entry ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.word.is_some()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

impl fmt::Display for TrieNode {
    /// Renders as `[c children=[a, b] word=w]`; children are sorted so the
    /// output is stable.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        if let Some(c) = self.chr {
            write!(f, "{c}")?;
        }
        if !self.children.is_empty() {
            let mut keys: Vec<char> = self.children.keys().copied().collect();
            keys.sort_unstable();
            write!(f, " children={keys:?}")?;
        }
        if let Some(word) = &self.word {
            write!(f, " word={word}")?;
        }
        write!(f, "]")
    }
}

/// Arena-backed prefix tree holding the vocabulary.
///
/// Built once, then only read while decoding; a `&Trie` can be shared by any
/// number of concurrent decoders.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    /// Every character that labels at least one edge.
    alphabet: HashSet<char>,
    word_count: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Identity of the root node.
    pub const ROOT: NodeId = 0;

    /// Create a trie containing only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new(None, None)],
            alphabet: HashSet::new(),
            word_count: 0,
        }
    }

    /// Build a trie from a sequence of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Insert a word, using the word itself as the terminal payload.
    ///
    /// Returns the terminal node. Inserting the same word again is a no-op.
    pub fn insert(&mut self, word: &str) -> NodeId {
        self.insert_keyed(word, word)
    }

    /// Walk (creating nodes on demand) the path spelled by `key` and store
    /// `payload` on its last node.
    ///
    /// The payload of a node is overwritten by a later insert of the same
    /// key (last write wins) but never cleared. An empty key marks the root.
    pub fn insert_keyed(&mut self, key: &str, payload: &str) -> NodeId {
        let mut node = Self::ROOT;
        for c in key.chars() {
            node = self.child_or_insert(node, c);
        }
        let terminal = &mut self.nodes[node as usize];
        if terminal.word.is_none() {
            self.word_count += 1;
        }
        if terminal.word.as_deref() != Some(payload) {
            terminal.word = Some(payload.to_string());
        }
        node
    }

    fn child_or_insert(&mut self, node: NodeId, c: char) -> NodeId {
        if let Some(&child) = self.nodes[node as usize].children.get(&c) {
            return child;
        }
        let child = self.nodes.len() as NodeId;
        self.nodes.push(TrieNode::new(Some(c), Some(node)));
        self.nodes[node as usize].children.insert(c, child);
        self.alphabet.insert(c);
        child
    }

    /// Access a node by identity.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this trie.
    #[inline]
    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id as usize]
    }

    #[inline]
    pub fn has_child(&self, node: NodeId, c: char) -> bool {
        self.nodes[node as usize].children.contains_key(&c)
    }

    /// Child of `node` along edge `c`, if that edge exists.
    #[inline]
    pub fn child(&self, node: NodeId, c: char) -> Option<NodeId> {
        self.nodes[node as usize].children.get(&c).copied()
    }

    /// All `(character, child)` edges leaving `node`, in no particular order.
    pub fn children(&self, node: NodeId) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.nodes[node as usize]
            .children
            .iter()
            .map(|(&c, &id)| (c, id))
    }

    /// Terminal payload of `node`.
    #[inline]
    pub fn word(&self, node: NodeId) -> Option<&str> {
        self.nodes[node as usize].word()
    }

    /// Node reached by following `key` from the root, if the path exists.
    pub fn find(&self, key: &str) -> Option<NodeId> {
        key.chars()
            .try_fold(Self::ROOT, |node, c| self.child(node, c))
    }

    /// Returns `true` if `key` was inserted as a vocabulary entry.
    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some_and(|node| self.node(node).is_terminal())
    }

    /// Number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1 && self.word_count == 0
    }

    /// Number of distinct vocabulary entries.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Characters labelling at least one edge.
    pub fn alphabet(&self) -> impl Iterator<Item = char> + '_ {
        self.alphabet.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trie_has_only_root() {
        let trie = Trie::new();
        assert_eq!(trie.len(), 1);
        assert!(trie.is_empty());
        assert_eq!(trie.node(Trie::ROOT).chr(), None);
        assert_eq!(trie.node(Trie::ROOT).parent(), None);
        assert!(!trie.node(Trie::ROOT).is_terminal());
    }

    #[test]
    fn shared_prefixes_share_nodes() {
        let trie = Trie::from_words(["kitap", "kitaplık", "kapı"]);
        // root + k,i,t,a,p + l,ı,k + a,p,ı
        assert_eq!(trie.len(), 12);
        assert_eq!(trie.word_count(), 3);
        let kitap = trie.find("kitap").unwrap();
        let kitaplik = trie.find("kitaplık").unwrap();
        assert_ne!(kitap, kitaplik);
        assert_eq!(trie.word(kitap), Some("kitap"));
        assert_eq!(trie.word(trie.find("kita").unwrap()), None);
    }

    #[test]
    fn node_ids_are_assigned_in_creation_order() {
        let trie = Trie::from_words(["ab", "ac"]);
        assert_eq!(trie.find("a"), Some(1));
        assert_eq!(trie.find("ab"), Some(2));
        assert_eq!(trie.find("ac"), Some(3));
    }

    #[test]
    fn reinsert_is_idempotent() {
        let mut trie = Trie::new();
        let first = trie.insert("kapı");
        let len = trie.len();
        let second = trie.insert("kapı");
        assert_eq!(first, second);
        assert_eq!(trie.len(), len);
        assert_eq!(trie.word_count(), 1);
    }

    #[test]
    fn keyed_insert_keeps_payload() {
        let mut trie = Trie::new();
        let node = trie.insert_keyed("istanbul", "İstanbul");
        assert_eq!(trie.word(node), Some("İstanbul"));
        assert!(trie.contains("istanbul"));
        assert!(!trie.contains("İstanbul"));
    }

    #[test]
    fn last_payload_wins() {
        let mut trie = Trie::new();
        trie.insert_keyed("ankara", "Ankara");
        let node = trie.insert_keyed("ankara", "ANKARA");
        assert_eq!(trie.word(node), Some("ANKARA"));
        assert_eq!(trie.word_count(), 1);
    }

    #[test]
    fn child_lookup_is_guarded() {
        let trie = Trie::from_words(["ab"]);
        let a = trie.child(Trie::ROOT, 'a').unwrap();
        assert!(trie.has_child(a, 'b'));
        assert!(!trie.has_child(a, 'c'));
        assert_eq!(trie.child(a, 'c'), None);
        assert_eq!(trie.find("abc"), None);
    }

    #[test]
    fn parents_point_back() {
        let trie = Trie::from_words(["ab"]);
        let b = trie.find("ab").unwrap();
        let a = trie.node(b).parent().unwrap();
        assert_eq!(trie.node(a).chr(), Some('a'));
        assert_eq!(trie.node(a).parent(), Some(Trie::ROOT));
    }

    #[test]
    fn children_enumerates_all_edges() {
        let trie = Trie::from_words(["ka", "ke", "ki"]);
        let k = trie.find("k").unwrap();
        let mut edges: Vec<char> = trie.children(k).map(|(c, _)| c).collect();
        edges.sort_unstable();
        assert_eq!(edges, ['a', 'e', 'i']);
    }

    #[test]
    fn empty_word_marks_root() {
        let mut trie = Trie::new();
        let node = trie.insert("");
        assert_eq!(node, Trie::ROOT);
        assert_eq!(trie.word(Trie::ROOT), Some(""));
        assert!(trie.contains(""));
        assert!(!trie.is_empty());
    }

    #[test]
    fn alphabet_collects_edge_characters() {
        let trie = Trie::from_words(["ağaç", "aç"]);
        let mut alphabet: Vec<char> = trie.alphabet().collect();
        alphabet.sort_unstable();
        assert_eq!(alphabet, ['a', 'ç', 'ğ']);
    }

    #[test]
    fn display_renders_sorted_children_and_word() {
        let trie = Trie::from_words(["ka", "kı", "k"]);
        let k = trie.find("k").unwrap();
        assert_eq!(trie.node(k).to_string(), "[k children=['a', 'ı'] word=k]");
        let ka = trie.find("ka").unwrap();
        assert_eq!(trie.node(ka).to_string(), "[a word=ka]");
    }
}
