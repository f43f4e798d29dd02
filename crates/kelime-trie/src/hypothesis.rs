// Search states and the per-call hypothesis arena
//
// A hypothesis is one partial alignment between the input and a walk
// through the trie. Hypotheses are stored in an arena for the duration of a
// single decode call and refer to their parent by handle, forming a tree
// rooted at the initial hypothesis.

use std::fmt;

use crate::trie::{NodeId, Trie};

/// Edit operation that produced a hypothesis from its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Input character matched a trie edge.
    NoError,
    /// Trie edge taken without consuming input.
    Insertion,
    /// Input character consumed without moving in the trie.
    Deletion,
    /// Input character read as a different trie edge.
    Substitution,
    /// Two adjacent input characters read in swapped order.
    Transposition,
    /// The initial hypothesis.
    NotApplicable,
}

impl Operation {
    /// Short tag used in diagnostics.
    pub fn tag(self) -> &'static str {
        match self {
            Operation::NoError => "NE",
            Operation::Insertion => "INS",
            Operation::Deletion => "DEL",
            Operation::Substitution => "SUB",
            Operation::Transposition => "TR",
            Operation::NotApplicable => "N/A",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::NoError => "no-error",
            Operation::Insertion => "insertion",
            Operation::Deletion => "deletion",
            Operation::Substitution => "substitution",
            Operation::Transposition => "transposition",
            Operation::NotApplicable => "n/a",
        };
        f.write_str(name)
    }
}

/// Handle of a hypothesis in its arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HypothesisId(u32);

/// One search state.
#[derive(Debug, Clone, Copy)]
pub struct Hypothesis {
    /// Current trie node.
    pub node: NodeId,
    /// Parent state; `None` only for the initial hypothesis.
    pub parent: Option<HypothesisId>,
    /// Accumulated penalty.
    pub penalty: f32,
    /// Number of input characters consumed. The next input character to
    /// read is `input[consumed]`. May exceed the input length after
    /// trailing deletions.
    pub consumed: usize,
    pub operation: Operation,
}

/// Equivalence key: two hypotheses agreeing on node, consumed input and
/// penalty are interchangeable for the rest of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateKey {
    node: NodeId,
    consumed: usize,
    penalty_bits: u32,
}

impl Hypothesis {
    /// The initial hypothesis at `node` with nothing consumed.
    pub fn initial(node: NodeId) -> Self {
        Self {
            node,
            parent: None,
            penalty: 0.0,
            consumed: 0,
            operation: Operation::NotApplicable,
        }
    }

    /// Successor at `node` with `advance` more input characters consumed.
    #[inline]
    pub fn successor(
        &self,
        id: HypothesisId,
        node: NodeId,
        advance: usize,
        cost: f32,
        operation: Operation,
    ) -> Self {
        Self {
            node,
            parent: Some(id),
            penalty: self.penalty + cost,
            consumed: self.consumed + advance,
            operation,
        }
    }

    #[inline]
    pub fn key(&self) -> StateKey {
        StateKey {
            node: self.node,
            consumed: self.consumed,
            // Penalties are sums of non-negative costs, so -0.0 never occurs
            // and bit equality coincides with numeric equality.
            penalty_bits: self.penalty.to_bits(),
        }
    }
}

/// Per-call storage for hypotheses.
#[derive(Debug, Default)]
pub struct HypothesisArena {
    items: Vec<Hypothesis>,
}

impl HypothesisArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, hypothesis: Hypothesis) -> HypothesisId {
        let id = HypothesisId(self.items.len() as u32);
        self.items.push(hypothesis);
        id
    }

    #[inline]
    pub fn get(&self, id: HypothesisId) -> &Hypothesis {
        &self.items[id.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate from `id` up to and including the initial hypothesis.
    pub fn ancestry(&self, id: HypothesisId) -> impl Iterator<Item = &Hypothesis> + '_ {
        let mut next = Some(id);
        std::iter::from_fn(move || {
            let h = self.get(next?);
            next = h.parent;
            Some(h)
        })
    }

    /// Rebuild the trie characters matched along the chain ending at `id`.
    ///
    /// Steps that did not move in the trie (deletions) contribute nothing;
    /// a transposition contributes both characters it stepped over.
    pub fn backtrack(&self, id: HypothesisId, trie: &Trie) -> String {
        let mut reversed = Vec::new();
        for h in self.ancestry(id) {
            let Some(parent) = h.parent else { break };
            if self.get(parent).node == h.node {
                continue;
            }
            let node = trie.node(h.node);
            reversed.extend(node.chr());
            if h.operation == Operation::Transposition {
                if let Some(middle) = node.parent() {
                    reversed.extend(trie.node(middle).chr());
                }
            }
        }
        reversed.iter().rev().collect()
    }

    /// Operations applied from the initial hypothesis to `id`, in order.
    pub fn operations(&self, id: HypothesisId) -> Vec<Operation> {
        let mut ops: Vec<Operation> = self
            .ancestry(id)
            .filter(|h| h.parent.is_some())
            .map(|h| h.operation)
            .collect();
        ops.reverse();
        ops
    }
}
