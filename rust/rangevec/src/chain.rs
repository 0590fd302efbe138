//! Arena storage for the singly-linked chain of intervals.
//!
//! Nodes live in one `Vec` and are addressed by stable [`NodeId`]s; links are
//! indices rather than owning pointers, so unlinking a node and re-linking its
//! neighbours is a pair of index writes that can neither leak nor double-free.
//! Released nodes go onto an intrusive free list (threaded through `next`)
//! and are reused by later allocations.
//!
//! A link position is expressed as `Option<NodeId>`: `None` names the head
//! slot, `Some(id)` names the `next` slot of `id`. This lets splice and unlink
//! treat "insert at the head" and "insert after a node" uniformly.

use std::collections::TryReserveError;

use crate::Interval;

/// Stable address of a node in a [`Chain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node {
    interval: Interval,
    next: Option<NodeId>,
}

#[derive(Debug, Default)]
pub(crate) struct Chain {
    nodes: Vec<Node>,
    head: Option<NodeId>,
    /// Head of the free list; free nodes are linked through `Node::next`.
    free: Option<NodeId>,
    free_count: usize,
    /// Number of live (linked) nodes.
    len: usize,
}

impl Chain {
    pub fn new() -> Chain {
        Chain::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[inline]
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    #[inline]
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].next
    }

    /// Returns the node currently linked at `at` (`None` = head slot).
    #[inline]
    pub fn next_of(&self, at: Option<NodeId>) -> Option<NodeId> {
        match at {
            Some(id) => self.next(id),
            None => self.head,
        }
    }

    #[inline]
    fn set_next_of(&mut self, at: Option<NodeId>, target: Option<NodeId>) {
        match at {
            Some(id) => self.nodes[id.0].next = target,
            None => self.head = target,
        }
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &Interval {
        &self.nodes[id.0].interval
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut Interval {
        &mut self.nodes[id.0].interval
    }

    /// Makes sure the next `additional` calls to [`Chain::alloc`] will not
    /// need to grow the arena.
    ///
    /// Mutating operations call this before touching any link, so an
    /// allocation failure leaves the chain exactly as it was.
    pub fn reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        let needed = additional.saturating_sub(self.free_count);
        if needed > 0 {
            self.nodes.try_reserve(needed)?;
        }
        Ok(())
    }

    /// Allocates an unlinked node holding `interval`.
    ///
    /// Reuses a free node if one is available; otherwise pushes onto the
    /// arena, which does not reallocate after a matching [`Chain::reserve`].
    fn alloc(&mut self, interval: Interval) -> NodeId {
        match self.free {
            Some(id) => {
                let node = &mut self.nodes[id.0];
                self.free = node.next;
                self.free_count -= 1;
                node.interval = interval;
                node.next = None;
                id
            }
            None => {
                let id = NodeId(self.nodes.len());
                self.nodes.push(Node {
                    interval,
                    next: None,
                });
                id
            }
        }
    }

    fn release(&mut self, id: NodeId) {
        self.nodes[id.0].next = self.free;
        self.free = Some(id);
        self.free_count += 1;
    }

    /// Allocates a node for `interval` and links it at `at`, in front of
    /// whatever was linked there before.
    pub fn insert_after(&mut self, at: Option<NodeId>, interval: Interval) -> NodeId {
        let id = self.alloc(interval);
        let successor = self.next_of(at);
        self.nodes[id.0].next = successor;
        self.set_next_of(at, Some(id));
        self.len += 1;
        id
    }

    /// Unlinks the node linked at `at`, frees it and returns its interval.
    pub fn remove_after(&mut self, at: Option<NodeId>) -> Option<Interval> {
        let id = self.next_of(at)?;
        let interval = self.nodes[id.0].interval;
        let successor = self.next(id);
        self.set_next_of(at, successor);
        self.release(id);
        self.len -= 1;
        Some(interval)
    }

    /// Splits node `id` at `position` into `[begin, position)` and
    /// `[position, end)`, both carrying the original value. Returns the id of
    /// the trailing half.
    pub fn split_at(&mut self, id: NodeId, position: i64) -> NodeId {
        let interval = *self.get(id);
        debug_assert!(interval.begin < position && position < interval.end);
        self.get_mut(id).end = position;
        self.insert_after(
            Some(id),
            Interval::new(position..interval.end, interval.value),
        )
    }

    /// Drops every node at once.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.free = None;
        self.free_count = 0;
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            chain: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Deep-copies the live nodes into a compact arena, preserving order.
    pub fn try_clone(&self) -> Result<Chain, TryReserveError> {
        let mut nodes = Vec::new();
        nodes.try_reserve_exact(self.len)?;
        Ok(self.compact_into(nodes))
    }

    fn compact_into(&self, mut nodes: Vec<Node>) -> Chain {
        let len = self.len;
        for (i, interval) in self.iter().enumerate() {
            nodes.push(Node {
                interval: *interval,
                next: (i + 1 < len).then_some(NodeId(i + 1)),
            });
        }
        Chain {
            nodes,
            head: (len > 0).then_some(NodeId(0)),
            free: None,
            free_count: 0,
            len,
        }
    }

    /// Builds a compact chain from intervals that already satisfy the list
    /// invariants.
    pub fn try_from_sorted(intervals: Vec<Interval>) -> Result<Chain, TryReserveError> {
        let mut nodes = Vec::new();
        nodes.try_reserve_exact(intervals.len())?;
        let len = intervals.len();
        nodes.extend(intervals.into_iter().enumerate().map(|(i, interval)| Node {
            interval,
            next: (i + 1 < len).then_some(NodeId(i + 1)),
        }));
        Ok(Chain {
            nodes,
            head: (len > 0).then_some(NodeId(0)),
            free: None,
            free_count: 0,
            len,
        })
    }
}

impl Clone for Chain {
    fn clone(&self) -> Chain {
        self.compact_into(Vec::with_capacity(self.len))
    }
}

/// Iterator over the stored intervals of a list, in ascending order.
#[derive(Clone)]
pub struct Iter<'a> {
    chain: &'a Chain,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Interval;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        self.cursor = self.chain.next(id);
        self.remaining -= 1;
        Some(self.chain.get(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
