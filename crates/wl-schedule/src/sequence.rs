//! `OrderedSeq`: doubly-linked sequence with positional and ordered insert.
//!
//! # Layout
//!
//! Nodes live in a slot arena (`Vec<Option<Node<T>>>`) and link to each other
//! by slot index, so the list is fully safe Rust and freed slots are reused
//! through a free list.  Position `i` is reached by walking from whichever
//! end is closer: `O(min(i, len - i))`.
//!
//! # Ordered insert and ties
//!
//! [`insert_sorted_by`][OrderedSeq::insert_sorted_by] is the backbone of the
//! event queue and its tie behaviour is load-bearing:
//!
//! 1. empty, or `new <= front`  → insert at the front;
//! 2. `new >= back`             → insert at the back;
//! 3. otherwise walk from the front past every node that `new` is strictly
//!    greater than and insert before the first node that it is not.
//!
//! Rules 1 and 3 put a newcomer *before* the earliest equal element (last in,
//! first positioned).  Rule 2 wins when the newcomer ties with the back, in
//! which case it lands *after* it.

use std::cmp::Ordering;

use crate::{ScheduleError, ScheduleResult};

struct Node<T> {
    value: T,
    prev:  Option<usize>,
    next:  Option<usize>,
}

/// A generic doubly-linked sequence.
pub struct OrderedSeq<T> {
    slots: Vec<Option<Node<T>>>,
    free:  Vec<usize>,
    head:  Option<usize>,
    tail:  Option<usize>,
    len:   usize,
}

impl<T> Default for OrderedSeq<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free:  Vec::new(),
            head:  None,
            tail:  None,
            len:   0,
        }
    }
}

impl<T> OrderedSeq<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|i| &self.node(i).value)
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(|i| &self.node(i).value)
    }

    /// Element at `pos`, walking from the nearer end.
    pub fn get(&self, pos: usize) -> Option<&T> {
        self.slot_at(pos).map(|i| &self.node(i).value)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { seq: self, cursor: self.head, remaining: self.len }
    }

    /// Insert `value` so that it ends up at position `pos`.
    ///
    /// `pos == len()` appends.  Anything larger is rejected.
    pub fn insert(&mut self, pos: usize, value: T) -> ScheduleResult<()> {
        if pos > self.len {
            return Err(ScheduleError::IndexOutOfRange { index: pos, len: self.len });
        }
        if pos == 0 {
            self.push_front(value);
        } else if pos == self.len {
            self.push_back(value);
        } else {
            // pos < len, so the slot exists.
            let at = self.slot_at(pos).unwrap_or_else(|| unreachable!("pos {pos} < len"));
            self.link_before(at, value);
        }
        Ok(())
    }

    /// Insert `value` according to the three-way comparator `cmp(new, existing)`.
    ///
    /// See the module docs for the tie rules.
    pub fn insert_sorted_by<F>(&mut self, value: T, mut cmp: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let (Some(head), Some(tail)) = (self.head, self.tail) else {
            self.push_front(value);
            return;
        };
        if cmp(&value, &self.node(head).value) != Ordering::Greater {
            self.push_front(value);
            return;
        }
        if cmp(&value, &self.node(tail).value) != Ordering::Less {
            self.push_back(value);
            return;
        }

        let mut cursor = Some(head);
        while let Some(i) = cursor {
            if cmp(&value, &self.node(i).value) != Ordering::Greater {
                break;
            }
            cursor = self.node(i).next;
        }
        match cursor {
            Some(at) => self.link_before(at, value),
            None => self.push_back(value),
        }
    }

    /// Remove and return the element at `pos`.
    pub fn remove(&mut self, pos: usize) -> ScheduleResult<T> {
        match self.slot_at(pos) {
            Some(i) => Ok(self.unlink(i)),
            None => Err(ScheduleError::IndexOutOfRange { index: pos, len: self.len }),
        }
    }

    /// Remove the first element for which `pred` holds.
    pub fn remove_first_by<P>(&mut self, mut pred: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut cursor = self.head;
        while let Some(i) = cursor {
            if pred(&self.node(i).value) {
                return Some(self.unlink(i));
            }
            cursor = self.node(i).next;
        }
        None
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|i| self.unlink(i))
    }

    pub fn push_front(&mut self, value: T) {
        let i = self.alloc(value, None, self.head);
        match self.head {
            Some(h) => self.node_mut(h).prev = Some(i),
            None => self.tail = Some(i),
        }
        self.head = Some(i);
        self.len += 1;
    }

    pub fn push_back(&mut self, value: T) {
        let i = self.alloc(value, self.tail, None);
        match self.tail {
            Some(t) => self.node_mut(t).next = Some(i),
            None => self.head = Some(i),
        }
        self.tail = Some(i);
        self.len += 1;
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn node(&self, i: usize) -> &Node<T> {
        match &self.slots[i] {
            Some(n) => n,
            None => unreachable!("link to vacant slot {i}"),
        }
    }

    fn node_mut(&mut self, i: usize) -> &mut Node<T> {
        match &mut self.slots[i] {
            Some(n) => n,
            None => unreachable!("link to vacant slot {i}"),
        }
    }

    fn alloc(&mut self, value: T, prev: Option<usize>, next: Option<usize>) -> usize {
        let node = Some(Node { value, prev, next });
        match self.free.pop() {
            Some(i) => {
                self.slots[i] = node;
                i
            }
            None => {
                self.slots.push(node);
                self.slots.len() - 1
            }
        }
    }

    /// Slot index of position `pos`, walking from the nearer end.
    fn slot_at(&self, pos: usize) -> Option<usize> {
        if pos >= self.len {
            return None;
        }
        if pos < self.len / 2 {
            let mut cursor = self.head;
            for _ in 0..pos {
                cursor = cursor.and_then(|i| self.node(i).next);
            }
            cursor
        } else {
            let mut cursor = self.tail;
            for _ in 0..(self.len - 1 - pos) {
                cursor = cursor.and_then(|i| self.node(i).prev);
            }
            cursor
        }
    }

    fn link_before(&mut self, at: usize, value: T) {
        let prev = self.node(at).prev;
        let i = self.alloc(value, prev, Some(at));
        self.node_mut(at).prev = Some(i);
        match prev {
            Some(p) => self.node_mut(p).next = Some(i),
            None => self.head = Some(i),
        }
        self.len += 1;
    }

    fn unlink(&mut self, i: usize) -> T {
        let Some(node) = self.slots[i].take() else {
            unreachable!("unlink of vacant slot {i}");
        };
        self.free.push(i);
        match node.prev {
            Some(p) => self.node_mut(p).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(n) => self.node_mut(n).prev = node.prev,
            None => self.tail = node.prev,
        }
        self.len -= 1;
        node.value
    }
}

impl<T: PartialEq> OrderedSeq<T> {
    /// Remove the first element equal to `value`.  Reports whether one was found.
    pub fn remove_first(&mut self, value: &T) -> bool {
        self.remove_first_by(|v| v == value).is_some()
    }

    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for OrderedSeq<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Front-to-back iterator over an [`OrderedSeq`].
pub struct Iter<'a, T> {
    seq:       &'a OrderedSeq<T>,
    cursor:    Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let i = self.cursor?;
        let node = self.seq.node(i);
        self.cursor = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> IntoIterator for &'a OrderedSeq<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
