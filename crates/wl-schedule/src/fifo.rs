//! `FifoQueue`: singly-linked arrival-order queue.
//!
//! Backs a transfer station's wait line.  Nodes live in a slot arena and link
//! forward by index; `enqueue` appends at the tail and both dequeue flavours
//! take from the head, each in `O(1)`.

use tracing::warn;

struct Node<T> {
    value: T,
    next:  Option<usize>,
}

/// A generic FIFO queue.
pub struct FifoQueue<T> {
    slots: Vec<Option<Node<T>>>,
    free:  Vec<usize>,
    head:  Option<usize>,
    tail:  Option<usize>,
    len:   usize,
}

impl<T> Default for FifoQueue<T> {
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

impl<T> FifoQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` at the back.
    pub fn enqueue(&mut self, value: T) {
        let node = Some(Node { value, next: None });
        let i = match self.free.pop() {
            Some(i) => {
                self.slots[i] = node;
                i
            }
            None => {
                self.slots.push(node);
                self.slots.len() - 1
            }
        };
        match self.tail {
            Some(t) => {
                if let Some(tail) = self.slots[t].as_mut() {
                    tail.next = Some(i);
                }
            }
            None => self.head = Some(i),
        }
        self.tail = Some(i);
        self.len += 1;
    }

    /// Remove and return the head.  Logs a warning when the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            warn!("dequeue on empty queue");
            return None;
        }
        self.poll()
    }

    /// Remove and return the head; silently `None` when empty.
    pub fn poll(&mut self) -> Option<T> {
        let h = self.head?;
        let node = self.slots[h].take()?;
        self.free.push(h);
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(node.value)
    }

    pub fn peek(&self) -> Option<&T> {
        self.head
            .and_then(|h| self.slots[h].as_ref())
            .map(|n| &n.value)
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Head-to-tail iterator.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            let node = self.slots[cursor?].as_ref()?;
            cursor = node.next;
            Some(&node.value)
        })
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for FifoQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
