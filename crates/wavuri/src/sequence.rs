//! Linked amplitude cursor.
//!
//! [`AmplitudeList`] is a singly linked list of samples: each node holds one
//! value and an optional continuation, and the missing continuation marks the
//! end. The encoder itself accepts any `IntoIterator<Item = f64>`; this type
//! exists for callers that build their samples front to back as a cons list.

use std::fmt;

struct Node {
    value: f64,
    next: Option<Box<Node>>,
}

/// Singly linked, forward-only sequence of amplitudes.
#[derive(Default)]
pub struct AmplitudeList {
    head: Option<Box<Node>>,
    len: usize,
}

impl AmplitudeList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends `value` to `tail`.
    pub fn cons(value: f64, mut tail: AmplitudeList) -> Self {
        let next = tail.head.take();
        let len = tail.len + 1;
        Self {
            head: Some(Box::new(Node { value, next })),
            len,
        }
    }

    /// Value at the front of the list.
    pub fn head(&self) -> Option<f64> {
        self.head.as_ref().map(|node| node.value)
    }

    /// Removes and returns the front value.
    pub fn pop_front(&mut self) -> Option<f64> {
        self.head.take().map(|mut node| {
            self.head = node.next.take();
            self.len -= 1;
            node.value
        })
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list has no nodes.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Borrowing iterator over the values.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }
}

// Long lists would overflow the stack with the recursive default drop.
impl Drop for AmplitudeList {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl Clone for AmplitudeList {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl PartialEq for AmplitudeList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl fmt::Debug for AmplitudeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl FromIterator<f64> for AmplitudeList {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut head = None;
        let mut len = 0;
        let mut cursor = &mut head;

        for value in iter {
            cursor = &mut cursor.insert(Box::new(Node { value, next: None })).next;
            len += 1;
        }

        Self { head, len }
    }
}

/// Borrowing iterator returned by [`AmplitudeList::iter`].
pub struct Iter<'a> {
    next: Option<&'a Node>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// Consuming iterator over an [`AmplitudeList`].
pub struct IntoIter(AmplitudeList);

impl Iterator for IntoIter {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl ExactSizeIterator for IntoIter {}

impl IntoIterator for AmplitudeList {
    type Item = f64;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter(self)
    }
}

impl<'a> IntoIterator for &'a AmplitudeList {
    type Item = f64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
