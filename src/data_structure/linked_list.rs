use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListError {
    #[error("cannot build a list from an empty slice")]
    EmptyInput,
}

pub struct Node {
    value: i32,
    next: Option<Box<Node>>,
}

impl Node {
    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn next(&self) -> Option<&Node> {
        self.next.as_deref()
    }
}

pub struct LinkedList {
    head: Option<Box<Node>>,
    size: usize,
}

impl LinkedList {
    pub fn new() -> Self {
        LinkedList {
            head: None,
            size: 0,
        }
    }

    /// Build a list holding `arr`'s elements in the same order.
    ///
    /// # Errors
    ///
    /// Returns `ListError::EmptyInput` when `arr` is empty; no partial
    /// list is constructed.
    pub fn from_slice(arr: &[i32]) -> Result<LinkedList, ListError> {
        let (&first, rest) = arr.split_first().ok_or(ListError::EmptyInput)?;

        let mut head = Box::new(Node { value: first, next: None });
        let mut mover = &mut head;

        for &value in rest {
            mover = mover.next.insert(Box::new(Node { value, next: None }));
        }

        Ok(LinkedList {
            head: Some(head),
            size: arr.len(),
        })
    }

    pub fn head(&self) -> Option<&Node> {
        self.head.as_deref()
    }

    /// Walk the chain and return the last node, or `None` for an empty
    /// list. Callers must check the `Option` before reading the value.
    pub fn tail(&self) -> Option<&Node> {
        let mut temp = self.head.as_deref()?;
        while let Some(next) = temp.next.as_deref() {
            temp = next;
        }
        Some(temp)
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter { next: self.head.as_deref() }
    }

    pub fn to_vec(&self) -> Vec<i32> {
        self.iter().collect()
    }
}

impl Default for LinkedList {
    fn default() -> Self {
        LinkedList::new()
    }
}

pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node.value
        })
    }
}
