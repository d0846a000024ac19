use std::collections::VecDeque;
use std::fmt::Debug;

/// Keeps the last `capacity` items pushed; older ones fall off the front.
#[derive(Debug)]
pub struct LimitedList<T>
    where
        T: Clone + Debug {
    list: VecDeque<T>,
    capacity: usize,
}

impl<T> LimitedList<T> where
    T: Clone + Debug, {
    pub fn new(capacity: usize) -> Self {
        Self {
            list: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn add(&mut self, item: T) {
        if self.capacity == 0 {
            return;
        }
        if self.list.len() == self.capacity {
            self.list.pop_front();
        }
        self.list.push_back(item);
    }

    /// Most recently added first.
    pub fn newest_first(&self) -> Vec<T> {
        self.list.iter().rev().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.list.len() == self.capacity
    }
}
