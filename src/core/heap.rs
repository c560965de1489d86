use std::cmp::Ordering;

/// Three-way comparison used to order heap contents.
pub type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering>;

/// Array-backed binary min-heap ordered by a caller-supplied comparator.
///
/// The heap is content-agnostic: any element type works with any total
/// three-way comparison over it. Elements are stored in complete-tree
/// order in a `Vec` (node `i` has children `2i+1` and `2i+2`), so insert
/// and extract-min are O(log n) worst case with amortized storage reuse.
///
/// Invariant: every node compares less than or equal to both children.
pub struct Heap<T> {
    items: Vec<T>,
    cmp: Comparator<T>,
}

impl<T> Heap<T> {
    /// Create an empty heap ordered by `cmp`.
    pub fn new(cmp: Comparator<T>) -> Self {
        Self {
            items: Vec::new(),
            cmp,
        }
    }

    /// Create an empty heap with room for `capacity` elements.
    pub fn with_capacity(cmp: Comparator<T>, capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Is the heap empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The minimum element, without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Insert `value`, restoring the heap invariant by sift-up.
    pub fn insert(&mut self, value: T) {
        self.items.push(value);
        self.sift_up(self.items.len() - 1);
    }

    /// Remove and return the minimum element, restoring the invariant by
    /// sift-down, or `None` if the heap is empty.
    pub fn extract_min(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let min = self.items.pop();
        self.sift_down(0);
        min
    }

    /// Swap the node at `i` with its parent while it compares less.
    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if (self.cmp)(&self.items[i], &self.items[parent]) == Ordering::Less {
                self.items.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    /// Swap the node at `i` with its smaller child until neither child
    /// compares less.
    fn sift_down(&mut self, mut i: usize) {
        let len = self.items.len();
        loop {
            let mut smallest = i;
            for child in [2 * i + 1, 2 * i + 2] {
                if child < len
                    && (self.cmp)(&self.items[child], &self.items[smallest]) == Ordering::Less
                {
                    smallest = child;
                }
            }
            if smallest == i {
                break;
            }
            self.items.swap(i, smallest);
            i = smallest;
        }
    }
}
