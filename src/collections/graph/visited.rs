/// The vertices a single traversal has already reached.
///
/// A set is created by each traversal call and dropped when it returns, so two traversals of the
/// same graph never observe each other's progress.
#[derive(Debug, Clone)]
pub(crate) struct VisitedSet {
    marks: Box<[bool]>,
}

impl VisitedSet {
    pub fn new(vertex_count: usize) -> VisitedSet {
        VisitedSet {
            marks: vec![false; vertex_count].into_boxed_slice(),
        }
    }

    /// Marks `vertex` as visited, returning true if it had not been visited before.
    pub fn insert(&mut self, vertex: usize) -> bool {
        !std::mem::replace(&mut self.marks[vertex], true)
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.marks[vertex]
    }
}
