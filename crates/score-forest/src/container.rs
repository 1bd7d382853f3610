use crate::record::Record;

/// Uniform contract shared by the record containers.
///
/// Implemented by [`SplayTree`](crate::SplayTree) and
/// [`MaxHeap`](crate::MaxHeap); callers hold a `Box<dyn ScoreContainer>` and
/// never depend on the concrete type. Every method takes `&mut self` where
/// the container may restructure itself, including `search`.
pub trait ScoreContainer {
    /// Insert every record, in order. A repeated id updates the earlier one.
    fn build(&mut self, records: Vec<Record>);

    /// Insert `record`, or update the score of the record with the same id.
    fn insert(&mut self, record: Record);

    /// Remove the record with `id`. Returns whether one was found.
    fn remove(&mut self, id: &str) -> bool;

    /// One record with exactly `score`, if any. Which one is unspecified when
    /// several share the score.
    fn search(&mut self, score: i64) -> Option<Record>;

    /// Remove and return the highest-scored record.
    fn extract_max(&mut self) -> Option<Record>;

    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
