use uuid::Uuid;

/// Root entity of an aggregate.
///
/// All changes to the aggregate go through the root, which keeps its own
/// invariants. The identity is assigned once and never changes.
pub trait AggregateRoot {
    fn id(&self) -> Uuid;
}
