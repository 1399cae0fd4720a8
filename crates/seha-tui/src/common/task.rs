/// Identifier for one scheduled simulated-latency task.
///
/// Monotonically increasing; a completion event is applied only when its id
/// still matches the pending transition, so a superseded task can never win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}
