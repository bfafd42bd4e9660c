use crate::entities::Agent;

/// Append-only log of the agent as it was before each step.
///
/// Entry `i` is the agent right before step `i + 1` was taken. Replaying the
/// entries in order from a blank board rebuilds the board exactly, which is
/// how rollbacks work.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    snapshots: Vec<Agent>,
}

impl History {
    pub fn new() -> History {
        History::default()
    }

    pub fn record(&mut self, agent: Agent) {
        self.snapshots.push(agent);
    }

    pub fn get(&self, step: usize) -> Option<Agent> {
        self.snapshots.get(step).copied()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Drops every entry from `steps` onwards.
    pub fn truncate(&mut self, steps: usize) {
        self.snapshots.truncate(steps);
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    /// Moves every recorded position by `(dx, dy)`, following the board
    /// content when it gets re-centered.
    pub fn translate(&mut self, dx: i64, dy: i64) {
        if self.is_empty() || (dx == 0 && dy == 0) {
            return;
        }
        for snapshot in &mut self.snapshots {
            snapshot.translate(dx, dy);
        }
    }
}
