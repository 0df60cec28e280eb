/// Collects the indexes a [`crate::LayoutManager`] wants realized for a viewport.
///
/// Layouts push indexes without allocating; the emitter enforces the contract:
/// - Out-of-bounds indexes are ignored (and debug-asserted).
/// - Duplicates are ignored.
/// - Out-of-order indexes are ignored (and debug-asserted).
pub struct IndexEmitter<'a> {
    count: usize,
    last: Option<usize>,
    emit: &'a mut dyn FnMut(usize),
}

impl<'a> IndexEmitter<'a> {
    pub fn new(count: usize, emit: &'a mut dyn FnMut(usize)) -> Self {
        Self {
            count,
            last: None,
            emit,
        }
    }

    /// Number of items in the data source; emitted indexes must stay below it.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn emit(&mut self, index: usize) {
        if index >= self.count {
            rwarn!(index, count = self.count, "IndexEmitter: out-of-bounds index");
            debug_assert!(
                index < self.count,
                "IndexEmitter: out-of-bounds index (i={index}, count={})",
                self.count
            );
            return;
        }

        if let Some(prev) = self.last {
            if index == prev {
                return;
            }
            if index < prev {
                rwarn!(
                    prev,
                    next = index,
                    "IndexEmitter: indexes must be emitted in ascending order"
                );
                debug_assert!(
                    index > prev,
                    "IndexEmitter: indexes must be emitted in ascending order (prev={prev}, next={index})"
                );
                return;
            }
        }

        self.last = Some(index);
        (self.emit)(index);
    }

    /// Emits `start..end`, clamped to the item count.
    pub fn emit_range(&mut self, start: usize, end: usize) {
        let end = end.min(self.count);
        for i in start..end {
            self.emit(i);
        }
    }
}
