use crate::engine::Sortable;
use crate::error::Result;
use crate::sort::{SortEvent, SortOutcome, SortRun};
use crate::trace::TraceValue;

/// Insertion sort that records every comparison and shift
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl Sortable for InsertionSort {
    fn name(&self) -> &'static str {
        "insertion"
    }

    fn sort<T: TraceValue>(&self, input: &[T]) -> Result<SortOutcome<T>> {
        let mut run = SortRun::start(
            input,
            "Starting Insertion Sort - first element is considered sorted",
        );

        for i in 1..run.array.len() {
            let key = run.array[i].clone();
            run.emit(
                SortEvent::SelectKey {
                    key_index: i,
                    key: key.clone(),
                },
                format!("Selected key: {} at index {}", key, i),
            );

            // `slot` is where the key lands; its predecessor is compared next
            let mut slot = i;
            while slot > 0 {
                let prev = slot - 1;
                run.stats.comparisons += 1;
                let message = format!("Comparing {} with key {}", run.array[prev], key);
                run.emit(
                    SortEvent::Compare {
                        comparing: [prev, i],
                        key: Some(key.clone()),
                        position: None,
                    },
                    message,
                );

                if run.array[prev] <= key {
                    break;
                }

                run.array[slot] = run.array[prev].clone();
                run.stats.swaps += 1;
                let message = format!(
                    "Shifted {} from position {} to {}",
                    run.array[slot], prev, slot
                );
                run.emit(
                    SortEvent::Shift {
                        from: prev,
                        to: slot,
                    },
                    message,
                );
                slot = prev;
            }

            if slot != i {
                run.array[slot] = key.clone();
                run.emit(
                    SortEvent::Insert {
                        position: slot,
                        key: key.clone(),
                    },
                    format!("Inserted key {} at position {}", key, slot),
                );
            }

            run.emit(
                SortEvent::IterationComplete { sorted_until: i },
                format!(
                    "Completed iteration {}. Elements 0 to {} are now sorted",
                    i, i
                ),
            );
        }

        run.complete(self.name(), "Insertion Sort completed!")
    }
}
