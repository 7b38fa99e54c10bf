use crate::engine::Sortable;
use crate::error::Result;
use crate::sort::{SortEvent, SortOutcome, SortRun};
use crate::trace::TraceValue;

/// Quick sort with the Lomuto partition scheme (pivot = last element)
///
/// Left partition is sorted before the right one. Swaps are only recorded
/// when two distinct positions are exchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl Sortable for QuickSort {
    fn name(&self) -> &'static str {
        "quick"
    }

    fn sort<T: TraceValue>(&self, input: &[T]) -> Result<SortOutcome<T>> {
        let mut run = SortRun::start(input, "Starting Quick Sort");
        let len = run.array.len();
        if len > 1 {
            quick_sort(&mut run, 0, len - 1);
        }
        run.complete(self.name(), "Quick Sort completed!")
    }
}

fn quick_sort<T: TraceValue>(run: &mut SortRun<T>, low: usize, high: usize) {
    if low >= high {
        return;
    }
    run.emit(
        SortEvent::Subarray { low, high },
        format!("Sorting subarray from index {} to {}", low, high),
    );

    let pivot_index = partition(run, low, high);

    if pivot_index > low {
        quick_sort(run, low, pivot_index - 1);
    }
    quick_sort(run, pivot_index + 1, high);
}

fn partition<T: TraceValue>(run: &mut SortRun<T>, low: usize, high: usize) -> usize {
    let pivot = run.array[high].clone();
    run.emit(
        SortEvent::PivotSelect {
            pivot_index: high,
            pivot: pivot.clone(),
        },
        format!("Selected pivot: {} at index {}", pivot, high),
    );

    // Next slot for an element smaller than the pivot
    let mut boundary = low;

    for j in low..high {
        run.stats.comparisons += 1;
        let message = format!("Comparing {} with pivot {}", run.array[j], pivot);
        run.emit(
            SortEvent::Compare {
                comparing: [j, high],
                key: None,
                position: None,
            },
            message,
        );

        if run.array[j] < pivot {
            if boundary != j {
                run.array.swap(boundary, j);
                run.stats.swaps += 1;
                let message = format!("Swapped {} and {}", run.array[boundary], run.array[j]);
                run.emit(
                    SortEvent::Swap {
                        swapping: [boundary, j],
                    },
                    message,
                );
            }
            boundary += 1;
        }
    }

    if boundary != high {
        run.array.swap(boundary, high);
        run.stats.swaps += 1;
        run.emit(
            SortEvent::PivotPlace {
                swapping: [boundary, high],
                pivot_final_index: boundary,
            },
            format!("Placed pivot {} in correct position {}", pivot, boundary),
        );
    }

    boundary
}
