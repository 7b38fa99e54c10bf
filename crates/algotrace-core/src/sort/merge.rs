use crate::engine::Sortable;
use crate::error::Result;
use crate::sort::{SortEvent, SortOutcome, SortRun};
use crate::trace::TraceValue;

/// Top-down merge sort
///
/// Comparisons and swaps are only counted while both runs still have
/// elements; draining the leftover run emits `copy` steps that count as
/// neither.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl Sortable for MergeSort {
    fn name(&self) -> &'static str {
        "merge"
    }

    fn sort<T: TraceValue>(&self, input: &[T]) -> Result<SortOutcome<T>> {
        let mut run = SortRun::start(input, "Starting Merge Sort");
        let len = run.array.len();
        if len > 1 {
            merge_sort(&mut run, 0, len - 1);
        }
        run.complete(self.name(), "Merge Sort completed!")
    }
}

fn merge_sort<T: TraceValue>(run: &mut SortRun<T>, left: usize, right: usize) {
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;
    run.emit(
        SortEvent::Divide { left, mid, right },
        format!("Dividing array from index {} to {}", left, right),
    );

    merge_sort(run, left, mid);
    merge_sort(run, mid + 1, right);
    merge(run, left, mid, right);
}

fn merge<T: TraceValue>(run: &mut SortRun<T>, left: usize, mid: usize, right: usize) {
    let left_run = run.array[left..=mid].to_vec();
    let right_run = run.array[mid + 1..=right].to_vec();

    run.emit(
        SortEvent::MergeStart {
            left,
            mid,
            right,
            left_run: left_run.clone(),
            right_run: right_run.clone(),
        },
        format!(
            "Merging arrays from {} to {} and {} to {}",
            left,
            mid,
            mid + 1,
            right
        ),
    );

    let (mut i, mut j, mut k) = (0, 0, left);

    while i < left_run.len() && j < right_run.len() {
        run.stats.comparisons += 1;
        // Indices refer to the array as it was at `merge_start`
        let comparing = [left + i, mid + 1 + j];
        let placed = if left_run[i] <= right_run[j] {
            i += 1;
            left_run[i - 1].clone()
        } else {
            j += 1;
            right_run[j - 1].clone()
        };
        run.array[k] = placed.clone();
        run.stats.swaps += 1;
        run.emit(
            SortEvent::Compare {
                comparing,
                key: None,
                position: Some(k),
            },
            format!(
                "Comparing and placing element {} at position {}",
                placed, k
            ),
        );
        k += 1;
    }

    for value in left_run[i..].iter().chain(right_run[j..].iter()) {
        run.array[k] = value.clone();
        run.emit(
            SortEvent::Copy {
                position: k,
                value: value.clone(),
            },
            format!("Copying remaining element {} to position {}", value, k),
        );
        k += 1;
    }

    run.emit(
        SortEvent::MergeComplete { left, right },
        format!("Completed merging from {} to {}", left, right),
    );
}
