//! Index-keyed parallel map over a pool of worker threads.

use crossbeam_channel::unbounded;

/// Apply `f` to every index in `0..count` across `threads` workers and return
/// the outputs in index order.
///
/// Indices are distributed through a work queue; each produces exactly one
/// output slot, and no two tasks share any mutable state. The call is a
/// barrier: it returns only after every index has completed. Scheduling order
/// is unspecified, output order is not.
///
/// A panic inside `f` propagates to the caller once the pool has wound down.
pub fn parallel_map<T, F>(count: usize, threads: usize, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync,
{
    if count == 0 {
        return Vec::new();
    }

    let (task_tx, task_rx) = unbounded::<usize>();
    let (result_tx, result_rx) = unbounded::<(usize, T)>();
    for index in 0..count {
        let _ = task_tx.send(index);
    }
    // Close the queue so workers exit once it drains.
    drop(task_tx);

    let threads = threads.clamp(1, count);
    std::thread::scope(|scope| {
        for _ in 0..threads {
            let task_rx = task_rx.clone();
            let result_tx = result_tx.clone();
            let f = &f;
            std::thread::Builder::new()
                .name("chunk-build-worker".into())
                .spawn_scoped(scope, move || {
                    while let Ok(index) = task_rx.recv() {
                        let _ = result_tx.send((index, f(index)));
                    }
                })
                .expect("Failed to spawn chunk build worker thread");
        }
    });
    drop(result_tx);

    let mut slots: Vec<Option<T>> = (0..count).map(|_| None).collect();
    while let Ok((index, value)) = result_rx.recv() {
        debug_assert!(slots[index].is_none(), "index {index} produced twice");
        slots[index] = Some(value);
    }

    // The scope join is the barrier: every index was drained and answered.
    slots
        .into_iter()
        .map(|slot| slot.expect("worker pool completed every index"))
        .collect()
}
