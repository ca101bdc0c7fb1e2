//! Tests for the suspension points of both queues

#[cfg(test)]
mod tests {
    use crate::queue::{BoundedQueue, UnboundedQueue};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::thread;
    use std::time::Duration;

    const SETTLE: Duration = Duration::from_millis(50);

    #[test]
    fn test_enqueue_on_full_capacity_one_queue_waits_for_dequeue() {
        let queue = BoundedQueue::new(1).unwrap();
        let second_enqueued = AtomicBool::new(false);

        queue.enqueue_blocking("first").unwrap();

        thread::scope(|scope| {
            scope.spawn(|| {
                queue.enqueue_blocking("second").unwrap();
                second_enqueued.store(true, Ordering::SeqCst);
            });

            thread::sleep(SETTLE);
            assert!(
                !second_enqueued.load(Ordering::SeqCst),
                "enqueue into a full queue must block"
            );
            assert_eq!(queue.len().unwrap(), 1);

            assert_eq!(queue.dequeue_blocking().unwrap(), "first");
        });

        assert!(second_enqueued.load(Ordering::SeqCst));
        assert_eq!(queue.dequeue_blocking().unwrap(), "second");
    }

    #[test]
    fn test_nonblocking_dequeue_releases_a_blocked_writer() {
        let queue = BoundedQueue::new(1).unwrap();
        queue.enqueue_blocking(1).unwrap();

        thread::scope(|scope| {
            let writer = scope.spawn(|| queue.enqueue_blocking(2));

            thread::sleep(SETTLE);
            assert_eq!(queue.dequeue_nonblocking().unwrap(), Some(1));
            writer.join().unwrap().unwrap();
        });

        assert_eq!(queue.dequeue_nonblocking().unwrap(), Some(2));
    }

    #[test]
    fn test_blocking_dequeue_waits_for_a_writer() {
        let queue = BoundedQueue::new(3).unwrap();

        thread::scope(|scope| {
            let reader = scope.spawn(|| queue.dequeue_blocking());

            thread::sleep(SETTLE);
            assert!(!reader.is_finished(), "dequeue on empty queue must block");

            queue.enqueue_blocking(42).unwrap();
            assert_eq!(reader.join().unwrap().unwrap(), 42);
        });
    }

    #[test]
    fn test_unbounded_dequeue_waits_for_a_writer() {
        let queue = UnboundedQueue::new();

        thread::scope(|scope| {
            let reader = scope.spawn(|| queue.dequeue_blocking());

            thread::sleep(SETTLE);
            assert!(!reader.is_finished(), "dequeue on empty queue must block");

            queue.enqueue("late").unwrap();
            assert_eq!(reader.join().unwrap().unwrap(), "late");
        });
        assert!(queue.is_empty().unwrap());
    }
}
