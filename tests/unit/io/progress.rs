//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use std::thread;
    use texsynth::io::progress::BatchProgress;

    // Tests completions are counted
    // Verified by incrementing by two
    #[test]
    fn test_complete_counts() {
        let progress = BatchProgress::hidden(3);
        progress.complete_one();
        progress.complete_one();
        assert_eq!(progress.completed(), 2);
        progress.finish();
    }

    // Tests a hidden tracker still knows the batch size
    // Verified by building the hidden bar without a length
    #[test]
    fn test_hidden_total() {
        let progress = BatchProgress::hidden(5);
        assert_eq!(progress.total(), 5);
        assert_eq!(progress.completed(), 0);
    }

    // Tests completions from several threads are all recorded
    // Verified by tracking completions in a non-shared counter
    #[test]
    fn test_concurrent_completion() {
        let progress = BatchProgress::hidden(8);
        thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| progress.complete_one());
            }
        });
        assert_eq!(progress.completed(), 8);
    }

    // Tests the visible bar can be driven and cleared
    // Verified by panicking on an empty prompt
    #[test]
    fn test_visible_bar_lifecycle() {
        let progress = BatchProgress::new(1, "");
        progress.complete_one();
        assert_eq!(progress.completed(), 1);
        progress.finish();
    }
}
