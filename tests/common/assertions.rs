//! Domain-specific assertion macros for logtally harnesses.
//!
//! These add context-rich failure messages that make it clear *which*
//! record broke and what the tally held at the time.

/// Assert a message's aggregated statistics.
///
/// ```rust
/// assert_record!(tally, "Player spawned", 2, "10:00:01", "10:00:05");
/// ```
#[macro_export]
macro_rules! assert_record {
    ($tally:expr, $message:expr, $count:expr, $first:expr, $last:expr) => {{
        let tally: &logtally_core::Tally = &$tally;
        let message: &str = $message;
        match tally.get(message) {
            Some(rec) => {
                let actual = (rec.count, rec.first_time.as_str(), rec.last_time.as_str());
                let expected: (usize, &str, &str) = ($count, $first, $last);
                if actual != expected {
                    panic!(
                        "assert_record! failed for {:?}:\n  expected (count, first, last): {:?}\n  actual:                        {:?}",
                        message, expected, actual
                    );
                }
            }
            None => panic!(
                "assert_record! failed: {:?} not in tally.\n  Messages: {:?}",
                message,
                tally.iter().map(|r| r.message.as_str()).collect::<Vec<_>>()
            ),
        }
    }};
}

/// Assert the exact message order of `tally.ranked()`.
///
/// ```rust
/// assert_ranked!(tally, ["Enemy spawned", "Player spawned"]);
/// ```
#[macro_export]
macro_rules! assert_ranked {
    ($tally:expr, [$($message:expr),* $(,)?]) => {{
        let tally: &logtally_core::Tally = &$tally;
        let actual: Vec<&str> = tally.ranked().iter().map(|r| r.message.as_str()).collect();
        let expected: Vec<&str> = vec![$($message),*];
        pretty_assertions::assert_eq!(actual, expected, "ranked order");
    }};
}
