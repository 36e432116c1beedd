//! Final summary of a run, for the console and the protocol log.

use std::io::Write;

use crate::batch::RunOutcome;

/// Summary text for `outcome`: the copy count on success, the stored error otherwise.
pub fn summary(outcome: &RunOutcome) -> String {
    if outcome.is_ok() {
        format!("process OK!\nnumber of copied files = {}", outcome.copied)
    } else {
        outcome
            .last_error
            .clone()
            .unwrap_or_else(|| "process failed!".to_string())
    }
}

/// Writes the summary to `out` and to the log. Output errors are ignored.
pub fn report<W: Write>(outcome: &RunOutcome, out: &mut W) {
    let text = summary(outcome);
    if outcome.is_ok() {
        tracing::info!(copied = outcome.copied, skipped = outcome.skipped, "{}", text);
    } else {
        tracing::error!("{}", text);
    }
    let _ = writeln!(out, "{}", text);
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::RunStatus;
    use std::io;

    #[test]
    fn ok_summary_shows_count() {
        let outcome = RunOutcome {
            copied: 3,
            skipped: 1,
            last_error: Some("fetching 'x' failed".into()),
            status: RunStatus::Ok,
        };
        let mut buf = Vec::new();
        report(&outcome, &mut buf);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "process OK!\nnumber of copied files = 3\n"
        );
    }

    #[test]
    fn failed_summary_shows_error() {
        let outcome = RunOutcome {
            last_error: Some("No flatfile given!".into()),
            status: RunStatus::Failed,
            ..RunOutcome::default()
        };
        assert_eq!(summary(&outcome), "No flatfile given!");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn write_errors_are_swallowed() {
        report(&RunOutcome::default(), &mut BrokenPipe);
    }
}
