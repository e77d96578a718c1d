//! Progress notifications for long-running resolution.

/// Receives progress events while suffixes are being resolved.
///
/// Observers are purely observational: nothing they do can change the
/// resolved mapping. Any `FnMut(usize, usize)` closure is an observer.
///
/// # Examples
///
/// ```
/// use mockfs::resolve::UniqueSuffixResolver;
/// use mockfs::RelativePath;
///
/// let paths: Vec<RelativePath> = vec!["a/x.txt".parse().unwrap(), "b/x.txt".parse().unwrap()];
/// let mut events = Vec::new();
/// let mut record = |current: usize, total: usize| events.push((current, total));
///
/// UniqueSuffixResolver::new().resolve_with_progress(&paths, &mut record);
/// assert_eq!(events, [(1, 2), (2, 2)]);
/// ```
pub trait ProgressObserver {
    /// Called after each path is resolved with the number of paths done so
    /// far and the total number of paths.
    fn on_progress(&mut self, current: usize, total: usize);

    /// Called once when resolution is complete.
    fn on_finish(&mut self) {}
}

impl<F> ProgressObserver for F
where
    F: FnMut(usize, usize),
{
    fn on_progress(&mut self, current: usize, total: usize) {
        self(current, total);
    }
}

/// Converts a progress event to a whole percentage in `0..=100`.
///
/// An empty workload counts as complete.
///
/// # Examples
///
/// ```
/// use mockfs::resolve::percent;
///
/// assert_eq!(percent(1, 3), 33);
/// assert_eq!(percent(3, 3), 100);
/// assert_eq!(percent(0, 0), 100);
/// ```
#[must_use]
pub fn percent(current: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    let current = current.min(total);
    // current <= total, so the quotient is at most 100.
    u8::try_from(current * 100 / total).unwrap_or(100)
}
