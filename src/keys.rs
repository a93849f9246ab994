//! Grouping of dotted hierarchy keys by their top-level namespace.

/// Map each key to its top-level namespace segment.
///
/// The segment is the substring before the first `.`, or the whole key when
/// it contains none. Output position `i` corresponds to input position `i`,
/// so duplicate keys keep independent entries. A key that is empty or starts
/// with `.` yields an empty segment.
///
/// # Examples
///
/// ```
/// use datastash::top_keys;
///
/// let keys = ["metrics.cpu.user", "hostname"];
/// assert_eq!(top_keys(&keys), vec!["metrics", "hostname"]);
/// ```
pub fn top_keys<S: AsRef<str>>(keys: &[S]) -> Vec<String> {
    keys.iter()
        .map(|key| {
            let key = key.as_ref();
            match key.find('.') {
                Some(pos) => key[..pos].to_string(),
                None => key.to_string(),
            }
        })
        .collect()
}
