//! Shared handling for the bounded info-log buffers GL hands back on shader
//! compile and program link failures.

/// Longest log either query will fetch, in bytes.
pub(crate) const INFO_LOG_CAP: i32 = 512;

/// Converts a raw info-log buffer into a printable string.
///
/// `length` is the byte count the driver reported. Some drivers count the
/// trailing NUL in it, so strip any that remain after truncation.
pub(crate) fn info_log_to_string(mut buf: Vec<u8>, length: i32) -> String {
    let length = length.clamp(0, INFO_LOG_CAP) as usize;
    buf.truncate(length.min(buf.len()));
    while buf.last() == Some(&0) {
        buf.pop();
    }
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_buf(text: &str) -> Vec<u8> {
        let mut buf = vec![0u8; INFO_LOG_CAP as usize];
        buf[..text.len()].copy_from_slice(text.as_bytes());
        buf
    }

    #[test]
    fn truncates_to_the_reported_length() {
        let buf = log_buf("0:1(1): error: syntax error");
        let log = info_log_to_string(buf, 27);
        assert_eq!(log, "0:1(1): error: syntax error");
    }

    #[test]
    fn strips_a_counted_trailing_nul() {
        let buf = log_buf("link failed");
        assert_eq!(info_log_to_string(buf, 12), "link failed");
    }

    #[test]
    fn reported_length_never_reads_past_the_cap() {
        let buf = vec![b'x'; INFO_LOG_CAP as usize];
        let log = info_log_to_string(buf, i32::MAX);
        assert_eq!(log.len(), INFO_LOG_CAP as usize);
    }

    #[test]
    fn negative_length_yields_an_empty_log() {
        assert_eq!(info_log_to_string(log_buf("ignored"), -1), "");
    }

    #[test]
    fn invalid_utf8_is_replaced_not_dropped() {
        let mut buf = log_buf("bad ");
        buf[4] = 0xff;
        let log = info_log_to_string(buf, 5);
        assert!(log.starts_with("bad "));
        assert_eq!(log.chars().count(), 5);
    }
}
