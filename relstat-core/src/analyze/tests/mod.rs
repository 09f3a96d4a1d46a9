
pub(crate) fn line(
    outer: (i64, &str),
    inner: (i64, &str),
    duration_ns: u64,
    result: bool,
) -> String {
    format!(
        r#"{{"function":"relations","part":"contains","check":"full","outer_id":{},"outer_type":"{}","inner_id":{},"inner_type":"{}","duration_ns":{},"result":{}}}"#,
        outer.0, outer.1, inner.0, inner.1, duration_ns, result
    )
}
