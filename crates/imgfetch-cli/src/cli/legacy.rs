//! Rewrites the single-dash `-max` / `-max=N` spellings of older invocations.
//! A non-numeric limit (`-max=all`) meant "no limit" and becomes a bare `--max`.

use std::ffi::OsString;

pub fn normalize_legacy_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-max") => OsString::from("--max"),
            Some(s) if s.starts_with("-max=") => {
                let limit = &s["-max=".len()..];
                if !limit.is_empty() && limit.bytes().all(|b| b.is_ascii_digit()) {
                    OsString::from(format!("-{}", s))
                } else {
                    OsString::from("--max")
                }
            }
            _ => arg,
        })
        .collect()
}
