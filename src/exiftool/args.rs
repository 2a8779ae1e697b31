use std::ffi::OsString;
use std::path::Path;

pub fn extract_all_args(path: &Path, include_hex_ids: bool) -> Vec<OsString> {
    let mut args: Vec<OsString> = ["-e", "-j", "-s", "-u"]
        .into_iter()
        .map(OsString::from)
        .collect();

    if include_hex_ids {
        args.push(OsString::from("-H"));
    }
    args.push(path.as_os_str().to_os_string());

    args
}

pub fn extract_binary_args(path: &Path, tag: &str) -> Vec<OsString> {
    vec![
        OsString::from("-b"),
        OsString::from("-u"),
        OsString::from(format!("-{tag}")),
        path.as_os_str().to_os_string(),
    ]
}
