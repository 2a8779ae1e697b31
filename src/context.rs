use crate::exiftool::ExiftoolClient;
use crate::profile::IgnoreSet;

#[derive(Debug)]
pub struct AppContext {
    pub include_hex_ids: bool,
    pub ignore: IgnoreSet,
    pub exiftool: ExiftoolClient,
}

impl AppContext {
    pub fn bootstrap(include_hex_ids: bool) -> Self {
        Self {
            include_hex_ids,
            ignore: IgnoreSet::current(),
            exiftool: ExiftoolClient::new(),
        }
    }
}
