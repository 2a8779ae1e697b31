use std::collections::BTreeSet;

pub const FILE_METADATA_TAGS_VERSION: u32 = 2;

pub const FILE_METADATA_TAGS: [&str; 12] = [
    "Directory",
    "ExifToolVersion",
    "FileAccessDate",
    "FileInodeChangeDate",
    "FileModifyDate",
    "FileName",
    "FilePermissions",
    "FileSize",
    "FileType",
    "FileTypeExtension",
    "MIMEType",
    "SourceFile",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreSet {
    version: u32,
    tags: BTreeSet<String>,
}

impl IgnoreSet {
    pub fn current() -> Self {
        Self::new(FILE_METADATA_TAGS_VERSION, FILE_METADATA_TAGS)
    }

    pub fn new<I, T>(version: u32, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let tags = tags.into_iter().map(Into::into).collect();

        Self { version, tags }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl Default for IgnoreSet {
    fn default() -> Self {
        Self::current()
    }
}
