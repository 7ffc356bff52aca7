use std::sync::LazyLock;
use regex::Regex;
use crate::project::structs::version_information::VersionInformation;

static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\.(\d+|x)(?:\.(\d+|x))?(?:[.-]([A-Za-z][A-Za-z0-9.-]*))?$").expect("version regex")
});

impl VersionInformation {
    /// Parses `MAJOR.MINOR[.PATCH][(.|-)QUALIFIER]`, e.g. `3.2.0`, `2.1.3.RELEASE`
    /// or `3.3.0-SNAPSHOT`. Returns `None` for anything else.
    pub fn parse(version: &str) -> Option<VersionInformation>
    {
        let version = version.trim();
        let captures = VERSION_REGEX.captures(version)?;
        let major = captures[1].to_string();
        let minor = format!("{}.{}", major, &captures[2]);
        Some(VersionInformation {
            id: version.to_string(),
            major,
            minor: Some(minor),
        })
    }
}
