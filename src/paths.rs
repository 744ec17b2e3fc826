/// Maps a fully suffixed icon id to the resource path written into the
/// manifest.
///
/// Any `Fn(&str) -> String` closure works as a resolver.
pub trait IconPathResolver {
    fn icon_path(&self, id: &str) -> String;
}

impl<F> IconPathResolver for F
where
    F: Fn(&str) -> String,
{
    fn icon_path(&self, id: &str) -> String {
        self(id)
    }
}

/// `<dir><id>.<extension>`, relative to wherever the host loads the
/// manifest from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconPaths {
    pub dir: String,
    pub extension: String,
}

impl Default for IconPaths {
    fn default() -> Self {
        Self {
            dir: "./../../icons/".to_owned(),
            extension: "svg".to_owned(),
        }
    }
}

impl IconPathResolver for IconPaths {
    fn icon_path(&self, id: &str) -> String {
        if self.dir.is_empty() || self.dir.ends_with('/') {
            format!("{}{id}.{}", self.dir, self.extension)
        } else {
            format!("{}/{id}.{}", self.dir, self.extension)
        }
    }
}
