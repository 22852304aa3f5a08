//! Route tables stored as TOML.

use std::{fs, path::Path};

use anyhow::Context;
use serde::Deserialize;
use tracing::info;

use crate::router::{Router, RouterOptions};

#[derive(Debug, Deserialize, Eq, PartialEq)]
pub struct RouteEntry {
    pub path: String,
    pub data: String,
}

#[derive(Debug, Default, Deserialize, Eq, PartialEq)]
pub struct RouteTable {
    #[serde(default)]
    pub strict_trailing_slash: bool,
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read route table {}", path.display()))?;
        let table = Self::from_toml(&contents)
            .with_context(|| format!("failed to parse route table {}", path.display()))?;
        info!(path = %path.display(), routes = table.routes.len(), "route table loaded");
        Ok(table)
    }

    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn into_options(self) -> RouterOptions<String> {
        let routes = self
            .routes
            .into_iter()
            .map(|entry| (entry.path, entry.data))
            .collect();
        RouterOptions {
            routes,
            strict_trailing_slash: self.strict_trailing_slash,
        }
    }

    pub fn into_router(self) -> anyhow::Result<Router<String>> {
        Ok(Router::with_options(self.into_options())?)
    }
}

#[cfg(test)]
mod tests {
    use std::{fs::File, io::Write};

    use tempdir::TempDir;

    use super::{RouteEntry, RouteTable};

    const TABLE: &str = r#"
strict_trailing_slash = true

[[routes]]
path = "/users/:id"
data = "user"

[[routes]]
path = "/users/:name"
data = "by name"

[[routes]]
path = "/static/**:file"
data = "static"
"#;

    #[test]
    fn test_from_toml() {
        let table = RouteTable::from_toml(TABLE).unwrap();
        assert!(table.strict_trailing_slash);
        assert_eq!(
            table.routes[0],
            RouteEntry {
                path: "/users/:id".to_owned(),
                data: "user".to_owned(),
            }
        );

        let options = table.into_options();
        let paths: Vec<_> = options.routes.iter().map(|(path, _)| path.as_str()).collect();
        assert_eq!(paths, ["/users/:id", "/users/:name", "/static/**:file"]);
    }

    #[test]
    fn test_defaults() {
        let table = RouteTable::from_toml("").unwrap();
        assert_eq!(table, RouteTable::default());
    }

    #[test]
    fn test_route_order_is_kept() {
        let router = RouteTable::from_toml(TABLE).unwrap().into_router().unwrap();

        // The later placeholder declaration owns the slot.
        let m = router.lookup("/users/7").unwrap();
        assert_eq!(m.data, "by name");
        assert_eq!(m.params.unwrap().get("name"), Some("7"));

        assert!(router.lookup("/users/7/").is_none());
    }

    #[test]
    fn test_from_file() {
        let tmp_dir = TempDir::new("routes").unwrap();
        let path = tmp_dir.path().join("routes.toml");
        let mut file = File::create(&path).unwrap();
        write!(file, "{}", TABLE).unwrap();

        let table = RouteTable::from_file(&path).unwrap();
        assert_eq!(table.routes.len(), 3);
    }

    #[test]
    fn test_from_file_missing() {
        let tmp_dir = TempDir::new("routes").unwrap();
        let err = RouteTable::from_file(tmp_dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().starts_with("failed to read route table"));
    }

    #[test]
    fn test_invalid_route() {
        let table = RouteTable::from_toml(
            r#"
[[routes]]
path = "/a/:x-:x"
data = "dup"
"#,
        )
        .unwrap();
        assert!(table.into_router().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(RouteTable::from_toml("routes = 1").is_err());
    }
}
