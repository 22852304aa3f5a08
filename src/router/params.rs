/// Values bound by a dynamic match, in binding order.
///
/// A name bound twice keeps its latest value.
#[derive(Clone, Default, Debug, Eq, PartialEq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self(vec![])
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(idx, (key, _))| self.0[idx + 1..].iter().all(|(later, _)| later != key))
            .map(|(_, (key, value))| (key.as_str(), value.as_str()))
    }

    pub(super) fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }
}

#[cfg(test)]
mod tests {
    use super::Params;

    #[test]
    fn test_latest_binding_wins() {
        let mut params = Params::new();
        params.push("id", "1");
        params.push("name", "x");
        params.push("id", "2");

        assert_eq!(params.get("id"), Some("2"));
        assert_eq!(params.get("name"), Some("x"));
        assert_eq!(params.get("missing"), None);
        assert_eq!(params.len(), 2);
        assert_eq!(params.iter().collect::<Vec<_>>(), [("name", "x"), ("id", "2")]);
    }
}
