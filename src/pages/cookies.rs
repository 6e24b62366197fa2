/// Cookies of an incoming request, parsed from its `Cookie` header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cookies {
    header: String,
    pairs: Vec<(String, String)>,
}

impl Cookies {
    pub fn parse(header: &str) -> Self {
        let pairs = header
            .split(';')
            .filter_map(|kv| {
                let mut it = kv.trim().splitn(2, '=');
                match (it.next(), it.next()) {
                    (Some(name), Some(value)) if !name.is_empty() => {
                        Some((name.trim().to_string(), value.trim().to_string()))
                    }
                    _ => None,
                }
            })
            .collect();

        Self {
            header: header.trim().to_string(),
            pairs,
        }
    }

    /// Value of the first cookie called `name`; empty values count as absent
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .filter(|value| !value.is_empty())
    }

    /// The header as received, for forwarding to the backend
    pub fn header(&self) -> &str {
        &self.header
    }
}
