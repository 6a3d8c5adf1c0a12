use std::collections::BTreeMap;

/// Write-only channel for named style variables (`--primary` and friends).
/// On the web it is the root element's inline style.
pub trait StyleSink {
    fn set_property(&mut self, name: &str, value: &str);
    fn remove_property(&mut self, name: &str);
}

impl StyleSink for BTreeMap<String, String> {
    fn set_property(&mut self, name: &str, value: &str) {
        self.insert(name.to_string(), value.to_string());
    }

    fn remove_property(&mut self, name: &str) {
        self.remove(name);
    }
}
