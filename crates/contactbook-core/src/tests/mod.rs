#[cfg(test)]
#[allow(clippy::module_inception)]
pub mod tests {
    use crate::contact::ContactRecord;

    pub fn record(name: Option<&str>, email: Option<&str>, phone: Option<&str>) -> ContactRecord {
        ContactRecord {
            name: name.map(|s| s.to_owned()),
            email: email.map(|s| s.to_owned()),
            phone: phone.map(|s| s.to_owned()),
        }
    }

    pub fn valid_record() -> ContactRecord {
        record(Some("Ann"), Some("ann@x.com"), Some("5551234"))
    }
}
