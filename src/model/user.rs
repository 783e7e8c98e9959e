//! Requesting user, used to root org unit hierarchy maps

use super::orgunit::OrgUnit;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub username: String,
    pub org_units: Vec<OrgUnit>,
}

impl User {
    pub fn new(username: impl Into<String>, org_units: Vec<OrgUnit>) -> Self {
        User {
            username: username.into(),
            org_units,
        }
    }
}
