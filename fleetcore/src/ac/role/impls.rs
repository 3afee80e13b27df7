use std::{
    borrow::Borrow,
    collections::BTreeSet,
    fmt,
    ops::Deref,
};
use super::{
    Role,
    Roles,
};

impl Role {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for Role {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for Role {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

// `Role` orders and hashes identically to its inner `String`.
impl Borrow<str> for Role {
    fn borrow(&self) -> &str {
        self.0.as_ref()
    }
}

impl Roles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, role: &str) -> bool {
        self.0.contains(role)
    }

    pub fn insert(&mut self, role: impl Into<Role>) -> bool {
        self.0.insert(role.into())
    }

    pub fn into_inner(self) -> BTreeSet<Role> {
        self.0
    }
}

impl Deref for Roles {
    type Target = BTreeSet<Role>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<R: Into<Role>> FromIterator<R> for Roles {
    fn from_iter<I: IntoIterator<Item=R>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<R: Into<Role>> Extend<R> for Roles {
    fn extend<I: IntoIterator<Item=R>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into))
    }
}
