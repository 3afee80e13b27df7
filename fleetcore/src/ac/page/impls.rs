use enumset::EnumSet;
use std::{
    fmt,
    str::FromStr,
};
use crate::error::ValueError;
use super::PageKey;

impl PageKey {
    /// Every page key, in declaration order.
    pub fn all() -> EnumSet<PageKey> {
        EnumSet::all()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKey::Dashboard => "dashboard",
            PageKey::Companies => "companies",
            PageKey::Documents => "documents",
            PageKey::Fleet => "fleet",
            PageKey::Devices => "devices",
            PageKey::Drivers => "drivers",
            PageKey::Equipment => "equipment",
            PageKey::Quality => "quality",
            PageKey::Settings => "settings",
            PageKey::Users => "users",
        }
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<PageKey> for &'static str {
    fn from(page: PageKey) -> &'static str {
        page.as_str()
    }
}

impl FromStr for PageKey {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dashboard" => Ok(PageKey::Dashboard),
            "companies" | "operators" => Ok(PageKey::Companies),
            "documents" => Ok(PageKey::Documents),
            "fleet" => Ok(PageKey::Fleet),
            "devices" => Ok(PageKey::Devices),
            "drivers" => Ok(PageKey::Drivers),
            "equipment" => Ok(PageKey::Equipment),
            "quality" => Ok(PageKey::Quality),
            "settings" => Ok(PageKey::Settings),
            "users" => Ok(PageKey::Users),
            s => Err(ValueError::Unsupported(s.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;
    use super::PageKey;
    use crate::error::ValueError;

    #[test]
    fn smoke() -> anyhow::Result<()> {
        for page in PageKey::all() {
            assert_eq!(page, PageKey::from_str(&page.to_string())?);
            assert_eq!(
                serde_json::to_string(&page)?,
                format!("\"{page}\""),
            );
        }
        assert_eq!(PageKey::all().len(), 10);
        assert_eq!(PageKey::from_str("operators")?, PageKey::Companies);
        assert_eq!(
            serde_json::from_str::<PageKey>("\"operators\"")?,
            PageKey::Companies,
        );

        assert!(matches!(
            PageKey::from_str("billing")
                .expect_err("should be an error"),
            ValueError::Unsupported(s) if s == "billing",
        ));
        // page keys are case sensitive, as stored.
        assert!(PageKey::from_str("Users").is_err());
        Ok(())
    }
}
