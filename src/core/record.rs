use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DNSRecordType {
    A,
    AAAA,
    CNAME,
    MX,
    NS,
    SRV,
    TXT,
    Other(String),
}

impl DNSRecordType {
    pub fn as_str(&self) -> &str {
        match self {
            DNSRecordType::A => "A",
            DNSRecordType::AAAA => "AAAA",
            DNSRecordType::CNAME => "CNAME",
            DNSRecordType::MX => "MX",
            DNSRecordType::NS => "NS",
            DNSRecordType::SRV => "SRV",
            DNSRecordType::TXT => "TXT",
            DNSRecordType::Other(other) => other,
        }
    }
}

impl From<&str> for DNSRecordType {
    fn from(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "A" => DNSRecordType::A,
            "AAAA" => DNSRecordType::AAAA,
            "CNAME" => DNSRecordType::CNAME,
            "MX" => DNSRecordType::MX,
            "NS" => DNSRecordType::NS,
            "SRV" => DNSRecordType::SRV,
            "TXT" => DNSRecordType::TXT,
            other => DNSRecordType::Other(other.to_string()),
        }
    }
}

impl FromStr for DNSRecordType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for DNSRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A DNS resource record as seen by callers, independent of any vendor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DNSRecord {
    pub record_type: DNSRecordType,
    pub name: String,
    pub value: String,
    pub ttl: Duration,
}

impl DNSRecord {
    pub fn txt(name: impl Into<String>, value: impl Into<String>, ttl: Duration) -> Self {
        Self {
            record_type: DNSRecordType::TXT,
            name: name.into(),
            value: value.into(),
            ttl,
        }
    }

    /// Records are identified by name and type within a zone.
    pub fn key(&self) -> (&str, &DNSRecordType) {
        (&self.name, &self.record_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_parse_known_types() {
        assert_eq!("A".parse::<DNSRecordType>().unwrap(), DNSRecordType::A);
        assert_eq!("aaaa".parse::<DNSRecordType>().unwrap(), DNSRecordType::AAAA);
        assert_eq!("Txt".parse::<DNSRecordType>().unwrap(), DNSRecordType::TXT);
        assert_eq!("CNAME".parse::<DNSRecordType>().unwrap(), DNSRecordType::CNAME);
    }

    #[test]
    fn test_parse_unknown_type_is_kept() {
        let parsed: DNSRecordType = "caa".parse().unwrap();
        assert_eq!(parsed, DNSRecordType::Other("CAA".to_string()));
        assert_eq!(parsed.to_string(), "CAA");
    }

    #[test]
    fn test_display_matches_wire_form() {
        assert_eq!(DNSRecordType::TXT.to_string(), "TXT");
        assert_eq!(DNSRecordType::AAAA.to_string(), "AAAA");
    }

    #[test]
    fn test_txt_constructor() {
        let rec = DNSRecord::txt("_acme-challenge", "token", Duration::from_secs(120));
        assert_eq!(rec.record_type, DNSRecordType::TXT);
        assert_eq!(rec.name, "_acme-challenge");
        assert_eq!(rec.value, "token");
        assert_eq!(rec.ttl, Duration::from_secs(120));
    }

    #[test]
    fn test_identity_ignores_value_and_ttl() {
        let old = DNSRecord::txt("www", "one", Duration::from_secs(60));
        let new = DNSRecord::txt("www", "two", Duration::from_secs(300));
        assert_eq!(old.key(), new.key());

        let other = DNSRecord {
            record_type: DNSRecordType::A,
            ..old.clone()
        };
        assert_ne!(old.key(), other.key());
    }

    #[test]
    fn test_records_diff_by_full_value() {
        let old = [
            DNSRecord::txt("a", "1", Duration::from_secs(60)),
            DNSRecord::txt("b", "2", Duration::from_secs(60)),
        ];
        let new = [
            DNSRecord::txt("a", "1", Duration::from_secs(60)),
            DNSRecord::txt("b", "3", Duration::from_secs(60)),
            DNSRecord::txt("c", "4", Duration::from_secs(60)),
        ];
        let old_set: HashSet<_> = old.iter().collect();
        let new_set: HashSet<_> = new.iter().collect();

        assert_eq!(new_set.difference(&old_set).count(), 2);
        assert_eq!(old_set.difference(&new_set).count(), 1);
    }
}
