//! The GUID value type: construction, validation, generation, equality.

use rand::Rng;

use crate::GuidError;

/// Expected lengths of the five hyphen-separated hex groups.
const GROUP_LENS: [usize; 5] = [8, 4, 4, 4, 12];

/// A universally-unique identifier in canonical hyphenated form.
///
/// Holds the canonical string representation: five groups of 8-4-4-4-12 hex
/// digits. Hex digits are matched case-insensitively and the input casing is
/// preserved verbatim, so two `Guid`s compare equal only when their string
/// forms are byte-identical.
///
/// The all-zero sentinel (`Guid::empty()`) represents "no value" within the
/// canonical format.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Guid(String);

/// An input accepted by [`Guid::from_source`]: either a pre-built GUID or a
/// raw string to be normalized.
#[derive(Debug, Clone, Copy)]
pub enum GuidSource<'a> {
    /// Copy an existing GUID.
    Guid(&'a Guid),
    /// Adopt a string, falling back to the sentinel when malformed.
    Value(&'a str),
}

impl<'a> From<&'a Guid> for GuidSource<'a> {
    fn from(guid: &'a Guid) -> Self {
        GuidSource::Guid(guid)
    }
}

impl<'a> From<&'a str> for GuidSource<'a> {
    fn from(value: &'a str) -> Self {
        GuidSource::Value(value)
    }
}

impl Guid {
    /// The canonical all-zero sentinel string.
    pub const EMPTY: &'static str = "00000000-0000-0000-0000-000000000000";

    /// Returns the empty sentinel GUID.
    #[must_use]
    pub fn empty() -> Self {
        Self(Self::EMPTY.to_string())
    }

    /// Parses a GUID from a string, strictly.
    ///
    /// The string must match the hyphenated 8-4-4-4-12 hex format
    /// (case-insensitive). Casing is preserved verbatim.
    pub fn parse(value: &str) -> Result<Self, GuidError> {
        if Self::is_valid(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(GuidError::InvalidFormat {
                value: value.to_string(),
            })
        }
    }

    /// Parses a GUID from a string, leniently.
    ///
    /// Valid input is adopted verbatim; empty or malformed input falls back
    /// to the empty sentinel rather than failing. Load-script callers depend
    /// on this fallback, so prefer [`Guid::parse`] in new code.
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        if Self::is_valid(value) {
            Self(value.to_string())
        } else {
            Self::empty()
        }
    }

    /// Constructs a GUID from an optional source value.
    ///
    /// Absent input is the only error. A pre-built GUID is copied; a string
    /// goes through the lenient path of [`Guid::parse_lenient`].
    pub fn from_source(source: Option<GuidSource<'_>>) -> Result<Self, GuidError> {
        match source {
            None => Err(GuidError::MissingValue),
            Some(GuidSource::Guid(guid)) => Ok(guid.clone()),
            Some(GuidSource::Value(value)) => Ok(Self::parse_lenient(value)),
        }
    }

    /// Returns true if the string matches the hyphenated 8-4-4-4-12 hex
    /// format, case-insensitively. Never errors; empty and malformed input
    /// simply report false.
    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        let mut groups = value.split('-');
        for expected_len in GROUP_LENS {
            match groups.next() {
                Some(group)
                    if group.len() == expected_len
                        && group.bytes().all(|b| b.is_ascii_hexdigit()) => {}
                _ => return false,
            }
        }
        groups.next().is_none()
    }

    /// Generates a fresh random GUID from the thread-local generator.
    ///
    /// Valid by construction. Not cryptographically secure: collisions are
    /// statistically rare but not protected against, and the output is
    /// predictable given the generator state.
    #[must_use]
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    /// Generates a fresh random GUID from the supplied generator.
    ///
    /// Takes the generator explicitly so tests can seed it and parallel
    /// callers can hold their own.
    #[must_use]
    pub fn random_with<R: Rng>(rng: &mut R) -> Self {
        Self(Self::raw_random_with(rng))
    }

    /// Generates a bare random GUID string from the thread-local generator.
    #[must_use]
    pub fn raw_random() -> String {
        Self::raw_random_with(&mut rand::rng())
    }

    /// Generates a bare random GUID string from the supplied generator.
    ///
    /// Assembled as five lowercase hex groups of 4-hex-digit fragments
    /// (2, 1, 1, 1, and 3 fragments), so the result always validates.
    #[must_use]
    pub fn raw_random_with<R: Rng>(rng: &mut R) -> String {
        [
            hex_fragments(rng, 2),
            hex_fragments(rng, 1),
            hex_fragments(rng, 1),
            hex_fragments(rng, 1),
            hex_fragments(rng, 3),
        ]
        .join("-")
    }

    /// Returns true iff this GUID is the empty sentinel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0 == Self::EMPTY
    }

    /// Returns the canonical string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Concatenates `count` pseudo-random 4-hex-digit fragments.
fn hex_fragments<R: Rng>(rng: &mut R, count: usize) -> String {
    (0..count).map(|_| format!("{:04x}", rng.random::<u16>())).collect()
}

impl Default for Guid {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Display for Guid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Guid {
    type Err = GuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// String equality in the original load-script sense: true only if the other
/// value is itself GUID-shaped and exactly equals this canonical value.
impl PartialEq<str> for Guid {
    fn eq(&self, other: &str) -> bool {
        Guid::is_valid(other) && self.0 == other
    }
}

impl PartialEq<&str> for Guid {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Guid {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl AsRef<str> for Guid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for Guid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Guid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_parse_valid_preserves_verbatim() {
        let s = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
        let guid = Guid::parse(s).unwrap();
        assert_eq!(guid.to_string(), s);
    }

    #[test]
    fn test_parse_uppercase_preserves_case() {
        let s = "3FA85F64-5717-4562-B3FC-2C963F66AFA6";
        assert!(Guid::is_valid(s));
        let guid = Guid::parse(s).unwrap();
        // Case-insensitive acceptance, verbatim copy.
        assert_eq!(guid.as_str(), s);
    }

    #[test]
    fn test_parse_malformed() {
        let err = Guid::parse("3fa85f64571745").unwrap_err();
        assert!(matches!(err, GuidError::InvalidFormat { .. }));
        assert!(err.is_format_error());
        assert!(!err.is_missing());
    }

    #[test]
    fn test_parse_lenient_falls_back_to_sentinel() {
        assert_eq!(Guid::parse_lenient("not-a-uuid").as_str(), Guid::EMPTY);
        assert_eq!(Guid::parse_lenient("").as_str(), Guid::EMPTY);
        assert_eq!(Guid::parse_lenient("3fa85f64571745").as_str(), Guid::EMPTY);
    }

    #[test]
    fn test_parse_lenient_adopts_valid_input() {
        let s = "55b2bcd0-2d09-498d-ae62-907a82484753";
        assert_eq!(Guid::parse_lenient(s).as_str(), s);
    }

    #[test]
    fn test_is_valid_rejects_non_hex_and_bad_groups() {
        assert!(!Guid::is_valid("zzzzzzzz-5717-4562-b3fc-2c963f66afa6"));
        assert!(!Guid::is_valid("3fa85f64-5717-4562-b3fc"));
        assert!(!Guid::is_valid("3fa85f64-5717-4562-b3fc-2c963f66afa6-ffff"));
        assert!(!Guid::is_valid("3fa85f6-45717-4562-b3fc-2c963f66afa6"));
        assert!(!Guid::is_valid(""));
    }

    #[test]
    fn test_sentinel_is_valid_and_empty() {
        assert!(Guid::is_valid(Guid::EMPTY));
        assert!(Guid::empty().is_empty());
        assert!(!Guid::parse("3fa85f64-5717-4562-b3fc-2c963f66afa6")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_from_source_missing() {
        let result = Guid::from_source(None);
        assert!(matches!(result.unwrap_err(), GuidError::MissingValue));
        assert!(Guid::from_source(None).unwrap_err().is_missing());
    }

    #[test]
    fn test_from_source_copies_guid() {
        let original = Guid::random();
        let copy = Guid::from_source(Some((&original).into())).unwrap();
        assert_eq!(original, copy);
    }

    #[test]
    fn test_from_source_string_paths() {
        let valid = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
        let guid = Guid::from_source(Some(valid.into())).unwrap();
        assert_eq!(guid.as_str(), valid);

        let fallback = Guid::from_source(Some("garbage".into())).unwrap();
        assert!(fallback.is_empty());
    }

    #[test]
    fn test_random_always_valid() {
        for _ in 0..10_000 {
            let raw = Guid::raw_random();
            assert!(Guid::is_valid(&raw), "generated invalid GUID: {raw}");
        }
    }

    #[test]
    fn test_random_collisions_absent_in_practice() {
        let minted: HashSet<String> = (0..10_000).map(|_| Guid::raw_random()).collect();
        assert_eq!(minted.len(), 10_000);
    }

    #[test]
    fn test_random_with_is_deterministic_when_seeded() {
        let a = Guid::random_with(&mut StdRng::seed_from_u64(7));
        let b = Guid::random_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_roundtrip() {
        let guid = Guid::random();
        let reparsed = Guid::parse(&guid.to_string()).unwrap();
        assert_eq!(guid, reparsed);
    }

    #[test]
    fn test_string_equality() {
        let guid = Guid::random();
        let s = guid.to_string();
        assert!(guid == s.as_str());
        assert!(guid != "garbage");
        // Shape-valid but different value is still unequal.
        assert!(guid != "00000000-0000-0000-0000-000000000001");
    }

    #[test]
    fn test_json_roundtrip() {
        let guid = Guid::random();
        let json = serde_json::to_string(&guid).unwrap();
        assert_eq!(json, format!("\"{guid}\""));
        let parsed: Guid = serde_json::from_str(&json).unwrap();
        assert_eq!(guid, parsed);
    }

    #[test]
    fn test_json_rejects_malformed() {
        let result: Result<Guid, _> = serde_json::from_str("\"not-a-uuid\"");
        assert!(result.is_err());
    }

    proptest! {
        #[test]
        fn prop_canonical_strings_validate_and_roundtrip(
            s in "[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}"
        ) {
            prop_assert!(Guid::is_valid(&s));
            let guid = Guid::parse(&s).unwrap();
            prop_assert_eq!(guid.to_string(), s);
        }

        #[test]
        fn prop_seeded_generation_validates(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let raw = Guid::raw_random_with(&mut rng);
            prop_assert!(Guid::is_valid(&raw));
        }
    }
}
