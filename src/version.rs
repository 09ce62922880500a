use std::fmt;

/// A dotted numeric version string, e.g. `1.1.0`
///
/// Holds the raw text as reported by the tool. Components that fail to parse
/// as integers count as zero when compared, so a malformed version string is
/// never fatal - it simply fails the minimum-version check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Version(String);

impl Version {
  pub fn new<S: Into<String>>(raw: S) -> Self {
    Version(raw.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  fn components(&self) -> Vec<u64> {
    self.0.split('.').map(|c| c.trim().parse().unwrap_or(0)).collect()
  }

  /// Component-wise minimum-version check
  ///
  /// Walks components left to right: a surplus anywhere satisfies, a deficit
  /// anywhere fails. When all compared components are equal, the check passes
  /// only if this version has at least as many components as the requirement.
  pub fn satisfies(&self, required: &Version) -> bool {
    let has = self.components();
    let needs = required.components();

    for (i, have) in has.iter().enumerate() {
      if i >= needs.len() {
        return true;
      }
      if *have > needs[i] {
        return true;
      }
      if *have < needs[i] {
        return false;
      }
    }
    has.len() >= needs.len()
  }
}

impl fmt::Display for Version {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl From<&str> for Version {
  fn from(raw: &str) -> Self {
    Version::new(raw)
  }
}

#[cfg(test)]
mod tests {
  use rstest::rstest;

  use super::*;

  #[rstest]
  #[case("1.1.0", "1.1.0", true)]
  #[case("1.2.0", "1.1.0", true)]
  #[case("2.0.0", "1.1.0", true)]
  #[case("1.22.34", "1.1.0", true)]
  #[case("1.0.9", "1.1.0", false)]
  #[case("0.9.9", "1.1.0", false)]
  #[case("1.1", "1.1.0", false)]
  #[case("1.2", "1.1.0", true)]
  #[case("1.1.0.4", "1.1.0", true)]
  #[case("1.1.1", "1.1", true)]
  #[case("10.0.0", "9.9.9", true)]
  fn it_checks_minimum_versions(#[case] have: &str, #[case] need: &str, #[case] expected: bool) {
    assert_eq!(Version::new(have).satisfies(&Version::from(need)), expected);
  }

  #[test]
  fn it_treats_non_numeric_components_as_zero() {
    assert!(!Version::new("1.x.0").satisfies(&Version::new("1.1.0")));
    assert!(Version::new("1.1.x").satisfies(&Version::new("1.1")));
  }

  #[test]
  fn it_keeps_the_raw_text() {
    let ver = Version::new("not a version at all");
    assert_eq!(ver.as_str(), "not a version at all");
    assert_eq!(ver.to_string(), "not a version at all");
  }
}
