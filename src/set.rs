//! Ordered membership container.
//!
//! A `FuzzySet` is a finite map from domain value to membership grade with
//! unique keys, enumerated in ascending key order. Grades are not checked:
//! whatever the caller hands in is stored and handed back.
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::extension::propagating_max;

/// An `f64` under a total order: keys are equal only when bit-identical,
/// except that every NaN is the same value, sorting above `+inf`.
/// `-0.0` and `0.0` are distinct, `-0.0` first.
#[derive(Clone, Copy, Debug, Default)]
pub struct Real(f64);

impl Real {
    pub fn new(x: f64) -> Self {
        Real(if x.is_nan() { f64::NAN } else { x })
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Ord for Real {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Real {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Real {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Real {}

impl From<f64> for Real {
    fn from(x: f64) -> Self {
        Real::new(x)
    }
}

/// Domain value as stored in the map.
pub type Key = Real;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FuzzySet {
    members: BTreeMap<Key, Real>,
}

impl FuzzySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Membership grade of `x`, if `x` is a support point.
    pub fn grade(&self, x: f64) -> Option<f64> {
        self.members.get(&Real::new(x)).map(|g| g.0)
    }

    /// `(x, grade)` pairs in ascending `x`.
    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.members.iter() }
    }

    /// Domain values in ascending order.
    pub fn support(&self) -> impl Iterator<Item = f64> + '_ {
        self.members.keys().map(|k| k.0)
    }

    /// Largest grade present, `None` when empty. A NaN grade counts as the
    /// largest.
    pub fn height(&self) -> Option<f64> {
        self.members.values().max().map(|g| g.0)
    }

    pub fn into_inner(self) -> BTreeMap<Key, Real> {
        self.members
    }

    /// Insert-or-update-with-max: keeps the larger of the stored and the
    /// incoming grade instead of overwriting. A NaN on either side wins.
    pub(crate) fn upsert_max(&mut self, x: f64, grade: f64) {
        self.members
            .entry(Real::new(x))
            .and_modify(|stored| *stored = Real::new(propagating_max(stored.0, grade)))
            .or_insert(Real::new(grade));
    }
}

pub struct Iter<'a> {
    inner: btree_map::Iter<'a, Key, Real>,
}

impl Iterator for Iter<'_> {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, g)| (k.0, g.0))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a FuzzySet {
    type Item = (f64, f64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Later duplicates overwrite earlier ones, as a plain map put would.
impl FromIterator<(f64, f64)> for FuzzySet {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let mut set = FuzzySet::new();
        set.extend(iter);
        set
    }
}

impl Extend<(f64, f64)> for FuzzySet {
    fn extend<I: IntoIterator<Item = (f64, f64)>>(&mut self, iter: I) {
        for (x, grade) in iter {
            self.members.insert(Real::new(x), Real::new(grade));
        }
    }
}

impl From<BTreeMap<Key, Real>> for FuzzySet {
    fn from(members: BTreeMap<Key, Real>) -> Self {
        Self { members }
    }
}

impl From<BTreeMap<Key, f64>> for FuzzySet {
    fn from(members: BTreeMap<Key, f64>) -> Self {
        members.into_iter().map(|(k, g)| (k.0, g)).collect()
    }
}

impl<const N: usize> From<[(f64, f64); N]> for FuzzySet {
    fn from(pairs: [(f64, f64); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl fmt::Display for FuzzySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (x, grade)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{x}: {grade}")?;
        }
        f.write_str("}")
    }
}

// ————————————————————————————————————————————————————————————————————————————
// WIRE FORMAT
// ————————————————————————————————————————————————————————————————————————————

/// A value on the wire: a JSON number when finite, otherwise one of
/// `"inf"`, `"-inf"`, `"NaN"` (JSON has no literal for these). Used for
/// grades as well as domain values.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
enum WireValue {
    Number(f64),
    #[serde(deserialize_with = "deserialize_float_str")]
    Text(f64),
}

impl WireValue {
    fn from_f64(x: f64) -> Self {
        if x.is_finite() { WireValue::Number(x) } else { WireValue::Text(x) }
    }

    fn into_f64(self) -> f64 {
        match self {
            WireValue::Number(x) | WireValue::Text(x) => x,
        }
    }
}

fn deserialize_float_str<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let text = String::deserialize(deserializer)?;
    parse_domain_value(&text).map_err(de::Error::custom)
}

/// Parse a value written as text (`"2.5"`, `"-inf"`, `"NaN"`).
pub fn parse_domain_value(text: &str) -> Result<f64, String> {
    text.trim()
        .parse::<f64>()
        .map_err(|error| format!("invalid domain value {text:?}: {error}"))
}

impl Serialize for WireValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            WireValue::Number(x) => serializer.serialize_f64(x),
            WireValue::Text(x) => serializer.collect_str(&x),
        }
    }
}

struct Pair(f64, f64);

impl Serialize for Pair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(2))?;
        seq.serialize_element(&WireValue::from_f64(self.0))?;
        seq.serialize_element(&WireValue::from_f64(self.1))?;
        seq.end()
    }
}

impl Serialize for FuzzySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(|(x, grade)| Pair(x, grade)))
    }
}

impl<'de> Deserialize<'de> for FuzzySet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FuzzySetVisitor)
    }
}

struct FuzzySetVisitor;

impl<'de> Visitor<'de> for FuzzySetVisitor {
    type Value = FuzzySet;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an array of [value, grade] pairs or an object of value → grade")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut set = FuzzySet::new();
        while let Some((x, grade)) = seq.next_element::<(WireValue, WireValue)>()? {
            set.extend([(x.into_f64(), grade.into_f64())]);
        }
        Ok(set)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut set = FuzzySet::new();
        while let Some((key, grade)) = map.next_entry::<String, WireValue>()? {
            let x = parse_domain_value(&key).map_err(de::Error::custom)?;
            set.extend([(x, grade.into_f64())]);
        }
        Ok(set)
    }
}
