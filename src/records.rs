//! Structural records: ordered, uniquely keyed fields.

use std::{fmt, io};

use indexmap::{IndexMap, map::Entry};

use crate::{error::Error, symbols::Symbol, value::Value};

/// A record value. Fields keep the order in which they were established, and
/// that order is significant to both printing and equality.
#[derive(Clone, Default)]
pub struct Record {
    fields: IndexMap<Symbol, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from its full field set, rejecting repeated keys.
    pub fn from_fields<I>(fields: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (Symbol, Value)>,
    {
        let fields = fields.into_iter();
        let mut map = IndexMap::with_capacity(fields.size_hint().0);
        for (key, value) in fields {
            match map.entry(key) {
                Entry::Occupied(_) => {
                    tracing::debug!(field = %key, "rejecting record with duplicate field");
                    return Err(Error::DuplicateField(key));
                }
                Entry::Vacant(slot) => {
                    slot.insert(value);
                }
            }
        }
        Ok(Self { fields: map })
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &Value)> {
        self.fields.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Symbol> {
        self.fields.keys()
    }

    pub fn get(&self, key: &Symbol) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains(&self, key: &Symbol) -> bool {
        self.fields.contains_key(key)
    }

    /// Field access as the `.` operator sees it: a missing field is an error.
    pub fn field(&self, key: &Symbol) -> Result<&Value, Error> {
        self.get(key).ok_or(Error::NoSuchField(*key))
    }

    /// Writes `{k1=v1,k2=v2}` in field order.
    pub fn print<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        out.write_char('{')?;
        let mut first = true;
        for (key, value) in &self.fields {
            if !first {
                out.write_char(',')?;
            }
            first = false;
            write!(out, "{key}=")?;
            value.print(out)?;
        }
        out.write_char('}')
    }

    pub fn write_to<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{self}")
    }

    /// Compares fields position by position, walking until `self` runs out.
    ///
    /// Keys are never looked up in `other`, so the same fields established in
    /// a different order are unequal. Because the walk is bounded by `self`,
    /// a record that is a strict prefix of `other` compares equal to it; use
    /// `==` for the relation that also holds the other way round.
    pub fn equals(&self, other: &Record) -> bool {
        let mut rhs = other.fields.iter();
        for (key, value) in &self.fields {
            let Some((other_key, other_value)) = rhs.next() else {
                return false;
            };
            if key != other_key || value != other_value {
                return false;
            }
        }
        true
    }
}

/// The lockstep comparison applied in both directions.
impl PartialEq for Record {
    fn eq(&self, rhs: &Self) -> bool {
        self.equals(rhs) && rhs.equals(self)
    }
}

impl FromIterator<(Symbol, Value)> for Record {
    /// A repeated key keeps its first position and takes the later value.
    fn from_iter<I: IntoIterator<Item = (Symbol, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a Symbol, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Symbol, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f)
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f)
    }
}
