use std::{fmt, io, sync::Arc};

use crate::{error::Error, lists::List, num::Number, records::Record};

/// A runtime value. Every variant knows how to print itself and compares
/// structurally.
#[derive(Clone, PartialEq, derive_more::Debug, derive_more::From)]
pub enum Value {
    #[from(skip)]
    Null,
    Boolean(bool),
    Number(Number),
    String(Arc<str>),
    List(List),
    Record(Arc<Record>),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Record(_) => "record",
        }
    }

    pub fn print<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        match self {
            Self::Null => out.write_str("null"),
            Self::Boolean(true) => out.write_str("true"),
            Self::Boolean(false) => out.write_str("false"),
            Self::Number(n) => n.print(out),
            Self::String(s) => print_string(s, out),
            Self::List(list) => list.print(out),
            Self::Record(record) => record.print(out),
        }
    }

    /// Print to a byte sink. Errors from the sink are returned as-is.
    pub fn write_to<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

fn print_string<W: fmt::Write + ?Sized>(s: &str, out: &mut W) -> fmt::Result {
    out.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' | '\\' => {
                out.write_char('\\')?;
                out.write_char(c)?;
            }
            c => out.write_char(c)?,
        }
    }
    out.write_char('"')
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(Number::from(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(Number::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(Arc::from(s))
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(Arc::new(record))
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::List(List::from(v))
    }
}

impl<'a> TryFrom<&'a Value> for bool {
    type Error = Error;

    fn try_from(v: &'a Value) -> Result<bool, Self::Error> {
        match v {
            Value::Boolean(b) => Ok(*b),
            x => Err(Error::invalid_type("bool", x.type_name())),
        }
    }
}

impl<'a> TryFrom<&'a Value> for f64 {
    type Error = Error;

    fn try_from(v: &'a Value) -> Result<f64, Self::Error> {
        match v {
            Value::Number(n) => Ok(n.to_f64()),
            x => Err(Error::invalid_type("number", x.type_name())),
        }
    }
}

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = Error;

    fn try_from(v: &'a Value) -> Result<&'a str, Self::Error> {
        match v {
            Value::String(s) => Ok(s.as_ref()),
            x => Err(Error::invalid_type("string", x.type_name())),
        }
    }
}

impl<'a> TryFrom<&'a Value> for &'a List {
    type Error = Error;

    fn try_from(v: &'a Value) -> Result<&'a List, Self::Error> {
        match v {
            Value::List(list) => Ok(list),
            x => Err(Error::invalid_type("list", x.type_name())),
        }
    }
}

impl<'a> TryFrom<&'a Value> for &'a Record {
    type Error = Error;

    fn try_from(v: &'a Value) -> Result<&'a Record, Self::Error> {
        match v {
            Value::Record(record) => Ok(record.as_ref()),
            x => Err(Error::invalid_type("record", x.type_name())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_scalars() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from(false).to_string(), "false");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
    }

    #[test]
    fn strings_are_quoted_and_escaped() {
        assert_eq!(Value::from("plain").to_string(), r#""plain""#);
        assert_eq!(Value::from(r#"a"b\c"#).to_string(), r#""a\"b\\c""#);
    }

    #[test]
    fn values_of_different_types_are_unequal() {
        assert_ne!(Value::from(1), Value::from("1"));
        assert_ne!(Value::Null, Value::from(false));
        assert_eq!(Value::from("s"), Value::from(String::from("s")));
    }

    #[test]
    fn conversions_report_the_provided_type() {
        let v = Value::from("text");
        assert_eq!(<&str>::try_from(&v), Ok("text"));
        assert_eq!(
            f64::try_from(&v),
            Err(Error::InvalidType {
                expected: "number",
                provided: "string",
            })
        );
        assert_eq!(bool::try_from(&Value::from(true)), Ok(true));
        assert!(<&Record>::try_from(&Value::Null).is_err());
    }

    #[test]
    fn write_to_byte_sink() {
        let mut out = Vec::new();
        Value::from(vec![Value::from(1), Value::Null])
            .write_to(&mut out)
            .unwrap();
        assert_eq!(out, b"[1,null]");
    }
}
