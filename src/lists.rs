use std::{fmt, ops::Deref, sync::Arc};

use crate::value::Value;

/// An immutable sequence of values. Cloning shares the elements.
#[derive(Clone, PartialEq, Default)]
pub struct List(Arc<[Value]>);

impl List {
    pub fn print<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        out.write_char('[')?;
        let mut iter = self.0.iter().peekable();
        while let Some(item) = iter.next() {
            item.print(out)?;
            if iter.peek().is_some() {
                out.write_char(',')?;
            }
        }
        out.write_char(']')
    }
}

impl Deref for List {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Value>> for List {
    fn from(v: Vec<Value>) -> Self {
        Self(Arc::from(v))
    }
}

impl FromIterator<Value> for List {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f)
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f)
    }
}
