//! Interned symbols

use std::{
    fmt,
    sync::{Arc, LazyLock, PoisonError, RwLock},
};

use indexmap::IndexSet;

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(pub(crate) u32);

static SYMTAB: LazyLock<RwLock<IndexSet<Arc<str>>>> =
    LazyLock::new(|| RwLock::new(IndexSet::new()));

impl Symbol {
    pub fn intern(s: &str) -> Self {
        // The table is append-only, so a poisoned lock still holds a valid set.
        if let Some(id) = SYMTAB
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get_index_of(s)
        {
            return Self(id as u32);
        }

        let mut symtab = SYMTAB.write().unwrap_or_else(PoisonError::into_inner);
        let (id, inserted) = symtab.insert_full(Arc::from(s));
        if inserted {
            tracing::trace!(symbol = s, id, "interned new symbol");
        }
        Self(id as u32)
    }

    pub fn to_str(self) -> Arc<str> {
        let symtab = SYMTAB.read().unwrap_or_else(PoisonError::into_inner);
        symtab[self.0 as usize].clone()
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::intern(s)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl PartialEq<&'_ str> for Symbol {
    fn eq(&self, rhs: &&str) -> bool {
        self.to_str().as_ref() == *rhs
    }
}
