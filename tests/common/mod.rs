//! Scaffolding for record integration tests

/// Build a record from `name => value` pairs, in the order written.
macro_rules! record {
    ($($key:ident => $val:expr),* $(,)?) => {{
        let fields: Vec<(curv_rs::symbols::Symbol, curv_rs::value::Value)> = vec![
            $((
                curv_rs::symbols::Symbol::intern(stringify!($key)),
                curv_rs::value::Value::from($val),
            )),*
        ];
        curv_rs::records::Record::from_fields(fields).expect("record literal has unique fields")
    }};
}

pub(crate) use record;
