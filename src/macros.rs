#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

macro_rules! symbol {
    (
        name: $name:expr,
        keywords: [ $($kw:expr),* $(,)? ],
        numbers: [ $($num:expr),* $(,)? ]
        $(,)?
    ) => {
        $crate::SymbolEntry {
            name: $name,
            keywords: &[ $($kw),* ],
            numbers: &[ $($num),* ],
        }
    };
}
