/// Build a [`Tag`][`crate::Tag`] with JSON/SNBT-like syntax.
///
/// ```rust
/// use nbtag::{nbt, Tag};
///
/// let tag = nbt!({
///     "Name": "Excalibur",
///     "Damage": 3_i16,
///     "Lore": ["Forged in a lake", "Slightly damp"],
///     "display": { "color": 0xFF00FF },
/// });
/// assert_eq!(tag.as_compound().unwrap()["Damage"], Tag::Short(3));
/// ```
///
/// Compound keys are string literals, or any expression wrapped in
/// parentheses. Everything that is not a list, array or compound goes
/// through `Tag::from`, so literal suffixes pick the kind: `1_i8` is a Byte,
/// `1` an Int, `1.0_f32` a Float.
///
/// Arrays use SNBT's prefixes:
///
/// ```rust
/// # use nbtag::nbt;
/// let _ = nbt!({
///     "bytes": [B; 1, 2, 3],
///     "ints": [I; 1, 2, 3],
///     "longs": [L; 1, 2, 3],
/// });
/// ```
#[macro_export]
macro_rules! nbt {
    ($($tt:tt)+) => {
        $crate::__nbt_value!($($tt)+)
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! __nbt_value {
    ([B; $($v:expr),* $(,)?]) => {
        $crate::Tag::ByteArray($crate::ByteArray::new(::std::vec![$($v),*]))
    };
    ([I; $($v:expr),* $(,)?]) => {
        $crate::Tag::IntArray($crate::IntArray::new(::std::vec![$($v),*]))
    };
    ([L; $($v:expr),* $(,)?]) => {
        $crate::Tag::LongArray($crate::LongArray::new(::std::vec![$($v),*]))
    };
    ([$($tt:tt)*]) => {
        $crate::Tag::List({
            #[allow(unused_mut)]
            let mut list = $crate::List::new();
            $crate::__nbt_list!(list () $($tt)*);
            list
        })
    };
    ({$($tt:tt)*}) => {
        $crate::Tag::Compound({
            #[allow(unused_mut)]
            let mut compound = $crate::Compound::new();
            $crate::__nbt_compound!(compound $($tt)*);
            compound
        })
    };
    ($other:expr) => {
        $crate::Tag::from($other)
    };
}

/// Splits list elements on top-level commas. The parenthesised group holds
/// the tokens of the element being collected.
#[macro_export]
#[doc(hidden)]
macro_rules! __nbt_list {
    ($list:ident ()) => {};
    // Single-token elements, the common case.
    ($list:ident () $elem:tt , $($rest:tt)*) => {
        $list.push($crate::__nbt_value!($elem));
        $crate::__nbt_list!($list () $($rest)*);
    };
    ($list:ident ($($elem:tt)+)) => {
        $list.push($crate::__nbt_value!($($elem)+));
    };
    ($list:ident ($($elem:tt)+) , $($rest:tt)*) => {
        $list.push($crate::__nbt_value!($($elem)+));
        $crate::__nbt_list!($list () $($rest)*);
    };
    ($list:ident ($($elem:tt)*) $next:tt $($rest:tt)*) => {
        $crate::__nbt_list!($list ($($elem)* $next) $($rest)*);
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! __nbt_compound {
    ($compound:ident) => {};
    ($compound:ident $key:tt : $($rest:tt)+) => {
        $crate::__nbt_entry!($compound ($key) () $($rest)+);
    };
}

/// Collects the tokens of one compound value, up to a top-level comma.
#[macro_export]
#[doc(hidden)]
macro_rules! __nbt_entry {
    ($compound:ident ($key:expr) ($($value:tt)+) , $($rest:tt)*) => {
        $compound.insert($key, $crate::__nbt_value!($($value)+));
        $crate::__nbt_compound!($compound $($rest)*);
    };
    ($compound:ident ($key:expr) ($($value:tt)+)) => {
        $compound.insert($key, $crate::__nbt_value!($($value)+));
    };
    ($compound:ident ($key:expr) ($($value:tt)*) $next:tt $($rest:tt)*) => {
        $crate::__nbt_entry!($compound ($key) ($($value)* $next) $($rest)*);
    };
}
