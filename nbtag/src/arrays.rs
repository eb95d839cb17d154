use std::fmt;
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

// The three array tags only differ in element type and in the prefix of their
// textual form, so they are stamped out from one template.
macro_rules! array_tag {
    ($(#[$doc:meta])* $name:ident, $elem:ty, $prefix:literal) => {
        $(#[$doc])*
        #[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
        #[serde(transparent)]
        pub struct $name {
            data: Vec<$elem>,
        }

        impl $name {
            pub fn new(data: Vec<$elem>) -> Self {
                Self { data }
            }

            pub fn into_inner(self) -> Vec<$elem> {
                self.data
            }
        }

        impl Deref for $name {
            type Target = Vec<$elem>;

            fn deref(&self) -> &Self::Target {
                &self.data
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.data
            }
        }

        impl From<Vec<$elem>> for $name {
            fn from(data: Vec<$elem>) -> Self {
                Self::new(data)
            }
        }

        impl From<&[$elem]> for $name {
            fn from(data: &[$elem]) -> Self {
                Self::new(data.to_vec())
            }
        }

        impl From<$name> for Vec<$elem> {
            fn from(array: $name) -> Self {
                array.data
            }
        }

        impl FromIterator<$elem> for $name {
            fn from_iter<I: IntoIterator<Item = $elem>>(iter: I) -> Self {
                Self::new(iter.into_iter().collect())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str($prefix)?;
                for (i, v) in self.data.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", v)?;
                }
                f.write_str("]")
            }
        }
    };
}

array_tag!(
    /// Payload of a ByteArray tag. Renders as `[B;1,2,3]`.
    ByteArray,
    i8,
    "[B;"
);

array_tag!(
    /// Payload of an IntArray tag. Renders as `[I;1,2,3]`.
    IntArray,
    i32,
    "[I;"
);

array_tag!(
    /// Payload of a LongArray tag. Renders as `[L;1,2,3]`.
    ///
    /// Servers older than 1.12 have no long array tag at all; see the
    /// `nbtbridge` crate for how such values are treated there.
    LongArray,
    i64,
    "[L;"
);
