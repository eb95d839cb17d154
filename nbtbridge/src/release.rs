use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

macro_rules! releases {
    ($($name:ident => ($major:literal, $minor:literal, $patch:literal)),* $(,)?) => {
        /// A server release whose internal tag classes the codec knows how to
        /// bind. Releases are named after the versioned package the server
        /// ships its internals under, eg `v1_16_R3`.
        ///
        /// Variants are declared oldest first, so ordering follows release
        /// order.
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Release {
            $($name,)*
        }

        impl Release {
            pub const ALL: &'static [Release] = &[$(Release::$name,)*];

            /// The first Minecraft version the release shipped with, as
            /// `(major, minor, patch)`. `v1_8_R3` is 1.8.4, not 1.8.3.
            pub fn version(self) -> (u8, u8, u8) {
                match self {
                    $(Release::$name => ($major, $minor, $patch),)*
                }
            }

            /// The package segment, eg `v1_17_R1`.
            pub fn package(self) -> &'static str {
                match self {
                    $(Release::$name => stringify!($name),)*
                }
            }
        }

        impl FromStr for Release {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $(stringify!($name) => Ok(Release::$name),)*
                    _ => Err(Error::unknown_release(s)),
                }
            }
        }
    };
}

releases! {
    v1_8_R1 => (1, 8, 0),
    v1_8_R2 => (1, 8, 3),
    v1_8_R3 => (1, 8, 4),
    v1_9_R1 => (1, 9, 0),
    v1_9_R2 => (1, 9, 2),
    v1_10_R1 => (1, 10, 0),
    v1_11_R1 => (1, 11, 0),
    v1_12_R1 => (1, 12, 0),
    v1_13_R1 => (1, 13, 0),
    v1_13_R2 => (1, 13, 2),
    v1_14_R1 => (1, 14, 0),
    v1_15_R1 => (1, 15, 0),
    v1_16_R1 => (1, 16, 1),
    v1_16_R2 => (1, 16, 2),
    v1_16_R3 => (1, 16, 4),
    v1_17_R1 => (1, 17, 0),
    v1_18_R1 => (1, 18, 0),
    v1_18_R2 => (1, 18, 2),
}

impl Release {
    /// Detects the release from the server's implementation package, eg
    /// `org.bukkit.craftbukkit.v1_16_R3`. Only the last segment is looked at.
    pub fn detect(server_package: &str) -> Result<Release> {
        let segment = server_package
            .rsplit('.')
            .next()
            .unwrap_or(server_package);
        segment
            .parse()
            .map_err(|_| Error::unknown_release(server_package))
    }

    pub fn is_at_least(self, other: Release) -> bool {
        self >= other
    }

    /// Releases from 1.17 on moved the internal classes out of the versioned
    /// package into their real package names.
    pub fn has_flat_packages(self) -> bool {
        self.is_at_least(Release::v1_17_R1)
    }

    pub fn has_long_array(self) -> bool {
        self.is_at_least(Release::v1_12_R1)
    }
}

impl fmt::Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.package())
    }
}
