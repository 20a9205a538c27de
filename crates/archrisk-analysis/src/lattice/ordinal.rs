//! The `Ordinal` trait and the `ordinal_enum!` generator.

/// A totally ordered, finite scale.
///
/// `LEVELS` lists every value lowest first; `rank` is the index into it.
pub trait Ordinal: Copy + Ord + 'static {
    const LEVELS: &'static [Self];

    fn rank(self) -> usize;

    /// The lowest value on the scale.
    fn floor() -> Self {
        Self::LEVELS[0]
    }

    /// The highest value on the scale.
    fn ceiling() -> Self {
        Self::LEVELS[Self::LEVELS.len() - 1]
    }

    /// One step up, saturating at `ceiling()`.
    fn increment(self) -> Self {
        Self::LEVELS.get(self.rank() + 1).copied().unwrap_or(self)
    }

    /// One step down, saturating at `floor()`.
    fn decrement(self) -> Self {
        match self.rank().checked_sub(1) {
            Some(r) => Self::LEVELS[r],
            None => self,
        }
    }

    /// `n` steps up, saturating.
    fn increment_by(self, n: usize) -> Self {
        let r = (self.rank() + n).min(Self::LEVELS.len() - 1);
        Self::LEVELS[r]
    }

    /// `n` steps down, saturating.
    fn decrement_by(self, n: usize) -> Self {
        Self::LEVELS[self.rank().saturating_sub(n)]
    }

    fn is_floor(self) -> bool {
        self.rank() == 0
    }

    fn is_ceiling(self) -> bool {
        self.rank() + 1 == Self::LEVELS.len()
    }
}

/// Returned when a level name does not belong to the scale.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {scale} level '{value}'")]
pub struct ParseLevelError {
    pub scale: &'static str,
    pub value: String,
}

/// Defines an ordinal enum: lowest variant first, each with its kebab-case name.
macro_rules! ordinal_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $scale:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $text ),+
                }
            }

            pub fn all() -> &'static [$name] {
                <Self as $crate::lattice::Ordinal>::LEVELS
            }
        }

        impl $crate::lattice::Ordinal for $name {
            const LEVELS: &'static [Self] = &[ $( Self::$variant ),+ ];

            fn rank(self) -> usize {
                self as usize
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::lattice::ParseLevelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $text => Ok(Self::$variant), )+
                    _ => Err($crate::lattice::ParseLevelError {
                        scale: $scale,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}
