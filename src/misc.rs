/// Implements `as_str`, `Display` and `FromStr` for a fieldless enum whose
/// variants map one-to-one onto string tokens. Parsing an unknown token
/// yields the given `ConsError` variant.
macro_rules! impl_tokens {
    ($t:ident, $err:ident, { $($variant:ident => $token:literal),+ $(,)? }) => {
        impl $t {
            pub const ALL: &'static [$t] = &[$($t::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($t::$variant => $token),+
                }
            }
        }

        impl std::fmt::Display for $t {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $t {
            type Err = $crate::error::ConsError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok($t::$variant),)+
                    _ => Err($crate::error::ConsError::$err(s.to_owned())),
                }
            }
        }
    };
}
