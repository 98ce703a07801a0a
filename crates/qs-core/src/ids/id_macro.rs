//! Common macro for implementing ID wrapper types.

macro_rules! impl_db_id {
    ($($name:ident),* $(,)?) => {
        $(
            impl $name {
                pub const fn new(raw: i64) -> Self {
                    Self(raw)
                }

                pub const fn inner(&self) -> i64 {
                    self.0
                }
            }

            impl std::fmt::Display for $name {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.0)
                }
            }

            impl From<i64> for $name {
                fn from(raw: i64) -> Self {
                    Self(raw)
                }
            }

            impl From<$name> for i64 {
                fn from(id: $name) -> i64 {
                    id.0
                }
            }
        )*
    };
}

pub(crate) use impl_db_id;
