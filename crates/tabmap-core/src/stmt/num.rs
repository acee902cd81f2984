use super::{Type, Value};

macro_rules! impl_num {
    (
        $(
            $variant:ident($ty:ty) {
                $is:ident
            } )*
    ) => {
        impl Type {
            $(
                pub fn $is(&self) -> bool {
                    matches!(self, Self::$variant)
                }
            )*
        }

        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }
        )*
    };
}

impl_num! {
    I8(i8) {
        is_i8
    }
    I16(i16) {
        is_i16
    }
    I32(i32) {
        is_i32
    }
    I64(i64) {
        is_i64
    }
    U8(u8) {
        is_u8
    }
    U16(u16) {
        is_u16
    }
    U32(u32) {
        is_u32
    }
    U64(u64) {
        is_u64
    }
    F32(f32) {
        is_f32
    }
    F64(f64) {
        is_f64
    }
}

impl Value {
    /// Returns the value as an exact integer.
    ///
    /// Floats qualify only when finite and integral; no rounding is applied.
    pub fn to_i128(&self) -> Option<i128> {
        match *self {
            Self::I8(v) => Some(v.into()),
            Self::I16(v) => Some(v.into()),
            Self::I32(v) => Some(v.into()),
            Self::I64(v) => Some(v.into()),
            Self::U8(v) => Some(v.into()),
            Self::U16(v) => Some(v.into()),
            Self::U32(v) => Some(v.into()),
            Self::U64(v) => Some(v.into()),
            Self::F32(v) => float_to_i128(v.into()),
            Self::F64(v) => float_to_i128(v),
            _ => None,
        }
    }

    /// Returns the value as a float, rounding to nearest for large integers.
    pub fn to_f64(&self) -> Option<f64> {
        match *self {
            Self::F32(v) => Some(v.into()),
            Self::F64(v) => Some(v),
            Self::I8(v) => Some(v.into()),
            Self::I16(v) => Some(v.into()),
            Self::I32(v) => Some(v.into()),
            Self::I64(v) => Some(v as f64),
            Self::U8(v) => Some(v.into()),
            Self::U16(v) => Some(v.into()),
            Self::U32(v) => Some(v.into()),
            Self::U64(v) => Some(v as f64),
            _ => None,
        }
    }
}

fn float_to_i128(v: f64) -> Option<i128> {
    // 1e38 is below i128::MAX, so the cast cannot saturate.
    (v.is_finite() && v.fract() == 0.0 && v.abs() < 1.0e38).then_some(v as i128)
}

// Integer targets accept any integer variant that fits, integral floats that
// fit, and strings that parse. Out-of-range values are errors, never wrapped.
macro_rules! impl_try_from_integer {
    ( $($ty:ty),* ) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = crate::Error;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    let converted = match &value {
                        Value::String(s) => s.trim().parse::<$ty>().ok(),
                        other => other.to_i128().and_then(|v| <$ty>::try_from(v).ok()),
                    };

                    converted.ok_or_else(|| crate::Error::type_conversion(value, stringify!($ty)))
                }
            }
        )*
    };
}

impl_try_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let converted = match &value {
            Value::String(s) => s.trim().parse::<f64>().ok(),
            other => other.to_f64(),
        };

        converted.ok_or_else(|| crate::Error::type_conversion(value, "f64"))
    }
}

impl TryFrom<Value> for f32 {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let converted = match &value {
            Value::F32(v) => Some(*v),
            Value::String(s) => s.trim().parse::<f32>().ok(),
            other => other.to_f64().map(|v| v as f32),
        };

        converted.ok_or_else(|| crate::Error::type_conversion(value, "f32"))
    }
}
