use std::fmt::{self, Write};
/// Fractional digits used for every floating-point sample on the wire.
pub const FLOAT_PRECISION: usize = 10;
/// A value that can be stored in a [`DataStream`](crate::stream::DataStream) and rendered
/// as decimal text.
pub trait Sample: Copy + Default {
    fn write_decimal<W: Write>(&self, out: &mut W) -> fmt::Result;
}
macro_rules! integer_sample {
    ($($t:ty),*) => {$(
        impl Sample for $t {
            fn write_decimal<W: Write>(&self, out: &mut W) -> fmt::Result {
                write!(out, "{}", self)
            }
        }
    )*};
}
macro_rules! float_sample {
    ($($t:ty),*) => {$(
        impl Sample for $t {
            fn write_decimal<W: Write>(&self, out: &mut W) -> fmt::Result {
                write!(out, "{:.*}", FLOAT_PRECISION, self)
            }
        }
    )*};
}
integer_sample!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_sample!(f32, f64);
