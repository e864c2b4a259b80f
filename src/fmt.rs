//! Number and time formatting

/// Formats a number with exactly two decimal places.
///
/// Floats round half to even on their exact binary value and a negative zero result
/// is written as `0.00`. No grouping separators are used.
pub trait ToFixed2 {
    fn to_fixed2(&self) -> String;
}

macro_rules! impl_to_fixed2_int {
    ($($ty:ty)*) => {
        $(
            impl ToFixed2 for $ty {
                #[inline]
                fn to_fixed2(&self) -> String {
                    let mut buf = itoa::Buffer::new();
                    let digits = buf.format(*self);
                    let mut output = String::with_capacity(digits.len() + 3);
                    output.push_str(digits);
                    output.push_str(".00");
                    output
                }
            }
        )*
    };
}

impl_to_fixed2_int!(i8 u8 i16 u16 i32 u32 i64 u64 i128 u128 isize usize);

macro_rules! impl_to_fixed2_float {
    ($($ty:ty)*) => {
        $(
            impl ToFixed2 for $ty {
                #[inline]
                fn to_fixed2(&self) -> String {
                    let value = format!("{:.2}", self);
                    if value == "-0.00" { String::from("0.00") } else { value }
                }
            }
        )*
    };
}

impl_to_fixed2_float!(f32 f64);

/// `MM:SS` for a duration given in milliseconds.
///
/// Minutes keep counting past 59, so an hour reads `60:00`.
pub fn format_clock(millis: u64) -> String {
    let total_seconds = millis / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;

    let mut buf = itoa::Buffer::new();
    let mut output = String::with_capacity(5);
    if minutes < 10 {
        output.push('0');
    }
    output.push_str(buf.format(minutes));
    output.push(':');
    if seconds < 10 {
        output.push('0');
    }
    output.push_str(buf.format(seconds));
    output
}
