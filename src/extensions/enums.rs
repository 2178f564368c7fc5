use strum::IntoEnumIterator;

trait EnumCodeCsv: IntoEnumIterator + AsRef<str> + Sized {
    fn code_csv() -> String {
        let mut out = String::new();
        for (i, variant) in Self::iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(variant.as_ref());
        }
        out
    }
}
impl<T> EnumCodeCsv for T where T: IntoEnumIterator + AsRef<str> + Sized {}

/// Comma-joined code characters of an iterable enum, for "Valid ..." hints
/// in error messages.
pub fn valid_csv<T>() -> String
where
    T: IntoEnumIterator + AsRef<str> + Sized,
{
    <T as EnumCodeCsv>::code_csv()
}
