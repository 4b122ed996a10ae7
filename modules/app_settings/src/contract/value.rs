//! Text conversions for setting values
//!
//! Settings are always stored as text. A type can be written when it implements
//! [`ToSettingText`] and read when it implements [`FromSettingText`]; anything
//! else is rejected at compile time.
//!
//! Numbers and booleans are parsed leniently with respect to surrounding ASCII
//! whitespace, but never coerced: `"3.14"` is not an integer and `"1"` is not a
//! boolean. Strings and chars are taken verbatim.

/// Canonical, round-trippable text form of a value
pub trait ToSettingText {
    /// Render the value, or explain why it has no text form
    fn to_setting_text(&self) -> Result<String, String>;
}

/// Parse a value back from its stored text
pub trait FromSettingText: Sized {
    /// Type name used in conversion errors
    const TYPE_NAME: &'static str;

    /// `None` when the text does not match the type's grammar
    fn from_setting_text(text: &str) -> Option<Self>;
}

impl ToSettingText for bool {
    fn to_setting_text(&self) -> Result<String, String> {
        Ok(if *self { "true" } else { "false" }.to_string())
    }
}

impl FromSettingText for bool {
    const TYPE_NAME: &'static str = "bool";

    fn from_setting_text(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.eq_ignore_ascii_case("true") {
            Some(true)
        } else if text.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }
}

macro_rules! integer_setting_text {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToSettingText for $ty {
                fn to_setting_text(&self) -> Result<String, String> {
                    Ok(self.to_string())
                }
            }

            impl FromSettingText for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                fn from_setting_text(text: &str) -> Option<Self> {
                    text.trim().parse().ok()
                }
            }
        )*
    };
}

integer_setting_text!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_setting_text {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToSettingText for $ty {
                fn to_setting_text(&self) -> Result<String, String> {
                    if self.is_finite() {
                        // Display is the shortest text that parses back to the same value
                        Ok(self.to_string())
                    } else {
                        Err(format!("non-finite {} {} has no textual form", stringify!($ty), self))
                    }
                }
            }

            impl FromSettingText for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                fn from_setting_text(text: &str) -> Option<Self> {
                    text.trim().parse().ok()
                }
            }
        )*
    };
}

float_setting_text!(f32, f64);

impl ToSettingText for str {
    fn to_setting_text(&self) -> Result<String, String> {
        Ok(self.to_string())
    }
}

impl ToSettingText for String {
    fn to_setting_text(&self) -> Result<String, String> {
        Ok(self.clone())
    }
}

impl FromSettingText for String {
    const TYPE_NAME: &'static str = "String";

    fn from_setting_text(text: &str) -> Option<Self> {
        Some(text.to_string())
    }
}

impl ToSettingText for char {
    fn to_setting_text(&self) -> Result<String, String> {
        Ok(self.to_string())
    }
}

impl FromSettingText for char {
    const TYPE_NAME: &'static str = "char";

    fn from_setting_text(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

impl<T: ToSettingText> ToSettingText for Option<T> {
    fn to_setting_text(&self) -> Result<String, String> {
        match self {
            Some(value) => value.to_setting_text(),
            None => Err("value is None".to_string()),
        }
    }
}

impl<T: FromSettingText> FromSettingText for Option<T> {
    const TYPE_NAME: &'static str = T::TYPE_NAME;

    fn from_setting_text(text: &str) -> Option<Self> {
        T::from_setting_text(text).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_text() {
        assert_eq!(true.to_setting_text().unwrap(), "true");
        assert_eq!(false.to_setting_text().unwrap(), "false");
        assert_eq!(bool::from_setting_text("True"), Some(true));
        assert_eq!(bool::from_setting_text(" FALSE\n"), Some(false));
        assert_eq!(bool::from_setting_text("1"), None);
        assert_eq!(bool::from_setting_text("yes"), None);
    }

    #[test]
    fn test_integer_grammar() {
        assert_eq!(i32::from_setting_text("42"), Some(42));
        assert_eq!(i32::from_setting_text(" -7 "), Some(-7));
        assert_eq!(i32::from_setting_text("+7"), Some(7));
        assert_eq!(i32::from_setting_text("3.14"), None);
        assert_eq!(i32::from_setting_text("1e3"), None);
        assert_eq!(i32::from_setting_text("abc"), None);
        assert_eq!(i32::from_setting_text(""), None);
        assert_eq!(u8::from_setting_text("256"), None);
        assert_eq!(u32::from_setting_text("-1"), None);
        assert_eq!(i64::MIN.to_setting_text().unwrap(), "-9223372036854775808");
    }

    #[test]
    fn test_float_text() {
        assert_eq!(f64::from_setting_text("2.75"), Some(2.75));
        assert_eq!(f64::from_setting_text("42"), Some(42.0));
        assert_eq!(f64::from_setting_text("1.5e3"), Some(1500.0));
        assert_eq!(f64::from_setting_text("pi"), None);

        let value = 0.1_f64 + 0.2_f64;
        let text = value.to_setting_text().unwrap();
        assert_eq!(f64::from_setting_text(&text), Some(value));

        let value = 1.0e-7_f32;
        let text = value.to_setting_text().unwrap();
        assert_eq!(f32::from_setting_text(&text), Some(value));
    }

    #[test]
    fn test_non_finite_float_has_no_text() {
        assert!(f64::NAN.to_setting_text().is_err());
        assert!(f64::INFINITY.to_setting_text().is_err());
        assert!(f32::NEG_INFINITY.to_setting_text().is_err());
    }

    #[test]
    fn test_string_is_verbatim() {
        assert_eq!(" padded ".to_setting_text().unwrap(), " padded ");
        assert_eq!(
            String::from_setting_text(" padded "),
            Some(" padded ".to_string())
        );
        assert_eq!(String::from_setting_text(""), Some(String::new()));
    }

    #[test]
    fn test_char_requires_single_char() {
        assert_eq!(char::from_setting_text("x"), Some('x'));
        assert_eq!(char::from_setting_text("é"), Some('é'));
        assert_eq!(char::from_setting_text("xy"), None);
        assert_eq!(char::from_setting_text(""), None);
    }

    #[test]
    fn test_option_text() {
        assert_eq!(Some(5_u16).to_setting_text().unwrap(), "5");
        assert!(None::<u16>.to_setting_text().is_err());
        assert_eq!(Option::<u16>::from_setting_text("5"), Some(Some(5)));
        assert_eq!(Option::<u16>::from_setting_text("five"), None);
        assert_eq!(<Option<u16> as FromSettingText>::TYPE_NAME, "u16");
    }
}
