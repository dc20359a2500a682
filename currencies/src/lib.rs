//! Static Currency Catalogue with Macro-Based Currency Generation
//!
//! Every currency the converter offers is declared once in the
//! `define_currencies!` invocation below, together with the two-letter
//! country code used to pick its flag. The macro generates the
//! `CurrencyCode` enum, its parsing and display impls, and the ordered
//! option list the selectors are populated from.
//!
//! # Adding a New Currency
//! Add a line to the `define_currencies!` macro invocation:
//! ```ignore
//! define_currencies! {
//!     // ... existing currencies ...
//!     XAU => ("XAU", "ZZ"),
//! }
//! ```
//!
//! # Example
//! ```
//! use currencies::CurrencyCode;
//!
//! let inr: CurrencyCode = "inr".parse().unwrap();
//! assert_eq!(inr.code(), "INR");
//! assert_eq!(inr.country_code(), "IN");
//! assert_eq!(CurrencyCode::all()[0].code(), "AED");
//! ```

use std::fmt;

/// Returned when a string does not name a catalogued currency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown currency: {0}")]
pub struct UnknownCurrency(pub String);

/// Identifier of the flag shown next to a currency selector.
///
/// This is the ISO 3166 alpha-2 country code; turning it into an image is
/// the presentation layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlagId(&'static str);

impl FlagId {
    pub fn country_code(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FlagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// THE MACRO: Defines the CurrencyCode enum and its lookup tables
// ─────────────────────────────────────────────────────────────────────────────

/// Macro to define the currency catalogue.
///
/// # Syntax
/// ```ignore
/// define_currencies! {
///     CurrencyName => ("CODE", "COUNTRY"),
/// }
/// ```
///
/// Declaration order is the order options are presented in.
#[macro_export]
macro_rules! define_currencies {
    (
        $(
            $name:ident => ($code:literal, $country:literal)
        ),* $(,)?
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "UPPERCASE")]
        pub enum CurrencyCode {
            $($name),*
        }

        impl CurrencyCode {
            pub fn code(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $code),*
                }
            }

            pub fn country_code(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $country),*
                }
            }

            pub fn flag(&self) -> FlagId {
                FlagId(self.country_code())
            }

            pub fn all() -> &'static [CurrencyCode] {
                &[$(CurrencyCode::$name),*]
            }
        }

        impl std::fmt::Display for CurrencyCode {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }

        impl std::str::FromStr for CurrencyCode {
            type Err = UnknownCurrency;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_uppercase().as_str() {
                    $($code => Ok(CurrencyCode::$name),)*
                    _ => Err(UnknownCurrency(s.to_string())),
                }
            }
        }
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// CURRENCY DEFINITIONS - Add new currencies here!
// ─────────────────────────────────────────────────────────────────────────────

define_currencies! {
    AED => ("AED", "AE"),
    AFN => ("AFN", "AF"),
    XCD => ("XCD", "AG"),
    ALL => ("ALL", "AL"),
    AMD => ("AMD", "AM"),
    ANG => ("ANG", "AN"),
    AOA => ("AOA", "AO"),
    AQD => ("AQD", "AQ"),
    ARS => ("ARS", "AR"),
    AUD => ("AUD", "AU"),
    AZN => ("AZN", "AZ"),
    BAM => ("BAM", "BA"),
    BBD => ("BBD", "BB"),
    BDT => ("BDT", "BD"),
    XOF => ("XOF", "BE"),
    BGN => ("BGN", "BG"),
    BHD => ("BHD", "BH"),
    BIF => ("BIF", "BI"),
    BMD => ("BMD", "BM"),
    BND => ("BND", "BN"),
    BOB => ("BOB", "BO"),
    BRL => ("BRL", "BR"),
    BSD => ("BSD", "BS"),
    NOK => ("NOK", "BV"),
    BWP => ("BWP", "BW"),
    BYR => ("BYR", "BY"),
    BZD => ("BZD", "BZ"),
    CAD => ("CAD", "CA"),
    CDF => ("CDF", "CD"),
    XAF => ("XAF", "CF"),
    CHF => ("CHF", "CH"),
    CLP => ("CLP", "CL"),
    CNY => ("CNY", "CN"),
    COP => ("COP", "CO"),
    CRC => ("CRC", "CR"),
    CUP => ("CUP", "CU"),
    CVE => ("CVE", "CV"),
    CYP => ("CYP", "CY"),
    CZK => ("CZK", "CZ"),
    DJF => ("DJF", "DJ"),
    DKK => ("DKK", "DK"),
    DOP => ("DOP", "DO"),
    DZD => ("DZD", "DZ"),
    ECS => ("ECS", "EC"),
    EEK => ("EEK", "EE"),
    EGP => ("EGP", "EG"),
    ETB => ("ETB", "ET"),
    EUR => ("EUR", "FR"),
    FJD => ("FJD", "FJ"),
    FKP => ("FKP", "FK"),
    GBP => ("GBP", "GB"),
    GEL => ("GEL", "GE"),
    GGP => ("GGP", "GG"),
    GHS => ("GHS", "GH"),
    GIP => ("GIP", "GI"),
    GMD => ("GMD", "GM"),
    GNF => ("GNF", "GN"),
    GTQ => ("GTQ", "GT"),
    GYD => ("GYD", "GY"),
    HKD => ("HKD", "HK"),
    HNL => ("HNL", "HN"),
    HRK => ("HRK", "HR"),
    HTG => ("HTG", "HT"),
    HUF => ("HUF", "HU"),
    IDR => ("IDR", "ID"),
    ILS => ("ILS", "IL"),
    INR => ("INR", "IN"),
    IQD => ("IQD", "IQ"),
    IRR => ("IRR", "IR"),
    ISK => ("ISK", "IS"),
    JMD => ("JMD", "JM"),
    JOD => ("JOD", "JO"),
    JPY => ("JPY", "JP"),
    KES => ("KES", "KE"),
    KGS => ("KGS", "KG"),
    KHR => ("KHR", "KH"),
    KMF => ("KMF", "KM"),
    KPW => ("KPW", "KP"),
    KRW => ("KRW", "KR"),
    KWD => ("KWD", "KW"),
    KYD => ("KYD", "KY"),
    KZT => ("KZT", "KZ"),
    LAK => ("LAK", "LA"),
    LBP => ("LBP", "LB"),
    LKR => ("LKR", "LK"),
    LRD => ("LRD", "LR"),
    LSL => ("LSL", "LS"),
    LTL => ("LTL", "LT"),
    LVL => ("LVL", "LV"),
    LYD => ("LYD", "LY"),
    MAD => ("MAD", "MA"),
    MDL => ("MDL", "MD"),
    MGA => ("MGA", "MG"),
    MKD => ("MKD", "MK"),
    MMK => ("MMK", "MM"),
    MNT => ("MNT", "MN"),
    MOP => ("MOP", "MO"),
    MRO => ("MRO", "MR"),
    MTL => ("MTL", "MT"),
    MUR => ("MUR", "MU"),
    MVR => ("MVR", "MV"),
    MWK => ("MWK", "MW"),
    MXN => ("MXN", "MX"),
    MYR => ("MYR", "MY"),
    MZN => ("MZN", "MZ"),
    NAD => ("NAD", "NA"),
    XPF => ("XPF", "NC"),
    NGN => ("NGN", "NG"),
    NIO => ("NIO", "NI"),
    NPR => ("NPR", "NP"),
    NZD => ("NZD", "NZ"),
    OMR => ("OMR", "OM"),
    PAB => ("PAB", "PA"),
    PEN => ("PEN", "PE"),
    PGK => ("PGK", "PG"),
    PHP => ("PHP", "PH"),
    PKR => ("PKR", "PK"),
    PLN => ("PLN", "PL"),
    PYG => ("PYG", "PY"),
    QAR => ("QAR", "QA"),
    RON => ("RON", "RO"),
    RSD => ("RSD", "RS"),
    RUB => ("RUB", "RU"),
    RWF => ("RWF", "RW"),
    SAR => ("SAR", "SA"),
    SBD => ("SBD", "SB"),
    SCR => ("SCR", "SC"),
    SDG => ("SDG", "SD"),
    SEK => ("SEK", "SE"),
    SGD => ("SGD", "SG"),
    SKK => ("SKK", "SK"),
    SLL => ("SLL", "SL"),
    SOS => ("SOS", "SO"),
    SRD => ("SRD", "SR"),
    STD => ("STD", "ST"),
    SVC => ("SVC", "SV"),
    SYP => ("SYP", "SY"),
    SZL => ("SZL", "SZ"),
    THB => ("THB", "TH"),
    TJS => ("TJS", "TJ"),
    TMT => ("TMT", "TM"),
    TND => ("TND", "TN"),
    TOP => ("TOP", "TO"),
    TRY => ("TRY", "TR"),
    TTD => ("TTD", "TT"),
    TWD => ("TWD", "TW"),
    TZS => ("TZS", "TZ"),
    UAH => ("UAH", "UA"),
    UGX => ("UGX", "UG"),
    USD => ("USD", "US"),
    UYU => ("UYU", "UY"),
    UZS => ("UZS", "UZ"),
    VEF => ("VEF", "VE"),
    VND => ("VND", "VN"),
    VUV => ("VUV", "VU"),
    YER => ("YER", "YE"),
    ZAR => ("ZAR", "ZA"),
    ZMK => ("ZMK", "ZM"),
    ZWD => ("ZWD", "ZW"),
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_currency_code_parse() {
        assert_eq!("USD".parse::<CurrencyCode>().unwrap(), CurrencyCode::USD);
        assert_eq!("eur".parse::<CurrencyCode>().unwrap(), CurrencyCode::EUR);
        assert_eq!(" inr ".parse::<CurrencyCode>().unwrap(), CurrencyCode::INR);
    }

    #[test]
    fn test_unknown_currency_rejected() {
        let err = "XYZ".parse::<CurrencyCode>().unwrap_err();
        assert_eq!(err, UnknownCurrency("XYZ".to_string()));
        assert_eq!(err.to_string(), "Unknown currency: XYZ");
    }

    #[test]
    fn test_currency_code_display() {
        assert_eq!(CurrencyCode::USD.to_string(), "USD");
        assert_eq!(CurrencyCode::TRY.to_string(), "TRY");
    }

    #[test]
    fn test_flag_lookup() {
        assert_eq!(CurrencyCode::USD.flag().country_code(), "US");
        assert_eq!(CurrencyCode::INR.flag().to_string(), "IN");
        assert_eq!(CurrencyCode::EUR.country_code(), "FR");
    }

    #[test]
    fn test_catalogue_order_is_declaration_order() {
        let all = CurrencyCode::all();
        assert_eq!(all.first(), Some(&CurrencyCode::AED));
        assert_eq!(all.last(), Some(&CurrencyCode::ZWD));
        let usd = all.iter().position(|c| *c == CurrencyCode::USD).unwrap();
        let inr = all.iter().position(|c| *c == CurrencyCode::INR).unwrap();
        assert!(inr < usd);
    }

    #[test]
    fn test_codes_are_unique_and_round_trip() {
        let all = CurrencyCode::all();
        let codes: HashSet<_> = all.iter().map(|c| c.code()).collect();
        assert_eq!(codes.len(), all.len());
        for code in all {
            assert_eq!(code.code().parse::<CurrencyCode>().unwrap(), *code);
        }
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&CurrencyCode::GBP).unwrap();
        assert_eq!(json, "\"GBP\"");
        let back: CurrencyCode = serde_json::from_str("\"JPY\"").unwrap();
        assert_eq!(back, CurrencyCode::JPY);
    }
}
