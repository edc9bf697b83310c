use std::cmp::Ordering;
use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single parsed cell of a catalogue column
// ---------------------------------------------------------------------------

/// Tokens read as a missing value, matching the usual dataframe CSV defaults.
pub const MISSING_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A dynamically-typed cell value. The type is decided per column, see
/// [`infer_column`].
#[derive(Debug, Clone)]
pub enum CellValue {
    String(String),
    Integer(i64),
    /// Never NaN and never negative zero.
    Float(f64),
    Bool(bool),
    Null,
}

// -- Manual Eq/Ord so CellValue can live in a BTreeSet --

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    /// `Bool`, `Integer` and `Float` share one numeric scale, so `true`,
    /// `1` and `1.0` are the same value. Otherwise `Null` < numbers < strings.
    fn cmp(&self, other: &Self) -> Ordering {
        use CellValue::*;
        fn rank(v: &CellValue) -> u8 {
            match v {
                Null => 0,
                Bool(_) | Integer(_) | Float(_) => 1,
                String(_) => 2,
            }
        }
        match (self.as_number(), other.as_number()) {
            (Some(Number::Int(a)), Some(Number::Int(b))) => a.cmp(&b),
            (Some(Number::Float(a)), Some(Number::Float(b))) => a.total_cmp(&b),
            (Some(Number::Int(a)), Some(Number::Float(b))) => cmp_int_float(a, b),
            (Some(Number::Float(a)), Some(Number::Int(b))) => cmp_int_float(b, a).reverse(),
            _ => match (self, other) {
                (String(a), String(b)) => a.cmp(b),
                _ => rank(self).cmp(&rank(other)),
            },
        }
    }
}

#[derive(Clone, Copy)]
enum Number {
    Int(i64),
    Float(f64),
}

/// Exact comparison of an integer with a non-NaN float.
fn cmp_int_float(i: i64, f: f64) -> Ordering {
    // 2^63: the first float above every i64.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if f >= LIMIT {
        return Ordering::Less;
    }
    if f < -LIMIT {
        return Ordering::Greater;
    }
    let whole = f.trunc();
    match i.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64.total_cmp(&(f - whole)),
        unequal => unequal,
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{}", format_float(*v)),
            CellValue::Bool(true) => write!(f, "True"),
            CellValue::Bool(false) => write!(f, "False"),
            CellValue::Null => write!(f, "nan"),
        }
    }
}

impl CellValue {
    fn as_number(&self) -> Option<Number> {
        match self {
            CellValue::Bool(b) => Some(Number::Int(i64::from(*b))),
            CellValue::Integer(i) => Some(Number::Int(*i)),
            CellValue::Float(v) => Some(Number::Float(*v)),
            _ => None,
        }
    }

    fn float(v: f64) -> Self {
        if v.is_nan() {
            CellValue::Null
        } else if v == 0.0 {
            CellValue::Float(0.0)
        } else {
            CellValue::Float(v)
        }
    }
}

/// Shortest round-trip form, always with a fractional part or an exponent
/// (`1.0`, `0.25`, `1e-05`, `1e+16`).
fn format_float(v: f64) -> String {
    if v.is_infinite() {
        return if v > 0.0 { "inf".into() } else { "-inf".into() };
    }
    let abs = v.abs();
    if abs != 0.0 && !(1e-4..1e16).contains(&abs) {
        let sci = format!("{v:e}");
        if let Some((mantissa, exp)) = sci.split_once('e') {
            if let Ok(exp) = exp.parse::<i32>() {
                let sign = if exp < 0 { '-' } else { '+' };
                return format!("{mantissa}e{sign}{:02}", exp.abs());
            }
        }
        return sci;
    }
    if v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}

fn is_missing(s: &str) -> bool {
    MISSING_TOKENS.contains(&s)
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "True" | "TRUE" | "true" => Some(true),
        "False" | "FALSE" | "false" => Some(false),
        _ => None,
    }
}

/// Type a whole column of raw cells at once.
///
/// * no missing cells and every cell an `i64` → `Integer`
/// * every present cell numeric → `Float` (missing cells stay `Null`)
/// * every present cell a boolean literal → `Bool`
/// * anything else → `String`, verbatim
pub fn infer_column<S: AsRef<str>>(raw: &[S]) -> Vec<CellValue> {
    let present: Vec<&str> = raw
        .iter()
        .map(|s| s.as_ref())
        .filter(|s| !is_missing(s))
        .collect();
    let any_missing = present.len() != raw.len();

    if present.is_empty() {
        return vec![CellValue::Null; raw.len()];
    }

    if !any_missing && present.iter().all(|s| s.parse::<i64>().is_ok()) {
        return map_present(raw, |s| s.parse().ok().map(CellValue::Integer));
    }
    if present.iter().all(|s| s.parse::<f64>().is_ok()) {
        return map_present(raw, |s| s.parse().ok().map(CellValue::float));
    }
    if present.iter().all(|s| parse_bool(s).is_some()) {
        return map_present(raw, |s| parse_bool(s).map(CellValue::Bool));
    }
    map_present(raw, |s| Some(CellValue::String(s.to_string())))
}

fn map_present<S: AsRef<str>>(raw: &[S], f: impl Fn(&str) -> Option<CellValue>) -> Vec<CellValue> {
    raw.iter()
        .map(|s| {
            let s = s.as_ref();
            if is_missing(s) {
                CellValue::Null
            } else {
                f(s).unwrap_or(CellValue::Null)
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// MutationRecord – one (drug, mutation, prediction) call
// ---------------------------------------------------------------------------

/// A single resistance call taken from one catalogue row.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MutationRecord {
    pub drug: CellValue,
    pub mutation: CellValue,
    pub prediction: CellValue,
}

impl MutationRecord {
    pub fn new(drug: CellValue, mutation: CellValue, prediction: CellValue) -> Self {
        Self {
            drug,
            mutation,
            prediction,
        }
    }
}

impl fmt::Display for MutationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.drug, self.mutation, self.prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> CellValue {
        CellValue::String(v.to_string())
    }

    #[test]
    fn text_column_keeps_raw_strings() {
        let col = infer_column(&["RIF", " INH ", "EMB"]);
        assert_eq!(col, vec![s("RIF"), s(" INH "), s("EMB")]);
    }

    #[test]
    fn missing_tokens_become_null_in_text_column() {
        let col = infer_column(&["R", "", "NA", "S"]);
        assert_eq!(col, vec![s("R"), CellValue::Null, CellValue::Null, s("S")]);
    }

    #[test]
    fn integer_column_without_gaps() {
        let col = infer_column(&["1", "-2", "30"]);
        assert_eq!(
            col,
            vec![CellValue::Integer(1), CellValue::Integer(-2), CellValue::Integer(30)]
        );
    }

    #[test]
    fn integer_column_with_gap_widens_to_float() {
        let col = infer_column(&["1", "", "3"]);
        assert_eq!(col, vec![CellValue::Float(1.0), CellValue::Null, CellValue::Float(3.0)]);
        assert_eq!(col[0].to_string(), "1.0");
    }

    #[test]
    fn mixed_numbers_and_text_stay_text() {
        let col = infer_column(&["1", "R"]);
        assert_eq!(col, vec![s("1"), s("R")]);
    }

    #[test]
    fn boolean_column() {
        let col = infer_column(&["True", "false", "TRUE"]);
        assert_eq!(
            col,
            vec![CellValue::Bool(true), CellValue::Bool(false), CellValue::Bool(true)]
        );
        assert_eq!(col[0].to_string(), "True");
    }

    #[test]
    fn all_missing_column_is_null() {
        let col = infer_column(&["", "nan"]);
        assert_eq!(col, vec![CellValue::Null, CellValue::Null]);
        assert_eq!(col[0].to_string(), "nan");
    }

    #[test]
    fn negative_zero_equals_zero() {
        let col = infer_column(&["-0.0", "0.5"]);
        assert_eq!(col[0], CellValue::Float(0.0));
    }

    #[test]
    fn floats_display_like_the_dataframe_printer() {
        assert_eq!(format_float(2.0), "2.0");
        assert_eq!(format_float(0.25), "0.25");
        assert_eq!(format_float(0.00001), "1e-05");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn record_displays_space_separated() {
        let rec = MutationRecord::new(s("INH"), s("katG_S315T"), s("R"));
        assert_eq!(rec.to_string(), "INH katG_S315T R");
    }

    #[test]
    fn numbers_compare_across_types() {
        assert_eq!(CellValue::Integer(1), CellValue::Float(1.0));
        assert_eq!(CellValue::Bool(true), CellValue::Integer(1));
        assert_eq!(CellValue::Bool(false), CellValue::Float(0.0));
        assert!(CellValue::Integer(1) < CellValue::Float(1.5));
        assert!(CellValue::Float(-0.5) < CellValue::Integer(0));
        assert!(CellValue::Integer(i64::MAX) < CellValue::Float(1e19));
        assert_ne!(CellValue::Integer(1), s("1"));
        assert_ne!(CellValue::Null, CellValue::Integer(0));
    }

    #[test]
    fn gap_widened_column_still_matches_integer_column() {
        let full = infer_column(&["1", "2"]);
        let gapped = infer_column(&["1", ""]);
        let left: std::collections::BTreeSet<MutationRecord> = ["m1", "m2"]
            .iter()
            .zip(full)
            .map(|(m, p)| MutationRecord::new(s("RIF"), s(m), p))
            .collect();
        let right: std::collections::BTreeSet<MutationRecord> = ["m1", "m2"]
            .iter()
            .zip(gapped)
            .map(|(m, p)| MutationRecord::new(s("RIF"), s(m), p))
            .collect();

        assert_eq!(left.intersection(&right).count(), 1);
    }
}
