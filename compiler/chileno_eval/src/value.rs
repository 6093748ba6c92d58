//! Runtime values.
//!
//! A closed variant over integer, float, string and none. Every other part
//! of the evaluator goes through the guarded projections and coercion rules
//! defined here.

use std::fmt;

use chileno_ir::DeclaredType;

/// Tagged runtime datum produced by evaluating a node.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i32),
    Float(f32),
    Str(String),
    None,
}

impl Value {
    /// Create a string value.
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Comparison result: `Int(1)` for true, `Int(0)` for false.
    #[inline]
    pub fn from_bool(b: bool) -> Self {
        Value::Int(i32::from(b))
    }

    #[inline]
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric payload promoted to `f64`; `None` for strings and none.
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(f64::from(*n)),
            Value::Float(f) => Some(f64::from(*f)),
            Value::Str(_) | Value::None => None,
        }
    }

    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Truthiness used by `if`, `while` and `for`: numeric and non-zero.
    /// Strings and none are always false.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Int(n) => *n != 0,
            Value::Float(f) => *f != 0.0,
            Value::Str(_) | Value::None => false,
        }
    }

    /// Type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::None => "none",
        }
    }

    /// Declared type matching this value's tag. `None` has no declared type.
    pub fn declared_type(&self) -> Option<DeclaredType> {
        match self {
            Value::Int(_) => Some(DeclaredType::Int),
            Value::Float(_) => Some(DeclaredType::Float),
            Value::Str(_) => Some(DeclaredType::String),
            Value::None => None,
        }
    }

    /// Textual form used by `print` and by `+` concatenation.
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// Convert a value for storage in a variable of type `ty`.
    ///
    /// Int is accepted where float is declared and is widened. Strings and
    /// numbers never mix, and none is never assignable to a typed variable.
    #[expect(
        clippy::cast_precision_loss,
        reason = "int to float widening mirrors the language's float type"
    )]
    pub fn coerce_to(self, ty: DeclaredType) -> Result<Value, Value> {
        match (ty, self) {
            (DeclaredType::Int, v @ Value::Int(_))
            | (DeclaredType::Float, v @ Value::Float(_))
            | (DeclaredType::String, v @ Value::Str(_)) => Ok(v),
            (DeclaredType::Float, Value::Int(n)) => Ok(Value::Float(n as f32)),
            (_, other) => Err(other),
        }
    }

    /// Parse one input line for a variable of type `ty`.
    ///
    /// Numeric parses skip leading whitespace and must consume the rest of
    /// the line; strings are taken verbatim.
    pub fn parse_input(ty: DeclaredType, line: &str) -> Option<Value> {
        match ty {
            DeclaredType::Int => line.trim_start().parse::<i32>().ok().map(Value::Int),
            DeclaredType::Float => line.trim_start().parse::<f32>().ok().map(Value::Float),
            DeclaredType::String => Some(Value::string(line)),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => f.write_str(&format_general(f64::from(*x))),
            Value::Str(s) => f.write_str(s),
            Value::None => f.write_str("null"),
        }
    }
}

/// Float text in the default format of C++ output streams (`%g`): six
/// significant digits, trailing zeros dropped, exponent form below `1e-4`
/// or from `1e6` up.
fn format_general(x: f64) -> String {
    const SIGNIFICANT: i32 = 6;

    if x.is_nan() {
        return if x.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if x.is_infinite() {
        return if x < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // The exponent is taken after rounding, so 999999.5 switches to `1e+06`.
    let scientific = format!("{x:.5e}");
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= SIGNIFICANT {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = usize::try_from(SIGNIFICANT - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{x:.decimals$}")).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
