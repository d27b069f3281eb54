//! Standard-form conic equation parser.
//!
//! Accepts exactly three shapes, tried in this order:
//!
//! ```text
//! X_TERM^2/D1 + Y_TERM^2/D2 = 1     ellipse
//! X_TERM^2/D1 - Y_TERM^2/D2 = 1     hyperbola, transverse axis horizontal
//! Y_TERM^2/D1 - X_TERM^2/D2 = 1     hyperbola, transverse axis vertical
//! ```
//!
//! where `X_TERM` is `x`, `(x+n)` or `(x-n)` (likewise for `y`), `n` and the
//! denominators are unsigned integer literals, letters are case-insensitive and
//! whitespace may appear between any two tokens. The written offset has the
//! opposite sign of the center coordinate: `(x+3)` means h = -3.

use crate::gp::{Orientation, Pnt2d};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Usage hint appended to every parse failure.
pub const FORMAT_HINT: &str =
    "use a format like (x-h)^2/a^2 + (y-k)^2/b^2 = 1 or its hyperbola equivalents";

/// The single way parsing can fail: the text matches none of the three shapes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("could not parse the equation: {reason} at byte {offset}; {hint}", hint = FORMAT_HINT)]
    Unrecognized { offset: usize, reason: &'static str },
}

impl ParseError {
    fn at(offset: usize, reason: &'static str) -> Self {
        ParseError::Unrecognized { offset, reason }
    }
}

/// Ellipse or hyperbola.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConicKind {
    Ellipse,
    Hyperbola,
}

impl fmt::Display for ConicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConicKind::Ellipse => write!(f, "Ellipse"),
            ConicKind::Hyperbola => write!(f, "Hyperbola"),
        }
    }
}

/// Which of the three grammar alternatives matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationForm {
    /// `x^2/D1 + y^2/D2 = 1`
    Ellipse,
    /// `x^2/D1 - y^2/D2 = 1`
    HyperbolaHorizontal,
    /// `y^2/D1 - x^2/D2 = 1`
    HyperbolaVertical,
}

impl EquationForm {
    #[inline]
    pub fn kind(self) -> ConicKind {
        match self {
            EquationForm::Ellipse => ConicKind::Ellipse,
            EquationForm::HyperbolaHorizontal | EquationForm::HyperbolaVertical => ConicKind::Hyperbola,
        }
    }
}

/// Parameters extracted from one successful match.
///
/// Denominators are always finite and strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParsedConic {
    form: EquationForm,
    center: Pnt2d,
    denom_x: f64,
    denom_y: f64,
}

impl ParsedConic {
    /// Builds parameters directly, enforcing the positive-denominator invariant.
    pub fn new(form: EquationForm, center: Pnt2d, denom_x: f64, denom_y: f64) -> Option<Self> {
        let valid = |d: f64| d.is_finite() && d > 0.0;
        if !valid(denom_x) || !valid(denom_y) || !center.x().is_finite() || !center.y().is_finite() {
            return None;
        }
        Some(Self { form, center, denom_x, denom_y })
    }

    #[inline]
    pub fn form(&self) -> EquationForm {
        self.form
    }

    #[inline]
    pub fn kind(&self) -> ConicKind {
        self.form.kind()
    }

    /// Center (h, k).
    #[inline]
    pub fn center(&self) -> Pnt2d {
        self.center
    }

    /// Denominator under the x term.
    #[inline]
    pub fn denom_x(&self) -> f64 {
        self.denom_x
    }

    /// Denominator under the y term.
    #[inline]
    pub fn denom_y(&self) -> f64 {
        self.denom_y
    }

    /// Orientation of the major/transverse axis.
    ///
    /// Ellipse: the strictly larger denominator wins; a tie (circle) is horizontal.
    pub fn orientation(&self) -> Orientation {
        match self.form {
            EquationForm::Ellipse if self.denom_x < self.denom_y => Orientation::Vertical,
            EquationForm::Ellipse => Orientation::Horizontal,
            EquationForm::HyperbolaHorizontal => Orientation::Horizontal,
            EquationForm::HyperbolaVertical => Orientation::Vertical,
        }
    }

    /// (a², b²): the denominator along the principal axis, then the other one.
    pub fn principal_denominators(&self) -> (f64, f64) {
        match self.orientation() {
            Orientation::Horizontal => (self.denom_x, self.denom_y),
            Orientation::Vertical => (self.denom_y, self.denom_x),
        }
    }
}

impl FromStr for ParsedConic {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses a standard-form ellipse or hyperbola equation.
pub fn parse(text: &str) -> Result<ParsedConic, ParseError> {
    let parsed = EquationParser::new(text).parse_equation()?;
    tracing::debug!(
        form = ?parsed.form,
        h = parsed.center.x(),
        k = parsed.center.y(),
        denom_x = parsed.denom_x,
        denom_y = parsed.denom_y,
        "matched conic equation"
    );
    Ok(parsed)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Variable {
    X,
    Y,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Operator {
    Plus,
    Minus,
}

/// `VAR^2/D` with the center coordinate already sign-inverted.
#[derive(Clone, Copy, Debug)]
struct SquaredTerm {
    variable: Variable,
    center: f64,
    denominator: f64,
}

struct EquationParser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> EquationParser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn parse_equation(&mut self) -> Result<ParsedConic, ParseError> {
        self.skip_ws();
        let first = self.parse_term()?;
        self.skip_ws();
        let op_pos = self.pos;
        let op = self.parse_operator()?;
        self.skip_ws();
        let second = self.parse_term()?;
        self.skip_ws();
        self.expect('=', "expected '='")?;
        self.skip_ws();
        self.expect('1', "right-hand side must be 1")?;
        self.skip_ws();
        if self.pos != self.src.len() {
            return Err(ParseError::at(self.pos, "unexpected trailing input"));
        }

        use Operator::*;
        use Variable::*;
        let (form, x_term, y_term) = match (first.variable, op, second.variable) {
            (X, Plus, Y) => (EquationForm::Ellipse, first, second),
            (X, Minus, Y) => (EquationForm::HyperbolaHorizontal, first, second),
            (Y, Minus, X) => (EquationForm::HyperbolaVertical, second, first),
            _ => return Err(ParseError::at(op_pos, "unsupported term order")),
        };

        // parse_term rejected zero and non-finite denominators at their own offsets.
        Ok(ParsedConic {
            form,
            center: Pnt2d::from_coords(x_term.center, y_term.center),
            denom_x: x_term.denominator,
            denom_y: y_term.denominator,
        })
    }

    fn parse_term(&mut self) -> Result<SquaredTerm, ParseError> {
        let (variable, center) = if self.eat('(') {
            self.skip_ws();
            let variable = self.parse_variable()?;
            self.skip_ws();
            let sign = self.parse_operator()?;
            self.skip_ws();
            let offset = self.parse_integer()?;
            self.skip_ws();
            self.expect(')', "expected ')'")?;
            // (x - h) has center +h; (x + n) has center -n.
            let center = match sign {
                Operator::Minus => offset,
                Operator::Plus => -offset,
            };
            (variable, center + 0.0)
        } else {
            (self.parse_variable()?, 0.0)
        };

        self.skip_ws();
        self.expect('^', "expected '^2'")?;
        self.skip_ws();
        self.expect('2', "only squared terms are supported")?;
        self.skip_ws();
        self.expect('/', "expected '/' and a denominator")?;
        self.skip_ws();
        let denom_pos = self.pos;
        let denominator = self.parse_integer()?;
        if denominator <= 0.0 {
            return Err(ParseError::at(denom_pos, "denominator must be positive"));
        }

        Ok(SquaredTerm { variable, center, denominator })
    }

    fn parse_variable(&mut self) -> Result<Variable, ParseError> {
        match self.peek() {
            Some('x') | Some('X') => {
                self.bump();
                Ok(Variable::X)
            }
            Some('y') | Some('Y') => {
                self.bump();
                Ok(Variable::Y)
            }
            _ => Err(ParseError::at(self.pos, "expected x or y")),
        }
    }

    fn parse_operator(&mut self) -> Result<Operator, ParseError> {
        match self.peek() {
            Some('+') => {
                self.bump();
                Ok(Operator::Plus)
            }
            Some('-') => {
                self.bump();
                Ok(Operator::Minus)
            }
            _ => Err(ParseError::at(self.pos, "expected '+' or '-'")),
        }
    }

    /// Unsigned decimal integer literal.
    fn parse_integer(&mut self) -> Result<f64, ParseError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.bump();
        }
        if self.pos == start {
            return Err(ParseError::at(start, "expected an integer"));
        }
        match self.src[start..self.pos].parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(ParseError::at(start, "integer literal out of range")),
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char, reason: &'static str) -> Result<(), ParseError> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(ParseError::at(self.pos, reason))
        }
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }
}
