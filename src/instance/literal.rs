use std::{fmt, ops::Not};

use crate::error::{Precondition, Result};

use super::Variable;

/// A variable or its negation, stored in the signed DIMACS encoding: the magnitude is the
/// variable and a negative sign marks negation. Nothing outside this type decodes the sign.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal(i64);

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.polarity() {
            write!(f, "{:?}", self.var())
        } else {
            write!(f, "!{:?}", self.var())
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Literal {
    pub fn new(var: Variable, polarity: bool) -> Literal {
        if var.0 == 0 || var.0 > i64::MAX as usize {
            panic!("variable index must be in 1..=i64::MAX, got {}", var.0);
        }
        let magnitude = var.0 as i64;
        Literal(if polarity { magnitude } else { -magnitude })
    }

    pub fn from_dimacs(value: i64) -> Result<Literal> {
        if value == 0 {
            return Err(Precondition::ZeroLiteral.into());
        }
        if value == i64::MIN {
            return Err(Precondition::UnrepresentableLiteral(value).into());
        }
        Ok(Literal(value))
    }

    pub fn to_dimacs(&self) -> i64 {
        self.0
    }

    pub fn var(&self) -> Variable {
        Variable(self.0.unsigned_abs() as usize)
    }

    pub fn polarity(&self) -> bool {
        self.0 > 0
    }

    pub fn invert(&self) -> Literal {
        Literal(-self.0)
    }

    /// Whether `value`, the current value of this literal's variable, makes the literal true.
    pub fn is_satisfied_by(&self, value: bool) -> bool {
        value == self.polarity()
    }
}

impl Not for Literal {
    type Output = Literal;

    fn not(self) -> Literal {
        self.invert()
    }
}

#[cfg(test)]
mod test {
    use crate::{error::*, instance::*};

    #[test]
    fn test_literal_bookkeeping() {
        for idx in vec![1, 3, 1000, 10000000, 1 << 46] {
            let var = Variable(idx);
            let lit = Literal::new(var, true);
            assert_eq!(lit.var(), var);
            assert_eq!(lit.invert().var(), var);
            assert_eq!(lit.polarity(), true);
            assert_eq!(lit.invert().polarity(), false);
            assert_eq!(!lit, lit.invert());
        }
    }

    #[test]
    fn test_dimacs_encoding() {
        let lit = Literal::from_dimacs(-7).unwrap();
        assert_eq!(lit.var(), Variable(7));
        assert!(!lit.polarity());
        assert_eq!(lit.to_dimacs(), -7);
        assert_eq!(lit, Literal::new(Variable(7), false));
        assert_eq!(format!("{:?}", lit), "!x7");
        assert_eq!(format!("{}", lit), "-7");

        assert_eq!(
            Literal::from_dimacs(0),
            Err(SatError::Precondition(Precondition::ZeroLiteral))
        );
    }

    #[test]
    fn test_dimacs_extremes() {
        assert_eq!(
            Literal::from_dimacs(i64::MIN),
            Err(SatError::Precondition(Precondition::UnrepresentableLiteral(
                i64::MIN
            )))
        );

        let lowest = Literal::from_dimacs(i64::MIN + 1).unwrap();
        assert_eq!(lowest.invert().to_dimacs(), i64::MAX);
        assert_eq!(!!lowest, lowest);
        assert_eq!(lowest.var(), Variable(i64::MAX as usize));
    }

    #[test]
    fn test_satisfied_by() {
        let pos = Literal::new(Variable(2), true);
        assert!(pos.is_satisfied_by(true));
        assert!(!pos.is_satisfied_by(false));
        assert!(pos.invert().is_satisfied_by(false));
        assert!(!pos.invert().is_satisfied_by(true));
    }

    #[test]
    #[should_panic]
    fn test_variable_zero_is_rejected() {
        Literal::new(Variable(0), true);
    }
}
