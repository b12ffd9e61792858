use std::fmt;
use std::str::FromStr;

use crate::api::SimError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pauli {
    I,
    X,
    Y,
    Z,
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Tensor product of single-qubit Paulis, identity on every qubit not listed.
/// Operators are kept sorted by qubit, at most one per qubit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PauliString {
    operators: Vec<(Pauli, usize)>,
}

impl PauliString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(pauli: Pauli, qubit: usize) -> Self {
        Self::new().with_pauli(qubit, pauli)
    }

    /// Adds `pauli` on `qubit`, replacing whatever was there. Identities are dropped.
    pub fn with_pauli(mut self, qubit: usize, pauli: Pauli) -> Self {
        self.operators.retain(|&(_, q)| q != qubit);
        if pauli != Pauli::I {
            self.operators.push((pauli, qubit));
            self.operators.sort_by_key(|&(_, q)| q);
        }
        self
    }

    pub fn operators(&self) -> &[(Pauli, usize)] {
        &self.operators
    }

    pub fn max_qubit(&self) -> Option<usize> {
        self.operators.last().map(|&(_, q)| q)
    }

    /// Eigenvalue (±1) of the string on a computational-basis index, assuming
    /// every qubit has already been rotated into this string's basis.
    pub fn eigenvalue(&self, basis_index: usize) -> f64 {
        let ones = self
            .operators
            .iter()
            .filter(|&&(_, q)| (basis_index >> q) & 1 == 1)
            .count();
        if ones % 2 == 0 { 1.0 } else { -1.0 }
    }
}

impl FromStr for PauliString {
    type Err = SimError;

    /// Parses strings such as `"X0 X1"` or `"z0"`; a lone `"I"` is the identity.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut string = PauliString::new();

        for op in s.split_whitespace() {
            if op.eq_ignore_ascii_case("i") {
                continue;
            }
            if op.len() < 2 || !op.is_char_boundary(1) {
                return Err(SimError::Parse(op.to_string()));
            }
            let (pauli_char, qubit_idx_str) = op.split_at(1);
            let qubit = qubit_idx_str
                .parse::<usize>()
                .map_err(|_| SimError::Parse(op.to_string()))?;

            let pauli = match pauli_char {
                "X" | "x" => Pauli::X,
                "Y" | "y" => Pauli::Y,
                "Z" | "z" => Pauli::Z,
                "I" | "i" => Pauli::I,
                _ => return Err(SimError::Parse(op.to_string())),
            };
            if string.operators.iter().any(|&(_, q)| q == qubit) {
                return Err(SimError::Parse(format!("qubit {} appears twice in '{}'", qubit, s)));
            }
            string = string.with_pauli(qubit, pauli);
        }

        Ok(string)
    }
}

impl fmt::Display for PauliString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.operators.is_empty() {
            return write!(f, "I");
        }
        for (i, (pauli, qubit)) in self.operators.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}{}", pauli, qubit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pauli_string() {
        let string = PauliString::from_str("X1 z0").unwrap();
        assert_eq!(string.operators(), &[(Pauli::Z, 0), (Pauli::X, 1)]);
        assert_eq!(string.to_string(), "Z0 X1");
        assert_eq!(string.max_qubit(), Some(1));
    }

    #[test]
    fn test_identity_factors_are_dropped() {
        let string = PauliString::from_str("I0 Z1").unwrap();
        assert_eq!(string.operators(), &[(Pauli::Z, 1)]);
        assert_eq!(PauliString::from_str("I").unwrap().to_string(), "I");
    }

    #[test]
    fn test_rejects_malformed_strings() {
        assert!(PauliString::from_str("Q0").is_err());
        assert!(PauliString::from_str("X").is_err());
        assert!(PauliString::from_str("Xa").is_err());
        assert!(PauliString::from_str("X0 Z0").is_err());
    }

    #[test]
    fn test_eigenvalue_is_parity() {
        let xx = PauliString::from_str("X0 X1").unwrap();
        assert_eq!(xx.eigenvalue(0b00), 1.0);
        assert_eq!(xx.eigenvalue(0b01), -1.0);
        assert_eq!(xx.eigenvalue(0b10), -1.0);
        assert_eq!(xx.eigenvalue(0b11), 1.0);

        let z1 = PauliString::single(Pauli::Z, 1);
        assert_eq!(z1.eigenvalue(0b01), 1.0);
        assert_eq!(z1.eigenvalue(0b10), -1.0);
    }
}
