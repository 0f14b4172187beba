//! Alphabet labels for biological sequences.
//!
//! An [`Alphabet`] names the symbol set a sequence is drawn from. It exists
//! to be reduced to its plain IUPAC letter string during normalization, so a
//! serialized record carries `"ACGTNRYSWKMBDHV"` rather than an opaque
//! descriptor.

use serde::{Deserialize, Serialize};

/// The symbol set a sequence is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alphabet {
    /// IUPAC DNA: `ACGTNRYSWKMBDHV`.
    Dna,
    /// IUPAC RNA: `ACGUNRYSWKMBDHV`.
    Rna,
    /// 20 standard amino acids plus `XBZJUO*`.
    Protein,
}

impl Alphabet {
    /// Human-readable name (e.g. "DNA").
    pub fn name(self) -> &'static str {
        match self {
            Alphabet::Dna => "DNA",
            Alphabet::Rna => "RNA",
            Alphabet::Protein => "Protein",
        }
    }

    /// The plain symbol-set string this label reduces to.
    pub fn letters(self) -> &'static str {
        match self {
            Alphabet::Dna => "ACGTNRYSWKMBDHV",
            Alphabet::Rna => "ACGUNRYSWKMBDHV",
            Alphabet::Protein => "ACDEFGHIKLMNPQRSTVWYXBZJUO*",
        }
    }

    /// Map a GenBank molecule type (e.g. "DNA", "mRNA", "ss-DNA") to an
    /// alphabet label. Returns `None` for molecule types that name neither
    /// nucleic acid kind.
    pub fn from_molecule_type(molecule_type: &str) -> Option<Alphabet> {
        let upper = molecule_type.to_ascii_uppercase();
        if upper.contains("RNA") {
            Some(Alphabet::Rna)
        } else if upper.contains("DNA") {
            Some(Alphabet::Dna)
        } else if upper.contains("PROTEIN") || upper.contains("AA") {
            Some(Alphabet::Protein)
        } else {
            None
        }
    }

    /// Infer an alphabet from raw sequence letters.
    ///
    /// DNA wins over RNA when a sequence fits both (no `U` seen); anything
    /// outside both nucleotide sets is treated as protein.
    pub fn infer(letters: &[u8]) -> Alphabet {
        let mut dna = true;
        let mut rna = true;
        for &b in letters {
            let b = b.to_ascii_uppercase();
            if !Alphabet::Dna.letters().as_bytes().contains(&b) {
                dna = false;
            }
            if !Alphabet::Rna.letters().as_bytes().contains(&b) {
                rna = false;
            }
            if !dna && !rna {
                return Alphabet::Protein;
            }
        }
        if dna {
            Alphabet::Dna
        } else {
            Alphabet::Rna
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_dna() {
        assert_eq!(Alphabet::infer(b"ACGTACGT"), Alphabet::Dna);
        assert_eq!(Alphabet::infer(b"acgtn"), Alphabet::Dna);
    }

    #[test]
    fn infer_rna() {
        assert_eq!(Alphabet::infer(b"ACGUACGU"), Alphabet::Rna);
    }

    #[test]
    fn infer_protein() {
        assert_eq!(Alphabet::infer(b"MKAILVQE"), Alphabet::Protein);
    }

    #[test]
    fn empty_defaults_to_dna() {
        assert_eq!(Alphabet::infer(b""), Alphabet::Dna);
    }

    #[test]
    fn molecule_type_mapping() {
        assert_eq!(Alphabet::from_molecule_type("DNA"), Some(Alphabet::Dna));
        assert_eq!(Alphabet::from_molecule_type("mRNA"), Some(Alphabet::Rna));
        assert_eq!(Alphabet::from_molecule_type("ss-DNA"), Some(Alphabet::Dna));
        assert_eq!(Alphabet::from_molecule_type("unknown"), None);
    }

    #[test]
    fn letters_are_plain_strings() {
        assert_eq!(Alphabet::Dna.letters(), "ACGTNRYSWKMBDHV");
        assert_eq!(Alphabet::Rna.letters(), "ACGUNRYSWKMBDHV");
    }
}
