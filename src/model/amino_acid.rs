//! Amino acid enumeration and code conversions
//!
//! Short labels render residues as lowercase three-letter codes
//! (`ala`, `thr`, ...). One-letter parsing is uppercase-only: lowercase
//! letters in a stored fragment are a formatting error, not an alternate
//! spelling.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Amino acid enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AminoAcid {
    Ala, // A
    Arg, // R
    Asn, // N
    Asp, // D
    Cys, // C
    Gln, // Q
    Glu, // E
    Gly, // G
    His, // H
    Ile, // I
    Leu, // L
    Lys, // K
    Met, // M
    Phe, // F
    Pro, // P
    Pyl, // O (pyrrolysine)
    Sec, // U (selenocysteine)
    Ser, // S
    Thr, // T
    Trp, // W
    Tyr, // Y
    Val, // V
    Ter, // * (stop)
    Xaa, // X (unknown)
}

impl AminoAcid {
    /// Parse from 1-letter code (uppercase only)
    ///
    /// # Examples
    ///
    /// ```
    /// use intact_curate::model::AminoAcid;
    ///
    /// assert_eq!(AminoAcid::from_one_letter('V'), Some(AminoAcid::Val));
    /// assert_eq!(AminoAcid::from_one_letter('v'), None); // lowercase not accepted
    /// ```
    pub fn from_one_letter(c: char) -> Option<Self> {
        match c {
            'A' => Some(Self::Ala),
            'R' => Some(Self::Arg),
            'N' => Some(Self::Asn),
            'D' => Some(Self::Asp),
            'C' => Some(Self::Cys),
            'Q' => Some(Self::Gln),
            'E' => Some(Self::Glu),
            'G' => Some(Self::Gly),
            'H' => Some(Self::His),
            'I' => Some(Self::Ile),
            'L' => Some(Self::Leu),
            'K' => Some(Self::Lys),
            'M' => Some(Self::Met),
            'F' => Some(Self::Phe),
            'O' => Some(Self::Pyl),
            'P' => Some(Self::Pro),
            'U' => Some(Self::Sec),
            'S' => Some(Self::Ser),
            'T' => Some(Self::Thr),
            'W' => Some(Self::Trp),
            'Y' => Some(Self::Tyr),
            'V' => Some(Self::Val),
            '*' => Some(Self::Ter),
            'X' => Some(Self::Xaa),
            _ => None,
        }
    }

    /// Get 1-letter code
    pub fn to_one_letter(&self) -> char {
        match self {
            Self::Ala => 'A',
            Self::Arg => 'R',
            Self::Asn => 'N',
            Self::Asp => 'D',
            Self::Cys => 'C',
            Self::Gln => 'Q',
            Self::Glu => 'E',
            Self::Gly => 'G',
            Self::His => 'H',
            Self::Ile => 'I',
            Self::Leu => 'L',
            Self::Lys => 'K',
            Self::Met => 'M',
            Self::Phe => 'F',
            Self::Pro => 'P',
            Self::Pyl => 'O',
            Self::Sec => 'U',
            Self::Ser => 'S',
            Self::Thr => 'T',
            Self::Trp => 'W',
            Self::Tyr => 'Y',
            Self::Val => 'V',
            Self::Ter => '*',
            Self::Xaa => 'X',
        }
    }

    /// Get the lowercase 3-letter code used in short labels
    pub fn to_label_code(&self) -> &'static str {
        match self {
            Self::Ala => "ala",
            Self::Arg => "arg",
            Self::Asn => "asn",
            Self::Asp => "asp",
            Self::Cys => "cys",
            Self::Gln => "gln",
            Self::Glu => "glu",
            Self::Gly => "gly",
            Self::His => "his",
            Self::Ile => "ile",
            Self::Leu => "leu",
            Self::Lys => "lys",
            Self::Met => "met",
            Self::Phe => "phe",
            Self::Pro => "pro",
            Self::Pyl => "pyl",
            Self::Sec => "sec",
            Self::Ser => "ser",
            Self::Thr => "thr",
            Self::Trp => "trp",
            Self::Tyr => "tyr",
            Self::Val => "val",
            Self::Ter => "ter",
            Self::Xaa => "xaa",
        }
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_label_code())
    }
}
