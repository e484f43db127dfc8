use phf::phf_map;

/// Three-letter residue name to one-letter amino-acid code.
///
/// Covers the 20 standard amino acids plus the common histidine protonation
/// variants (HSD/HSE/HSP) emitted by modeling packages.
static ONE_LETTER_CODES: phf::Map<&'static str, char> = phf_map! {
    "ALA" => 'A',
    "ARG" => 'R',
    "ASN" => 'N',
    "ASP" => 'D',
    "CYS" => 'C',
    "GLN" => 'Q',
    "GLU" => 'E',
    "GLY" => 'G',
    "HIS" => 'H',
    "HSD" => 'H',
    "HSE" => 'H',
    "HSP" => 'H',
    "ILE" => 'I',
    "LEU" => 'L',
    "LYS" => 'K',
    "MET" => 'M',
    "PHE" => 'F',
    "PRO" => 'P',
    "SER" => 'S',
    "THR" => 'T',
    "TRP" => 'W',
    "TYR" => 'Y',
    "VAL" => 'V',
};

/// Looks up the one-letter code for a three-letter residue name.
///
/// Returns `None` for anything that is not a recognized amino acid.
pub fn one_letter_code(res_name: &str) -> Option<char> {
    ONE_LETTER_CODES.get(res_name.to_uppercase().as_str()).copied()
}

/// Whether a residue name denotes a standard amino acid.
pub fn is_standard_amino_acid(res_name: &str) -> bool {
    one_letter_code(res_name).is_some()
}
