use nalgebra::Point3;

#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub serial: usize,         // Atom serial number from the source file
    pub name: String,          // Atom name (e.g., "CA", "N", "C")
    pub alt_loc: char,         // Alternate location indicator (' ' when unset)
    pub position: Point3<f64>, // Cartesian coordinates in Angstroms
}

impl Atom {
    pub fn new(serial: usize, name: &str, alt_loc: char, position: Point3<f64>) -> Self {
        Self {
            serial,
            name: name.to_string(),
            alt_loc,
            position,
        }
    }

    /// Euclidean distance to another atom, in Angstroms.
    pub fn distance_to(&self, other: &Atom) -> f64 {
        (self.position - other.position).norm()
    }
}
