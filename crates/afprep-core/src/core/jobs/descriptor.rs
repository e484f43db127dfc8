use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An AlphaFold3 job descriptor.
///
/// Only the `sequences` list is interpreted; every other top-level field is
/// carried through a flattened map so a load/store round trip never loses
/// data the pipeline does not understand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobDescriptor {
    #[serde(default)]
    pub sequences: Vec<SequenceEntry>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of the `sequences` list.
///
/// Entries without a `protein` mapping (e.g., ligands) are opaque to the
/// enrichment pipeline and pass through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SequenceEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<ProteinEntry>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `protein` sub-mapping of a sequence entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProteinEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<String>,

    #[serde(
        rename = "unpairedMsa",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub unpaired_msa: Option<String>,

    #[serde(rename = "pairedMsa", default, skip_serializing_if = "Option::is_none")]
    pub paired_msa: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProteinEntry {
    /// The amino-acid sequence, empty when the field is absent.
    pub fn sequence(&self) -> &str {
        self.sequence.as_deref().unwrap_or("")
    }
}
