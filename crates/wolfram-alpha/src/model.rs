/// Typed view of the v2 query API response.
///
/// The tree is `queryresult` → `pod` (repeated) → `subpod` (repeated) with an
/// optional `img` leaf. It is constructed once per request by the decoder and
/// immutable afterwards; each node is owned exclusively by its parent.
/// Missing attributes decode to their defaults: `false`, `0`, or empty.
use serde::{Deserialize, Serialize};

use crate::collections::{Titled, TitledList};

/// The decoded `<queryresult>` root element of a response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "queryresult")]
pub struct QueryResult {
    /// Whether the query was understood and processed.
    #[serde(rename = "@success", default)]
    pub success: bool,

    /// Whether the service reported an error.
    #[serde(rename = "@error", default)]
    pub error: bool,

    /// Declared pod count. Should equal `pods.len()`, but consumers must
    /// tolerate a mismatch.
    #[serde(rename = "@numpods", default)]
    pub num_pods: u32,

    /// Data types passed in the response. Usually blank.
    #[serde(rename = "@datatypes", default)]
    pub data_types: String,

    /// Raw timeout marker. Kept as text because the service leaves it empty
    /// rather than boolean.
    #[serde(rename = "@timedout", default)]
    pub timed_out: String,

    /// Time the query took, in seconds.
    #[serde(rename = "@timing", default)]
    pub timing: f64,

    /// Time spent parsing the input, in seconds.
    #[serde(rename = "@parsetiming", default)]
    pub parse_timing: f64,

    /// Whether input parsing timed out.
    #[serde(rename = "@parsetimedout", default)]
    pub parse_timed_out: bool,

    /// Recalculation token. Empty when no recalculation is offered.
    #[serde(rename = "@recalculate", default)]
    pub recalculate: String,

    /// API version string.
    #[serde(rename = "@version", default)]
    pub version: String,

    /// Pods in server order.
    #[serde(rename = "pod", default)]
    pub pods: TitledList<Pod>,
}

/// One labeled section of the answer (e.g. "Input interpretation",
/// "Solution").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pod {
    /// Pod title, the key used for answer extraction and lookups.
    #[serde(rename = "@title", default)]
    pub title: String,

    /// Scanner that produced the pod. Opaque, informational only.
    #[serde(rename = "@scanner", default)]
    pub scanner: String,

    /// Pod identifier.
    #[serde(rename = "@id", default)]
    pub id: String,

    /// Display/processing order as given by the server.
    #[serde(rename = "@position", default)]
    pub position: u32,

    /// Whether the service reported an error for this pod.
    #[serde(rename = "@error", default)]
    pub error: bool,

    /// Declared sub-pod count.
    #[serde(rename = "@numsubpods", default)]
    pub num_sub_pods: u32,

    /// Sub-pods in server order.
    #[serde(rename = "subpod", default)]
    pub sub_pods: TitledList<SubPod>,
}

impl Titled for Pod {
    fn title(&self) -> &str {
        &self.title
    }
}

/// Title-based convenience equality, case-sensitive.
impl PartialEq<str> for Pod {
    fn eq(&self, other: &str) -> bool {
        self.title == other
    }
}

impl PartialEq<&str> for Pod {
    fn eq(&self, other: &&str) -> bool {
        self.title == *other
    }
}

/// The leaf answer unit inside a pod.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubPod {
    /// Sub-pod title. Often empty.
    #[serde(rename = "@title", default)]
    pub title: String,

    /// Plain-text rendering of the content. May be empty.
    #[serde(rename = "plaintext", default)]
    pub plain_text: String,

    /// Image rendering, when the service provides one.
    #[serde(rename = "img", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

impl Titled for SubPod {
    fn title(&self) -> &str {
        &self.title
    }
}

/// Title-based convenience equality, case-sensitive.
impl PartialEq<str> for SubPod {
    fn eq(&self, other: &str) -> bool {
        self.title == other
    }
}

impl PartialEq<&str> for SubPod {
    fn eq(&self, other: &&str) -> bool {
        self.title == *other
    }
}

/// Descriptor of the image rendering of a sub-pod.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Source URL where the image resides.
    #[serde(rename = "@src", default)]
    pub src: String,

    /// Alternative form, usually the text representation of the image.
    #[serde(rename = "@alt", default)]
    pub alt: String,

    #[serde(rename = "@title", default)]
    pub title: String,

    /// Width in pixels.
    #[serde(rename = "@width", default)]
    pub width: u32,

    /// Height in pixels.
    #[serde(rename = "@height", default)]
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pod_equals_bare_title_string() {
        let pod = Pod {
            title: "Solution".to_string(),
            ..Pod::default()
        };
        assert!(pod == "Solution");
        assert!(pod != "solution");
    }

    #[test]
    fn structural_equality_covers_all_fields() {
        let a = Pod {
            title: "Result".to_string(),
            position: 200,
            ..Pod::default()
        };
        let mut b = a.clone();
        assert_eq!(a, b);

        b.position = 300;
        assert_ne!(a, b);
    }
}
