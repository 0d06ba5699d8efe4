/// Answer extraction from a decoded query result.
///
/// This is the one decision surface of the crate: picking which pod carries
/// the answer and handling every way the response can come back unexpected.
/// All "no answer" cases are ordinary return values, never errors.
use crate::model::QueryResult;

/// Returned when the response carries no pods at all, or when the matched
/// pod carries no sub-pods.
pub const MALFORMED_RESPONSE: &str =
    "No solution found. The response might have been malformed.";

/// Returned when no pod title looks like an answer.
pub const NO_SOLUTION: &str = "No solution found.";

/// Returned when the answer pod's first sub-pod has no plain text, which
/// signals an upstream schema-order change.
pub const POD_ORDER_CHANGED: &str =
    "No solution found. The pod order might have changed. Report to devs!";

/// Title fragments that mark an answer-bearing pod. Matching is a plain OR
/// over the lowercased title; there is no ranking among the fragments.
const ANSWER_MARKERS: [&str; 4] = ["solution", "result", "derivative", "decimal form"];

/// Pick the answer text out of a decoded [`QueryResult`].
///
/// Scans pods in server order and takes the first whose title contains one
/// of the answer markers, then returns its first sub-pod's plain text
/// verbatim. Pure function of the tree: no I/O, deterministic.
pub fn extract_solution(result: &QueryResult) -> String {
    if result.pods.is_empty() {
        return MALFORMED_RESPONSE.to_string();
    }

    let Some(pod) = result.pods.iter().find(|pod| {
        let title = pod.title.to_lowercase();
        ANSWER_MARKERS.iter().any(|marker| title.contains(marker))
    }) else {
        return NO_SOLUTION.to_string();
    };

    let Some(sub_pod) = pod.sub_pods.first() else {
        return MALFORMED_RESPONSE.to_string();
    };

    if sub_pod.plain_text.is_empty() {
        return POD_ORDER_CHANGED.to_string();
    }

    sub_pod.plain_text.clone()
}
