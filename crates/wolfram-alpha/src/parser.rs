/// Decoder and serializer for the `<queryresult>` wire schema.
///
/// Decoding either produces a complete [`QueryResult`] tree or fails; a
/// partially populated tree is never returned. Duplicate pod or sub-pod
/// titles violate the collection uniqueness rule and fail the decode.
use tracing::debug;

use crate::error::WolframError;
use crate::model::QueryResult;

/// Parse a raw response body into a [`QueryResult`] tree.
///
/// The body must be non-empty; an empty string is a caller error
/// ([`WolframError::InvalidArgument`]), not a parse failure. Malformed XML
/// and schema violations surface as [`WolframError::Decode`] wrapping the
/// underlying cause.
pub fn parse_query_result(response: &str) -> Result<QueryResult, WolframError> {
    if response.is_empty() {
        return Err(WolframError::InvalidArgument(
            "response text must not be empty".to_string(),
        ));
    }

    let result: QueryResult = quick_xml::de::from_str(response)?;
    debug!(
        success = result.success,
        pods = result.pods.len(),
        "decoded query result"
    );
    Ok(result)
}

/// Serialize a [`QueryResult`] tree back to its XML wire shape.
///
/// Empty serializer output is treated as a failure in its own right.
pub fn serialize_query_result(result: &QueryResult) -> Result<String, WolframError> {
    let xml = quick_xml::se::to_string(result)
        .map_err(|e| WolframError::Serialize(e.to_string()))?;
    if xml.is_empty() {
        return Err(WolframError::Serialize(
            "serializer produced empty output".to_string(),
        ));
    }
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A trimmed but structurally faithful solve response.
    const SAMPLE_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<queryresult success="true" error="false" numpods="2" datatypes="" timedout="" timing="0.472" parsetiming="0.153" parsetimedout="false" recalculate="" version="2.6">
 <pod title="Input interpretation" scanner="Identity" id="Input" position="100" error="false" numsubpods="1">
  <subpod title="">
   <plaintext>solve 2 x + 3 = 11</plaintext>
   <img src="http://www4a.wolframalpha.com/Calculate/MSP/MSP2711.gif" alt="solve 2 x + 3 = 11" title="solve 2 x + 3 = 11" width="125" height="18"/>
  </subpod>
 </pod>
 <pod title="Solution" scanner="Solve" id="Solution" position="200" error="false" numsubpods="1">
  <subpod title="">
   <plaintext>x = 4</plaintext>
  </subpod>
 </pod>
</queryresult>"#;

    #[test]
    fn parses_sample_response() {
        let result = parse_query_result(SAMPLE_RESPONSE).unwrap();

        assert!(result.success);
        assert!(!result.error);
        assert_eq!(result.num_pods, 2);
        assert_eq!(result.timed_out, "");
        assert_eq!(result.timing, 0.472);
        assert_eq!(result.parse_timing, 0.153);
        assert!(!result.parse_timed_out);
        assert_eq!(result.version, "2.6");
        assert_eq!(result.pods.len(), 2);

        let input = &result.pods[0];
        assert_eq!(input.title, "Input interpretation");
        assert_eq!(input.scanner, "Identity");
        assert_eq!(input.id, "Input");
        assert_eq!(input.position, 100);
        assert_eq!(input.num_sub_pods, 1);
        assert_eq!(input.sub_pods[0].plain_text, "solve 2 x + 3 = 11");

        let img = input.sub_pods[0].image.as_ref().unwrap();
        assert_eq!(img.alt, "solve 2 x + 3 = 11");
        assert_eq!(img.width, 125);
        assert_eq!(img.height, 18);

        let solution = result.pods.get("Solution").unwrap();
        assert_eq!(solution.sub_pods[0].plain_text, "x = 4");
        assert!(solution.sub_pods[0].image.is_none());
    }

    #[test]
    fn empty_input_is_an_invalid_argument_not_a_parse_error() {
        let err = parse_query_result("").unwrap_err();
        assert!(matches!(err, WolframError::InvalidArgument(_)));
    }

    #[test]
    fn malformed_xml_fails_with_decode_error() {
        let err = parse_query_result("this is not xml").unwrap_err();
        assert!(matches!(err, WolframError::Decode(_)));

        let err = parse_query_result("<queryresult><pod></queryresult>").unwrap_err();
        assert!(matches!(err, WolframError::Decode(_)));
    }

    #[test]
    fn missing_attributes_decode_to_defaults() {
        let result = parse_query_result("<queryresult/>").unwrap();

        assert!(!result.success);
        assert!(!result.error);
        assert_eq!(result.num_pods, 0);
        assert_eq!(result.data_types, "");
        assert_eq!(result.timing, 0.0);
        assert_eq!(result.recalculate, "");
        assert!(result.pods.is_empty());
    }

    #[test]
    fn missing_plaintext_decodes_to_empty_string() {
        let result = parse_query_result(
            r#"<queryresult numpods="1"><pod title="Solution"><subpod title=""/></pod></queryresult>"#,
        )
        .unwrap();
        assert_eq!(result.pods[0].sub_pods[0].plain_text, "");
    }

    #[test]
    fn duplicate_pod_titles_fail_the_decode() {
        let response = r#"<queryresult numpods="2">
 <pod title="Result"><subpod title=""><plaintext>1</plaintext></subpod></pod>
 <pod title="Result"><subpod title=""><plaintext>2</plaintext></subpod></pod>
</queryresult>"#;

        let err = parse_query_result(response).unwrap_err();
        assert!(matches!(err, WolframError::Decode(_)));
        assert!(err.to_string().contains("duplicate title"));
    }

    #[test]
    fn distinct_subpod_titles_in_one_pod_decode_fine() {
        let response = r#"<queryresult numpods="1">
 <pod title="Solution" numsubpods="2">
  <subpod title="Real solution"><plaintext>x = 4</plaintext></subpod>
  <subpod title="Complex solution"><plaintext>x = -4 i</plaintext></subpod>
 </pod>
</queryresult>"#;

        let result = parse_query_result(response).unwrap();
        let pod = &result.pods[0];
        assert_eq!(pod.sub_pods.len(), 2);
        assert_eq!(pod.sub_pods.get("Real solution").unwrap().plain_text, "x = 4");
        assert_eq!(
            pod.sub_pods.get("Complex solution").unwrap().plain_text,
            "x = -4 i"
        );
    }

    #[test]
    fn duplicate_subpod_titles_fail_the_decode() {
        let response = r#"<queryresult numpods="1">
 <pod title="Solution" numsubpods="2">
  <subpod title=""><plaintext>x = 4</plaintext></subpod>
  <subpod title=""><plaintext>x = -4</plaintext></subpod>
 </pod>
</queryresult>"#;

        let err = parse_query_result(response).unwrap_err();
        assert!(matches!(err, WolframError::Decode(_)));
    }

    #[test]
    fn serialized_output_is_never_empty() {
        let xml = serialize_query_result(&QueryResult::default()).unwrap();
        assert!(!xml.is_empty());
        assert!(xml.contains("queryresult"));
    }

    #[test]
    fn round_trip_preserves_the_tree() {
        let decoded = parse_query_result(SAMPLE_RESPONSE).unwrap();
        let serialized = serialize_query_result(&decoded).unwrap();
        let redecoded = parse_query_result(&serialized).unwrap();

        assert_eq!(decoded, redecoded);
    }
}
