//! Request/response shapes of the Sanity mutation endpoint, trimmed to the
//! single operation this site performs: creating a document.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct MutationRequest {
    pub mutations: Vec<Mutation>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Mutation {
    Create(Value),
}

impl MutationRequest {
    pub fn create(document: Value) -> Self {
        Self {
            mutations: vec![Mutation::Create(document)],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationResponse {
    pub transaction_id: String,
    #[serde(default)]
    pub results: Vec<MutationResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MutationResult {
    pub id: String,
    #[serde(default)]
    pub operation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_request_serializes_to_mutation_array() {
        let request = MutationRequest::create(json!({ "_type": "contactRequest" }));
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({ "mutations": [ { "create": { "_type": "contactRequest" } } ] })
        );
    }

    #[test]
    fn response_decodes_ids() {
        let response: MutationResponse = serde_json::from_value(json!({
            "transactionId": "tx1",
            "results": [ { "id": "drafts.abc", "operation": "create" } ]
        }))
        .unwrap();
        assert_eq!(response.results[0].id, "drafts.abc");
    }
}
