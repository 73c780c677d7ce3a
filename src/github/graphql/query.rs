use serde_json::{Map, Value};

use super::events::EventDescriptor;

// Three placeholder tokens, each replaced exactly once: declared variables,
// the repositories-contributed fragment, the remaining event fragments.
const QUERY_TEMPLATE: &str = "query($user:String!,:variable_declaration){user(login:$user){login,:repositoriesContributedTo:event_type}}";

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct GraphqlRequest {
    pub query: String,
    pub variables: Map<String, Value>,
}

/// Builds one query document fetching every given event connection for
/// `user`, plus the bindings for their pagination cursors. The repo
/// contribution fragment, when present, precedes the event fragments;
/// event fragments keep their input order.
pub fn generate(
    events: &[EventDescriptor],
    user: &str,
    repo_contribution: Option<&EventDescriptor>,
) -> GraphqlRequest {
    let mut variables = Map::new();
    variables.insert("user".to_string(), Value::String(user.to_string()));

    let mut declaration = String::new();
    let mut repo_fragment = String::new();
    let mut event_fragments = String::new();

    if let Some(repo) = repo_contribution {
        for spec in &repo.variables {
            variables.insert(spec.name.to_string(), spec.value.clone());
            declaration.push_str(&format!("${}:{},", spec.name, spec.ty));
        }
        repo_fragment.push_str(repo.query);
        repo_fragment.push(',');
    }

    for event in events {
        for spec in &event.variables {
            variables.insert(spec.name.to_string(), spec.value.clone());
            declaration.push_str(&format!("${}:{},", spec.name, spec.ty));
        }
        event_fragments.push_str(event.query);
        event_fragments.push(',');
    }

    let query = QUERY_TEMPLATE
        .replacen(":variable_declaration", &declaration, 1)
        .replacen(":event_type", &event_fragments, 1)
        .replacen(":repositoriesContributedTo", &repo_fragment, 1);

    GraphqlRequest { query, variables }
}
